//! Append-only event log writer.
//!
//! One line per event:
//!
//! ```text
//! 2026-08-28 14:03:11 - Object person_1 (person) entered Production Area
//! ```
//!
//! with the verb one of `entered`, `exited` or `exited (timeout)`. Zone ids
//! with no definition in the zone set render as `Unknown`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::DateTime;

use crate::monitor::{ZoneError, ZoneEvent, ZoneSet};

/// Writes zone events to any sink in the wire format above.
pub struct EventLog<W: Write> {
    writer: W,
}

impl EventLog<BufWriter<File>> {
    /// Create (truncate) a log file and write the session header.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ZoneError> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> EventLog<W> {
    /// Wrap a writer and emit the session header.
    pub fn new(mut writer: W) -> Result<Self, ZoneError> {
        let started = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(writer, "Person Zone Monitoring Log - Started at {started}")?;
        writeln!(writer, "{}", "-".repeat(50))?;
        Ok(Self { writer })
    }

    /// Append one event line, resolving the zone name through `zones`.
    pub fn write_event(&mut self, event: &ZoneEvent, zones: &ZoneSet) -> Result<(), ZoneError> {
        let timestamp = DateTime::from_timestamp(event.timestamp as i64, 0)
            .unwrap_or_default()
            .format("%Y-%m-%d %H:%M:%S");
        writeln!(
            self.writer,
            "{timestamp} - Object {} ({}) {} {}",
            event.object_id,
            event.category,
            event.kind.verb(),
            zones.name_of(&event.zone_id),
        )?;
        Ok(())
    }

    pub fn write_events<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a ZoneEvent>,
        zones: &ZoneSet,
    ) -> Result<(), ZoneError> {
        for event in events {
            self.write_event(event, zones)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), ZoneError> {
        Ok(self.writer.flush()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::EventKind;

    #[test]
    fn test_line_format() {
        let mut log = EventLog::new(Vec::new()).unwrap();
        let zones = ZoneSet::default_layout();

        // 2021-01-01 00:00:00 UTC
        let event = ZoneEvent::new(1609459200.0, "person_1", "person", "zone1", EventKind::Entered);
        log.write_event(&event, &zones).unwrap();

        let text = String::from_utf8(log.writer).unwrap();
        let line = text.lines().last().unwrap();
        assert_eq!(
            line,
            "2021-01-01 00:00:00 - Object person_1 (person) entered Production Area"
        );
    }

    #[test]
    fn test_header_and_unknown_zone() {
        let mut log = EventLog::new(Vec::new()).unwrap();
        let zones = ZoneSet::new();

        let event = ZoneEvent::new(1609459200.0, "person_2", "person", "zone9", EventKind::TimedOut);
        log.write_event(&event, &zones).unwrap();

        let text = String::from_utf8(log.writer).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("Person Zone Monitoring Log - Started at "));
        assert_eq!(lines.next().unwrap(), "-".repeat(50));
        assert!(lines
            .next()
            .unwrap()
            .ends_with("Object person_2 (person) exited (timeout) Unknown"));
    }

    #[test]
    fn test_file_log_appends_events() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zone_entries.log");
        let zones = ZoneSet::default_layout();

        {
            let mut log = EventLog::create(&path).unwrap();
            log.write_events(
                [
                    &ZoneEvent::new(10.0, "person_1", "person", "zone1", EventKind::Entered),
                    &ZoneEvent::new(12.0, "person_1", "person", "zone1", EventKind::Exited),
                ],
                &zones,
            )
            .unwrap();
            log.flush().unwrap();
        }

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("entered Production Area"));
        assert!(text.contains("exited Production Area"));
    }
}
