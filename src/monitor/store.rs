//! Zone set persistence and id/color allocation.
//!
//! The on-disk format is a JSON map from zone id to
//! `{"name": ..., "color": [r, g, b], "points": [[x, y], ...]}`. Key order
//! is whatever order the zones were defined in; a load→save→load round trip
//! is structurally identical.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use rand::Rng;
use tracing::warn;

use crate::monitor::error::ZoneError;
use crate::monitor::zone::{Color, ZoneSet};

/// Fixed color palette, tried in order when a new zone is defined.
pub const PALETTE: [(&str, Color); 8] = [
    ("green", Color(0, 255, 0)),
    ("orange", Color(255, 165, 0)),
    ("red", Color(255, 0, 0)),
    ("purple", Color(128, 0, 128)),
    ("blue", Color(0, 0, 255)),
    ("cyan", Color(0, 255, 255)),
    ("magenta", Color(255, 0, 255)),
    ("yellow", Color(255, 255, 0)),
];

/// Result of a color allocation.
///
/// Once all palette entries are taken the allocator falls back to a
/// uniformly random RGB triple, so allocation is observably non-deterministic
/// past eight zones. The variant keeps that explicit for callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorAllocation {
    /// A named palette color was free.
    Palette { name: &'static str, color: Color },
    /// Palette exhausted; color drawn at random.
    Random(Color),
}

impl ColorAllocation {
    pub fn color(&self) -> Color {
        match *self {
            ColorAllocation::Palette { color, .. } => color,
            ColorAllocation::Random(color) => color,
        }
    }
}

impl ZoneSet {
    /// Parse a zone set from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ZoneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a zone set from any reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, ZoneError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a zone set from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ZoneError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn to_json_string(&self) -> Result<String, ZoneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_writer(&self, writer: impl Write) -> Result<(), ZoneError> {
        Ok(serde_json::to_writer_pretty(writer, self)?)
    }

    /// Save the zone set to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ZoneError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// First unused id of the form `zone<N>` for N = 1, 2, ...
    pub fn allocate_id(&self) -> String {
        let mut n = 1;
        loop {
            let id = format!("zone{n}");
            if !self.contains(&id) {
                return id;
            }
            n += 1;
        }
    }

    /// First palette color not used by an existing zone, or a random color
    /// once the palette is exhausted.
    pub fn allocate_color(&self) -> ColorAllocation {
        for (name, color) in PALETTE {
            if !self.iter().any(|(_, zone)| zone.color == color) {
                return ColorAllocation::Palette { name, color };
            }
        }
        let mut rng = rand::thread_rng();
        let color = Color(rng.r#gen(), rng.r#gen(), rng.r#gen());
        warn!(zones = self.len(), "zone palette exhausted, using random color");
        ColorAllocation::Random(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::zone::{Point, Zone};

    fn square(offset: i32) -> Vec<Point> {
        vec![
            Point::new(offset, 0),
            Point::new(offset + 10, 0),
            Point::new(offset + 10, 10),
            Point::new(offset, 10),
        ]
    }

    #[test]
    fn test_allocate_id_skips_used() {
        let mut zones = ZoneSet::new();
        assert_eq!(zones.allocate_id(), "zone1");

        zones
            .define("zone1", Zone::new("A", Color(0, 255, 0), square(0)))
            .unwrap();
        zones
            .define("zone2", Zone::new("B", Color(255, 165, 0), square(20)))
            .unwrap();
        assert_eq!(zones.allocate_id(), "zone3");
    }

    #[test]
    fn test_allocate_id_fills_gaps() {
        let mut zones = ZoneSet::new();
        zones
            .define("zone2", Zone::new("B", Color(255, 165, 0), square(0)))
            .unwrap();
        assert_eq!(zones.allocate_id(), "zone1");
    }

    #[test]
    fn test_allocate_color_walks_palette() {
        let mut zones = ZoneSet::new();
        assert_eq!(
            zones.allocate_color(),
            ColorAllocation::Palette {
                name: "green",
                color: Color(0, 255, 0)
            }
        );

        zones
            .define("zone1", Zone::new("A", Color(0, 255, 0), square(0)))
            .unwrap();
        assert_eq!(
            zones.allocate_color(),
            ColorAllocation::Palette {
                name: "orange",
                color: Color(255, 165, 0)
            }
        );
    }

    #[test]
    fn test_allocate_color_falls_back_to_random() {
        let mut zones = ZoneSet::new();
        for (i, (_, color)) in PALETTE.iter().enumerate() {
            zones
                .define(
                    format!("zone{}", i + 1),
                    Zone::new(format!("Z{i}"), *color, square(i as i32 * 20)),
                )
                .unwrap();
        }
        assert!(matches!(
            zones.allocate_color(),
            ColorAllocation::Random(_)
        ));
    }

    #[test]
    fn test_json_round_trip_is_identical() {
        let mut zones = ZoneSet::new();
        zones
            .define(
                "zone1",
                Zone::new("Production Area", Color(0, 255, 0), square(0)),
            )
            .unwrap();
        zones
            .define(
                "zone2",
                Zone::new("Storage Area", Color(255, 165, 0), square(40)),
            )
            .unwrap();

        let json = zones.to_json_string().unwrap();
        let reloaded = ZoneSet::from_json_str(&json).unwrap();
        assert_eq!(zones, reloaded);

        // Second round trip must not drift either.
        let json_again = reloaded.to_json_string().unwrap();
        assert_eq!(json, json_again);
    }

    #[test]
    fn test_file_round_trip() {
        let zones = ZoneSet::default_layout();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zones.json");

        zones.save(&path).unwrap();
        let reloaded = ZoneSet::load(&path).unwrap();
        assert_eq!(zones, reloaded);
    }

    #[test]
    fn test_malformed_source_is_parse_error() {
        let result = ZoneSet::from_json_str("{\"zone1\": {\"name\": 12}}");
        assert!(matches!(result, Err(ZoneError::Parse(_))));
    }
}
