//! Per-frame occupancy tally.

/// Which objects were classified into which zone during one frame.
///
/// Purely derived from the frame's classification results; rebuilt every
/// frame, never persisted, and has no effect on track state or events.
/// Zones appear in the order they first received an occupant this frame,
/// occupants in detection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OccupancyFrame {
    entries: Vec<(String, Vec<String>)>,
}

impl OccupancyFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `object_id` occupies `zone_id` this frame.
    pub fn record(&mut self, zone_id: &str, object_id: &str) {
        match self.entries.iter_mut().find(|(id, _)| id == zone_id) {
            Some((_, occupants)) => occupants.push(object_id.to_string()),
            None => self
                .entries
                .push((zone_id.to_string(), vec![object_id.to_string()])),
        }
    }

    /// Occupant ids for a zone, empty when nobody was classified into it.
    pub fn occupants(&self, zone_id: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(id, _)| id == zone_id)
            .map(|(_, occupants)| occupants.as_slice())
            .unwrap_or(&[])
    }

    pub fn count(&self, zone_id: &str) -> usize {
        self.occupants(zone_id).len()
    }

    /// Iterate (zone id, occupant count) pairs for display.
    pub fn counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(id, occupants)| (id.as_str(), occupants.len()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(id, occupants)| (id.as_str(), occupants.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_count() {
        let mut frame = OccupancyFrame::new();
        frame.record("zone1", "person_1");
        frame.record("zone2", "person_2");
        frame.record("zone1", "person_3");

        assert_eq!(frame.count("zone1"), 2);
        assert_eq!(frame.count("zone2"), 1);
        assert_eq!(frame.count("zone3"), 0);
        assert_eq!(frame.occupants("zone1"), ["person_1", "person_3"]);
    }

    #[test]
    fn test_counts_in_first_seen_order() {
        let mut frame = OccupancyFrame::new();
        frame.record("zone2", "person_1");
        frame.record("zone1", "person_2");

        let counts: Vec<(&str, usize)> = frame.counts().collect();
        assert_eq!(counts, [("zone2", 1), ("zone1", 1)]);
    }
}
