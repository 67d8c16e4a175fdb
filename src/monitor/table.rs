//! Per-object zone-state table: event derivation and timeout eviction.

use tracing::trace;

use crate::monitor::event::{EventKind, ZoneEvent};
use crate::monitor::track::Track;

/// Mapping object id → [`Track`], in insertion order.
///
/// The table is the single owner of track state; only [`observe`] mutates it
/// during a frame and only [`evict_stale`] removes entries. Insertion order
/// is kept so eviction emits events deterministically.
///
/// [`observe`]: TrackTable::observe
/// [`evict_stale`]: TrackTable::evict_stale
#[derive(Debug, Default)]
pub struct TrackTable {
    tracks: Vec<(String, Track)>,
}

impl TrackTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, object_id: &str) -> Option<&Track> {
        self.tracks
            .iter()
            .find(|(id, _)| id == object_id)
            .map(|(_, t)| t)
    }

    fn get_mut(&mut self, object_id: &str) -> Option<&mut Track> {
        self.tracks
            .iter_mut()
            .find(|(id, _)| id == object_id)
            .map(|(_, t)| t)
    }

    /// Record one frame's classification result for an object and derive the
    /// entry/exit events it implies.
    ///
    /// - Unknown object inside a zone: track created, `Entered` emitted.
    /// - Unknown object outside every zone: nothing happens; such objects
    ///   are simply not tracked.
    /// - Known object in a different zone: `Exited(old)` then `Entered(new)`,
    ///   in that order.
    /// - Known object in the same zone: `last_seen` refreshed, no event.
    /// - Known object outside every zone: the track is left untouched, with
    ///   `last_seen` NOT refreshed and no exit emitted. The object "goes
    ///   silent" and is removed only by timeout eviction. Inherited behavior,
    ///   kept because changing it changes observable event sequences.
    pub fn observe(
        &mut self,
        object_id: &str,
        category: &str,
        zone: Option<&str>,
        now: f64,
    ) -> Vec<ZoneEvent> {
        let mut events = Vec::new();

        let Some(zone) = zone else {
            trace!(object_id, "object outside all zones, track not refreshed");
            return events;
        };

        match self.get_mut(object_id) {
            None => {
                events.push(ZoneEvent::new(
                    now,
                    object_id,
                    category,
                    zone,
                    EventKind::Entered,
                ));
                self.tracks.push((
                    object_id.to_string(),
                    Track {
                        zone: zone.to_string(),
                        category: category.to_string(),
                        last_seen: now,
                    },
                ));
            }
            Some(track) if track.zone != zone => {
                events.push(ZoneEvent::new(
                    now,
                    object_id,
                    category,
                    track.zone.clone(),
                    EventKind::Exited,
                ));
                events.push(ZoneEvent::new(
                    now,
                    object_id,
                    category,
                    zone,
                    EventKind::Entered,
                ));
                track.zone = zone.to_string();
                track.last_seen = now;
            }
            Some(track) => {
                track.last_seen = now;
            }
        }

        events
    }

    /// Remove every track not refreshed within `timeout` seconds, emitting a
    /// `TimedOut` event per removal in table insertion order.
    ///
    /// This is the only path that removes a track, including tracks whose
    /// object left all zones and went silent.
    pub fn evict_stale(&mut self, now: f64, timeout: f64) -> Vec<ZoneEvent> {
        let mut events = Vec::new();
        let mut kept = Vec::with_capacity(self.tracks.len());

        for (id, track) in self.tracks.drain(..) {
            if now - track.last_seen > timeout {
                trace!(object_id = %id, zone = %track.zone, "track timed out");
                events.push(ZoneEvent {
                    timestamp: now,
                    object_id: id,
                    category: track.category,
                    zone_id: track.zone,
                    kind: EventKind::TimedOut,
                });
            } else {
                kept.push((id, track));
            }
        }

        self.tracks = kept;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_in_zone_enters() {
        let mut table = TrackTable::new();
        let events = table.observe("p1", "Person", Some("zone1"), 1.0);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Entered);
        assert_eq!(events[0].zone_id, "zone1");
        assert_eq!(events[0].object_id, "p1");

        let track = table.get("p1").unwrap();
        assert_eq!(track.zone, "zone1");
        assert_eq!(track.last_seen, 1.0);
    }

    #[test]
    fn test_first_observation_outside_zones_is_ignored() {
        let mut table = TrackTable::new();
        let events = table.observe("p1", "Person", None, 1.0);
        assert!(events.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_zone_change_exits_then_enters() {
        let mut table = TrackTable::new();
        table.observe("p1", "Person", Some("zone1"), 1.0);
        let events = table.observe("p1", "Person", Some("zone2"), 2.0);

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, EventKind::Exited);
        assert_eq!(events[0].zone_id, "zone1");
        assert_eq!(events[1].kind, EventKind::Entered);
        assert_eq!(events[1].zone_id, "zone2");

        let track = table.get("p1").unwrap();
        assert_eq!(track.zone, "zone2");
        assert_eq!(track.last_seen, 2.0);
    }

    #[test]
    fn test_same_zone_refreshes_without_events() {
        let mut table = TrackTable::new();
        table.observe("p1", "Person", Some("zone1"), 1.0);
        let events = table.observe("p1", "Person", Some("zone1"), 1.5);

        assert!(events.is_empty());
        assert_eq!(table.get("p1").unwrap().last_seen, 1.5);
    }

    #[test]
    fn test_leaving_all_zones_goes_silent() {
        let mut table = TrackTable::new();
        table.observe("p1", "Person", Some("zone1"), 1.0);
        let events = table.observe("p1", "Person", None, 1.5);

        // No exit event and no refresh; the timeout clock keeps running
        // from the last in-zone observation.
        assert!(events.is_empty());
        let track = table.get("p1").unwrap();
        assert_eq!(track.zone, "zone1");
        assert_eq!(track.last_seen, 1.0);
    }

    #[test]
    fn test_eviction_after_timeout() {
        let mut table = TrackTable::new();
        table.observe("p1", "Person", Some("zone1"), 1.0);

        // Not stale yet at exactly the timeout boundary.
        assert!(table.evict_stale(3.0, 2.0).is_empty());

        let events = table.evict_stale(3.01, 2.0);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::TimedOut);
        assert_eq!(events[0].zone_id, "zone1");
        assert!(table.is_empty());
    }

    #[test]
    fn test_reappearance_after_eviction_is_a_fresh_entry() {
        let mut table = TrackTable::new();
        table.observe("p1", "Person", Some("zone1"), 1.0);
        table.evict_stale(4.0, 2.0);

        let events = table.observe("p1", "Person", Some("zone1"), 5.0);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Entered);
    }

    #[test]
    fn test_eviction_order_is_insertion_order() {
        let mut table = TrackTable::new();
        table.observe("p1", "Person", Some("zone1"), 1.0);
        table.observe("p2", "Person", Some("zone2"), 1.0);
        table.observe("p3", "Person", Some("zone1"), 1.0);

        let events = table.evict_stale(10.0, 2.0);
        let ids: Vec<&str> = events.iter().map(|e| e.object_id.as_str()).collect();
        assert_eq!(ids, ["p1", "p2", "p3"]);
    }
}
