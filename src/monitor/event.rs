/// What happened to an object with respect to a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Object was first seen in the zone, or moved into it
    Entered,
    /// Object moved out of the zone into another one
    Exited,
    /// Object's track went stale and was evicted
    TimedOut,
}

impl EventKind {
    /// Verb used in the event log wire format.
    pub fn verb(&self) -> &'static str {
        match self {
            EventKind::Entered => "entered",
            EventKind::Exited => "exited",
            EventKind::TimedOut => "exited (timeout)",
        }
    }
}

/// A single zone entry/exit/timeout event.
///
/// Events are append-only: created once, never mutated. Within a frame they
/// are ordered by detection iteration order, with eviction events last.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneEvent {
    /// Event time, seconds since the Unix epoch (or simulated time in tests)
    pub timestamp: f64,
    pub object_id: String,
    pub category: String,
    pub zone_id: String,
    pub kind: EventKind,
}

impl ZoneEvent {
    pub fn new(
        timestamp: f64,
        object_id: impl Into<String>,
        category: impl Into<String>,
        zone_id: impl Into<String>,
        kind: EventKind,
    ) -> Self {
        Self {
            timestamp,
            object_id: object_id.into(),
            category: category.into(),
            zone_id: zone_id.into(),
            kind,
        }
    }
}
