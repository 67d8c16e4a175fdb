/// Per-object zone-state record.
///
/// A track exists only while its object has been seen inside some zone;
/// objects outside every zone are not tracked.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Zone the object was last classified into
    pub zone: String,
    /// Detector category label, kept for event reporting
    pub category: String,
    /// Time of the last in-zone observation, seconds
    pub last_seen: f64,
}
