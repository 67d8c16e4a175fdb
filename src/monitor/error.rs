use thiserror::Error;

/// Errors from zone configuration handling.
#[derive(Debug, Error)]
pub enum ZoneError {
    /// The zone source was not valid JSON in the expected shape. The caller
    /// decides the fallback (empty set, default layout, abort).
    #[error("malformed zone configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("zone configuration i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("zone '{id}' has {vertices} vertices, a polygon needs at least 3")]
    DegeneratePolygon { id: String, vertices: usize },

    #[error("zone id '{0}' is already defined")]
    DuplicateZone(String),
}
