use crate::monitor::rect::Rect;

/// A single detector output for one frame: a box, a confidence score and a
/// category label.
#[derive(Debug, Clone)]
pub struct Detection {
    /// Bounding box in TLWH format
    pub bbox: Rect,
    /// Detection confidence score
    pub score: f32,
    /// Category label as reported by the detector ("person", "dog", ...)
    pub category: String,
}

impl Detection {
    pub fn new(bbox: Rect, score: f32, category: impl Into<String>) -> Self {
        Self {
            bbox,
            score,
            category: category.into(),
        }
    }

    /// Convenience constructor for a person detection in TLWH coordinates.
    pub fn person(x: f32, y: f32, width: f32, height: f32, score: f32) -> Self {
        Self::new(Rect::new(x, y, width, height), score, "person")
    }
}
