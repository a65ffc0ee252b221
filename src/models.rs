use serde::Serialize;

/// A single classification result: winning class index, its label text and
/// the raw model score in [0, 1].
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub index: usize,
    pub label: String,
    pub score: f32,
}

impl Prediction {
    /// Score scaled to a percentage, as shown to the user.
    pub fn confidence_percent(&self) -> f32 {
        self.score * 100.0
    }
}
