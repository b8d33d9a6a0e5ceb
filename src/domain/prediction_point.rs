use serde::Deserialize;

/// One predicted value as returned by the backend.
/// `score` is expected in 0..=100 but nothing here enforces it.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PredictionPoint {
    pub timestamp: String,
    pub score: f64,
}

/// Points in the order the backend sent them. Never re-sorted.
pub type ResultSet = Vec<PredictionPoint>;

impl PredictionPoint {
    pub fn new(timestamp: impl Into<String>, score: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            score,
        }
    }
}
