use serde::{Deserialize, Serialize};

/// An identified project risk with its estimated probability (0 to 1) and a
/// free-form impact label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    pub description: String,
    pub probability: f64,
    pub impact: String,
}

impl Risk {
    pub fn new(description: impl Into<String>, probability: f64, impact: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            probability,
            impact: impact.into(),
        }
    }
}
