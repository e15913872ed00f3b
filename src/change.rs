use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A change-log entry recorded against the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEntry {
    pub description: String,
    pub version: String,
    pub date: NaiveDate,
}

impl ChangeEntry {
    pub fn new(
        description: impl Into<String>,
        version: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            version: version.into(),
            date,
        }
    }
}
