use crate::task::Task;
use std::fmt;

#[derive(Debug, Clone)]
pub struct TaskValidationError {
    message: String,
}

impl TaskValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TaskValidationError {}

pub fn validate_task(task: &Task) -> Result<(), TaskValidationError> {
    if task.duration_days < 0 {
        return Err(TaskValidationError::new(format!(
            "task {} has negative duration {} (end date precedes start date)",
            task.id, task.duration_days
        )));
    }

    if task.name.trim().is_empty() {
        return Err(TaskValidationError::new(format!(
            "task {} requires a non-empty name",
            task.id
        )));
    }

    Ok(())
}
