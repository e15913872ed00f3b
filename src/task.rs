use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Whole days between start and end, fixed when the task is created.
    /// Later edits to the dates do not touch it.
    pub duration_days: i64,
    pub assignee: String,
    pub status: String,
    /// Dependency edges, in declaration order. Nothing here is deduplicated
    /// or cycle-checked; the scheduling passes walk the list as declared.
    pub dependencies: Vec<i32>,
    pub early_start: i64,
    pub early_finish: i64,
    pub late_start: i64,
    pub late_finish: i64,
    pub slack: i64,
}

impl Task {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        assignee: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        let duration_days = (end_date - start_date).num_days();
        Self {
            id,
            name: name.into(),
            description: description.into(),
            start_date,
            end_date,
            duration_days,
            assignee: assignee.into(),
            status: status.into(),
            dependencies: Vec::new(),
            early_start: 0,
            early_finish: 0,
            late_start: 0,
            late_finish: 0,
            slack: 0,
        }
    }

    /// Appends `dependency_id` to this task's edge list. Duplicate and
    /// self-referencing edges are kept as declared.
    pub fn add_dependency(&mut self, dependency_id: i32) {
        self.dependencies.push(dependency_id);
    }

    /// Meaningful only after a schedule refresh has filled the slack field.
    pub fn is_critical(&self) -> bool {
        self.slack == 0
    }
}
