use crate::calculations::critical_path::{CriticalPath, ScheduleError};
use crate::change::ChangeEntry;
use crate::graph::DependencyDag;
use crate::member::{Member, Team};
use crate::metadata::ProjectMetadata;
use crate::milestone::Milestone;
use crate::notification::{NotificationChannel, NotificationContext};
use crate::risk::Risk;
use crate::task::Task;
use crate::task_validation::{self, TaskValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a schedule refresh: counts, total project duration in days and
/// the zero-slack task ids in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub task_count: usize,
    pub critical_count: usize,
    pub critical_path: Vec<i32>,
    pub total_duration_days: i64,
}

impl ScheduleSummary {
    pub fn to_cli_summary(&self) -> String {
        let mut parts = Vec::new();
        parts.push(format!("tasks={}", self.task_count));
        parts.push(format!("critical={}", self.critical_count));
        parts.push(format!("duration={}", self.total_duration_days));
        if !self.critical_path.is_empty() {
            let chain = self
                .critical_path
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("->");
            parts.push(format!("crit_path={}", chain));
        }
        parts.join(", ")
    }
}

#[derive(Debug, Clone)]
pub enum ProjectError {
    DuplicateTaskId { task_id: i32 },
    UnknownTask { task_id: i32 },
    UnknownDependency { task_id: i32, dependency_id: i32 },
    Validation(String),
}

impl fmt::Display for ProjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectError::DuplicateTaskId { task_id } => {
                write!(f, "a task with id {task_id} is already registered")
            }
            ProjectError::UnknownTask { task_id } => {
                write!(f, "task {task_id} is not registered in this project")
            }
            ProjectError::UnknownDependency {
                task_id,
                dependency_id,
            } => write!(
                f,
                "task {task_id} cannot depend on unregistered task {dependency_id}"
            ),
            ProjectError::Validation(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ProjectError {}

/// Project aggregate: metadata, the ordered task list the scheduler runs
/// over, and the bookkeeping collections echoed into reports. Every mutation
/// is announced to the whole team through the channel injected at
/// construction.
pub struct Project {
    metadata: ProjectMetadata,
    tasks: Vec<Task>,
    team: Team,
    risks: Vec<Risk>,
    milestones: Vec<Milestone>,
    changes: Vec<ChangeEntry>,
    notifications: NotificationContext,
}

impl Project {
    pub fn new(metadata: ProjectMetadata, channel: Box<dyn NotificationChannel>) -> Self {
        Self {
            metadata,
            tasks: Vec::new(),
            team: Team::new(),
            risks: Vec::new(),
            milestones: Vec::new(),
            changes: Vec::new(),
            notifications: NotificationContext::new(channel),
        }
    }

    pub fn metadata(&self) -> &ProjectMetadata {
        &self.metadata
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    pub fn risks(&self) -> &[Risk] {
        &self.risks
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn changes(&self) -> &[ChangeEntry] {
        &self.changes
    }

    pub fn find_task(&self, task_id: i32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub fn add_task(&mut self, task: Task) -> Result<(), ProjectError> {
        task_validation::validate_task(&task).map_err(Self::validation_error)?;
        if self.tasks.iter().any(|t| t.id == task.id) {
            return Err(ProjectError::DuplicateTaskId { task_id: task.id });
        }
        let message = format!("New task added: {}", task.name);
        self.tasks.push(task);
        self.notify_team(&message);
        Ok(())
    }

    pub fn add_member(&mut self, member: Member) {
        let message = format!("New team member added: {}", member.name);
        self.team.add_member(member);
        self.notify_team(&message);
    }

    pub fn add_risk(&mut self, risk: Risk) {
        let message = format!("New risk added: {}", risk.description);
        self.risks.push(risk);
        self.notify_team(&message);
    }

    pub fn add_milestone(&mut self, milestone: Milestone) {
        let message = format!("New milestone added: {}", milestone.name);
        self.milestones.push(milestone);
        self.notify_team(&message);
    }

    pub fn record_change(&mut self, change: ChangeEntry) {
        let message = format!(
            "New change recorded: {} version: {}",
            change.description, change.version
        );
        self.changes.push(change);
        self.notify_team(&message);
    }

    /// Declares `dependency_id` on the task identified by `task_id`. Both
    /// ids must already be registered so the scheduling scans never chase a
    /// reference outside the project.
    pub fn add_dependency(&mut self, task_id: i32, dependency_id: i32) -> Result<(), ProjectError> {
        if !self.tasks.iter().any(|t| t.id == dependency_id) {
            return Err(ProjectError::UnknownDependency {
                task_id,
                dependency_id,
            });
        }
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(ProjectError::UnknownTask { task_id })?;
        task.add_dependency(dependency_id);
        Ok(())
    }

    /// Recomputes every task's scheduling bounds in place and summarizes the
    /// outcome. Rejects empty and cyclic task graphs up front; the scans
    /// themselves run without any cycle handling.
    pub fn refresh_schedule(&mut self) -> Result<ScheduleSummary, ScheduleError> {
        if self.tasks.is_empty() {
            return Err(ScheduleError::EmptySchedule);
        }
        let dag = DependencyDag::build(&self.tasks);
        if let Some(task_id) = dag.find_cycle() {
            return Err(ScheduleError::CyclicDependencies { task_id });
        }

        let critical_path = CriticalPath::new(&mut self.tasks).execute()?;
        let total_duration_days = self
            .tasks
            .iter()
            .map(|task| task.early_finish)
            .max()
            .unwrap_or(0);

        let summary = ScheduleSummary {
            task_count: self.tasks.len(),
            critical_count: critical_path.len(),
            critical_path,
            total_duration_days,
        };
        tracing::debug!(
            tasks = summary.task_count,
            critical = summary.critical_count,
            duration_days = summary.total_duration_days,
            "schedule refreshed"
        );
        Ok(summary)
    }

    /// Refreshes the schedule and borrows the zero-slack tasks, preserving
    /// their insertion order.
    pub fn critical_path(&mut self) -> Result<Vec<&Task>, ScheduleError> {
        self.refresh_schedule()?;
        Ok(self.tasks.iter().filter(|task| task.slack == 0).collect())
    }

    fn notify_team(&self, message: &str) {
        for member in self.team.members() {
            self.notifications.notify(message, member);
        }
    }

    fn validation_error(err: TaskValidationError) -> ProjectError {
        ProjectError::Validation(err.to_string())
    }
}
