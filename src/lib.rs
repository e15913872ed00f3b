pub mod calculations;
pub mod change;
pub mod graph;
pub mod member;
pub mod metadata;
pub mod milestone;
pub mod notification;
pub mod project;
pub mod report;
pub mod risk;
pub mod task;
pub(crate) mod task_validation;

pub use calculations::critical_path::{CriticalPath, ScheduleError, compute_critical_path};
pub use change::ChangeEntry;
pub use graph::DependencyDag;
pub use member::{Member, Team};
pub use metadata::ProjectMetadata;
pub use milestone::Milestone;
pub use notification::{
    EmailNotification, NotificationChannel, NotificationContext, SmsNotification,
};
pub use project::{Project, ProjectError, ScheduleSummary};
pub use report::ActivityReport;
pub use risk::Risk;
pub use task::Task;
