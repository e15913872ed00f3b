use chrono::NaiveDate;
use project_tool::{
    ChangeEntry, Member, Milestone, NotificationChannel, Project, ProjectError, ProjectMetadata,
    Risk, ScheduleError, Task,
};
use std::sync::{Arc, Mutex};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[derive(Clone, Default)]
struct RecordingChannel {
    sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingChannel {
    fn messages(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

impl NotificationChannel for RecordingChannel {
    fn send(&self, message: &str, recipient: &Member) {
        self.sent
            .lock()
            .unwrap()
            .push((recipient.name.clone(), message.to_string()));
    }
}

fn sample_metadata() -> ProjectMetadata {
    ProjectMetadata {
        project_name: "TER passenger system".to_string(),
        project_description: "Passenger management system for the regional rail operator"
            .to_string(),
        project_start_date: d(2024, 1, 5),
        project_end_date: d(2024, 6, 5),
        budget: 300_000.0,
    }
}

fn sample_project(channel: Box<dyn NotificationChannel>) -> Project {
    let mut project = Project::new(sample_metadata(), channel);

    project.add_member(Member::new("Ibrahima", "Developer"));
    project.add_member(Member::new("Thierno Adama", "Project lead"));

    let task1 = Task::new(
        1,
        "Develop API",
        "Build the passenger API",
        d(2024, 1, 20),
        d(2024, 2, 10),
        "Ibrahima",
        "Done",
    );
    let task2 = Task::new(
        2,
        "Integrate features",
        "Wire the system features together",
        d(2024, 2, 15),
        d(2024, 2, 28),
        "Thierno Adama",
        "In progress",
    );
    project.add_task(task1).unwrap();
    project.add_task(task2).unwrap();
    project.add_dependency(2, 1).unwrap();

    project.add_risk(Risk::new(
        "Possible delay due to external dependencies",
        0.3,
        "Medium",
    ));
    project.add_milestone(Milestone::new("Phase 1 complete", d(2024, 3, 5)));
    project.record_change(ChangeEntry::new("API version bump", "v1.1", d(2024, 3, 10)));

    project
}

#[test]
fn aggregate_collections_grow_in_insertion_order() {
    init_tracing();
    let project = sample_project(Box::new(RecordingChannel::default()));

    let members = project.team().members();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].name, "Ibrahima");
    assert_eq!(members[1].name, "Thierno Adama");

    let tasks = project.tasks();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].name, "Develop API");
    assert_eq!(tasks[1].name, "Integrate features");

    assert_eq!(project.risks().len(), 1);
    assert_eq!(
        project.risks()[0].description,
        "Possible delay due to external dependencies"
    );
    assert_eq!(project.milestones().len(), 1);
    assert_eq!(project.milestones()[0].name, "Phase 1 complete");
    assert_eq!(project.changes().len(), 1);
    assert_eq!(project.changes()[0].version, "v1.1");
}

#[test]
fn find_task_resolves_registered_ids_only() {
    let project = sample_project(Box::new(RecordingChannel::default()));

    assert_eq!(project.find_task(1).map(|t| t.name.as_str()), Some("Develop API"));
    assert!(project.find_task(42).is_none());
}

#[test]
fn duplicate_task_ids_are_rejected() {
    let mut project = sample_project(Box::new(RecordingChannel::default()));

    let clash = Task::new(
        1,
        "Shadow",
        "",
        d(2024, 3, 1),
        d(2024, 3, 5),
        "",
        "Planned",
    );
    let err = project.add_task(clash).unwrap_err();
    assert!(matches!(err, ProjectError::DuplicateTaskId { task_id: 1 }));
    assert_eq!(project.tasks().len(), 2);
}

#[test]
fn negative_duration_tasks_are_rejected_at_the_boundary() {
    let mut project = Project::new(sample_metadata(), Box::new(RecordingChannel::default()));

    let backdated = Task::new(
        5,
        "Backdated",
        "",
        d(2024, 2, 10),
        d(2024, 2, 5),
        "",
        "Planned",
    );
    let err = project.add_task(backdated).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
}

#[test]
fn dependencies_must_reference_registered_tasks() {
    let mut project = sample_project(Box::new(RecordingChannel::default()));

    assert!(matches!(
        project.add_dependency(1, 99),
        Err(ProjectError::UnknownDependency {
            task_id: 1,
            dependency_id: 99
        })
    ));
    assert!(matches!(
        project.add_dependency(99, 1),
        Err(ProjectError::UnknownTask { task_id: 99 })
    ));
}

#[test]
fn refresh_schedule_summarizes_the_critical_path() {
    let mut project = sample_project(Box::new(RecordingChannel::default()));

    let summary = project.refresh_schedule().unwrap();

    assert_eq!(summary.task_count, 2);
    assert_eq!(summary.critical_count, 2);
    assert_eq!(summary.critical_path, vec![1, 2]);
    assert_eq!(summary.total_duration_days, 34);
    assert_eq!(
        summary.to_cli_summary(),
        "tasks=2, critical=2, duration=34, crit_path=1->2"
    );
}

#[test]
fn critical_path_borrows_zero_slack_tasks_in_insertion_order() {
    let mut project = sample_project(Box::new(RecordingChannel::default()));

    let critical = project.critical_path().unwrap();

    let names: Vec<&str> = critical.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Develop API", "Integrate features"]);
}

#[test]
fn refresh_rejects_an_empty_project() {
    let mut project = Project::new(sample_metadata(), Box::new(RecordingChannel::default()));

    let err = project.refresh_schedule().unwrap_err();
    assert_eq!(err, ScheduleError::EmptySchedule);
}

#[test]
fn refresh_rejects_cyclic_dependency_graphs() {
    let mut project = sample_project(Box::new(RecordingChannel::default()));
    project.add_dependency(1, 2).unwrap();

    let err = project.refresh_schedule().unwrap_err();
    assert!(matches!(err, ScheduleError::CyclicDependencies { .. }));
}

#[test]
fn every_mutation_notifies_the_whole_team() {
    let channel = RecordingChannel::default();
    let _project = sample_project(Box::new(channel.clone()));

    let sent = channel.messages();

    // 2 member adds (1 + 2 recipients), 2 task adds, one risk, one
    // milestone, one change record at 2 recipients each.
    assert_eq!(sent.len(), 13);

    let task_announcements: Vec<_> = sent
        .iter()
        .filter(|(_, message)| message == "New task added: Develop API")
        .collect();
    assert_eq!(task_announcements.len(), 2);

    let (recipient, message) = sent.last().unwrap();
    assert_eq!(recipient, "Thierno Adama");
    assert_eq!(message, "New change recorded: API version bump version: v1.1");
}
