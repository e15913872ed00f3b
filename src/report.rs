use crate::change::ChangeEntry;
use crate::member::Team;
use crate::metadata::ProjectMetadata;
use crate::milestone::Milestone;
use crate::project::Project;
use crate::risk::Risk;
use crate::task::Task;
use serde::Serialize;

/// Activity report over a project: a plain-text rendering section by
/// section, or the same data as JSON.
pub struct ActivityReport<'a> {
    project: &'a Project,
}

#[derive(Serialize)]
struct ReportView<'a> {
    metadata: &'a ProjectMetadata,
    team: &'a Team,
    tasks: &'a [Task],
    risks: &'a [Risk],
    milestones: &'a [Milestone],
    changes: &'a [ChangeEntry],
}

impl<'a> ActivityReport<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    pub fn render(&self) -> String {
        let metadata = self.project.metadata();
        let mut report = String::new();

        report.push_str(&format!(
            "Activity report for project: {}\n",
            metadata.project_name
        ));
        report.push_str(&format!("Description: {}\n", metadata.project_description));
        report.push_str(&format!(
            "Dates: {} - {}\n",
            metadata.project_start_date, metadata.project_end_date
        ));
        report.push_str(&format!("Budget: {}\n", metadata.budget));

        report.push_str("\nTeam members:\n");
        for member in self.project.team().members() {
            report.push_str(&format!(" - {} ({})\n", member.name, member.role));
        }

        report.push_str("\nTasks:\n");
        for task in self.project.tasks() {
            report.push_str(&format!(
                " - {}: {}, Assignee: {}, Status: {}, Start: {}, End: {}\n",
                task.name,
                task.description,
                task.assignee,
                task.status,
                task.start_date,
                task.end_date
            ));
        }

        report.push_str("\nRisks:\n");
        for risk in self.project.risks() {
            report.push_str(&format!(
                " - {}, Probability: {}, Impact: {}\n",
                risk.description, risk.probability, risk.impact
            ));
        }

        report.push_str("\nMilestones:\n");
        for milestone in self.project.milestones() {
            report.push_str(&format!(" - {}: {}\n", milestone.name, milestone.date));
        }

        report.push_str("\nChanges:\n");
        for change in self.project.changes() {
            report.push_str(&format!(
                " - {}, Version: {}, Date: {}\n",
                change.description, change.version, change.date
            ));
        }

        report
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        let view = ReportView {
            metadata: self.project.metadata(),
            team: self.project.team(),
            tasks: self.project.tasks(),
            risks: self.project.risks(),
            milestones: self.project.milestones(),
            changes: self.project.changes(),
        };
        serde_json::to_string_pretty(&view)
    }
}
