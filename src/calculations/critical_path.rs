use crate::task::Task;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    EmptySchedule,
    CyclicDependencies { task_id: i32 },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::EmptySchedule => {
                write!(f, "cannot compute a schedule over an empty task list")
            }
            ScheduleError::CyclicDependencies { task_id } => {
                write!(f, "dependency cycle detected through task {task_id}")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

/// Scheduling engine over an ordered task list. Every run resets and
/// recomputes the early/late bounds and slack of each task in place, then
/// reports the zero-slack tasks.
///
/// Both propagation passes are single linear scans over the list, not
/// fixed-point iterations: bounds settle only when a task's dependency edges
/// point at entries whose own bounds no longer move later in the scan. Inputs
/// whose edge order fights the list order keep whatever the one scan
/// produced. Cyclic inputs are not detected here; the scans still terminate,
/// the bounds are simply left wherever one pass put them.
pub struct CriticalPath<'a> {
    tasks: &'a mut [Task],
}

impl<'a> CriticalPath<'a> {
    pub fn new(tasks: &'a mut [Task]) -> Self {
        Self { tasks }
    }

    /// Runs the full computation and returns the ids of the zero-slack
    /// tasks, preserving their order in the input list.
    pub fn execute(mut self) -> Result<Vec<i32>, ScheduleError> {
        if self.tasks.is_empty() {
            return Err(ScheduleError::EmptySchedule);
        }

        let index = self.build_task_index();
        self.forward_pass(&index);

        let total_duration = self
            .tasks
            .iter()
            .map(|task| task.early_finish)
            .max()
            .unwrap_or(0);
        for task in self.tasks.iter_mut() {
            task.late_finish = total_duration;
            task.late_start = task.late_finish - task.duration_days;
        }

        self.backward_pass(&index);

        for task in self.tasks.iter_mut() {
            task.slack = task.late_start - task.early_start;
        }

        Ok(self
            .tasks
            .iter()
            .filter(|task| task.slack == 0)
            .map(|task| task.id)
            .collect())
    }

    fn build_task_index(&self) -> HashMap<i32, usize> {
        let mut task_to_idx = HashMap::with_capacity(self.tasks.len());
        for (idx, task) in self.tasks.iter().enumerate() {
            task_to_idx.insert(task.id, idx);
        }
        task_to_idx
    }

    /// One scan in list order. Each task pushes its own early finish into the
    /// entries on its dependency list; the owner's finish is re-read per edge.
    fn forward_pass(&mut self, index: &HashMap<i32, usize>) {
        for task in self.tasks.iter_mut() {
            task.early_start = 0;
            task.early_finish = task.duration_days;
        }

        for i in 0..self.tasks.len() {
            for k in 0..self.tasks[i].dependencies.len() {
                let dep_id = self.tasks[i].dependencies[k];
                // Edges referencing ids outside the list are skipped.
                let Some(&j) = index.get(&dep_id) else {
                    continue;
                };
                let finish = self.tasks[i].early_finish;
                let dep = &mut self.tasks[j];
                dep.early_start = dep.early_start.max(finish);
                dep.early_finish = dep.early_start + dep.duration_days;
            }
        }
    }

    /// One scan in reverse list order. Here the edge is read the other way
    /// around: the owning task pulls its late finish down to each
    /// dependency's late start.
    fn backward_pass(&mut self, index: &HashMap<i32, usize>) {
        for i in (0..self.tasks.len()).rev() {
            for k in 0..self.tasks[i].dependencies.len() {
                let dep_id = self.tasks[i].dependencies[k];
                let Some(&j) = index.get(&dep_id) else {
                    continue;
                };
                let dep_late_start = self.tasks[j].late_start;
                let task = &mut self.tasks[i];
                task.late_finish = task.late_finish.min(dep_late_start);
                task.late_start = task.late_finish - task.duration_days;
            }
        }
    }
}

/// Convenience entry point over a bare task slice.
pub fn compute_critical_path(tasks: &mut [Task]) -> Result<Vec<i32>, ScheduleError> {
    CriticalPath::new(tasks).execute()
}
