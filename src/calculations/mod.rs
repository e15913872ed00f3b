pub mod critical_path;

pub use critical_path::{CriticalPath, ScheduleError, compute_critical_path};
