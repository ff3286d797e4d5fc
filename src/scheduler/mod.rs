pub mod cycle_scheduler;
pub mod suspend;

pub use cycle_scheduler::{CycleReport, CycleScheduler, ScheduleSettings};
pub use suspend::{Suspend, ThreadSleep};
