//! Zone-by-zone progression.

pub mod orchestrator;
pub mod report;

pub use orchestrator::Leveler;
pub use report::{ProgressionReport, RunStatus, StepRecord, StepStatus};
