//! What a progression run did, step by step.
use game_core::Area;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepStatus {
    Executed,
    /// The gate was closed at this level.
    Skipped { level: u32 },
    /// The boss never showed up.
    NotFound,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub step: String,
    #[serde(flatten)]
    pub status: StepStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunStatus {
    /// The run did not start because the agent was not in town.
    NotInTown { area: Area },
    /// Every step ran, but the hand-off to the next act did not happen.
    Finished,
    /// The final step completed and control moves to the next act.
    HandedOff,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressionReport {
    pub status: RunStatus,
    pub steps: Vec<StepRecord>,
}

impl ProgressionReport {
    pub(crate) fn started() -> Self {
        Self {
            status: RunStatus::Finished,
            steps: Vec::new(),
        }
    }

    pub(crate) fn not_in_town(area: Area) -> Self {
        Self {
            status: RunStatus::NotInTown { area },
            steps: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, step: impl Into<String>, status: StepStatus) {
        self.steps.push(StepRecord {
            step: step.into(),
            status,
        });
    }

    pub fn handed_off(&self) -> bool {
        self.status == RunStatus::HandedOff
    }

    pub fn executed(&self) -> impl Iterator<Item = &str> {
        self.steps
            .iter()
            .filter(|record| record.status == StepStatus::Executed)
            .map(|record| record.step.as_str())
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps
            .iter()
            .filter(|record| matches!(record.status, StepStatus::Failed { .. }))
    }
}
