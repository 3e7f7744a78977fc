//! Combat decisions: who to hit, with what, and when to stop.

pub mod engagement;
pub mod precast;
pub mod skills;
pub mod targeting;

pub use engagement::{
    AttackCycleState, DoneReason, EngagementLoop, EngagementOutcome, EngagementReport,
};
pub use precast::precast;
pub use skills::{SkillSelector, TechniqueChoice};
pub use targeting::{NearestOf, SingleTarget, TargetSelector};
