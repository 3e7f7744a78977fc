//! Validation errors for content tables.

use thiserror::Error;

use crate::bosses::BossId;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error(
        "level gate {index} has threshold {threshold}, lower than the previous gate ({previous})"
    )]
    NonMonotonicGate {
        index: usize,
        previous: u32,
        threshold: u32,
    },

    #[error("boss {0} is listed more than once")]
    DuplicateBoss(BossId),

    #[error("boss {0} has no target names")]
    EmptyBossTargets(BossId),

    #[error("technique {skill} needs at least one cast per attack")]
    ZeroCasts { skill: game_core::SkillId },

    #[error("attack ceiling must allow at least one attack")]
    ZeroAttackCeiling,
}
