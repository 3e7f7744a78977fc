//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures reported by the external game collaborators so the
//! orchestrator can record them per step with consistent context.
use std::fmt;

use game_content::BossId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("{operation} failed: {reason}")]
    Primitive {
        operation: Operation,
        reason: String,
    },

    #[error("no encounter procedure configured for {0}")]
    UnknownBoss(BossId),
}

impl RuntimeError {
    pub fn primitive(operation: Operation, reason: impl Into<String>) -> Self {
        Self::Primitive {
            operation,
            reason: reason.into(),
        }
    }
}

/// Command kinds issued through the external interfaces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    MoveTo,
    Travel,
    PrimaryAttack,
    SecondaryAttack,
    ClearArea,
    InteractObject,
    ReturnToTown,
    Refill,
    BuyAtVendor,
    ConsumeItem,
    UsePortal,
    Buff,
    InteractNpc,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::MoveTo => "move",
            Operation::Travel => "travel",
            Operation::PrimaryAttack => "primary attack",
            Operation::SecondaryAttack => "secondary attack",
            Operation::ClearArea => "area clear",
            Operation::InteractObject => "object interaction",
            Operation::ReturnToTown => "return to town",
            Operation::Refill => "vendor refill",
            Operation::BuyAtVendor => "vendor purchase",
            Operation::ConsumeItem => "item use",
            Operation::UsePortal => "portal",
            Operation::Buff => "buff",
            Operation::InteractNpc => "npc interaction",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_errors_name_the_operation() {
        let error = RuntimeError::primitive(Operation::Travel, "waypoint not discovered");
        assert_eq!(error.to_string(), "travel failed: waypoint not discovered");
    }
}
