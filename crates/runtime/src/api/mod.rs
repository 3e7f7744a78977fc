//! Public runtime API surface.
//!
//! This module gathers the error type and the external interfaces the
//! decision core is written against, so the combat, encounter and progression
//! layers can stay focused on policy.

pub mod errors;
pub mod world;

pub use errors::{Operation, Result, RuntimeError};
pub use world::{
    ActionPrimitives, ConsumeTarget, GameStateView, PathFinder, StraightLine, TownLogistics,
    VendorRequest, World,
};
