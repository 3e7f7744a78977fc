//! Softening pass cast on a boss before the engagement loop.
use game_content::PrecastProfile;
use game_core::{Difficulty, DistanceEnvelope, UnitId};

use crate::api::World;

/// Casts the build's precast skill at `target` a difficulty-dependent number
/// of times. Failures are logged and otherwise ignored; the result of the
/// pass is never checked.
pub async fn precast(
    world: &World,
    profile: &PrecastProfile,
    difficulty: Difficulty,
    target: UnitId,
    envelope: DistanceEnvelope,
) {
    let casts = profile.casts_for(difficulty);
    tracing::debug!(skill = %profile.skill, casts, %target, %envelope, "precasting");

    if let Err(error) = world
        .actions
        .secondary_attack(profile.skill, target, casts, envelope)
        .await
    {
        tracing::warn!(%target, %error, "precast failed");
    }
}
