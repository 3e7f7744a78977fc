//! Technique choice for one attack tick.
use game_content::CombatProfile;
use game_core::{DistanceEnvelope, Resist, SkillId, Snapshot};

/// What to cast this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechniqueChoice {
    /// The free-cost short-range attack.
    Primary {
        casts: u32,
        melee: bool,
        envelope: DistanceEnvelope,
    },
    /// A bound entry of the ranged chain.
    Secondary {
        skill: SkillId,
        casts: u32,
        envelope: DistanceEnvelope,
    },
}

impl TechniqueChoice {
    pub fn skill(&self) -> SkillId {
        match self {
            TechniqueChoice::Primary { .. } => SkillId::AttackSkill,
            TechniqueChoice::Secondary { skill, .. } => *skill,
        }
    }

    pub fn element(&self) -> Option<Resist> {
        self.skill().element()
    }
}

/// Resource- and binding-aware technique chooser.
#[derive(Debug, Clone, Copy)]
pub struct SkillSelector<'a> {
    profile: &'a CombatProfile,
    envelope: Option<DistanceEnvelope>,
}

impl<'a> SkillSelector<'a> {
    pub fn new(profile: &'a CombatProfile) -> Self {
        Self {
            profile,
            envelope: None,
        }
    }

    /// Replaces every technique's envelope, for encounters fought from a
    /// fixed range.
    #[must_use]
    pub fn with_envelope(mut self, envelope: Option<DistanceEnvelope>) -> Self {
        self.envelope = envelope;
        self
    }

    pub fn choose(&self, snapshot: &Snapshot) -> TechniqueChoice {
        let player = &snapshot.player;
        if player.mp_percent() < self.profile.low_mana_percent
            && player.level < self.profile.early_level
        {
            tracing::debug!(mana = player.mp_percent(), "low mana, using primary attack");
            return self.primary();
        }

        match self
            .profile
            .chain
            .iter()
            .find(|technique| snapshot.key_bindings.is_bound(technique.skill))
        {
            Some(technique) => {
                tracing::debug!(skill = %technique.skill, "using ranged technique");
                TechniqueChoice::Secondary {
                    skill: technique.skill,
                    casts: technique.casts_per_attack,
                    envelope: self.envelope.unwrap_or(technique.envelope),
                }
            }
            None => {
                tracing::debug!("no ranged technique bound, using primary attack");
                self.primary()
            }
        }
    }

    /// Damage kinds of the bound ranged techniques, in chain order.
    pub fn available_elements(&self, snapshot: &Snapshot) -> Vec<Resist> {
        let mut elements = Vec::new();
        for technique in &self.profile.chain {
            if !snapshot.key_bindings.is_bound(technique.skill) {
                continue;
            }
            if let Some(element) = technique.skill.element()
                && !elements.contains(&element)
            {
                elements.push(element);
            }
        }
        elements
    }

    fn primary(&self) -> TechniqueChoice {
        let primary = self.profile.primary;
        TechniqueChoice::Primary {
            casts: primary.casts,
            melee: primary.melee,
            envelope: self.envelope.unwrap_or(primary.envelope),
        }
    }
}

#[cfg(test)]
mod tests {
    use game_content::presets;
    use game_core::{Area, KeyBinding, PlayerUnit, ResourceMeter};

    use super::*;

    fn snapshot(level: u32, mana: u32, bound: &[SkillId]) -> Snapshot {
        let mut player = PlayerUnit::new(Area::BloodMoor, level);
        player.mana = ResourceMeter::new(mana, 100);
        let mut snapshot = Snapshot::new(player);
        for (index, skill) in bound.iter().enumerate() {
            snapshot
                .key_bindings
                .bind(*skill, KeyBinding::new(format!("F{}", index + 1)));
        }
        snapshot
    }

    #[test]
    fn low_mana_early_character_uses_primary() {
        let combat = presets::sorceress_leveling_fire().combat;
        let choice = SkillSelector::new(&combat).choose(&snapshot(5, 10, &[SkillId::FireBolt]));
        assert_eq!(choice.skill(), SkillId::AttackSkill);
        assert_eq!(
            choice,
            TechniqueChoice::Primary {
                casts: 1,
                melee: false,
                envelope: DistanceEnvelope::new(1, 3),
            }
        );
    }

    #[test]
    fn low_mana_after_early_levels_keeps_casting() {
        let combat = presets::sorceress_leveling_fire().combat;
        let choice = SkillSelector::new(&combat).choose(&snapshot(15, 10, &[SkillId::FireBolt]));
        assert_eq!(choice.skill(), SkillId::FireBolt);
    }

    #[test]
    fn first_bound_technique_in_chain_wins() {
        let combat = presets::sorceress_leveling_fire().combat;
        let choice = SkillSelector::new(&combat).choose(&snapshot(
            20,
            80,
            &[SkillId::FireBolt, SkillId::FireBall],
        ));
        assert_eq!(
            choice,
            TechniqueChoice::Secondary {
                skill: SkillId::FireBall,
                casts: 4,
                envelope: DistanceEnvelope::new(25, 30),
            }
        );
    }

    #[test]
    fn unbound_chain_falls_back_to_primary() {
        let combat = presets::sorceress_leveling_fire().combat;
        let selector = SkillSelector::new(&combat);
        for level in [1, 20, 60] {
            let choice = selector.choose(&snapshot(level, 100, &[SkillId::TomeOfTownPortal]));
            assert_eq!(choice.skill(), SkillId::AttackSkill);
        }
    }

    #[test]
    fn envelope_override_applies_to_every_choice() {
        let combat = presets::sorceress_leveling_fire().combat;
        let close = DistanceEnvelope::new(5, 8);
        let selector = SkillSelector::new(&combat).with_envelope(Some(close));

        let ranged = selector.choose(&snapshot(30, 100, &[SkillId::Meteor]));
        assert_eq!(
            ranged,
            TechniqueChoice::Secondary {
                skill: SkillId::Meteor,
                casts: 1,
                envelope: close,
            }
        );

        let primary = selector.choose(&snapshot(30, 100, &[]));
        assert!(matches!(primary, TechniqueChoice::Primary { envelope, .. } if envelope == close));
    }

    #[test]
    fn available_elements_follow_bindings() {
        let combat = presets::sorceress_leveling_fire().combat;
        let selector = SkillSelector::new(&combat);
        let elements = selector.available_elements(&snapshot(
            30,
            100,
            &[SkillId::Blizzard, SkillId::FireBall],
        ));
        assert_eq!(elements, vec![Resist::Cold, Resist::Fire]);
    }
}
