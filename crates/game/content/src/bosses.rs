//! Boss table: one generic encounter procedure parameterized per boss.

use std::time::Duration;

use game_core::{Area, DistanceEnvelope, MonsterType, NpcId, Position, Resist, TravelMode};

use crate::error::ContentError;

/// Named boss-kill entry points.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BossId {
    Countess,
    Andariel,
    Summoner,
    Duriel,
    Council,
    Mephisto,
    Izual,
    Diablo,
    Pindleskin,
    Nihlathak,
    Ancients,
    Baal,
}

/// How the encounter picks its targets.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BossTargeting {
    /// One monster class and rarity.
    Single { npc: NpcId, kind: MonsterType },
    /// Several name variants treated as one pack; the nearest living member is
    /// attacked each tick.
    Nearest { names: Vec<NpcId> },
    /// Several distinct bosses fought one after another, each softened and
    /// engaged from a fixed tactical point.
    Sequential {
        names: Vec<NpcId>,
        kind: MonsterType,
        tactical_position: Position,
    },
}

impl BossTargeting {
    pub fn names(&self) -> Vec<NpcId> {
        match self {
            BossTargeting::Single { npc, .. } => vec![*npc],
            BossTargeting::Nearest { names } | BossTargeting::Sequential { names, .. } => {
                names.clone()
            }
        }
    }
}

/// One hop on the way to a boss lair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteLeg {
    pub area: Area,
    pub travel: TravelMode,
}

impl RouteLeg {
    pub const fn new(area: Area, travel: TravelMode) -> Self {
        Self { area, travel }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossProfile {
    pub id: BossId,
    pub targeting: BossTargeting,
    /// Legs travelled from town when the boss is farmed as a progression
    /// step. Empty when the caller positions the agent itself.
    #[cfg_attr(feature = "serde", serde(default))]
    pub route: Vec<RouteLeg>,
    /// Range for the softening pass; `None` skips it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub precast: Option<DistanceEnvelope>,
    /// Range override for every technique during the engagement; `None` keeps
    /// each technique's own envelope.
    #[cfg_attr(feature = "serde", serde(default))]
    pub engagement: Option<DistanceEnvelope>,
    /// Damage kinds that, when the boss is immune to all of them, make it not
    /// worth fighting with a build bound only to those kinds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub skip_on_immunities: Vec<Resist>,
    /// How long to wait for the boss to show up. Zero checks once.
    #[cfg_attr(feature = "serde", serde(default))]
    pub spawn_wait_ms: u64,
}

impl BossProfile {
    pub fn single(id: BossId, npc: NpcId, kind: MonsterType) -> Self {
        Self {
            id,
            targeting: BossTargeting::Single { npc, kind },
            route: Vec::new(),
            precast: None,
            engagement: None,
            skip_on_immunities: Vec::new(),
            spawn_wait_ms: 0,
        }
    }

    #[must_use]
    pub fn with_route(mut self, route: impl IntoIterator<Item = RouteLeg>) -> Self {
        self.route = route.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_precast(mut self, envelope: DistanceEnvelope) -> Self {
        self.precast = Some(envelope);
        self
    }

    #[must_use]
    pub fn with_engagement(mut self, envelope: DistanceEnvelope) -> Self {
        self.engagement = Some(envelope);
        self
    }

    #[must_use]
    pub fn with_skip_on_immunities(mut self, kinds: impl IntoIterator<Item = Resist>) -> Self {
        self.skip_on_immunities = kinds.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_spawn_wait(mut self, wait: Duration) -> Self {
        self.spawn_wait_ms = u64::try_from(wait.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn spawn_wait(&self) -> Duration {
        Duration::from_millis(self.spawn_wait_ms)
    }
}

/// All known boss procedures.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<BossProfile>", into = "Vec<BossProfile>")
)]
pub struct BossTable {
    bosses: Vec<BossProfile>,
}

impl BossTable {
    pub fn new(bosses: Vec<BossProfile>) -> Result<Self, ContentError> {
        for (index, boss) in bosses.iter().enumerate() {
            if bosses[..index].iter().any(|other| other.id == boss.id) {
                return Err(ContentError::DuplicateBoss(boss.id));
            }
            if boss.targeting.names().is_empty() {
                return Err(ContentError::EmptyBossTargets(boss.id));
            }
        }
        Ok(Self { bosses })
    }

    pub(crate) fn preset(bosses: Vec<BossProfile>) -> Self {
        Self { bosses }
    }

    pub fn get(&self, id: BossId) -> Option<&BossProfile> {
        self.bosses.iter().find(|boss| boss.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BossProfile> {
        self.bosses.iter()
    }
}

impl TryFrom<Vec<BossProfile>> for BossTable {
    type Error = ContentError;

    fn try_from(bosses: Vec<BossProfile>) -> Result<Self, Self::Error> {
        Self::new(bosses)
    }
}

impl From<BossTable> for Vec<BossProfile> {
    fn from(table: BossTable) -> Self {
        table.bosses
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::presets;

    #[test]
    fn preset_covers_every_boss() {
        let table = presets::boss_table();
        for id in BossId::iter() {
            assert!(table.get(id).is_some(), "missing {id}");
        }
    }

    #[test]
    fn duplicate_bosses_are_rejected() {
        let andariel = BossProfile::single(BossId::Andariel, NpcId::Andariel, MonsterType::Unique);
        let result = BossTable::new(vec![andariel.clone(), andariel]);
        assert_eq!(result, Err(ContentError::DuplicateBoss(BossId::Andariel)));
    }

    #[test]
    fn pack_without_names_is_rejected() {
        let council = BossProfile {
            id: BossId::Council,
            targeting: BossTargeting::Nearest { names: vec![] },
            route: Vec::new(),
            precast: None,
            engagement: None,
            skip_on_immunities: Vec::new(),
            spawn_wait_ms: 0,
        };
        assert_eq!(
            BossTable::new(vec![council]),
            Err(ContentError::EmptyBossTargets(BossId::Council))
        );
    }

    #[test]
    fn diablo_waits_twenty_seconds() {
        let table = presets::boss_table();
        let diablo = table.get(BossId::Diablo).unwrap();
        assert_eq!(diablo.spawn_wait(), Duration::from_secs(20));
        assert_eq!(diablo.precast, Some(DistanceEnvelope::new(1, 5)));
    }
}
