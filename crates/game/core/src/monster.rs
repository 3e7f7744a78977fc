//! Monsters as seen in a snapshot, their classification and immunities.

use bitflags::bitflags;

use crate::geometry::{Position, UnitId};
use crate::npc::NpcId;

/// Damage kinds a monster can resist.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Resist {
    Fire,
    Cold,
    Lightning,
    Poison,
    Magic,
    Physical,
}

bitflags! {
    /// Set of damage kinds a monster is immune to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Immunities: u8 {
        const FIRE      = 1 << 0;
        const COLD      = 1 << 1;
        const LIGHTNING = 1 << 2;
        const POISON    = 1 << 3;
        const MAGIC     = 1 << 4;
        const PHYSICAL  = 1 << 5;
    }
}

impl From<Resist> for Immunities {
    fn from(resist: Resist) -> Self {
        match resist {
            Resist::Fire => Immunities::FIRE,
            Resist::Cold => Immunities::COLD,
            Resist::Lightning => Immunities::LIGHTNING,
            Resist::Poison => Immunities::POISON,
            Resist::Magic => Immunities::MAGIC,
            Resist::Physical => Immunities::PHYSICAL,
        }
    }
}

impl FromIterator<Resist> for Immunities {
    fn from_iter<T: IntoIterator<Item = Resist>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Immunities::empty(), |acc, resist| acc | resist.into())
    }
}

/// Monster rarity classification.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MonsterType {
    /// Regular monster.
    #[default]
    None,
    Champion,
    Minion,
    Unique,
    SuperUnique,
}

impl MonsterType {
    pub const fn is_elite(self) -> bool {
        matches!(
            self,
            MonsterType::Champion | MonsterType::Unique | MonsterType::SuperUnique
        )
    }
}

/// A monster entry from the live snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub unit_id: UnitId,
    pub name: NpcId,
    pub kind: MonsterType,
    pub position: Position,
    pub life: u32,
    pub immunities: Immunities,
}

impl Monster {
    pub fn new(unit_id: UnitId, name: NpcId, kind: MonsterType, position: Position) -> Self {
        Self {
            unit_id,
            name,
            kind,
            position,
            life: 1,
            immunities: Immunities::empty(),
        }
    }

    #[must_use]
    pub fn with_life(mut self, life: u32) -> Self {
        self.life = life;
        self
    }

    #[must_use]
    pub fn with_immunities(mut self, immunities: Immunities) -> Self {
        self.immunities = immunities;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    pub fn is_elite(&self) -> bool {
        self.kind.is_elite()
    }

    pub fn is_immune(&self, resist: Resist) -> bool {
        self.immunities.contains(resist.into())
    }
}

/// Which hostiles a sweep or selection should consider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MonsterFilter {
    /// Every living monster.
    #[default]
    Any,
    /// Champions, uniques and super uniques.
    Elite,
    /// Monsters whose class is in the list.
    Names(Vec<NpcId>),
}

impl MonsterFilter {
    pub fn matches(&self, monster: &Monster) -> bool {
        match self {
            MonsterFilter::Any => true,
            MonsterFilter::Elite => monster.is_elite(),
            MonsterFilter::Names(names) => names.contains(&monster.name),
        }
    }
}

/// All monsters currently loaded around the player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monsters(pub Vec<Monster>);

impl Monsters {
    pub fn new(monsters: Vec<Monster>) -> Self {
        Self(monsters)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Monster> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First living monster of the given class and type.
    pub fn find_one(&self, name: NpcId, kind: MonsterType) -> Option<&Monster> {
        self.0
            .iter()
            .find(|m| m.name == name && m.kind == kind && m.is_alive())
    }

    /// Looks a monster up by unit id, dead or alive.
    pub fn find_by_id(&self, id: UnitId) -> Option<&Monster> {
        self.0.iter().find(|m| m.unit_id == id)
    }

    /// Living monsters matching `filter`.
    pub fn enemies<'a>(&'a self, filter: &'a MonsterFilter) -> impl Iterator<Item = &'a Monster> {
        self.0
            .iter()
            .filter(move |m| m.is_alive() && filter.matches(m))
    }
}

impl FromIterator<Monster> for Monsters {
    fn from_iter<T: IntoIterator<Item = Monster>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monster(id: u32, name: NpcId, kind: MonsterType, life: u32) -> Monster {
        Monster::new(UnitId(id), name, kind, Position::ORIGIN).with_life(life)
    }

    #[test]
    fn find_one_skips_dead_and_mismatched_types() {
        let monsters = Monsters::new(vec![
            monster(1, NpcId::Andariel, MonsterType::Unique, 0),
            monster(2, NpcId::Andariel, MonsterType::None, 10),
            monster(3, NpcId::Andariel, MonsterType::Unique, 10),
        ]);

        let found = monsters
            .find_one(NpcId::Andariel, MonsterType::Unique)
            .unwrap();
        assert_eq!(found.unit_id, UnitId(3));
    }

    #[test]
    fn elite_filter_excludes_minions() {
        let monsters = Monsters::new(vec![
            monster(1, NpcId::Zombie, MonsterType::Minion, 5),
            monster(2, NpcId::Zombie, MonsterType::Champion, 5),
            monster(3, NpcId::TalicTheDefender, MonsterType::SuperUnique, 5),
        ]);

        let filter = MonsterFilter::Elite;
        let ids: Vec<_> = monsters.enemies(&filter).map(|m| m.unit_id.0).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn immunities_collect_from_resists() {
        let set: Immunities = [Resist::Fire, Resist::Cold].into_iter().collect();
        let m = monster(1, NpcId::Zombie, MonsterType::None, 1).with_immunities(set);
        assert!(m.is_immune(Resist::Fire));
        assert!(m.is_immune(Resist::Cold));
        assert!(!m.is_immune(Resist::Lightning));
    }
}
