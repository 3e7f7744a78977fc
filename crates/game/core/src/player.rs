use std::collections::BTreeMap;

use crate::area::Area;
use crate::geometry::Position;
use crate::skill::{SkillId, StatId};

/// Current/maximum pair for life and mana.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub const fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    /// Fill level in percent; an empty pool reads as full.
    pub const fn percent(&self) -> u32 {
        if self.maximum == 0 {
            return 100;
        }
        self.current.saturating_mul(100) / self.maximum
    }
}

/// Hired follower state, only life matters to the routines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mercenary {
    pub life: ResourceMeter,
}

impl Mercenary {
    pub const fn is_alive(&self) -> bool {
        self.life.current > 0
    }
}

/// The controlled character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerUnit {
    pub area: Area,
    pub position: Position,
    pub level: u32,
    pub life: ResourceMeter,
    pub mana: ResourceMeter,
    /// Hard points per learned skill.
    pub skills: BTreeMap<SkillId, u8>,
    pub stats: BTreeMap<StatId, u32>,
    pub mercenary: Option<Mercenary>,
}

impl PlayerUnit {
    pub fn new(area: Area, level: u32) -> Self {
        Self {
            area,
            position: Position::ORIGIN,
            level,
            life: ResourceMeter::new(100, 100),
            mana: ResourceMeter::new(100, 100),
            skills: BTreeMap::new(),
            stats: BTreeMap::new(),
            mercenary: None,
        }
    }

    pub fn mp_percent(&self) -> u32 {
        self.mana.percent()
    }

    pub fn hp_percent(&self) -> u32 {
        self.life.percent()
    }

    /// Points invested in `skill`, zero when not learned.
    pub fn skill_level(&self, skill: SkillId) -> u8 {
        self.skills.get(&skill).copied().unwrap_or(0)
    }

    pub fn stat(&self, stat: StatId) -> u32 {
        self.stats.get(&stat).copied().unwrap_or(0)
    }

    /// Mercenary life in percent, zero when there is none or it is dead.
    pub fn merc_hp_percent(&self) -> u32 {
        match self.mercenary {
            Some(merc) if merc.is_alive() => merc.life.percent(),
            _ => 0,
        }
    }
}

impl Default for PlayerUnit {
    fn default() -> Self {
        Self::new(Area::default(), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mana_percent_rounds_down() {
        let mut player = PlayerUnit::new(Area::BloodMoor, 2);
        player.mana = ResourceMeter::new(14, 99);
        assert_eq!(player.mp_percent(), 14);
        player.mana = ResourceMeter::new(0, 0);
        assert_eq!(player.mp_percent(), 100);
    }

    #[test]
    fn dead_mercenary_reads_zero() {
        let mut player = PlayerUnit::default();
        assert_eq!(player.merc_hp_percent(), 0);
        player.mercenary = Some(Mercenary {
            life: ResourceMeter::new(0, 300),
        });
        assert_eq!(player.merc_hp_percent(), 0);
        player.mercenary = Some(Mercenary {
            life: ResourceMeter::new(150, 300),
        });
        assert_eq!(player.merc_hp_percent(), 50);
    }
}
