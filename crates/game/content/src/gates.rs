//! Level gate tables driving zone progression.
//!
//! A gate runs its task while the character is still below the gate's level
//! threshold. Thresholds never decrease along the table, so farming follows
//! character growth zone by zone.

use std::fmt;

use game_core::{Area, MonsterFilter, TravelMode};

use crate::bosses::BossId;
use crate::error::ContentError;

/// Work a gate performs when it is open.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GateTask {
    /// Travel to `area` and sweep every hostile matching `filter`.
    ClearZone {
        area: Area,
        travel: TravelMode,
        #[cfg_attr(feature = "serde", serde(default))]
        filter: MonsterFilter,
    },
    /// Run the boss encounter.
    Boss(BossId),
}

impl fmt::Display for GateTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateTask::ClearZone { area, .. } => write!(f, "clear {area}"),
            GateTask::Boss(boss) => write!(f, "kill {boss}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelGate {
    /// The task runs while the character level is strictly below this value.
    pub below_level: u32,
    pub task: GateTask,
}

impl LevelGate {
    pub fn clear(area: Area, travel: TravelMode, below_level: u32) -> Self {
        Self {
            below_level,
            task: GateTask::ClearZone {
                area,
                travel,
                filter: MonsterFilter::Any,
            },
        }
    }

    pub fn boss(boss: BossId, below_level: u32) -> Self {
        Self {
            below_level,
            task: GateTask::Boss(boss),
        }
    }

    pub fn is_open(&self, level: u32) -> bool {
        level < self.below_level
    }
}

/// Ordered gates with non-decreasing thresholds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<LevelGate>", into = "Vec<LevelGate>")
)]
pub struct LevelGateTable {
    gates: Vec<LevelGate>,
}

impl LevelGateTable {
    /// Builds a table, rejecting thresholds that go down.
    pub fn new(gates: Vec<LevelGate>) -> Result<Self, ContentError> {
        for (index, pair) in gates.windows(2).enumerate() {
            let (previous, next) = (&pair[0], &pair[1]);
            if next.below_level < previous.below_level {
                return Err(ContentError::NonMonotonicGate {
                    index: index + 1,
                    previous: previous.below_level,
                    threshold: next.below_level,
                });
            }
        }
        Ok(Self { gates })
    }

    /// Built-in tables are checked by tests instead of at construction.
    pub(crate) fn preset(gates: Vec<LevelGate>) -> Self {
        debug_assert!(
            gates.windows(2).all(|w| w[0].below_level <= w[1].below_level),
            "preset gate thresholds must not decrease"
        );
        Self { gates }
    }

    pub fn gates(&self) -> &[LevelGate] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn thresholds(&self) -> impl Iterator<Item = u32> + '_ {
        self.gates.iter().map(|gate| gate.below_level)
    }

    /// Highest threshold in the table; at or above it every gate is closed.
    pub fn ceiling(&self) -> u32 {
        self.gates.last().map_or(0, |gate| gate.below_level)
    }
}

impl TryFrom<Vec<LevelGate>> for LevelGateTable {
    type Error = ContentError;

    fn try_from(gates: Vec<LevelGate>) -> Result<Self, Self::Error> {
        Self::new(gates)
    }
}

impl From<LevelGateTable> for Vec<LevelGate> {
    fn from(table: LevelGateTable) -> Self {
        table.gates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_decreasing_thresholds() {
        let result = LevelGateTable::new(vec![
            LevelGate::clear(Area::BloodMoor, TravelMode::Walk, 6),
            LevelGate::clear(Area::ColdPlains, TravelMode::Walk, 3),
        ]);

        assert_eq!(
            result,
            Err(ContentError::NonMonotonicGate {
                index: 1,
                previous: 6,
                threshold: 3,
            })
        );
    }

    #[test]
    fn equal_thresholds_are_allowed() {
        let table = LevelGateTable::new(vec![
            LevelGate::clear(Area::StonyField, TravelMode::Waypoint, 7),
            LevelGate::clear(Area::DarkWood, TravelMode::Waypoint, 7),
        ])
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.ceiling(), 7);
    }

    #[test]
    fn gate_is_open_strictly_below_threshold() {
        let gate = LevelGate::boss(BossId::Countess, 18);
        assert!(gate.is_open(17));
        assert!(!gate.is_open(18));
        assert_eq!(gate.task.to_string(), "kill countess");
    }
}
