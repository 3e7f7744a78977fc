//! Target selection.
//!
//! Selectors are pure functions of the snapshot they are handed. The
//! engagement loop calls them again every tick, so they must not keep state
//! between calls.
use game_core::{Monster, MonsterType, NpcId, Snapshot, UnitId};

use crate::api::PathFinder;

/// Picks the unit to attack next, or `None` when there is nothing left.
pub trait TargetSelector: Send + Sync {
    fn select(&self, snapshot: &Snapshot, paths: &dyn PathFinder) -> Option<UnitId>;
}

impl<F> TargetSelector for F
where
    F: Fn(&Snapshot, &dyn PathFinder) -> Option<UnitId> + Send + Sync,
{
    fn select(&self, snapshot: &Snapshot, paths: &dyn PathFinder) -> Option<UnitId> {
        self(snapshot, paths)
    }
}

/// First living monster of one class and type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleTarget {
    pub name: NpcId,
    pub kind: MonsterType,
}

impl SingleTarget {
    pub const fn new(name: NpcId, kind: MonsterType) -> Self {
        Self { name, kind }
    }
}

impl TargetSelector for SingleTarget {
    fn select(&self, snapshot: &Snapshot, _paths: &dyn PathFinder) -> Option<UnitId> {
        snapshot
            .monsters
            .find_one(self.name, self.kind)
            .map(|monster| monster.unit_id)
    }
}

/// Nearest living monster whose class is one of `names`.
///
/// Ties on distance go to the lower unit id so a pack of equally distant
/// variants always resolves to the same unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearestOf {
    pub names: Vec<NpcId>,
}

impl NearestOf {
    pub fn new(names: impl IntoIterator<Item = NpcId>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    /// Matching living monsters, nearest first.
    pub fn ranked<'a>(&self, snapshot: &'a Snapshot, paths: &dyn PathFinder) -> Vec<&'a Monster> {
        let origin = snapshot.player.position;
        let mut candidates: Vec<(u32, &Monster)> = snapshot
            .monsters
            .iter()
            .filter(|m| m.is_alive() && self.names.contains(&m.name))
            .map(|m| (paths.distance(origin, m.position), m))
            .collect();
        candidates.sort_by_key(|(distance, monster)| (*distance, monster.unit_id));
        candidates.into_iter().map(|(_, monster)| monster).collect()
    }
}

impl TargetSelector for NearestOf {
    fn select(&self, snapshot: &Snapshot, paths: &dyn PathFinder) -> Option<UnitId> {
        self.ranked(snapshot, paths)
            .first()
            .map(|monster| monster.unit_id)
    }
}

#[cfg(test)]
mod tests {
    use game_core::{Area, Monsters, PlayerUnit, Position};

    use super::*;
    use crate::api::StraightLine;

    fn council(id: u32, x: i32) -> Monster {
        Monster::new(
            UnitId(id),
            NpcId::CouncilMember,
            MonsterType::None,
            Position::new(x, 0),
        )
    }

    fn snapshot_with(monsters: Vec<Monster>) -> Snapshot {
        let mut snapshot = Snapshot::new(PlayerUnit::new(Area::Travincal, 30));
        snapshot.monsters = Monsters::new(monsters);
        snapshot
    }

    #[test]
    fn nearest_of_picks_closest_candidate() {
        let snapshot = snapshot_with(vec![council(1, 10), council(2, 3), council(3, 7)]);
        let selector = NearestOf::new([NpcId::CouncilMember]);
        assert_eq!(selector.select(&snapshot, &StraightLine), Some(UnitId(2)));
    }

    #[test]
    fn nearest_of_breaks_ties_by_unit_id() {
        let snapshot = snapshot_with(vec![council(9, 5), council(4, -5), council(6, 8)]);
        let selector = NearestOf::new([NpcId::CouncilMember]);
        assert_eq!(selector.select(&snapshot, &StraightLine), Some(UnitId(4)));
    }

    #[test]
    fn nearest_of_ignores_dead_and_unlisted() {
        let snapshot = snapshot_with(vec![
            council(1, 1).with_life(0),
            Monster::new(
                UnitId(2),
                NpcId::Zombie,
                MonsterType::None,
                Position::new(2, 0),
            ),
            council(3, 9),
        ]);
        let selector = NearestOf::new([NpcId::CouncilMember, NpcId::CouncilMember2]);
        assert_eq!(selector.select(&snapshot, &StraightLine), Some(UnitId(3)));
    }

    #[test]
    fn empty_candidate_set_is_not_found() {
        let snapshot = snapshot_with(vec![]);
        let selector = NearestOf::new([NpcId::CouncilMember]);
        assert_eq!(selector.select(&snapshot, &StraightLine), None);
    }

    #[test]
    fn single_target_matches_name_and_type() {
        let snapshot = snapshot_with(vec![
            Monster::new(
                UnitId(1),
                NpcId::Andariel,
                MonsterType::Minion,
                Position::ORIGIN,
            ),
            Monster::new(
                UnitId(2),
                NpcId::Andariel,
                MonsterType::Unique,
                Position::ORIGIN,
            ),
        ]);
        let selector = SingleTarget::new(NpcId::Andariel, MonsterType::Unique);
        assert_eq!(selector.select(&snapshot, &StraightLine), Some(UnitId(2)));
    }

    #[test]
    fn closures_are_selectors() {
        let snapshot = snapshot_with(vec![council(7, 1)]);
        let selector = |_: &Snapshot, _: &dyn PathFinder| Some(UnitId(42));
        assert_eq!(selector.select(&snapshot, &StraightLine), Some(UnitId(42)));
    }
}
