use crate::inventory::Inventory;
use crate::monster::Monsters;
use crate::object::Objects;
use crate::player::PlayerUnit;
use crate::skill::KeyBindings;

/// One read of the live game, taken fresh for every decision tick.
///
/// Decision code never holds a snapshot across ticks; the only state carried
/// from one tick to the next is the id of the last attacked target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub player: PlayerUnit,
    pub monsters: Monsters,
    pub key_bindings: KeyBindings,
    pub inventory: Inventory,
    pub objects: Objects,
}

impl Snapshot {
    pub fn new(player: PlayerUnit) -> Self {
        Self {
            player,
            ..Self::default()
        }
    }

    pub fn level(&self) -> u32 {
        self.player.level
    }
}
