use crate::geometry::Position;

/// Interactable world object kinds.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ObjectName {
    Waypoint,
    TownPortal,
    InifussTree,
    Chest,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Object {
    pub name: ObjectName,
    pub position: Position,
    /// False once the object has been used up (opened chest, looted tree).
    pub selectable: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objects(pub Vec<Object>);

impl Objects {
    pub fn find_one(&self, name: ObjectName) -> Option<&Object> {
        self.0.iter().find(|object| object.name == name)
    }
}
