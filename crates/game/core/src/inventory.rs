/// Where an item currently sits.
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
pub enum ItemLocation {
    Inventory,
    Belt,
    Stash,
    Equipped,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub location: ItemLocation,
}

impl Item {
    pub fn new(name: impl Into<String>, location: ItemLocation) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory(pub Vec<Item>);

impl Inventory {
    pub fn by_location(&self, location: ItemLocation) -> impl Iterator<Item = &Item> {
        self.0.iter().filter(move |item| item.location == location)
    }

    /// Number of items called `name` in the given location.
    pub fn count(&self, name: &str, location: ItemLocation) -> usize {
        self.by_location(location)
            .filter(|item| item.name == name)
            .count()
    }
}
