//! Areas, difficulty tiers and the ways the agent moves between areas.

/// Game area (level) identifiers the leveling routines travel through.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum Area {
    // Act 1
    #[default]
    RogueEncampment,
    BloodMoor,
    ColdPlains,
    StonyField,
    DarkWood,
    BlackMarsh,
    ForgottenTower,
    TowerCellarLevel5,
    CatacombsLevel2,
    CatacombsLevel3,
    CatacombsLevel4,
    // Act 2
    LutGholein,
    ArcaneSanctuary,
    DurielsLair,
    // Act 3
    KurastDocks,
    Travincal,
    DuranceOfHateLevel3,
    // Act 4
    ThePandemoniumFortress,
    PlainsOfDespair,
    ChaosSanctuary,
    // Act 5
    Harrogath,
    NihlathaksTemple,
    HallsOfVaught,
    ArreatSummit,
    ThroneOfDestruction,
    TheWorldstoneChamber,
}

impl Area {
    /// Returns true for the five act towns.
    pub const fn is_town(self) -> bool {
        matches!(
            self,
            Area::RogueEncampment
                | Area::LutGholein
                | Area::KurastDocks
                | Area::ThePandemoniumFortress
                | Area::Harrogath
        )
    }

    /// Act number (1-5) the area belongs to.
    pub const fn act(self) -> u8 {
        match self {
            Area::RogueEncampment
            | Area::BloodMoor
            | Area::ColdPlains
            | Area::StonyField
            | Area::DarkWood
            | Area::BlackMarsh
            | Area::ForgottenTower
            | Area::TowerCellarLevel5
            | Area::CatacombsLevel2
            | Area::CatacombsLevel3
            | Area::CatacombsLevel4 => 1,
            Area::LutGholein | Area::ArcaneSanctuary | Area::DurielsLair => 2,
            Area::KurastDocks | Area::Travincal | Area::DuranceOfHateLevel3 => 3,
            Area::ThePandemoniumFortress | Area::PlainsOfDespair | Area::ChaosSanctuary => 4,
            Area::Harrogath
            | Area::NihlathaksTemple
            | Area::HallsOfVaught
            | Area::ArreatSummit
            | Area::ThroneOfDestruction
            | Area::TheWorldstoneChamber => 5,
        }
    }
}

/// Game difficulty tier.
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
pub enum Difficulty {
    #[default]
    Normal,
    Nightmare,
    Hell,
}

/// How the agent gets to a zone.
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
pub enum TravelMode {
    /// Walk through the area exits from the current area.
    #[default]
    Walk,
    /// Use the waypoint network.
    Waypoint,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn towns_are_flagged() {
        assert!(Area::RogueEncampment.is_town());
        assert!(Area::Harrogath.is_town());
        assert!(!Area::BloodMoor.is_town());
        assert!(!Area::CatacombsLevel4.is_town());
    }

    #[test]
    fn parses_snake_case_names() {
        assert_eq!(Area::from_str("black_marsh").unwrap(), Area::BlackMarsh);
        assert_eq!(Difficulty::from_str("HELL").unwrap(), Difficulty::Hell);
        assert_eq!(Area::CatacombsLevel2.to_string(), "catacombs_level2");
    }
}
