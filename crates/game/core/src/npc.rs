//! Named monster and town npc identifiers.

/// Monster class identifiers. Only the classes the leveling routines refer to
/// by name are listed; everything else is [`NpcId::Other`].
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NpcId {
    /// Any monster class without a dedicated variant.
    #[default]
    Other,
    Zombie,
    FallenOne,
    QuillRat,
    DarkStalker,
    Andariel,
    Summoner,
    Duriel,
    CouncilMember,
    CouncilMember2,
    CouncilMember3,
    Mephisto,
    Izual,
    Diablo,
    DefiledWarrior,
    Nihlathak,
    TalicTheDefender,
    MadawcTheGuardian,
    KorlicTheProtector,
    BaalCrab,
    DeckardCain5,
}

/// Town npcs the logistics routines talk to.
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
pub enum TownNpc {
    /// Act 1 healer and potion vendor.
    Akara,
    /// Act 1 caravan leader, travel to act 2.
    Warriv,
}
