//! Fixed reference data: classes, races, the race/class compatibility
//! matrix, equipment slots, ability tiers, and the item stat vocabulary.
//!
//! None of this is mutated at runtime; the live game data (abilities, items,
//! spells) comes from the remote API and lives in [`crate::data`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Level cap on the server.
pub const MAX_LEVEL: u8 = 60;
/// Default level for a fresh build.
pub const DEFAULT_LEVEL: u8 = 60;

/// Playable classes, ids 1..=16 as the game data uses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GameClass {
    Warrior,
    Cleric,
    Paladin,
    Ranger,
    Shadowknight,
    Druid,
    Monk,
    Bard,
    Rogue,
    Shaman,
    Necromancer,
    Wizard,
    Magician,
    Enchanter,
    Beastlord,
    Berserker,
}

impl GameClass {
    pub const ALL: [GameClass; 16] = [
        GameClass::Warrior,
        GameClass::Cleric,
        GameClass::Paladin,
        GameClass::Ranger,
        GameClass::Shadowknight,
        GameClass::Druid,
        GameClass::Monk,
        GameClass::Bard,
        GameClass::Rogue,
        GameClass::Shaman,
        GameClass::Necromancer,
        GameClass::Wizard,
        GameClass::Magician,
        GameClass::Enchanter,
        GameClass::Beastlord,
        GameClass::Berserker,
    ];

    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            GameClass::Warrior => 1,
            GameClass::Cleric => 2,
            GameClass::Paladin => 3,
            GameClass::Ranger => 4,
            GameClass::Shadowknight => 5,
            GameClass::Druid => 6,
            GameClass::Monk => 7,
            GameClass::Bard => 8,
            GameClass::Rogue => 9,
            GameClass::Shaman => 10,
            GameClass::Necromancer => 11,
            GameClass::Wizard => 12,
            GameClass::Magician => 13,
            GameClass::Enchanter => 14,
            GameClass::Beastlord => 15,
            GameClass::Berserker => 16,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameClass::Warrior => "Warrior",
            GameClass::Cleric => "Cleric",
            GameClass::Paladin => "Paladin",
            GameClass::Ranger => "Ranger",
            GameClass::Shadowknight => "Shadowknight",
            GameClass::Druid => "Druid",
            GameClass::Monk => "Monk",
            GameClass::Bard => "Bard",
            GameClass::Rogue => "Rogue",
            GameClass::Shaman => "Shaman",
            GameClass::Necromancer => "Necromancer",
            GameClass::Wizard => "Wizard",
            GameClass::Magician => "Magician",
            GameClass::Enchanter => "Enchanter",
            GameClass::Beastlord => "Beastlord",
            GameClass::Berserker => "Berserker",
        }
    }

    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            GameClass::Warrior => "WAR",
            GameClass::Cleric => "CLR",
            GameClass::Paladin => "PAL",
            GameClass::Ranger => "RNG",
            GameClass::Shadowknight => "SHD",
            GameClass::Druid => "DRU",
            GameClass::Monk => "MNK",
            GameClass::Bard => "BRD",
            GameClass::Rogue => "ROG",
            GameClass::Shaman => "SHM",
            GameClass::Necromancer => "NEC",
            GameClass::Wizard => "WIZ",
            GameClass::Magician => "MAG",
            GameClass::Enchanter => "ENC",
            GameClass::Beastlord => "BST",
            GameClass::Berserker => "BER",
        }
    }

    /// UI accent color for the class.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            GameClass::Warrior => "#c69b6d",
            GameClass::Cleric => "#f5f5f5",
            GameClass::Paladin => "#f48cba",
            GameClass::Ranger => "#66bb6a",
            GameClass::Shadowknight => "#c41e3a",
            GameClass::Druid => "#ff7c0a",
            GameClass::Monk => "#00ff98",
            GameClass::Bard => "#69ccf0",
            GameClass::Rogue => "#fff468",
            GameClass::Shaman => "#0070dd",
            GameClass::Necromancer => "#9482c9",
            GameClass::Wizard => "#40c7eb",
            GameClass::Magician => "#e6cc80",
            GameClass::Enchanter => "#b4a7d6",
            GameClass::Beastlord => "#a87c50",
            GameClass::Berserker => "#e06666",
        }
    }

    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.id() == id)
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        CLASS_BY_NAME.get(name).copied()
    }
}

static CLASS_BY_NAME: Lazy<HashMap<&'static str, GameClass>> =
    Lazy::new(|| GameClass::ALL.iter().map(|c| (c.name(), *c)).collect());

impl fmt::Display for GameClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Playable races (classic + Kunark/Luclin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Race {
    Barbarian,
    #[serde(rename = "Dark Elf")]
    DarkElf,
    Dwarf,
    Erudite,
    Gnome,
    #[serde(rename = "Half Elf")]
    HalfElf,
    Halfling,
    #[serde(rename = "High Elf")]
    HighElf,
    Human,
    Iksar,
    Ogre,
    Troll,
    #[serde(rename = "Vah Shir")]
    VahShir,
    #[serde(rename = "Wood Elf")]
    WoodElf,
    Froglok,
}

impl Race {
    pub const ALL: [Race; 15] = [
        Race::Barbarian,
        Race::DarkElf,
        Race::Dwarf,
        Race::Erudite,
        Race::Gnome,
        Race::HalfElf,
        Race::Halfling,
        Race::HighElf,
        Race::Human,
        Race::Iksar,
        Race::Ogre,
        Race::Troll,
        Race::VahShir,
        Race::WoodElf,
        Race::Froglok,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Race::Barbarian => "Barbarian",
            Race::DarkElf => "Dark Elf",
            Race::Dwarf => "Dwarf",
            Race::Erudite => "Erudite",
            Race::Gnome => "Gnome",
            Race::HalfElf => "Half Elf",
            Race::Halfling => "Halfling",
            Race::HighElf => "High Elf",
            Race::Human => "Human",
            Race::Iksar => "Iksar",
            Race::Ogre => "Ogre",
            Race::Troll => "Troll",
            Race::VahShir => "Vah Shir",
            Race::WoodElf => "Wood Elf",
            Race::Froglok => "Froglok",
        }
    }

    /// Classes this race may roll, per the classic + Kunark/Luclin matrix.
    #[must_use]
    pub const fn classes(self) -> &'static [GameClass] {
        use GameClass::*;
        match self {
            Race::Barbarian => &[Warrior, Ranger, Monk, Shaman, Berserker],
            Race::DarkElf => &[
                Warrior,
                Cleric,
                Shadowknight,
                Monk,
                Bard,
                Rogue,
                Necromancer,
                Wizard,
                Magician,
                Enchanter,
            ],
            Race::Dwarf => &[Warrior, Cleric, Paladin, Ranger, Rogue, Berserker],
            Race::Erudite => &[
                Cleric,
                Paladin,
                Shadowknight,
                Druid,
                Necromancer,
                Wizard,
                Magician,
                Enchanter,
            ],
            Race::Gnome => &[
                Warrior,
                Cleric,
                Shadowknight,
                Monk,
                Rogue,
                Necromancer,
                Wizard,
                Magician,
                Enchanter,
            ],
            Race::HalfElf => &[Warrior, Paladin, Ranger, Druid, Bard, Rogue],
            Race::Halfling => &[Warrior, Cleric, Ranger, Druid, Monk, Rogue],
            Race::HighElf => &[Warrior, Cleric, Paladin, Wizard, Magician, Enchanter],
            Race::Human => &[
                Warrior,
                Cleric,
                Paladin,
                Ranger,
                Shadowknight,
                Druid,
                Monk,
                Bard,
                Rogue,
                Shaman,
                Necromancer,
                Wizard,
                Magician,
                Enchanter,
            ],
            Race::Iksar => &[Warrior, Shadowknight, Monk, Shaman, Necromancer, Beastlord],
            Race::Ogre => &[Warrior, Shadowknight, Shaman, Berserker],
            Race::Troll => &[Warrior, Shadowknight, Shaman, Berserker],
            Race::VahShir => &[Warrior, Monk, Bard, Beastlord, Berserker],
            Race::WoodElf => &[Warrior, Ranger, Druid, Monk, Bard, Rogue],
            Race::Froglok => &[
                Warrior,
                Cleric,
                Paladin,
                Shadowknight,
                Monk,
                Rogue,
                Shaman,
                Wizard,
            ],
        }
    }

    #[must_use]
    pub fn allows(self, class: GameClass) -> bool {
        self.classes().contains(&class)
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Race {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter().copied().find(|r| r.name() == s).ok_or(())
    }
}

/// The 22 fixed equipment slots, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Charm,
    Ear1,
    Head,
    Face,
    Ear2,
    Neck,
    Shoulder,
    Arms,
    Back,
    Wrist1,
    Wrist2,
    Ranged,
    Hands,
    Primary,
    Secondary,
    Ring1,
    Ring2,
    Chest,
    Legs,
    Feet,
    Waist,
    Ammo,
}

impl Slot {
    pub const ALL: [Slot; 22] = [
        Slot::Charm,
        Slot::Ear1,
        Slot::Head,
        Slot::Face,
        Slot::Ear2,
        Slot::Neck,
        Slot::Shoulder,
        Slot::Arms,
        Slot::Back,
        Slot::Wrist1,
        Slot::Wrist2,
        Slot::Ranged,
        Slot::Hands,
        Slot::Primary,
        Slot::Secondary,
        Slot::Ring1,
        Slot::Ring2,
        Slot::Chest,
        Slot::Legs,
        Slot::Feet,
        Slot::Waist,
        Slot::Ammo,
    ];

    /// Wire identifier, as used in build documents and the item API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Slot::Charm => "charm",
            Slot::Ear1 => "ear1",
            Slot::Head => "head",
            Slot::Face => "face",
            Slot::Ear2 => "ear2",
            Slot::Neck => "neck",
            Slot::Shoulder => "shoulder",
            Slot::Arms => "arms",
            Slot::Back => "back",
            Slot::Wrist1 => "wrist1",
            Slot::Wrist2 => "wrist2",
            Slot::Ranged => "ranged",
            Slot::Hands => "hands",
            Slot::Primary => "primary",
            Slot::Secondary => "secondary",
            Slot::Ring1 => "ring1",
            Slot::Ring2 => "ring2",
            Slot::Chest => "chest",
            Slot::Legs => "legs",
            Slot::Feet => "feet",
            Slot::Waist => "waist",
            Slot::Ammo => "ammo",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Slot::Charm => "Charm",
            Slot::Ear1 => "Left Ear",
            Slot::Head => "Head",
            Slot::Face => "Face",
            Slot::Ear2 => "Right Ear",
            Slot::Neck => "Neck",
            Slot::Shoulder => "Shoulders",
            Slot::Arms => "Arms",
            Slot::Back => "Back",
            Slot::Wrist1 => "Left Wrist",
            Slot::Wrist2 => "Right Wrist",
            Slot::Ranged => "Range",
            Slot::Hands => "Hands",
            Slot::Primary => "Primary",
            Slot::Secondary => "Secondary",
            Slot::Ring1 => "Left Ring",
            Slot::Ring2 => "Right Ring",
            Slot::Chest => "Chest",
            Slot::Legs => "Legs",
            Slot::Feet => "Feet",
            Slot::Waist => "Waist",
            Slot::Ammo => "Ammo",
        }
    }

    /// Bit position in the item-data slot mask.
    #[must_use]
    pub const fn bit(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter().copied().find(|x| x.as_str() == s).ok_or(())
    }
}

/// Invalid ability tier on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid ability tier {0}, expected 1-3")]
pub struct InvalidTier(pub u8);

/// Ability tiers, ordered by cost. Serialized as the integer rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Tier {
    Greater,
    Exalted,
    Ascendant,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Greater, Tier::Exalted, Tier::Ascendant];

    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Tier::Greater => 1,
            Tier::Exalted => 2,
            Tier::Ascendant => 3,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Tier::Greater => "Greater",
            Tier::Exalted => "Exalted",
            Tier::Ascendant => "Ascendant",
        }
    }

    /// Platinum turned in per tome credit at the class trainers.
    #[must_use]
    pub const fn plat_per_credit(self) -> u32 {
        match self {
            Tier::Greater => 100,
            Tier::Exalted => 300,
            Tier::Ascendant => 500,
        }
    }

    #[must_use]
    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::try_from(rank).ok()
    }
}

impl TryFrom<u8> for Tier {
    type Error = InvalidTier;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Tier::Greater),
            2 => Ok(Tier::Exalted),
            3 => Ok(Tier::Ascendant),
            other => Err(InvalidTier(other)),
        }
    }
}

impl From<Tier> for u8 {
    fn from(value: Tier) -> Self {
        value.rank()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fixed item stat vocabulary. Item payloads carry these as flat
/// numeric fields keyed by [`StatId::key`]; anything absent counts as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatId {
    Str,
    Sta,
    Agi,
    Dex,
    Int,
    Wis,
    Cha,
    Ac,
    Hp,
    Mana,
    Endurance,
    FireResist,
    ColdResist,
    MagicResist,
    PoisonResist,
    DiseaseResist,
    HeroicStr,
    HeroicSta,
    HeroicAgi,
    HeroicDex,
    HeroicInt,
    HeroicWis,
    HeroicCha,
    Haste,
    Attack,
    Damage,
    Regen,
    ManaRegen,
}

impl StatId {
    pub const ALL: [StatId; 28] = [
        StatId::Str,
        StatId::Sta,
        StatId::Agi,
        StatId::Dex,
        StatId::Int,
        StatId::Wis,
        StatId::Cha,
        StatId::Ac,
        StatId::Hp,
        StatId::Mana,
        StatId::Endurance,
        StatId::FireResist,
        StatId::ColdResist,
        StatId::MagicResist,
        StatId::PoisonResist,
        StatId::DiseaseResist,
        StatId::HeroicStr,
        StatId::HeroicSta,
        StatId::HeroicAgi,
        StatId::HeroicDex,
        StatId::HeroicInt,
        StatId::HeroicWis,
        StatId::HeroicCha,
        StatId::Haste,
        StatId::Attack,
        StatId::Damage,
        StatId::Regen,
        StatId::ManaRegen,
    ];

    /// Display groups used by the equipment stats panel.
    pub const BASE: [StatId; 7] = [
        StatId::Str,
        StatId::Sta,
        StatId::Agi,
        StatId::Dex,
        StatId::Int,
        StatId::Wis,
        StatId::Cha,
    ];
    pub const RESOURCES: [StatId; 4] = [StatId::Ac, StatId::Hp, StatId::Mana, StatId::Endurance];
    pub const RESISTS: [StatId; 5] = [
        StatId::FireResist,
        StatId::ColdResist,
        StatId::MagicResist,
        StatId::PoisonResist,
        StatId::DiseaseResist,
    ];
    pub const HEROICS: [StatId; 7] = [
        StatId::HeroicStr,
        StatId::HeroicSta,
        StatId::HeroicAgi,
        StatId::HeroicDex,
        StatId::HeroicInt,
        StatId::HeroicWis,
        StatId::HeroicCha,
    ];
    pub const COMBAT: [StatId; 5] = [
        StatId::Haste,
        StatId::Attack,
        StatId::Damage,
        StatId::Regen,
        StatId::ManaRegen,
    ];

    /// Wire key in item payloads.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            StatId::Str => "astr",
            StatId::Sta => "asta",
            StatId::Agi => "aagi",
            StatId::Dex => "adex",
            StatId::Int => "aint",
            StatId::Wis => "awis",
            StatId::Cha => "acha",
            StatId::Ac => "ac",
            StatId::Hp => "hp",
            StatId::Mana => "mana",
            StatId::Endurance => "endur",
            StatId::FireResist => "fr",
            StatId::ColdResist => "cr",
            StatId::MagicResist => "mr",
            StatId::PoisonResist => "pr",
            StatId::DiseaseResist => "dr",
            StatId::HeroicStr => "heroic_str",
            StatId::HeroicSta => "heroic_sta",
            StatId::HeroicAgi => "heroic_agi",
            StatId::HeroicDex => "heroic_dex",
            StatId::HeroicInt => "heroic_int",
            StatId::HeroicWis => "heroic_wis",
            StatId::HeroicCha => "heroic_cha",
            StatId::Haste => "haste",
            StatId::Attack => "attack",
            StatId::Damage => "damage",
            StatId::Regen => "regen",
            StatId::ManaRegen => "manaregen",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            StatId::Str => "STR",
            StatId::Sta => "STA",
            StatId::Agi => "AGI",
            StatId::Dex => "DEX",
            StatId::Int => "INT",
            StatId::Wis => "WIS",
            StatId::Cha => "CHA",
            StatId::Ac => "AC",
            StatId::Hp => "HP",
            StatId::Mana => "Mana",
            StatId::Endurance => "Endurance",
            StatId::FireResist => "Fire Resist",
            StatId::ColdResist => "Cold Resist",
            StatId::MagicResist => "Magic Resist",
            StatId::PoisonResist => "Poison Resist",
            StatId::DiseaseResist => "Disease Resist",
            StatId::HeroicStr => "H-STR",
            StatId::HeroicSta => "H-STA",
            StatId::HeroicAgi => "H-AGI",
            StatId::HeroicDex => "H-DEX",
            StatId::HeroicInt => "H-INT",
            StatId::HeroicWis => "H-WIS",
            StatId::HeroicCha => "H-CHA",
            StatId::Haste => "Haste",
            StatId::Attack => "Attack",
            StatId::Damage => "Damage",
            StatId::Regen => "HP Regen",
            StatId::ManaRegen => "Mana Regen",
        }
    }
}

impl fmt::Display for StatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_ids_are_dense_and_stable() {
        for (idx, class) in GameClass::ALL.iter().enumerate() {
            assert_eq!(class.id() as usize, idx + 1);
            assert_eq!(GameClass::from_id(class.id()), Some(*class));
        }
        assert_eq!(GameClass::from_id(0), None);
        assert_eq!(GameClass::from_id(17), None);
    }

    #[test]
    fn class_name_lookup_round_trips() {
        for class in GameClass::ALL {
            assert_eq!(GameClass::from_name(class.name()), Some(class));
        }
        assert_eq!(GameClass::from_name("Deathknight"), None);
    }

    #[test]
    fn race_matrix_matches_known_combos() {
        assert!(Race::Barbarian.allows(GameClass::Shaman));
        assert!(!Race::Barbarian.allows(GameClass::Paladin));
        assert!(Race::Human.allows(GameClass::Bard));
        assert!(!Race::Human.allows(GameClass::Beastlord));
        assert!(Race::Iksar.allows(GameClass::Beastlord));
        assert!(Race::Froglok.allows(GameClass::Wizard));
        assert!(!Race::Froglok.allows(GameClass::Druid));
    }

    #[test]
    fn every_race_has_warrior_except_erudite() {
        for race in Race::ALL {
            let has_war = race.allows(GameClass::Warrior);
            assert_eq!(has_war, race != Race::Erudite, "{race}");
        }
    }

    #[test]
    fn slot_wire_names_round_trip() {
        for slot in Slot::ALL {
            assert_eq!(slot.as_str().parse::<Slot>(), Ok(slot));
        }
        assert!("belt".parse::<Slot>().is_err());
        assert_eq!(Slot::Ear2.bit(), 4);
        assert_eq!(Slot::Ammo.bit(), 21);
    }

    #[test]
    fn tier_rank_conversions() {
        assert_eq!(Tier::try_from(2), Ok(Tier::Exalted));
        assert_eq!(Tier::try_from(4), Err(InvalidTier(4)));
        assert_eq!(u8::from(Tier::Ascendant), 3);
        assert_eq!(Tier::Ascendant.plat_per_credit(), 500);
    }

    #[test]
    fn race_serde_uses_display_names() {
        let json = serde_json::to_string(&Race::VahShir).unwrap();
        assert_eq!(json, "\"Vah Shir\"");
        let back: Race = serde_json::from_str("\"Dark Elf\"").unwrap();
        assert_eq!(back, Race::DarkElf);
    }
}
