//! Typed records for the game data served by the remote API.
//!
//! Everything here is read-only reference data from the planner's point of
//! view: abilities (the cross-class AA tree), items, and spells. Payloads
//! are decoded tolerantly; missing numeric fields count as zero and unknown
//! fields are ignored, so a schema drift on the server degrades instead of
//! breaking the client.

use serde::{Deserialize, Serialize};

use crate::constants::{GameClass, StatId, Tier};

fn default_total_ranks() -> u32 {
    1
}

fn default_enabled() -> u8 {
    1
}

fn default_tier() -> Tier {
    Tier::Greater
}

/// One line of an ability's effect summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EffectLine {
    #[serde(default)]
    pub effect_desc: String,
    #[serde(default)]
    pub range: Option<String>,
}

/// A cross-class ability (AA) from the universal tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub universal_id: u32,
    pub name: String,
    #[serde(default = "default_tier")]
    pub tier: Tier,
    #[serde(default = "default_total_ranks")]
    pub total_ranks: u32,
    /// Point cost for one rank.
    #[serde(default)]
    pub total_cost: u32,
    /// Class names that may purchase this ability cross-class.
    #[serde(default)]
    pub original_class_names: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub expansion_name: Option<String>,
    #[serde(default)]
    pub level_req: u32,
    #[serde(default)]
    pub type_name: Option<String>,
    /// Recast time in seconds; zero for passives.
    #[serde(default)]
    pub recast_time: u32,
    #[serde(default = "default_enabled")]
    pub enabled: u8,
    #[serde(default)]
    pub effect_summary: Vec<EffectLine>,
}

impl Ability {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled == 1
    }

    /// Whether the given class is in this ability's native class list.
    #[must_use]
    pub fn belongs_to(&self, class: GameClass) -> bool {
        self.original_class_names.iter().any(|n| n == class.name())
    }
}

/// The full universal AA tree, as served by `/api/aa/universal/tree`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AbilityCatalog {
    pub abilities: Vec<Ability>,
}

impl AbilityCatalog {
    /// Create an empty catalog (useful for tests).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            abilities: Vec::new(),
        }
    }

    /// Load a catalog from a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into ability records.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn from_abilities(abilities: Vec<Ability>) -> Self {
        Self { abilities }
    }

    #[must_use]
    pub fn by_id(&self, universal_id: u32) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.universal_id == universal_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }
}

/// Flat numeric stat contributions carried by an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StatBlock {
    #[serde(default)]
    pub astr: i32,
    #[serde(default)]
    pub asta: i32,
    #[serde(default)]
    pub aagi: i32,
    #[serde(default)]
    pub adex: i32,
    #[serde(default)]
    pub aint: i32,
    #[serde(default)]
    pub awis: i32,
    #[serde(default)]
    pub acha: i32,
    #[serde(default)]
    pub ac: i32,
    #[serde(default)]
    pub hp: i32,
    #[serde(default)]
    pub mana: i32,
    #[serde(default)]
    pub endur: i32,
    #[serde(default)]
    pub fr: i32,
    #[serde(default)]
    pub cr: i32,
    #[serde(default)]
    pub mr: i32,
    #[serde(default)]
    pub pr: i32,
    #[serde(default)]
    pub dr: i32,
    #[serde(default)]
    pub heroic_str: i32,
    #[serde(default)]
    pub heroic_sta: i32,
    #[serde(default)]
    pub heroic_agi: i32,
    #[serde(default)]
    pub heroic_dex: i32,
    #[serde(default)]
    pub heroic_int: i32,
    #[serde(default)]
    pub heroic_wis: i32,
    #[serde(default)]
    pub heroic_cha: i32,
    #[serde(default)]
    pub haste: i32,
    #[serde(default)]
    pub attack: i32,
    #[serde(default)]
    pub damage: i32,
    #[serde(default)]
    pub regen: i32,
    #[serde(default)]
    pub manaregen: i32,
}

impl StatBlock {
    #[must_use]
    pub const fn get(&self, stat: StatId) -> i32 {
        match stat {
            StatId::Str => self.astr,
            StatId::Sta => self.asta,
            StatId::Agi => self.aagi,
            StatId::Dex => self.adex,
            StatId::Int => self.aint,
            StatId::Wis => self.awis,
            StatId::Cha => self.acha,
            StatId::Ac => self.ac,
            StatId::Hp => self.hp,
            StatId::Mana => self.mana,
            StatId::Endurance => self.endur,
            StatId::FireResist => self.fr,
            StatId::ColdResist => self.cr,
            StatId::MagicResist => self.mr,
            StatId::PoisonResist => self.pr,
            StatId::DiseaseResist => self.dr,
            StatId::HeroicStr => self.heroic_str,
            StatId::HeroicSta => self.heroic_sta,
            StatId::HeroicAgi => self.heroic_agi,
            StatId::HeroicDex => self.heroic_dex,
            StatId::HeroicInt => self.heroic_int,
            StatId::HeroicWis => self.heroic_wis,
            StatId::HeroicCha => self.heroic_cha,
            StatId::Haste => self.haste,
            StatId::Attack => self.attack,
            StatId::Damage => self.damage,
            StatId::Regen => self.regen,
            StatId::ManaRegen => self.manaregen,
        }
    }

    pub const fn get_mut(&mut self, stat: StatId) -> &mut i32 {
        match stat {
            StatId::Str => &mut self.astr,
            StatId::Sta => &mut self.asta,
            StatId::Agi => &mut self.aagi,
            StatId::Dex => &mut self.adex,
            StatId::Int => &mut self.aint,
            StatId::Wis => &mut self.awis,
            StatId::Cha => &mut self.acha,
            StatId::Ac => &mut self.ac,
            StatId::Hp => &mut self.hp,
            StatId::Mana => &mut self.mana,
            StatId::Endurance => &mut self.endur,
            StatId::FireResist => &mut self.fr,
            StatId::ColdResist => &mut self.cr,
            StatId::MagicResist => &mut self.mr,
            StatId::PoisonResist => &mut self.pr,
            StatId::DiseaseResist => &mut self.dr,
            StatId::HeroicStr => &mut self.heroic_str,
            StatId::HeroicSta => &mut self.heroic_sta,
            StatId::HeroicAgi => &mut self.heroic_agi,
            StatId::HeroicDex => &mut self.heroic_dex,
            StatId::HeroicInt => &mut self.heroic_int,
            StatId::HeroicWis => &mut self.heroic_wis,
            StatId::HeroicCha => &mut self.heroic_cha,
            StatId::Haste => &mut self.haste,
            StatId::Attack => &mut self.attack,
            StatId::Damage => &mut self.damage,
            StatId::Regen => &mut self.regen,
            StatId::ManaRegen => &mut self.manaregen,
        }
    }

    /// Elementwise add another block into this one.
    pub fn add(&mut self, other: &StatBlock) {
        for stat in StatId::ALL {
            *self.get_mut(stat) += other.get(stat);
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        StatId::ALL.iter().all(|s| self.get(*s) == 0)
    }
}

/// An item from `/api/items/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub icon: Option<i32>,
    #[serde(flatten)]
    pub stats: StatBlock,
}

impl Item {
    /// A thin item carrying only identity, as restored from a build
    /// document (stat fields are intentionally not persisted).
    #[must_use]
    pub fn reference(id: i64, name: String) -> Self {
        Self {
            id,
            name,
            icon: None,
            stats: StatBlock::default(),
        }
    }
}

/// Class usability is encoded as sixteen `classesN` level fields; 0 or 255
/// means the class cannot use the spell.
const CLASS_LEVEL_UNUSABLE: u16 = 255;

/// A spell from `/api/spells/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub icon: Option<i32>,
    #[serde(default)]
    pub mana: i32,
    /// Cast time in milliseconds.
    #[serde(default)]
    pub cast_time: i32,
    /// Recast time in milliseconds.
    #[serde(default)]
    pub recast_time: i32,
    #[serde(default)]
    pub targettype: u16,
    #[serde(default)]
    pub skill: u16,
    #[serde(default)]
    pub range: i32,
    #[serde(default)]
    pub classes1: u16,
    #[serde(default)]
    pub classes2: u16,
    #[serde(default)]
    pub classes3: u16,
    #[serde(default)]
    pub classes4: u16,
    #[serde(default)]
    pub classes5: u16,
    #[serde(default)]
    pub classes6: u16,
    #[serde(default)]
    pub classes7: u16,
    #[serde(default)]
    pub classes8: u16,
    #[serde(default)]
    pub classes9: u16,
    #[serde(default)]
    pub classes10: u16,
    #[serde(default)]
    pub classes11: u16,
    #[serde(default)]
    pub classes12: u16,
    #[serde(default)]
    pub classes13: u16,
    #[serde(default)]
    pub classes14: u16,
    #[serde(default)]
    pub classes15: u16,
    #[serde(default)]
    pub classes16: u16,
}

impl Spell {
    /// Raw level field for a class.
    #[must_use]
    pub const fn class_level(&self, class: GameClass) -> u16 {
        match class {
            GameClass::Warrior => self.classes1,
            GameClass::Cleric => self.classes2,
            GameClass::Paladin => self.classes3,
            GameClass::Ranger => self.classes4,
            GameClass::Shadowknight => self.classes5,
            GameClass::Druid => self.classes6,
            GameClass::Monk => self.classes7,
            GameClass::Bard => self.classes8,
            GameClass::Rogue => self.classes9,
            GameClass::Shaman => self.classes10,
            GameClass::Necromancer => self.classes11,
            GameClass::Wizard => self.classes12,
            GameClass::Magician => self.classes13,
            GameClass::Enchanter => self.classes14,
            GameClass::Beastlord => self.classes15,
            GameClass::Berserker => self.classes16,
        }
    }

    /// All classes that can scribe this spell, with the level it unlocks at.
    #[must_use]
    pub fn class_levels(&self) -> Vec<(GameClass, u16)> {
        GameClass::ALL
            .iter()
            .filter_map(|class| {
                let level = self.class_level(*class);
                (level > 0 && level < CLASS_LEVEL_UNUSABLE).then_some((*class, level))
            })
            .collect()
    }
}

/// Display name for a spell skill id.
#[must_use]
pub const fn skill_name(skill: u16) -> Option<&'static str> {
    Some(match skill {
        0 => "1H Blunt",
        1 => "1H Slash",
        2 => "2H Blunt",
        3 => "2H Slash",
        4 => "Abjuration",
        5 => "Alteration",
        6 => "Apply Poison",
        7 => "Archery",
        8 => "Backstab",
        9 => "Bind Wound",
        10 => "Bash",
        11 => "Block",
        12 => "Brass",
        13 => "Channeling",
        14 => "Conjuration",
        15 => "Defense",
        16 => "Disarm",
        17 => "Disarm Traps",
        18 => "Divination",
        19 => "Dodge",
        20 => "Double Attack",
        21 => "Dragon Punch",
        22 => "Dual Wield",
        23 => "Eagle Strike",
        24 => "Evocation",
        25 => "Feign Death",
        26 => "Flying Kick",
        27 => "Forage",
        28 => "Hand to Hand",
        29 => "Hide",
        30 => "Kick",
        31 => "Meditate",
        32 => "Mend",
        33 => "Offense",
        34 => "Parry",
        35 => "Pick Lock",
        36 => "Piercing",
        37 => "Riposte",
        38 => "Round Kick",
        39 => "Safe Fall",
        40 => "Sense Heading",
        41 => "Singing",
        42 => "Sneak",
        43 => "Specialize Abjure",
        44 => "Specialize Alter",
        45 => "Specialize Conjur",
        46 => "Specialize Divination",
        47 => "Specialize Evoc",
        48 => "Pick Pockets",
        49 => "Stringed",
        50 => "Swimming",
        51 => "Throwing",
        52 => "Tiger Claw",
        53 => "Tracking",
        54 => "Wind",
        55 => "Fishing",
        56 => "Make Poison",
        57 => "Tinkering",
        58 => "Research",
        59 => "Alchemy",
        60 => "Baking",
        61 => "Tailoring",
        62 => "Sense Traps",
        63 => "Blacksmithing",
        64 => "Fletching",
        65 => "Brewing",
        66 => "Alcohol Tolerance",
        67 => "Begging",
        68 => "Jewelry Making",
        69 => "Pottery",
        70 => "Percussion",
        71 => "Intimidation",
        72 => "Berserking",
        73 => "Taunt",
        74 => "Frenzy",
        _ => return None,
    })
}

/// Display name for a spell target type id.
#[must_use]
pub const fn target_type_name(target: u16) -> Option<&'static str> {
    Some(match target {
        1 => "Line of Sight",
        2 | 4 => "AE Caster",
        3 => "Group v1",
        5 => "Single",
        6 => "Self",
        8 => "Targeted AE",
        9 => "Animal",
        10 => "Undead",
        11 => "Summoned",
        13 => "Lifetap",
        14 => "Pet",
        15 => "Corpse",
        16 => "Plant",
        17 => "Giant",
        18 => "Dragon",
        20 => "Targeted AE Tap",
        24 => "AE Undead",
        25 => "AE Summoned",
        36 => "AE Caster v2",
        40 => "Group v2",
        41 => "Group Teleport",
        43 => "Beam",
        44 => "Free Target",
        46 => "Target of Target",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ability_tree_parses_from_api_shape() {
        let json = r#"{
            "abilities": [
                {
                    "universalId": 101,
                    "name": "Improved Mend",
                    "tier": 2,
                    "totalRanks": 3,
                    "totalCost": 5,
                    "originalClassNames": ["Monk"],
                    "description": "Improves the Mend skill.",
                    "expansionName": "Luclin",
                    "levelReq": 51,
                    "typeName": "Passive",
                    "recastTime": 0,
                    "enabled": 1,
                    "effectSummary": [
                        { "effectDesc": "Mend bonus", "range": "5-15%" }
                    ],
                    "somethingServerAddedLater": true
                },
                { "universalId": 102, "name": "Bare Minimum" }
            ]
        }"#;

        let catalog = AbilityCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);

        let mend = catalog.by_id(101).unwrap();
        assert_eq!(mend.tier, Tier::Exalted);
        assert_eq!(mend.total_ranks, 3);
        assert!(mend.belongs_to(GameClass::Monk));
        assert!(!mend.belongs_to(GameClass::Cleric));
        assert_eq!(mend.effect_summary[0].effect_desc, "Mend bonus");

        let bare = catalog.by_id(102).unwrap();
        assert_eq!(bare.tier, Tier::Greater);
        assert_eq!(bare.total_ranks, 1);
        assert!(bare.is_enabled());
        assert!(bare.original_class_names.is_empty());
    }

    #[test]
    fn item_stats_default_to_zero() {
        let json = r#"{ "id": 9001, "name": "Rusty Dagger", "adex": 2, "hp": 10 }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.stats.get(StatId::Dex), 2);
        assert_eq!(item.stats.get(StatId::Hp), 10);
        assert_eq!(item.stats.get(StatId::Mana), 0);
        assert!(!item.stats.is_zero());
    }

    #[test]
    fn stat_block_addition_is_elementwise() {
        let a: StatBlock = serde_json::from_str(r#"{ "astr": 5, "fr": 3 }"#).unwrap();
        let b: StatBlock = serde_json::from_str(r#"{ "astr": -2, "haste": 41 }"#).unwrap();
        let mut sum = a.clone();
        sum.add(&b);
        assert_eq!(sum.get(StatId::Str), 3);
        assert_eq!(sum.get(StatId::FireResist), 3);
        assert_eq!(sum.get(StatId::Haste), 41);
    }

    #[test]
    fn spell_class_levels_skip_unusable() {
        let json = r#"{
            "id": 3581, "name": "Spirit of Wolf",
            "mana": 40, "cast_time": 4500, "targettype": 5, "skill": 5,
            "classes4": 30, "classes6": 20, "classes10": 9, "classes12": 255
        }"#;
        let spell: Spell = serde_json::from_str(json).unwrap();
        let levels = spell.class_levels();
        assert_eq!(
            levels,
            vec![
                (GameClass::Ranger, 30),
                (GameClass::Druid, 20),
                (GameClass::Shaman, 9),
            ]
        );
    }

    #[test]
    fn skill_and_target_lookups() {
        assert_eq!(skill_name(5), Some("Alteration"));
        assert_eq!(skill_name(99), None);
        assert_eq!(target_type_name(6), Some("Self"));
        assert_eq!(target_type_name(7), None);
    }
}
