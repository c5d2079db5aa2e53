//! The portable build document: the form a build takes on disk, in
//! `localStorage`, and on the clipboard.
//!
//! The document is a thin reference, not a snapshot. Selected abilities keep
//! only identity, rank, name, and tier; equipment keeps only item id and
//! name. Importing therefore needs a live ability catalog to restore full
//! selections, and drops entries it cannot resolve.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::build::{Build, TierTotals};
use crate::constants::{DEFAULT_LEVEL, GameClass, Race, Slot, Tier};
use crate::data::{AbilityCatalog, Item};

pub const IMPORTED_BUILD_NAME: &str = "Imported Build";

fn default_name() -> String {
    IMPORTED_BUILD_NAME.to_string()
}

/// A selected ability as persisted: identity plus display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityEntry {
    pub ranks: u32,
    pub ability_id: u32,
    pub ability_name: String,
    pub tier: Tier,
}

/// An equipped item as persisted: identity only, no stat fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    pub id: i64,
    pub name: String,
}

/// One saved or exported build.
///
/// Every field is tolerant of absence so that hand-edited or older documents
/// still import. Equipment is keyed by plain strings on the wire; keys that
/// are not one of the 22 canonical slots are ignored on import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDocument {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub race: Option<String>,
    #[serde(default)]
    pub class_id: Option<u8>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub selected_abilities: BTreeMap<u32, AbilityEntry>,
    #[serde(default)]
    pub equipment: BTreeMap<String, Option<ItemRef>>,
}

impl Default for BuildDocument {
    fn default() -> Self {
        Self {
            name: default_name(),
            race: None,
            class_id: None,
            class_name: None,
            level: DEFAULT_LEVEL,
            selected_abilities: BTreeMap::new(),
            equipment: BTreeMap::new(),
        }
    }
}

impl BuildDocument {
    /// Parse a document from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or not an object of the
    /// expected shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to compact JSON.
    ///
    /// # Errors
    ///
    /// Serialization of a document cannot realistically fail; the error is
    /// propagated for uniformity with the parsing path.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to human-readable JSON, for files meant to be hand-edited.
    ///
    /// # Errors
    ///
    /// Same as [`Self::to_json`].
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Credit totals per tier, computed from the document alone. Lets a
    /// saved build be summarized without a live ability catalog.
    #[must_use]
    pub fn credit_totals(&self) -> TierTotals {
        let mut totals = TierTotals::default();
        for entry in self.selected_abilities.values() {
            totals.add(entry.tier, entry.ranks);
        }
        totals
    }
}

impl Build {
    /// Reduce this build to its portable document form. Every canonical
    /// slot appears in the equipment section, empty ones as null.
    #[must_use]
    pub fn export(&self) -> BuildDocument {
        let selected_abilities = self
            .selected_abilities()
            .iter()
            .map(|(id, sel)| {
                (
                    *id,
                    AbilityEntry {
                        ranks: sel.ranks,
                        ability_id: sel.ability.universal_id,
                        ability_name: sel.ability.name.clone(),
                        tier: sel.ability.tier,
                    },
                )
            })
            .collect();

        let equipment = Slot::ALL
            .iter()
            .map(|slot| {
                let item = self.equipped(*slot).map(|item| ItemRef {
                    id: item.id,
                    name: item.name.clone(),
                });
                (slot.as_str().to_string(), item)
            })
            .collect();

        BuildDocument {
            name: self.name.clone(),
            race: self.race().map(|r| r.name().to_string()),
            class_id: self.class().map(GameClass::id),
            class_name: self.class().map(|c| c.name().to_string()),
            level: self.level(),
            selected_abilities,
            equipment,
        }
    }

    /// Rehydrate a build from a document against the given ability catalog.
    ///
    /// Never fails: missing fields take defaults, ability entries whose id
    /// is absent from the catalog are dropped, unknown equipment slots are
    /// ignored, and an incompatible race/class pair keeps the class.
    #[must_use]
    pub fn import(doc: &BuildDocument, catalog: &AbilityCatalog) -> Self {
        let mut build = Build::new();

        if doc.name.trim().is_empty() {
            build.set_name(IMPORTED_BUILD_NAME);
        } else {
            build.set_name(doc.name.clone());
        }

        // Level 0 means the field was absent or never set.
        build.set_level(if doc.level == 0 { DEFAULT_LEVEL } else { doc.level });

        let race = doc.race.as_deref().and_then(|name| Race::from_str(name).ok());
        let class = doc
            .class_id
            .and_then(GameClass::from_id)
            .or_else(|| doc.class_name.as_deref().and_then(GameClass::from_name));
        // Race first, class second: set_class clears an incompatible race,
        // so the class wins when a hand-edited document disagrees.
        build.set_race(race);
        build.set_class(class);

        let mut dropped = 0usize;
        for (id, entry) in &doc.selected_abilities {
            match catalog.by_id(*id) {
                Some(ability) => {
                    let rank = i32::try_from(entry.ranks).unwrap_or(i32::MAX);
                    build.set_ability_rank(ability, rank);
                }
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            log::warn!(
                "import of '{}' dropped {dropped} ability selection(s) not in the current catalog",
                build.name
            );
        }

        for (slot_name, item) in &doc.equipment {
            let Ok(slot) = Slot::from_str(slot_name) else {
                log::debug!("ignoring unknown equipment slot '{slot_name}'");
                continue;
            };
            if let Some(item) = item {
                build.equip(slot, Item::reference(item.id, item.name.clone()));
            }
        }

        build
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Ability;

    fn ability(id: u32, name: &str, tier: Tier, total_ranks: u32, classes: &[&str]) -> Ability {
        serde_json::from_value(serde_json::json!({
            "universalId": id,
            "name": name,
            "tier": tier.rank(),
            "totalRanks": total_ranks,
            "originalClassNames": classes,
        }))
        .unwrap()
    }

    fn catalog() -> AbilityCatalog {
        AbilityCatalog::from_abilities(vec![
            ability(101, "Improved Mend", Tier::Exalted, 3, &["Monk"]),
            ability(202, "Fury", Tier::Greater, 5, &["Warrior", "Berserker"]),
        ])
    }

    #[test]
    fn export_covers_every_slot() {
        let doc = Build::new().export();
        assert_eq!(doc.equipment.len(), 22);
        assert!(doc.equipment.values().all(Option::is_none));
        assert!(doc.equipment.contains_key("charm"));
        assert!(doc.equipment.contains_key("ammo"));
    }

    #[test]
    fn round_trip_preserves_selections_and_equipment() {
        let catalog = catalog();
        let mut build = Build::new();
        build.set_name("Monk Throwaway");
        build.set_race(Some(Race::Iksar));
        build.set_class(Some(GameClass::Monk));
        build.set_level(57);
        build.set_ability_rank(catalog.by_id(101).unwrap(), 2);
        build.set_ability_rank(catalog.by_id(202).unwrap(), 5);
        build.equip(
            Slot::Head,
            Item::reference(4001, "Circlet of Disguise".into()),
        );

        let doc = build.export();
        let restored = Build::import(&doc, &catalog);

        assert_eq!(restored.name, "Monk Throwaway");
        assert_eq!(restored.race(), Some(Race::Iksar));
        assert_eq!(restored.class(), Some(GameClass::Monk));
        assert_eq!(restored.level(), 57);
        assert_eq!(restored.ability_rank(101), Some(2));
        assert_eq!(restored.ability_rank(202), Some(5));
        let head = restored.equipped(Slot::Head).unwrap();
        assert_eq!(head.id, 4001);
        assert_eq!(head.name, "Circlet of Disguise");
        assert_eq!(restored.export(), doc);
    }

    #[test]
    fn import_drops_unresolvable_abilities_only() {
        let catalog = catalog();
        let json = r#"{
            "name": "Stale",
            "selectedAbilities": {
                "101": { "ranks": 2, "abilityId": 101, "abilityName": "Improved Mend", "tier": 2 },
                "999": { "ranks": 1, "abilityId": 999, "abilityName": "Removed Ability", "tier": 1 }
            }
        }"#;
        let doc = BuildDocument::from_json(json).unwrap();
        let build = Build::import(&doc, &catalog);
        assert_eq!(build.ability_rank(101), Some(2));
        assert_eq!(build.ability_rank(999), None);
        assert_eq!(build.selected_abilities().len(), 1);
    }

    #[test]
    fn import_defaults_missing_fields() {
        let doc = BuildDocument::from_json("{}").unwrap();
        let build = Build::import(&doc, &AbilityCatalog::empty());
        assert_eq!(build.name, IMPORTED_BUILD_NAME);
        assert_eq!(build.level(), 60);
        assert_eq!(build.race(), None);
        assert_eq!(build.class(), None);
        assert!(build.selected_abilities().is_empty());
    }

    #[test]
    fn import_ignores_unknown_slots_and_keeps_known_ones() {
        let json = r#"{
            "name": "Packrat",
            "level": 60,
            "equipment": {
                "head": { "id": 1, "name": "Cap" },
                "powersource": { "id": 2, "name": "Future Slot" },
                "waist": null
            }
        }"#;
        let doc = BuildDocument::from_json(json).unwrap();
        let build = Build::import(&doc, &AbilityCatalog::empty());
        assert_eq!(build.equipped(Slot::Head).unwrap().name, "Cap");
        assert!(build.equipped(Slot::Waist).is_none());
        assert_eq!(build.equipment().count(), 1);
    }

    #[test]
    fn import_resolves_class_by_name_and_keeps_class_on_conflict() {
        let json = r#"{ "name": "X", "race": "Barbarian", "className": "Paladin", "level": 60 }"#;
        let doc = BuildDocument::from_json(json).unwrap();
        let build = Build::import(&doc, &AbilityCatalog::empty());
        assert_eq!(build.class(), Some(GameClass::Paladin));
        assert_eq!(build.race(), None);
    }

    #[test]
    fn import_clamps_oversized_ranks() {
        let catalog = catalog();
        let json = r#"{
            "selectedAbilities": {
                "101": { "ranks": 50, "abilityId": 101, "abilityName": "Improved Mend", "tier": 2 }
            }
        }"#;
        let doc = BuildDocument::from_json(json).unwrap();
        let build = Build::import(&doc, &catalog);
        assert_eq!(build.ability_rank(101), Some(3));
    }

    #[test]
    fn document_credit_totals_need_no_catalog() {
        let json = r#"{
            "selectedAbilities": {
                "101": { "ranks": 2, "abilityId": 101, "abilityName": "A", "tier": 2 },
                "202": { "ranks": 5, "abilityId": 202, "abilityName": "B", "tier": 1 }
            }
        }"#;
        let doc = BuildDocument::from_json(json).unwrap();
        let totals = doc.credit_totals();
        assert_eq!(totals.greater, 5);
        assert_eq!(totals.exalted, 2);
        assert_eq!(totals.ascendant, 0);
        assert_eq!(totals.plat_cost(), 5 * 100 + 2 * 300);
    }

    #[test]
    fn wire_form_uses_camel_case() {
        let mut build = Build::new();
        build.set_class(Some(GameClass::Cleric));
        let json = serde_json::to_value(build.export()).unwrap();
        assert_eq!(json["classId"], 2);
        assert_eq!(json["className"], "Cleric");
        assert!(json.get("selectedAbilities").is_some());
        assert!(json.get("class_id").is_none());
    }
}
