//! The in-memory character build and its derived views.
//!
//! A [`Build`] holds one planning session: character identity, the set of
//! selected cross-class abilities, and equipped items. Mutations are total
//! functions; out-of-range input is clamped or dropped rather than
//! rejected, so the UI thread never has to handle a mutation error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LEVEL, GameClass, MAX_LEVEL, Race, Slot, Tier};
use crate::data::{Ability, Item, StatBlock};

pub const DEFAULT_BUILD_NAME: &str = "New Build";

/// One selected ability with the rank invested in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedAbility {
    pub ranks: u32,
    pub ability: Ability,
}

/// Credit counters broken down by tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TierTotals {
    pub greater: u32,
    pub exalted: u32,
    pub ascendant: u32,
}

impl TierTotals {
    pub fn add(&mut self, tier: Tier, credits: u32) {
        match tier {
            Tier::Greater => self.greater += credits,
            Tier::Exalted => self.exalted += credits,
            Tier::Ascendant => self.ascendant += credits,
        }
    }

    #[must_use]
    pub const fn get(self, tier: Tier) -> u32 {
        match tier {
            Tier::Greater => self.greater,
            Tier::Exalted => self.exalted,
            Tier::Ascendant => self.ascendant,
        }
    }

    #[must_use]
    pub const fn total(self) -> u32 {
        self.greater + self.exalted + self.ascendant
    }

    /// Platinum needed to buy these credits at the per-tier exchange rate.
    #[must_use]
    pub fn plat_cost(self) -> u64 {
        Tier::ALL
            .iter()
            .map(|t| u64::from(self.get(*t)) * u64::from(t.plat_per_credit()))
            .sum()
    }
}

/// One character build under construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    pub name: String,
    race: Option<Race>,
    class: Option<GameClass>,
    level: u8,
    selected: BTreeMap<u32, SelectedAbility>,
    equipment: BTreeMap<Slot, Item>,
}

impl Default for Build {
    fn default() -> Self {
        Self {
            name: DEFAULT_BUILD_NAME.to_string(),
            race: None,
            class: None,
            level: DEFAULT_LEVEL,
            selected: BTreeMap::new(),
            equipment: BTreeMap::new(),
        }
    }
}

impl Build {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace this build with a fresh empty one.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // --- character identity ---

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Clamps into `[1, MAX_LEVEL]`.
    pub const fn set_level(&mut self, level: u8) {
        self.level = if level == 0 {
            1
        } else if level > MAX_LEVEL {
            MAX_LEVEL
        } else {
            level
        };
    }

    #[must_use]
    pub const fn race(&self) -> Option<Race> {
        self.race
    }

    #[must_use]
    pub const fn class(&self) -> Option<GameClass> {
        self.class
    }

    /// Set the race. If the current class is not playable by the new race,
    /// the class is cleared so the pair stays compatible.
    pub fn set_race(&mut self, race: Option<Race>) {
        self.race = race;
        if let (Some(r), Some(c)) = (self.race, self.class) {
            if !r.allows(c) {
                self.class = None;
            }
        }
    }

    /// Set the class. If the current race cannot play the new class, the
    /// race is cleared so the pair stays compatible.
    pub fn set_class(&mut self, class: Option<GameClass>) {
        self.class = class;
        if let (Some(r), Some(c)) = (self.race, self.class) {
            if !r.allows(c) {
                self.race = None;
            }
        }
    }

    // --- ability selection ---

    #[must_use]
    pub const fn selected_abilities(&self) -> &BTreeMap<u32, SelectedAbility> {
        &self.selected
    }

    #[must_use]
    pub fn ability_rank(&self, universal_id: u32) -> Option<u32> {
        self.selected.get(&universal_id).map(|s| s.ranks)
    }

    /// Cycle an ability through its selection states.
    ///
    /// Unselected abilities become selected at rank 1. When `max_rank` is
    /// given and the current rank is below it, the rank increments by one;
    /// otherwise the selection is removed. Without `max_rank` the ability
    /// simply alternates between rank 1 and unselected.
    pub fn toggle_ability(&mut self, ability: &Ability, max_rank: Option<u32>) {
        let id = ability.universal_id;
        match self.selected.get_mut(&id) {
            None => {
                self.selected.insert(
                    id,
                    SelectedAbility {
                        ranks: 1,
                        ability: ability.clone(),
                    },
                );
            }
            Some(entry) if max_rank.is_some_and(|max| entry.ranks < max) => {
                entry.ranks += 1;
            }
            Some(_) => {
                self.selected.remove(&id);
            }
        }
    }

    /// Set the invested rank directly. Zero or negative removes the
    /// selection; anything above `totalRanks` is clamped to it.
    pub fn set_ability_rank(&mut self, ability: &Ability, rank: i32) {
        let id = ability.universal_id;
        if rank <= 0 {
            self.selected.remove(&id);
            return;
        }
        let ranks = (rank as u32).min(ability.total_ranks.max(1));
        self.selected.insert(
            id,
            SelectedAbility {
                ranks,
                ability: ability.clone(),
            },
        );
    }

    pub fn remove_ability(&mut self, universal_id: u32) {
        self.selected.remove(&universal_id);
    }

    pub fn clear_abilities(&mut self) {
        self.selected.clear();
    }

    // --- equipment ---

    #[must_use]
    pub fn equipped(&self, slot: Slot) -> Option<&Item> {
        self.equipment.get(&slot)
    }

    /// All slots that currently hold an item.
    pub fn equipment(&self) -> impl Iterator<Item = (Slot, &Item)> {
        self.equipment.iter().map(|(slot, item)| (*slot, item))
    }

    pub fn equip(&mut self, slot: Slot, item: Item) {
        self.equipment.insert(slot, item);
    }

    pub fn unequip(&mut self, slot: Slot) {
        self.equipment.remove(&slot);
    }

    pub fn clear_equipment(&mut self) {
        self.equipment.clear();
    }

    // --- derived views ---

    /// Credits owed per originating class, fanned out across every class in
    /// each selected ability's native list.
    #[must_use]
    pub fn credit_costs_by_class(&self) -> BTreeMap<String, TierTotals> {
        let mut costs: BTreeMap<String, TierTotals> = BTreeMap::new();
        for entry in self.selected.values() {
            for class_name in &entry.ability.original_class_names {
                costs
                    .entry(class_name.clone())
                    .or_default()
                    .add(entry.ability.tier, entry.ranks);
            }
        }
        costs
    }

    /// Credits per tier. Each selection contributes once, regardless of how
    /// many classes it fans out to in [`Self::credit_costs_by_class`].
    #[must_use]
    pub fn total_credits_by_tier(&self) -> TierTotals {
        let mut totals = TierTotals::default();
        for entry in self.selected.values() {
            totals.add(entry.ability.tier, entry.ranks);
        }
        totals
    }

    /// Elementwise sum of all equipped items' stat contributions.
    #[must_use]
    pub fn equipment_stats(&self) -> StatBlock {
        let mut sum = StatBlock::default();
        for item in self.equipment.values() {
            sum.add(&item.stats);
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::StatId;
    use crate::data::AbilityCatalog;

    fn ability(id: u32, name: &str, tier: Tier, total_ranks: u32, classes: &[&str]) -> Ability {
        let json = serde_json::json!({
            "universalId": id,
            "name": name,
            "tier": tier.rank(),
            "totalRanks": total_ranks,
            "totalCost": 3,
            "originalClassNames": classes,
        });
        serde_json::from_value(json).unwrap()
    }

    fn item(id: i64, name: &str, stats: serde_json::Value) -> Item {
        let mut value = serde_json::json!({ "id": id, "name": name });
        value
            .as_object_mut()
            .unwrap()
            .extend(stats.as_object().unwrap().clone());
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn toggle_without_max_rank_alternates() {
        let mut build = Build::new();
        let mend = ability(1, "Improved Mend", Tier::Greater, 3, &["Monk"]);

        for _ in 0..3 {
            build.toggle_ability(&mend, None);
            assert_eq!(build.ability_rank(1), Some(1));
            build.toggle_ability(&mend, None);
            assert_eq!(build.ability_rank(1), None);
        }
    }

    #[test]
    fn toggle_with_max_rank_cycles_through_ranks() {
        let mut build = Build::new();
        let fury = ability(2, "Fury", Tier::Exalted, 3, &["Warrior"]);

        build.toggle_ability(&fury, Some(3));
        assert_eq!(build.ability_rank(2), Some(1));
        build.toggle_ability(&fury, Some(3));
        assert_eq!(build.ability_rank(2), Some(2));
        build.toggle_ability(&fury, Some(3));
        assert_eq!(build.ability_rank(2), Some(3));
        build.toggle_ability(&fury, Some(3));
        assert_eq!(build.ability_rank(2), None);
    }

    #[test]
    fn set_rank_clamps_and_removes() {
        let mut build = Build::new();
        let fury = ability(2, "Fury", Tier::Exalted, 3, &["Warrior"]);

        build.set_ability_rank(&fury, 99);
        assert_eq!(build.ability_rank(2), Some(3));
        build.set_ability_rank(&fury, 2);
        assert_eq!(build.ability_rank(2), Some(2));
        build.set_ability_rank(&fury, 0);
        assert_eq!(build.ability_rank(2), None);
        build.set_ability_rank(&fury, -5);
        assert_eq!(build.ability_rank(2), None);
    }

    #[test]
    fn tier_totals_count_each_selection_once() {
        let mut build = Build::new();
        let a = ability(10, "A", Tier::Greater, 5, &["Cleric", "Druid", "Shaman"]);
        let b = ability(11, "B", Tier::Ascendant, 1, &["Wizard"]);

        build.set_ability_rank(&a, 2);
        build.set_ability_rank(&b, 1);

        let totals = build.total_credits_by_tier();
        assert_eq!(totals.greater, 2);
        assert_eq!(totals.exalted, 0);
        assert_eq!(totals.ascendant, 1);
        assert_eq!(totals.total(), 3);
        assert_eq!(totals.plat_cost(), 2 * 100 + 500);
    }

    #[test]
    fn class_costs_fan_out_to_every_native_class() {
        let mut build = Build::new();
        let heal = ability(20, "Heal", Tier::Ascendant, 3, &["Cleric", "Druid"]);
        build.set_ability_rank(&heal, 3);

        let costs = build.credit_costs_by_class();
        assert_eq!(costs.len(), 2);
        assert_eq!(costs["Cleric"].ascendant, 3);
        assert_eq!(costs["Druid"].ascendant, 3);
        assert_eq!(costs["Cleric"].greater, 0);
    }

    #[test]
    fn equipment_stats_are_reversible() {
        let mut build = Build::new();
        let ring = item(100, "Gold Ring", serde_json::json!({ "awis": 5, "mana": 20 }));
        let helm = item(101, "Iron Helm", serde_json::json!({ "ac": 12, "hp": 30 }));

        build.equip(Slot::Ring1, ring);
        let before = build.equipment_stats();
        build.equip(Slot::Head, helm);
        assert_eq!(build.equipment_stats().get(StatId::Ac), 12);
        assert_eq!(build.equipment_stats().get(StatId::Wis), 5);

        build.unequip(Slot::Head);
        assert_eq!(build.equipment_stats(), before);

        build.unequip(Slot::Ring1);
        assert!(build.equipment_stats().is_zero());
    }

    #[test]
    fn replacing_a_slot_swaps_items() {
        let mut build = Build::new();
        build.equip(Slot::Primary, item(1, "Club", serde_json::json!({ "damage": 5 })));
        build.equip(Slot::Primary, item(2, "Sword", serde_json::json!({ "damage": 9 })));
        assert_eq!(build.equipped(Slot::Primary).unwrap().name, "Sword");
        assert_eq!(build.equipment_stats().get(StatId::Damage), 9);

        build.clear_equipment();
        assert!(build.equipped(Slot::Primary).is_none());
        assert!(build.equipment_stats().is_zero());
    }

    #[test]
    fn race_and_class_stay_compatible() {
        let mut build = Build::new();
        build.set_race(Some(Race::Barbarian));
        build.set_class(Some(GameClass::Shaman));
        assert_eq!(build.race(), Some(Race::Barbarian));
        assert_eq!(build.class(), Some(GameClass::Shaman));

        // Barbarians cannot be Paladins; the race gives way.
        build.set_class(Some(GameClass::Paladin));
        assert_eq!(build.class(), Some(GameClass::Paladin));
        assert_eq!(build.race(), None);

        build.set_race(Some(Race::HighElf));
        assert_eq!(build.race(), Some(Race::HighElf));
        assert_eq!(build.class(), Some(GameClass::Paladin));

        // High Elves cannot be Monks; the class gives way.
        build.set_race(Some(Race::Human));
        build.set_class(Some(GameClass::Monk));
        build.set_race(Some(Race::HighElf));
        assert_eq!(build.class(), None);
    }

    #[test]
    fn set_level_clamps() {
        let mut build = Build::new();
        assert_eq!(build.level(), 60);
        build.set_level(0);
        assert_eq!(build.level(), 1);
        build.set_level(200);
        assert_eq!(build.level(), 60);
        build.set_level(42);
        assert_eq!(build.level(), 42);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut build = Build::new();
        build.set_name("Raid Cleric");
        build.set_race(Some(Race::Human));
        build.set_ability_rank(&ability(1, "A", Tier::Greater, 1, &["Cleric"]), 1);
        build.equip(Slot::Head, item(5, "Cap", serde_json::json!({})));

        build.reset();
        assert_eq!(build.name, DEFAULT_BUILD_NAME);
        assert_eq!(build.race(), None);
        assert!(build.selected_abilities().is_empty());
        assert!(build.equipment().next().is_none());
    }

    #[test]
    fn catalog_lookup_feeds_selection() {
        let catalog = AbilityCatalog::from_abilities(vec![
            ability(1, "A", Tier::Greater, 2, &["Monk"]),
            ability(2, "B", Tier::Exalted, 1, &["Bard"]),
        ]);
        let mut build = Build::new();
        if let Some(a) = catalog.by_id(1) {
            build.toggle_ability(a, Some(a.total_ranks));
        }
        assert_eq!(build.ability_rank(1), Some(1));
        assert!(catalog.by_id(99).is_none());
    }
}
