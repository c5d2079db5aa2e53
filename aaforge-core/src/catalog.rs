//! Pure selection over the ability catalog: the filtering and ordering
//! behind the ability browser page.

use crate::constants::{GameClass, Tier};
use crate::data::{Ability, AbilityCatalog};

/// Ordering for browsed abilities. Ties fall back to name order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbilitySort {
    #[default]
    Name,
    Tier,
    Class,
    Cost,
}

impl AbilitySort {
    pub const ALL: [AbilitySort; 4] = [
        AbilitySort::Name,
        AbilitySort::Tier,
        AbilitySort::Class,
        AbilitySort::Cost,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AbilitySort::Name => "Name",
            AbilitySort::Tier => "Tier",
            AbilitySort::Class => "Class",
            AbilitySort::Cost => "Cost",
        }
    }
}

/// Criteria for browsing the catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AbilityFilter {
    /// Case-insensitive substring match against name and description.
    pub search: String,
    /// Keep only abilities of this tier.
    pub tier: Option<Tier>,
    /// Keep only abilities native to this class.
    pub class: Option<GameClass>,
    /// Hide abilities native to this class (the planner hides the build's
    /// own class, since those are bought normally rather than cross-class).
    pub exclude_class: Option<GameClass>,
    pub sort: AbilitySort,
}

impl AbilityFilter {
    fn matches(&self, ability: &Ability) -> bool {
        if !ability.is_enabled() {
            return false;
        }
        if let Some(tier) = self.tier {
            if ability.tier != tier {
                return false;
            }
        }
        if let Some(class) = self.class {
            if !ability.belongs_to(class) {
                return false;
            }
        }
        if let Some(class) = self.exclude_class {
            if ability.belongs_to(class) {
                return false;
            }
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let in_name = ability.name.to_lowercase().contains(&needle);
            let in_desc = ability
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
            if !in_name && !in_desc {
                return false;
            }
        }
        true
    }
}

fn first_class_name(ability: &Ability) -> &str {
    ability
        .original_class_names
        .first()
        .map_or("", String::as_str)
}

/// Filter and order the catalog for display.
#[must_use]
pub fn browse<'a>(catalog: &'a AbilityCatalog, filter: &AbilityFilter) -> Vec<&'a Ability> {
    let mut results: Vec<&Ability> = catalog
        .abilities
        .iter()
        .filter(|a| filter.matches(a))
        .collect();

    match filter.sort {
        AbilitySort::Name => results.sort_by(|a, b| a.name.cmp(&b.name)),
        AbilitySort::Tier => {
            results.sort_by(|a, b| (a.tier, &a.name).cmp(&(b.tier, &b.name)));
        }
        AbilitySort::Class => {
            results.sort_by(|a, b| {
                (first_class_name(a), &a.name).cmp(&(first_class_name(b), &b.name))
            });
        }
        AbilitySort::Cost => {
            results.sort_by(|a, b| (a.total_cost, &a.name).cmp(&(b.total_cost, &b.name)));
        }
    }
    results
}
