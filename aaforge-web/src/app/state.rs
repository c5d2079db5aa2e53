use aaforge_core::{AbilityCatalog, AbilityFilter, Build, Item, Spell};
use yew::prelude::*;

/// Top-level planner tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Character,
    Abilities,
    Equipment,
    Spells,
    Summary,
    Builds,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Character,
        Tab::Abilities,
        Tab::Equipment,
        Tab::Spells,
        Tab::Summary,
        Tab::Builds,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Tab::Character => "Character",
            Tab::Abilities => "Abilities",
            Tab::Equipment => "Equipment",
            Tab::Spells => "Spells",
            Tab::Summary => "Summary",
            Tab::Builds => "Builds",
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub tab: UseStateHandle<Tab>,
    pub build: UseStateHandle<Build>,
    pub catalog: UseStateHandle<AbilityCatalog>,
    pub filter: UseStateHandle<AbilityFilter>,
    pub items: UseStateHandle<Vec<Item>>,
    pub spells: UseStateHandle<Vec<Spell>>,
    pub saved_builds: UseStateHandle<Vec<String>>,
    pub status: UseStateHandle<Option<AttrValue>>,
    pub catalog_ready: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        tab: use_state(|| Tab::Character),
        build: use_state(Build::new),
        catalog: use_state(AbilityCatalog::empty),
        filter: use_state(AbilityFilter::default),
        items: use_state(Vec::<Item>::new),
        spells: use_state(Vec::<Spell>::new),
        saved_builds: use_state(Vec::<String>::new),
        status: use_state(|| None::<AttrValue>),
        catalog_ready: use_state(|| false),
    }
}

impl AppState {
    pub fn set_status(&self, message: impl Into<AttrValue>) {
        self.status.set(Some(message.into()));
    }

    /// Clone-mutate-set: apply a mutation to a copy of the active build and
    /// publish the result.
    pub fn update_build(&self, mutate: impl FnOnce(&mut Build)) {
        let mut build = (*self.build).clone();
        mutate(&mut build);
        self.build.set(build);
    }
}
