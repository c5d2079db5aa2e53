//! AAforge Core
//!
//! Platform-agnostic build-planning logic for the AAforge character planner.
//! This crate owns the build aggregation model and the persistence contract
//! without any UI or platform-specific dependencies.

pub mod build;
pub mod catalog;
pub mod constants;
pub mod data;
pub mod document;
pub mod store;

// Re-export commonly used types
pub use build::{Build, DEFAULT_BUILD_NAME, SelectedAbility, TierTotals};
pub use catalog::{AbilityFilter, AbilitySort, browse};
pub use constants::{
    DEFAULT_LEVEL, GameClass, InvalidTier, MAX_LEVEL, Race, Slot, StatId, Tier,
};
pub use data::{
    Ability, AbilityCatalog, EffectLine, Item, Spell, StatBlock, skill_name, target_type_name,
};
pub use document::{AbilityEntry, BuildDocument, IMPORTED_BUILD_NAME, ItemRef};
pub use store::{MemoryStore, StoreError};

#[cfg(not(target_arch = "wasm32"))]
pub use store::FileStore;

/// Trait for abstracting where the ability catalog comes from.
/// Platform-specific implementations should provide this.
pub trait CatalogSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the universal ability tree from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    fn load_catalog(&self) -> Result<AbilityCatalog, Self::Error>;
}

/// Trait for abstracting build persistence.
/// Platform-specific implementations should provide this.
pub trait BuildStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Save a build document under a name, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    fn save(&self, name: &str, doc: &BuildDocument) -> Result<(), Self::Error>;

    /// Load a build document; `Ok(None)` when no build exists for `name`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored data is corrupt.
    fn load(&self, name: &str) -> Result<Option<BuildDocument>, Self::Error>;

    /// List all stored build names
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be enumerated.
    fn list(&self) -> Result<Vec<String>, Self::Error>;

    /// Delete a stored build; deleting an absent name is not an error
    ///
    /// # Errors
    ///
    /// Returns an error only on backend failure.
    fn delete(&self, name: &str) -> Result<(), Self::Error>;
}

/// Main planner engine tying a catalog source, a store, and the active build
/// together for one planning session.
pub struct PlannerEngine<C, S>
where
    C: CatalogSource,
    S: BuildStore,
{
    catalog_source: C,
    store: S,
    catalog: AbilityCatalog,
    build: Build,
}

impl<C, S> PlannerEngine<C, S>
where
    C: CatalogSource,
    S: BuildStore,
{
    /// Create an engine with an empty catalog and a fresh build.
    pub fn new(catalog_source: C, store: S) -> Self {
        Self {
            catalog_source,
            store,
            catalog: AbilityCatalog::empty(),
            build: Build::new(),
        }
    }

    /// Fetch (or re-fetch) the ability catalog from the source.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    pub fn refresh_catalog(&mut self) -> Result<(), C::Error> {
        self.catalog = self.catalog_source.load_catalog()?;
        log::info!("catalog refreshed, {} abilities", self.catalog.len());
        Ok(())
    }

    #[must_use]
    pub const fn catalog(&self) -> &AbilityCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn build(&self) -> &Build {
        &self.build
    }

    pub const fn build_mut(&mut self) -> &mut Build {
        &mut self.build
    }

    /// Replace the active build with a fresh default.
    pub fn reset_build(&mut self) {
        self.build.reset();
    }

    /// Save the active build under a name.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn save_build(&self, name: &str) -> Result<(), S::Error> {
        self.store.save(name, &self.build.export())
    }

    /// Load a stored build and make it active, resolving its ability
    /// selections against the current catalog. Returns `Ok(None)` without
    /// touching the active build when no build exists for `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn load_build(&mut self, name: &str) -> Result<Option<&Build>, anyhow::Error>
    where
        S::Error: Into<anyhow::Error>,
    {
        if let Some(doc) = self.store.load(name).map_err(Into::into)? {
            self.build = Build::import(&doc, &self.catalog);
            Ok(Some(&self.build))
        } else {
            Ok(None)
        }
    }

    /// List stored build names.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be enumerated.
    pub fn list_builds(&self) -> Result<Vec<String>, S::Error> {
        self.store.list()
    }

    /// Delete a stored build. The active build is unaffected.
    ///
    /// # Errors
    ///
    /// Returns an error only on store failure.
    pub fn delete_build(&self, name: &str) -> Result<(), S::Error> {
        self.store.delete(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[derive(Clone, Default)]
    struct FixtureCatalog;

    impl CatalogSource for FixtureCatalog {
        type Error = Infallible;

        fn load_catalog(&self) -> Result<AbilityCatalog, Self::Error> {
            let json = r#"{
                "abilities": [
                    { "universalId": 7, "name": "Flurry", "tier": 1,
                      "totalRanks": 3, "originalClassNames": ["Warrior"] }
                ]
            }"#;
            Ok(AbilityCatalog::from_json(json).unwrap())
        }
    }

    #[test]
    fn engine_saves_and_reloads_the_active_build() {
        let mut engine = PlannerEngine::new(FixtureCatalog, MemoryStore::new());
        engine.refresh_catalog().unwrap();

        let flurry = engine.catalog().by_id(7).unwrap().clone();
        engine.build_mut().set_name("Tank");
        engine.build_mut().set_class(Some(GameClass::Warrior));
        engine.build_mut().set_ability_rank(&flurry, 2);
        engine.save_build("Tank").unwrap();

        engine.reset_build();
        assert!(engine.build().selected_abilities().is_empty());

        let loaded = engine.load_build("Tank").unwrap().expect("save exists");
        assert_eq!(loaded.name, "Tank");
        assert_eq!(loaded.ability_rank(7), Some(2));
        assert!(engine.load_build("missing").unwrap().is_none());
    }

    #[test]
    fn missing_load_leaves_active_build_alone() {
        let mut engine = PlannerEngine::new(FixtureCatalog, MemoryStore::new());
        engine.build_mut().set_name("Keep Me");
        assert!(engine.load_build("nope").unwrap().is_none());
        assert_eq!(engine.build().name, "Keep Me");
    }

    #[test]
    fn delete_is_idempotent_through_the_engine() {
        let engine = PlannerEngine::new(FixtureCatalog, MemoryStore::new());
        engine.save_build("Gone").unwrap();
        engine.delete_build("Gone").unwrap();
        engine.delete_build("Gone").unwrap();
        assert!(engine.list_builds().unwrap().is_empty());
    }
}
