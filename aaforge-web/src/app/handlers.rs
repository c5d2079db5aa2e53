//! Callback builders wiring the pages to the build, the store, and the API.
//!
//! Every handler follows the same clone-mutate-set pattern: read the current
//! handles, apply one intention-revealing mutation, publish the new value.
//! Transport failures become a status message; the in-memory build is never
//! left half-mutated because mutations are local and synchronous.

use aaforge_core::{Build, BuildDocument, BuildStore, GameClass, Item, Race, Slot};
use yew::prelude::*;

use crate::app::state::{AppState, Tab};
use crate::storage::LocalStore;

/// Re-read the saved-build list from the store into the handle.
pub fn refresh_saved_builds(saved: &UseStateHandle<Vec<String>>) {
    match LocalStore.list() {
        Ok(names) => saved.set(names),
        Err(e) => log::warn!("could not list saved builds: {e}"),
    }
}

pub fn save_build(state: &AppState) -> Callback<String> {
    let build_handle = state.build.clone();
    let saved_handle = state.saved_builds.clone();
    let status_handle = state.status.clone();
    Callback::from(move |name: String| {
        let name = if name.trim().is_empty() {
            build_handle.name.clone()
        } else {
            name
        };
        match LocalStore.save(&name, &build_handle.export()) {
            Ok(()) => {
                refresh_saved_builds(&saved_handle);
                status_handle.set(Some(AttrValue::from(format!("Saved '{name}'"))));
            }
            Err(e) => status_handle.set(Some(AttrValue::from(format!("Save failed: {e}")))),
        }
    })
}

pub fn load_build(state: &AppState) -> Callback<String> {
    let build_handle = state.build.clone();
    let catalog_handle = state.catalog.clone();
    let status_handle = state.status.clone();
    let tab_handle = state.tab.clone();
    Callback::from(move |name: String| match LocalStore.load(&name) {
        Ok(Some(doc)) => {
            build_handle.set(Build::import(&doc, &catalog_handle));
            status_handle.set(Some(AttrValue::from(format!("Loaded '{name}'"))));
            tab_handle.set(Tab::Character);
        }
        Ok(None) => {
            status_handle.set(Some(AttrValue::from(format!("No build named '{name}'"))));
        }
        Err(e) => status_handle.set(Some(AttrValue::from(format!("Load failed: {e}")))),
    })
}

pub fn delete_build(state: &AppState) -> Callback<String> {
    let saved_handle = state.saved_builds.clone();
    let status_handle = state.status.clone();
    Callback::from(move |name: String| match LocalStore.delete(&name) {
        Ok(()) => {
            refresh_saved_builds(&saved_handle);
            status_handle.set(Some(AttrValue::from(format!("Deleted '{name}'"))));
        }
        Err(e) => status_handle.set(Some(AttrValue::from(format!("Delete failed: {e}")))),
    })
}

pub fn reset_build(state: &AppState) -> Callback<()> {
    let build_handle = state.build.clone();
    Callback::from(move |()| {
        let mut build = (*build_handle).clone();
        build.reset();
        build_handle.set(build);
    })
}

/// Copy the active build's document form to the clipboard.
pub fn export_to_clipboard(state: &AppState) -> Callback<()> {
    let build_handle = state.build.clone();
    let status_handle = state.status.clone();
    Callback::from(move |()| {
        let Ok(text) = build_handle.export().to_json_pretty() else {
            return;
        };
        if let Some(win) = web_sys::window() {
            let nav = win.navigator();
            let cb = nav.clipboard();
            let _ = cb.write_text(&text);
            status_handle.set(Some(AttrValue::from("Build copied to clipboard")));
        }
    })
}

/// Import a pasted build document, replacing the active build.
pub fn import_from_text(state: &AppState) -> Callback<String> {
    let build_handle = state.build.clone();
    let catalog_handle = state.catalog.clone();
    let status_handle = state.status.clone();
    Callback::from(move |text: String| match BuildDocument::from_json(&text) {
        Ok(doc) => {
            let build = Build::import(&doc, &catalog_handle);
            status_handle.set(Some(AttrValue::from(format!("Imported '{}'", build.name))));
            build_handle.set(build);
        }
        Err(e) => {
            status_handle.set(Some(AttrValue::from(format!("Import failed: {e}"))));
        }
    })
}

pub fn set_name(state: &AppState) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |name: String| state.update_build(|b| b.set_name(name)))
}

pub fn set_level(state: &AppState) -> Callback<u8> {
    let state = state.clone();
    Callback::from(move |level: u8| state.update_build(|b| b.set_level(level)))
}

pub fn set_race(state: &AppState) -> Callback<Option<Race>> {
    let state = state.clone();
    Callback::from(move |race| state.update_build(|b| b.set_race(race)))
}

pub fn set_class(state: &AppState) -> Callback<Option<GameClass>> {
    let state = state.clone();
    Callback::from(move |class| state.update_build(|b| b.set_class(class)))
}

/// Cycle one ability through unselected, ranks 1..max, unselected.
pub fn toggle_ability(state: &AppState) -> Callback<u32> {
    let catalog_handle = state.catalog.clone();
    let state = state.clone();
    Callback::from(move |universal_id: u32| {
        if let Some(ability) = catalog_handle.by_id(universal_id).cloned() {
            state.update_build(|b| b.toggle_ability(&ability, Some(ability.total_ranks)));
        }
    })
}

pub fn set_ability_rank(state: &AppState) -> Callback<(u32, i32)> {
    let catalog_handle = state.catalog.clone();
    let state = state.clone();
    Callback::from(move |(universal_id, rank): (u32, i32)| {
        if let Some(ability) = catalog_handle.by_id(universal_id).cloned() {
            state.update_build(|b| b.set_ability_rank(&ability, rank));
        }
    })
}

pub fn equip_item(state: &AppState) -> Callback<(Slot, Item)> {
    let state = state.clone();
    Callback::from(move |(slot, item): (Slot, Item)| state.update_build(|b| b.equip(slot, item)))
}

pub fn unequip_item(state: &AppState) -> Callback<Slot> {
    let state = state.clone();
    Callback::from(move |slot: Slot| state.update_build(|b| b.unequip(slot)))
}

pub fn dismiss_status(state: &AppState) -> Callback<()> {
    let status_handle = state.status.clone();
    Callback::from(move |()| status_handle.set(None))
}

/// Fire an item search and publish the results when they arrive. The page
/// may already be gone by then; setting a stale handle is harmless.
#[cfg(target_arch = "wasm32")]
pub fn search_items(state: &AppState) -> Callback<String> {
    let items_handle = state.items.clone();
    let status_handle = state.status.clone();
    Callback::from(move |name: String| {
        let items_handle = items_handle.clone();
        let status_handle = status_handle.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match crate::api::search_items(&name).await {
                Ok(results) => items_handle.set(results),
                Err(e) => {
                    status_handle.set(Some(AttrValue::from(format!("Item search failed: {e}"))));
                }
            }
        });
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn search_items(_state: &AppState) -> Callback<String> {
    Callback::noop()
}

#[cfg(target_arch = "wasm32")]
pub fn search_spells(state: &AppState) -> Callback<crate::api::SpellQuery> {
    let spells_handle = state.spells.clone();
    let status_handle = state.status.clone();
    Callback::from(move |query: crate::api::SpellQuery| {
        let spells_handle = spells_handle.clone();
        let status_handle = status_handle.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match crate::api::search_spells(&query).await {
                Ok(results) => spells_handle.set(results),
                Err(e) => {
                    status_handle.set(Some(AttrValue::from(format!("Spell search failed: {e}"))));
                }
            }
        });
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn search_spells(_state: &AppState) -> Callback<crate::api::SpellQuery> {
    Callback::noop()
}
