//! Startup loading: fetch the ability catalog and read the saved-build list
//! before the first meaningful render.

#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let catalog = app_state.catalog.clone();
    let catalog_ready = app_state.catalog_ready.clone();
    let saved_builds = app_state.saved_builds.clone();
    let status = app_state.status.clone();

    use_effect_with((), move |()| {
        crate::app::handlers::refresh_saved_builds(&saved_builds);
        wasm_bindgen_futures::spawn_local(async move {
            match crate::api::fetch_ability_tree().await {
                Ok(tree) => {
                    log::info!("ability tree loaded, {} abilities", tree.len());
                    catalog.set(tree);
                }
                Err(e) => {
                    status.set(Some(AttrValue::from(format!(
                        "Could not load the ability tree: {e}"
                    ))));
                }
            }
            catalog_ready.set(true);
        });
        || {}
    });
}
