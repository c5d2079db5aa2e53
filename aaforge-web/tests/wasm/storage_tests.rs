use wasm_bindgen_test::*;

use aaforge_core::{Build, BuildStore};
use aaforge_web::storage::LocalStore;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_store_round_trips_builds() {
    let store = LocalStore;
    let mut build = Build::new();
    build.set_name("Wasm Smoke");

    store.save("Wasm Smoke", &build.export()).unwrap();
    assert!(store.list().unwrap().contains(&"Wasm Smoke".to_string()));

    let doc = store.load("Wasm Smoke").unwrap().expect("saved build");
    assert_eq!(doc.name, "Wasm Smoke");

    store.delete("Wasm Smoke").unwrap();
    assert!(store.load("Wasm Smoke").unwrap().is_none());
    // Idempotent delete.
    store.delete("Wasm Smoke").unwrap();
}
