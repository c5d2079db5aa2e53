//! HTTP client for the Ascendant EQ game-data API.
//!
//! URLs are built by pure functions so they can be tested natively; the
//! actual fetch runs through `web_sys` and only exists on wasm targets.
//! Requests are single-shot with no retry; callers surface failures as a
//! dismissable status message.

use aaforge_core::GameClass;
#[cfg(target_arch = "wasm32")]
use aaforge_core::{AbilityCatalog, Item, Spell};

pub const API_BASE: &str = "https://ascendanteq.com";

/// Search endpoints cap result counts server-side; we ask for the same cap.
const SEARCH_LIMIT: u32 = 100;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server responded with status {0}")]
    Status(u16),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parameters for a spell search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpellQuery {
    pub name: String,
    pub class: Option<GameClass>,
    pub min_level: Option<u8>,
    pub max_level: Option<u8>,
}

/// Percent-encode a query-string component.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[must_use]
pub fn ability_tree_url() -> String {
    format!("{API_BASE}/api/aa/universal/tree")
}

#[must_use]
pub fn item_search_url(name: &str) -> String {
    format!(
        "{API_BASE}/api/items/search?name={}&limit={SEARCH_LIMIT}",
        encode_component(name)
    )
}

#[must_use]
pub fn spell_search_url(query: &SpellQuery) -> String {
    let mut url = format!(
        "{API_BASE}/api/spells/search?name={}",
        encode_component(&query.name)
    );
    if let Some(class) = query.class {
        url.push_str(&format!("&classId={}", class.id()));
    }
    if let Some(min) = query.min_level {
        url.push_str(&format!("&minLevel={min}"));
    }
    if let Some(max) = query.max_level {
        url.push_str(&format!("&maxLevel={max}"));
    }
    url.push_str(&format!("&limit={SEARCH_LIMIT}"));
    url
}

#[cfg(target_arch = "wasm32")]
mod fetch {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    use super::ApiError;

    fn js_err(e: wasm_bindgen::JsValue) -> ApiError {
        ApiError::Network(format!("{e:?}"))
    }

    pub(super) async fn fetch_text(url: &str) -> Result<String, ApiError> {
        let window =
            web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
        let resp = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(js_err)?;
        let resp: web_sys::Response = resp
            .dyn_into()
            .map_err(|_| ApiError::Network("fetch did not yield a Response".to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body = JsFuture::from(resp.text().map_err(js_err)?)
            .await
            .map_err(js_err)?;
        body.as_string()
            .ok_or_else(|| ApiError::Network("response body was not text".to_string()))
    }
}

/// Fetch the universal ability tree.
///
/// # Errors
///
/// Returns an error on transport failure, a non-2xx status, or a payload
/// that does not parse as an ability tree.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_ability_tree() -> Result<AbilityCatalog, ApiError> {
    let body = fetch::fetch_text(&ability_tree_url()).await?;
    Ok(AbilityCatalog::from_json(&body)?)
}

/// Search items by name.
///
/// # Errors
///
/// Same failure modes as [`fetch_ability_tree`].
#[cfg(target_arch = "wasm32")]
pub async fn search_items(name: &str) -> Result<Vec<Item>, ApiError> {
    let body = fetch::fetch_text(&item_search_url(name)).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Search spells with the given criteria.
///
/// # Errors
///
/// Same failure modes as [`fetch_ability_tree`].
#[cfg(target_arch = "wasm32")]
pub async fn search_spells(query: &SpellQuery) -> Result<Vec<Spell>, ApiError> {
    let body = fetch::fetch_text(&spell_search_url(query)).await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_url_is_fixed() {
        assert_eq!(
            ability_tree_url(),
            "https://ascendanteq.com/api/aa/universal/tree"
        );
    }

    #[test]
    fn item_url_encodes_the_name() {
        assert_eq!(
            item_search_url("Blade of Carnage"),
            "https://ascendanteq.com/api/items/search?name=Blade%20of%20Carnage&limit=100"
        );
        assert_eq!(
            item_search_url("Fizzlethorpe's 50% Charm & Co"),
            "https://ascendanteq.com/api/items/search?name=Fizzlethorpe%27s%2050%25%20Charm%20%26%20Co&limit=100"
        );
    }

    #[test]
    fn spell_url_includes_only_set_params() {
        let bare = SpellQuery {
            name: "heal".to_string(),
            ..SpellQuery::default()
        };
        assert_eq!(
            spell_search_url(&bare),
            "https://ascendanteq.com/api/spells/search?name=heal&limit=100"
        );

        let full = SpellQuery {
            name: "complete heal".to_string(),
            class: Some(GameClass::Cleric),
            min_level: Some(1),
            max_level: Some(60),
        };
        assert_eq!(
            spell_search_url(&full),
            "https://ascendanteq.com/api/spells/search?name=complete%20heal&classId=2&minLevel=1&maxLevel=60&limit=100"
        );
    }
}
