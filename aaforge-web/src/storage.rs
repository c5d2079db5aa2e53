//! Browser-local persistence for builds.
//!
//! Implements the core [`BuildStore`] contract over `window.localStorage`,
//! one JSON entry per build under a `aaforge.build.` key prefix.

use aaforge_core::{BuildDocument, BuildStore};

const KEY_PREFIX: &str = "aaforge.build.";

fn storage_key(name: &str) -> String {
    format!("{KEY_PREFIX}{name}")
}

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Build store backed by `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, WebStorageError> {
        web_sys::window()
            .ok_or_else(|| WebStorageError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| WebStorageError::Storage(format!("{e:?}")))?
            .ok_or_else(|| WebStorageError::Storage("localStorage unavailable".to_string()))
    }
}

impl BuildStore for LocalStore {
    type Error = WebStorageError;

    fn save(&self, name: &str, doc: &BuildDocument) -> Result<(), Self::Error> {
        let storage = Self::storage()?;
        let json = doc.to_json()?;
        storage
            .set_item(&storage_key(name), &json)
            .map_err(|e| WebStorageError::Storage(format!("{e:?}")))
    }

    fn load(&self, name: &str) -> Result<Option<BuildDocument>, Self::Error> {
        let storage = Self::storage()?;
        let json = storage
            .get_item(&storage_key(name))
            .map_err(|e| WebStorageError::Storage(format!("{e:?}")))?;
        match json {
            Some(json) => Ok(Some(BuildDocument::from_json(&json)?)),
            None => Ok(None),
        }
    }

    fn list(&self) -> Result<Vec<String>, Self::Error> {
        let storage = Self::storage()?;
        let len = storage
            .length()
            .map_err(|e| WebStorageError::Storage(format!("{e:?}")))?;
        let mut names = Vec::new();
        for i in 0..len {
            let key = storage
                .key(i)
                .map_err(|e| WebStorageError::Storage(format!("{e:?}")))?;
            if let Some(name) = key.as_deref().and_then(|k| k.strip_prefix(KEY_PREFIX)) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn delete(&self, name: &str) -> Result<(), Self::Error> {
        let storage = Self::storage()?;
        storage
            .remove_item(&storage_key(name))
            .map_err(|e| WebStorageError::Storage(format!("{e:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_prefixed() {
        assert_eq!(storage_key("Raid Monk"), "aaforge.build.Raid Monk");
    }

    #[test]
    fn prefix_strip_matches_key_shape() {
        let key = storage_key("Alt");
        assert_eq!(key.strip_prefix(KEY_PREFIX), Some("Alt"));
        assert_eq!("unrelated.key".strip_prefix(KEY_PREFIX), None);
    }
}
