//! Persistence backends for build documents.
//!
//! [`MemoryStore`] backs tests and ephemeral sessions; [`FileStore`] keeps
//! one pretty-printed JSON file per build under a data directory. The web
//! client provides its own `localStorage` backend against the same
//! [`crate::BuildStore`] trait.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::rc::Rc;

use crate::BuildStore;
use crate::document::BuildDocument;

/// Errors from the native file-backed store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("build document is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{0}")]
    Backend(String),
}

/// In-memory store, shared by cheap clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    builds: Rc<RefCell<BTreeMap<String, BuildDocument>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BuildStore for MemoryStore {
    type Error = Infallible;

    fn save(&self, name: &str, doc: &BuildDocument) -> Result<(), Self::Error> {
        self.builds
            .borrow_mut()
            .insert(name.to_string(), doc.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<BuildDocument>, Self::Error> {
        Ok(self.builds.borrow().get(name).cloned())
    }

    fn list(&self) -> Result<Vec<String>, Self::Error> {
        Ok(self.builds.borrow().keys().cloned().collect())
    }

    fn delete(&self, name: &str) -> Result<(), Self::Error> {
        self.builds.borrow_mut().remove(name);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::StoreError;
    use crate::BuildStore;
    use crate::document::BuildDocument;

    /// One JSON file per build under a single directory. File names are a
    /// sanitized form of the build name; the sanitized name is the store
    /// key, so `list` and `load` agree with what `save` wrote.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        dir: PathBuf,
    }

    /// Restrict file names to a portable character set.
    fn sanitize(name: &str) -> String {
        name.trim()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    impl FileStore {
        #[must_use]
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        #[must_use]
        pub fn dir(&self) -> &Path {
            &self.dir
        }

        fn path_for(&self, name: &str) -> Result<PathBuf, StoreError> {
            let stem = sanitize(name);
            if stem.is_empty() {
                return Err(StoreError::Backend(format!(
                    "build name '{name}' has no usable characters"
                )));
            }
            Ok(self.dir.join(format!("{stem}.json")))
        }
    }

    impl BuildStore for FileStore {
        type Error = StoreError;

        fn save(&self, name: &str, doc: &BuildDocument) -> Result<(), Self::Error> {
            let path = self.path_for(name)?;
            fs::create_dir_all(&self.dir)?;
            let json = doc.to_json_pretty()?;
            fs::write(&path, json)?;
            log::info!("saved build '{name}' to {}", path.display());
            Ok(())
        }

        fn load(&self, name: &str) -> Result<Option<BuildDocument>, Self::Error> {
            let path = self.path_for(name)?;
            let json = match fs::read_to_string(&path) {
                Ok(json) => json,
                Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
                Err(e) => return Err(e.into()),
            };
            Ok(Some(BuildDocument::from_json(&json)?))
        }

        fn list(&self) -> Result<Vec<String>, Self::Error> {
            let entries = match fs::read_dir(&self.dir) {
                Ok(entries) => entries,
                Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
                Err(e) => return Err(e.into()),
            };
            let mut names = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if path.extension().is_some_and(|ext| ext == "json") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        names.push(stem.to_string());
                    }
                }
            }
            names.sort();
            Ok(names)
        }

        fn delete(&self, name: &str) -> Result<(), Self::Error> {
            let path = self.path_for(name)?;
            match fs::remove_file(&path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn temp_dir(tag: &str) -> PathBuf {
            let dir = std::env::temp_dir().join(format!(
                "aaforge-store-{tag}-{}",
                std::process::id()
            ));
            let _ = fs::remove_dir_all(&dir);
            dir
        }

        #[test]
        fn save_load_list_delete_round_trip() {
            let dir = temp_dir("roundtrip");
            let store = FileStore::new(&dir);

            assert!(store.list().unwrap().is_empty());
            assert!(store.load("Raid Monk").unwrap().is_none());

            let mut doc = BuildDocument::default();
            doc.name = "Raid Monk".to_string();
            store.save("Raid Monk", &doc).unwrap();

            assert_eq!(store.list().unwrap(), vec!["Raid Monk".to_string()]);
            let loaded = store.load("Raid Monk").unwrap().unwrap();
            assert_eq!(loaded.name, "Raid Monk");

            store.delete("Raid Monk").unwrap();
            assert!(store.load("Raid Monk").unwrap().is_none());
            // Deleting again stays quiet.
            store.delete("Raid Monk").unwrap();

            let _ = fs::remove_dir_all(&dir);
        }

        #[test]
        fn names_are_sanitized_consistently() {
            let dir = temp_dir("sanitize");
            let store = FileStore::new(&dir);

            let doc = BuildDocument::default();
            store.save("war/../rior: alt", &doc).unwrap();
            // Path separators never escape the store directory.
            assert_eq!(store.list().unwrap(), vec!["war____rior_ alt".to_string()]);
            assert!(store.load("war/../rior: alt").unwrap().is_some());

            let _ = fs::remove_dir_all(&dir);
        }

        #[test]
        fn unusable_names_are_rejected() {
            let dir = temp_dir("empty-name");
            let store = FileStore::new(&dir);
            let doc = BuildDocument::default();
            assert!(matches!(
                store.save("   ", &doc),
                Err(StoreError::Backend(_))
            ));
        }
    }
}
