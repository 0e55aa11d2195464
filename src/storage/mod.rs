//! Persisted key-value storage
//!
//! The portal persists exactly two values, favorites and theme, each under its own
//! string key. Values are plain strings, like browser local storage, so each store
//! owns its own encoding. Stores are handed a [`SharedStore`] instead of reaching
//! for a global.
//!
//! - [`JsonFileStore`]: one JSON object file in the data directory, written atomically
//! - [`MemoryStore`]: in-memory map for tests and as a fallback when the file is unusable

pub mod favorites;
pub mod file_store;
pub mod theme;

use crate::error::Result;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

pub use favorites::{FAVORITES_KEY, FavoriteSet, FavoritesStore, LEGACY_FAVORITES_KEY};
pub use file_store::JsonFileStore;
pub use theme::{THEME_KEY, ThemeMode, ThemeStore};

/// String-keyed, string-valued persistent storage
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, persisting immediately
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`, persisting immediately; removing a missing key is a no-op
    fn remove(&self, key: &str) -> Result<()>;
}

/// Storage handle shared by the favorites and theme stores
pub type SharedStore = Arc<dyn KeyValueStore + Send + Sync>;

/// Non-persistent [`KeyValueStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Wrap this store for sharing between stores
    pub fn shared(self) -> SharedStore {
        Arc::new(self)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}
