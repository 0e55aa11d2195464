//! Favorites persistence
//!
//! Favorites are stored as a JSON array of catalog ids. The set is read once at
//! startup and written in full after every toggle.
//!
//! An earlier release stored favorites under [`LEGACY_FAVORITES_KEY`]. On load,
//! legacy data that still parses as a list of ids is carried over when no current
//! value exists; the legacy key is deleted either way so it is handled only once.

use crate::error::Result;
use crate::storage::SharedStore;
use serde::Serialize;
use tracing::{debug, error, info, warn};

/// Storage key holding the favorites list
pub const FAVORITES_KEY: &str = "app-portal-favorites-v2";

/// Storage key used by the previous favorites format
pub const LEGACY_FAVORITES_KEY: &str = "app-portal-favorites";

/// Insertion-ordered set of catalog ids
///
/// Order carries no meaning for display (favorites render in catalog order);
/// it is kept so the persisted list is stable across toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<String>,
}

impl FavoriteSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stored JSON array of ids, collapsing duplicates
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let ids: Vec<String> = serde_json::from_str(json)?;
        Ok(ids.into_iter().collect())
    }

    /// Serialize as a JSON array of ids
    pub fn to_json(&self) -> String {
        // A Vec<String> always serializes
        serde_json::to_string(&self.ids).unwrap_or_else(|_| "[]".to_string())
    }

    /// Whether `id` is a favorite
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    /// Add `id`; returns false if it was already present
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove `id`; returns false if it was not present
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|f| f != id);
        self.ids.len() != before
    }

    /// Remove `id` if present, otherwise add it; returns whether it is now a favorite
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    /// Ids in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Number of ids
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

/// Favorites backed by persisted storage
pub struct FavoritesStore {
    storage: SharedStore,
    favorites: FavoriteSet,
}

impl FavoritesStore {
    /// Load favorites from `storage`
    ///
    /// Missing or unparsable data yields an empty set. The loaded set is written back
    /// so the stored value is normalized (no duplicates, current key).
    pub fn load(storage: SharedStore) -> Self {
        let favorites = match storage.get(FAVORITES_KEY) {
            Some(json) => match FavoriteSet::from_json(&json) {
                Ok(favorites) => favorites,
                Err(e) => {
                    warn!("Failed to parse stored favorites, starting empty: {}", e);
                    FavoriteSet::new()
                }
            },
            None => Self::migrate_legacy(&storage).unwrap_or_default(),
        };

        Self::drop_legacy(&storage);

        info!("Loaded {} favorites", favorites.len());

        let store = Self { storage, favorites };
        if let Err(e) = store.persist() {
            error!("Failed to write favorites after load: {}", e);
        }
        store
    }

    /// Read favorites from the legacy key if it parses as a list of ids
    fn migrate_legacy(storage: &SharedStore) -> Option<FavoriteSet> {
        let json = storage.get(LEGACY_FAVORITES_KEY)?;
        match FavoriteSet::from_json(&json) {
            Ok(favorites) => {
                info!("Migrating {} favorites from legacy storage key", favorites.len());
                Some(favorites)
            }
            Err(e) => {
                warn!("Discarding unreadable legacy favorites: {}", e);
                None
            }
        }
    }

    fn drop_legacy(storage: &SharedStore) {
        if storage.get(LEGACY_FAVORITES_KEY).is_none() {
            return;
        }
        match storage.remove(LEGACY_FAVORITES_KEY) {
            Ok(()) => debug!("Removed legacy favorites key"),
            Err(e) => error!("Failed to remove legacy favorites key: {}", e),
        }
    }

    /// Write the full set to storage
    fn persist(&self) -> Result<()> {
        self.storage.set(FAVORITES_KEY, &self.favorites.to_json())
    }

    /// Toggle `id` and persist; returns whether it is now a favorite
    ///
    /// The in-memory set changes even when the write fails, so the UI keeps
    /// reflecting the click; the error only reports that it was not saved.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let now_favorite = self.favorites.toggle(id);
        debug!("Favorite {} toggled to {}", id, now_favorite);
        self.persist()?;
        Ok(now_favorite)
    }

    /// Whether `id` is a favorite
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Current favorites
    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }
}
