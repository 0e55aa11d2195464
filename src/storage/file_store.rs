//! JSON file backed key-value storage
//!
//! All keys live in one JSON object (`storage.json` in the data directory). The file
//! is read once when opened and rewritten in full on every change through a temp
//! file and rename, so a crash mid-write leaves the previous contents intact.

use crate::error::{PortalError, Result};
use crate::storage::{KeyValueStore, SharedStore};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// File name of the storage file inside the data directory
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// [`KeyValueStore`] persisted to a single JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`
    ///
    /// A missing file yields an empty store. A corrupt file is ignored with a warning
    /// and replaced on the first write; opening never fails on bad contents.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let entries = if path.exists() {
            // Raw bytes: invalid UTF-8 is a parse failure, not an IO failure
            let bytes = std::fs::read(&path)?;
            match serde_json::from_slice::<BTreeMap<String, String>>(&bytes) {
                Ok(entries) => {
                    info!("Storage loaded with {} keys from {}", entries.len(), path.display());
                    entries
                }
                Err(e) => {
                    warn!("Failed to parse storage file, starting empty: {}", e);
                    BTreeMap::new()
                }
            }
        } else {
            info!("Storage file not found, starting empty");
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Open `storage.json` inside `data_dir`
    pub fn open_in(data_dir: &Path) -> Result<Self> {
        Self::open(data_dir.join(STORAGE_FILE_NAME))
    }

    /// Wrap this store for sharing between stores
    pub fn shared(self) -> SharedStore {
        Arc::new(self)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Atomic write: serialize to a temp file next to the target, then rename
    fn flush(&self, entries: &BTreeMap<String, String>) -> std::io::Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(entries)?;
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(json.as_bytes())?;
        temp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    fn write_key(&self, key: &str, update: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<()> {
        let mut entries = self.entries.lock();
        update(&mut entries);

        self.flush(&entries)
            .map_err(|e| PortalError::StorageWriteFailed {
                key: key.to_string(),
                source: Box::new(e),
            })?;

        debug!("Storage key {} written", key);
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.write_key(key, |entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.entries.lock().contains_key(key) {
            return Ok(());
        }
        self.write_key(key, |entries| {
            entries.remove(key);
        })
    }
}
