//! Shared test utilities for `App Portal` unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use crate::config::manager::DATA_DIR_ENV;
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize tests that modify the data directory environment variable.
static DATA_DIR_LOCK: Mutex<()> = Mutex::new(());

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard that points `APP_PORTAL_HOME` at a temp directory for a test scope
/// and restores the original value when dropped.
///
/// # Safety Considerations
///
/// `std::env::set_var` and `std::env::remove_var` are unsafe because another thread
/// may read the environment concurrently. Every test that touches the variable holds
/// `DATA_DIR_LOCK` for the guard's lifetime, so modifications are serialized, and the
/// original value is restored on drop (including on panic).
pub struct DataDirGuard {
    original: Option<std::ffi::OsString>,
    // Held for the lifetime of the guard
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables under a global lock"
)]
impl DataDirGuard {
    /// Create a new guard that sets `APP_PORTAL_HOME` to the given temp directory path.
    pub fn new(temp_dir: &TempDir) -> Self {
        // A panicking test poisons the lock; the guarded data is unit so recover it
        let lock = DATA_DIR_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var_os(DATA_DIR_ENV);
        // SAFETY: DATA_DIR_LOCK serializes all writers; see struct-level documentation.
        unsafe {
            std::env::set_var(DATA_DIR_ENV, temp_dir.path());
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables under a global lock"
)]
impl Drop for DataDirGuard {
    fn drop(&mut self) {
        // SAFETY: the lock is still held; see struct-level documentation.
        match self.original.take() {
            Some(original) => unsafe {
                std::env::set_var(DATA_DIR_ENV, original);
            },
            None => unsafe {
                std::env::remove_var(DATA_DIR_ENV);
            },
        }
    }
}
