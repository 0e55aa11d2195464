//! Configuration management module
//!
//! This module handles loading, saving, and managing application configuration.
//! Configuration is stored in `config.json` inside the data directory with atomic
//! writes to prevent corruption.

pub mod manager;
pub mod models;

pub use manager::{ConfigManager, ConfigStatus};
pub use models::{PortalConfig, UserPreferences, WindowState};
