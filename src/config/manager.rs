//! Configuration manager for loading and saving application configuration
//!
//! This module resolves the data directory and loads/saves `config.json` inside it
//! with atomic writes to prevent corruption.

use crate::config::models::PortalConfig;
use crate::error::{PortalError, Result, StringError};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "APP_PORTAL_HOME";

/// Directory name created under the platform config directory
const APP_DIR_NAME: &str = "AppPortal";

/// How [`ConfigManager::load_with_status`] obtained the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigStatus {
    /// Parsed from `config.json`
    Loaded,
    /// No `config.json` yet; defaults used
    Missing,
    /// `config.json` could not be parsed; defaults used
    Invalid(String),
}

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the data directory holding config, storage and logs
    ///
    /// Returns: `$APP_PORTAL_HOME`, else `<platform config dir>/AppPortal`, else `.`
    pub fn data_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return PathBuf::from(dir);
        }
        dirs::config_dir().map_or_else(|| PathBuf::from("."), |dir| dir.join(APP_DIR_NAME))
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        Self::data_dir().join("config.json")
    }

    /// Ensure the data directory exists
    pub fn ensure_data_dir() -> Result<PathBuf> {
        let data_dir = Self::data_dir();
        std::fs::create_dir_all(&data_dir)?;
        Ok(data_dir)
    }

    /// Load configuration from disk
    ///
    /// If the configuration file doesn't exist or is corrupt, returns default configuration.
    pub fn load() -> Result<PortalConfig> {
        Self::load_with_status().map(|(config, _)| config)
    }

    /// Load configuration and report where it came from
    ///
    /// Used at startup, where the configuration is read before logging is up and
    /// the outcome has to be logged afterwards.
    pub fn load_with_status() -> Result<(PortalConfig, ConfigStatus)> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            info!("Configuration file not found, using defaults");
            return Ok((PortalConfig::default(), ConfigStatus::Missing));
        }

        // Raw bytes: invalid UTF-8 is a parse failure, not an IO failure
        let bytes = std::fs::read(&config_path)?;

        match serde_json::from_slice(&bytes) {
            Ok(config) => {
                info!("Configuration loaded successfully");
                Ok((config, ConfigStatus::Loaded))
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok((PortalConfig::default(), ConfigStatus::Invalid(e.to_string())))
            }
        }
    }

    /// Save configuration to disk with atomic write
    ///
    /// Uses a temporary file and rename to ensure atomic write operation.
    pub fn save(config: &PortalConfig) -> Result<()> {
        let config_path = Self::get_config_path();
        Self::ensure_data_dir()?;

        let config_dir = config_path
            .parent()
            .ok_or_else(|| PortalError::ConfigError(StringError::new("Invalid config path")))?;

        let json = serde_json::to_string_pretty(config)?;
        let mut temp = NamedTempFile::new_in(config_dir)?;
        temp.write_all(json.as_bytes())?;
        temp.persist(&config_path)
            .map_err(|e| PortalError::ConfigError(Box::new(e)))?;

        info!("Configuration saved successfully");
        Ok(())
    }
}
