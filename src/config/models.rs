//! Configuration data models
//!
//! This module defines the data structures used for application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// External catalog file replacing the bundled catalog
    pub catalog_path: Option<PathBuf>,
    /// User preferences
    pub preferences: UserPreferences,
    /// Window state for persistence
    pub window_state: WindowState,
}

/// User preferences and settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    /// Whether clicking a card opens its link in the default browser
    pub open_links_on_click: bool,
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
}

/// Window size persisted between sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowState {
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
}

impl WindowState {
    /// Smallest size the layout supports
    pub const MIN_WIDTH: u32 = 480;
    /// Smallest size the layout supports
    pub const MIN_HEIGHT: u32 = 400;

    /// Size clamped to the supported minimum
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(Self::MIN_WIDTH),
            height: self.height.max(Self::MIN_HEIGHT),
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            preferences: UserPreferences::default(),
            window_state: WindowState::default(),
        }
    }
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            open_links_on_click: true,
            log_level: "info".to_string(),
        }
    }
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            width: 1100,
            height: 760,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PortalConfig::default();
        assert!(config.catalog_path.is_none());
        assert!(config.preferences.open_links_on_click);
        assert_eq!(config.preferences.log_level, "info");
    }

    #[test]
    fn test_serialization() {
        let mut config = PortalConfig::default();
        config.catalog_path = Some(PathBuf::from("/srv/portal/catalog.json"));
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: PortalConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: PortalConfig =
            serde_json::from_str(r#"{"preferences":{"log_level":"debug"}}"#).unwrap();
        assert_eq!(config.preferences.log_level, "debug");
        assert!(config.preferences.open_links_on_click);
        assert_eq!(config.window_state, WindowState::default());
    }

    #[test]
    fn test_window_state_clamped() {
        let state = WindowState { width: 10, height: 2000 }.clamped();
        assert_eq!(state.width, WindowState::MIN_WIDTH);
        assert_eq!(state.height, 2000);
    }
}
