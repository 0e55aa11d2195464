//! Theme persistence
//!
//! The light/dark choice is stored as the literal token `"light"` or `"dark"`.
//! At startup a stored value wins (anything but `"dark"` reads as light), then the
//! host's preference, then light. The resolved value is fixed for the session: later changes to the host
//! preference are not followed, only explicit toggles change it.

use crate::error::Result;
use crate::storage::SharedStore;
use crate::utils::system_theme::SystemThemeProbe;
use std::fmt;
use tracing::{debug, error, info};

/// Storage key holding the theme token
pub const THEME_KEY: &str = "app-portal-theme";

/// Light or dark presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light palette
    #[default]
    Light,
    /// Dark palette
    Dark,
}

impl ThemeMode {
    /// Stored token
    pub fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored token; anything other than the two literals is rejected
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Mode for a dark-mode flag
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Whether this is the dark palette
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The other mode
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Startup resolution: stored token, then host preference, then light
    ///
    /// Any stored value other than `"dark"` means light; the host preference is
    /// only consulted when nothing (or an empty string) was stored.
    pub fn resolve(stored: Option<&str>, prefers_dark: impl FnOnce() -> Option<bool>) -> Self {
        match stored.filter(|token| !token.is_empty()) {
            Some(token) => Self::from_token(token).unwrap_or(Self::Light),
            None => prefers_dark().map_or(Self::Light, Self::from_dark),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Theme choice backed by persisted storage
pub struct ThemeStore {
    storage: SharedStore,
    mode: ThemeMode,
}

impl ThemeStore {
    /// Resolve the startup theme and write it back
    ///
    /// The probe is consulted only when storage holds no valid token.
    pub fn load(storage: SharedStore, probe: &dyn SystemThemeProbe) -> Self {
        let stored = storage.get(THEME_KEY);
        let mode = ThemeMode::resolve(stored.as_deref(), || probe.prefers_dark());

        info!(
            "Theme resolved to {} ({})",
            mode,
            if stored.as_deref().is_some_and(|token| !token.is_empty()) {
                "stored choice"
            } else {
                "system preference"
            }
        );

        let store = Self { storage, mode };
        if let Err(e) = store.persist() {
            error!("Failed to write theme after load: {}", e);
        }
        store
    }

    fn persist(&self) -> Result<()> {
        self.storage.set(THEME_KEY, self.mode.token())
    }

    /// Current mode
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Whether the dark palette is active
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Set and persist the mode
    ///
    /// Like favorites, the in-memory mode changes even if the write fails.
    pub fn set(&mut self, mode: ThemeMode) -> Result<()> {
        self.mode = mode;
        debug!("Theme set to {}", mode);
        self.persist()
    }

    /// Flip and persist the mode; returns the new mode
    pub fn toggle(&mut self) -> Result<ThemeMode> {
        let mode = self.mode.toggled();
        self.set(mode)?;
        Ok(mode)
    }
}
