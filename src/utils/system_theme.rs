//! Host dark-mode preference detection
//!
//! Queried once at startup to seed the theme when the user has not chosen one.
//! Every platform lookup is best effort: `None` means "unknown" and the caller
//! falls back to light.
//!
//! - Windows: `AppsUseLightTheme` under the current user's Personalize registry key
//! - macOS: `defaults read -g AppleInterfaceStyle`
//! - Other Unix: `GTK_THEME`, then the GNOME `color-scheme` setting

use tracing::debug;

/// Source of the host's light/dark preference
pub trait SystemThemeProbe {
    /// `Some(true)` if the host prefers dark, `Some(false)` if light, `None` if unknown
    fn prefers_dark(&self) -> Option<bool>;
}

/// Probe with a fixed answer, for tests and for disabling detection
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedThemeProbe(pub Option<bool>);

impl SystemThemeProbe for FixedThemeProbe {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Probe reading the current platform's setting
#[derive(Debug, Clone, Copy, Default)]
pub struct HostThemeProbe;

impl SystemThemeProbe for HostThemeProbe {
    fn prefers_dark(&self) -> Option<bool> {
        let result = platform_prefers_dark();
        debug!("Host dark-mode preference: {:?}", result);
        result
    }
}

#[cfg(windows)]
fn platform_prefers_dark() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    const PERSONALIZE_KEY: &str =
        r"Software\Microsoft\Windows\CurrentVersion\Themes\Personalize";

    let key = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey(PERSONALIZE_KEY)
        .ok()?;
    let apps_use_light_theme: u32 = key.get_value("AppsUseLightTheme").ok()?;
    Some(apps_use_light_theme == 0)
}

#[cfg(target_os = "macos")]
fn platform_prefers_dark() -> Option<bool> {
    let output = std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;

    // The key only exists while dark mode is on; a failed read means light
    if !output.status.success() {
        return Some(false);
    }
    Some(parse_apple_interface_style(&String::from_utf8_lossy(&output.stdout)))
}

#[cfg(all(unix, not(target_os = "macos")))]
fn platform_prefers_dark() -> Option<bool> {
    if let Some(dark) = std::env::var("GTK_THEME")
        .ok()
        .and_then(|theme| parse_gtk_theme(&theme))
    {
        return Some(dark);
    }

    let output = std::process::Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", "color-scheme"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    parse_gnome_color_scheme(&String::from_utf8_lossy(&output.stdout))
}

#[cfg(not(any(windows, unix)))]
fn platform_prefers_dark() -> Option<bool> {
    None
}

/// `AppleInterfaceStyle` is `Dark` while dark mode is on
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn parse_apple_interface_style(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("dark")
}

/// `GTK_THEME` selects a dark variant with a `:dark` suffix, e.g. `Adwaita:dark`
#[cfg_attr(any(windows, target_os = "macos"), allow(dead_code))]
fn parse_gtk_theme(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Some(value.to_ascii_lowercase().ends_with(":dark"))
}

/// `gsettings` prints the GNOME color scheme as a quoted token
#[cfg_attr(any(windows, target_os = "macos"), allow(dead_code))]
fn parse_gnome_color_scheme(value: &str) -> Option<bool> {
    match value.trim().trim_matches('\'') {
        "prefer-dark" => Some(true),
        "prefer-light" | "default" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_probe() {
        assert_eq!(FixedThemeProbe(Some(true)).prefers_dark(), Some(true));
        assert_eq!(FixedThemeProbe::default().prefers_dark(), None);
    }

    #[test]
    fn test_parse_apple_interface_style() {
        assert!(parse_apple_interface_style("Dark\n"));
        assert!(!parse_apple_interface_style("Light"));
    }

    #[test]
    fn test_parse_gtk_theme() {
        assert_eq!(parse_gtk_theme("Adwaita:dark"), Some(true));
        assert_eq!(parse_gtk_theme("Adwaita"), Some(false));
        assert_eq!(parse_gtk_theme("  "), None);
    }

    #[test]
    fn test_parse_gnome_color_scheme() {
        assert_eq!(parse_gnome_color_scheme("'prefer-dark'\n"), Some(true));
        assert_eq!(parse_gnome_color_scheme("'default'\n"), Some(false));
        assert_eq!(parse_gnome_color_scheme("'prefer-light'"), Some(false));
        assert_eq!(parse_gnome_color_scheme("garbage"), None);
    }

    #[test]
    fn test_host_probe_does_not_panic() {
        // Result depends on the machine running the tests
        let _ = HostThemeProbe.prefers_dark();
    }
}
