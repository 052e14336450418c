//! System appearance detection
//!
//! Reads the OS/terminal dark-mode signal once at startup. Checks, in order:
//! - `COLORFGBG` (set by many terminals, "fg;bg")
//! - macOS `AppleInterfaceStyle`
//! - GNOME `color-scheme`
//!
//! Anything that cannot be read counts as "not dark".

use crate::types::ThemeMode;
use std::env;
use std::process::Command;

/// Whether the system prefers a dark appearance
pub fn prefers_dark() -> bool {
    if let Ok(value) = env::var("COLORFGBG") {
        if let Some(dark) = parse_colorfgbg(&value) {
            return dark;
        }
    }

    if cfg!(target_os = "macos") {
        return macos_prefers_dark();
    }

    gnome_prefers_dark()
}

/// Pick the startup theme: stored preference, else system signal, else light
pub fn resolve_initial_theme(stored: Option<ThemeMode>, system_dark: impl FnOnce() -> bool) -> ThemeMode {
    match stored {
        Some(theme) => theme,
        None if system_dark() => ThemeMode::Dark,
        None => ThemeMode::Light,
    }
}

/// "15;0" means light text on a black background
fn parse_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    // 0-6 and 8 are the dark entries of the 16-color palette
    Some(matches!(bg, 0..=6 | 8))
}

fn macos_prefers_dark() -> bool {
    Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().eq_ignore_ascii_case("dark"))
        .unwrap_or(false)
}

fn gnome_prefers_dark() -> bool {
    Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", "color-scheme"])
        .output()
        .map(|out| out.status.success() && String::from_utf8_lossy(&out.stdout).contains("dark"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_colorfgbg() {
        assert_eq!(parse_colorfgbg("15;0"), Some(true));
        assert_eq!(parse_colorfgbg("0;15"), Some(false));
        assert_eq!(parse_colorfgbg("12;default;8"), Some(true));
        assert_eq!(parse_colorfgbg("default"), None);
    }

    #[test]
    fn test_system_dark_without_stored_preference() {
        assert_eq!(resolve_initial_theme(None, || true), ThemeMode::Dark);
        assert_eq!(resolve_initial_theme(None, || false), ThemeMode::Light);
    }

    #[test]
    fn test_stored_preference_wins() {
        assert_eq!(
            resolve_initial_theme(Some(ThemeMode::Light), || true),
            ThemeMode::Light
        );
    }

    #[test]
    fn test_system_not_probed_when_stored() {
        let theme = resolve_initial_theme(Some(ThemeMode::Dark), || {
            panic!("system signal must not be read")
        });
        assert_eq!(theme, ThemeMode::Dark);
    }
}
