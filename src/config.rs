//! Configuration management for folio
//!
//! Handles loading and saving the theme preference.
//! Config file location: ~/.config/folio/config.toml

use crate::types::ThemeMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Stored theme preference; None means "follow the system at startup"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeMode>,
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("folio");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from a file. A missing file is an empty config.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }
}

/// Durable per-user storage for the theme preference
pub trait PreferenceStore {
    fn load_theme(&self) -> Result<Option<ThemeMode>>;
    fn save_theme(&mut self, theme: ThemeMode) -> Result<()>;
}

/// Preference store backed by the TOML config file
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default config location
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Config::path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for ConfigStore {
    fn load_theme(&self) -> Result<Option<ThemeMode>> {
        Ok(Config::load_from(&self.path)?.theme)
    }

    fn save_theme(&mut self, theme: ThemeMode) -> Result<()> {
        // Keep any other keys a newer version may have written
        let mut config = Config::load_from(&self.path).unwrap_or_default();
        config.theme = Some(theme);
        config.save_to(&self.path)
    }
}

/// In-memory store, used when the config location is unavailable
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub theme: Option<ThemeMode>,
}

impl PreferenceStore for MemoryStore {
    fn load_theme(&self) -> Result<Option<ThemeMode>> {
        Ok(self.theme)
    }

    fn save_theme(&mut self, theme: ThemeMode) -> Result<()> {
        self.theme = Some(theme);
        Ok(())
    }
}
