// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[content]` - Optional path to a `profile.toml` overriding the built-in portfolio content
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.general.theme_mode = iced_folio::ui::theming::ThemeMode::Dark;
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedFolio";
const CONFIG_DIR_ENV: &str = "ICED_FOLIO_CONFIG_DIR";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Portfolio content settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentConfig {
    /// Path to a `profile.toml` file overriding the built-in portfolio content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

/// Resolves the directory holding `settings.toml`.
///
/// An explicit override (CLI flag) wins, then the `ICED_FOLIO_CONFIG_DIR`
/// environment variable, then the platform config directory.
pub fn config_dir(override_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir.to_path_buf());
    }
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn default_config_path(override_dir: Option<&Path>) -> Option<PathBuf> {
    config_dir(override_dir).map(|dir| dir.join(CONFIG_FILE))
}

pub fn load() -> Result<Config> {
    load_with_dir(None)
}

/// Loads the configuration, honoring a config directory override.
///
/// A missing file yields the default configuration rather than an error.
pub fn load_with_dir(override_dir: Option<&Path>) -> Result<Config> {
    if let Some(path) = default_config_path(override_dir) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    save_with_dir(config, None)
}

pub fn save_with_dir(config: &Config, override_dir: Option<&Path>) -> Result<()> {
    if let Some(path) = default_config_path(override_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    // Invalid TOML falls back to defaults; a broken settings file must not
    // keep the application from starting.
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
            },
            content: ContentConfig {
                profile: Some(PathBuf::from("/tmp/profile.toml")),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn load_with_dir_returns_default_when_file_missing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let loaded = load_with_dir(Some(temp_dir.path())).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn explicit_override_wins_over_platform_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = config_dir(Some(temp_dir.path())).expect("override should resolve");
        assert_eq!(dir, temp_dir.path());
    }

    #[test]
    fn default_theme_mode_is_system() {
        assert_eq!(Config::default().general.theme_mode, ThemeMode::System);
    }
}
