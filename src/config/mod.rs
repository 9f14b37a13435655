// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! Preferences cover the locale, the reveal-animation policy active for the
//! page, the parallax speed factor, and the theme mode. Every field is
//! optional so configs written by older builds keep loading.

use crate::effects::reveal::RevealPolicy;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedStage";

/// Default vertical speed factor for the hero parallax effect.
pub const DEFAULT_PARALLAX_SPEED: f32 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub reveal_policy: Option<RevealPolicy>,
    #[serde(default)]
    pub parallax_speed: Option<f32>,
    #[serde(default)]
    pub theme_mode: Option<ThemeMode>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            reveal_policy: Some(RevealPolicy::default()),
            parallax_speed: Some(DEFAULT_PARALLAX_SPEED),
            theme_mode: Some(ThemeMode::default()),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
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
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            language: Some("fr".to_string()),
            reveal_policy: Some(RevealPolicy::Theatrical),
            parallax_speed: Some(0.25),
            theme_mode: Some(ThemeMode::Dark),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.reveal_policy, config.reveal_policy);
        assert_eq!(loaded.parallax_speed, config.parallax_speed);
        assert_eq!(loaded.theme_mode, config.theme_mode);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_activates_slide_up_reveal() {
        let config = Config::default();
        assert_eq!(config.reveal_policy, Some(RevealPolicy::SlideUp));
        assert_eq!(config.parallax_speed, Some(DEFAULT_PARALLAX_SPEED));
    }

    #[test]
    fn reveal_policy_uses_kebab_case_in_toml() {
        let config = Config {
            reveal_policy: Some(RevealPolicy::FadeIn),
            ..Config::default()
        };
        let serialized = toml::to_string(&config).expect("serialization failed");
        assert!(serialized.contains("fade-in"));
    }
}
