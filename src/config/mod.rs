// SPDX-License-Identifier: MPL-2.0
//! This module handles the widget configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode of the demo application
//! - `[toasts]` - Default dismiss delay and on-screen placement
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.toasts.dismiss_time_ms = Some(3500);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::toast::ProviderConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

/// Screen corner the toast stack is anchored to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastsConfig {
    /// Default auto-dismiss delay in milliseconds.
    #[serde(
        default = "default_dismiss_time_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_time_ms: Option<u64>,

    /// Corner the toast stack is drawn in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<ToastPosition>,
}

impl Default for ToastsConfig {
    fn default() -> Self {
        Self {
            dismiss_time_ms: default_dismiss_time_ms(),
            position: Some(ToastPosition::default()),
        }
    }
}

impl ToastsConfig {
    /// Returns the default dismiss delay, clamped to the supported range.
    #[must_use]
    pub fn dismiss_time(&self) -> Duration {
        let millis = self
            .dismiss_time_ms
            .unwrap_or(DEFAULT_DISMISS_TIME_MS)
            .clamp(MIN_DISMISS_TIME_MS, MAX_DISMISS_TIME_MS);
        Duration::from_millis(millis)
    }

    /// Builds the provider configuration described by this section.
    #[must_use]
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig::new(self.dismiss_time())
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub toasts: ToastsConfig,
}

fn default_dismiss_time_ms() -> Option<u64> {
    Some(DEFAULT_DISMISS_TIME_MS)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable config {}: {err}", path.display());
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
