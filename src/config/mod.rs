// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[toasts]` - Auto-dismiss duration per severity (milliseconds, 0 = sticky)
//! - `[transitions]` - Entrance delay and exit transition length
//!
//! Out-of-range values are clamped by the accessors rather than rejected.
//!
//! # Examples
//!
//! ```no_run
//! use notice_desk::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("tr".to_string());
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::notifications::Severity;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "tr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Toast lifetimes in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_ms: Option<u64>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            success_ms: Some(DEFAULT_SUCCESS_TOAST_MS),
            error_ms: Some(DEFAULT_ERROR_TOAST_MS),
            warning_ms: Some(DEFAULT_WARNING_TOAST_MS),
            info_ms: Some(DEFAULT_INFO_TOAST_MS),
        }
    }
}

impl ToastConfig {
    /// Lifetime for a severity, clamped to [`MAX_TOAST_MS`].
    #[must_use]
    pub fn duration_ms(&self, severity: Severity) -> u64 {
        let (value, default) = match severity {
            Severity::Success => (self.success_ms, DEFAULT_SUCCESS_TOAST_MS),
            Severity::Error => (self.error_ms, DEFAULT_ERROR_TOAST_MS),
            Severity::Warning => (self.warning_ms, DEFAULT_WARNING_TOAST_MS),
            Severity::Info => (self.info_ms, DEFAULT_INFO_TOAST_MS),
        };
        value.unwrap_or(default).min(MAX_TOAST_MS)
    }
}

/// Transition timing in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransitionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance_delay_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_ms: Option<u64>,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            entrance_delay_ms: Some(DEFAULT_ENTRANCE_DELAY_MS),
            exit_ms: Some(DEFAULT_EXIT_TRANSITION_MS),
        }
    }
}

impl TransitionConfig {
    #[must_use]
    pub fn entrance_delay(&self) -> Duration {
        Duration::from_millis(
            self.entrance_delay_ms
                .unwrap_or(DEFAULT_ENTRANCE_DELAY_MS)
                .min(MAX_ENTRANCE_DELAY_MS),
        )
    }

    #[must_use]
    pub fn exit(&self) -> Duration {
        Duration::from_millis(
            self.exit_ms
                .unwrap_or(DEFAULT_EXIT_TRANSITION_MS)
                .min(MAX_EXIT_TRANSITION_MS),
        )
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub toasts: ToastConfig,
    #[serde(default)]
    pub transitions: TransitionConfig,
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with the i18n key of a warning explaining what went wrong.
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
                    return (Config::default(), Some(err.i18n_key().to_string()));
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

// =============================================================================
// Tests
// =============================================================================
