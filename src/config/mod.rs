// SPDX-License-Identifier: MPL-2.0
//! Toaster configuration, loaded from and saved to a `toaster.toml` file.
//!
//! # Layout
//!
//! ```toml
//! max_toasts = 4
//! position = "bottom-right"
//! theme = "system"
//! reduced_motion = false
//!
//! [toast_options]
//! animation_on_close = "swipe"
//! headless = false
//!
//! [toast_options.icons]
//! success = "✔"
//!
//! [toast_options.class_names.actions]
//! close_btn = "my-close"
//! ```
//!
//! # Path Resolution
//!
//! 1. Explicit path via `load_from_path()`/`save_to_path()`
//! 2. Directory from the `ICED_TOAST_CONFIG_DIR` environment variable
//! 3. Platform config directory (`dirs::config_dir()/IcedToast`)
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.max_toasts = 3;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::toast::{AnimationStyle, Position, Variant};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILE: &str = "toaster.toml";
const APP_NAME: &str = "IcedToast";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOAST_CONFIG_DIR";

/// Environment variable forcing reduced motion on (`1`/`true`) or off (`0`/`false`).
pub const ENV_REDUCED_MOTION: &str = "ICED_TOAST_REDUCED_MOTION";

// =============================================================================
// Option Sections
// =============================================================================

/// Per-variant icon glyphs replacing the built-in ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariantIcons {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading: Option<String>,
}

impl VariantIcons {
    #[must_use]
    pub fn get(&self, variant: Variant) -> Option<&str> {
        match variant {
            Variant::Success => self.success.as_deref(),
            Variant::Error => self.error.as_deref(),
            Variant::Warning => self.warning.as_deref(),
            Variant::Info => self.info.as_deref(),
            Variant::Loading => self.loading.as_deref(),
        }
    }
}

/// Extra classes for the action row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionClassNames {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_btn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_btn: Option<String>,
}

/// Extra classes appended to each region of a toast.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassNames {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toast: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub actions: ActionClassNames,
}

/// Options shared by every toast on one toaster.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToastOptions {
    /// Exit animation style.
    #[serde(default)]
    pub animation_on_close: AnimationStyle,

    /// Font class replacing `t_default_font`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,

    #[serde(default)]
    pub icons: VariantIcons,

    /// Drop all built-in presentation classes.
    #[serde(default)]
    pub headless: bool,

    #[serde(default)]
    pub class_names: ClassNames,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_action_content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_close_content: Option<String>,
}

impl ToastOptions {
    #[must_use]
    pub fn action_content(&self) -> &str {
        self.default_action_content
            .as_deref()
            .unwrap_or(DEFAULT_ACTION_CONTENT)
    }

    #[must_use]
    pub fn close_content(&self) -> &str {
        self.default_close_content
            .as_deref()
            .unwrap_or(DEFAULT_CLOSE_CONTENT)
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Configuration of one mounted toaster. Fixed for the toaster's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToasterConfig {
    /// Maximum number of visible toasts.
    #[serde(default = "default_max_toasts")]
    pub max_toasts: usize,

    /// Anchor of the toast stack.
    #[serde(default)]
    pub position: Position,

    /// Theme mode (light, dark, or system).
    #[serde(default)]
    pub theme: ThemeMode,

    /// Skip animations. `None` means "not requested".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,

    #[serde(default)]
    pub toast_options: ToastOptions,
}

impl Default for ToasterConfig {
    fn default() -> Self {
        Self {
            max_toasts: DEFAULT_MAX_TOASTS,
            position: Position::default(),
            theme: ThemeMode::default(),
            reduced_motion: None,
            toast_options: ToastOptions::default(),
        }
    }
}

impl ToasterConfig {
    /// `max_toasts`, raised to at least one.
    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_toasts.max(MIN_MAX_TOASTS)
    }

    /// Whether animations are skipped.
    ///
    /// The `ICED_TOAST_REDUCED_MOTION` environment variable wins over the
    /// file setting.
    #[must_use]
    pub fn prefers_reduced_motion(&self) -> bool {
        std::env::var(ENV_REDUCED_MOTION)
            .ok()
            .and_then(|raw| parse_flag(&raw))
            .or(self.reduced_motion)
            .unwrap_or(false)
    }
}

fn default_max_toasts() -> usize {
    DEFAULT_MAX_TOASTS
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional directory override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir
        .or_else(|| std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from))
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
        .map(|mut path| {
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
pub fn load() -> (ToasterConfig, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (ToasterConfig, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    warn!(path = %path.display(), %err, "invalid toaster config, using defaults");
                    return (
                        ToasterConfig::default(),
                        Some(format!("could not load {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (ToasterConfig::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<ToasterConfig> {
    let content = fs::read_to_string(path)?;
    let config: ToasterConfig = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &ToasterConfig) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &ToasterConfig, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &ToasterConfig, path: &Path) -> Result<()> {
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
