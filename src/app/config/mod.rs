// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: user preferences read
//! from a `settings.toml` file. The app never writes this file; it is edited by
//! hand.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[camera]` - FFmpeg input format and device used for capture
//! - `[editor]` - Values pre-filled in the blur and line prompts
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `IMAGE_PROCESSOR_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use image_processor::app::config;
//!
//! // A missing file yields defaults; a broken one also yields a warning key.
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! println!("blur kernel: {}", config.editor.blur_kernel().value());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::editing::{KernelSize, LineThickness};
use crate::error::{Error, Result};
use crate::media::CameraSource;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ru").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Capture device settings. Unset fields use the platform's first camera.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CameraConfig {
    /// FFmpeg input format (`v4l2`, `avfoundation`, `dshow`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_format: Option<String>,

    /// Device name understood by the input format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

impl CameraConfig {
    /// Resolves the device to open, filling gaps with platform defaults.
    #[must_use]
    pub fn source(&self) -> CameraSource {
        let fallback = CameraSource::platform_default();
        CameraSource {
            input_format: self
                .input_format
                .clone()
                .unwrap_or(fallback.input_format),
            device: self.device.clone().unwrap_or(fallback.device),
        }
    }
}

/// Prompt defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    #[serde(
        default = "default_blur_kernel",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_blur_kernel: Option<u32>,

    #[serde(
        default = "default_line_thickness",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_line_thickness: Option<u32>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_blur_kernel: default_blur_kernel(),
            default_line_thickness: default_line_thickness(),
        }
    }
}

impl EditorConfig {
    /// Kernel pre-filled in the blur prompt. Invalid values fall back to
    /// [`DEFAULT_BLUR_KERNEL`].
    #[must_use]
    pub fn blur_kernel(&self) -> KernelSize {
        self.default_blur_kernel
            .and_then(|value| match KernelSize::try_new(value) {
                Ok(kernel) => Some(kernel),
                Err(e) => {
                    log::warn!("ignoring editor.default_blur_kernel: {e}");
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Thickness pre-filled in the line prompt. Invalid values fall back to
    /// [`DEFAULT_LINE_THICKNESS`].
    #[must_use]
    pub fn line_thickness(&self) -> LineThickness {
        self.default_line_thickness
            .and_then(|value| match LineThickness::try_new(i64::from(value)) {
                Ok(thickness) => Some(thickness),
                Err(e) => {
                    log::warn!("ignoring editor.default_line_thickness: {e}");
                    None
                }
            })
            .unwrap_or_default()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub camera: CameraConfig,

    #[serde(default)]
    pub editor: EditorConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_blur_kernel() -> Option<u32> {
    Some(DEFAULT_BLUR_KERNEL)
}

fn default_line_thickness() -> Option<u32> {
    Some(DEFAULT_LINE_THICKNESS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(e) => {
                    log::warn!("failed to load {}: {e}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
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

/// Writes configuration to a specific path, e.g. to seed a settings file.
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
