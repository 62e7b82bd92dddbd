//! Configuration and settings management for ShapeKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform-specific config directory.
//!
//! Configuration is organized into logical sections:
//! - Canvas settings (view size)
//! - Interaction settings (hit tolerance, curve flattening)
//! - Icon settings (shape list thumbnails)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Canvas view settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// View width
    pub width: f64,
    /// View height
    pub height: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
        }
    }
}

/// Pointer interaction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionSettings {
    /// Distance within which an anchor or handle is grabbed
    #[serde(default = "default_hit_tolerance")]
    pub hit_tolerance: f64,
    /// Curve flattening tolerance for containment tests
    #[serde(default = "default_flattening_tolerance")]
    pub flattening_tolerance: f64,
}

fn default_hit_tolerance() -> f64 {
    12.0
}

fn default_flattening_tolerance() -> f64 {
    0.1
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            hit_tolerance: default_hit_tolerance(),
            flattening_tolerance: default_flattening_tolerance(),
        }
    }
}

/// Shape list icon settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSettings {
    /// Edge length of the square icon
    pub size: f64,
    /// Room left around the path for the stroke
    pub padding: f64,
}

impl Default for IconSettings {
    fn default() -> Self {
        Self {
            size: 88.0,
            padding: 2.0,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub canvas: CanvasSettings,
    #[serde(default)]
    pub interaction: InteractionSettings,
    #[serde(default)]
    pub icon: IconSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/shapekit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(dir.join("shapekit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        debug!("Saved config to {}", path.display());

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.canvas.width > 0.0 && self.canvas.width.is_finite()) {
            return Err(ConfigError::out_of_range("canvas.width", self.canvas.width));
        }
        if !(self.canvas.height > 0.0 && self.canvas.height.is_finite()) {
            return Err(ConfigError::out_of_range("canvas.height", self.canvas.height));
        }

        if !(self.interaction.hit_tolerance >= 0.0) {
            return Err(ConfigError::out_of_range(
                "interaction.hit_tolerance",
                self.interaction.hit_tolerance,
            ));
        }
        if !(self.interaction.flattening_tolerance > 0.0) {
            return Err(ConfigError::out_of_range(
                "interaction.flattening_tolerance",
                self.interaction.flattening_tolerance,
            ));
        }

        if !(self.icon.size > 0.0) {
            return Err(ConfigError::out_of_range("icon.size", self.icon.size));
        }
        if !(self.icon.padding >= 0.0 && self.icon.padding * 2.0 < self.icon.size) {
            return Err(ConfigError::out_of_range("icon.padding", self.icon.padding));
        }

        Ok(())
    }
}
