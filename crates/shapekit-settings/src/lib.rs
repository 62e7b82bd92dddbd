//! ShapeKit Settings Crate
//!
//! Handles canvas, interaction and icon configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, IconSettings, InteractionSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
