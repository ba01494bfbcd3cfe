//! Configuration types for vtline.
//!
//! Configuration is a JSON file. Every field is optional and falls back to
//! its default.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ticks::TickOrder;

/// Main configuration for vtline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Rows between consecutive month ticks.
    #[serde(default = "default_tick_spacing")]
    pub tick_spacing: u16,

    /// Tick direction (newest first by default).
    #[serde(default)]
    pub order: TickOrder,

    /// Color palette.
    #[serde(default)]
    pub theme: ThemeName,

    /// Use ASCII glyphs instead of Unicode box drawing.
    #[serde(default)]
    pub ascii: bool,
}

fn default_tick_spacing() -> u16 {
    4
}

/// Named color palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Catppuccin Mocha (dark).
    #[default]
    Mocha,
    /// Catppuccin Latte (light).
    Latte,
    HighContrast,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: Self = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Reject values the renderer cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_spacing == 0 {
            return Err(ConfigError::Invalid(
                "tick_spacing must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Tick spacing as a row count.
    pub fn spacing(&self) -> usize {
        usize::from(self.tick_spacing)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_spacing: default_tick_spacing(),
            order: TickOrder::default(),
            theme: ThemeName::default(),
            ascii: false,
        }
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Config parsed but holds an unusable value.
    #[error("Invalid config: {0}")]
    Invalid(String),
}
