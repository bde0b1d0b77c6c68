//! # Tip Configuration
//!
//! Defaults for tip calculations, optionally loaded from a TOML file.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. TOML Config File (only when the caller passes a path)              │
//! │                                                                         │
//! │  2. Default Values (lowest priority)                                   │
//! │     15%, exact rounding, presets 10/15/18/20/25                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # tippy.toml
//! default_percent = 18.0
//! rounding = "whole_unit"  # exact | whole_unit
//! presets = [15.0, 18.0, 20.0]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::ConfigError;
use crate::types::RoundingMode;
use crate::validation::validate_percent;
use crate::DEFAULT_TIP_PERCENT;

/// Tip calculation defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipConfig {
    /// Percentage used by [`crate::Bill::quote_with_config`].
    #[serde(default = "default_percent")]
    pub default_percent: f64,

    /// Rounding applied to every configured quote.
    #[serde(default)]
    pub rounding: RoundingMode,

    /// Percentages offered side by side by [`crate::Bill::preset_quotes`].
    #[serde(default = "default_presets")]
    pub presets: Vec<f64>,
}

fn default_percent() -> f64 {
    DEFAULT_TIP_PERCENT
}

fn default_presets() -> Vec<f64> {
    vec![10.0, 15.0, 18.0, 20.0, 25.0]
}

impl Default for TipConfig {
    fn default() -> Self {
        TipConfig {
            default_percent: default_percent(),
            rounding: RoundingMode::default(),
            presets: default_presets(),
        }
    }
}

impl TipConfig {
    /// Parses and validates a TOML document.
    ///
    /// ## Example
    /// ```rust
    /// use tippy_core::{RoundingMode, TipConfig};
    ///
    /// let config = TipConfig::from_toml_str("rounding = \"whole_unit\"").unwrap();
    /// assert_eq!(config.rounding, RoundingMode::WholeUnit);
    /// assert_eq!(config.default_percent, 15.0);
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: TipConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading tip config from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads config from `path` if given, falling back to defaults when the
    /// path is absent, missing or invalid.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            debug!("No config path given, using defaults");
            return Self::default();
        };

        if !path.exists() {
            debug!(?path, "Config file not found, using defaults");
            return Self::default();
        }

        Self::load(path).unwrap_or_else(|e| {
            warn!("Failed to load tip config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml_string()?)?;

        info!(?path, "Tip config saved");
        Ok(())
    }

    /// Validates the configuration: every percentage finite, at least one preset.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_percent(self.default_percent).map_err(|e| ConfigError::InvalidValue {
            field: "default_percent".to_string(),
            reason: e.to_string(),
        })?;

        if self.presets.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "presets".to_string(),
                reason: "must contain at least one percentage".to_string(),
            });
        }

        for (i, &preset) in self.presets.iter().enumerate() {
            validate_percent(preset).map_err(|e| ConfigError::InvalidValue {
                field: format!("presets[{}]", i),
                reason: e.to_string(),
            })?;
        }

        Ok(())
    }
}
