//! # Error Types
//!
//! Domain-specific error types for tippy-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  TipError             - What callers see                               │
//! │  ├── InvalidAmount    - Bill built from a bad amount                   │
//! │  ├── InvalidPercent   - Tip computed with a bad percentage             │
//! │  ├── MalformedRequest - Boundary JSON could not be parsed              │
//! │  └── Config           - Config file could not be used                  │
//! │                                                                         │
//! │  ValidationError      - Why a single value was rejected                │
//! │  ConfigError          - Why a config file was rejected                 │
//! │                                                                         │
//! │  Flow: ValidationError → TipError::InvalidAmount / InvalidPercent      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Tip Error
// =============================================================================

/// Errors returned by bill and tip operations.
///
/// Both input variants carry the [`ValidationError`] describing what was
/// wrong with the value, so callers can match on the kind and still show a
/// precise message.
#[derive(Debug, Error)]
pub enum TipError {
    /// The bill amount is not a usable number.
    ///
    /// ## When This Occurs
    /// - Amount is NaN or infinite
    /// - Boundary input held a string, bool, null, ... instead of a number
    /// - Amount is negative
    /// - Amount has more cents than an `i64` can count
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[source] ValidationError),

    /// The tip percentage is not a usable number, or the tip it produces
    /// cannot be counted in cents.
    #[error("Invalid tip percent: {0}")]
    InvalidPercent(#[source] ValidationError),

    /// Boundary input is not valid JSON or not a JSON object.
    #[error("Malformed request: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TipError {
    /// Returns true for [`TipError::InvalidAmount`].
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, TipError::InvalidAmount(_))
    }

    /// Returns true for [`TipError::InvalidPercent`].
    pub fn is_invalid_percent(&self) -> bool {
        matches!(self, TipError::InvalidPercent(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing.
    #[error("{field} is required")]
    Required { field: String },

    /// Value is not a number (e.g. the string "bacon").
    #[error("{field} must be a number, got {found}")]
    NotNumeric { field: String, found: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value is below zero.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value (or the money derived from it) overflows the cent counter.
    #[error("{field} is too large to represent in cents")]
    TooLarge { field: String },
}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read or written.
    #[error("Config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for [`crate::config::TipConfig`].
    #[error("Config parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be serialized.
    #[error("Config serialize failed: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A config value is present but not acceptable.
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with TipError.
pub type TipResult<T> = Result<T, TipError>;
