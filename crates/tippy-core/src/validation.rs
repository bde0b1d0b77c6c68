//! # Validation Module
//!
//! Input validation for amounts and tip percentages.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Boundary (JSON)                                              │
//! │  └── numeric_value: is this even a number?                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Numeric rules (THIS MODULE)                                  │
//! │  ├── finite (no NaN / infinity)                                        │
//! │  └── amount only: not negative                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Money (cent count must fit in an i64)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tippy_core::validation::{validate_amount, validate_percent};
//!
//! assert!(validate_amount(42.50).is_ok());
//! assert!(validate_amount(f64::NAN).is_err());
//! assert!(validate_percent(18.0).is_ok());
//! ```

use serde_json::Value;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Field name used in amount errors.
pub const AMOUNT_FIELD: &str = "amount";

/// Field name used in percent errors.
pub const PERCENT_FIELD: &str = "percent";

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a bill amount in major units.
///
/// ## Rules
/// - Must be finite
/// - Must not be negative (zero is allowed)
///
/// Size is not checked here. An amount whose cent count overflows is
/// rejected when it is converted to [`crate::Money`].
pub fn validate_amount(amount: f64) -> ValidationResult<f64> {
    let amount = validate_finite(AMOUNT_FIELD, amount)?;

    if amount < 0.0 {
        return Err(ValidationError::Negative {
            field: AMOUNT_FIELD.to_string(),
        });
    }

    Ok(amount)
}

/// Validates a tip percentage.
///
/// Any finite number is a percentage. Negative values (a discount) and
/// values above 100 are accepted as is.
///
/// ## Example
/// ```rust
/// use tippy_core::validation::validate_percent;
///
/// assert!(validate_percent(0.0).is_ok());
/// assert!(validate_percent(17.5).is_ok());
/// assert!(validate_percent(-10.0).is_ok());
/// assert!(validate_percent(f64::INFINITY).is_err());
/// ```
pub fn validate_percent(percent: f64) -> ValidationResult<f64> {
    validate_finite(PERCENT_FIELD, percent)
}

fn validate_finite(field: &str, value: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    Ok(value)
}

// =============================================================================
// Boundary Validators
// =============================================================================

/// Extracts a number from a deserialized JSON value.
///
/// Only JSON numbers are accepted. Strings are rejected even when they
/// look numeric ("5.00"), so a value has to be a number on the wire.
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use tippy_core::validation::numeric_value;
///
/// assert_eq!(numeric_value("amount", &json!(5)).unwrap(), 5.0);
/// assert!(numeric_value("amount", &json!("bacon")).is_err());
/// ```
pub fn numeric_value(field: &str, value: &Value) -> ValidationResult<f64> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| ValidationError::NotFinite {
            field: field.to_string(),
        }),
        Value::Null => Err(ValidationError::Required {
            field: field.to_string(),
        }),
        other => Err(ValidationError::NotNumeric {
            field: field.to_string(),
            found: json_type_name(other).to_string(),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
