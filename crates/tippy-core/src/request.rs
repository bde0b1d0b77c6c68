//! # Tip Requests
//!
//! Boundary input for callers that hand over deserialized data instead of
//! typed Rust values. Field values stay untyped until validated, so a
//! non-numeric amount surfaces as [`TipError::InvalidAmount`] and a
//! non-numeric percent as [`TipError::InvalidPercent`], never as a generic
//! parse failure.
//!
//! ```json
//! { "amount": 5.00, "percent": 50, "rounding": "whole_unit" }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::bill::Bill;
use crate::error::{TipError, TipResult};
use crate::types::{RoundingMode, TipBreakdown};
use crate::validation::{numeric_value, PERCENT_FIELD};

/// A tip calculation request as received from outside the process.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TipRequest {
    /// Bill amount, expected to be a JSON number.
    #[serde(default)]
    pub amount: Value,

    /// Tip percentage, expected to be a JSON number.
    #[serde(default)]
    pub percent: Value,

    /// Rounding mode, `exact` when omitted.
    #[serde(default)]
    pub rounding: RoundingMode,
}

impl TipRequest {
    /// Parses a request from JSON text.
    ///
    /// Only the document shape is checked here. Field values are validated
    /// by [`TipRequest::evaluate`].
    pub fn from_json(json: &str) -> TipResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates the request and computes the tip.
    ///
    /// The amount is checked before the percent.
    ///
    /// ## Example
    /// ```rust
    /// use tippy_core::TipRequest;
    ///
    /// let request = TipRequest::from_json(
    ///     r#"{"amount": 5.00, "percent": 50, "rounding": "whole_unit"}"#,
    /// ).unwrap();
    /// assert_eq!(request.evaluate().unwrap().as_tuple(), (3.0, 8.0));
    ///
    /// let bad = TipRequest::from_json(r#"{"amount": "bacon", "percent": 50}"#).unwrap();
    /// assert!(bad.evaluate().unwrap_err().is_invalid_amount());
    /// ```
    pub fn evaluate(&self) -> TipResult<TipBreakdown> {
        let bill = Bill::from_json_value(&self.amount)?;
        let percent = numeric_value(PERCENT_FIELD, &self.percent).map_err(TipError::InvalidPercent)?;
        debug!(%bill, percent, rounding = %self.rounding, "Evaluating tip request");
        bill.quote(percent, self.rounding)
    }
}
