//! # Domain Types
//!
//! Value types shared by the bill calculations.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   TipPercent    │   │  RoundingMode   │   │  TipBreakdown   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  f64, finite    │   │  Exact          │   │  tip   (Money)  │       │
//! │  │  (may be < 0)   │   │  WholeUnit      │   │  total (Money)  │       │
//! │  └─────────────────┘   └─────────────────┘   │  rounded        │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::validate_percent;

// =============================================================================
// Tip Percent
// =============================================================================

/// A validated tip percentage (`18.0` = 18%).
///
/// Fractional percentages are allowed (`17.5`), and so are negative ones
/// and ones above 100. Construction rejects NaN and infinities.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TipPercent(f64);

impl TipPercent {
    /// Creates a tip percentage after validating it.
    ///
    /// ## Example
    /// ```rust
    /// use tippy_core::types::TipPercent;
    ///
    /// assert_eq!(TipPercent::new(20.0).unwrap().value(), 20.0);
    /// assert!(TipPercent::new(f64::NAN).is_err());
    /// ```
    pub fn new(percent: f64) -> Result<Self, ValidationError> {
        validate_percent(percent).map(TipPercent)
    }

    /// Returns the percentage as a plain number.
    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Applies this percentage to an amount, rounded to the cent.
    ///
    /// `None` if the tip does not fit in cents.
    #[inline]
    pub fn of(&self, amount: Money) -> Option<Money> {
        amount.percentage(self.0)
    }
}

impl TryFrom<f64> for TipPercent {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        TipPercent::new(value)
    }
}

impl From<TipPercent> for f64 {
    fn from(percent: TipPercent) -> f64 {
        percent.0
    }
}

impl fmt::Display for TipPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Rounding Mode
// =============================================================================

/// How the final total is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Tip rounded to the cent, total = amount + tip.
    #[default]
    Exact,

    /// Tip grows so the total lands on the next whole currency unit.
    WholeUnit,
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingMode::Exact => write!(f, "exact"),
            RoundingMode::WholeUnit => write!(f, "whole_unit"),
        }
    }
}

// =============================================================================
// Tip Breakdown
// =============================================================================

/// The result of a tip calculation.
///
/// Only [`crate::bill::Bill`] builds these, so `total == amount + tip` always
/// holds for the bill that produced it. Serialize-only for the same reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct TipBreakdown {
    tip: Money,
    total: Money,
    rounded: bool,
}

impl TipBreakdown {
    pub(crate) const fn new(tip: Money, total: Money, rounded: bool) -> Self {
        TipBreakdown {
            tip,
            total,
            rounded,
        }
    }

    /// Tip in major units.
    #[inline]
    pub fn tip(&self) -> f64 {
        self.tip.to_major()
    }

    /// Total (bill + tip) in major units.
    #[inline]
    pub fn total(&self) -> f64 {
        self.total.to_major()
    }

    /// Tip as exact cents.
    #[inline]
    pub const fn tip_money(&self) -> Money {
        self.tip
    }

    /// Total as exact cents.
    #[inline]
    pub const fn total_money(&self) -> Money {
        self.total
    }

    /// Whether the whole-unit rounding variant produced this result.
    #[inline]
    pub const fn is_rounded(&self) -> bool {
        self.rounded
    }

    /// Returns `(tip, total)` in major units.
    #[inline]
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.tip(), self.total())
    }
}

impl fmt::Display for TipBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tip {}, total {}", self.tip, self.total)
    }
}
