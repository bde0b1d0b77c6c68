//! # Bill Module
//!
//! The `Bill` value object and its tip calculations.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Bill::new(5.00)          amount rounded to the cent → 500¢            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compute_tip(50)          tip   = round(500¢ × 50%) = 250¢             │
//! │       │                   total = 500¢ + 250¢       = 750¢             │
//! │       ▼                                                                 │
//! │  compute_rounded_tip(50)  total 750¢ is fractional                     │
//! │                           total → next whole unit   = 800¢             │
//! │                           tip   → 250¢ + (800¢ - 750¢) = 300¢          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tippy_core::Bill;
//!
//! let bill = Bill::new(5.00).unwrap();
//! assert_eq!(bill.compute_tip(50.0).unwrap().as_tuple(), (2.50, 7.50));
//! assert_eq!(bill.compute_rounded_tip(50.0).unwrap().as_tuple(), (3.00, 8.00));
//! ```

use serde_json::Value;
use std::fmt;
use tracing::debug;

use crate::config::TipConfig;
use crate::error::{TipError, TipResult, ValidationError};
use crate::money::Money;
use crate::types::{RoundingMode, TipBreakdown, TipPercent};
use crate::validation::{numeric_value, validate_amount, AMOUNT_FIELD, PERCENT_FIELD};

// =============================================================================
// Bill
// =============================================================================

/// A bill amount, held to the cent.
///
/// Immutable once built. To change the amount, build a new bill with
/// [`Bill::with_amount`], which validates and rounds again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bill {
    amount: Money,
}

impl Bill {
    /// Creates a bill from an amount in major units, rounded to 2 decimals.
    ///
    /// ## Errors
    /// [`TipError::InvalidAmount`] if the amount is NaN, infinite, negative
    /// or has more cents than an `i64` holds.
    ///
    /// ## Example
    /// ```rust
    /// use tippy_core::Bill;
    ///
    /// assert_eq!(Bill::new(4.56789).unwrap().amount(), 4.57);
    /// assert!(Bill::new(f64::NAN).unwrap_err().is_invalid_amount());
    /// ```
    pub fn new(amount: f64) -> TipResult<Self> {
        let amount = validate_amount(amount).map_err(TipError::InvalidAmount)?;
        let amount = Money::from_major(amount)
            .ok_or_else(|| TipError::InvalidAmount(too_large(AMOUNT_FIELD)))?;
        let bill = Bill { amount };
        debug!(amount = %bill.amount, "Bill created");
        Ok(bill)
    }

    /// Creates a bill from an exact cent value.
    pub fn from_money(amount: Money) -> TipResult<Self> {
        if amount.is_negative() {
            return Err(TipError::InvalidAmount(ValidationError::Negative {
                field: AMOUNT_FIELD.to_string(),
            }));
        }
        Ok(Bill { amount })
    }

    /// Creates a bill from a deserialized value.
    ///
    /// Anything other than a JSON number is rejected with
    /// [`TipError::InvalidAmount`].
    ///
    /// ## Example
    /// ```rust
    /// use serde_json::json;
    /// use tippy_core::Bill;
    ///
    /// assert_eq!(Bill::from_json_value(&json!(5)).unwrap().amount(), 5.0);
    /// assert!(Bill::from_json_value(&json!("bacon")).unwrap_err().is_invalid_amount());
    /// ```
    pub fn from_json_value(value: &Value) -> TipResult<Self> {
        let amount = numeric_value(AMOUNT_FIELD, value).map_err(TipError::InvalidAmount)?;
        Bill::new(amount)
    }

    /// Returns a new bill holding `amount`. The original is untouched.
    pub fn with_amount(&self, amount: f64) -> TipResult<Self> {
        Bill::new(amount)
    }

    /// The bill amount in major units.
    #[inline]
    pub fn amount(&self) -> f64 {
        self.amount.to_major()
    }

    /// The bill amount as exact cents.
    #[inline]
    pub const fn amount_money(&self) -> Money {
        self.amount
    }

    // =========================================================================
    // Tip Calculations
    // =========================================================================

    /// Computes the tip and total for `percent`.
    ///
    /// `tip = round(amount × percent / 100, 2)`, `total = amount + tip`.
    /// A negative percent gives a negative tip.
    ///
    /// ## Errors
    /// [`TipError::InvalidPercent`] if `percent` is NaN or infinite, or if
    /// the tip or total overflows the cent counter.
    ///
    /// ## Example
    /// ```rust
    /// use tippy_core::Bill;
    ///
    /// let bill = Bill::new(5.0).unwrap();
    /// assert_eq!(bill.compute_tip(-10.0).unwrap().as_tuple(), (-0.5, 4.5));
    /// assert_eq!(bill.compute_tip(2000.0).unwrap().as_tuple(), (100.0, 105.0));
    /// ```
    pub fn compute_tip(&self, percent: f64) -> TipResult<TipBreakdown> {
        let percent = TipPercent::new(percent).map_err(TipError::InvalidPercent)?;
        self.tip_for(percent)
    }

    /// Like [`Bill::compute_tip`], but pushes the total up to the next whole
    /// currency unit. The tip absorbs the difference.
    ///
    /// A total that is already whole is returned unchanged.
    ///
    /// ## Example
    /// ```rust
    /// use tippy_core::Bill;
    ///
    /// // $10.00 at 20% is already $12.00, nothing to round
    /// let even = Bill::new(10.0).unwrap().compute_rounded_tip(20.0).unwrap();
    /// assert_eq!(even.as_tuple(), (2.0, 12.0));
    ///
    /// // $12.34 at 15%: tip $1.85, total $14.19 → $15.00, tip $2.66
    /// let odd = Bill::new(12.34).unwrap().compute_rounded_tip(15.0).unwrap();
    /// assert_eq!(odd.as_tuple(), (2.66, 15.0));
    /// ```
    pub fn compute_rounded_tip(&self, percent: f64) -> TipResult<TipBreakdown> {
        let exact = self.compute_tip(percent)?;
        round_to_whole_unit(exact)
    }

    /// Computes a tip with the given rounding mode.
    pub fn quote(&self, percent: f64, rounding: RoundingMode) -> TipResult<TipBreakdown> {
        match rounding {
            RoundingMode::Exact => self.compute_tip(percent),
            RoundingMode::WholeUnit => self.compute_rounded_tip(percent),
        }
    }

    /// Computes a tip using the config's default percentage and rounding.
    pub fn quote_with_config(&self, config: &TipConfig) -> TipResult<TipBreakdown> {
        self.quote(config.default_percent, config.rounding)
    }

    /// Computes one quote per preset percentage in the config, in order.
    ///
    /// ## Example
    /// ```rust
    /// use tippy_core::{Bill, TipConfig};
    ///
    /// let config = TipConfig {
    ///     presets: vec![10.0, 20.0],
    ///     ..TipConfig::default()
    /// };
    /// let quotes = Bill::new(40.0).unwrap().preset_quotes(&config).unwrap();
    /// assert_eq!(quotes[0].0, 10.0);
    /// assert_eq!(quotes[1].1.as_tuple(), (8.0, 48.0));
    /// ```
    pub fn preset_quotes(&self, config: &TipConfig) -> TipResult<Vec<(f64, TipBreakdown)>> {
        config
            .presets
            .iter()
            .map(|&percent| Ok((percent, self.quote(percent, config.rounding)?)))
            .collect()
    }

    fn tip_for(&self, percent: TipPercent) -> TipResult<TipBreakdown> {
        let tip = percent.of(self.amount).ok_or_else(percent_overflow)?;
        let total = self.amount.checked_add(tip).ok_or_else(percent_overflow)?;
        debug!(amount = %self.amount, %percent, %tip, %total, "Tip computed");
        Ok(TipBreakdown::new(tip, total, false))
    }
}

fn round_to_whole_unit(exact: TipBreakdown) -> TipResult<TipBreakdown> {
    let total = exact.total_money();
    let tip = exact.tip_money();

    if total.is_whole_unit() {
        return Ok(TipBreakdown::new(tip, total, true));
    }

    let new_total = total.next_whole_unit().ok_or_else(percent_overflow)?;
    let new_tip = new_total
        .checked_sub(total)
        .and_then(|delta| tip.checked_add(delta))
        .ok_or_else(percent_overflow)?;
    debug!(%total, %new_total, %new_tip, "Total rounded up to whole unit");
    Ok(TipBreakdown::new(new_tip, new_total, true))
}

fn too_large(field: &str) -> ValidationError {
    ValidationError::TooLarge {
        field: field.to_string(),
    }
}

// The amount already fits, so an overflowing tip is the percent's fault.
fn percent_overflow() -> TipError {
    TipError::InvalidPercent(too_large(PERCENT_FIELD))
}

impl TryFrom<f64> for Bill {
    type Error = TipError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Bill::new(amount)
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEST_AMOUNT: f64 = 5.00;
    const TEST_PERCENT: f64 = 50.0;

    fn test_bill() -> Bill {
        Bill::new(TEST_AMOUNT).unwrap()
    }

    #[test]
    fn test_bad_init() {
        let err = Bill::from_json_value(&json!("bacon")).unwrap_err();
        assert!(matches!(
            err,
            TipError::InvalidAmount(ValidationError::NotNumeric { .. })
        ));

        assert!(Bill::new(f64::NAN).unwrap_err().is_invalid_amount());
        assert!(Bill::new(f64::INFINITY).unwrap_err().is_invalid_amount());
        assert!(Bill::new(-1.0).unwrap_err().is_invalid_amount());
    }

    #[test]
    fn test_amount_is_rounded() {
        assert_eq!(Bill::new(5.0).unwrap().amount(), 5.0);
        assert_eq!(Bill::new(10.994).unwrap().amount(), 10.99);
        assert_eq!(Bill::new(10.996).unwrap().amount(), 11.0);
        assert_eq!(Bill::new(0.0).unwrap().amount(), 0.0);
    }

    #[test]
    fn test_amount_rounds_half_to_even_on_stored_value() {
        // 2.675 is stored as 2.67499999...
        assert_eq!(Bill::new(2.675).unwrap().amount(), 2.67);
        // 0.125 is an exact tie
        assert_eq!(Bill::new(0.125).unwrap().amount(), 0.12);
        assert_eq!(Bill::new(0.375).unwrap().amount(), 0.38);
    }

    #[test]
    fn test_large_amounts() {
        let bill = Bill::new(2e12).unwrap();
        assert_eq!(bill.amount(), 2e12);
        assert_eq!(bill.compute_tip(10.0).unwrap().as_tuple(), (2e11, 2.2e12));

        let err = Bill::new(1e17).unwrap_err();
        assert!(matches!(
            err,
            TipError::InvalidAmount(ValidationError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_with_amount_revalidates() {
        let bill = test_bill();
        let changed = bill.with_amount(4.56789).unwrap();
        assert_eq!(changed.amount(), 4.57);
        assert_eq!(bill.amount(), TEST_AMOUNT);

        assert!(bill.with_amount(f64::NAN).unwrap_err().is_invalid_amount());
    }

    #[test]
    fn test_from_money() {
        let bill = Bill::from_money(Money::from_cents(1099)).unwrap();
        assert_eq!(bill.amount(), 10.99);
        assert!(Bill::from_money(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_compute_tip() {
        let result = test_bill().compute_tip(TEST_PERCENT).unwrap();
        assert_eq!(result.as_tuple(), (2.50, 7.50));
        assert!(!result.is_rounded());
    }

    #[test]
    fn test_compute_rounded_tip() {
        let result = test_bill().compute_rounded_tip(TEST_PERCENT).unwrap();
        assert_eq!(result.as_tuple(), (3.00, 8.00));
        assert!(result.is_rounded());
    }

    #[test]
    fn test_rounded_tip_unchanged_when_whole() {
        let bill = Bill::new(10.0).unwrap();
        let exact = bill.compute_tip(20.0).unwrap();
        let rounded = bill.compute_rounded_tip(20.0).unwrap();
        assert_eq!(exact.tip_money(), rounded.tip_money());
        assert_eq!(exact.total_money(), rounded.total_money());
    }

    #[test]
    fn test_bad_percent() {
        let bill = test_bill();
        assert!(bill.compute_tip(f64::NAN).unwrap_err().is_invalid_percent());
        assert!(bill
            .compute_rounded_tip(f64::INFINITY)
            .unwrap_err()
            .is_invalid_percent());

        let err = bill.compute_tip(1e300).unwrap_err();
        assert!(matches!(
            err,
            TipError::InvalidPercent(ValidationError::TooLarge { .. })
        ));

        let huge = Bill::from_money(Money::from_cents(i64::MAX / 2)).unwrap();
        assert!(huge.compute_tip(150.0).unwrap_err().is_invalid_percent());
    }

    #[test]
    fn test_negative_percent() {
        let bill = test_bill();
        assert_eq!(bill.compute_tip(-10.0).unwrap().as_tuple(), (-0.5, 4.5));
        assert_eq!(bill.compute_rounded_tip(-10.0).unwrap().as_tuple(), (0.0, 5.0));
    }

    #[test]
    fn test_percent_above_hundred() {
        let bill = test_bill();
        assert_eq!(bill.compute_tip(2000.0).unwrap().as_tuple(), (100.0, 105.0));
    }

    #[test]
    fn test_tip_rounds_on_stored_product() {
        // 10.0 * 8.25 / 100 is stored as 0.82499999...
        let result = Bill::new(10.0).unwrap().compute_tip(8.25).unwrap();
        assert_eq!(result.as_tuple(), (0.82, 10.82));
    }

    #[test]
    fn test_fractional_percent() {
        // $20.00 at 17.5% = $3.50
        let result = Bill::new(20.0).unwrap().compute_tip(17.5).unwrap();
        assert_eq!(result.as_tuple(), (3.5, 23.5));
    }

    #[test]
    fn test_zero_cases() {
        let free = Bill::new(0.0).unwrap();
        assert_eq!(free.compute_tip(20.0).unwrap().as_tuple(), (0.0, 0.0));
        assert_eq!(free.compute_rounded_tip(20.0).unwrap().as_tuple(), (0.0, 0.0));

        // No tip, but a fractional bill still rounds up
        let rounded = Bill::new(9.25).unwrap().compute_rounded_tip(0.0).unwrap();
        assert_eq!(rounded.as_tuple(), (0.75, 10.0));
    }

    #[test]
    fn test_quote_dispatch() {
        let bill = test_bill();
        assert_eq!(
            bill.quote(TEST_PERCENT, RoundingMode::Exact).unwrap(),
            bill.compute_tip(TEST_PERCENT).unwrap()
        );
        assert_eq!(
            bill.quote(TEST_PERCENT, RoundingMode::WholeUnit).unwrap(),
            bill.compute_rounded_tip(TEST_PERCENT).unwrap()
        );
    }

    #[test]
    fn test_quote_with_config() {
        let config = TipConfig {
            default_percent: 50.0,
            rounding: RoundingMode::WholeUnit,
            ..TipConfig::default()
        };
        let result = test_bill().quote_with_config(&config).unwrap();
        assert_eq!(result.as_tuple(), (3.0, 8.0));
    }

    #[test]
    fn test_preset_quotes() {
        let config = TipConfig {
            presets: vec![10.0, 15.0, 20.0],
            ..TipConfig::default()
        };
        let quotes = Bill::new(12.34).unwrap().preset_quotes(&config).unwrap();
        let tips: Vec<i64> = quotes.iter().map(|(_, q)| q.tip_money().cents()).collect();
        assert_eq!(tips, vec![123, 185, 247]);
    }

    #[test]
    fn test_display() {
        assert_eq!(test_bill().to_string(), "$5.00");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the stored amount is within half a cent of the input.
            #[test]
            fn amount_is_nearest_cent(amount in 0.0f64..1_000_000.0) {
                let cents = Bill::new(amount).unwrap().amount_money().cents();
                prop_assert!((cents as f64 - amount * 100.0).abs() <= 0.5 + 1e-6);
            }

            /// Property: whole-cent inputs are kept as they are.
            #[test]
            fn whole_cents_are_unchanged(cents in 0i64..100_000_000) {
                let bill = Bill::new(cents as f64 / 100.0).unwrap();
                prop_assert_eq!(bill.amount_money().cents(), cents);
            }

            /// Property: total is exactly amount + tip.
            #[test]
            fn total_is_amount_plus_tip(amount in 0.0f64..1_000_000.0, percent in -100.0f64..2000.0) {
                let bill = Bill::new(amount).unwrap();
                let result = bill.compute_tip(percent).unwrap();
                prop_assert_eq!(
                    Some(result.total_money()),
                    bill.amount_money().checked_add(result.tip_money())
                );
            }

            /// Property: the rounded variant always lands on a whole unit, at
            /// most one unit above the exact total.
            #[test]
            fn rounded_total_is_whole(amount in 0.0f64..1_000_000.0, percent in -100.0f64..2000.0) {
                let bill = Bill::new(amount).unwrap();
                let exact = bill.compute_tip(percent).unwrap();
                let rounded = bill.compute_rounded_tip(percent).unwrap();

                prop_assert!(rounded.total_money().is_whole_unit());
                prop_assert_eq!(rounded.total().fract(), 0.0);
                prop_assert_eq!(
                    Some(rounded.total_money()),
                    bill.amount_money().checked_add(rounded.tip_money())
                );

                let delta = rounded.total_money().cents() - exact.total_money().cents();
                prop_assert!((0..100).contains(&delta));
            }

            /// Property: compute_tip is deterministic.
            #[test]
            fn compute_tip_is_idempotent(amount in 0.0f64..1_000_000.0, percent in 0.0f64..100.0) {
                let bill = Bill::new(amount).unwrap();
                prop_assert_eq!(bill.compute_tip(percent).unwrap(), bill.compute_tip(percent).unwrap());
            }
        }
    }
}
