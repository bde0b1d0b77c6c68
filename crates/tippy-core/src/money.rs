//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    5.00 + 2.50 + 0.10 + 0.20 = 7.800000000000001  ❌                    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    500 + 250 + 10 + 20 = 780 cents                ✅                    │
//! │                                                                         │
//! │  Floats only appear at the edges: the caller's input amount and the    │
//! │  tip percentage product. Both are rounded to the cent immediately,     │
//! │  half-to-even on the float's exact binary value.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tippy_core::money::Money;
//!
//! let bill = Money::from_cents(500);            // $5.00
//! let tip = bill.percentage(50.0).unwrap();     // $2.50
//! assert_eq!(bill.checked_add(tip).unwrap().cents(), 750);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Minor units per major unit (cents per dollar).
pub const MINOR_PER_MAJOR: i64 = 100;

/// Decimal places kept when a float becomes money.
const MINOR_DIGITS: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: tip deltas and discount tips can be negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Checked arithmetic**: overflow is reported as `None`, never wraps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tippy_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a major-unit float, rounded to the cent.
    ///
    /// Rounding looks at the exact binary value of `value`, not at the
    /// shortest decimal that prints as it. `2.675` is stored as
    /// 2.67499999... and rounds down. Exact ties such as `0.125` go to the
    /// even cent.
    ///
    /// Returns `None` for NaN, infinities and values whose cent count does
    /// not fit in an `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use tippy_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(10.99).unwrap().cents(), 1099);
    /// assert_eq!(Money::from_major(4.56789).unwrap().cents(), 457);
    /// assert_eq!(Money::from_major(2.675).unwrap().cents(), 267);
    /// assert_eq!(Money::from_major(0.125).unwrap().cents(), 12);
    /// assert_eq!(Money::from_major(1e30), None);
    /// ```
    pub fn from_major(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        // Rounds to zero cents either way, and stays clear of the
        // smallest scale a Decimal can hold.
        if value.abs() < 0.001 {
            return Some(Money::zero());
        }

        let exact = Decimal::from_f64_retain(value)?;
        let cents = exact
            .round_dp_with_strategy(MINOR_DIGITS, RoundingStrategy::MidpointNearestEven)
            .checked_mul(Decimal::from(MINOR_PER_MAJOR))?;
        cents.to_i64().map(Money)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use tippy_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns the value in major units as a float (for display and for
    /// callers that work in plain numbers).
    ///
    /// ## Example
    /// ```rust
    /// use tippy_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(750).to_major(), 7.5);
    /// ```
    #[inline]
    pub fn to_major(&self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR as f64
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Checks if the value has no cents part ($8.00 yes, $7.50 no).
    #[inline]
    pub const fn is_whole_unit(&self) -> bool {
        self.0 % MINOR_PER_MAJOR == 0
    }

    /// Returns the next whole unit strictly above a fractional value, or the
    /// value itself when it is already whole. `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use tippy_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(750).next_whole_unit(), Some(Money::from_cents(800)));
    /// assert_eq!(Money::from_cents(701).next_whole_unit(), Some(Money::from_cents(800)));
    /// assert_eq!(Money::from_cents(800).next_whole_unit(), Some(Money::from_cents(800)));
    /// assert_eq!(Money::from_cents(-250).next_whole_unit(), Some(Money::from_cents(-200)));
    /// ```
    pub const fn next_whole_unit(&self) -> Option<Self> {
        if self.is_whole_unit() {
            return Some(*self);
        }

        match (self.0.div_euclid(MINOR_PER_MAJOR) + 1).checked_mul(MINOR_PER_MAJOR) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Calculates `percent`% of this amount, rounded to the nearest cent.
    ///
    /// ## Implementation
    /// `amount * percent / 100` in major units, then [`Money::from_major`].
    /// The product is a float, so $10.00 at 8.25% is 0.82499999... and
    /// becomes 82¢. Negative percentages give negative money.
    ///
    /// Returns `None` when the result does not fit in cents.
    ///
    /// ## Example
    /// ```rust
    /// use tippy_core::money::Money;
    ///
    /// let bill = Money::from_cents(1000); // $10.00
    /// assert_eq!(bill.percentage(8.25).unwrap().cents(), 82);
    /// assert_eq!(bill.percentage(15.0).unwrap().cents(), 150);
    /// assert_eq!(bill.percentage(-10.0).unwrap().cents(), -100);
    /// ```
    pub fn percentage(&self, percent: f64) -> Option<Money> {
        Money::from_major(self.to_major() * percent / 100.0)
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtracts `other`, `None` on overflow.
    #[inline]
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money as `$D.CC`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
