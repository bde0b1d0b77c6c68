//! # tippy-core: Bill & Tip Calculations
//!
//! Given a bill amount and a tip percentage, compute the tip and the total,
//! optionally rounding the total up to a whole currency unit.
//!
//! ## Modules
//!
//! - [`bill`] - The `Bill` value object and its tip operations
//! - [`money`] - Money type with integer arithmetic (cents)
//! - [`types`] - `TipPercent`, `RoundingMode`, `TipBreakdown`
//! - [`validation`] - Numeric and boundary input checks
//! - [`request`] - Deserialized boundary input (`TipRequest`)
//! - [`config`] - Tip defaults, loadable from TOML
//! - [`error`] - Domain error types
//! - `logging` - Tracing subscriber setup (`logging` feature)
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same bill + same percent = same result
//! 2. **Integer Money**: amounts live in cents; floats only at the edges
//! 3. **Immutable Values**: changing an amount builds a new `Bill`
//! 4. **Explicit Errors**: `InvalidAmount` / `InvalidPercent`, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tippy_core::Bill;
//!
//! let bill = Bill::new(5.00)?;
//!
//! let exact = bill.compute_tip(50.0)?;
//! assert_eq!(exact.as_tuple(), (2.50, 7.50));
//!
//! let rounded = bill.compute_rounded_tip(50.0)?;
//! assert_eq!(rounded.as_tuple(), (3.00, 8.00));
//! # Ok::<(), tippy_core::TipError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bill;
pub mod config;
pub mod error;
#[cfg(feature = "logging")]
pub mod logging;
pub mod money;
pub mod request;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use bill::Bill;
pub use config::TipConfig;
pub use error::{ConfigError, TipError, TipResult, ValidationError};
pub use money::Money;
pub use request::TipRequest;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tip percentage used when no config says otherwise.
pub const DEFAULT_TIP_PERCENT: f64 = 15.0;
