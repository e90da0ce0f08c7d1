//! Integer-based, fixed precision currency calculation.
//!
//! This crate provides the types used to do exact arithmetic on money:
//!
//! - [`Currency`] - Minor unit definition and display affixes of a currency
//! - [`registry`] - The static table of ISO 4217 currencies
//! - [`Amount`] - A whole number of minor units of a currency, or the
//!   currency-less [`Amount::ZERO`]
//! - [`Exact`] and [`Rate`] - Numeric inputs, keeping binary floats away from
//!   everything except exchange rates
//! - [`CurrencyError`] - Everything that can go wrong
//!
//! Amounts are stored as `i64` counts of the minor unit (cents, not
//! dollars). Scaling and conversion round half away from zero on exact
//! decimals; nothing is ever computed in floating point.
//!
//! # Example
//!
//! ```
//! use currint_core::{Amount, CurrencyError};
//! use rust_decimal_macros::dec;
//!
//! let lines = [
//!     Amount::from_code_and_major("USD", "19.99", false).unwrap(),
//!     Amount::from_code_and_major("USD", 5, false).unwrap(),
//! ];
//!
//! // Sum from the currency-less zero
//! let subtotal = Amount::try_sum(&lines).unwrap();
//! assert_eq!(subtotal.to_string(), "$24.99");
//!
//! // Apply a discount, rounding half up to the cent
//! let discounted = subtotal.apply_factor(dec!(0.85)).unwrap();
//! assert_eq!(discounted.value(), 2124);
//!
//! // Convert to euros at a caller-supplied rate
//! let euros = discounted.convert_currency("EUR", dec!(0.92)).unwrap();
//! assert_eq!(euros.to_string(), "€19.54");
//!
//! // Currencies never mix silently
//! let pounds = Amount::from_code_and_minor("GBP", 100).unwrap();
//! assert!(matches!(
//!     euros.try_add(&pounds),
//!     Err(CurrencyError::CurrencyMismatch { .. })
//! ));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod amount;
pub mod currency;
pub mod error;
pub mod number;
pub mod registry;

pub use amount::Amount;
pub use currency::{Currency, CurrencyBuilder, MinorUnit};
pub use error::{CurrencyError, Result};
pub use number::{Exact, Rate};

// Re-export commonly used external types
pub use rust_decimal::Decimal;
