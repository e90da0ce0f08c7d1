//! Numeric inputs accepted by currency operations.
//!
//! Operations that change how much money exists ([`Amount::apply_factor`],
//! [`Currency::major_to_minor`]) take an [`Exact`] number. There is no
//! conversion from `f32` or `f64` into [`Exact`], so passing a binary float
//! is a compile error rather than a silent precision bug:
//!
//! ```compile_fail
//! use currint_core::Exact;
//!
//! let factor: Exact = 1.005_f64.into();
//! ```
//!
//! Exchange rates are inexact by nature, so [`Amount::convert_currency`]
//! takes a [`Rate`], which also accepts floats.
//!
//! [`Amount::apply_factor`]: crate::Amount::apply_factor
//! [`Amount::convert_currency`]: crate::Amount::convert_currency
//! [`Currency::major_to_minor`]: crate::Currency::major_to_minor

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

use crate::error::{CurrencyError, Result};

/// Round to a whole number, ties away from zero.
pub(crate) fn round_half_up(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert a whole decimal into a minor-unit value.
pub(crate) fn to_minor(d: Decimal) -> Result<i64> {
    d.to_i64()
        .ok_or_else(|| CurrencyError::overflow(format!("{d} minor units")))
}

/// Multiply a minor-unit value by `by`, rounding the product half up.
pub(crate) fn scale(value: i64, by: Decimal) -> Result<i64> {
    let product = Decimal::from(value)
        .checked_mul(by)
        .ok_or_else(|| CurrencyError::overflow(format!("{value} * {by}")))?;
    to_minor(round_half_up(product))
}

/// An exact number: an integer or a decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exact {
    /// A whole number.
    Integer(i64),
    /// A decimal number.
    Decimal(Decimal),
}

impl Exact {
    /// The value as a [`Decimal`].
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        match self {
            Self::Integer(n) => Decimal::from(n),
            Self::Decimal(d) => d,
        }
    }
}

macro_rules! exact_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Exact {
                fn from(n: $ty) -> Self {
                    Self::Integer(i64::from(n))
                }
            }
        )*
    };
}

exact_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<Decimal> for Exact {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

impl FromStr for Exact {
    type Err = CurrencyError;

    /// Parse an integer or decimal literal such as `"12"`, `"-3.00"` or
    /// `"12.432"`. Exponent notation and literals that would need rounding
    /// to fit a [`Decimal`] are rejected.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Self::Integer(n));
        }
        if s.contains(['e', 'E']) {
            return Err(CurrencyError::InvalidNumber(s.to_string()));
        }
        Decimal::from_str_exact(s)
            .map(Self::Decimal)
            .map_err(|_| CurrencyError::InvalidNumber(s.to_string()))
    }
}

impl TryFrom<&str> for Exact {
    type Error = CurrencyError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<&String> for Exact {
    type Error = CurrencyError;

    fn try_from(s: &String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for Exact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(d) => write!(f, "{d}"),
        }
    }
}

/// An exchange rate: any exact number, or a binary float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rate {
    /// An exact rate.
    Exact(Exact),
    /// A floating-point rate, converted to the nearest decimal before use.
    Float(f64),
}

impl Rate {
    /// The rate as a [`Decimal`].
    ///
    /// Floats keep their exact binary value, as far as a [`Decimal`] can
    /// hold it, so `0.15_f64` is slightly below 0.15. Fails for NaN,
    /// infinities and floats outside the decimal range.
    pub fn to_decimal(self) -> Result<Decimal> {
        match self {
            Self::Exact(e) => Ok(e.to_decimal()),
            Self::Float(f) if !f.is_finite() => {
                Err(CurrencyError::InvalidNumber(format!("non-finite rate {f}")))
            }
            Self::Float(f) => Decimal::from_f64_retain(f)
                .or_else(|| Decimal::from_f64(f))
                .ok_or_else(|| CurrencyError::InvalidNumber(format!("rate {f} out of range"))),
        }
    }
}

macro_rules! rate_from_exact {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Rate {
                fn from(n: $ty) -> Self {
                    Self::Exact(Exact::from(n))
                }
            }
        )*
    };
}

rate_from_exact!(i8, i16, i32, i64, u8, u16, u32, Decimal);

impl From<Exact> for Rate {
    fn from(e: Exact) -> Self {
        Self::Exact(e)
    }
}

impl From<f64> for Rate {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<f32> for Rate {
    fn from(f: f32) -> Self {
        Self::Float(f64::from(f))
    }
}

impl FromStr for Rate {
    type Err = CurrencyError;

    /// Exact literals stay exact; anything else that parses as a float is
    /// kept as a float rate.
    fn from_str(s: &str) -> Result<Self> {
        if let Ok(exact) = s.parse::<Exact>() {
            return Ok(Self::Exact(exact));
        }
        s.trim()
            .parse::<f64>()
            .map(Self::Float)
            .map_err(|_| CurrencyError::InvalidNumber(s.to_string()))
    }
}
