//! Currency metadata.
//!
//! A [`Currency`] describes how a currency's minor unit relates to its major
//! unit, plus the affixes used when displaying it. Most currencies have a
//! decimal exponent (two for cents), but some use a non-decimal divisor:
//! the Mauritanian ouguiya has five khoums to the ouguiya.
//!
//! Currencies compare equal when their codes match; the rest of the
//! metadata is descriptive.
//!
//! Runtime definitions are validated by [`CurrencyBuilder::build`]; there is
//! no unchecked public constructor:
//!
//! ```compile_fail
//! use currint_core::{Currency, MinorUnit};
//!
//! let broken = Currency::define("XZZ", None, MinorUnit::Divisor(0), "Zero", "");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{CurrencyError, Result};
use crate::number::{self, Exact};
use crate::registry;

/// Largest exponent whose divisor still fits in an `i64`.
pub const MAX_EXPONENT: u32 = 18;

/// How many minor units make up one major unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinorUnit {
    /// Decimal currency: the divisor is `10^exponent`.
    Exponent(u32),
    /// Non-decimal currency with an explicit divisor.
    Divisor(i64),
}

impl MinorUnit {
    /// The number of minor units per major unit.
    #[must_use]
    pub const fn divisor(self) -> i64 {
        match self {
            Self::Exponent(e) => 10_i64.pow(e),
            Self::Divisor(d) => d,
        }
    }

    /// The decimal exponent, if the currency has one.
    #[must_use]
    pub const fn exponent(self) -> Option<u32> {
        match self {
            Self::Exponent(e) => Some(e),
            Self::Divisor(_) => None,
        }
    }
}

/// A currency (unit of account).
///
/// # Examples
///
/// ```
/// use currint_core::Currency;
/// use rust_decimal_macros::dec;
///
/// let gbp = Currency::builder("gbp")
///     .numeric_code("826")
///     .exponent(2)
///     .name("Pound Sterling")
///     .prefix("£")
///     .build()
///     .unwrap();
///
/// assert_eq!(gbp.code(), "GBP");
/// assert_eq!(gbp.major_to_minor("1.43", false).unwrap(), 143);
/// assert_eq!(gbp.minor_to_major(143), dec!(1.43));
/// assert_eq!(gbp.format(-132), "£-1.32");
/// ```
#[derive(Debug, Clone)]
pub struct Currency {
    code: Cow<'static, str>,
    numeric_code: Option<Cow<'static, str>>,
    name: Option<Cow<'static, str>>,
    unit: MinorUnit,
    prefix: Cow<'static, str>,
    suffix: Cow<'static, str>,
}

impl Currency {
    /// Define a currency at compile time.
    ///
    /// Used for the static registry; the caller is responsible for passing an
    /// uppercase code. Runtime definitions go through [`Currency::builder`].
    pub(crate) const fn define(
        code: &'static str,
        numeric_code: Option<&'static str>,
        unit: MinorUnit,
        name: &'static str,
        prefix: &'static str,
    ) -> Self {
        match unit {
            MinorUnit::Exponent(e) => assert!(e <= MAX_EXPONENT, "exponent too large"),
            MinorUnit::Divisor(d) => assert!(d > 0, "divisor must be positive"),
        }
        Self {
            code: Cow::Borrowed(code),
            numeric_code: match numeric_code {
                Some(n) => Some(Cow::Borrowed(n)),
                None => None,
            },
            name: Some(Cow::Borrowed(name)),
            unit,
            prefix: Cow::Borrowed(prefix),
            suffix: Cow::Borrowed(""),
        }
    }

    /// Start building a currency with the given code.
    pub fn builder(code: impl Into<String>) -> CurrencyBuilder {
        CurrencyBuilder::new(code)
    }

    /// The uppercase currency code, e.g. `"USD"`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The ISO 4217 numeric code, e.g. `"840"`.
    #[must_use]
    pub fn numeric_code(&self) -> Option<&str> {
        self.numeric_code.as_deref()
    }

    /// The display name, e.g. `"US Dollar"`.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The minor unit definition.
    #[must_use]
    pub const fn minor_unit(&self) -> MinorUnit {
        self.unit
    }

    /// Minor units per major unit.
    #[must_use]
    pub const fn divisor(&self) -> i64 {
        self.unit.divisor()
    }

    /// Decimal exponent, or `None` for non-decimal currencies.
    #[must_use]
    pub const fn exponent(&self) -> Option<u32> {
        self.unit.exponent()
    }

    /// Text shown before the number.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Text shown after the number.
    ///
    /// Defaults to a space followed by the code when neither affix was given.
    #[must_use]
    pub fn suffix(&self) -> Cow<'_, str> {
        if self.has_default_suffix() {
            Cow::Owned(format!(" {}", self.code))
        } else {
            Cow::Borrowed(&self.suffix)
        }
    }

    fn has_default_suffix(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty()
    }

    /// Convert a value in major units (dollars, not cents) into minor units.
    ///
    /// Accepts integers, [`Decimal`]s and decimal strings. Fails with
    /// [`CurrencyError::Precision`] if the value cannot be represented as a
    /// whole number of minor units, unless `force_round` is set, in which
    /// case the result is rounded half away from zero.
    ///
    /// Binary floats are not accepted:
    ///
    /// ```compile_fail
    /// let gbp = currint_core::registry::get("GBP").unwrap();
    /// let minor = gbp.major_to_minor(1.5_f64, false);
    /// ```
    pub fn major_to_minor<V>(&self, value: V, force_round: bool) -> Result<i64>
    where
        V: TryInto<Exact>,
        CurrencyError: From<V::Error>,
    {
        let major = value.try_into()?.to_decimal();
        let mut minor = major
            .checked_mul(Decimal::from(self.divisor()))
            .ok_or_else(|| CurrencyError::overflow(format!("{major} {}", self.code)))?;
        if force_round {
            minor = number::round_half_up(minor);
        }
        if !minor.fract().is_zero() {
            return Err(CurrencyError::Precision {
                value: major.to_string(),
                code: self.code.to_string(),
            });
        }
        number::to_minor(minor)
    }

    /// Convert a value in minor units into an exact decimal of major units.
    ///
    /// Meant for reporting, not for further calculation; use
    /// [`Amount`](crate::Amount) for that.
    #[must_use]
    pub fn minor_to_major(&self, value: i64) -> Decimal {
        match self.unit {
            MinorUnit::Exponent(e) => Decimal::new(value, e),
            MinorUnit::Divisor(d) => Decimal::from(value) / Decimal::from(d),
        }
    }

    /// Format a minor-unit value with this currency's prefix and suffix.
    ///
    /// The major part is the quotient truncated toward zero, so it carries
    /// the sign only when it is nonzero: USD -5 shows as `$0.05`. The minor
    /// part is the remainder of the absolute value, padded to the exponent's
    /// width. For non-decimal currencies it is printed unpadded, so 7 MRO
    /// shows as `1.2 MRO` even though it is 1.4 ouguiya.
    #[must_use]
    pub fn format(&self, value: i64) -> String {
        let divisor = self.divisor();
        let major = value / divisor;
        let minor = value.unsigned_abs() % divisor.unsigned_abs();
        let width = self.exponent().unwrap_or(0) as usize;
        let mut out = format!("{}{major}.{minor:0width$}", self.prefix);
        if self.has_default_suffix() {
            out.push(' ');
            out.push_str(&self.code);
        } else {
            out.push_str(&self.suffix);
        }
        out
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl From<&Self> for Currency {
    fn from(c: &Self) -> Self {
        c.clone()
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.code.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        registry::lookup(&code)
            .cloned()
            .map_err(serde::de::Error::custom)
    }
}

/// Builder for runtime currency definitions.
#[derive(Debug, Clone)]
pub struct CurrencyBuilder {
    code: String,
    numeric_code: Option<String>,
    name: Option<String>,
    exponent: Option<u32>,
    divisor: Option<i64>,
    prefix: Option<String>,
    suffix: Option<String>,
}

impl CurrencyBuilder {
    /// Create a builder for the given code.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            numeric_code: None,
            name: None,
            exponent: None,
            divisor: None,
            prefix: None,
            suffix: None,
        }
    }

    /// Set the ISO numeric code.
    #[must_use]
    pub fn numeric_code(mut self, numeric_code: impl Into<String>) -> Self {
        self.numeric_code = Some(numeric_code.into());
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the decimal exponent. Mutually exclusive with [`Self::divisor`].
    #[must_use]
    pub const fn exponent(mut self, exponent: u32) -> Self {
        self.exponent = Some(exponent);
        self
    }

    /// Set a non-decimal divisor. Mutually exclusive with [`Self::exponent`].
    #[must_use]
    pub const fn divisor(mut self, divisor: i64) -> Self {
        self.divisor = Some(divisor);
        self
    }

    /// Set the display prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the display suffix.
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Validate and build the currency.
    pub fn build(self) -> Result<Currency> {
        let code = self.code.trim().to_uppercase();
        if code.is_empty() {
            return Err(CurrencyError::Configuration(
                "currency code must not be empty".to_string(),
            ));
        }
        let unit = match (self.exponent, self.divisor) {
            (Some(_), Some(_)) => {
                return Err(CurrencyError::Configuration(format!(
                    "{code}: you cannot provide a value for both divisor and exponent"
                )))
            }
            (None, None) => {
                return Err(CurrencyError::Configuration(format!(
                    "{code}: you must provide a value for divisor or exponent"
                )))
            }
            (Some(e), None) if e > MAX_EXPONENT => {
                return Err(CurrencyError::Configuration(format!(
                    "{code}: exponent {e} exceeds {MAX_EXPONENT}"
                )))
            }
            (None, Some(d)) if d <= 0 => {
                return Err(CurrencyError::Configuration(format!(
                    "{code}: divisor must be positive, got {d}"
                )))
            }
            (Some(e), None) => MinorUnit::Exponent(e),
            (None, Some(d)) => MinorUnit::Divisor(d),
        };
        Ok(Currency {
            code: Cow::Owned(code),
            numeric_code: self.numeric_code.map(Cow::Owned),
            name: self.name.map(Cow::Owned),
            unit,
            prefix: Cow::Owned(self.prefix.unwrap_or_default()),
            suffix: Cow::Owned(self.suffix.unwrap_or_default()),
        })
    }
}
