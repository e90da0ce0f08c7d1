//! Amount type representing a whole number of minor units of a currency.
//!
//! An [`Amount`] is either a real amount, pairing a [`Currency`] with an
//! integer count of its minor unit, or [`Amount::ZERO`], a zero with no
//! currency at all. `ZERO` is the identity for addition and subtraction,
//! which makes it the natural seed when summing amounts whose currency is
//! not known up front.
//!
//! Arithmetic never mixes currencies silently: combining two real amounts
//! of different currencies fails with [`CurrencyError::CurrencyMismatch`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use crate::currency::Currency;
use crate::error::{CurrencyError, Result};
use crate::number::{self, Exact, Rate};
use crate::registry;

/// An amount of money.
///
/// # Examples
///
/// ```
/// use currint_core::Amount;
/// use rust_decimal_macros::dec;
///
/// let price = Amount::from_code_and_major("GBP", "3.00", false).unwrap();
/// assert_eq!(price.value(), 300);
/// assert_eq!(price.to_string(), "£3.00");
///
/// // Arithmetic operations
/// let tax = price.apply_factor(dec!(0.2)).unwrap();
/// let total = (&price + &tax).unwrap();
/// assert_eq!(total.to_string(), "£3.60");
///
/// // Mixing currencies is an error
/// let dollars = Amount::from_code_and_minor("USD", 100).unwrap();
/// assert!((&total + &dollars).is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "AmountRepr", try_from = "AmountRepr")]
pub enum Amount {
    /// A value in minor units of a currency.
    Real {
        /// The currency.
        currency: Currency,
        /// The number of minor units (e.g. cents).
        value: i64,
    },
    /// Zero of no currency.
    Zero,
}

impl Amount {
    /// The currency-less zero.
    pub const ZERO: Self = Self::Zero;

    /// Create a new amount from a currency and a value in minor units.
    #[must_use]
    pub fn new(currency: impl Into<Currency>, value: i64) -> Self {
        Self::Real {
            currency: currency.into(),
            value,
        }
    }

    /// Create an amount from a currency code and a value in minor units.
    pub fn from_code_and_minor(code: &str, value: i64) -> Result<Self> {
        Ok(Self::new(registry::lookup(code)?, value))
    }

    /// Create an amount from a currency code and a value in major units,
    /// e.g. `"1.43"`, `dec!(1.43)` or `10`.
    ///
    /// See [`Currency::major_to_minor`] for the rounding rules.
    pub fn from_code_and_major<V>(code: &str, value: V, force_round: bool) -> Result<Self>
    where
        V: TryInto<Exact>,
        CurrencyError: From<V::Error>,
    {
        let currency = registry::lookup(code)?;
        let value = currency.major_to_minor(value, force_round)?;
        Ok(Self::new(currency, value))
    }

    /// Build an amount of the same currency with a different value.
    ///
    /// Fails on [`Amount::ZERO`], which has no currency to reuse.
    pub fn with_value(&self, value: i64) -> Result<Self> {
        match self {
            Self::Real { currency, .. } => Ok(Self::new(currency, value)),
            Self::Zero => Err(CurrencyError::Unsupported(
                "cannot build an amount from the currency-less zero",
            )),
        }
    }

    /// The currency, or `None` for [`Amount::ZERO`].
    #[must_use]
    pub const fn currency(&self) -> Option<&Currency> {
        match self {
            Self::Real { currency, .. } => Some(currency),
            Self::Zero => None,
        }
    }

    /// The currency code, or `None` for [`Amount::ZERO`].
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.currency().map(Currency::code)
    }

    /// The value in minor units.
    #[must_use]
    pub const fn value(&self) -> i64 {
        match self {
            Self::Real { value, .. } => *value,
            Self::Zero => 0,
        }
    }

    /// Check if this is the currency-less zero.
    #[must_use]
    pub const fn is_currencyless(&self) -> bool {
        matches!(self, Self::Zero)
    }

    /// Check if the amount is zero, whatever its currency.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.value() == 0
    }

    /// Check if the amount is positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.value() > 0
    }

    /// Check if the amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.value() < 0
    }

    /// Add two amounts.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.combine(other, i64::checked_add, "+")
    }

    /// Subtract `other` from this amount.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.combine(other, i64::checked_sub, "-")
    }

    fn combine(&self, other: &Self, op: fn(i64, i64) -> Option<i64>, sym: &str) -> Result<Self> {
        let currency = match (self, other) {
            (Self::Zero, Self::Zero) => return Ok(Self::Zero),
            (Self::Real { currency: a, .. }, Self::Real { currency: b, .. }) if a != b => {
                return Err(CurrencyError::mismatch(a.code(), b.code()))
            }
            (Self::Real { currency, .. }, _) | (Self::Zero, Self::Real { currency, .. }) => {
                currency
            }
        };
        let (x, y) = (self.value(), other.value());
        let value =
            op(x, y).ok_or_else(|| CurrencyError::overflow(format!("{x} {sym} {y} {currency}")))?;
        Ok(Self::new(currency, value))
    }

    /// Negate this amount.
    pub fn try_neg(&self) -> Result<Self> {
        Self::Zero.try_sub(self)
    }

    /// Get the absolute value of this amount.
    pub fn abs(&self) -> Result<Self> {
        if self.is_negative() {
            self.try_neg()
        } else {
            Ok(self.clone())
        }
    }

    /// Sum amounts, starting from [`Amount::ZERO`].
    ///
    /// An empty sequence sums to `ZERO`; otherwise the result carries the
    /// currency shared by every amount.
    ///
    /// ```
    /// use currint_core::Amount;
    ///
    /// let amounts = [
    ///     Amount::from_code_and_minor("EUR", 150).unwrap(),
    ///     Amount::from_code_and_minor("EUR", 275).unwrap(),
    /// ];
    /// let total = Amount::try_sum(&amounts).unwrap();
    /// assert_eq!(total.to_string(), "€4.25");
    /// assert_eq!(Amount::try_sum(&[]).unwrap(), Amount::ZERO);
    /// ```
    pub fn try_sum<'a, I>(amounts: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::Zero, |acc, amount| acc.try_add(amount))
    }

    /// Multiply by an exact factor, rounding the result half away from zero.
    ///
    /// Only integers and decimals are accepted; see [`Exact`]. A float
    /// factor does not compile:
    ///
    /// ```compile_fail
    /// use currint_core::Amount;
    ///
    /// let amount = Amount::from_code_and_minor("GBP", 100).unwrap();
    /// let scaled = amount.apply_factor(1.005_f64);
    /// ```
    pub fn apply_factor(&self, factor: impl Into<Exact>) -> Result<Self> {
        match self {
            Self::Real { currency, value } => {
                let value = number::scale(*value, factor.into().to_decimal())?;
                Ok(Self::new(currency, value))
            }
            Self::Zero => Ok(Self::Zero),
        }
    }

    /// Convert into another currency at the given rate, rounding the result
    /// half away from zero.
    ///
    /// The rate is expressed in minor units of the target currency per minor
    /// unit of this one. Float rates are accepted since exchange rates are
    /// approximate anyway; they are turned into a decimal before
    /// multiplying.
    pub fn convert_currency(&self, code: &str, rate: impl Into<Rate>) -> Result<Self> {
        let currency = registry::lookup(code)?;
        let rate = rate.into().to_decimal()?;
        let value = number::scale(self.value(), rate)?;
        Ok(Self::new(currency, value))
    }

    /// Divide by an integer, failing unless the division is exact.
    pub fn integral_division(&self, divisor: i64) -> Result<Self> {
        let value = self.value();
        if divisor == 0 {
            return Err(CurrencyError::DivisionByZero);
        }
        // Only i64::MIN / -1 overflows here; zero was handled above.
        let quotient = value
            .checked_div(divisor)
            .ok_or_else(|| CurrencyError::overflow(format!("{value} / {divisor}")))?;
        if value % divisor != 0 {
            return Err(CurrencyError::InexactDivision { value, divisor });
        }
        match self {
            Self::Real { currency, .. } => Ok(Self::new(currency, quotient)),
            Self::Zero => Ok(Self::Zero),
        }
    }

    /// The value in major units as an exact decimal.
    ///
    /// Meant for reporting; keep calculating with [`Amount`] itself.
    #[must_use]
    pub fn to_major_decimal(&self) -> Decimal {
        match self {
            Self::Real { currency, value } => currency.minor_to_major(*value),
            Self::Zero => Decimal::ZERO,
        }
    }

    /// Compare two amounts.
    ///
    /// Fails with [`CurrencyError::CurrencyMismatch`] when both are real
    /// amounts of different currencies. [`Amount::ZERO`] compares with
    /// anything.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        if let (Self::Real { currency: a, .. }, Self::Real { currency: b, .. }) = (self, other) {
            if a != b {
                return Err(CurrencyError::mismatch(a.code(), b.code()));
            }
        }
        Ok(self.value().cmp(&other.value()))
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::Zero
    }
}

impl PartialEq for Amount {
    /// Real amounts are equal when currency and value match. The
    /// currency-less zero equals any amount whose value is zero.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Real { currency: a, value: x }, Self::Real { currency: b, value: y }) => {
                a == b && x == y
            }
            _ => self.value() == other.value(),
        }
    }
}

impl PartialOrd for Amount {
    /// `None` when the currencies differ; see [`Amount::try_cmp`].
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real { currency, value } => f.write_str(&currency.format(*value)),
            Self::Zero => f.write_str("0"),
        }
    }
}

// Arithmetic operations on references

impl Add for &Amount {
    type Output = Result<Amount>;

    fn add(self, other: &Amount) -> Result<Amount> {
        self.try_add(other)
    }
}

impl Sub for &Amount {
    type Output = Result<Amount>;

    fn sub(self, other: &Amount) -> Result<Amount> {
        self.try_sub(other)
    }
}

// Arithmetic operations on owned values

impl Add for Amount {
    type Output = Result<Self>;

    fn add(self, other: Self) -> Result<Self> {
        &self + &other
    }
}

impl Sub for Amount {
    type Output = Result<Self>;

    fn sub(self, other: Self) -> Result<Self> {
        &self - &other
    }
}

/// Serialized form of an [`Amount`]: `{"currency": "GBP", "value": 132}`,
/// with a `null` currency for [`Amount::ZERO`].
#[derive(Serialize, Deserialize)]
struct AmountRepr {
    currency: Option<String>,
    value: i64,
}

impl From<Amount> for AmountRepr {
    fn from(amount: Amount) -> Self {
        Self {
            currency: amount.code().map(str::to_string),
            value: amount.value(),
        }
    }
}

impl TryFrom<AmountRepr> for Amount {
    type Error = CurrencyError;

    fn try_from(repr: AmountRepr) -> Result<Self> {
        match repr.currency {
            Some(code) => Self::from_code_and_minor(&code, repr.value),
            None if repr.value == 0 => Ok(Self::Zero),
            None => Err(CurrencyError::Unsupported(
                "only a zero amount may have no currency",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn gbp(value: i64) -> Amount {
        Amount::from_code_and_minor("GBP", value).unwrap()
    }

    fn usd(value: i64) -> Amount {
        Amount::from_code_and_minor("USD", value).unwrap()
    }

    #[test]
    fn test_new() {
        let currency = registry::get("GBP").unwrap();
        let amount = Amount::new(currency, 132);
        assert_eq!(amount.value(), 132);
        assert_eq!(amount.currency(), Some(currency));
        assert_eq!(amount.code(), Some("GBP"));
        assert_eq!(amount, gbp(132));
    }

    #[test]
    fn test_from_code_and_minor() {
        assert_eq!(Amount::from_code_and_minor("gbp", 5).unwrap(), gbp(5));
        assert_eq!(
            Amount::from_code_and_minor("XYZ", 5),
            Err(CurrencyError::UnknownCurrency("XYZ".to_string()))
        );
    }

    #[test]
    fn test_from_code_and_major() {
        assert_eq!(
            Amount::from_code_and_major("GBP", "3.00", false).unwrap(),
            gbp(300)
        );
        assert_eq!(Amount::from_code_and_major("GBP", 3, false).unwrap(), gbp(300));
        assert_eq!(
            Amount::from_code_and_major("GBP", dec!(1.43), false).unwrap(),
            gbp(143)
        );
        assert!(matches!(
            Amount::from_code_and_major("GBP", "12.432", false),
            Err(CurrencyError::Precision { .. })
        ));
        assert_eq!(
            Amount::from_code_and_major("GBP", "12.432", true).unwrap(),
            gbp(1243)
        );
        assert_eq!(
            Amount::from_code_and_major("GBP", "12.435", true).unwrap(),
            gbp(1244)
        );
        assert!(matches!(
            Amount::from_code_and_major("XYZ", "1", false),
            Err(CurrencyError::UnknownCurrency(_))
        ));
        assert!(matches!(
            Amount::from_code_and_major("GBP", "twelve", false),
            Err(CurrencyError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_equality() {
        assert_eq!(gbp(132), gbp(132));
        assert_ne!(gbp(132), usd(132));
        assert_ne!(gbp(132), gbp(99));
    }

    #[test]
    fn test_zero_equality() {
        assert_eq!(Amount::ZERO, Amount::ZERO);
        assert_eq!(Amount::ZERO, gbp(0));
        assert_eq!(usd(0), Amount::ZERO);
        assert_ne!(Amount::ZERO, gbp(1));
        assert_ne!(gbp(-1), Amount::ZERO);
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn test_add() {
        assert_eq!((&gbp(132) + &gbp(100)).unwrap(), gbp(232));
        assert_eq!(gbp(132).try_add(&gbp(-200)).unwrap(), gbp(-68));
        assert_eq!(
            gbp(132) + usd(100),
            Err(CurrencyError::mismatch("GBP", "USD"))
        );
    }

    #[test]
    fn test_sub() {
        assert_eq!((&gbp(132) - &gbp(100)).unwrap(), gbp(32));
        assert!(matches!(
            gbp(132) - usd(100),
            Err(CurrencyError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_add_overflow() {
        assert!(matches!(
            gbp(i64::MAX).try_add(&gbp(1)),
            Err(CurrencyError::Overflow(_))
        ));
        assert!(matches!(
            gbp(i64::MIN).try_sub(&gbp(1)),
            Err(CurrencyError::Overflow(_))
        ));
    }

    #[test]
    fn test_zero_identity() {
        let a = gbp(132);

        let left = Amount::ZERO.try_add(&a).unwrap();
        assert_eq!(left.code(), Some("GBP"));
        assert_eq!(left.value(), 132);

        let right = a.try_add(&Amount::ZERO).unwrap();
        assert_eq!(right.code(), Some("GBP"));
        assert_eq!(right, a);

        let zero = Amount::ZERO.try_add(&Amount::ZERO).unwrap();
        assert!(zero.is_currencyless());
        assert!(Amount::ZERO.try_sub(&Amount::ZERO).unwrap().is_currencyless());
    }

    #[test]
    fn test_zero_subtraction() {
        let negated = Amount::ZERO.try_sub(&gbp(132)).unwrap();
        assert_eq!(negated, gbp(-132));
        assert_eq!(negated.code(), Some("GBP"));

        let same = gbp(132).try_sub(&Amount::ZERO).unwrap();
        assert_eq!(same, gbp(132));
    }

    #[test]
    fn test_zero_takes_currency_of_zero_amount() {
        let sum = Amount::ZERO.try_add(&usd(0)).unwrap();
        assert!(!sum.is_currencyless());
        assert_eq!(sum.code(), Some("USD"));
    }

    #[test]
    fn test_try_sum() {
        let amounts = vec![gbp(100), gbp(250), gbp(-50)];
        assert_eq!(Amount::try_sum(&amounts).unwrap(), gbp(300));
        assert!(Amount::try_sum(&[]).unwrap().is_currencyless());
        assert!(Amount::try_sum(&[gbp(1), usd(1)]).is_err());
    }

    #[test]
    fn test_neg_and_abs() {
        assert_eq!(gbp(132).try_neg().unwrap(), gbp(-132));
        assert_eq!(gbp(-132).abs().unwrap(), gbp(132));
        assert_eq!(gbp(132).abs().unwrap(), gbp(132));
        assert!(gbp(i64::MIN).try_neg().is_err());
        assert!(Amount::ZERO.try_neg().unwrap().is_currencyless());
    }

    #[test]
    fn test_is_positive_negative() {
        let pos = gbp(100);
        let neg = gbp(-100);
        let zero = gbp(0);

        assert!(pos.is_positive());
        assert!(!pos.is_negative());

        assert!(!neg.is_positive());
        assert!(neg.is_negative());

        assert!(!zero.is_positive());
        assert!(!zero.is_negative());
        assert!(zero.is_zero());
        assert!(Amount::ZERO.is_zero());
        assert!(!pos.is_zero());
    }

    #[test]
    fn test_format() {
        assert_eq!(usd(132).to_string(), "$1.32");
        assert_eq!(usd(-132).to_string(), "$-1.32");
        assert_eq!(gbp(132).to_string(), "£1.32");
        assert_eq!(
            Amount::from_code_and_minor("MRO", 7).unwrap().to_string(),
            "1.2 MRO"
        );
        assert_eq!(Amount::ZERO.to_string(), "0");
    }

    #[test]
    fn test_to_major_decimal() {
        assert_eq!(gbp(132).to_major_decimal(), dec!(1.32));
        assert_eq!(
            Amount::from_code_and_minor("MRO", 7)
                .unwrap()
                .to_major_decimal(),
            dec!(1.4)
        );
        assert_eq!(Amount::ZERO.to_major_decimal(), Decimal::ZERO);
    }

    #[test]
    fn test_apply_factor() {
        assert_eq!(gbp(150).apply_factor(2).unwrap(), gbp(300));
        assert_eq!(gbp(100).apply_factor(dec!(1.004)).unwrap(), gbp(100));
        assert_eq!(gbp(100).apply_factor(dec!(1.005)).unwrap(), gbp(101));
        assert_eq!(gbp(-100).apply_factor(dec!(1.005)).unwrap(), gbp(-101));
        assert_eq!(gbp(100).apply_factor(Exact::Integer(-1)).unwrap(), gbp(-100));
        assert!(Amount::ZERO.apply_factor(5).unwrap().is_currencyless());
        assert!(matches!(
            gbp(i64::MAX).apply_factor(2),
            Err(CurrencyError::Overflow(_))
        ));
    }

    #[test]
    fn test_convert_currency() {
        let converted = gbp(100).convert_currency("USD", dec!(1.2345)).unwrap();
        assert_eq!(converted, usd(123));

        let rounded = gbp(100).convert_currency("usd", dec!(1.235)).unwrap();
        assert_eq!(rounded, usd(124));

        let float_rate = gbp(200).convert_currency("USD", 1.25_f64).unwrap();
        assert_eq!(float_rate, usd(250));

        // 0.15_f64 is just below 0.15, so 1.4999... rounds down
        let inexact_float = gbp(10).convert_currency("USD", 0.15_f64).unwrap();
        assert_eq!(inexact_float, usd(1));
        let exact = gbp(10).convert_currency("USD", dec!(0.15)).unwrap();
        assert_eq!(exact, usd(2));

        let integer_rate = gbp(3).convert_currency("JPY", 2).unwrap();
        assert_eq!(integer_rate.code(), Some("JPY"));
        assert_eq!(integer_rate.value(), 6);

        assert!(matches!(
            gbp(100).convert_currency("XYZ", 1),
            Err(CurrencyError::UnknownCurrency(_))
        ));
        assert!(matches!(
            gbp(100).convert_currency("USD", f64::NAN),
            Err(CurrencyError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_convert_zero() {
        let converted = Amount::ZERO.convert_currency("EUR", 2).unwrap();
        assert_eq!(converted.code(), Some("EUR"));
        assert_eq!(converted.value(), 0);
    }

    #[test]
    fn test_integral_division() {
        assert_eq!(gbp(300).integral_division(3).unwrap(), gbp(100));
        assert_eq!(gbp(-300).integral_division(4).unwrap(), gbp(-75));
        assert_eq!(
            gbp(100).integral_division(3),
            Err(CurrencyError::InexactDivision {
                value: 100,
                divisor: 3
            })
        );
        assert_eq!(
            gbp(100).integral_division(0),
            Err(CurrencyError::DivisionByZero)
        );
        assert!(matches!(
            gbp(i64::MIN).integral_division(-1),
            Err(CurrencyError::Overflow(_))
        ));
        assert!(Amount::ZERO.integral_division(7).unwrap().is_currencyless());
    }

    #[test]
    fn test_ordering() {
        assert!(gbp(100) < gbp(200));
        assert!(gbp(200) >= gbp(200));
        assert_eq!(gbp(1).try_cmp(&gbp(1)).unwrap(), Ordering::Equal);
        assert_eq!(gbp(1).partial_cmp(&usd(1)), None);
        assert_eq!(
            gbp(1).try_cmp(&usd(1)),
            Err(CurrencyError::mismatch("GBP", "USD"))
        );
    }

    #[test]
    fn test_ordering_against_zero() {
        assert!(Amount::ZERO < gbp(1));
        assert!(usd(-1) < Amount::ZERO);
        assert_eq!(Amount::ZERO.try_cmp(&gbp(0)).unwrap(), Ordering::Equal);
        assert_eq!(gbp(5).try_cmp(&Amount::ZERO).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_with_value() {
        assert_eq!(gbp(1).with_value(42).unwrap(), gbp(42));
        assert!(matches!(
            Amount::ZERO.with_value(42),
            Err(CurrencyError::Unsupported(_))
        ));
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&gbp(132)).unwrap();
        assert_eq!(json, r#"{"currency":"GBP","value":132}"#);
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gbp(132));

        let zero = serde_json::to_string(&Amount::ZERO).unwrap();
        assert_eq!(zero, r#"{"currency":null,"value":0}"#);
        let back: Amount = serde_json::from_str(&zero).unwrap();
        assert!(back.is_currencyless());

        assert!(serde_json::from_str::<Amount>(r#"{"currency":null,"value":5}"#).is_err());
        assert!(serde_json::from_str::<Amount>(r#"{"currency":"QQQ","value":5}"#).is_err());
    }
}
