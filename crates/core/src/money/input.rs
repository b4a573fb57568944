//! Construction inputs for `Money`.
//!
//! Every accepted input shape is a variant here and is resolved to a raw
//! `(amount, currency)` pair before any validation happens.

use std::fmt;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use tender_shared::{MoneyError, MoneyResult};

/// A plain numeric value: used for amounts, scalars and ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    /// Exact decimal.
    Decimal(Decimal),
    /// Integer.
    Integer(i64),
    /// Binary float, taken at its shortest round-trip decimal form. Rejected
    /// when that form does not fit a decimal exactly.
    Float(f64),
}

impl Numeric {
    /// Converts to an exact decimal.
    ///
    /// Fails with the reason for NaN, infinities, and floats whose decimal
    /// form does not fit without rounding.
    pub fn to_decimal(self) -> Result<Decimal, String> {
        match self {
            Self::Decimal(value) => Ok(value),
            Self::Integer(value) => Ok(Decimal::from(value)),
            Self::Float(value) if value.is_finite() => {
                Decimal::from_str_exact(&value.to_string()).map_err(|err| err.to_string())
            }
            Self::Float(_) => Err("not a finite number".to_string()),
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

impl From<Decimal> for Numeric {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for Numeric {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// The amount half of a construction input.
#[derive(Debug, Clone, PartialEq)]
pub enum AmountInput {
    /// A numeric value, used as-is.
    Number(Numeric),
    /// Free-form text, passed through the number normalizer first.
    Text(String),
}

impl From<Numeric> for AmountInput {
    fn from(value: Numeric) -> Self {
        Self::Number(value)
    }
}

macro_rules! amount_from_numeric {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AmountInput {
                fn from(value: $ty) -> Self {
                    Self::Number(Numeric::from(value))
                }
            }
        )*
    };
}

amount_from_numeric!(Decimal, i64, i32, u32, f64);

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl Serialize for AmountInput {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(value) => serializer.collect_str(value),
            Self::Text(value) => serializer.serialize_str(value),
        }
    }
}

impl<'de> Deserialize<'de> for AmountInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AmountVisitor;

        impl Visitor<'_> for AmountVisitor {
            type Value = AmountInput;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or a numeric string")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(AmountInput::Number(Numeric::Integer(value)))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                i64::try_from(value)
                    .map(|value| AmountInput::Number(Numeric::Integer(value)))
                    .or_else(|_| Ok(AmountInput::Number(Numeric::Decimal(Decimal::from(value)))))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                Ok(AmountInput::Number(Numeric::Float(value)))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(AmountInput::Text(value.to_string()))
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}

/// Structured `{ amount, currency }` input, e.g. deserialized from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyRecord {
    /// Amount as a number or numeric string.
    pub amount: AmountInput,
    /// ISO 4217 currency code.
    pub currency: String,
}

/// Every accepted way of constructing a `Money`.
#[derive(Debug, Clone, PartialEq)]
pub enum MoneyInput {
    /// Amount and currency supplied separately.
    Parts {
        /// The amount.
        amount: AmountInput,
        /// The currency code.
        currency: String,
    },
    /// `"<amount> <currency>"`; surrounding whitespace is ignored and the
    /// currency is everything after the last space.
    Combined(String),
    /// A structured record, equivalent to `Parts`.
    Record(MoneyRecord),
}

impl MoneyInput {
    /// Builds a `Parts` input.
    pub fn parts(amount: impl Into<AmountInput>, currency: impl Into<String>) -> Self {
        Self::Parts {
            amount: amount.into(),
            currency: currency.into(),
        }
    }

    /// Resolves the input into a raw amount and currency code.
    pub(crate) fn into_raw(self) -> MoneyResult<(AmountInput, String)> {
        match self {
            Self::Parts { amount, currency } => Ok((amount, currency)),
            Self::Record(MoneyRecord { amount, currency }) => Ok((amount, currency)),
            Self::Combined(text) => match text.trim().rsplit_once(' ') {
                Some((amount, currency)) => {
                    Ok((AmountInput::Text(amount.to_string()), currency.to_string()))
                }
                None => Err(MoneyError::invalid_amount(
                    text,
                    "expected '<amount> <currency>'",
                )),
            },
        }
    }
}

impl From<MoneyRecord> for MoneyInput {
    fn from(record: MoneyRecord) -> Self {
        Self::Record(record)
    }
}

/// Parses normalized text into an exact decimal.
///
/// Plain notation must fit without rounding; scientific notation ("1.5e3")
/// is accepted as a fallback.
pub(crate) fn parse_decimal(text: &str) -> Result<Decimal, String> {
    match Decimal::from_str_exact(text) {
        Ok(value) => Ok(value),
        Err(_) if text.contains(['e', 'E']) => {
            Decimal::from_scientific(text).map_err(|err| err.to_string())
        }
        Err(err) => Err(err.to_string()),
    }
}
