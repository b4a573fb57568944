//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! `Money` wraps `rust_decimal::Decimal`; floats are only accepted as input
//! and are converted through their shortest decimal form first.
//!
//! Values are immutable. Every operation returns a new `Money`.

pub mod allocation;
pub mod arithmetic;
pub mod comparison;
pub mod conversion;
pub mod input;
pub mod rounding;

#[cfg(test)]
mod props;

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tender_shared::{CurrencyCode, MoneyError, MoneyResult};

use crate::context::{self, MoneyContext};

pub use input::{AmountInput, MoneyInput, MoneyRecord, Numeric};

/// A monetary amount with currency.
///
/// Equality is currency-aware: amounts in different currencies are never
/// equal. Ordering requires matching currencies, so `Money` has no
/// `PartialOrd`; use [`Money::compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRecord")]
pub struct Money {
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    currency: CurrencyCode,
}

impl Money {
    /// Creates a Money from an already exact amount and validated currency.
    #[must_use]
    pub const fn from_decimal(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: CurrencyCode) -> Self {
        Self::from_decimal(Decimal::ZERO, currency)
    }

    /// Creates a Money from an amount and currency code, using the global context.
    ///
    /// # Example
    ///
    /// ```
    /// use tender_core::Money;
    ///
    /// let price = Money::new("19.99", "USD").unwrap();
    /// assert_eq!(price.to_string(), "19.99 USD");
    /// ```
    pub fn new(amount: impl Into<AmountInput>, currency: &str) -> MoneyResult<Self> {
        Self::create(MoneyInput::parts(amount, currency))
    }

    /// Creates a Money from any accepted input, using the global context.
    pub fn create(input: impl Into<MoneyInput>) -> MoneyResult<Self> {
        Self::create_with(input, context::global())
    }

    /// Creates a Money from any accepted input.
    ///
    /// The amount is resolved and normalized first, then parsed into an exact
    /// decimal, and only then is the currency validated.
    pub fn create_with(input: impl Into<MoneyInput>, ctx: &MoneyContext) -> MoneyResult<Self> {
        let (amount, currency) = input.into().into_raw()?;

        let amount = match amount {
            AmountInput::Number(number) => number
                .to_decimal()
                .map_err(|reason| MoneyError::invalid_amount(number.to_string(), reason))?,
            AmountInput::Text(raw) => {
                let normalized = ctx.normalizer().normalize(&raw)?;
                input::parse_decimal(&normalized)
                    .map_err(|reason| MoneyError::invalid_amount(raw, reason))?
            }
        };
        let currency = CurrencyCode::parse(&currency)?;

        Ok(Self { amount, currency })
    }

    /// The exact amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::mismatch(self.currency, other.currency))
        }
    }
}

impl From<&str> for MoneyInput {
    fn from(text: &str) -> Self {
        Self::Combined(text.to_string())
    }
}

impl From<String> for MoneyInput {
    fn from(text: String) -> Self {
        Self::Combined(text)
    }
}

impl fmt::Display for Money {
    /// Exact amount without trailing zeros, then the code: `"1.5 USD"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount.normalize(), self.currency)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::create(s)
    }
}

impl TryFrom<MoneyRecord> for Money {
    type Error = MoneyError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        Self::create(record)
    }
}
