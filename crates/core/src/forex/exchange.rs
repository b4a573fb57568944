//! Exchange rate types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tender_shared::{CurrencyCode, MoneyError, MoneyResult, RateConfig};

/// Exchange rate between two currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency code.
    pub from: CurrencyCode,
    /// Target currency code.
    pub to: CurrencyCode,
    /// Exchange rate (1 from = rate to).
    pub rate: Decimal,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    ///
    /// # Errors
    ///
    /// Returns an error if the rate is zero or negative.
    pub fn new(from: CurrencyCode, to: CurrencyCode, rate: Decimal) -> MoneyResult<Self> {
        if rate <= Decimal::ZERO {
            return Err(MoneyError::InvalidArgument(format!(
                "exchange rate {from}/{to} must be positive, got {rate}"
            )));
        }
        Ok(Self { from, to, rate })
    }

    /// Validates a rate from the `[[forex.rates]]` configuration section.
    pub fn from_config(config: &RateConfig) -> MoneyResult<Self> {
        Self::new(
            CurrencyCode::parse(&config.from)?,
            CurrencyCode::parse(&config.to)?,
            config.rate,
        )
    }

    /// Returns the inverse rate.
    ///
    /// # Errors
    ///
    /// Returns an error if the reciprocal does not fit in a decimal.
    pub fn inverse(&self) -> MoneyResult<Self> {
        let rate = Decimal::ONE.checked_div(self.rate).ok_or_else(|| {
            MoneyError::Overflow(format!("inverse of {}/{} rate {}", self.from, self.to, self.rate))
        })?;
        Ok(Self {
            from: self.to,
            to: self.from,
            rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_rejects_non_positive() {
        assert!(ExchangeRate::new(CurrencyCode::USD, CurrencyCode::EUR, dec!(0)).is_err());
        assert!(ExchangeRate::new(CurrencyCode::USD, CurrencyCode::EUR, dec!(-1.2)).is_err());
    }

    #[test]
    fn test_inverse() {
        let rate = ExchangeRate::new(CurrencyCode::USD, CurrencyCode::EUR, dec!(0.8)).unwrap();
        let inverse = rate.inverse().unwrap();
        assert_eq!(inverse.from, CurrencyCode::EUR);
        assert_eq!(inverse.to, CurrencyCode::USD);
        assert_eq!(inverse.rate, dec!(1.25));
    }

    #[test]
    fn test_from_config() {
        let config = RateConfig {
            from: "USD".into(),
            to: "JPY".into(),
            rate: dec!(150.25),
        };
        let rate = ExchangeRate::from_config(&config).unwrap();
        assert_eq!(rate.to, CurrencyCode::JPY);
        assert_eq!(rate.rate, dec!(150.25));

        let config = RateConfig {
            from: "usd".into(),
            to: "JPY".into(),
            rate: dec!(150.25),
        };
        let err = ExchangeRate::from_config(&config).unwrap_err();
        assert_eq!(err, MoneyError::invalid_currency("usd"));
    }
}
