//! In-memory rate table with inverse and pivot-currency fallbacks.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tender_shared::{CurrencyCode, ForexConfig, MoneyResult};
use tracing::debug;

use super::{ExchangeRate, RateProvider};

/// How an exchange rate was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLookupMethod {
    /// Direct rate found (from -> to).
    Direct,
    /// Inverse rate calculated (to -> from, then inverted).
    Inverse,
    /// Triangulated through the pivot currency.
    Triangulated,
}

/// Result of an exchange rate lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLookup {
    /// The exchange rate.
    pub rate: Decimal,
    /// How the rate was obtained.
    pub method: RateLookupMethod,
}

/// Rate provider over a fixed table of rates.
///
/// Lookup priority:
/// 1. Direct rate (from -> to)
/// 2. Inverse rate (to -> from, then invert)
/// 3. Triangulation through the pivot currency, if one is set
#[derive(Debug, Clone, Default)]
pub struct StaticRateProvider {
    rates: HashMap<(CurrencyCode, CurrencyCode), Decimal>,
    pivot: Option<CurrencyCode>,
}

impl StaticRateProvider {
    /// Creates an empty table with no pivot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from the `[forex]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if a currency code is invalid or a rate is not positive.
    pub fn from_config(config: &ForexConfig) -> MoneyResult<Self> {
        let mut provider = Self::new();
        if let Some(pivot) = &config.pivot {
            provider = provider.with_pivot(CurrencyCode::parse(pivot)?);
        }
        for rate in &config.rates {
            provider = provider.with_rate(ExchangeRate::from_config(rate)?);
        }
        Ok(provider)
    }

    /// Sets the currency used to triangulate unknown pairs.
    #[must_use]
    pub fn with_pivot(mut self, pivot: CurrencyCode) -> Self {
        self.pivot = Some(pivot);
        self
    }

    /// Adds or replaces a rate.
    #[must_use]
    pub fn with_rate(mut self, rate: ExchangeRate) -> Self {
        self.rates.insert((rate.from, rate.to), rate.rate);
        self
    }

    /// Number of rates in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table holds no rates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Finds a rate for the pair, reporting how it was obtained.
    #[must_use]
    pub fn lookup(&self, from: CurrencyCode, to: CurrencyCode) -> Option<RateLookup> {
        if from == to {
            return Some(RateLookup {
                rate: Decimal::ONE,
                method: RateLookupMethod::Direct,
            });
        }

        if let Some(rate) = self.rates.get(&(from, to)) {
            return Some(RateLookup {
                rate: *rate,
                method: RateLookupMethod::Direct,
            });
        }

        if let Some(rate) = self.inverse_rate(from, to) {
            return Some(RateLookup {
                rate,
                method: RateLookupMethod::Inverse,
            });
        }

        let pivot = self.pivot.filter(|pivot| *pivot != from && *pivot != to)?;
        let from_to_pivot = self.rate_with_inverse(from, pivot)?;
        let pivot_to_target = self.rate_with_inverse(pivot, to)?;
        Some(RateLookup {
            rate: from_to_pivot.checked_mul(pivot_to_target)?,
            method: RateLookupMethod::Triangulated,
        })
    }

    fn inverse_rate(&self, from: CurrencyCode, to: CurrencyCode) -> Option<Decimal> {
        self.rates
            .get(&(to, from))
            .and_then(|rate| Decimal::ONE.checked_div(*rate))
    }

    fn rate_with_inverse(&self, from: CurrencyCode, to: CurrencyCode) -> Option<Decimal> {
        self.rates
            .get(&(from, to))
            .copied()
            .or_else(|| self.inverse_rate(from, to))
    }
}

#[async_trait]
impl RateProvider for StaticRateProvider {
    async fn rate(&self, from: CurrencyCode, to: CurrencyCode) -> MoneyResult<Option<Decimal>> {
        let lookup = self.lookup(from, to);
        debug!(
            from = %from,
            to = %to,
            method = ?lookup.map(|found| found.method),
            "Static rate lookup"
        );
        Ok(lookup.map(|found| found.rate))
    }
}
