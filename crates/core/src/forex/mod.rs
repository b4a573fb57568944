//! Exchange rate providers.
//!
//! The rate lookup is the only asynchronous seam of the crate. Providers
//! answer `Ok(None)` when a pair is unknown and reserve `Err` for actual
//! failures of the lookup itself.

pub mod caching;
pub mod exchange;
pub mod static_rates;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tender_shared::{CurrencyCode, MoneyResult};

pub use caching::CachingRateProvider;
pub use exchange::ExchangeRate;
pub use static_rates::{RateLookup, RateLookupMethod, StaticRateProvider};

/// Source of exchange rates (1 `from` = `rate` `to`).
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Looks up the rate for a currency pair.
    async fn rate(&self, from: CurrencyCode, to: CurrencyCode) -> MoneyResult<Option<Decimal>>;
}
