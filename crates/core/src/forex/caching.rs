//! Rate lookup caching using Moka.
//!
//! Wraps a (typically remote) provider so repeated conversions between the
//! same pair do not hit it again until the entry expires.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use rust_decimal::Decimal;
use tender_shared::{CurrencyCode, ForexConfig, MoneyResult};
use tracing::debug;

use super::RateProvider;

/// Default cache capacity (number of currency pairs).
const DEFAULT_CACHE_CAPACITY: u64 = 1_000;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// Caches the answers of an inner rate provider.
///
/// Known and unknown pairs are both cached. Provider errors are not, so a
/// failed lookup is retried on the next call.
pub struct CachingRateProvider<P> {
    inner: P,
    cache: Cache<(CurrencyCode, CurrencyCode), Option<Decimal>>,
}

impl<P: RateProvider> CachingRateProvider<P> {
    /// Wraps `inner` with default settings: 1000 pairs, 5 minute TTL.
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self::with_config(inner, DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Wraps `inner` with a custom capacity and TTL.
    #[must_use]
    pub fn with_config(inner: P, max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { inner, cache }
    }

    /// Wraps `inner` using the `[forex]` cache settings.
    #[must_use]
    pub fn from_config(inner: P, config: &ForexConfig) -> Self {
        Self::with_config(inner, config.cache_capacity, config.cache_ttl_secs)
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs pending cache maintenance so `entry_count` is up to date.
    pub async fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks().await;
    }
}

#[async_trait]
impl<P: RateProvider> RateProvider for CachingRateProvider<P> {
    async fn rate(&self, from: CurrencyCode, to: CurrencyCode) -> MoneyResult<Option<Decimal>> {
        let key = (from, to);
        if let Some(cached) = self.cache.get(&key).await {
            debug!(from = %from, to = %to, "Cache hit for exchange rate");
            return Ok(cached);
        }

        debug!(from = %from, to = %to, "Cache miss for exchange rate");
        let rate = self.inner.rate(from, to).await?;
        self.cache.insert(key, rate).await;
        Ok(rate)
    }
}
