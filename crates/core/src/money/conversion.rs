//! Currency conversion through the forex collaborator.
//!
//! One rate request per call. No retry, timeout or caching here; wrap the
//! provider (see `CachingRateProvider`) or the future if you need them.

use tender_shared::{CurrencyCode, MoneyError, MoneyResult};
use tracing::{debug, warn};

use super::Money;
use crate::context::{self, MoneyContext};

impl Money {
    /// Converts to `target` using the global context's rate provider.
    pub async fn to(&self, target: &str) -> MoneyResult<Self> {
        self.to_with(target, context::global()).await
    }

    /// Converts to `target` using the context's rate provider.
    ///
    /// Converting to the own currency returns `self` without a lookup. The
    /// result is exact: `amount * rate`, unrounded.
    ///
    /// # Errors
    ///
    /// - `InvalidCurrency` if `target` is malformed (no lookup is made)
    /// - `NoRate` if the provider has no rate for the pair
    /// - whatever the provider itself fails with
    pub async fn to_with(&self, target: &str, ctx: &MoneyContext) -> MoneyResult<Self> {
        if self.currency == target {
            return Ok(*self);
        }
        let target = CurrencyCode::parse(target)?;

        debug!(from = %self.currency, to = %target, "Looking up exchange rate");
        let Some(rate) = ctx.forex().rate(self.currency, target).await? else {
            warn!(from = %self.currency, to = %target, "No exchange rate available");
            return Err(MoneyError::no_rate(self.currency, target));
        };

        let amount = self.amount.checked_mul(rate).ok_or_else(|| {
            MoneyError::Overflow(format!("{self} at rate {rate} to {target}"))
        })?;
        Ok(Self::from_decimal(amount, target))
    }
}
