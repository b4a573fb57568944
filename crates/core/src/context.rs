//! Collaborators used by `Money` operations.
//!
//! A `MoneyContext` can be passed explicitly to the `*_with` operations, or
//! installed once for the whole process with [`install`]. Operations without
//! an explicit context use [`global`].

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tender_shared::{MoneyError, MoneyResult, TenderConfig};
use tracing::debug;

use crate::forex::{CachingRateProvider, RateProvider, StaticRateProvider};
use crate::locale::{IsoLocalization, Localization, NumberNormalizer, SeparatorNormalizer};

static GLOBAL: OnceCell<MoneyContext> = OnceCell::new();

/// Localization, number normalization and forex collaborators.
#[derive(Clone)]
pub struct MoneyContext {
    localization: Arc<dyn Localization>,
    normalizer: Arc<dyn NumberNormalizer>,
    forex: Arc<dyn RateProvider>,
}

impl Default for MoneyContext {
    /// ISO localization, `.`/`,` normalization, and an empty rate table.
    fn default() -> Self {
        Self {
            localization: Arc::new(IsoLocalization::default()),
            normalizer: Arc::new(SeparatorNormalizer::default()),
            forex: Arc::new(StaticRateProvider::default()),
        }
    }
}

impl fmt::Debug for MoneyContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoneyContext").finish_non_exhaustive()
    }
}

impl MoneyContext {
    /// Creates a context with the default collaborators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a context from configuration.
    ///
    /// Configured rates are served by a cached static table.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured currency code, separator pair or rate
    /// is invalid.
    pub fn from_config(config: &TenderConfig) -> MoneyResult<Self> {
        let rates = StaticRateProvider::from_config(&config.forex)?;
        debug!(
            rates = rates.len(),
            pivot = ?config.forex.pivot,
            "Building money context from config"
        );

        Ok(Self {
            localization: Arc::new(IsoLocalization::from_config(&config.locale)?),
            normalizer: Arc::new(SeparatorNormalizer::from_config(&config.locale)?),
            forex: Arc::new(CachingRateProvider::from_config(rates, &config.forex)),
        })
    }

    /// Replaces the localization collaborator.
    #[must_use]
    pub fn with_localization(mut self, localization: impl Localization + 'static) -> Self {
        self.localization = Arc::new(localization);
        self
    }

    /// Replaces the number normalizer.
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: impl NumberNormalizer + 'static) -> Self {
        self.normalizer = Arc::new(normalizer);
        self
    }

    /// Replaces the forex rate provider.
    #[must_use]
    pub fn with_forex(mut self, forex: impl RateProvider + 'static) -> Self {
        self.forex = Arc::new(forex);
        self
    }

    /// Replaces the forex rate provider with a shared one.
    #[must_use]
    pub fn with_shared_forex(mut self, forex: Arc<dyn RateProvider>) -> Self {
        self.forex = forex;
        self
    }

    /// The localization collaborator.
    #[must_use]
    pub fn localization(&self) -> &dyn Localization {
        self.localization.as_ref()
    }

    /// The number normalizer.
    #[must_use]
    pub fn normalizer(&self) -> &dyn NumberNormalizer {
        self.normalizer.as_ref()
    }

    /// The forex rate provider.
    #[must_use]
    pub fn forex(&self) -> &dyn RateProvider {
        self.forex.as_ref()
    }
}

/// Installs the process-wide context.
///
/// Must be called before the first operation that relies on the global
/// context; it cannot be replaced afterwards.
///
/// # Errors
///
/// Returns `AlreadyInstalled` if a context was installed, or the default was
/// already handed out by [`global`].
pub fn install(context: MoneyContext) -> MoneyResult<()> {
    GLOBAL
        .set(context)
        .map_err(|_| MoneyError::AlreadyInstalled)?;
    debug!("Installed global money context");
    Ok(())
}

/// Returns the process-wide context, falling back to the defaults.
pub fn global() -> &'static MoneyContext {
    GLOBAL.get_or_init(MoneyContext::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Money;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tender_shared::CurrencyCode;

    /// Doubles everything and counts the lookups.
    struct CountingRate(Arc<AtomicUsize>);

    #[async_trait]
    impl RateProvider for CountingRate {
        async fn rate(&self, _from: CurrencyCode, _to: CurrencyCode) -> MoneyResult<Option<Decimal>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(Some(dec!(2)))
        }
    }

    #[test]
    fn test_install_only_once() {
        // Whichever of these wins, the global stays equivalent to the default.
        let _ = install(MoneyContext::default());
        assert_eq!(
            install(MoneyContext::default()),
            Err(MoneyError::AlreadyInstalled)
        );
        assert_eq!(global().localization().precision(CurrencyCode::USD), 2);
    }

    #[tokio::test]
    async fn test_from_config() {
        let config = TenderConfig::from_toml_str(
            r#"
            [locale]
            decimal_separator = ","
            group_separator = "."

            [forex]
            [[forex.rates]]
            from = "USD"
            to = "EUR"
            rate = "0.9"
            "#,
        )
        .unwrap();
        let context = MoneyContext::from_config(&config).unwrap();

        assert_eq!(context.normalizer().normalize("1.234,5").unwrap(), "1234.5");
        assert_eq!(
            context
                .forex()
                .rate(CurrencyCode::USD, CurrencyCode::EUR)
                .await
                .unwrap(),
            Some(dec!(0.9))
        );
    }

    #[test]
    fn test_from_config_rejects_invalid_rate() {
        let config = TenderConfig::from_toml_str(
            r#"
            [[forex.rates]]
            from = "USD"
            to = "EUR"
            rate = "-1"
            "#,
        )
        .unwrap();
        let err = MoneyContext::from_config(&config).unwrap_err();
        assert_eq!(err.error_code(), "TYPE_ERROR");
    }

    #[tokio::test]
    async fn test_shared_forex_cache_across_contexts() {
        let calls = Arc::new(AtomicUsize::new(0));
        let forex: Arc<dyn RateProvider> =
            Arc::new(CachingRateProvider::new(CountingRate(Arc::clone(&calls))));
        let first = MoneyContext::new().with_shared_forex(Arc::clone(&forex));
        let second = MoneyContext::new().with_shared_forex(forex);

        let money = Money::new(5, "USD").unwrap();
        assert_eq!(money.to_with("EUR", &first).await.unwrap().amount(), dec!(10));
        assert_eq!(money.to_with("EUR", &second).await.unwrap().amount(), dec!(10));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
