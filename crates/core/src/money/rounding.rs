//! Banker's rounding and display formatting.
//!
//! Rounding is always round-half-to-even (`MidpointNearestEven`):
//! - 2.5 → 2, 3.5 → 4
//! - 2.25 → 2.2, 2.35 → 2.4 (at 1 decimal)
//!
//! This avoids the systematic upward drift of half-up rounding when many
//! amounts are rounded and summed.

use rust_decimal::{Decimal, RoundingStrategy};

use super::Money;
use crate::context::{self, MoneyContext};
use crate::locale::FormatOptions;

/// Rounds a decimal value using Banker's Rounding.
pub(crate) fn round_half_even(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}

impl Money {
    /// Rounds to `precision` decimal places, or to the currency's minor unit
    /// when `None`, using the global context.
    ///
    /// # Example
    ///
    /// ```
    /// use tender_core::Money;
    ///
    /// assert_eq!(Money::new(2.5, "JPY").unwrap().round(None).to_string(), "2 JPY");
    /// assert_eq!(Money::new(3.5, "JPY").unwrap().round(None).to_string(), "4 JPY");
    /// ```
    #[must_use]
    pub fn round(&self, precision: Option<u32>) -> Self {
        self.round_with(precision, context::global())
    }

    /// Rounds to `precision` decimal places, or to the currency's minor unit
    /// as reported by the context's localization.
    #[must_use]
    pub fn round_with(&self, precision: Option<u32>, ctx: &MoneyContext) -> Self {
        let decimal_places = self.resolve_precision(precision, ctx);
        Self::from_decimal(round_half_even(self.amount, decimal_places), self.currency)
    }

    /// Formats through the global context's localization.
    #[must_use]
    pub fn format(&self, options: &FormatOptions) -> String {
        self.format_with(options, context::global())
    }

    /// Rounds to `options.maximum_fraction_digits` (default: currency
    /// precision), then hands the result to the context's localization.
    #[must_use]
    pub fn format_with(&self, options: &FormatOptions, ctx: &MoneyContext) -> String {
        let rounded = self.round_with(options.maximum_fraction_digits, ctx);
        ctx.localization()
            .format(rounded.amount, rounded.currency, options)
    }

    pub(crate) fn resolve_precision(&self, precision: Option<u32>, ctx: &MoneyContext) -> u32 {
        precision.unwrap_or_else(|| ctx.localization().precision(self.currency))
    }
}
