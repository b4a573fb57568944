//! Localization collaborators: currency precision, formatting, and
//! free-form number normalization.

pub mod iso;
pub mod normalize;

use rust_decimal::Decimal;
use tender_shared::{CurrencyCode, MoneyResult};

pub use iso::IsoLocalization;
pub use normalize::SeparatorNormalizer;

/// Options accepted by [`Localization::format`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Caps the number of fraction digits. Defaults to the currency precision.
    pub maximum_fraction_digits: Option<u32>,
}

impl FormatOptions {
    /// Options capping the output at `digits` fraction digits.
    #[must_use]
    pub const fn with_maximum_fraction_digits(digits: u32) -> Self {
        Self {
            maximum_fraction_digits: Some(digits),
        }
    }
}

/// Currency-aware number formatting.
pub trait Localization: Send + Sync {
    /// Standard minor-unit digits for the currency (2 for USD, 0 for JPY).
    fn precision(&self, currency: CurrencyCode) -> u32;

    /// Renders an amount that has already been rounded for display.
    fn format(&self, amount: Decimal, currency: CurrencyCode, options: &FormatOptions) -> String;
}

/// Turns free-form numeric text into a canonical decimal literal.
pub trait NumberNormalizer: Send + Sync {
    /// Normalizes `raw` (e.g. "1,234.50") into plain notation ("1234.50").
    fn normalize(&self, raw: &str) -> MoneyResult<String>;
}
