//! Default localization backed by the ISO 4217 minor-unit table.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};
use tender_shared::{CurrencyCode, LocaleConfig, MoneyError, MoneyResult};
use tracing::debug;

use super::{FormatOptions, Localization};

/// Minor-unit digits used for codes missing from the table.
const DEFAULT_PRECISION: u32 = 2;

/// Currencies with no minor unit.
const ZERO_DIGIT_CODES: &[&str] = &[
    "BIF", "CLP", "DJF", "GNF", "ISK", "JPY", "KMF", "KRW", "PYG", "RWF", "UGX", "UYI", "VND",
    "VUV", "XAF", "XOF", "XPF",
];

/// Currencies with three minor-unit digits.
const THREE_DIGIT_CODES: &[&str] = &["BHD", "IQD", "JOD", "KWD", "LYD", "OMR", "TND"];

/// Currencies with four minor-unit digits.
const FOUR_DIGIT_CODES: &[&str] = &["CLF", "UYW"];

/// Formats amounts as `"USD 1,234.50"`.
#[derive(Debug, Clone)]
pub struct IsoLocalization {
    decimal_separator: char,
    group_separator: char,
    overrides: HashMap<CurrencyCode, u32>,
}

impl Default for IsoLocalization {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: ',',
            overrides: HashMap::new(),
        }
    }
}

impl IsoLocalization {
    /// Creates a localization with `.` decimals and `,` grouping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a localization from the `[locale]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if an override key is not a valid currency code or
    /// both separators are the same character.
    pub fn from_config(config: &LocaleConfig) -> MoneyResult<Self> {
        if config.decimal_separator == config.group_separator {
            return Err(MoneyError::Config(format!(
                "decimal and group separators must differ, both are '{}'",
                config.decimal_separator
            )));
        }

        let mut localization = Self {
            decimal_separator: config.decimal_separator,
            group_separator: config.group_separator,
            overrides: HashMap::new(),
        };
        for (code, digits) in &config.precision_overrides {
            // Config keys may come back lowercased.
            let currency = CurrencyCode::parse(&code.to_ascii_uppercase())?;
            localization = localization.with_precision(currency, *digits);
        }
        Ok(localization)
    }

    /// Overrides the minor-unit digits of one currency.
    #[must_use]
    pub fn with_precision(mut self, currency: CurrencyCode, digits: u32) -> Self {
        debug!(currency = %currency, digits, "Overriding currency precision");
        self.overrides.insert(currency, digits);
        self
    }
}

impl Localization for IsoLocalization {
    fn precision(&self, currency: CurrencyCode) -> u32 {
        if let Some(digits) = self.overrides.get(&currency) {
            return *digits;
        }
        let code = currency.as_str();
        if ZERO_DIGIT_CODES.contains(&code) {
            0
        } else if THREE_DIGIT_CODES.contains(&code) {
            3
        } else if FOUR_DIGIT_CODES.contains(&code) {
            4
        } else {
            DEFAULT_PRECISION
        }
    }

    fn format(&self, amount: Decimal, currency: CurrencyCode, options: &FormatOptions) -> String {
        let digits = options
            .maximum_fraction_digits
            .unwrap_or_else(|| self.precision(currency));

        let mut value = amount.round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven);
        value.rescale(digits);

        let sign = if value.is_sign_negative() && !value.is_zero() {
            "-"
        } else {
            ""
        };
        let plain = value.abs().to_string();
        let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

        let mut out = format!("{currency} {sign}{}", group_digits(integer, self.group_separator));
        if !fraction.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

/// Inserts `separator` between every group of three integer digits.
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
