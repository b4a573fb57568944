//! ISO 4217 currency codes.
//!
//! Any three uppercase ASCII letters are accepted. Whether a code is
//! actually assigned by ISO is not checked here; minor-unit precision for
//! known codes lives with the localization collaborator.

use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult};

/// A validated ISO 4217 currency code (e.g. "USD", "JPY").
///
/// Always matches `^[A-Z]{3}$`. The code is stored inline, so the type is
/// `Copy` and cheap to pass around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// US Dollar.
    pub const USD: Self = Self(*b"USD");
    /// Euro.
    pub const EUR: Self = Self(*b"EUR");
    /// Japanese Yen.
    pub const JPY: Self = Self(*b"JPY");

    /// Parses and validates a currency code.
    ///
    /// No case folding is applied: "usd" is rejected.
    pub fn parse(code: &str) -> MoneyResult<Self> {
        match code.as_bytes() {
            [a, b, c] if [a, b, c].iter().all(|ch| ch.is_ascii_uppercase()) => {
                Ok(Self([*a, *b, *c]))
            }
            _ => Err(MoneyError::invalid_currency(code)),
        }
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase bytes are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.as_str().to_string()
    }
}

impl PartialEq<str> for CurrencyCode {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for CurrencyCode {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("USD")]
    #[case("EUR")]
    #[case("JPY")]
    #[case("XAU")]
    #[case("ZZZ")]
    fn test_parse_valid(#[case] code: &str) {
        let parsed = CurrencyCode::parse(code).unwrap();
        assert_eq!(parsed.as_str(), code);
        assert_eq!(parsed.to_string(), code);
    }

    #[rstest]
    #[case("")]
    #[case("usd")]
    #[case("Usd")]
    #[case("US")]
    #[case("USDT")]
    #[case("US1")]
    #[case(" USD")]
    #[case("ÜSD")]
    fn test_parse_invalid(#[case] code: &str) {
        let err = CurrencyCode::parse(code).unwrap_err();
        assert_eq!(err, MoneyError::invalid_currency(code));
    }

    #[test]
    fn test_constants() {
        assert_eq!(CurrencyCode::USD, "USD");
        assert_eq!(CurrencyCode::EUR.as_str(), "EUR");
        assert_eq!(CurrencyCode::JPY.to_string(), "JPY");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&CurrencyCode::USD).unwrap();
        assert_eq!(json, "\"USD\"");

        let parsed: CurrencyCode = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(parsed, CurrencyCode::EUR);

        assert!(serde_json::from_str::<CurrencyCode>("\"eur\"").is_err());
    }
}
