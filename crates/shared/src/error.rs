//! Money error types.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money construction, arithmetic, allocation and conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Currency code does not match the ISO-4217 pattern `^[A-Z]{3}$`.
    #[error("Invalid currency code: '{code}'")]
    InvalidCurrency {
        /// The offending code, as supplied.
        code: String,
    },

    /// Amount cannot be turned into an exact decimal.
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount {
        /// The offending input, as supplied.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Binary operation between two different currencies.
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency of the receiver.
        left: String,
        /// Currency of the argument.
        right: String,
    },

    /// Argument has the wrong shape (non-finite scalar, empty ratio list, ...).
    #[error("Type error: {0}")]
    InvalidArgument(String),

    /// Ratios cannot be allocated (negative ratio, zero total).
    #[error("Invalid allocation: {0}")]
    InvalidAllocation(String),

    /// The rate provider has no rate for the pair.
    #[error("No exchange rate found for {from} to {to}")]
    NoRate {
        /// Source currency code.
        from: String,
        /// Target currency code.
        to: String,
    },

    /// Decimal arithmetic left the representable range.
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// The rate provider itself failed.
    #[error("Rate provider error: {0}")]
    RateProvider(String),

    /// A global money context has already been installed.
    #[error("Money context already installed")]
    AlreadyInstalled,

    /// Configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MoneyError {
    /// Builds an `InvalidCurrency` error for the given code.
    #[must_use]
    pub fn invalid_currency(code: impl Into<String>) -> Self {
        Self::InvalidCurrency { code: code.into() }
    }

    /// Builds an `InvalidAmount` error.
    #[must_use]
    pub fn invalid_amount(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Builds a `CurrencyMismatch` error.
    #[must_use]
    pub fn mismatch(left: impl ToString, right: impl ToString) -> Self {
        Self::CurrencyMismatch {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Builds a `NoRate` error for a currency pair.
    #[must_use]
    pub fn no_rate(from: impl ToString, to: impl ToString) -> Self {
        Self::NoRate {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCurrency { .. } => "INVALID_CURRENCY",
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::InvalidArgument(_) => "TYPE_ERROR",
            Self::InvalidAllocation(_) => "INVALID_ALLOCATION",
            Self::NoRate { .. } => "NO_RATE",
            Self::Overflow(_) => "OVERFLOW",
            Self::RateProvider(_) => "RATE_PROVIDER_ERROR",
            Self::AlreadyInstalled => "ALREADY_INSTALLED",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl From<config::ConfigError> for MoneyError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
