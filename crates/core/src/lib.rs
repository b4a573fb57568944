//! Core money logic for Tender.
//!
//! An immutable [`Money`] value pairs an exact decimal amount with an
//! ISO-4217 currency code. Every operation returns a new value; nothing
//! here touches floats except to accept them as input.
//!
//! # Modules
//!
//! - `money` - The value type: construction, arithmetic, rounding, allocation, conversion
//! - `locale` - Currency precision, display formatting and input normalization
//! - `forex` - Exchange rate providers (static, cached)
//! - `context` - The collaborators an operation runs against, plus the process-wide default

pub mod context;
pub mod forex;
pub mod locale;
pub mod money;

pub use context::{MoneyContext, global, install};
pub use forex::RateProvider;
pub use locale::{FormatOptions, Localization, NumberNormalizer};
pub use money::{AmountInput, Money, MoneyInput, MoneyRecord, Numeric};
pub use tender_shared::{CurrencyCode, MoneyError, MoneyResult};
