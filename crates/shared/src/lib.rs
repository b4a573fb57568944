//! Shared types, errors, and configuration for Tender.
//!
//! This crate provides common types used across all other crates:
//! - Validated ISO 4217 currency codes
//! - Money error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{ForexConfig, LocaleConfig, RateConfig, TenderConfig};
pub use error::{MoneyError, MoneyResult};
pub use types::CurrencyCode;
