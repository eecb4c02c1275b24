//! Locale registry error types.

use thiserror::Error;

/// Errors raised by the locale data registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocaleDataError {
    /// No override data exists for the requested locale/currency pair.
    #[error("Locale data not found for {currency} in {locale}")]
    NotFound {
        /// The locale the lookup was made against.
        locale: String,
        /// The requested currency code, or `ALL` for whole-locale lookups.
        currency: String,
    },
}

impl LocaleDataError {
    /// Builds a `NotFound` error for the given locale and currency code.
    pub fn not_found(locale: impl Into<String>, currency: impl Into<String>) -> Self {
        Self::NotFound {
            locale: locale.into(),
            currency: currency.into(),
        }
    }
}
