//! Rendering options passed through to the locale engine.

use serde::{Deserialize, Serialize};

/// Options honored by [`crate::engine::LocaleEngine::format_pattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Use the currency's default fraction-digit count instead of the
    /// pattern's.
    pub currency_digits: bool,
    /// Round the amount to the resolved maximum fraction digits. When
    /// false, digits beyond the pattern's maximum are kept as given.
    pub decimal_quantization: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            currency_digits: true,
            decimal_quantization: true,
        }
    }
}

impl RenderOptions {
    /// Sets whether the currency's default fraction digits are used.
    #[must_use]
    pub const fn with_currency_digits(mut self, currency_digits: bool) -> Self {
        self.currency_digits = currency_digits;
        self
    }

    /// Sets whether the amount is quantized to the maximum fraction
    /// digits.
    #[must_use]
    pub const fn with_decimal_quantization(mut self, decimal_quantization: bool) -> Self {
        self.decimal_quantization = decimal_quantization;
        self
    }
}
