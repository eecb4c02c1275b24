//! The locale-data engine seam.
//!
//! The registry, formatter, and loader only ever talk to the
//! [`LocaleEngine`] trait; [`BuiltinEngine`] is the shipped implementation
//! over an embedded CLDR-derived data subset, so the crate is usable and
//! testable out of the box. Applications with richer locale data implement
//! the trait themselves.

pub mod pattern;
pub mod types;

mod builtin;
mod data;

pub use builtin::{default_engine, BuiltinEngine};
pub use pattern::{
    substitute_currency_tokens, DecimalPattern, NumberSymbols, CURRENCY_PLACEHOLDER,
};
pub use types::RenderOptions;

use rust_decimal::Decimal;

use crate::locale::LocaleId;

/// Canonical currency metadata, locale pattern templates, and numeral
/// rendering.
///
/// All lookups are infallible in shape: absent data is `None` (or empty),
/// never an error. Implementations are expected to be cheap to call; the
/// formatter queries several methods per render.
pub trait LocaleEngine: Send + Sync {
    /// Alpha codes of every currency the engine knows, sorted.
    fn known_currencies(&self) -> Vec<String>;

    /// Returns true when the code is in the engine's canonical currency
    /// set.
    fn is_known_currency(&self, code: &str) -> bool;

    /// Territory codes associated with a currency, in canonical order.
    /// Empty for unknown codes and territory-less currencies.
    fn currency_territories(&self, code: &str) -> Vec<String>;

    /// Localized display name for a currency, if the engine has one.
    fn currency_name(&self, code: &str, locale: &LocaleId) -> Option<String>;

    /// Display symbol for a currency, if the engine has one.
    fn currency_symbol(&self, code: &str) -> Option<String>;

    /// Localized display name for a territory code, if the engine has one.
    fn territory_name(&self, territory: &str, locale: &LocaleId) -> Option<String>;

    /// The locale's standard currency pattern.
    fn currency_pattern(&self, locale: &LocaleId) -> Option<String>;

    /// Default fraction-digit count for a currency.
    fn currency_digits(&self, code: &str) -> u32;

    /// Renders an amount against a pattern, substituting any remaining
    /// currency placeholder runs with the engine's own metadata. Returns
    /// the rendered string; never fails.
    fn format_pattern(
        &self,
        amount: Decimal,
        code: &str,
        locale: &LocaleId,
        pattern: &str,
        options: &RenderOptions,
    ) -> String;
}
