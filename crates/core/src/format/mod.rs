//! The currency-string formatting pipeline.
//!
//! [`format_currency_with`] resolves override data, decides whether a
//! custom pattern is needed, and delegates numeral rendering to the
//! engine. [`format_money_with`] derives a pattern first (symbol
//! stripping, fractional-digit rewrite) and then runs the same pipeline
//! with forced quantization. The `format_currency`/`format_money` free
//! functions run against the shared store and built-in engine.

use serde::{Deserialize, Serialize};
use tracing::trace;

use moneta_shared::Money;

use crate::engine::pattern::{substitute_currency_tokens, CURRENCY_PLACEHOLDER};
use crate::engine::{default_engine, LocaleEngine, RenderOptions};
use crate::locale::store::with_shared_store;
use crate::locale::{LocaleData, LocaleId};

#[cfg(test)]
mod tests;

/// Pattern used when the engine has no standard pattern for a locale.
const FALLBACK_CURRENCY_PATTERN: &str = "\u{a4}#,##0.00";

/// Options for [`format_currency_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Explicit pattern taking precedence over the locale's standard
    /// currency pattern.
    pub pattern: Option<String>,
    /// Pass-through rendering options.
    pub render: RenderOptions,
}

impl FormatOptions {
    /// Creates options with engine defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Sets the pass-through rendering options.
    #[must_use]
    pub const fn with_render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }
}

/// Rounding method selector accepted by [`format_money_with`].
///
/// Accepted for API compatibility; selecting one currently has no effect
/// on the output. Rendering always applies half-even rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMethod {
    /// Round halfway cases to the nearest even digit.
    HalfEven,
    /// Round halfway cases away from zero.
    HalfUp,
    /// Round halfway cases toward zero.
    HalfDown,
}

/// Options for [`format_money_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyFormatOptions {
    /// Render the currency sign/code/name token. Stripping it also trims
    /// the whitespace that surrounded the placeholder.
    pub include_symbol: bool,
    /// Locale to render in; `None` uses the store's default locale.
    pub locale: Option<LocaleId>,
    /// Exact fraction-digit count, overriding the currency's default.
    pub decimal_places: Option<u32>,
    /// Known gap: accepted but not applied; rendering always rounds
    /// half-even.
    pub rounding_method: Option<RoundingMethod>,
}

impl Default for MoneyFormatOptions {
    fn default() -> Self {
        Self {
            include_symbol: true,
            locale: None,
            decimal_places: None,
            rounding_method: None,
        }
    }
}

impl MoneyFormatOptions {
    /// Creates options with defaults (symbol shown, store default locale,
    /// currency-default digits).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the currency token is rendered.
    #[must_use]
    pub const fn with_symbol(mut self, include_symbol: bool) -> Self {
        self.include_symbol = include_symbol;
        self
    }

    /// Sets the render locale.
    #[must_use]
    pub fn with_locale(mut self, locale: LocaleId) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Sets an exact fraction-digit count.
    #[must_use]
    pub const fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = Some(decimal_places);
        self
    }

    /// Sets the rounding method (currently a documented no-op).
    #[must_use]
    pub const fn with_rounding_method(mut self, rounding_method: RoundingMethod) -> Self {
        self.rounding_method = Some(rounding_method);
        self
    }
}

/// Renders a monetary amount as a locale-correct currency string.
///
/// Override data is resolved from the store; a missing entry means
/// "use canonical defaults" and is never surfaced. A custom pattern is
/// built only when the code is unknown to the engine or the overrides
/// supply a non-empty sign or name; otherwise the caller's pattern (if
/// any) is passed through unmodified.
pub fn format_currency_with(
    engine: &dyn LocaleEngine,
    store: &LocaleData,
    money: &Money,
    locale: Option<&LocaleId>,
    options: &FormatOptions,
) -> String {
    let locale = locale.unwrap_or_else(|| store.default_locale());
    let overrides = store.get(money.code(), Some(locale)).unwrap_or_default();

    let needs_custom = !engine.is_known_currency(money.code())
        || overrides.non_empty_sign().is_some()
        || overrides.non_empty_name().is_some();

    let pattern = if needs_custom {
        let base = options
            .pattern
            .clone()
            .or_else(|| engine.currency_pattern(locale))
            .unwrap_or_else(|| FALLBACK_CURRENCY_PATTERN.to_owned());

        let name = overrides
            .non_empty_name()
            .unwrap_or(&money.currency.name)
            .to_owned();
        let sign = overrides
            .non_empty_sign()
            .unwrap_or(&money.currency.sign)
            .to_owned();

        let pattern = if base.contains(CURRENCY_PLACEHOLDER) {
            substitute_currency_tokens(&base, &name, money.code(), &sign)
        } else {
            base
        };
        trace!(
            code = money.code(),
            locale = %locale,
            pattern = %pattern,
            "built custom currency pattern"
        );
        pattern
    } else {
        options
            .pattern
            .clone()
            .or_else(|| engine.currency_pattern(locale))
            .unwrap_or_else(|| FALLBACK_CURRENCY_PATTERN.to_owned())
    };

    engine.format_pattern(money.amount, money.code(), locale, &pattern, &options.render)
}

/// Renders a monetary amount with symbol and precision control.
///
/// Derives the render pattern from the locale's standard currency
/// pattern: without `include_symbol` the currency placeholder is
/// stripped and surrounding whitespace trimmed; with `decimal_places`
/// the pattern's fractional-digits run is rewritten to exactly that many
/// zeros. Rendering forces the exact digit count (currency-default
/// digits off, decimal quantization on).
pub fn format_money_with(
    engine: &dyn LocaleEngine,
    store: &LocaleData,
    money: &Money,
    options: &MoneyFormatOptions,
) -> String {
    let locale = options
        .locale
        .clone()
        .unwrap_or_else(|| store.default_locale().clone());

    let mut pattern = engine
        .currency_pattern(&locale)
        .unwrap_or_else(|| FALLBACK_CURRENCY_PATTERN.to_owned());

    if !options.include_symbol {
        pattern = pattern
            .replace(CURRENCY_PLACEHOLDER, "")
            .trim()
            .to_owned();
    }

    if let Some(places) = options.decimal_places {
        pattern = rewrite_fraction_digits(&pattern, places as usize);
    }

    let format_options = FormatOptions {
        pattern: Some(pattern),
        render: RenderOptions {
            currency_digits: false,
            decimal_quantization: true,
        },
    };
    format_currency_with(engine, store, money, Some(&locale), &format_options)
}

/// Renders against the shared store and built-in engine. See
/// [`format_currency_with`].
pub fn format_currency(money: &Money, locale: Option<&LocaleId>, options: &FormatOptions) -> String {
    with_shared_store(|store| format_currency_with(default_engine(), store, money, locale, options))
}

/// Renders against the shared store and built-in engine. See
/// [`format_money_with`].
pub fn format_money(money: &Money, options: &MoneyFormatOptions) -> String {
    with_shared_store(|store| format_money_with(default_engine(), store, money, options))
}

/// Rewrites the pattern's first fractional-digits run (a literal `.`
/// followed by zero or more `0`s) to exactly `places` zeros. Patterns
/// without a `.` are returned unchanged.
fn rewrite_fraction_digits(pattern: &str, places: usize) -> String {
    let Some(dot) = pattern.find('.') else {
        return pattern.to_owned();
    };
    let after = &pattern[dot + 1..];
    let zero_run = after.len() - after.trim_start_matches('0').len();

    let mut out = String::with_capacity(pattern.len() + places);
    out.push_str(&pattern[..=dot]);
    out.push_str(&"0".repeat(places));
    out.push_str(&after[zero_run..]);
    out
}
