//! The shipped engine implementation over embedded locale data.

use std::collections::HashMap;

use moneta_shared::types::canonical_code;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::locale::LocaleId;

use super::data::{
    LocaleTable, CURRENCY_SYMBOLS, CURRENCY_TERRITORIES, LOCALES, THREE_DIGIT_CURRENCIES,
    ZERO_DIGIT_CURRENCIES,
};
use super::pattern::{
    substitute_currency_tokens, DecimalPattern, NumberSymbols, CURRENCY_PLACEHOLDER,
};
use super::types::RenderOptions;
use super::LocaleEngine;

static LOCALE_MAP: Lazy<HashMap<&'static str, &'static LocaleTable>> =
    Lazy::new(|| LOCALES.iter().map(|table| (table.id, table)).collect());

static TERRITORY_MAP: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| CURRENCY_TERRITORIES.iter().copied().collect());

static SYMBOL_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CURRENCY_SYMBOLS.iter().copied().collect());

/// Locale engine backed by the embedded CLDR-derived data subset.
///
/// Locale resolution walks a fixed chain: the exact identifier, its
/// language, then `en`. The engine is stateless and cheap to copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinEngine;

impl BuiltinEngine {
    /// Creates the engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn locale_chain(locale: &LocaleId) -> Vec<&'static LocaleTable> {
        let mut tables: Vec<&'static LocaleTable> = Vec::with_capacity(3);
        for key in [locale.as_str(), locale.language(), "en"] {
            if let Some(table) = LOCALE_MAP.get(key) {
                if !tables.iter().any(|t| t.id == table.id) {
                    tables.push(table);
                }
            }
        }
        tables
    }

    fn number_symbols(locale: &LocaleId) -> NumberSymbols {
        let table = Self::locale_chain(locale)
            .into_iter()
            .next()
            .unwrap_or(&LOCALES[0]);
        NumberSymbols {
            decimal: table.decimal.to_owned(),
            group: table.group.to_owned(),
            minus: table.minus.to_owned(),
        }
    }
}

impl LocaleEngine for BuiltinEngine {
    fn known_currencies(&self) -> Vec<String> {
        CURRENCY_TERRITORIES
            .iter()
            .map(|(code, _)| (*code).to_owned())
            .collect()
    }

    fn is_known_currency(&self, code: &str) -> bool {
        TERRITORY_MAP.contains_key(canonical_code(code).as_str())
    }

    fn currency_territories(&self, code: &str) -> Vec<String> {
        TERRITORY_MAP
            .get(canonical_code(code).as_str())
            .map(|territories| territories.iter().map(|t| (*t).to_owned()).collect())
            .unwrap_or_default()
    }

    fn currency_name(&self, code: &str, locale: &LocaleId) -> Option<String> {
        let code = canonical_code(code);
        Self::locale_chain(locale)
            .into_iter()
            .find_map(|table| {
                table
                    .currency_names
                    .iter()
                    .find(|(c, _)| *c == code)
                    .map(|(_, name)| (*name).to_owned())
            })
    }

    fn currency_symbol(&self, code: &str) -> Option<String> {
        SYMBOL_MAP
            .get(canonical_code(code).as_str())
            .map(|symbol| (*symbol).to_owned())
    }

    fn territory_name(&self, territory: &str, locale: &LocaleId) -> Option<String> {
        let territory = territory.trim().to_uppercase();
        Self::locale_chain(locale)
            .into_iter()
            .find_map(|table| {
                table
                    .territory_names
                    .iter()
                    .find(|(t, _)| *t == territory)
                    .map(|(_, name)| (*name).to_owned())
            })
    }

    fn currency_pattern(&self, locale: &LocaleId) -> Option<String> {
        Self::locale_chain(locale)
            .into_iter()
            .next()
            .map(|table| table.currency_pattern.to_owned())
    }

    fn currency_digits(&self, code: &str) -> u32 {
        let code = canonical_code(code);
        if ZERO_DIGIT_CURRENCIES.contains(&code.as_str()) {
            0
        } else if THREE_DIGIT_CURRENCIES.contains(&code.as_str()) {
            3
        } else {
            2
        }
    }

    fn format_pattern(
        &self,
        amount: Decimal,
        code: &str,
        locale: &LocaleId,
        pattern: &str,
        options: &RenderOptions,
    ) -> String {
        let code = canonical_code(code);
        let mut parsed = DecimalPattern::parse(pattern);
        let symbols = Self::number_symbols(locale);

        let (min_frac, max_frac) = if options.currency_digits {
            let digits = self.currency_digits(&code) as usize;
            (digits, digits)
        } else {
            (parsed.min_fraction_digits, parsed.max_fraction_digits)
        };

        // Any placeholder runs left in the affixes resolve to the engine's
        // own metadata, longest run first.
        let name = self
            .currency_name(&code, locale)
            .unwrap_or_else(|| code.clone());
        let sign = self.currency_symbol(&code).unwrap_or_else(|| code.clone());
        for affix in [
            &mut parsed.positive_prefix,
            &mut parsed.positive_suffix,
            &mut parsed.negative_prefix,
            &mut parsed.negative_suffix,
        ] {
            if affix.contains(CURRENCY_PLACEHOLDER) {
                *affix = substitute_currency_tokens(affix, &name, &code, &sign);
            }
        }

        parsed.render(
            amount,
            &symbols,
            min_frac,
            max_frac,
            options.decimal_quantization,
        )
    }
}

/// Process-wide engine used by the free-function API.
static SHARED_ENGINE: BuiltinEngine = BuiltinEngine;

/// Returns the shared built-in engine.
#[must_use]
pub fn default_engine() -> &'static BuiltinEngine {
    &SHARED_ENGINE
}
