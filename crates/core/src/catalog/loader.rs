//! Builds the currency catalog from the engine's locale data.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use moneta_shared::types::canonical_code;
use moneta_shared::{Currency, CurrencyCatalog, IsoCode};

use crate::engine::{default_engine, LocaleEngine};
use crate::locale::{LocaleId, ROOT_LOCALE};

use super::iso::{get_iso_code, is_obsolete_currency, is_x_currency};

/// Options for [`load_currencies_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Exact codes to load. `None` loads every currency the engine knows.
    /// Giving an explicit list forces `include_x_currencies` and
    /// `include_obsolete_currencies` to true: the caller enumerated
    /// exactly what to load, nothing from it is filtered away.
    pub currency_list: Option<Vec<String>>,
    /// Load special-purpose ("X") currencies. Ignored (treated as true)
    /// when `currency_list` is given.
    pub include_x_currencies: bool,
    /// Load withdrawn currencies. Ignored (treated as true) when
    /// `currency_list` is given.
    pub include_obsolete_currencies: bool,
    /// Resolve ISO numeric codes; when false every entry gets
    /// [`IsoCode::None`].
    pub include_iso_codes: bool,
    /// Locale to resolve names in; `None` uses the system default.
    pub locale: Option<LocaleId>,
    /// Locale tried when the primary locale has no name.
    pub fallback_locale: LocaleId,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            currency_list: None,
            include_x_currencies: true,
            include_obsolete_currencies: false,
            include_iso_codes: true,
            locale: None,
            fallback_locale: LocaleId::new(ROOT_LOCALE),
        }
    }
}

impl LoadOptions {
    /// Creates options with defaults (everything except withdrawn
    /// currencies, ISO codes resolved, system default locale).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an exact list of codes to load.
    #[must_use]
    pub fn with_currency_list<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.currency_list = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets whether special-purpose ("X") currencies are loaded.
    #[must_use]
    pub const fn with_x_currencies(mut self, include: bool) -> Self {
        self.include_x_currencies = include;
        self
    }

    /// Sets whether withdrawn currencies are loaded.
    #[must_use]
    pub const fn with_obsolete_currencies(mut self, include: bool) -> Self {
        self.include_obsolete_currencies = include;
        self
    }

    /// Sets whether ISO numeric codes are resolved.
    #[must_use]
    pub const fn with_iso_codes(mut self, include: bool) -> Self {
        self.include_iso_codes = include;
        self
    }

    /// Sets the locale names are resolved in.
    #[must_use]
    pub fn with_locale(mut self, locale: LocaleId) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Sets the fallback name-resolution locale.
    #[must_use]
    pub fn with_fallback_locale(mut self, locale: LocaleId) -> Self {
        self.fallback_locale = locale;
        self
    }
}

/// Populates a catalog from the engine's currency table.
///
/// Each code resolves its display name (locale, then fallback locale,
/// then empty), its ISO numeric code, and the uppercased display names
/// of its countries; codes unresolved in both locales are dropped from
/// the country list. Withdrawn currencies are skipped unless requested:
/// both codes in the fixed obsolete set and codes whose resolved name
/// carries a four-digit year. Missing data never fails the load.
///
/// Registration is plain insertion; re-running over an overlapping list
/// follows the catalog's last-write-wins policy.
pub fn load_currencies_with(
    engine: &dyn LocaleEngine,
    catalog: &mut CurrencyCatalog,
    options: &LoadOptions,
) {
    for currency in resolve_currencies(engine, options) {
        catalog.insert(currency);
    }
}

/// Populates the process-wide default catalog from the built-in engine.
/// See [`load_currencies_with`].
pub fn load_currencies(options: &LoadOptions) {
    for currency in resolve_currencies(default_engine(), options) {
        moneta_shared::insert_currency(currency);
    }
}

fn resolve_currencies(engine: &dyn LocaleEngine, options: &LoadOptions) -> Vec<Currency> {
    let locale = options
        .locale
        .clone()
        .unwrap_or_else(LocaleId::system_default);
    let fallback = &options.fallback_locale;

    let (codes, include_x, include_obsolete) = match &options.currency_list {
        Some(list) => {
            let codes = list.iter().map(|c| canonical_code(c)).collect();
            (codes, true, true)
        }
        None => (
            engine.known_currencies(),
            options.include_x_currencies,
            options.include_obsolete_currencies,
        ),
    };

    let mut currencies = Vec::with_capacity(codes.len());
    let mut skipped = 0usize;
    for code in &codes {
        let name = engine
            .currency_name(code, &locale)
            .or_else(|| engine.currency_name(code, fallback))
            .unwrap_or_default();

        if !include_obsolete && (is_obsolete_currency(code) || name_contains_year(&name)) {
            debug!(code = code.as_str(), "skipping withdrawn currency");
            skipped += 1;
            continue;
        }
        if !include_x && is_x_currency(code) {
            debug!(code = code.as_str(), "skipping special-purpose currency");
            skipped += 1;
            continue;
        }

        let iso = if options.include_iso_codes {
            get_iso_code(code)
        } else {
            IsoCode::None
        };
        let countries = resolve_country_names(engine, code, &locale, fallback);
        currencies.push(Currency::new(code, iso, name, countries));
    }

    info!(
        loaded = currencies.len(),
        skipped,
        locale = %locale,
        "resolved currency catalog entries"
    );
    currencies
}

/// Uppercased display names of a currency's countries. Codes unresolved
/// in both locales are dropped, never replaced with a placeholder.
fn resolve_country_names(
    engine: &dyn LocaleEngine,
    code: &str,
    locale: &LocaleId,
    fallback: &LocaleId,
) -> Vec<String> {
    engine
        .currency_territories(code)
        .iter()
        .filter_map(|territory| {
            engine
                .territory_name(territory, locale)
                .or_else(|| engine.territory_name(territory, fallback))
        })
        .map(|name| name.to_uppercase())
        .collect()
}

/// Heuristic for withdrawn currencies absent from the fixed obsolete
/// set: legacy names carry a year qualifier, e.g. "Dollar (1980–2008)".
/// Matches any four-digit run in 1000–3999.
fn name_contains_year(name: &str) -> bool {
    name.as_bytes()
        .windows(4)
        .any(|w| matches!(w[0], b'1'..=b'3') && w[1..].iter().all(u8::is_ascii_digit))
}
