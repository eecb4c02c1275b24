//! Currency catalog registry.
//!
//! The catalog is the process-wide table of known currencies, populated once
//! at startup (typically by the loader in `moneta-core`) and read by
//! application code. Registration is last-write-wins: re-adding a code
//! replaces the previous entry and hands it back to the caller.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;

use crate::types::currency::canonical_code;
use crate::types::{Currency, IsoCode};

/// Keyed registry of [`Currency`] entries.
///
/// Keys are canonical alpha codes (trimmed, uppercase). The catalog does not
/// detect or merge duplicate registrations; the latest entry for a code wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyCatalog {
    entries: HashMap<String, Currency>,
}

impl CurrencyCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a currency from its parts, returning the replaced entry if
    /// the code was already present.
    pub fn add_currency(
        &mut self,
        code: impl AsRef<str>,
        iso: IsoCode,
        name: impl Into<String>,
        countries: Vec<String>,
    ) -> Option<Currency> {
        self.insert(Currency::new(code, iso, name, countries))
    }

    /// Inserts a fully built currency, returning the replaced entry if the
    /// code was already present.
    pub fn insert(&mut self, currency: Currency) -> Option<Currency> {
        self.entries.insert(currency.code.clone(), currency)
    }

    /// Looks up a currency by alpha code.
    #[must_use]
    pub fn currency(&self, code: &str) -> Option<&Currency> {
        self.entries.get(&canonical_code(code))
    }

    /// Returns true when the code is registered.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(&canonical_code(code))
    }

    /// Registered alpha codes, sorted.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Number of registered currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no currency is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Process-wide default catalog.
static DEFAULT_CATALOG: Lazy<RwLock<CurrencyCatalog>> =
    Lazy::new(|| RwLock::new(CurrencyCatalog::new()));

/// Registers a currency in the process-wide default catalog.
///
/// Returns the replaced entry if the code was already registered.
pub fn add_currency(
    code: impl AsRef<str>,
    iso: IsoCode,
    name: impl Into<String>,
    countries: Vec<String>,
) -> Option<Currency> {
    DEFAULT_CATALOG
        .write()
        .expect("currency catalog lock poisoned")
        .add_currency(code, iso, name, countries)
}

/// Inserts a fully built currency into the process-wide default catalog.
pub fn insert_currency(currency: Currency) -> Option<Currency> {
    DEFAULT_CATALOG
        .write()
        .expect("currency catalog lock poisoned")
        .insert(currency)
}

/// Looks up a currency in the process-wide default catalog.
#[must_use]
pub fn currency(code: &str) -> Option<Currency> {
    DEFAULT_CATALOG
        .read()
        .expect("currency catalog lock poisoned")
        .currency(code)
        .cloned()
}

/// Clears the process-wide default catalog. Intended for test isolation.
pub fn reset_catalog() {
    DEFAULT_CATALOG
        .write()
        .expect("currency catalog lock poisoned")
        .clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_currency_and_lookup() {
        let mut catalog = CurrencyCatalog::new();
        assert!(catalog.is_empty());

        let replaced = catalog.add_currency("USD", IsoCode::Numeric(840), "US Dollar", vec![]);
        assert!(replaced.is_none());
        assert_eq!(catalog.len(), 1);

        let usd = catalog.currency("usd").unwrap();
        assert_eq!(usd.code, "USD");
        assert_eq!(usd.name, "US Dollar");
    }

    #[test]
    fn test_duplicate_registration_is_last_write_wins() {
        let mut catalog = CurrencyCatalog::new();
        catalog.add_currency("USD", IsoCode::Numeric(840), "US Dollar", vec![]);
        let replaced = catalog
            .add_currency("USD", IsoCode::Numeric(840), "United States Dollar", vec![])
            .unwrap();

        assert_eq!(replaced.name, "US Dollar");
        assert_eq!(catalog.currency("USD").unwrap().name, "United States Dollar");
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_insert_keeps_sign() {
        let mut catalog = CurrencyCatalog::new();
        let eur = Currency::new("EUR", IsoCode::Numeric(978), "Euro", vec![]).with_sign("\u{20ac}");
        catalog.insert(eur);
        assert_eq!(catalog.currency("EUR").unwrap().sign, "\u{20ac}");
    }

    #[test]
    fn test_codes_sorted() {
        let mut catalog = CurrencyCatalog::new();
        catalog.add_currency("JPY", IsoCode::Numeric(392), "Japanese Yen", vec![]);
        catalog.add_currency("EUR", IsoCode::Numeric(978), "Euro", vec![]);
        catalog.add_currency("USD", IsoCode::Numeric(840), "US Dollar", vec![]);
        assert_eq!(catalog.codes(), vec!["EUR", "JPY", "USD"]);
    }
}
