//! The locale override store and its provider chain.

use std::collections::HashMap;
use std::sync::RwLock;

use moneta_shared::types::canonical_code;
use once_cell::sync::Lazy;

use super::error::LocaleDataError;
use super::types::{LocaleId, OverrideEntry};

/// A pluggable source of override entries, consulted before the static
/// store.
///
/// Providers are tried in registration order; the first one returning
/// `Some` wins and short-circuits the rest. Any
/// `Fn(&str, &LocaleId) -> Option<OverrideEntry>` closure is a provider.
pub trait DataProvider: Send + Sync {
    /// Looks up override data for a currency code in a locale. `None`
    /// signals that this provider has no data for the pair.
    fn lookup(&self, currency: &str, locale: &LocaleId) -> Option<OverrideEntry>;
}

impl<F> DataProvider for F
where
    F: Fn(&str, &LocaleId) -> Option<OverrideEntry> + Send + Sync,
{
    fn lookup(&self, currency: &str, locale: &LocaleId) -> Option<OverrideEntry> {
        self(currency, locale)
    }
}

/// Store of per-locale currency display overrides.
///
/// Maps locale → currency code → [`OverrideEntry`], with an ordered list of
/// [`DataProvider`]s consulted before the static data. The fallback order
/// for a lookup is fixed: providers (registration order) → exact-locale
/// bucket → default-locale bucket → [`LocaleDataError::NotFound`].
///
/// The store is an explicit handle; a process-wide shared instance is
/// available through the free functions in this module.
pub struct LocaleData {
    default_locale: LocaleId,
    data: HashMap<LocaleId, HashMap<String, OverrideEntry>>,
    providers: Vec<Box<dyn DataProvider>>,
}

impl LocaleData {
    /// Creates an empty store with the given default locale.
    #[must_use]
    pub fn new(default_locale: LocaleId) -> Self {
        Self {
            default_locale,
            data: HashMap::new(),
            providers: Vec::new(),
        }
    }

    /// The locale lookups fall back to.
    #[must_use]
    pub fn default_locale(&self) -> &LocaleId {
        &self.default_locale
    }

    /// Merges override data for a currency into the store.
    ///
    /// The locale bucket and currency entry are created on demand. A
    /// `Some` field overwrites the stored value; a `None` field is a
    /// deliberate no-op, never a clear. `None` for `locale` targets the
    /// store's default locale. Always succeeds.
    pub fn set(
        &mut self,
        currency: impl AsRef<str>,
        name: Option<&str>,
        sign: Option<&str>,
        locale: Option<&LocaleId>,
    ) {
        let code = canonical_code(currency.as_ref());
        let locale = locale.unwrap_or(&self.default_locale).clone();

        let entry = self
            .data
            .entry(locale)
            .or_default()
            .entry(code)
            .or_default();
        if let Some(name) = name {
            entry.name = Some(name.to_owned());
        }
        if let Some(sign) = sign {
            entry.sign = Some(sign.to_owned());
        }
    }

    /// Resolves override data for a currency code.
    ///
    /// Providers are consulted first, in registration order; the first
    /// `Some` wins. On provider exhaustion the exact-locale bucket is
    /// tried, then the default-locale bucket. A resolved bucket that does
    /// not contain the code is also a [`LocaleDataError::NotFound`].
    pub fn get(
        &self,
        currency: impl AsRef<str>,
        locale: Option<&LocaleId>,
    ) -> Result<OverrideEntry, LocaleDataError> {
        let code = canonical_code(currency.as_ref());
        let locale = locale.unwrap_or(&self.default_locale);

        for provider in &self.providers {
            if let Some(entry) = provider.lookup(&code, locale) {
                return Ok(entry);
            }
        }

        self.bucket(locale)
            .and_then(|bucket| bucket.get(&code))
            .cloned()
            .ok_or_else(|| LocaleDataError::not_found(locale.as_str(), code))
    }

    /// Returns the whole override mapping for a locale (exact bucket,
    /// falling back to the default locale's bucket).
    ///
    /// Whole-locale lookups resolve from the static store only; the
    /// provider chain serves single-entry lookups.
    pub fn get_all(
        &self,
        locale: Option<&LocaleId>,
    ) -> Result<HashMap<String, OverrideEntry>, LocaleDataError> {
        let locale = locale.unwrap_or(&self.default_locale);
        self.bucket(locale)
            .cloned()
            .ok_or_else(|| LocaleDataError::not_found(locale.as_str(), "ALL"))
    }

    /// Appends a provider to the chain. Providers accumulate for the
    /// lifetime of the store; there is no removal.
    pub fn add_provider(&mut self, provider: impl DataProvider + 'static) {
        self.providers.push(Box::new(provider));
    }

    /// Number of registered providers.
    #[must_use]
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Clears all override data and providers. Intended for test
    /// isolation.
    pub fn reset(&mut self) {
        self.data.clear();
        self.providers.clear();
    }

    fn bucket(&self, locale: &LocaleId) -> Option<&HashMap<String, OverrideEntry>> {
        self.data
            .get(locale)
            .or_else(|| self.data.get(&self.default_locale))
    }
}

impl Default for LocaleData {
    fn default() -> Self {
        Self::new(LocaleId::system_default())
    }
}

impl std::fmt::Debug for LocaleData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleData")
            .field("default_locale", &self.default_locale)
            .field("locales", &self.data.len())
            .field("providers", &self.providers.len())
            .finish()
    }
}

/// Process-wide shared store used by the free-function API.
static SHARED_STORE: Lazy<RwLock<LocaleData>> = Lazy::new(|| RwLock::new(LocaleData::default()));

/// Merges override data into the shared store. See [`LocaleData::set`].
pub fn set_locale_data(
    currency: impl AsRef<str>,
    name: Option<&str>,
    sign: Option<&str>,
    locale: Option<&LocaleId>,
) {
    SHARED_STORE
        .write()
        .expect("locale data lock poisoned")
        .set(currency, name, sign, locale);
}

/// Resolves override data from the shared store. See [`LocaleData::get`].
pub fn get_locale_data(
    currency: impl AsRef<str>,
    locale: Option<&LocaleId>,
) -> Result<OverrideEntry, LocaleDataError> {
    SHARED_STORE
        .read()
        .expect("locale data lock poisoned")
        .get(currency, locale)
}

/// Returns a locale's whole override mapping from the shared store. See
/// [`LocaleData::get_all`].
pub fn get_all_locale_data(
    locale: Option<&LocaleId>,
) -> Result<HashMap<String, OverrideEntry>, LocaleDataError> {
    SHARED_STORE
        .read()
        .expect("locale data lock poisoned")
        .get_all(locale)
}

/// Appends a provider to the shared store's chain.
pub fn add_locale_data_provider(provider: impl DataProvider + 'static) {
    SHARED_STORE
        .write()
        .expect("locale data lock poisoned")
        .add_provider(provider);
}

/// Clears the shared store's data and providers. Intended for test
/// isolation.
pub fn reset_locale_data() {
    SHARED_STORE
        .write()
        .expect("locale data lock poisoned")
        .reset();
}

/// Runs a closure against the shared store under its read lock.
pub(crate) fn with_shared_store<R>(f: impl FnOnce(&LocaleData) -> R) -> R {
    f(&SHARED_STORE.read().expect("locale data lock poisoned"))
}
