//! Locale identifiers and override entries.

use serde::{Deserialize, Deserializer, Serialize};

/// The locale every lookup falls back to when nothing else matches.
pub const ROOT_LOCALE: &str = "en_US";

/// Canonical locale identifier.
///
/// Construction normalizes any `lang-REGION` / `lang_region` spelling into
/// the canonical `lang[_Script][_REGION]` form: language lowercased, script
/// title-cased, region uppercased. Encoding suffixes (`.UTF-8`) and
/// modifiers (`@latin`) are stripped. Registry keys are always this
/// canonical form, whatever the caller passed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LocaleId(String);

impl LocaleId {
    /// Parses and canonicalizes a locale identifier.
    ///
    /// Parsing is tolerant: separators may be `-`, `_`, or spaces, casing is
    /// normalized per segment, and unrecognized segments (variants) are
    /// dropped. An input with no language segment resolves to [`ROOT_LOCALE`].
    #[must_use]
    pub fn new(input: impl AsRef<str>) -> Self {
        let raw = input.as_ref();
        let raw = raw.split(['.', '@']).next().unwrap_or("");

        let mut segments = raw.split(['-', '_', ' ']).filter(|s| !s.is_empty());
        let Some(language) = segments.next() else {
            return Self(ROOT_LOCALE.to_owned());
        };

        let mut canonical = language.to_ascii_lowercase();
        for segment in segments {
            if segment.len() == 4 && segment.chars().all(|c| c.is_ascii_alphabetic()) {
                // Script subtag: title-case.
                canonical.push('_');
                for (i, c) in segment.chars().enumerate() {
                    if i == 0 {
                        canonical.push(c.to_ascii_uppercase());
                    } else {
                        canonical.push(c.to_ascii_lowercase());
                    }
                }
            } else if (segment.len() == 2 && segment.chars().all(|c| c.is_ascii_alphabetic()))
                || (segment.len() == 3 && segment.chars().all(|c| c.is_ascii_digit()))
            {
                canonical.push('_');
                canonical.push_str(&segment.to_ascii_uppercase());
            }
        }
        Self(canonical)
    }

    /// Resolves the system default locale from `LC_ALL`, `LC_NUMERIC`, and
    /// `LANG` (first non-empty wins, `C`/`POSIX` skipped), falling back to
    /// [`ROOT_LOCALE`].
    #[must_use]
    pub fn system_default() -> Self {
        for var in ["LC_ALL", "LC_NUMERIC", "LANG"] {
            if let Ok(value) = std::env::var(var) {
                let value = value.trim();
                if value.is_empty()
                    || value.eq_ignore_ascii_case("c")
                    || value.eq_ignore_ascii_case("posix")
                {
                    continue;
                }
                return Self::new(value);
            }
        }
        Self(ROOT_LOCALE.to_owned())
    }

    /// The canonical identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The language subtag (everything before the first `_`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('_').next().unwrap_or(&self.0)
    }
}

impl std::fmt::Display for LocaleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LocaleId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for LocaleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for LocaleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Canonicalize on the way in so deserialized ids obey the key
        // invariant too.
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

/// Locale-specific display overrides for one currency.
///
/// An absent field means "use the engine's canonical value for that field".
/// Entries round-trip exactly: unset fields stay absent, they are never
/// defaulted on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideEntry {
    /// Localized display name, if overridden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Localized sign (symbol), if overridden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign: Option<String>,
}

impl OverrideEntry {
    /// Creates an entry with both fields unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name override.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the sign override.
    #[must_use]
    pub fn with_sign(mut self, sign: impl Into<String>) -> Self {
        self.sign = Some(sign.into());
        self
    }

    /// Folds a later write into this entry: set fields overwrite, unset
    /// fields leave the existing value alone.
    pub fn merge(&mut self, later: &Self) {
        if let Some(name) = &later.name {
            self.name = Some(name.clone());
        }
        if let Some(sign) = &later.sign {
            self.sign = Some(sign.clone());
        }
    }

    /// Returns true when neither field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.sign.is_none()
    }

    /// The name override, if set to a non-empty string.
    #[must_use]
    pub fn non_empty_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// The sign override, if set to a non-empty string.
    #[must_use]
    pub fn non_empty_sign(&self) -> Option<&str> {
        self.sign.as_deref().filter(|s| !s.is_empty())
    }
}
