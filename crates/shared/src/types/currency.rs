//! Currency metadata types.

use serde::{Deserialize, Serialize};

/// ISO 4217 numeric code for a currency, or an explicit marker that no
/// numeric code is assigned.
///
/// Numeric codes display zero-padded to three digits (`"008"` for ALL);
/// the absent case displays as `"none"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IsoCode {
    /// An assigned numeric code (e.g. 840 for USD).
    Numeric(u16),
    /// No numeric code in any of the static tables.
    #[default]
    None,
}

impl IsoCode {
    /// Returns true when no numeric code is assigned.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl std::fmt::Display for IsoCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n:03}"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Canonical metadata for one currency.
///
/// `sign` defaults to the alpha code; callers with a distinct symbol set it
/// via [`Currency::with_sign`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 alpha code (e.g. "USD", "IDR").
    pub code: String,
    /// ISO numeric code, if assigned.
    pub iso: IsoCode,
    /// Canonical display name.
    pub name: String,
    /// Canonical display sign (symbol).
    pub sign: String,
    /// Display names of the countries using this currency.
    pub countries: Vec<String>,
}

impl Currency {
    /// Creates a currency entry. The code is canonicalized to trimmed
    /// uppercase and doubles as the initial sign.
    #[must_use]
    pub fn new(
        code: impl AsRef<str>,
        iso: IsoCode,
        name: impl Into<String>,
        countries: Vec<String>,
    ) -> Self {
        let code = canonical_code(code.as_ref());
        Self {
            sign: code.clone(),
            code,
            iso,
            name: name.into(),
            countries,
        }
    }

    /// Sets the display sign (symbol).
    #[must_use]
    pub fn with_sign(mut self, sign: impl Into<String>) -> Self {
        self.sign = sign.into();
        self
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

/// Canonical string form of a currency code: trimmed, uppercase.
#[must_use]
pub fn canonical_code(code: &str) -> String {
    code.trim().to_uppercase()
}
