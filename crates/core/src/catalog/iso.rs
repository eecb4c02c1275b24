//! Static ISO 4217 numeric-code tables.
//!
//! Three fixed tiers: currencies in common circulation, special-purpose
//! ("X") currencies, and withdrawn currencies. [`get_iso_code`] resolves
//! through them in that order; a code absent from all three has no
//! numeric code.

use std::collections::HashMap;

use moneta_shared::types::canonical_code;
use moneta_shared::IsoCode;
use once_cell::sync::Lazy;

/// Numeric codes for currencies in common circulation.
pub static COMMON_ISO_CODES: &[(&str, u16)] = &[
    ("AUD", 36),
    ("BHD", 48),
    ("BRL", 986),
    ("CAD", 124),
    ("CHF", 756),
    ("CNY", 156),
    ("DKK", 208),
    ("EUR", 978),
    ("GBP", 826),
    ("IDR", 360),
    ("INR", 356),
    ("JPY", 392),
    ("KRW", 410),
    ("KWD", 414),
    ("MXN", 484),
    ("NOK", 578),
    ("NZD", 554),
    ("PLN", 985),
    ("RUB", 643),
    ("SEK", 752),
    ("SGD", 702),
    ("TND", 788),
    ("TRY", 949),
    ("USD", 840),
    ("ZAR", 710),
];

/// Numeric codes for special-purpose ("X") currencies: precious metals,
/// supranational units, and testing codes.
pub static X_ISO_CODES: &[(&str, u16)] = &[
    ("XAF", 950),
    ("XAG", 961),
    ("XAU", 959),
    ("XBA", 955),
    ("XBB", 956),
    ("XBC", 957),
    ("XBD", 958),
    ("XCD", 951),
    ("XDR", 960),
    ("XOF", 952),
    ("XPD", 964),
    ("XPF", 953),
    ("XPT", 962),
    ("XTS", 963),
    ("XXX", 999),
];

/// Numeric codes for withdrawn currencies.
pub static OBSOLETE_ISO_CODES: &[(&str, u16)] = &[
    ("ATS", 40),
    ("BEF", 56),
    ("DEM", 276),
    ("ESP", 724),
    ("FIM", 246),
    ("FRF", 250),
    ("GRD", 300),
    ("IEP", 372),
    ("ITL", 380),
    ("LUF", 442),
    ("MZM", 508),
    ("NLG", 528),
    ("PTE", 620),
    ("ZWD", 716),
    ("ZWR", 935),
];

/// Currency codes withdrawn from circulation.
pub static OBSOLETE_CURRENCIES: &[&str] = &[
    "ATS", "BEF", "DEM", "ESP", "FIM", "FRF", "GRD", "IEP", "ITL", "LUF", "MZM", "NLG", "PTE",
    "ZWD", "ZWR",
];

static COMMON_MAP: Lazy<HashMap<&'static str, u16>> =
    Lazy::new(|| COMMON_ISO_CODES.iter().copied().collect());

static X_MAP: Lazy<HashMap<&'static str, u16>> =
    Lazy::new(|| X_ISO_CODES.iter().copied().collect());

static OBSOLETE_MAP: Lazy<HashMap<&'static str, u16>> =
    Lazy::new(|| OBSOLETE_ISO_CODES.iter().copied().collect());

/// Resolves a currency's ISO numeric code through the three static
/// tiers: common → special-purpose → obsolete. Pure and deterministic;
/// codes absent from all three resolve to [`IsoCode::None`].
#[must_use]
pub fn get_iso_code(code: &str) -> IsoCode {
    let code = canonical_code(code);
    COMMON_MAP
        .get(code.as_str())
        .or_else(|| X_MAP.get(code.as_str()))
        .or_else(|| OBSOLETE_MAP.get(code.as_str()))
        .copied()
        .map_or(IsoCode::None, IsoCode::Numeric)
}

/// Returns true when the code is in the special-purpose ("X") table.
#[must_use]
pub fn is_x_currency(code: &str) -> bool {
    X_MAP.contains_key(canonical_code(code).as_str())
}

/// Returns true when the code is in the fixed obsolete set.
#[must_use]
pub fn is_obsolete_currency(code: &str) -> bool {
    OBSOLETE_CURRENCIES.contains(&canonical_code(code).as_str())
}
