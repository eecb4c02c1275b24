//! Value types shared across moneta crates.

pub mod currency;
pub mod money;

pub use currency::{canonical_code, Currency, IsoCode};
pub use money::Money;
