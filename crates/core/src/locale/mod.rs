//! Locale-keyed currency display overrides.
//!
//! This module implements the override registry:
//! - Canonical locale identifiers
//! - Override entries with field-level merge semantics
//! - The pluggable provider chain
//! - The store with its fixed fallback order
//! - Error types for registry lookups

pub mod error;
pub mod store;
pub mod types;

#[cfg(test)]
mod store_props;

pub use error::LocaleDataError;
pub use store::{
    add_locale_data_provider, get_all_locale_data, get_locale_data, reset_locale_data,
    set_locale_data, DataProvider, LocaleData,
};
pub use types::{LocaleId, OverrideEntry, ROOT_LOCALE};
