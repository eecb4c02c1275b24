//! Core logic for moneta.
//!
//! This crate contains pure in-memory logic with ZERO web or database
//! dependencies: the locale override registry, the currency formatting
//! pipeline, and the catalog loader.
//!
//! # Modules
//!
//! - `locale` - Locale-keyed currency display overrides and the provider chain
//! - `engine` - The locale-data engine seam and the built-in implementation
//! - `format` - Currency and money string rendering
//! - `catalog` - Static ISO tables and the currency-catalog loader

pub mod catalog;
pub mod engine;
pub mod format;
pub mod locale;

pub use catalog::{get_iso_code, load_currencies, load_currencies_with, LoadOptions};
pub use engine::{BuiltinEngine, LocaleEngine, RenderOptions};
pub use format::{
    format_currency, format_currency_with, format_money, format_money_with, FormatOptions,
    MoneyFormatOptions, RoundingMethod,
};
pub use locale::{
    add_locale_data_provider, get_all_locale_data, get_locale_data, reset_locale_data,
    set_locale_data, DataProvider, LocaleData, LocaleDataError, LocaleId, OverrideEntry,
};
