//! Unit tests for the formatting pipeline.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use moneta_shared::{Currency, IsoCode, Money};

use crate::engine::BuiltinEngine;
use crate::locale::{LocaleData, LocaleId, OverrideEntry};

use super::{
    format_currency, format_currency_with, format_money_with, FormatOptions, MoneyFormatOptions,
    RoundingMethod,
};

fn engine() -> BuiltinEngine {
    BuiltinEngine::new()
}

fn store() -> LocaleData {
    LocaleData::new(LocaleId::new("en_US"))
}

fn usd(amount: Decimal) -> Money {
    Money::new(
        amount,
        Currency::new("USD", IsoCode::Numeric(840), "US Dollar", vec![]).with_sign("$"),
    )
}

fn eur(amount: Decimal) -> Money {
    Money::new(
        amount,
        Currency::new("EUR", IsoCode::Numeric(978), "Euro", vec![]).with_sign("\u{20ac}"),
    )
}

#[test]
fn test_known_currency_without_overrides_uses_standard_pattern() {
    let out = format_currency_with(
        &engine(),
        &store(),
        &usd(dec!(1234.5)),
        Some(&LocaleId::new("en_US")),
        &FormatOptions::new(),
    );
    assert_eq!(out, "$1,234.50");
}

#[test]
fn test_missing_override_data_is_not_an_error() {
    // The store is empty; the lookup fails internally and the formatter
    // falls back to canonical metadata.
    let out = format_currency_with(
        &engine(),
        &store(),
        &usd(dec!(1)),
        None,
        &FormatOptions::new(),
    );
    assert_eq!(out, "$1.00");
}

#[test]
fn test_caller_pattern_passes_through_unmodified() {
    let options = FormatOptions::new().with_pattern("0.00");
    let out = format_currency_with(
        &engine(),
        &store(),
        &usd(dec!(1234.5)),
        Some(&LocaleId::new("en_US")),
        &options,
    );
    assert_eq!(out, "1234.50");
}

#[test]
fn test_sign_override_builds_custom_pattern() {
    let mut store = store();
    store.set("USD", None, Some("US$"), None);

    let out = format_currency_with(
        &engine(),
        &store,
        &usd(dec!(1234.5)),
        Some(&LocaleId::new("en_US")),
        &FormatOptions::new(),
    );
    assert_eq!(out, "US$1,234.50");
}

#[test]
fn test_name_override_builds_custom_pattern() {
    let mut store = store();
    store.set("EUR", Some("Gemeinschaftsw\u{e4}hrung"), None, Some(&LocaleId::new("de_DE")));

    let options = FormatOptions::new().with_pattern("#,##0.00\u{a0}\u{a4}\u{a4}\u{a4}");
    let out = format_currency_with(
        &engine(),
        &store,
        &eur(dec!(9.5)),
        Some(&LocaleId::new("de_DE")),
        &options,
    );
    assert_eq!(out, "9,50\u{a0}Gemeinschaftsw\u{e4}hrung");
}

#[test]
fn test_all_three_placeholder_widths_substitute_without_corruption() {
    let mut store = store();
    store.set("USD", Some("Dollar"), Some("$"), None);

    let options = FormatOptions::new().with_pattern("\u{a4}\u{a4}\u{a4} #,##0.00 \u{a4}\u{a4} \u{a4}");
    let out = format_currency_with(
        &engine(),
        &store,
        &usd(dec!(2.5)),
        Some(&LocaleId::new("en_US")),
        &options,
    );
    assert_eq!(out, "Dollar 2.50 USD $");
}

#[test]
fn test_empty_string_overrides_do_not_trigger_custom_pattern() {
    let mut store = store();
    store.set("USD", Some(""), Some(""), None);

    let out = format_currency_with(
        &engine(),
        &store,
        &usd(dec!(1)),
        Some(&LocaleId::new("en_US")),
        &FormatOptions::new(),
    );
    // The engine's own symbol renders, not the empty override.
    assert_eq!(out, "$1.00");
}

#[test]
fn test_unknown_currency_uses_canonical_value_metadata() {
    let money = Money::new(
        dec!(3),
        Currency::new("XTS", IsoCode::None, "Testing Currency", vec![]).with_sign("T$"),
    );
    let out = format_currency_with(
        &engine(),
        &store(),
        &money,
        Some(&LocaleId::new("en_US")),
        &FormatOptions::new(),
    );
    assert_eq!(out, "T$3.00");
}

#[test]
fn test_override_falls_back_through_default_locale_bucket() {
    let mut store = store();
    // Only the default locale has data; a lookup from sv_SE resolves
    // through the fallback chain.
    store.set("USD", None, Some("US$"), None);

    let out = format_currency_with(
        &engine(),
        &store,
        &usd(dec!(1)),
        Some(&LocaleId::new("sv_SE")),
        &FormatOptions::new(),
    );
    assert_eq!(out, "1,00\u{a0}US$");
}

#[test]
fn test_provider_supplied_overrides_reach_the_formatter() {
    let mut store = store();
    store.add_provider(|code: &str, _locale: &LocaleId| {
        (code == "USD").then(|| OverrideEntry::new().with_sign("U$"))
    });

    let out = format_currency_with(
        &engine(),
        &store,
        &usd(dec!(7)),
        Some(&LocaleId::new("en_US")),
        &FormatOptions::new(),
    );
    assert_eq!(out, "U$7.00");
}

#[test]
fn test_format_money_defaults() {
    let out = format_money_with(
        &engine(),
        &store(),
        &usd(dec!(1234.5)),
        &MoneyFormatOptions::new(),
    );
    assert_eq!(out, "$1,234.50");
}

#[test]
fn test_format_money_without_symbol_has_no_currency_token() {
    let options = MoneyFormatOptions::new().with_symbol(false);
    let out = format_money_with(&engine(), &store(), &usd(dec!(1)), &options);
    assert_eq!(out, "1.00");

    // Suffix-symbol locales lose the separating whitespace too.
    let options = MoneyFormatOptions::new()
        .with_symbol(false)
        .with_locale(LocaleId::new("de_DE"));
    let out = format_money_with(&engine(), &store(), &eur(dec!(1234.5)), &options);
    assert_eq!(out, "1.234,50");
}

#[test]
fn test_format_money_decimal_places_is_exact() {
    let options = MoneyFormatOptions::new().with_decimal_places(2);
    let out = format_money_with(&engine(), &store(), &usd(dec!(1.005)), &options);
    assert_eq!(out, "$1.00");

    let options = MoneyFormatOptions::new().with_decimal_places(3);
    let out = format_money_with(&engine(), &store(), &usd(dec!(1.005)), &options);
    assert_eq!(out, "$1.005");

    let options = MoneyFormatOptions::new().with_decimal_places(0);
    let out = format_money_with(&engine(), &store(), &usd(dec!(1.4)), &options);
    assert_eq!(out, "$1");
}

#[test]
fn test_format_money_decimal_places_overrides_currency_default() {
    // JPY renders with zero digits by default; an explicit count wins.
    let money = Money::new(
        dec!(1234),
        Currency::new("JPY", IsoCode::Numeric(392), "Japanese Yen", vec![]).with_sign("\u{a5}"),
    );
    let options = MoneyFormatOptions::new()
        .with_locale(LocaleId::new("ja_JP"))
        .with_decimal_places(2);
    let out = format_money_with(&engine(), &store(), &money, &options);
    assert_eq!(out, "\u{a5}1,234.00");
}

#[test]
fn test_format_money_localized() {
    let options = MoneyFormatOptions::new().with_locale(LocaleId::new("de_DE"));
    let out = format_money_with(&engine(), &store(), &eur(dec!(1234.5)), &options);
    assert_eq!(out, "1.234,50\u{a0}\u{20ac}");
}

#[test]
fn test_rounding_method_has_no_effect() {
    let plain = format_money_with(
        &engine(),
        &store(),
        &usd(dec!(2.675)),
        &MoneyFormatOptions::new().with_decimal_places(2),
    );
    let with_method = format_money_with(
        &engine(),
        &store(),
        &usd(dec!(2.675)),
        &MoneyFormatOptions::new()
            .with_decimal_places(2)
            .with_rounding_method(RoundingMethod::HalfUp),
    );
    assert_eq!(plain, with_method);
}

#[test]
fn test_shared_handle_free_function() {
    // No global override data is registered for this code anywhere in
    // the test suite, so the canonical path renders.
    let out = format_currency(
        &usd(dec!(1)),
        Some(&LocaleId::new("en_US")),
        &FormatOptions::new(),
    );
    assert_eq!(out, "$1.00");
}
