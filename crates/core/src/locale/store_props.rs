//! Property-based tests for the locale override store.

use proptest::prelude::*;

use super::store::LocaleData;
use super::types::{LocaleId, OverrideEntry};

/// Strategy for a small pool of currency codes.
fn currency_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["USD", "EUR", "JPY", "IDR", "SEK"])
}

/// Strategy for optional field writes.
fn field_write() -> impl Strategy<Value = Option<&'static str>> {
    prop::option::of(prop::sample::select(vec!["alpha", "beta", "gamma", ""]))
}

/// Strategy for a sequence of (code, name, sign) writes.
fn write_sequence() -> impl Strategy<Value = Vec<(&'static str, Option<&'static str>, Option<&'static str>)>> {
    prop::collection::vec((currency_code(), field_write(), field_write()), 1..20)
}

proptest! {
    /// For any write sequence, each field of the final entry equals the
    /// last non-`None` write of that field for that code, independent of
    /// writes to the other field.
    #[test]
    fn prop_set_is_last_write_wins_per_field(writes in write_sequence()) {
        let locale = LocaleId::new("en_US");
        let mut store = LocaleData::new(locale);
        for (code, name, sign) in &writes {
            store.set(code, *name, *sign, None);
        }

        for (code, _, _) in &writes {
            let entry = store.get(code, None).unwrap();
            let expected_name = writes
                .iter()
                .filter(|(c, _, _)| c == code)
                .filter_map(|(_, n, _)| *n)
                .last();
            let expected_sign = writes
                .iter()
                .filter(|(c, _, _)| c == code)
                .filter_map(|(_, _, s)| *s)
                .last();
            prop_assert_eq!(entry.name.as_deref(), expected_name);
            prop_assert_eq!(entry.sign.as_deref(), expected_sign);
        }
    }

    /// Merging an entry into itself changes nothing.
    #[test]
    fn prop_merge_is_idempotent(
        name in prop::option::of("[a-z]{1,12}"),
        sign in prop::option::of("[$\u{20ac}\u{a5}kr]{1,3}"),
    ) {
        let mut entry = OverrideEntry { name, sign };
        let copy = entry.clone();
        entry.merge(&copy);
        prop_assert_eq!(entry, copy);
    }

    /// Canonicalization is idempotent: re-parsing a canonical id is a
    /// fixed point.
    #[test]
    fn prop_locale_id_canonicalization_idempotent(raw in "[a-zA-Z]{2,3}([-_][a-zA-Z]{2}|[-_][a-zA-Z]{4}[-_][a-zA-Z]{2})?") {
        let once = LocaleId::new(&raw);
        let twice = LocaleId::new(once.as_str());
        prop_assert_eq!(once, twice);
    }

    /// Lookups against an empty store always fail, whatever the code and
    /// locale.
    #[test]
    fn prop_empty_store_never_resolves(code in currency_code(), region in "[A-Z]{2}") {
        let store = LocaleData::new(LocaleId::new("en_US"));
        let locale = LocaleId::new(format!("en_{region}"));
        prop_assert!(store.get(code, Some(&locale)).is_err());
    }
}
