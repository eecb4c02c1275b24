//! CLDR decimal-pattern parsing and rendering.
//!
//! Supports the subset of the CLDR pattern grammar that currency patterns
//! use: an optional negative subpattern split on `;` (default: minus-prefixed
//! positive), literal prefix/suffix text, primary and secondary grouping
//! sizes, minimum integer digits, and minimum/maximum fraction digits.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// The generic currency placeholder glyph used in locale patterns.
pub const CURRENCY_PLACEHOLDER: char = '\u{a4}';

/// Replaces currency placeholder runs in `text` with display values.
///
/// Substitution order is a hard invariant: the longest run first
/// (`¤¤¤` → full name, `¤¤` → alpha code, `¤` → sign), so a sign
/// substitution can never corrupt a name or code placeholder that has not
/// been processed yet.
#[must_use]
pub fn substitute_currency_tokens(text: &str, name: &str, code: &str, sign: &str) -> String {
    text.replace("\u{a4}\u{a4}\u{a4}", name)
        .replace("\u{a4}\u{a4}", code)
        .replace('\u{a4}', sign)
}

/// Locale-specific numeral symbols used when rendering a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberSymbols {
    /// Decimal separator.
    pub decimal: String,
    /// Grouping separator.
    pub group: String,
    /// Minus sign.
    pub minus: String,
}

impl Default for NumberSymbols {
    fn default() -> Self {
        Self {
            decimal: ".".to_owned(),
            group: ",".to_owned(),
            minus: "-".to_owned(),
        }
    }
}

/// A parsed decimal pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalPattern {
    /// Literal text before the number in the positive subpattern.
    pub positive_prefix: String,
    /// Literal text after the number in the positive subpattern.
    pub positive_suffix: String,
    /// Literal text before the number in the negative subpattern.
    pub negative_prefix: String,
    /// Literal text after the number in the negative subpattern.
    pub negative_suffix: String,
    /// Minimum integer digits (zero-padded on the left).
    pub min_integer_digits: usize,
    /// Minimum fraction digits (zero-padded on the right).
    pub min_fraction_digits: usize,
    /// Maximum fraction digits.
    pub max_fraction_digits: usize,
    /// Size of the rightmost digit group; 0 disables grouping.
    pub primary_grouping: usize,
    /// Size of groups beyond the first; 0 means same as primary.
    pub secondary_grouping: usize,
}

impl DecimalPattern {
    /// Parses a pattern string.
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        let (positive, negative) = match pattern.split_once(';') {
            Some((pos, neg)) => (pos, Some(neg)),
            None => (pattern, None),
        };

        let (pos_prefix, body, pos_suffix) = split_affixes(positive);
        let (negative_prefix, negative_suffix) = match negative {
            Some(neg) => {
                let (prefix, _, suffix) = split_affixes(neg);
                (prefix.to_owned(), suffix.to_owned())
            }
            // CLDR default: the negative form is the positive form with a
            // minus sign prefixed.
            None => (format!("-{pos_prefix}"), pos_suffix.to_owned()),
        };

        let (int_part, frac_part) = match body.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (body, ""),
        };

        let groups: Vec<&str> = int_part.split(',').collect();
        let (primary_grouping, secondary_grouping) = if groups.len() >= 2 {
            let primary = groups[groups.len() - 1].len();
            let secondary = if groups.len() >= 3 {
                groups[groups.len() - 2].len()
            } else {
                primary
            };
            (primary, secondary)
        } else {
            (0, 0)
        };

        Self {
            positive_prefix: pos_prefix.to_owned(),
            positive_suffix: pos_suffix.to_owned(),
            negative_prefix,
            negative_suffix,
            min_integer_digits: int_part.chars().filter(|c| *c == '0').count(),
            min_fraction_digits: frac_part.chars().filter(|c| *c == '0').count(),
            max_fraction_digits: frac_part.chars().filter(|c| matches!(c, '0' | '#')).count(),
            primary_grouping,
            secondary_grouping,
        }
    }

    /// Renders an amount against this pattern.
    ///
    /// `min_frac`/`max_frac` are the resolved fraction-digit bounds (the
    /// caller substitutes currency-default digits here when asked to).
    /// With `quantize`, the amount is rounded half-even to `max_frac`
    /// digits; without it, extra input digits are kept as given.
    #[must_use]
    pub fn render(
        &self,
        amount: Decimal,
        symbols: &NumberSymbols,
        min_frac: usize,
        max_frac: usize,
        quantize: bool,
    ) -> String {
        let negative = amount.is_sign_negative();
        let abs = amount.abs();
        let value = if quantize {
            let digits = u32::try_from(max_frac).unwrap_or(u32::MAX);
            abs.round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven)
        } else {
            abs
        };

        let text = value.normalize().to_string();
        let (int_digits, frac_digits) = match text.split_once('.') {
            Some((int_digits, frac_digits)) => (int_digits.to_owned(), frac_digits.to_owned()),
            None => (text, String::new()),
        };

        let int_digits = if int_digits.len() < self.min_integer_digits {
            let pad = "0".repeat(self.min_integer_digits - int_digits.len());
            format!("{pad}{int_digits}")
        } else {
            int_digits
        };

        let mut frac = frac_digits;
        if quantize && frac.len() > max_frac {
            frac.truncate(max_frac);
        }
        while frac.len() < min_frac {
            frac.push('0');
        }

        let grouped = group_digits(
            &int_digits,
            self.primary_grouping,
            self.secondary_grouping,
            &symbols.group,
        );

        let (prefix, suffix) = if negative {
            (&self.negative_prefix, &self.negative_suffix)
        } else {
            (&self.positive_prefix, &self.positive_suffix)
        };

        let mut out = String::new();
        out.push_str(&prefix.replace('-', &symbols.minus));
        out.push_str(&grouped);
        if !frac.is_empty() {
            out.push_str(&symbols.decimal);
            out.push_str(&frac);
        }
        out.push_str(&suffix.replace('-', &symbols.minus));
        out
    }
}

/// Splits a subpattern into (prefix, number body, suffix).
fn split_affixes(subpattern: &str) -> (&str, &str, &str) {
    let is_body_char = |c: char| matches!(c, '#' | '0' | ',' | '.');
    let Some(start) = subpattern.find(is_body_char) else {
        return (subpattern, "", "");
    };
    let rest = &subpattern[start..];
    let end = rest
        .char_indices()
        .find(|(_, c)| !is_body_char(*c))
        .map_or(rest.len(), |(i, _)| i);
    (&subpattern[..start], &rest[..end], &rest[end..])
}

/// Groups an ASCII digit run from the right with the given separator.
fn group_digits(digits: &str, primary: usize, secondary: usize, separator: &str) -> String {
    if primary == 0 || digits.len() <= primary {
        return digits.to_owned();
    }
    let secondary = if secondary == 0 { primary } else { secondary };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = digits.len();
    groups.push(&digits[end - primary..end]);
    end -= primary;
    while end > 0 {
        let take = secondary.min(end);
        groups.push(&digits[end - take..end]);
        end -= take;
    }
    groups.reverse();
    groups.join(separator)
}


#[cfg(test)]
mod props {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// Grouping only inserts separators; the digit sequence itself is
        /// untouched.
        #[test]
        fn prop_grouping_preserves_digits(
            value in 0u64..1_000_000_000_000,
            primary in 2usize..4,
            secondary in 0usize..4,
        ) {
            let digits = value.to_string();
            let grouped = group_digits(&digits, primary, secondary, ",");
            prop_assert_eq!(grouped.replace(',', ""), digits);
        }

        /// Substitution consumes every placeholder run, and the sign
        /// replacement never corrupts a longer run.
        #[test]
        fn prop_substitution_consumes_all_placeholders(
            name in "[A-Za-z ]{1,12}",
            sign in "[$\u{20ac}\u{a5}A-Z]{1,3}",
        ) {
            let text = "\u{a4}\u{a4}\u{a4}|\u{a4}\u{a4}|\u{a4}";
            let out = substitute_currency_tokens(text, &name, "USD", &sign);
            prop_assert_eq!(out, format!("{name}|USD|{sign}"));
        }

        /// A quantizing render carries exactly the requested fraction
        /// digits, whatever the input scale.
        #[test]
        fn prop_render_fraction_digit_count(
            units in -1_000_000i64..1_000_000,
            ten_thousandths in 0u32..10_000,
            places in 0usize..5,
        ) {
            let amount = Decimal::new(units, 0) + Decimal::new(ten_thousandths.into(), 4);
            let parsed = DecimalPattern::parse("#,##0.00");
            let out = parsed.render(amount, &NumberSymbols::default(), places, places, true);
            let frac_len = out.split_once('.').map_or(0, |(_, f)| f.len());
            prop_assert_eq!(frac_len, places);
        }
    }
}
