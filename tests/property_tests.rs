//! Property-based tests for the content filter.
//!
//! Uses proptest to verify invariants across random inputs:
//! - `is_safe` agrees with `filter(..).is_clean`
//! - Filtering already-redacted text reports clean, including text glued
//!   to masks and placeholders and for any term list the service accepts
//! - Each matched term is reported once
//! - Text without terms passes through unchanged

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use contentguard::{ContentFilterService, FilterOptions, ProhibitedTermList};
use proptest::prelude::*;

const TERMS: [&str; 4] = ["stupid", "idiot", "غبي", "حمار"];

fn service() -> ContentFilterService {
    ContentFilterService::new(ProhibitedTermList::new(TERMS).unwrap()).unwrap()
}

/// Text built from words that may include prohibited terms and contact data.
fn message() -> impl Strategy<Value = String> {
    let word = prop_oneof![
        "[a-z]{1,8}",
        "[ا-ي]{1,6}",
        prop::sample::select(TERMS.to_vec()).prop_map(str::to_uppercase),
        prop::sample::select(TERMS.to_vec()).prop_map(str::to_string),
        "[569][0-9]{7}",
        "[a-z]{1,5}@[a-z]{1,5}\\.(com|org|kw)",
    ];
    prop::collection::vec(word, 0..12).prop_map(|words| words.join(" "))
}

/// Arbitrary short terms drawn from characters that occur in masks and
/// placeholders.
fn term_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d*#!\\]\\[🔒]{1,4}", 1..6)
}

/// A term list together with text made of its terms, filler and phone
/// numbers concatenated without separators.
fn glued_case() -> impl Strategy<Value = (Vec<String>, String)> {
    term_list().prop_flat_map(|terms| {
        let piece = prop_oneof![
            prop::sample::select(terms.clone()),
            "[a-d*!\\]]{1,3}",
            "[569][0-9]{7}",
        ];
        let text = prop::collection::vec(piece, 0..10).prop_map(|pieces| pieces.concat());
        (Just(terms), text)
    })
}

proptest! {
    /// Property: `is_safe` is exactly `filter(..).is_clean` with default options.
    #[test]
    fn prop_is_safe_matches_filter(text in message()) {
        let svc = service();
        prop_assert_eq!(svc.is_safe(&text), svc.filter(&text, FilterOptions::default()).is_clean);
    }

    /// Property: Redacted output contains nothing left to redact.
    #[test]
    fn prop_redaction_idempotent(text in message(), block in any::<bool>()) {
        let svc = service();
        let options = FilterOptions { block_sensitive: block, ..FilterOptions::default() };
        let first = svc.filter(&text, options);
        let second = svc.filter(&first.cleaned_text, options);

        prop_assert!(second.is_clean);
        prop_assert!(second.detected_words.is_empty());
        prop_assert_eq!(second.cleaned_text, first.cleaned_text);
    }

    /// Property: Glued terms and phone numbers never survive a second pass.
    #[test]
    fn prop_glued_text_idempotent(
        parts in prop::collection::vec(
            prop_oneof![
                prop::sample::select(TERMS.to_vec()).prop_map(str::to_string),
                "[a-z]{1,3}",
                "[569][0-9]{7}",
            ],
            0..10,
        ),
        block in any::<bool>(),
    ) {
        let svc = service();
        let text = parts.concat();
        let options = FilterOptions { block_sensitive: block, ..FilterOptions::default() };
        let first = svc.filter(&text, options);
        prop_assert!(svc.filter(&first.cleaned_text, options).is_clean);
    }

    /// Property: Any term list the service accepts yields idempotent redaction.
    #[test]
    fn prop_configured_terms_idempotent(
        (terms, text) in glued_case(),
        block in any::<bool>(),
    ) {
        let Ok(list) = ProhibitedTermList::new(&terms) else {
            return Ok(());
        };
        let Ok(svc) = ContentFilterService::new(list) else {
            return Ok(());
        };
        let options = FilterOptions { block_sensitive: block, ..FilterOptions::default() };
        let first = svc.filter(&text, options);
        let second = svc.filter(&first.cleaned_text, options);
        prop_assert!(second.is_clean, "terms {:?} left {:?}", terms, second.detected_words);
    }

    /// Property: No term is reported twice.
    #[test]
    fn prop_terms_reported_once(text in message()) {
        let result = service().filter(&text, FilterOptions::default());
        let mut seen = std::collections::HashSet::new();
        for word in &result.detected_words {
            prop_assert!(seen.insert(word.clone()), "duplicate entry {}", word);
        }
    }

    /// Property: Reported terms follow list order.
    #[test]
    fn prop_terms_in_list_order(text in message()) {
        let result = service().filter(&text, FilterOptions::default());
        let positions: Vec<usize> = result
            .detected_words
            .iter()
            .map(|w| TERMS.iter().position(|t| t == w).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Property: Lowercase ASCII text without vowels cannot contain a term.
    #[test]
    fn prop_clean_text_unchanged(text in "[bcdfghjklmnpqrstvwxz ]{0,200}") {
        let result = service().filter(&text, FilterOptions::default());
        prop_assert!(result.is_clean);
        prop_assert_eq!(result.cleaned_text, text);
    }

    /// Property: `is_clean` ignores contact-information matches.
    #[test]
    fn prop_sensitive_does_not_gate_is_clean(text in message()) {
        let svc = service();
        let plain = svc.filter(&text, FilterOptions::default());
        let blocked = svc.filter(&text, FilterOptions::new().with_block_sensitive());
        prop_assert_eq!(plain.is_clean, blocked.is_clean);
    }
}
