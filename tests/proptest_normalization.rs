//! Property-based tests for normalization and case mapping.
//!
//! Uses proptest to verify invariants that must hold across all valid inputs,
//! and compares against independent implementations on an alphabet whose
//! properties are identical across recent Unicode versions.

mod common;

use common::{cps, nfc, nfd, nfkc, nfkd, normalize};
use proptest::prelude::*;
use textnorm::quick_check::scan;
use textnorm::reorder::reorder;
use textnorm::{CaseTarget, Config, Engine, NormalizationForm, QuickCheck, Tables};
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Strategies
// ============================================================================

/// Arbitrary printable strings (proptest default).
fn utf8_string() -> impl Strategy<Value = String> {
    "\\PC{0,64}"
}

/// Letters, precomposed forms, combining marks, Hangul jamo and syllables,
/// compatibility characters and composition exclusions, all assigned long
/// before the table version.
fn normalization_alphabet() -> Vec<char> {
    vec![
        'a', 'e', 'i', 'o', 'u', 'A', 'E', 'C', 's', 'd', ' ', '\u{e9}', '\u{c5}', '\u{212b}',
        '\u{1e0b}', '\u{1e69}', '\u{1e9b}', '\u{fb01}', '\u{2075}', '\u{bd}', '\u{2460}',
        '\u{300}', '\u{301}', '\u{302}', '\u{304}', '\u{307}', '\u{308}', '\u{30a}', '\u{315}',
        '\u{316}', '\u{323}', '\u{327}', '\u{328}', '\u{345}', '\u{340}', '\u{344}', '\u{1100}',
        '\u{1112}', '\u{1161}', '\u{1175}', '\u{11a8}', '\u{11ab}', '\u{ac00}', '\u{ac01}',
        '\u{d55c}', '\u{915}', '\u{93c}', '\u{958}', '\u{b47}', '\u{b3e}', '\u{f73}',
        '\u{3b1}', '\u{313}', '\u{1f82}', '\u{30ab}', '\u{3099}', '\u{ff76}', '\u{ff9e}',
        '\u{5b0}', '\u{5b8}', '\u{591}', '\u{2f800}',
    ]
}

fn curated_string() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(normalization_alphabet()), 0..24)
        .prop_map(|chars| chars.into_iter().collect::<String>())
}

/// Cased letters, sigma contexts, case-ignorables and special full mappings.
fn case_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            'a', 'Z', 'i', 'I', ' ', '\'', '.', '\u{3a3}', '\u{3c3}', '\u{391}', '\u{3b2}',
            '\u{df}', '\u{130}', '\u{149}', '\u{1c4}', '\u{1c5}', '\u{1c6}', '\u{345}', '\u{301}',
            '\u{1f80}', '\u{fb00}', '1',
        ]),
        0..24,
    )
    .prop_map(|chars| chars.into_iter().collect::<String>())
}

/// Sequences of combining marks of assorted classes.
fn mark_run() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(
        prop::sample::select(vec![
            0x61, 0x300, 0x301, 0x316, 0x317, 0x323, 0x327, 0x345, 0x5b0, 0x5b8, 0x315, 0x31b,
        ]),
        0..16,
    )
}

// ============================================================================
// Normalization Properties
// ============================================================================

proptest! {
    /// Normalizing twice gives the same result as normalizing once.
    #[test]
    fn normalization_is_idempotent(s in utf8_string()) {
        let input = cps(&s);
        for form in NormalizationForm::ALL {
            let once = normalize(&input, form);
            prop_assert_eq!(normalize(&once, form), once.clone(), "{} not idempotent", form);
        }
    }

    /// A quick-check Yes is never wrong, and neither is a No.
    #[test]
    fn quick_check_is_sound(s in utf8_string()) {
        let input = cps(&s);
        for form in NormalizationForm::ALL {
            let normalized = normalize(&input, form) == input;
            match scan(Tables::unicode(), &input, form).status {
                QuickCheck::Yes => prop_assert!(normalized, "{} Yes on unnormalized input", form),
                QuickCheck::No => prop_assert!(!normalized, "{} No on normalized input", form),
                QuickCheck::Maybe => {}
            }
        }
    }

    /// The exact check agrees with comparing against the normalized output.
    #[test]
    fn is_normalized_is_exact(s in curated_string()) {
        let input = cps(&s);
        for form in NormalizationForm::ALL {
            let engine = common::engine(form);
            let expected = normalize(&input, form) == input;
            prop_assert_eq!(engine.is_normalized_codepoints(&input).unwrap(), expected);
        }
    }

    /// Canonically equivalent inputs normalize identically.
    #[test]
    fn canonical_equivalence(s in curated_string()) {
        let input = cps(&s);
        prop_assert_eq!(nfc(&nfd(&input)), nfc(&input));
        prop_assert_eq!(nfd(&nfc(&input)), nfd(&input));
        prop_assert_eq!(nfkc(&nfkd(&input)), nfkc(&input));
        prop_assert_eq!(nfkd(&nfd(&input)), nfkd(&input));
    }

    /// Decomposed output contains nothing that still decomposes.
    #[test]
    fn decomposed_output_is_fully_decomposed(s in utf8_string()) {
        let tables = Tables::unicode();
        for form in [NormalizationForm::Nfd, NormalizationForm::Nfkd] {
            for cp in normalize(&cps(&s), form) {
                prop_assert_eq!(tables.quick_check(form, cp), QuickCheck::Yes);
            }
        }
    }

    /// Output matches the unicode-normalization crate on the curated alphabet.
    #[test]
    fn matches_unicode_normalization(s in curated_string()) {
        let input = cps(&s);
        prop_assert_eq!(nfc(&input), cps(&s.nfc().collect::<String>()));
        prop_assert_eq!(nfd(&input), cps(&s.nfd().collect::<String>()));
        prop_assert_eq!(nfkc(&input), cps(&s.nfkc().collect::<String>()));
        prop_assert_eq!(nfkd(&input), cps(&s.nfkd().collect::<String>()));
    }

    /// Reordering sorts each mark run by class and only permutes it.
    #[test]
    fn reorder_is_a_stable_sort(run in mark_run()) {
        let tables = Tables::unicode();
        let mut sorted = run.clone();
        reorder(tables, &mut sorted);

        // Starters split runs; a stable sort within runs equals a stable sort
        // keyed by (run number, class).
        let mut run_number = 0;
        let mut keyed: Vec<(usize, u8, u32)> = Vec::new();
        for &cp in &run {
            let class = tables.combining_class(cp);
            if class == 0 {
                run_number += 1;
            }
            keyed.push((run_number, class, cp));
            if class == 0 {
                run_number += 1;
            }
        }
        keyed.sort_by_key(|&(run, class, _)| (run, class));
        let expected: Vec<u32> = keyed.into_iter().map(|(_, _, cp)| cp).collect();
        prop_assert_eq!(sorted, expected);
    }
}

// ============================================================================
// Case Mapping Properties
// ============================================================================

fn convert(s: &str, target: CaseTarget) -> String {
    Engine::new(Config::default().with_case(target)).to_case_str(s)
}

proptest! {
    /// Lowercasing matches the standard library, Final_Sigma included.
    #[test]
    fn lowercase_matches_std(s in case_string()) {
        prop_assert_eq!(convert(&s, CaseTarget::Lower), s.to_lowercase());
    }

    /// Uppercasing matches the standard library.
    #[test]
    fn uppercase_matches_std(s in case_string()) {
        prop_assert_eq!(convert(&s, CaseTarget::Upper), s.to_uppercase());
    }

    /// ASCII case mapping agrees with the ASCII helpers.
    #[test]
    fn ascii_case_mapping(s in "[ -~]{0,64}") {
        prop_assert_eq!(convert(&s, CaseTarget::Lower), s.to_ascii_lowercase());
        prop_assert_eq!(convert(&s, CaseTarget::Upper), s.to_ascii_uppercase());
        prop_assert_eq!(convert(&s, CaseTarget::Fold), s.to_ascii_lowercase());
    }

    /// Case folding is idempotent.
    #[test]
    fn case_folding_is_idempotent(s in utf8_string()) {
        let once = convert(&s, CaseTarget::Fold);
        prop_assert_eq!(convert(&once, CaseTarget::Fold), once.clone());
    }

    /// Case mapping never fails on valid text and never drops it all.
    #[test]
    fn case_mapping_preserves_emptiness(s in utf8_string()) {
        for target in [CaseTarget::Upper, CaseTarget::Lower, CaseTarget::Title, CaseTarget::Fold] {
            let out = convert(&s, target);
            prop_assert_eq!(out.is_empty(), s.is_empty());
        }
    }
}
