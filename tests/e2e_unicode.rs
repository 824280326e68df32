//! End-to-end tests for normalization and case mapping through the public API.
//!
//! Run with:
//!   cargo test --test `e2e_unicode` -- --nocapture

mod common;

use common::{cps, hex, init_logging, nfc, nfd, nfkc, nfkd, text};
use textnorm::codepoint::{S_BASE, S_COUNT};
use textnorm::compose::compose;
use textnorm::normalize::normalize as drive;
use textnorm::tables::{CompositionRecord, DecompositionRecord, DecompositionTag, RangeRecord};
use textnorm::{
    CaseTarget, Config, Element, Engine, Error, Locale, MalformedPolicy, NormalizationForm,
    QuickCheck, Stage, Tables, codec,
};
use tracing::{debug, info};

fn case_engine(target: CaseTarget, locale: Locale) -> Engine<'static> {
    Engine::new(Config::default().with_case(target).with_locale(locale))
}

#[test]
fn e2e_precomposed_and_decomposed_e_acute() {
    init_logging();
    assert_eq!(nfc(&[0x65, 0x301]), vec![0xE9]);
    assert_eq!(nfd(&[0xE9]), vec![0x65, 0x301]);
    assert_eq!(nfkc(&[0x65, 0x301]), vec![0xE9]);
    assert_eq!(nfkd(&[0xE9]), vec![0x65, 0x301]);
}

#[test]
fn e2e_hangul_round_trip_all_syllables() {
    init_logging();
    let syllables: Vec<u32> = (S_BASE..S_BASE + S_COUNT).collect();
    assert_eq!(syllables.len(), 11_172);

    let decomposed = nfd(&syllables);
    assert!(decomposed.len() > syllables.len() * 2);
    assert_eq!(nfc(&decomposed), syllables);

    for &syllable in &syllables {
        let jamo = nfd(&[syllable]);
        assert!(matches!(jamo.len(), 2 | 3), "U+{syllable:04X}");
        assert_eq!(nfc(&jamo), vec![syllable], "U+{syllable:04X}");
    }
    info!(count = syllables.len(), "hangul round trip");
}

#[test]
fn e2e_composition_exclusions() {
    // DEVANAGARI KA + NUKTA stays decomposed; U+0958 itself decomposes
    assert_eq!(nfc(&[0x915, 0x93C]), vec![0x915, 0x93C]);
    assert_eq!(nfc(&[0x958]), vec![0x915, 0x93C]);
    // Singletons and non-starter decompositions never recompose
    assert_eq!(nfc(&[0x212B]), vec![0xC5]);
    assert_eq!(nfc(&[0x340]), vec![0x300]);
    assert_eq!(nfc(&[0xF73]), vec![0xF71, 0xF72]);
}

#[test]
fn e2e_synthetic_excluded_pair() {
    const PAIRS: &[CompositionRecord] = &[CompositionRecord::new(0x61, 0x62, 0x1000)];
    const EXCLUDED: &[RangeRecord<()>] = &[RangeRecord::new(0x1000, 0x1000, ())];

    let with_exclusion = Tables {
        composition: PAIRS,
        composition_exclusions: EXCLUDED,
        ..Tables::empty()
    };
    let without_exclusion = Tables {
        composition: PAIRS,
        ..Tables::empty()
    };

    let mut excluded = vec![0x61, 0x62];
    compose(&with_exclusion, &mut excluded);
    assert_eq!(excluded, vec![0x61, 0x62]);

    let mut composed = vec![0x61, 0x62];
    compose(&without_exclusion, &mut composed);
    assert_eq!(composed, vec![0x1000]);
}

#[test]
fn e2e_injected_tables_can_decompose_ascii() {
    const MAPPINGS: &[DecompositionRecord] = &[
        DecompositionRecord::new(0x41, DecompositionTag::Canonical, &[0x61, 0x300]),
        DecompositionRecord::new(0x100, DecompositionTag::Canonical, &[0x61, 0x300]),
    ];
    const NFD_NO: &[RangeRecord<QuickCheck>] = &[
        RangeRecord::new(0x41, 0x41, QuickCheck::No),
        RangeRecord::new(0x100, 0x100, QuickCheck::No),
    ];
    let tables = Tables {
        canonical_decomposition: MAPPINGS,
        quick_check_nfd: NFD_NO,
        ..Tables::empty()
    };
    let engine = Engine::with_tables(&tables, Config::default().with_form(NormalizationForm::Nfd));

    let input = [Element::Codepoint(0x41)];
    assert_eq!(engine.quick_check(&input), Ok(QuickCheck::No));
    let out = engine.normalize_codepoints(&[0x41]).expect("valid input");
    assert_eq!(out, vec![0x61, 0x300]);
    assert_eq!(engine.is_normalized_codepoints(&out), Ok(true));
    assert_eq!(
        engine.normalize_codepoints(&[0x100, 0x42]),
        Ok(vec![0x61, 0x300, 0x42])
    );
}

#[test]
fn e2e_ordering_is_stable() {
    // Classes [220, 230, 220] after a starter
    let input = [0x61, 0x316, 0x301, 0x317];
    let expected = vec![0x61, 0x316, 0x317, 0x301];
    assert_eq!(nfd(&input), expected, "{}", hex(&nfd(&input)));
    // NFC composes a + ACUTE across the two 220 marks
    assert_eq!(nfc(&input), vec![0xE1, 0x316, 0x317]);
}

#[test]
fn e2e_case_examples() {
    init_logging();
    let lower = case_engine(CaseTarget::Lower, Locale::Default);
    assert_eq!(lower.to_case_str("STRASSE"), "strasse");

    let upper_tr = case_engine(CaseTarget::Upper, Locale::Turkish);
    assert_eq!(upper_tr.to_case_str("i"), "\u{130}");

    let fold = case_engine(CaseTarget::Fold, Locale::Default);
    assert_eq!(fold.to_case_str("Stra\u{df}e"), fold.to_case_str("STRASSE"));

    let title = case_engine(CaseTarget::Title, Locale::Default);
    assert_eq!(title.to_case_str("\u{1c6}ungla and \u{df}tra"), "\u{1c5}ungla And Sstra");

    // Case mapping does not normalize
    let upper = case_engine(CaseTarget::Upper, Locale::Default);
    assert_eq!(upper.to_case_str("e\u{301}"), "E\u{301}");
    debug!("case examples done");
}

#[test]
fn e2e_locale_from_tags() {
    for (tag, expected) in [("tr-TR", "\u{130}"), ("az", "\u{130}"), ("en-GB", "I"), ("lt", "I")] {
        let locale: Locale = tag.parse().expect("valid tag");
        let engine = case_engine(CaseTarget::Upper, locale);
        assert_eq!(engine.to_case_str("i"), expected, "{tag}");
    }
}

#[test]
fn e2e_bytes_with_malformed_sequences() {
    init_logging();
    let bytes = b"Cafe\xCC\x81 \xFFok";
    let elements = codec::decode(bytes);
    assert_eq!(elements.iter().filter(|e| e.is_malformed()).count(), 1);

    let reject = Engine::new(Config::default());
    assert_eq!(reject.normalize(&elements), Err(Error::MalformedInput { index: 6 }));

    let passthrough = Engine::new(Config::default().with_malformed(MalformedPolicy::Passthrough));
    let out = passthrough.normalize(&elements).expect("passthrough");
    assert_eq!(codec::encode(&out), "Caf\u{e9} \u{fffd}ok");
    assert_eq!(out.len(), elements.len() - 1);
    assert_eq!(out[5], Element::Malformed);
}

#[test]
fn e2e_quick_check_through_engine() {
    let engine = Engine::new(Config::default().with_form(NormalizationForm::Nfd));
    let input = codec::decode_str("\u{e9}");
    assert_eq!(engine.quick_check(&input), Ok(QuickCheck::No));
    assert_eq!(engine.is_normalized(&input), Ok(false));
    let out = engine.normalize(&input).expect("valid input");
    assert_eq!(engine.is_normalized(&out), Ok(true));
}

#[test]
fn snapshot_forms_of_dotted_d() {
    let input = [0x1E0B, 0x323];
    let report = NormalizationForm::ALL
        .iter()
        .map(|&form| format!("{form}: {}", hex(&common::normalize(&input, form))))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(report, @r"
    NFC: U+1E0D U+0307
    NFD: U+0064 U+0323 U+0307
    NFKC: U+1E0D U+0307
    NFKD: U+0064 U+0323 U+0307
    ");
}

#[test]
fn snapshot_driver_stages() {
    let tables = Tables::unicode();
    let stage_names = |stages: &[Stage]| -> Vec<String> {
        stages.iter().map(|stage| format!("{stage:?}")).collect()
    };

    let clean = drive(tables, &cps("clean"), NormalizationForm::Nfc);
    insta::assert_json_snapshot!(stage_names(&clean.stages), @r#"
    [
      "Init",
      "Scanned",
      "Done"
    ]
    "#);

    let dirty = drive(tables, &cps("dirty\u{1e0b}\u{323}"), NormalizationForm::Nfkc);
    assert_eq!(text(&dirty.output), "dirty\u{1e0d}\u{307}");
    insta::assert_json_snapshot!(stage_names(&dirty.stages), @r#"
    [
      "Init",
      "Scanned",
      "Decomposed",
      "Ordered",
      "Composed",
      "Done"
    ]
    "#);
}
