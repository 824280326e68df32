//! Conformance tests based on fixture files.
//!
//! `tests/conformance/fixtures/normalization.json` is generated by
//! `scripts/gen_tables.py` from the same Unicode version as the property
//! tables. Every case records the four normalization forms, the default
//! lowercase, uppercase and case-folded outputs, and the general category of
//! each input codepoint.

#![allow(clippy::uninlined_format_args, clippy::too_many_lines)]

use serde::Deserialize;

mod common;

use common::{hex, init_logging};
use textnorm::{
    CaseTarget, Category, Config, Engine, NormalizationForm, Tables, UNICODE_VERSION, codec,
};
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct FixtureSet {
    unicode_version: String,
    tests: Vec<FixtureCase>,
}

#[derive(Debug, Deserialize)]
struct FixtureCase {
    name: String,
    input: Vec<u32>,
    expected: Expected,
    lower: Vec<u32>,
    upper: Vec<u32>,
    fold: Vec<u32>,
    categories: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Expected {
    nfc: Vec<u32>,
    nfd: Vec<u32>,
    nfkc: Vec<u32>,
    nfkd: Vec<u32>,
}

impl Expected {
    fn get(&self, form: NormalizationForm) -> &[u32] {
        match form {
            NormalizationForm::Nfc => &self.nfc,
            NormalizationForm::Nfd => &self.nfd,
            NormalizationForm::Nfkc => &self.nfkc,
            NormalizationForm::Nfkd => &self.nfkd,
        }
    }
}

fn load_fixtures() -> FixtureSet {
    let data = std::fs::read_to_string("tests/conformance/fixtures/normalization.json")
        .expect("read conformance fixture");
    serde_json::from_str(&data).expect("parse fixture")
}

#[test]
fn fixtures_match_table_version() {
    let fixtures = load_fixtures();
    let (major, minor, update) = UNICODE_VERSION;
    assert_eq!(fixtures.unicode_version, format!("{major}.{minor}.{update}"));
}

#[test]
fn conformance_normalization() {
    init_logging();
    let fixtures = load_fixtures();
    let mut failures = Vec::new();

    for case in &fixtures.tests {
        for form in NormalizationForm::ALL {
            let engine = Engine::new(Config::default().with_form(form));
            let actual = engine
                .normalize_codepoints(&case.input)
                .expect("fixture input is valid");
            let expected = case.expected.get(form);
            debug!(case = %case.name, %form, "checked");
            if actual != expected {
                failures.push(format!(
                    "{} {}: input [{}] expected [{}] got [{}]",
                    case.name,
                    form,
                    hex(&case.input),
                    hex(expected),
                    hex(&actual)
                ));
            }

            let is_normalized = engine
                .is_normalized_codepoints(&case.input)
                .expect("fixture input is valid");
            if is_normalized != (case.input == expected) {
                failures.push(format!("{} {}: is_normalized was {}", case.name, form, is_normalized));
            }
        }
    }

    info!(cases = fixtures.tests.len(), failures = failures.len(), "normalization fixtures");
    assert!(failures.is_empty(), "conformance failures:\n{}", failures.join("\n"));
}

#[test]
fn conformance_case_mapping() {
    init_logging();
    let fixtures = load_fixtures();
    let mut failures = Vec::new();

    for case in &fixtures.tests {
        let input = codec::decode_str(&common::text(&case.input));
        for (target, expected) in [
            (CaseTarget::Lower, &case.lower),
            (CaseTarget::Upper, &case.upper),
            (CaseTarget::Fold, &case.fold),
        ] {
            let engine = Engine::new(Config::default().with_case(target));
            let actual: Vec<u32> = engine
                .to_case(&input)
                .expect("fixture input is valid")
                .into_iter()
                .filter_map(|element| element.scalar())
                .collect();
            if &actual != expected {
                failures.push(format!(
                    "{} {}: expected [{}] got [{}]",
                    case.name,
                    target,
                    hex(expected),
                    hex(&actual)
                ));
            }
        }
    }

    info!(cases = fixtures.tests.len(), failures = failures.len(), "case fixtures");
    assert!(failures.is_empty(), "conformance failures:\n{}", failures.join("\n"));
}

#[test]
fn normalization_forms_are_consistent_on_fixtures() {
    let fixtures = load_fixtures();
    for case in &fixtures.tests {
        // NFC(NFD(x)) == NFC(x) and NFKD(NFKC(x)) == NFKD(x)
        assert_eq!(common::nfc(&case.expected.nfd), case.expected.nfc, "{}", case.name);
        assert_eq!(common::nfkd(&case.expected.nfkc), case.expected.nfkd, "{}", case.name);
        assert_eq!(common::nfd(&case.expected.nfc), case.expected.nfd, "{}", case.name);
    }
}

#[test]
fn conformance_general_category() {
    let fixtures = load_fixtures();
    let tables = Tables::unicode();
    for case in &fixtures.tests {
        assert_eq!(case.input.len(), case.categories.len(), "{}", case.name);
        for (&cp, abbreviation) in case.input.iter().zip(&case.categories) {
            let expected = Category::from_abbreviation(abbreviation).expect("known category");
            assert_eq!(tables.category(cp), expected, "{} U+{:04X}", case.name, cp);
        }
    }
}
