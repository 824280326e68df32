//! Normalization conformance in the NormalizationTest.txt layout.
//!
//! Each line holds five columns `c1;c2;c3;c4;c5` (source, NFC, NFD, NFKC,
//! NFKD). By default the suite generated by `scripts/gen_tables.py` is used;
//! set `TEXTNORM_NORMALIZATION_TEST` to the UCD's NormalizationTest.txt to
//! run the same checks against it.
//!
//! Run with:
//!   cargo test --test `normalization_suite` -- --nocapture

#![allow(clippy::uninlined_format_args)]

mod common;

use std::collections::HashSet;

use common::{engine, hex};
use textnorm::{Category, NormalizationForm, Tables};
use tracing::info;

const DEFAULT_SUITE: &str = "tests/conformance/fixtures/normalization_test.txt";

#[derive(Debug)]
struct SuiteLine {
    part: u8,
    line: usize,
    columns: [Vec<u32>; 5],
}

impl SuiteLine {
    /// Column that normalizing column `column` to `form` must produce.
    fn expected(&self, form: NormalizationForm, column: usize) -> &[u32] {
        let compatibility_side = column >= 3;
        match form {
            NormalizationForm::Nfc if compatibility_side => &self.columns[3],
            NormalizationForm::Nfc => &self.columns[1],
            NormalizationForm::Nfd if compatibility_side => &self.columns[4],
            NormalizationForm::Nfd => &self.columns[2],
            NormalizationForm::Nfkc => &self.columns[3],
            NormalizationForm::Nfkd => &self.columns[4],
        }
    }
}

fn parse_sequence(field: &str) -> Vec<u32> {
    field
        .split_whitespace()
        .map(|digits| u32::from_str_radix(digits, 16).expect("hex codepoint"))
        .collect()
}

fn load_suite() -> Vec<SuiteLine> {
    let path = std::env::var("TEXTNORM_NORMALIZATION_TEST")
        .unwrap_or_else(|_| DEFAULT_SUITE.to_string());
    let data = std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("read {path}: {err}"));

    let mut part = 0;
    let mut suite = Vec::new();
    for (index, raw) in data.lines().enumerate() {
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        if let Some(number) = content.strip_prefix("@Part") {
            part = number.trim().parse().expect("part number");
            continue;
        }

        let fields: Vec<&str> = content.split(';').collect();
        assert!(fields.len() >= 5, "line {}: expected five columns", index + 1);
        suite.push(SuiteLine {
            part,
            line: index + 1,
            columns: std::array::from_fn(|column| parse_sequence(fields[column])),
        });
    }
    suite
}

#[test]
fn suite_has_every_part() {
    let suite = load_suite();
    let parts: HashSet<u8> = suite.iter().map(|entry| entry.part).collect();
    assert_eq!(parts, HashSet::from([0, 1, 2, 3]));
    assert!(suite.iter().all(|entry| !entry.columns[0].is_empty()));
}

#[test]
fn suite_columns_hold_for_every_form() {
    let suite = load_suite();
    let engines = NormalizationForm::ALL.map(engine);
    let mut failures = Vec::new();

    for entry in &suite {
        for engine in &engines {
            let form = engine.config().form;
            for (column, source) in entry.columns.iter().enumerate() {
                let expected = entry.expected(form, column);
                let actual = engine
                    .normalize_codepoints(source)
                    .expect("suite input is valid");
                if actual != expected {
                    failures.push(format!(
                        "line {} {}(c{}): [{}] expected [{}] got [{}]",
                        entry.line,
                        form,
                        column + 1,
                        hex(source),
                        hex(expected),
                        hex(&actual)
                    ));
                }

                let is_normalized = engine
                    .is_normalized_codepoints(source)
                    .expect("suite input is valid");
                if is_normalized != (source.as_slice() == expected) {
                    failures.push(format!(
                        "line {} {}(c{}): is_normalized was {} for [{}]",
                        entry.line,
                        form,
                        column + 1,
                        is_normalized,
                        hex(source)
                    ));
                }
            }
        }
    }

    info!(lines = suite.len(), failures = failures.len(), "normalization suite");
    assert!(
        failures.is_empty(),
        "{} suite failures, first 50:\n{}",
        failures.len(),
        failures.iter().take(50).cloned().collect::<Vec<_>>().join("\n")
    );
}

#[test]
fn unlisted_characters_are_invariant() {
    let suite = load_suite();
    let listed: HashSet<u32> = suite
        .iter()
        .filter(|entry| entry.part == 1)
        .filter_map(|entry| entry.columns[0].first().copied())
        .collect();
    assert!(!listed.is_empty());

    let tables = Tables::unicode();
    let engines = NormalizationForm::ALL.map(engine);
    let mut checked = 0usize;
    let mut failures = Vec::new();

    for cp in (0..=0x10FFFF).filter(|cp| !(0xD800..=0xDFFF).contains(cp)) {
        if listed.contains(&cp) || tables.is_category(cp, Category::UNASSIGNED) {
            continue;
        }
        checked += 1;
        for engine in &engines {
            let out = engine.normalize_codepoints(&[cp]).expect("scalar");
            if out != [cp] {
                failures.push(format!("U+{cp:04X} {} -> [{}]", engine.config().form, hex(&out)));
            }
        }
    }

    info!(checked, "characters outside part 1");
    assert!(checked > 100_000);
    assert!(
        failures.is_empty(),
        "{} characters changed, first 50:\n{}",
        failures.len(),
        failures.iter().take(50).cloned().collect::<Vec<_>>().join("\n")
    );
}
