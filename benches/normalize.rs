//! Normalization performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use textnorm::quick_check::scan;
use textnorm::{Config, Engine, NormalizationForm, Tables};

fn codepoints(text: &str) -> Vec<u32> {
    text.chars().map(u32::from).collect()
}

fn samples() -> Vec<(&'static str, Vec<u32>)> {
    vec![
        ("ascii", codepoints(&"The quick brown fox jumps over the lazy dog. ".repeat(20))),
        ("latin_nfc", codepoints(&"Ça m'a coûté très cher, déjà vu. ".repeat(20))),
        (
            "latin_nfd",
            codepoints(&"C\u{327}a m'a cou\u{302}te\u{301} tre\u{300}s cher. ".repeat(20)),
        ),
        ("hangul", codepoints(&"한국어 텍스트 정규화 ".repeat(20))),
        ("compat", codepoints(&"ﬁle ① ½ ㌀ ｶﾞ ".repeat(20))),
    ]
}

fn normalize_forms(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for (name, input) in samples() {
        for form in NormalizationForm::ALL {
            let engine = Engine::new(Config::default().with_form(form));
            group.bench_with_input(BenchmarkId::new(form.as_str(), name), &input, |b, input| {
                b.iter(|| engine.normalize_codepoints(black_box(input)))
            });
        }
    }
    group.finish();
}

fn quick_check(c: &mut Criterion) {
    let tables = Tables::unicode();
    for (name, input) in samples() {
        c.bench_function(&format!("quick_check_nfc_{name}"), |b| {
            b.iter(|| scan(tables, black_box(&input), NormalizationForm::Nfc))
        });
    }
}

fn normalize_str(c: &mut Criterion) {
    let engine = Engine::new(Config::default());
    let text = "e\u{301}\u{323} a\u{30a} \u{1100}\u{1161}\u{11a8} ".repeat(50);
    c.bench_function("normalize_str_nfc_mixed", |b| {
        b.iter(|| engine.normalize_str(black_box(&text)))
    });
}

criterion_group!(benches, normalize_forms, quick_check, normalize_str);
criterion_main!(benches);
