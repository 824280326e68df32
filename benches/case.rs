//! Case mapping performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use textnorm::{CaseTarget, Config, Engine, Locale};

fn engine(target: CaseTarget, locale: Locale) -> Engine<'static> {
    Engine::new(Config::default().with_case(target).with_locale(locale))
}

fn case_ascii(c: &mut Criterion) {
    let text = "Hello, World! This is a test string.".repeat(20);
    for target in [CaseTarget::Upper, CaseTarget::Lower, CaseTarget::Fold] {
        let engine = engine(target, Locale::Default);
        c.bench_function(&format!("to_case_{target}_ascii"), |b| {
            b.iter(|| engine.to_case_str(black_box(&text)))
        });
    }
}

fn case_unicode(c: &mut Criterion) {
    let greek = "ΟΔΥΣΣΕΥΣ ΚΑΙ ΠΗΝΕΛΟΠΗ ".repeat(20);
    let lower = engine(CaseTarget::Lower, Locale::Default);
    c.bench_function("to_case_lower_greek_final_sigma", |b| {
        b.iter(|| lower.to_case_str(black_box(&greek)))
    });

    let turkish = "İSTANBUL ıspanak Iğdır ".repeat(20);
    let lower_tr = engine(CaseTarget::Lower, Locale::Turkish);
    c.bench_function("to_case_lower_turkish", |b| {
        b.iter(|| lower_tr.to_case_str(black_box(&turkish)))
    });

    let german = "straße Fußgänger Maßstab ".repeat(20);
    let upper = engine(CaseTarget::Upper, Locale::Default);
    c.bench_function("to_case_upper_german", |b| {
        b.iter(|| upper.to_case_str(black_box(&german)))
    });
}

fn case_title(c: &mut Criterion) {
    let text = "the quick brown fox jumps over the lazy dog ".repeat(20);
    let title = engine(CaseTarget::Title, Locale::Default);
    c.bench_function("to_case_title_words", |b| {
        b.iter(|| title.to_case_str(black_box(&text)))
    });
}

criterion_group!(benches, case_ascii, case_unicode, case_title);
criterion_main!(benches);
