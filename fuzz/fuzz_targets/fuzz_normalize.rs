//! Fuzz target for normalization.
//!
//! Decodes arbitrary bytes, normalizes them to every form with malformed
//! passthrough, and checks idempotence and quick-check soundness.

#![no_main]

use libfuzzer_sys::fuzz_target;
use textnorm::quick_check::scan;
use textnorm::{Config, Engine, MalformedPolicy, NormalizationForm, QuickCheck, Tables, codec};

fuzz_target!(|data: &[u8]| {
    let elements = codec::decode(data);
    let codepoints: Vec<u32> = elements.iter().filter_map(|e| e.scalar()).collect();

    for form in NormalizationForm::ALL {
        let engine = Engine::new(
            Config::default()
                .with_form(form)
                .with_malformed(MalformedPolicy::Passthrough),
        );

        // Passthrough never fails and keeps every marker
        let once = engine.normalize(&elements).expect("passthrough cannot fail");
        let markers = |out: &[textnorm::Element]| out.iter().filter(|e| e.is_malformed()).count();
        assert_eq!(markers(&once), markers(&elements));

        let twice = engine.normalize(&once).expect("passthrough cannot fail");
        assert_eq!(once, twice, "{form} is not idempotent");
        assert_eq!(engine.is_normalized(&once), Ok(true));

        let normalized = engine
            .normalize_codepoints(&codepoints)
            .expect("scalar values");
        match scan(Tables::unicode(), &codepoints, form).status {
            QuickCheck::Yes => assert_eq!(normalized, codepoints),
            QuickCheck::No => assert_ne!(normalized, codepoints),
            QuickCheck::Maybe => {}
        }
    }
});
