//! Fuzz target for case mapping.
//!
//! Generates structured inputs so every target and locale tailoring gets
//! exercised, including the two-phase buffer API.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textnorm::{CaseTarget, Config, Element, Engine, Error, Locale, MalformedPolicy, codec};

/// Structured input for case mapping fuzzing.
#[derive(Arbitrary, Debug)]
struct CaseInput {
    target: Target,
    locale: LocaleChoice,
    /// Raw bytes, decoded with malformed markers.
    bytes: Vec<u8>,
    /// Capacity of the caller buffer for the two-phase call.
    capacity: u8,
}

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Target {
    Upper,
    Lower,
    Title,
    Fold,
}

#[derive(Arbitrary, Debug, Clone, Copy)]
enum LocaleChoice {
    Default,
    Turkish,
    Lithuanian,
}

fuzz_target!(|input: CaseInput| {
    let target = match input.target {
        Target::Upper => CaseTarget::Upper,
        Target::Lower => CaseTarget::Lower,
        Target::Title => CaseTarget::Title,
        Target::Fold => CaseTarget::Fold,
    };
    let locale = match input.locale {
        LocaleChoice::Default => Locale::Default,
        LocaleChoice::Turkish => Locale::Turkish,
        LocaleChoice::Lithuanian => Locale::Lithuanian,
    };
    let engine = Engine::new(
        Config::default()
            .with_case(target)
            .with_locale(locale)
            .with_malformed(MalformedPolicy::Passthrough),
    );

    let elements = codec::decode(&input.bytes);
    let mapped = engine.to_case(&elements).expect("passthrough cannot fail");

    let mut buffer = vec![Element::Malformed; usize::from(input.capacity)];
    match engine.to_case_into(&elements, &mut buffer) {
        Ok(written) => assert_eq!(&buffer[..written], &mapped[..]),
        Err(Error::BufferTooSmall { required, capacity }) => {
            assert_eq!(required, mapped.len());
            assert_eq!(capacity, buffer.len());
            assert!(buffer.iter().all(|e| *e == Element::Malformed));
        }
        Err(other) => panic!("unexpected error: {other}"),
    }

    // The string API agrees with the element API on valid text
    if let Ok(text) = std::str::from_utf8(&input.bytes) {
        assert_eq!(engine.to_case_str(text), codec::encode(&mapped));
    }
});
