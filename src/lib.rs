//! `textnorm` - Unicode normalization and case mapping
//!
//! Canonical and compatibility normalization (NFC, NFD, NFKC, NFKD),
//! canonical ordering of combining marks, and locale-aware case mapping over
//! codepoint sequences, driven by precomputed sorted property tables. The
//! same tables answer General_Category queries.
//!
//! ```
//! use textnorm::{Config, Engine, NormalizationForm};
//!
//! let engine = Engine::new(Config::default().with_form(NormalizationForm::Nfc));
//! assert_eq!(engine.normalize_str("cafe\u{301}"), "caf\u{e9}");
//! ```

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Codepoint/class widths are bounded by the tables
#![allow(clippy::module_name_repetitions)] // Allow case::CaseMapper etc
#![allow(clippy::missing_errors_doc)] // Errors are documented on the Error enum
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::unreadable_literal)] // Codepoints read best as plain hex
#![allow(clippy::manual_range_contains)] // Range checks inside const fns
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference
#![allow(clippy::needless_collect)] // Collect for assertions is clear

pub mod case;
pub mod codec;
pub mod codepoint;
pub mod compose;
pub mod config;
pub mod decompose;
pub mod engine;
pub mod error;
pub mod event;
pub mod normalize;
pub mod quick_check;
pub mod reorder;
pub mod tables;

// Re-export core types at crate root
pub use case::{CaseMapper, Condition, Mapping, default_word_starts};
pub use codepoint::Element;
pub use config::{CaseTarget, Config, Locale, MalformedPolicy, NormalizationForm};
pub use engine::Engine;
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use normalize::{Normalized, Stage};
pub use quick_check::Scan;
pub use tables::{Category, QuickCheck, Tables, UNICODE_VERSION};

/// Normalize `input` to `config.form` with the generated Unicode tables.
pub fn normalize(input: &[Element], config: &Config) -> Result<Vec<Element>> {
    Engine::new(*config).normalize(input)
}

/// Case-map `input` to `config.case` in `config.locale` with the generated
/// Unicode tables.
pub fn to_case(input: &[Element], config: &Config) -> Result<Vec<Element>> {
    Engine::new(*config).to_case(input)
}

/// Whether `input` is already in `config.form`.
pub fn is_normalized(input: &[Element], config: &Config) -> Result<bool> {
    Engine::new(*config).is_normalized(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions() {
        let config = Config::default();
        let input = codec::decode_str("e\u{301}");
        let out = normalize(&input, &config).unwrap();
        assert_eq!(out, vec![Element::Codepoint(0xE9)]);
        assert_eq!(is_normalized(&input, &config), Ok(false));
        assert_eq!(is_normalized(&out, &config), Ok(true));

        let upper = config.with_case(CaseTarget::Upper);
        assert_eq!(
            codec::encode(&to_case(&out, &upper).unwrap()),
            "\u{c9}"
        );
    }

    #[test]
    fn test_unicode_version() {
        assert_eq!(UNICODE_VERSION, (15, 1, 0));
    }
}
