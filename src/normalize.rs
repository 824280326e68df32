//! Normalization driver.
//!
//! Each call walks an explicit stage machine:
//!
//! ```text
//! Init -> Scanned -> Decomposed -> Ordered -> [Composed] -> Done
//!            \______________________________________________/
//!                         already normalized
//! ```
//!
//! The quick-check scan splits the input at its safe start. The prefix is
//! copied untouched; only the suffix is decomposed, ordered and, for the
//! composed forms, recomposed.

use crate::compose::compose;
use crate::config::NormalizationForm;
use crate::decompose::{DecompositionMode, decompose_all};
use crate::event::{LogLevel, emit_log_with};
use crate::quick_check::{Scan, scan};
use crate::reorder::reorder;
use crate::tables::Tables;

/// Stage of a normalization call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Init,
    Scanned,
    Decomposed,
    Ordered,
    Composed,
    Done,
}

/// Output of [`normalize`] with the stages the call went through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalized {
    pub output: Vec<u32>,
    pub stages: Vec<Stage>,
}

enum State {
    Init,
    Scanned(Scan),
    Decomposed { prefix: usize, buffer: Vec<u32> },
    Ordered { prefix: usize, buffer: Vec<u32> },
    Composed { prefix: usize, buffer: Vec<u32> },
    Done(Vec<u32>),
}

impl State {
    const fn stage(&self) -> Stage {
        match self {
            Self::Init => Stage::Init,
            Self::Scanned(_) => Stage::Scanned,
            Self::Decomposed { .. } => Stage::Decomposed,
            Self::Ordered { .. } => Stage::Ordered,
            Self::Composed { .. } => Stage::Composed,
            Self::Done(_) => Stage::Done,
        }
    }
}

/// Normalize `codepoints` to `form`.
///
/// Every input value is treated as a codepoint; callers strip malformed
/// elements first.
#[must_use]
pub fn normalize(tables: &Tables<'_>, codepoints: &[u32], form: NormalizationForm) -> Normalized {
    let mut state = State::Init;
    let mut stages = vec![Stage::Init];

    loop {
        state = match state {
            State::Init => State::Scanned(scan(tables, codepoints, form)),
            State::Scanned(result) if result.is_yes() => State::Done(codepoints.to_vec()),
            State::Scanned(result) => {
                let prefix = result.safe_start;
                let suffix = &codepoints[prefix..];
                emit_log_with(LogLevel::Debug, || {
                    format!(
                        "{form}: processing {} of {} codepoints from offset {prefix}",
                        suffix.len(),
                        codepoints.len()
                    )
                });
                State::Decomposed {
                    prefix,
                    buffer: decompose_all(tables, suffix, DecompositionMode::from(form)),
                }
            }
            State::Decomposed { prefix, mut buffer } => {
                reorder(tables, &mut buffer);
                State::Ordered { prefix, buffer }
            }
            State::Ordered { prefix, mut buffer } if form.is_composed() => {
                compose(tables, &mut buffer);
                State::Composed { prefix, buffer }
            }
            State::Ordered { prefix, buffer } | State::Composed { prefix, buffer } => {
                let mut output = Vec::with_capacity(prefix + buffer.len());
                output.extend_from_slice(&codepoints[..prefix]);
                output.extend(buffer);
                State::Done(output)
            }
            State::Done(output) => return Normalized { output, stages },
        };
        stages.push(state.stage());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(cps: &[u32], form: NormalizationForm) -> Normalized {
        normalize(Tables::unicode(), cps, form)
    }

    #[test]
    fn test_normalized_input_skips_processing() {
        let result = run(&[0x68, 0x69, 0xE9], NormalizationForm::Nfc);
        assert_eq!(result.output, vec![0x68, 0x69, 0xE9]);
        assert_eq!(result.stages, vec![Stage::Init, Stage::Scanned, Stage::Done]);
    }

    #[test]
    fn test_composed_forms_visit_every_stage() {
        let result = run(&[0x65, 0x301], NormalizationForm::Nfc);
        assert_eq!(result.output, vec![0xE9]);
        assert_eq!(
            result.stages,
            vec![
                Stage::Init,
                Stage::Scanned,
                Stage::Decomposed,
                Stage::Ordered,
                Stage::Composed,
                Stage::Done,
            ]
        );
    }

    #[test]
    fn test_decomposed_forms_skip_composition() {
        let result = run(&[0xE9], NormalizationForm::Nfd);
        assert_eq!(result.output, vec![0x65, 0x301]);
        assert!(!result.stages.contains(&Stage::Composed));
        assert_eq!(result.stages.last(), Some(&Stage::Done));
    }

    #[test]
    fn test_prefix_is_kept() {
        // "abc" + e + ACUTE + DOT BELOW: only the tail from "e" is processed
        let cps = [0x61, 0x62, 0x63, 0x65, 0x301, 0x323];
        assert_eq!(
            run(&cps, NormalizationForm::Nfc).output,
            vec![0x61, 0x62, 0x63, 0x1EB9, 0x301]
        );
        assert_eq!(
            run(&cps, NormalizationForm::Nfd).output,
            vec![0x61, 0x62, 0x63, 0x65, 0x323, 0x301]
        );
    }

    #[test]
    fn test_compatibility_forms() {
        // fi ligature, superscript five, e + ACUTE
        let cps = [0xFB01, 0x2075, 0x65, 0x301];
        assert_eq!(
            run(&cps, NormalizationForm::Nfkc).output,
            vec![0x66, 0x69, 0x35, 0xE9]
        );
        assert_eq!(
            run(&cps, NormalizationForm::Nfkd).output,
            vec![0x66, 0x69, 0x35, 0x65, 0x301]
        );
        assert_eq!(run(&cps, NormalizationForm::Nfc).output, vec![0xFB01, 0x2075, 0xE9]);
    }

    #[test]
    fn test_empty_input() {
        let result = run(&[], NormalizationForm::Nfkc);
        assert!(result.output.is_empty());
        assert_eq!(result.stages, vec![Stage::Init, Stage::Scanned, Stage::Done]);
    }
}
