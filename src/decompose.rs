//! Full canonical and compatibility decomposition.

use crate::codepoint;
use crate::config::NormalizationForm;
use crate::event::{LogLevel, emit_log_with};
use crate::tables::{DecompositionRecord, DecompositionTag, Tables};

/// Substitutions allowed while decomposing one codepoint. The generated
/// data needs at most a handful; a table that exceeds this is cyclic or
/// self-expanding.
pub const MAX_EXPANSIONS: usize = 64;

/// Which mappings a decomposition applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecompositionMode {
    /// Canonical mappings only (NFD, NFC).
    Canonical,
    /// Compatibility mappings, then canonical ones (NFKD, NFKC).
    Compatibility,
}

impl From<NormalizationForm> for DecompositionMode {
    fn from(form: NormalizationForm) -> Self {
        if form.is_compatibility() {
            Self::Compatibility
        } else {
            Self::Canonical
        }
    }
}

/// One level of decomposition for `cp`, or `None` if it maps to itself.
fn mapping<'a>(tables: &Tables<'a>, cp: u32, mode: DecompositionMode) -> Option<&'a [u32]> {
    if mode == DecompositionMode::Compatibility {
        if let Some(mapping) = tables.decomposition(DecompositionTag::Compatibility, cp) {
            return Some(mapping);
        }
    }
    tables.decomposition(DecompositionTag::Canonical, cp)
}

/// Whether no table consulted in `mode` has a record below U+0080.
fn ascii_is_stable(tables: &Tables<'_>, mode: DecompositionMode) -> bool {
    let above_ascii = |records: &[DecompositionRecord<'_>]| {
        records.first().is_none_or(|record| record.codepoint >= 0x80)
    };
    above_ascii(tables.canonical_decomposition)
        && (mode == DecompositionMode::Canonical || above_ascii(tables.compatibility_decomposition))
}

/// Append the full decomposition of `cp` to `out`.
///
/// Mappings are substituted through an explicit work list until no
/// codepoint decomposes further, so nested table entries never recurse.
/// After [`MAX_EXPANSIONS`] substitutions the remaining codepoints are
/// emitted as they are and a warning is logged.
pub fn decompose(tables: &Tables<'_>, cp: u32, mode: DecompositionMode, out: &mut Vec<u32>) {
    if cp < 0x80 && ascii_is_stable(tables, mode) {
        out.push(cp);
        return;
    }

    let mut pending = vec![cp];
    let mut expansions = 0;
    let mut truncated = false;
    while let Some(next) = pending.pop() {
        if let Some((jamo, count)) = codepoint::decompose_hangul(next) {
            out.extend_from_slice(&jamo[..count]);
        } else if let Some(mapping) = mapping(tables, next, mode) {
            if expansions == MAX_EXPANSIONS {
                truncated = true;
                out.push(next);
            } else {
                expansions += 1;
                pending.extend(mapping.iter().rev());
            }
        } else {
            out.push(next);
        }
    }

    if truncated {
        emit_log_with(LogLevel::Warn, || {
            format!("decomposition of U+{cp:04X} stopped after {MAX_EXPANSIONS} substitutions")
        });
    }
}

/// Fully decompose every codepoint of `codepoints`.
#[must_use]
pub fn decompose_all(tables: &Tables<'_>, codepoints: &[u32], mode: DecompositionMode) -> Vec<u32> {
    let mut out = Vec::with_capacity(codepoints.len() + codepoints.len() / 2);
    for &cp in codepoints {
        decompose(tables, cp, mode, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::tables::{QuickCheck, RangeRecord};

    fn nfd(cps: &[u32]) -> Vec<u32> {
        decompose_all(Tables::unicode(), cps, DecompositionMode::Canonical)
    }

    fn nfkd(cps: &[u32]) -> Vec<u32> {
        decompose_all(Tables::unicode(), cps, DecompositionMode::Compatibility)
    }

    #[test]
    fn test_ascii_maps_to_itself() {
        assert_eq!(nfd(&[0x41, 0x7A]), vec![0x41, 0x7A]);
        assert_eq!(nfkd(&[]), Vec::<u32>::new());
    }

    #[test]
    fn test_canonical_decomposition() {
        assert_eq!(nfd(&[0xE9]), vec![0x65, 0x301]);
        // GREEK SMALL LETTER ALPHA WITH PSILI AND VARIA AND YPOGEGRAMMENI
        assert_eq!(nfd(&[0x1F82]), vec![0x3B1, 0x313, 0x300, 0x345]);
        // ANGSTROM SIGN is a singleton
        assert_eq!(nfd(&[0x212B]), vec![0x41, 0x30A]);
    }

    #[test]
    fn test_compatibility_decomposition() {
        assert_eq!(nfkd(&[0xFB01]), vec![0x66, 0x69]);
        assert_eq!(nfd(&[0xFB01]), vec![0xFB01]);
        // SQUARE APAATO expands to katakana with a voiced mark
        assert_eq!(nfkd(&[0x3300]), vec![0x30A2, 0x30CF, 0x309A, 0x30FC, 0x30C8]);
        // LATIN SMALL LETTER LONG S WITH DOT ABOVE has both kinds of mapping
        assert_eq!(nfd(&[0x1E9B]), vec![0x17F, 0x307]);
        assert_eq!(nfkd(&[0x1E9B]), vec![0x73, 0x307]);
    }

    #[test]
    fn test_hangul_is_algorithmic() {
        assert_eq!(nfd(&[0xD55C]), vec![0x1112, 0x1161, 0x11AB]);
        assert_eq!(nfkd(&[0xAC00]), vec![0x1100, 0x1161]);
        // Hangul works with no tables at all
        let empty = Tables::empty();
        assert_eq!(
            decompose_all(&empty, &[0xAC01], DecompositionMode::Canonical),
            vec![0x1100, 0x1161, 0x11A8]
        );
    }

    #[test]
    fn test_nested_mappings_expand_fully() {
        const CHAIN: &[DecompositionRecord<'static>] = &[
            DecompositionRecord::new(0x100, DecompositionTag::Canonical, &[0x101, 0x302]),
            DecompositionRecord::new(0x101, DecompositionTag::Canonical, &[0x102, 0x301]),
            DecompositionRecord::new(0x102, DecompositionTag::Canonical, &[0x61, 0x300]),
        ];
        let tables = Tables {
            canonical_decomposition: CHAIN,
            ..Tables::empty()
        };
        assert_eq!(
            decompose_all(&tables, &[0x100, 0x62], DecompositionMode::Canonical),
            vec![0x61, 0x300, 0x301, 0x302, 0x62]
        );
    }

    #[test]
    fn test_ascii_records_are_honoured() {
        const ASCII: &[DecompositionRecord<'static>] = &[
            DecompositionRecord::new(0x41, DecompositionTag::Canonical, &[0x61, 0x300]),
            DecompositionRecord::new(0x100, DecompositionTag::Canonical, &[0x61, 0x300]),
        ];
        const NO: &[RangeRecord<QuickCheck>] = &[
            RangeRecord::new(0x41, 0x41, QuickCheck::No),
            RangeRecord::new(0x100, 0x100, QuickCheck::No),
        ];
        let tables = Tables {
            canonical_decomposition: ASCII,
            quick_check_nfd: NO,
            ..Tables::empty()
        };

        let mut out = Vec::new();
        decompose(&tables, 0x41, DecompositionMode::Canonical, &mut out);
        assert_eq!(out, vec![0x61, 0x300]);
        assert_eq!(
            decompose_all(&tables, &[0x100, 0x42], DecompositionMode::Canonical),
            vec![0x61, 0x300, 0x42]
        );
        assert_eq!(
            normalize(&tables, &[0x41], NormalizationForm::Nfd).output,
            vec![0x61, 0x300]
        );
    }

    #[test]
    fn test_ascii_compatibility_records_only_apply_in_compatibility_mode() {
        const COMPAT: &[DecompositionRecord<'static>] =
            &[DecompositionRecord::new(0x5A, DecompositionTag::Compatibility, &[0x7A])];
        let tables = Tables {
            compatibility_decomposition: COMPAT,
            ..Tables::empty()
        };
        assert_eq!(decompose_all(&tables, &[0x5A], DecompositionMode::Canonical), vec![0x5A]);
        assert_eq!(decompose_all(&tables, &[0x5A], DecompositionMode::Compatibility), vec![0x7A]);
    }

    #[test]
    fn test_self_expanding_table_terminates() {
        const GROWING: &[DecompositionRecord<'static>] =
            &[DecompositionRecord::new(0x100, DecompositionTag::Canonical, &[0x100, 0x100])];
        let tables = Tables {
            canonical_decomposition: GROWING,
            ..Tables::empty()
        };
        let out = decompose_all(&tables, &[0x100], DecompositionMode::Canonical);
        assert_eq!(out.len(), MAX_EXPANSIONS + 1);
        assert!(out.iter().all(|&cp| cp == 0x100));
    }

    #[test]
    fn test_cyclic_table_terminates() {
        const CYCLE: &[DecompositionRecord<'static>] = &[
            DecompositionRecord::new(0x100, DecompositionTag::Canonical, &[0x101]),
            DecompositionRecord::new(0x101, DecompositionTag::Canonical, &[0x100]),
        ];
        let tables = Tables {
            canonical_decomposition: CYCLE,
            ..Tables::empty()
        };
        assert_eq!(
            decompose_all(&tables, &[0x100, 0x62], DecompositionMode::Canonical),
            vec![0x100, 0x62]
        );
    }

    #[test]
    fn test_generated_data_stays_under_expansion_limit() {
        let tables = Tables::unicode();
        for record in tables
            .canonical_decomposition
            .iter()
            .chain(tables.compatibility_decomposition)
        {
            let mut pending = vec![record.codepoint];
            let mut expansions = 0;
            while let Some(next) = pending.pop() {
                if let Some(mapping) = mapping(tables, next, DecompositionMode::Compatibility) {
                    expansions += 1;
                    pending.extend(mapping.iter().rev());
                }
            }
            assert!(expansions < MAX_EXPANSIONS, "U+{:04X}", record.codepoint);
        }
    }
}
