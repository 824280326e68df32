//! Canonical composition.

use crate::codepoint;
use crate::tables::Tables;

/// Primary composite of `first` followed by `second`.
///
/// Hangul LV and LVT syllables are composed arithmetically. Table composites
/// that are full composition exclusions are never produced.
#[inline]
#[must_use]
pub fn compose_pair(tables: &Tables<'_>, first: u32, second: u32) -> Option<u32> {
    if let Some(syllable) = codepoint::compose_hangul(first, second) {
        return Some(syllable);
    }
    tables
        .composition(first, second)
        .filter(|&composed| !tables.is_composition_excluded(composed))
}

/// Canonically compose a decomposed, canonically ordered sequence in place.
///
/// A mark combines with the last starter unless it is blocked: some
/// codepoint between them has a class that is zero or at least the mark's
/// own. Composition never crosses into the next combining sequence. Leading
/// non-starters have no starter to combine with and are left alone.
pub fn compose(tables: &Tables<'_>, codepoints: &mut Vec<u32>) {
    let Some(&first) = codepoints.first() else {
        return;
    };

    let mut starter_pos = 0;
    let mut starter = first;
    // 256 blocks everything until the first real starter.
    let mut last_class: u16 = if tables.combining_class(first) == 0 {
        0
    } else {
        256
    };
    let mut write = 1;

    for read in 1..codepoints.len() {
        let cp = codepoints[read];
        let class = u16::from(tables.combining_class(cp));

        if last_class < class || last_class == 0 {
            if let Some(composed) = compose_pair(tables, starter, cp) {
                codepoints[starter_pos] = composed;
                starter = composed;
                continue;
            }
        }

        if class == 0 {
            starter_pos = write;
            starter = cp;
        }
        last_class = class;
        codepoints[write] = cp;
        write += 1;
    }

    codepoints.truncate(write);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{CompositionRecord, RangeRecord};

    fn composed(cps: &[u32]) -> Vec<u32> {
        let mut out = cps.to_vec();
        compose(Tables::unicode(), &mut out);
        out
    }

    #[test]
    fn test_simple_pair() {
        assert_eq!(composed(&[0x65, 0x301]), vec![0xE9]);
        assert_eq!(compose_pair(Tables::unicode(), 0x41, 0x30A), Some(0xC5));
    }

    #[test]
    fn test_multiple_marks() {
        // d + DOT BELOW + DOT ABOVE -> d with dot below, then dot above
        assert_eq!(composed(&[0x64, 0x323, 0x307]), vec![0x1E0D, 0x307]);
        // u + DIAERESIS + MACRON composes twice
        assert_eq!(composed(&[0x75, 0x308, 0x304]), vec![0x1D6]);
    }

    #[test]
    fn test_blocked_mark_does_not_compose() {
        // a + GRAVE + ACUTE: the second 230 mark is blocked by the first
        assert_eq!(composed(&[0x61, 0x300, 0x301]), vec![0xE0, 0x301]);
        // a + DOT BELOW (220) + GRAVE (230): grave is not blocked
        assert_eq!(composed(&[0x61, 0x323, 0x300]), vec![0x1EA1, 0x300]);
    }

    #[test]
    fn test_starter_pairs_compose_when_adjacent() {
        // ORIYA VOWEL SIGN E + AA
        assert_eq!(composed(&[0xB47, 0xB3E]), vec![0xB4B]);
        // Hangul LV then T
        assert_eq!(composed(&[0x1100, 0x1161, 0x11A8]), vec![0xAC01]);
        assert_eq!(composed(&[0x1100, 0x1161]), vec![0xAC00]);
    }

    #[test]
    fn test_hangul_blocked_by_mark() {
        assert_eq!(
            composed(&[0x1100, 0x1161, 0x300, 0x11A8]),
            vec![0xAC00, 0x300, 0x11A8]
        );
    }

    #[test]
    fn test_leading_non_starter() {
        assert_eq!(composed(&[0x301, 0x65]), vec![0x301, 0x65]);
        assert_eq!(composed(&[0x301, 0x301]), vec![0x301, 0x301]);
        assert_eq!(composed(&[0x301, 0x65, 0x301]), vec![0x301, 0xE9]);
        assert_eq!(composed(&[]), Vec::<u32>::new());
    }

    #[test]
    fn test_exclusions_are_never_produced() {
        // DEVANAGARI KA + NUKTA would compose to U+0958, which is excluded
        assert_eq!(composed(&[0x915, 0x93C]), vec![0x915, 0x93C]);
        assert_eq!(compose_pair(Tables::unicode(), 0x915, 0x93C), None);
    }

    #[test]
    fn test_synthetic_excluded_pair() {
        const PAIRS: &[CompositionRecord] = &[
            CompositionRecord::new(0x41, 0x42, 0x100),
            CompositionRecord::new(0x41, 0x43, 0x101),
        ];
        const EXCLUDED: &[RangeRecord<()>] = &[RangeRecord::new(0x101, 0x101, ())];
        let tables = Tables {
            composition: PAIRS,
            composition_exclusions: EXCLUDED,
            ..Tables::empty()
        };
        let mut cps = vec![0x41, 0x42, 0x41, 0x43];
        compose(&tables, &mut cps);
        assert_eq!(cps, vec![0x100, 0x41, 0x43]);
    }

    #[test]
    fn test_idempotent() {
        let once = composed(&[0x61, 0x323, 0x302, 0x1100, 0x1161, 0x11A8]);
        assert_eq!(composed(&once), once);
    }
}
