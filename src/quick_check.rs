//! Quick-check scanning (UAX #15 section 9).
//!
//! The scanner classifies a codepoint sequence as definitely normalized,
//! definitely not normalized, or undecided, and locates the earliest point
//! from which processing must start. Everything before [`Scan::safe_start`]
//! is already in the requested form and never interacts with what follows.

use crate::config::NormalizationForm;
use crate::normalize;
use crate::tables::{QuickCheck, Tables};

/// Result of a quick-check scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scan {
    /// `No` at the first definite failure, `Maybe` if any codepoint was
    /// undecided, `Yes` otherwise.
    pub status: QuickCheck,
    /// Index of the first codepoint that is not `Yes` or is out of canonical
    /// order; the input length when there is none.
    pub first_unstable: usize,
    /// Index of the last starter with quick-check `Yes` at or before
    /// `first_unstable`; 0 when there is none.
    pub safe_start: usize,
}

impl Scan {
    #[must_use]
    pub const fn is_yes(&self) -> bool {
        matches!(self.status, QuickCheck::Yes)
    }
}

/// Scan `codepoints` for `form`.
///
/// Stops at the first definite failure. An empty input is `Yes`.
#[must_use]
pub fn scan(tables: &Tables<'_>, codepoints: &[u32], form: NormalizationForm) -> Scan {
    let mut status = QuickCheck::Yes;
    let mut first_unstable = codepoints.len();
    let mut safe_start = 0;
    let mut last_class = 0u8;

    for (index, &cp) in codepoints.iter().enumerate() {
        let class = tables.combining_class(cp);
        if class != 0 && last_class > class {
            status = QuickCheck::No;
            first_unstable = first_unstable.min(index);
            break;
        }

        match tables.quick_check(form, cp) {
            QuickCheck::Yes => {
                if class == 0 && index < first_unstable {
                    safe_start = index;
                }
            }
            QuickCheck::Maybe => {
                status = QuickCheck::Maybe;
                first_unstable = first_unstable.min(index);
            }
            QuickCheck::No => {
                status = QuickCheck::No;
                first_unstable = first_unstable.min(index);
                break;
            }
        }
        last_class = class;
    }

    Scan {
        status,
        first_unstable,
        safe_start,
    }
}

/// Exact normalization check.
///
/// `Maybe` results are resolved by normalizing the undecided suffix and
/// comparing it with the input.
#[must_use]
pub fn is_normalized(tables: &Tables<'_>, codepoints: &[u32], form: NormalizationForm) -> bool {
    let result = scan(tables, codepoints, form);
    match result.status {
        QuickCheck::Yes => true,
        QuickCheck::No => false,
        QuickCheck::Maybe => {
            let suffix = &codepoints[result.safe_start..];
            normalize::normalize(tables, suffix, form).output == suffix
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::RangeRecord;

    fn scan_nfc(cps: &[u32]) -> Scan {
        scan(Tables::unicode(), cps, NormalizationForm::Nfc)
    }

    #[test]
    fn test_empty_is_yes() {
        let result = scan_nfc(&[]);
        assert_eq!(result.status, QuickCheck::Yes);
        assert_eq!(result.first_unstable, 0);
        assert_eq!(result.safe_start, 0);
        assert!(is_normalized(Tables::unicode(), &[], NormalizationForm::Nfd));
    }

    #[test]
    fn test_ascii_is_yes() {
        let text: Vec<u32> = "hello world".chars().map(u32::from).collect();
        for form in NormalizationForm::ALL {
            assert!(scan(Tables::unicode(), &text, form).is_yes());
        }
    }

    #[test]
    fn test_combining_mark_is_maybe_for_nfc() {
        // "cafe" + COMBINING ACUTE
        let cps = [0x63, 0x61, 0x66, 0x65, 0x301];
        let result = scan_nfc(&cps);
        assert_eq!(result.status, QuickCheck::Maybe);
        assert_eq!(result.first_unstable, 4);
        assert_eq!(result.safe_start, 3);
        assert!(!is_normalized(Tables::unicode(), &cps, NormalizationForm::Nfc));
        assert!(is_normalized(Tables::unicode(), &cps, NormalizationForm::Nfd));
    }

    #[test]
    fn test_unmatched_maybe_resolves_to_normalized() {
        // x + COMBINING ACUTE has no precomposed form
        let cps = [0x78, 0x301];
        assert_eq!(scan_nfc(&cps).status, QuickCheck::Maybe);
        assert!(is_normalized(Tables::unicode(), &cps, NormalizationForm::Nfc));
    }

    #[test]
    fn test_precomposed_is_no_for_nfd() {
        let cps = [0x61, 0x62, 0xE9, 0x63];
        let result = scan(Tables::unicode(), &cps, NormalizationForm::Nfd);
        assert_eq!(result.status, QuickCheck::No);
        assert_eq!(result.first_unstable, 2);
        assert_eq!(result.safe_start, 1);
    }

    #[test]
    fn test_out_of_order_marks_are_no() {
        // a + ACUTE (230) + DOT BELOW (220)
        let cps = [0x61, 0x301, 0x323];
        let result = scan(Tables::unicode(), &cps, NormalizationForm::Nfd);
        assert_eq!(result.status, QuickCheck::No);
        assert_eq!(result.first_unstable, 2);
        assert_eq!(result.safe_start, 0);
    }

    #[test]
    fn test_safe_start_skips_non_yes_starters() {
        const QC: &[RangeRecord<QuickCheck>] = &[
            RangeRecord::new(0x42, 0x42, QuickCheck::Maybe),
            RangeRecord::new(0x43, 0x43, QuickCheck::No),
        ];
        let tables = Tables {
            quick_check_nfc: QC,
            ..Tables::empty()
        };
        // A B A C: B is Maybe, so the second A is past the first unstable point
        let result = scan(&tables, &[0x41, 0x42, 0x41, 0x43], NormalizationForm::Nfc);
        assert_eq!(result.status, QuickCheck::No);
        assert_eq!(result.first_unstable, 1);
        assert_eq!(result.safe_start, 0);
    }
}
