//! Locale-aware case mapping.
//!
//! Full case mappings come from the property tables. On top of those, the
//! mapper applies the contextual rules of SpecialCasing: Final_Sigma for
//! every locale, plus the Turkish/Azeri and Lithuanian tailorings.
//!
//! Case mapping never normalizes. Run a normalization pass afterwards when
//! the result must be in a particular form.

use bitflags::bitflags;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::{CaseTarget, Locale};
use crate::tables::{CaseFlags, Tables};

const CAPITAL_I: u32 = 0x0049;
const CAPITAL_J: u32 = 0x004A;
const SMALL_I: u32 = 0x0069;
const CAPITAL_I_GRAVE: u32 = 0x00CC;
const CAPITAL_I_ACUTE: u32 = 0x00CD;
const CAPITAL_I_TILDE: u32 = 0x0128;
const CAPITAL_I_OGONEK: u32 = 0x012E;
const CAPITAL_I_DOT: u32 = 0x0130;
const COMBINING_DOT_ABOVE: u32 = 0x0307;
const CAPITAL_SIGMA: u32 = 0x03A3;

const CLASS_ABOVE: u8 = 230;

bitflags! {
    /// Casing contexts that hold at one position of a sequence.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Condition: u8 {
        /// Preceded by a cased letter and not followed by one, ignoring
        /// case-ignorable codepoints in both directions.
        const FINAL_SIGMA = 1 << 0;
        /// A soft-dotted letter precedes, with no intervening class 0 or 230.
        const AFTER_SOFT_DOTTED = 1 << 1;
        /// A class 230 mark follows, with no intervening class 0 or 230.
        const MORE_ABOVE = 1 << 2;
        /// A capital I precedes, with no intervening class 0 or 230.
        const AFTER_I = 1 << 3;
        /// U+0307 follows, with no intervening class 0 or 230.
        const BEFORE_DOT = 1 << 4;
    }
}

/// Result of mapping one codepoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mapping<'a> {
    /// The codepoint maps to itself.
    Unchanged(u32),
    /// The codepoint maps to this sequence, which may be empty.
    Mapped(&'a [u32]),
}

impl Mapping<'_> {
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        match self {
            Self::Unchanged(cp) => std::slice::from_ref(cp),
            Self::Mapped(mapping) => *mapping,
        }
    }
}

/// Case mapper bound to a table handle and a locale.
#[derive(Clone, Copy, Debug)]
pub struct CaseMapper<'a> {
    tables: &'a Tables<'a>,
    locale: Locale,
}

impl<'a> CaseMapper<'a> {
    #[must_use]
    pub const fn new(tables: &'a Tables<'a>, locale: Locale) -> Self {
        Self { tables, locale }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Map `cp` with no surrounding context.
    ///
    /// For [`CaseTarget::Title`], `first_letter` selects the titlecase
    /// mapping; otherwise the lowercase mapping applies.
    #[must_use]
    pub fn map(&self, cp: u32, target: CaseTarget, first_letter: bool) -> Mapping<'a> {
        self.map_in_context(cp, target, first_letter, Condition::empty())
    }

    /// Map `cp` given the contexts that hold at its position.
    #[must_use]
    pub fn map_in_context(
        &self,
        cp: u32,
        target: CaseTarget,
        first_letter: bool,
        conditions: Condition,
    ) -> Mapping<'a> {
        let target = match target {
            CaseTarget::Title if !first_letter => CaseTarget::Lower,
            other => other,
        };

        if let Some(special) = self.special(cp, target, conditions) {
            return Mapping::Mapped(special);
        }
        self.tables
            .case_mapping(target, cp)
            .map_or(Mapping::Unchanged(cp), Mapping::Mapped)
    }

    fn special(&self, cp: u32, target: CaseTarget, conditions: Condition) -> Option<&'static [u32]> {
        match (self.locale, target) {
            (Locale::Turkish, CaseTarget::Lower) => match cp {
                CAPITAL_I_DOT => return Some(&[SMALL_I]),
                COMBINING_DOT_ABOVE if conditions.contains(Condition::AFTER_I) => return Some(&[]),
                CAPITAL_I if !conditions.contains(Condition::BEFORE_DOT) => return Some(&[0x0131]),
                _ => {}
            },
            (Locale::Turkish, CaseTarget::Upper | CaseTarget::Title) => {
                if cp == SMALL_I {
                    return Some(&[CAPITAL_I_DOT]);
                }
            }
            (Locale::Turkish, CaseTarget::Fold) => match cp {
                CAPITAL_I => return Some(&[0x0131]),
                CAPITAL_I_DOT => return Some(&[SMALL_I]),
                _ => {}
            },
            (Locale::Lithuanian, CaseTarget::Lower) => {
                let more_above = conditions.contains(Condition::MORE_ABOVE);
                match cp {
                    CAPITAL_I if more_above => return Some(&[SMALL_I, COMBINING_DOT_ABOVE]),
                    CAPITAL_J if more_above => return Some(&[0x006A, COMBINING_DOT_ABOVE]),
                    CAPITAL_I_OGONEK if more_above => {
                        return Some(&[0x012F, COMBINING_DOT_ABOVE]);
                    }
                    CAPITAL_I_GRAVE => return Some(&[SMALL_I, COMBINING_DOT_ABOVE, 0x0300]),
                    CAPITAL_I_ACUTE => return Some(&[SMALL_I, COMBINING_DOT_ABOVE, 0x0301]),
                    CAPITAL_I_TILDE => return Some(&[SMALL_I, COMBINING_DOT_ABOVE, 0x0303]),
                    _ => {}
                }
            }
            (Locale::Lithuanian, CaseTarget::Upper | CaseTarget::Title) => {
                if cp == COMBINING_DOT_ABOVE && conditions.contains(Condition::AFTER_SOFT_DOTTED) {
                    return Some(&[]);
                }
            }
            _ => {}
        }

        if target == CaseTarget::Lower
            && cp == CAPITAL_SIGMA
            && conditions.contains(Condition::FINAL_SIGMA)
        {
            return Some(&[0x03C2]);
        }
        None
    }

    /// Contexts that can affect the mapping of `codepoints[index]`.
    ///
    /// Only the conditions some rule consults for that codepoint are
    /// computed; the rest are left unset.
    #[must_use]
    pub fn conditions_at(&self, codepoints: &[u32], index: usize) -> Condition {
        let mut conditions = Condition::empty();
        match codepoints.get(index).copied() {
            Some(CAPITAL_SIGMA) => {
                conditions.set(Condition::FINAL_SIGMA, self.is_final_sigma(codepoints, index));
            }
            Some(COMBINING_DOT_ABOVE) => {
                let before = &codepoints[..index];
                conditions.set(
                    Condition::AFTER_I,
                    self.scan_back(before, |_, cp| cp == CAPITAL_I),
                );
                conditions.set(
                    Condition::AFTER_SOFT_DOTTED,
                    self.scan_back(before, |tables, cp| tables.is_soft_dotted(cp)),
                );
            }
            Some(CAPITAL_I | CAPITAL_J | CAPITAL_I_OGONEK) => {
                let after = &codepoints[index + 1..];
                conditions.set(
                    Condition::MORE_ABOVE,
                    self.scan_forward(after, |tables, cp| {
                        tables.combining_class(cp) == CLASS_ABOVE
                    }),
                );
                conditions.set(
                    Condition::BEFORE_DOT,
                    self.scan_forward(after, |_, cp| cp == COMBINING_DOT_ABOVE),
                );
            }
            _ => {}
        }
        conditions
    }

    fn is_final_sigma(&self, codepoints: &[u32], index: usize) -> bool {
        let cased_before = self.first_non_ignorable(codepoints[..index].iter().rev().copied());
        let cased_after = self.first_non_ignorable(codepoints[index + 1..].iter().copied());
        cased_before && !cased_after
    }

    /// Whether the first non-case-ignorable codepoint is cased.
    fn first_non_ignorable(&self, codepoints: impl Iterator<Item = u32>) -> bool {
        for cp in codepoints {
            let flags = self.tables.case_flags(cp);
            if flags.contains(CaseFlags::CASE_IGNORABLE) {
                continue;
            }
            return flags.contains(CaseFlags::CASED);
        }
        false
    }

    /// Walk backwards until `found` matches or a class 0 or 230 codepoint
    /// ends the search.
    fn scan_back(&self, before: &[u32], found: impl Fn(&Tables<'a>, u32) -> bool) -> bool {
        for &cp in before.iter().rev() {
            if found(self.tables, cp) {
                return true;
            }
            let class = self.tables.combining_class(cp);
            if class == 0 || class == CLASS_ABOVE {
                return false;
            }
        }
        false
    }

    /// Walk forwards until `found` matches or a class 0 or 230 codepoint
    /// ends the search.
    fn scan_forward(&self, after: &[u32], found: impl Fn(&Tables<'a>, u32) -> bool) -> bool {
        for &cp in after {
            if found(self.tables, cp) {
                return true;
            }
            let class = self.tables.combining_class(cp);
            if class == 0 || class == CLASS_ABOVE {
                return false;
            }
        }
        false
    }

    /// Case-map a whole sequence.
    ///
    /// `word_start(i)` reports whether a word begins at index `i`; it is
    /// only consulted for [`CaseTarget::Title`], once per index in order.
    pub fn apply(
        &self,
        codepoints: &[u32],
        target: CaseTarget,
        mut word_start: impl FnMut(usize) -> bool,
    ) -> Vec<u32> {
        let mut out = Vec::with_capacity(codepoints.len());
        let mut seen_cased = false;

        for (index, &cp) in codepoints.iter().enumerate() {
            let first_letter = if target == CaseTarget::Title {
                if word_start(index) {
                    seen_cased = false;
                }
                let cased = self.tables.case_flags(cp).contains(CaseFlags::CASED);
                let first = cased && !seen_cased;
                seen_cased |= cased;
                first
            } else {
                false
            };

            let conditions = self.conditions_at(codepoints, index);
            out.extend_from_slice(
                self.map_in_context(cp, target, first_letter, conditions)
                    .as_slice(),
            );
        }
        out
    }
}

/// Word starts per UAX #29, one flag per codepoint.
///
/// Non-scalar values are treated as U+FFFD for segmentation.
#[must_use]
pub fn default_word_starts(codepoints: &[u32]) -> Vec<bool> {
    let mut text = String::with_capacity(codepoints.len());
    let mut offsets = Vec::with_capacity(codepoints.len());
    for &cp in codepoints {
        offsets.push(text.len());
        text.push(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    let mut starts = vec![false; codepoints.len()];
    for (byte, _) in text.split_word_bound_indices() {
        if let Ok(index) = offsets.binary_search(&byte) {
            starts[index] = true;
        }
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cps(text: &str) -> Vec<u32> {
        text.chars().map(u32::from).collect()
    }

    fn text(cps: &[u32]) -> String {
        cps.iter().filter_map(|&cp| char::from_u32(cp)).collect()
    }

    fn convert(input: &str, target: CaseTarget, locale: Locale) -> String {
        let mapper = CaseMapper::new(Tables::unicode(), locale);
        let input = cps(input);
        let starts = default_word_starts(&input);
        text(&mapper.apply(&input, target, |i| starts[i]))
    }

    #[test]
    fn test_context_free_map() {
        let mapper = CaseMapper::new(Tables::unicode(), Locale::Default);
        assert_eq!(
            mapper.map(0xDF, CaseTarget::Upper, false).as_slice(),
            &[0x53, 0x53]
        );
        assert_eq!(mapper.map(0x41, CaseTarget::Lower, false), Mapping::Mapped(&[0x61]));
        assert_eq!(mapper.map(0x31, CaseTarget::Upper, false), Mapping::Unchanged(0x31));
        // DZ digraph: titlecase only for the first letter of a word
        assert_eq!(mapper.map(0x1C6, CaseTarget::Title, true).as_slice(), &[0x1C5]);
        assert_eq!(mapper.map(0x1C4, CaseTarget::Title, false).as_slice(), &[0x1C6]);
    }

    #[test]
    fn test_full_mappings() {
        assert_eq!(convert("STRASSE", CaseTarget::Lower, Locale::Default), "strasse");
        assert_eq!(convert("straße", CaseTarget::Upper, Locale::Default), "STRASSE");
        assert_eq!(convert("Straße", CaseTarget::Fold, Locale::Default), "strasse");
        assert_eq!(convert("ŉ", CaseTarget::Upper, Locale::Default), "ʼN");
    }

    #[test]
    fn test_final_sigma() {
        assert_eq!(convert("ΟΔΟΣ", CaseTarget::Lower, Locale::Default), "οδος");
        assert_eq!(convert("ΟΔΟΣ.", CaseTarget::Lower, Locale::Default), "οδος.");
        // Case-ignorable apostrophe between the letter and sigma
        assert_eq!(convert("Α'Σ", CaseTarget::Lower, Locale::Default), "α'ς");
        // Lone sigma and sigma followed by a letter stay medial
        assert_eq!(convert("Σ", CaseTarget::Lower, Locale::Default), "σ");
        assert_eq!(convert("ΣΑ", CaseTarget::Lower, Locale::Default), "σα");
        // Folding ignores context
        assert_eq!(convert("ΟΣ", CaseTarget::Fold, Locale::Default), "οσ");
    }

    #[test]
    fn test_turkish() {
        assert_eq!(convert("i", CaseTarget::Upper, Locale::Turkish), "\u{130}");
        assert_eq!(convert("i", CaseTarget::Upper, Locale::Default), "I");
        assert_eq!(convert("I\u{130}", CaseTarget::Lower, Locale::Turkish), "\u{131}i");
        // I + COMBINING DOT ABOVE lowercases to a plain i
        assert_eq!(convert("I\u{307}", CaseTarget::Lower, Locale::Turkish), "i");
        assert_eq!(convert("istanbul", CaseTarget::Title, Locale::Turkish), "\u{130}stanbul");
        assert_eq!(convert("I\u{130}", CaseTarget::Fold, Locale::Turkish), "\u{131}i");
        assert_eq!(convert("I\u{130}", CaseTarget::Fold, Locale::Default), "ii\u{307}");
    }

    #[test]
    fn test_lithuanian() {
        // I followed by an accent above keeps its dot when lowercased
        assert_eq!(
            convert("I\u{300}", CaseTarget::Lower, Locale::Lithuanian),
            "i\u{307}\u{300}"
        );
        assert_eq!(convert("I", CaseTarget::Lower, Locale::Lithuanian), "i");
        assert_eq!(
            convert("\u{CD}", CaseTarget::Lower, Locale::Lithuanian),
            "i\u{307}\u{301}"
        );
        // The explicit dot disappears again when uppercasing
        assert_eq!(
            convert("i\u{307}\u{301}", CaseTarget::Upper, Locale::Lithuanian),
            "I\u{301}"
        );
        assert_eq!(
            convert("i\u{307}", CaseTarget::Upper, Locale::Default),
            "I\u{307}"
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(
            convert("hello wORLD", CaseTarget::Title, Locale::Default),
            "Hello World"
        );
        assert_eq!(convert("o'neil", CaseTarget::Title, Locale::Default), "O'neil");
        assert_eq!(convert("ǆemal", CaseTarget::Title, Locale::Default), "ǅemal");
        assert_eq!(convert("42nd st", CaseTarget::Title, Locale::Default), "42Nd St");
    }

    #[test]
    fn test_custom_word_starts() {
        let mapper = CaseMapper::new(Tables::unicode(), Locale::Default);
        let input = cps("abcdef");
        let out = mapper.apply(&input, CaseTarget::Title, |i| i % 3 == 0);
        assert_eq!(text(&out), "AbcDef");
        let out = mapper.apply(&input, CaseTarget::Title, |_| false);
        assert_eq!(text(&out), "Abcdef");
    }

    #[test]
    fn test_default_word_starts() {
        let starts = default_word_starts(&cps("ab cd"));
        assert_eq!(starts, vec![true, false, true, true, false]);
        assert!(default_word_starts(&[]).is_empty());
        assert_eq!(default_word_starts(&[0xD800, 0x61]), vec![true, true]);
    }
}
