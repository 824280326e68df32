//! Read-only Unicode property tables.
//!
//! Every algorithm in this crate receives a [`Tables`] handle explicitly. The
//! generated Unicode data is available through [`Tables::unicode`]; tests and
//! embedders may build their own handle from synthetic record slices.
//!
//! All record slices must be sorted ascending by key. Ranges must not
//! overlap. A codepoint without a record takes the default value: quick-check
//! `Yes`, combining class 0, no decomposition, no case mapping, no flags,
//! general category [`Category::UNASSIGNED`].

mod data;
pub mod lookup;

use std::cmp::Ordering;

use bitflags::bitflags;

use crate::config::{CaseTarget, NormalizationForm};
pub use lookup::{Keyed, find, position};

/// Unicode version the generated tables were built from.
pub const UNICODE_VERSION: (u8, u8, u8) = data::UNICODE_VERSION;

/// Quick-check property value for one normalization form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuickCheck {
    /// The codepoint never needs processing for this form.
    #[default]
    Yes,
    /// The codepoint may need processing depending on its neighbours.
    Maybe,
    /// The codepoint never survives this form unchanged.
    No,
}

bitflags! {
    /// Case-related properties consulted by contextual case mapping.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CaseFlags: u8 {
        /// `Cased` derived property.
        const CASED = 1 << 0;
        /// `Case_Ignorable` derived property.
        const CASE_IGNORABLE = 1 << 1;
    }
}

bitflags! {
    /// Unicode General_Category.
    ///
    /// Every codepoint has exactly one single-bit value. The group constants
    /// (`LETTER`, `MARK`, ...) are masks for [`Tables::is_category`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Category: u32 {
        const LETTER_UPPERCASE = 1 << 0;
        const LETTER_LOWERCASE = 1 << 1;
        const LETTER_TITLECASE = 1 << 2;
        const LETTER_MODIFIER = 1 << 3;
        const LETTER_OTHER = 1 << 4;
        const MARK_NON_SPACING = 1 << 5;
        const MARK_SPACING = 1 << 6;
        const MARK_ENCLOSING = 1 << 7;
        const NUMBER_DECIMAL = 1 << 8;
        const NUMBER_LETTER = 1 << 9;
        const NUMBER_OTHER = 1 << 10;
        const PUNCTUATION_CONNECTOR = 1 << 11;
        const PUNCTUATION_DASH = 1 << 12;
        const PUNCTUATION_OPEN = 1 << 13;
        const PUNCTUATION_CLOSE = 1 << 14;
        const PUNCTUATION_INITIAL = 1 << 15;
        const PUNCTUATION_FINAL = 1 << 16;
        const PUNCTUATION_OTHER = 1 << 17;
        const SYMBOL_MATH = 1 << 18;
        const SYMBOL_CURRENCY = 1 << 19;
        const SYMBOL_MODIFIER = 1 << 20;
        const SYMBOL_OTHER = 1 << 21;
        const SEPARATOR_SPACE = 1 << 22;
        const SEPARATOR_LINE = 1 << 23;
        const SEPARATOR_PARAGRAPH = 1 << 24;
        const CONTROL = 1 << 25;
        const FORMAT = 1 << 26;
        const SURROGATE = 1 << 27;
        const PRIVATE_USE = 1 << 28;
        const UNASSIGNED = 1 << 29;

        /// Lu, Ll and Lt.
        const CASED_LETTER = Self::LETTER_UPPERCASE.bits()
            | Self::LETTER_LOWERCASE.bits()
            | Self::LETTER_TITLECASE.bits();
        const LETTER = Self::CASED_LETTER.bits()
            | Self::LETTER_MODIFIER.bits()
            | Self::LETTER_OTHER.bits();
        const MARK = Self::MARK_NON_SPACING.bits()
            | Self::MARK_SPACING.bits()
            | Self::MARK_ENCLOSING.bits();
        const NUMBER = Self::NUMBER_DECIMAL.bits()
            | Self::NUMBER_LETTER.bits()
            | Self::NUMBER_OTHER.bits();
        const PUNCTUATION = Self::PUNCTUATION_CONNECTOR.bits()
            | Self::PUNCTUATION_DASH.bits()
            | Self::PUNCTUATION_OPEN.bits()
            | Self::PUNCTUATION_CLOSE.bits()
            | Self::PUNCTUATION_INITIAL.bits()
            | Self::PUNCTUATION_FINAL.bits()
            | Self::PUNCTUATION_OTHER.bits();
        const SYMBOL = Self::SYMBOL_MATH.bits()
            | Self::SYMBOL_CURRENCY.bits()
            | Self::SYMBOL_MODIFIER.bits()
            | Self::SYMBOL_OTHER.bits();
        const SEPARATOR = Self::SEPARATOR_SPACE.bits()
            | Self::SEPARATOR_LINE.bits()
            | Self::SEPARATOR_PARAGRAPH.bits();
        const OTHER = Self::CONTROL.bits()
            | Self::FORMAT.bits()
            | Self::SURROGATE.bits()
            | Self::PRIVATE_USE.bits()
            | Self::UNASSIGNED.bits();
    }
}

const ABBREVIATIONS: [(Category, &str); 30] = [
    (Category::LETTER_UPPERCASE, "Lu"),
    (Category::LETTER_LOWERCASE, "Ll"),
    (Category::LETTER_TITLECASE, "Lt"),
    (Category::LETTER_MODIFIER, "Lm"),
    (Category::LETTER_OTHER, "Lo"),
    (Category::MARK_NON_SPACING, "Mn"),
    (Category::MARK_SPACING, "Mc"),
    (Category::MARK_ENCLOSING, "Me"),
    (Category::NUMBER_DECIMAL, "Nd"),
    (Category::NUMBER_LETTER, "Nl"),
    (Category::NUMBER_OTHER, "No"),
    (Category::PUNCTUATION_CONNECTOR, "Pc"),
    (Category::PUNCTUATION_DASH, "Pd"),
    (Category::PUNCTUATION_OPEN, "Ps"),
    (Category::PUNCTUATION_CLOSE, "Pe"),
    (Category::PUNCTUATION_INITIAL, "Pi"),
    (Category::PUNCTUATION_FINAL, "Pf"),
    (Category::PUNCTUATION_OTHER, "Po"),
    (Category::SYMBOL_MATH, "Sm"),
    (Category::SYMBOL_CURRENCY, "Sc"),
    (Category::SYMBOL_MODIFIER, "Sk"),
    (Category::SYMBOL_OTHER, "So"),
    (Category::SEPARATOR_SPACE, "Zs"),
    (Category::SEPARATOR_LINE, "Zl"),
    (Category::SEPARATOR_PARAGRAPH, "Zp"),
    (Category::CONTROL, "Cc"),
    (Category::FORMAT, "Cf"),
    (Category::SURROGATE, "Cs"),
    (Category::PRIVATE_USE, "Co"),
    (Category::UNASSIGNED, "Cn"),
];

impl Category {
    /// Two-letter property value alias (`"Lu"`, `"Mn"`, ...) of a single
    /// category; `None` for masks.
    #[must_use]
    pub fn abbreviation(self) -> Option<&'static str> {
        ABBREVIATIONS
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, abbreviation)| *abbreviation)
    }

    /// Inverse of [`Category::abbreviation`].
    #[must_use]
    pub fn from_abbreviation(abbreviation: &str) -> Option<Self> {
        ABBREVIATIONS
            .iter()
            .find(|(_, candidate)| *candidate == abbreviation)
            .map(|(category, _)| *category)
    }
}

/// A value attached to an inclusive codepoint range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeRecord<V> {
    pub first: u32,
    pub last: u32,
    pub value: V,
}

impl<V> RangeRecord<V> {
    #[must_use]
    pub const fn new(first: u32, last: u32, value: V) -> Self {
        Self { first, last, value }
    }

    #[must_use]
    pub const fn contains(&self, codepoint: u32) -> bool {
        self.first <= codepoint && codepoint <= self.last
    }
}

impl<V> Keyed<u32> for RangeRecord<V> {
    fn cmp_key(&self, key: &u32) -> Ordering {
        if self.last < *key {
            Ordering::Less
        } else if self.first > *key {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Kind of a decomposition mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecompositionTag {
    Canonical,
    Compatibility,
}

/// Decomposition mapping for a single codepoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecompositionRecord<'a> {
    pub codepoint: u32,
    pub tag: DecompositionTag,
    pub mapping: &'a [u32],
}

impl<'a> DecompositionRecord<'a> {
    #[must_use]
    pub const fn new(codepoint: u32, tag: DecompositionTag, mapping: &'a [u32]) -> Self {
        Self {
            codepoint,
            tag,
            mapping,
        }
    }
}

impl Keyed<u32> for DecompositionRecord<'_> {
    fn cmp_key(&self, key: &u32) -> Ordering {
        self.codepoint.cmp(key)
    }
}

/// Primary composite for an ordered pair of codepoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompositionRecord {
    pub first: u32,
    pub second: u32,
    pub composed: u32,
}

impl CompositionRecord {
    #[must_use]
    pub const fn new(first: u32, second: u32, composed: u32) -> Self {
        Self {
            first,
            second,
            composed,
        }
    }
}

impl Keyed<(u32, u32)> for CompositionRecord {
    fn cmp_key(&self, key: &(u32, u32)) -> Ordering {
        (self.first, self.second).cmp(key)
    }
}

/// Full case mapping for a single codepoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseRecord<'a> {
    pub codepoint: u32,
    pub mapping: &'a [u32],
}

impl<'a> CaseRecord<'a> {
    #[must_use]
    pub const fn new(codepoint: u32, mapping: &'a [u32]) -> Self {
        Self { codepoint, mapping }
    }
}

impl Keyed<u32> for CaseRecord<'_> {
    fn cmp_key(&self, key: &u32) -> Ordering {
        self.codepoint.cmp(key)
    }
}

/// Handle over every property table the engine reads.
#[derive(Clone, Copy, Debug)]
pub struct Tables<'a> {
    pub combining_class: &'a [RangeRecord<u8>],
    pub quick_check_nfc: &'a [RangeRecord<QuickCheck>],
    pub quick_check_nfd: &'a [RangeRecord<QuickCheck>],
    pub quick_check_nfkc: &'a [RangeRecord<QuickCheck>],
    pub quick_check_nfkd: &'a [RangeRecord<QuickCheck>],
    pub canonical_decomposition: &'a [DecompositionRecord<'a>],
    pub compatibility_decomposition: &'a [DecompositionRecord<'a>],
    pub composition: &'a [CompositionRecord],
    pub composition_exclusions: &'a [RangeRecord<()>],
    pub uppercase: &'a [CaseRecord<'a>],
    pub lowercase: &'a [CaseRecord<'a>],
    pub titlecase: &'a [CaseRecord<'a>],
    pub case_folding: &'a [CaseRecord<'a>],
    pub case_properties: &'a [RangeRecord<CaseFlags>],
    pub soft_dotted: &'a [RangeRecord<()>],
    pub general_category: &'a [RangeRecord<Category>],
}

static UNICODE: Tables<'static> = Tables {
    combining_class: data::COMBINING_CLASS,
    quick_check_nfc: data::QUICK_CHECK_NFC,
    quick_check_nfd: data::QUICK_CHECK_NFD,
    quick_check_nfkc: data::QUICK_CHECK_NFKC,
    quick_check_nfkd: data::QUICK_CHECK_NFKD,
    canonical_decomposition: data::CANONICAL_DECOMPOSITION,
    compatibility_decomposition: data::COMPATIBILITY_DECOMPOSITION,
    composition: data::COMPOSITION,
    composition_exclusions: data::COMPOSITION_EXCLUSIONS,
    uppercase: data::UPPERCASE,
    lowercase: data::LOWERCASE,
    titlecase: data::TITLECASE,
    case_folding: data::CASE_FOLDING,
    case_properties: data::CASE_PROPERTIES,
    soft_dotted: data::SOFT_DOTTED,
    general_category: data::GENERAL_CATEGORY,
};

impl Tables<'static> {
    /// The generated Unicode property tables.
    #[must_use]
    pub fn unicode() -> &'static Tables<'static> {
        &UNICODE
    }
}

impl<'a> Tables<'a> {
    /// A handle with every table empty: all lookups return defaults.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            combining_class: &[],
            quick_check_nfc: &[],
            quick_check_nfd: &[],
            quick_check_nfkc: &[],
            quick_check_nfkd: &[],
            canonical_decomposition: &[],
            compatibility_decomposition: &[],
            composition: &[],
            composition_exclusions: &[],
            uppercase: &[],
            lowercase: &[],
            titlecase: &[],
            case_folding: &[],
            case_properties: &[],
            soft_dotted: &[],
            general_category: &[],
        }
    }

    /// Canonical combining class; 0 for starters and unknown codepoints.
    #[inline]
    #[must_use]
    pub fn combining_class(&self, codepoint: u32) -> u8 {
        if below_first(self.combining_class, codepoint) {
            return 0;
        }
        find(self.combining_class, &codepoint).map_or(0, |record| record.value)
    }

    /// Quick-check value of `codepoint` for `form`.
    #[inline]
    #[must_use]
    pub fn quick_check(&self, form: NormalizationForm, codepoint: u32) -> QuickCheck {
        let records = match form {
            NormalizationForm::Nfc => self.quick_check_nfc,
            NormalizationForm::Nfd => self.quick_check_nfd,
            NormalizationForm::Nfkc => self.quick_check_nfkc,
            NormalizationForm::Nfkd => self.quick_check_nfkd,
        };
        if below_first(records, codepoint) {
            return QuickCheck::Yes;
        }
        find(records, &codepoint).map_or(QuickCheck::Yes, |record| record.value)
    }

    /// Decomposition mapping of the given kind, if any.
    #[inline]
    #[must_use]
    pub fn decomposition(&self, tag: DecompositionTag, codepoint: u32) -> Option<&'a [u32]> {
        let records = match tag {
            DecompositionTag::Canonical => self.canonical_decomposition,
            DecompositionTag::Compatibility => self.compatibility_decomposition,
        };
        find(records, &codepoint).map(|record| record.mapping)
    }

    /// Table composite of `first` followed by `second`, ignoring exclusions.
    #[inline]
    #[must_use]
    pub fn composition(&self, first: u32, second: u32) -> Option<u32> {
        find(self.composition, &(first, second)).map(|record| record.composed)
    }

    /// Whether `codepoint` is a full composition exclusion.
    #[inline]
    #[must_use]
    pub fn is_composition_excluded(&self, codepoint: u32) -> bool {
        find(self.composition_exclusions, &codepoint).is_some()
    }

    /// Full case mapping table entry. Titlecase mapping for `Title`,
    /// folding for `Fold`.
    #[inline]
    #[must_use]
    pub fn case_mapping(&self, target: CaseTarget, codepoint: u32) -> Option<&'a [u32]> {
        let records = match target {
            CaseTarget::Upper => self.uppercase,
            CaseTarget::Lower => self.lowercase,
            CaseTarget::Title => self.titlecase,
            CaseTarget::Fold => self.case_folding,
        };
        find(records, &codepoint).map(|record| record.mapping)
    }

    #[inline]
    #[must_use]
    pub fn case_flags(&self, codepoint: u32) -> CaseFlags {
        find(self.case_properties, &codepoint).map_or(CaseFlags::empty(), |record| record.value)
    }

    #[inline]
    #[must_use]
    pub fn is_soft_dotted(&self, codepoint: u32) -> bool {
        find(self.soft_dotted, &codepoint).is_some()
    }

    /// General category of `codepoint`. Surrogates are
    /// [`Category::SURROGATE`]; codepoints without a record are
    /// [`Category::UNASSIGNED`].
    #[inline]
    #[must_use]
    pub fn category(&self, codepoint: u32) -> Category {
        find(self.general_category, &codepoint).map_or(Category::UNASSIGNED, |record| record.value)
    }

    /// Whether the category of `codepoint` is one of those in `mask`.
    #[inline]
    #[must_use]
    pub fn is_category(&self, codepoint: u32, mask: Category) -> bool {
        self.category(codepoint).intersects(mask)
    }
}

/// Cheap exit for the common case of codepoints before the first range
/// (ASCII and Latin-1 for the generated data).
#[inline]
fn below_first<V>(records: &[RangeRecord<V>], codepoint: u32) -> bool {
    records.first().is_none_or(|record| codepoint < record.first)
}

impl Default for Tables<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted<R, K>(name: &str, records: &[R], key: impl Fn(&R) -> K)
    where
        K: Ord + std::fmt::Debug,
    {
        for pair in records.windows(2) {
            assert!(
                key(&pair[0]) < key(&pair[1]),
                "{name} not strictly sorted at {:?}",
                key(&pair[1])
            );
        }
    }

    #[test]
    fn test_generated_tables_are_sorted() {
        let t = Tables::unicode();
        assert_sorted("ccc", t.combining_class, |r| r.first);
        assert_sorted("qc nfc", t.quick_check_nfc, |r| r.first);
        assert_sorted("qc nfd", t.quick_check_nfd, |r| r.first);
        assert_sorted("qc nfkc", t.quick_check_nfkc, |r| r.first);
        assert_sorted("qc nfkd", t.quick_check_nfkd, |r| r.first);
        assert_sorted("nfd", t.canonical_decomposition, |r| r.codepoint);
        assert_sorted("nfkd", t.compatibility_decomposition, |r| r.codepoint);
        assert_sorted("composition", t.composition, |r| (r.first, r.second));
        assert_sorted("exclusions", t.composition_exclusions, |r| r.first);
        assert_sorted("upper", t.uppercase, |r| r.codepoint);
        assert_sorted("lower", t.lowercase, |r| r.codepoint);
        assert_sorted("title", t.titlecase, |r| r.codepoint);
        assert_sorted("fold", t.case_folding, |r| r.codepoint);
        assert_sorted("case props", t.case_properties, |r| r.first);
        assert_sorted("soft dotted", t.soft_dotted, |r| r.first);
        assert_sorted("category", t.general_category, |r| r.first);
    }

    #[test]
    fn test_ranges_do_not_overlap() {
        let t = Tables::unicode();
        for pair in t.combining_class.windows(2) {
            assert!(pair[0].last < pair[1].first);
        }
        for pair in t.quick_check_nfc.windows(2) {
            assert!(pair[0].last < pair[1].first);
        }
        for pair in t.general_category.windows(2) {
            assert!(pair[0].last < pair[1].first);
        }
    }

    #[test]
    fn test_combining_class_lookup() {
        let t = Tables::unicode();
        assert_eq!(t.combining_class(u32::from('A')), 0);
        assert_eq!(t.combining_class(0x0301), 230);
        assert_eq!(t.combining_class(0x0316), 220);
        assert_eq!(t.combining_class(0x0345), 240);
        assert_eq!(t.combining_class(0x059A), 222);
        assert_eq!(t.combining_class(0x10FFFF), 0);
    }

    #[test]
    fn test_quick_check_lookup() {
        let t = Tables::unicode();
        assert_eq!(t.quick_check(NormalizationForm::Nfc, 0x0301), QuickCheck::Maybe);
        assert_eq!(t.quick_check(NormalizationForm::Nfd, 0x00E9), QuickCheck::No);
        assert_eq!(t.quick_check(NormalizationForm::Nfc, 0x00E9), QuickCheck::Yes);
        assert_eq!(t.quick_check(NormalizationForm::Nfkc, 0xFB01), QuickCheck::No);
        assert_eq!(t.quick_check(NormalizationForm::Nfc, 0xFB01), QuickCheck::Yes);
        assert_eq!(t.quick_check(NormalizationForm::Nfd, 0xAC00), QuickCheck::No);
        assert_eq!(t.quick_check(NormalizationForm::Nfc, 0x1161), QuickCheck::Maybe);
    }

    #[test]
    fn test_decomposition_lookup() {
        let t = Tables::unicode();
        assert_eq!(
            t.decomposition(DecompositionTag::Canonical, 0x00E9),
            Some(&[0x0065, 0x0301][..])
        );
        assert_eq!(
            t.decomposition(DecompositionTag::Canonical, 0x1F82),
            Some(&[0x03B1, 0x0313, 0x0300, 0x0345][..])
        );
        assert_eq!(
            t.decomposition(DecompositionTag::Compatibility, 0xFB01),
            Some(&[0x0066, 0x0069][..])
        );
        assert_eq!(t.decomposition(DecompositionTag::Canonical, 0xFB01), None);
        assert_eq!(t.decomposition(DecompositionTag::Canonical, u32::from('A')), None);
    }

    #[test]
    fn test_composition_lookup_by_pair() {
        let t = Tables::unicode();
        assert_eq!(t.composition(0x0065, 0x0301), Some(0x00E9));
        assert_eq!(t.composition(0x0301, 0x0065), None);
        // Present in the table, flagged as excluded
        assert_eq!(t.composition(0x0915, 0x093C), Some(0x0958));
        assert!(t.is_composition_excluded(0x0958));
        assert!(!t.is_composition_excluded(0x00E9));
    }

    #[test]
    fn test_case_lookup() {
        let t = Tables::unicode();
        assert_eq!(t.case_mapping(CaseTarget::Upper, 0x00DF), Some(&[0x53, 0x53][..]));
        assert_eq!(t.case_mapping(CaseTarget::Title, 0x01C6), Some(&[0x01C5][..]));
        assert_eq!(t.case_mapping(CaseTarget::Fold, 0x0041), Some(&[0x61][..]));
        assert_eq!(t.case_mapping(CaseTarget::Lower, 0x0061), None);
        assert!(t.case_flags(0x0041).contains(CaseFlags::CASED));
        assert!(t.case_flags(0x0027).contains(CaseFlags::CASE_IGNORABLE));
        assert!(t.case_flags(0x0345).contains(CaseFlags::CASED | CaseFlags::CASE_IGNORABLE));
        assert!(t.is_soft_dotted(0x0069));
        assert!(!t.is_soft_dotted(0x0049));
    }

    #[test]
    fn test_empty_tables_use_defaults() {
        let t = Tables::empty();
        assert_eq!(t.combining_class(0x0301), 0);
        assert_eq!(t.quick_check(NormalizationForm::Nfd, 0x00E9), QuickCheck::Yes);
        assert_eq!(t.decomposition(DecompositionTag::Canonical, 0x00E9), None);
        assert_eq!(t.case_flags(0x41), CaseFlags::empty());
        assert_eq!(t.category(0x41), Category::UNASSIGNED);
    }

    #[test]
    fn test_category_lookup() {
        let t = Tables::unicode();
        for (cp, expected) in [
            (0x004C, Category::LETTER_UPPERCASE),
            (0x01C5, Category::LETTER_TITLECASE),
            (0x02B0, Category::LETTER_MODIFIER),
            (0x4E00, Category::LETTER_OTHER),
            (0x0301, Category::MARK_NON_SPACING),
            (0x0903, Category::MARK_SPACING),
            (0x20DD, Category::MARK_ENCLOSING),
            (0x0031, Category::NUMBER_DECIMAL),
            (0x16EE, Category::NUMBER_LETTER),
            (0x00BD, Category::NUMBER_OTHER),
            (0x005F, Category::PUNCTUATION_CONNECTOR),
            (0x0028, Category::PUNCTUATION_OPEN),
            (0x0029, Category::PUNCTUATION_CLOSE),
            (0x00AB, Category::PUNCTUATION_INITIAL),
            (0x002B, Category::SYMBOL_MATH),
            (0x0024, Category::SYMBOL_CURRENCY),
            (0xFFFD, Category::SYMBOL_OTHER),
            (0x00A0, Category::SEPARATOR_SPACE),
            (0x2028, Category::SEPARATOR_LINE),
            (0x0000, Category::CONTROL),
            (0xE0001, Category::FORMAT),
            (0xD800, Category::SURROGATE),
            (0x10FFFD, Category::PRIVATE_USE),
            (0x0378, Category::UNASSIGNED),
            (0x10FFFF, Category::UNASSIGNED),
        ] {
            assert_eq!(t.category(cp), expected, "U+{cp:04X}");
        }
    }

    #[test]
    fn test_category_masks() {
        let t = Tables::unicode();
        assert!(t.is_category(u32::from('a'), Category::LETTER));
        assert!(t.is_category(u32::from('a'), Category::CASED_LETTER));
        assert!(!t.is_category(0x4E00, Category::CASED_LETTER));
        assert!(t.is_category(0x0301, Category::MARK));
        assert!(t.is_category(u32::from('-'), Category::PUNCTUATION));
        assert!(t.is_category(0x0378, Category::OTHER));
        assert!(!t.is_category(u32::from('7'), Category::LETTER | Category::SYMBOL));
        assert!(!t.is_category(u32::from('7'), Category::empty()));
    }

    #[test]
    fn test_category_abbreviations() {
        assert_eq!(Category::MARK_SPACING.abbreviation(), Some("Mc"));
        assert_eq!(Category::LETTER.abbreviation(), None);
        assert_eq!(Category::from_abbreviation("Zp"), Some(Category::SEPARATOR_PARAGRAPH));
        assert_eq!(Category::from_abbreviation("L"), None);
        for bit in Category::all().iter() {
            let abbreviation = bit.abbreviation().expect("single category");
            assert_eq!(Category::from_abbreviation(abbreviation), Some(bit));
        }
    }
}
