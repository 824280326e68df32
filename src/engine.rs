//! Public normalization and case-mapping surface.
//!
//! An [`Engine`] pairs a table handle with a [`Config`]. It handles
//! malformed elements according to the configured policy and dispatches to
//! the algorithm modules. With [`MalformedPolicy::Passthrough`], every
//! malformed element stays in place and splits the input into segments that
//! are processed independently.

use crate::case::{CaseMapper, default_word_starts};
use crate::codepoint::Element;
use crate::config::{CaseTarget, Config, MalformedPolicy};
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log_with};
use crate::normalize;
use crate::quick_check::{self, Scan};
use crate::tables::{Category, QuickCheck, Tables};

/// Normalization and case-mapping engine.
#[derive(Clone, Copy, Debug)]
pub struct Engine<'a> {
    tables: &'a Tables<'a>,
    config: Config,
}

impl Engine<'static> {
    /// Engine over the generated Unicode tables.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_tables(Tables::unicode(), config)
    }
}

impl Default for Engine<'static> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<'a> Engine<'a> {
    /// Engine over a caller-provided table handle.
    #[must_use]
    pub const fn with_tables(tables: &'a Tables<'a>, config: Config) -> Self {
        Self { tables, config }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn tables(&self) -> &'a Tables<'a> {
        self.tables
    }

    /// Normalize `input` to the configured form.
    pub fn normalize(&self, input: &[Element]) -> Result<Vec<Element>> {
        let form = self.config.form;
        self.map_segments(input, |_, segment| {
            normalize::normalize(self.tables, segment, form).output
        })
    }

    /// Normalize raw codepoints. Values that are not Unicode scalar values
    /// follow the malformed-input policy.
    pub fn normalize_codepoints(&self, input: &[u32]) -> Result<Vec<u32>> {
        let elements: Vec<Element> = input.iter().copied().map(Element::Codepoint).collect();
        Ok(to_codepoints(self.normalize(&elements)?))
    }

    /// Normalize a string.
    #[must_use]
    pub fn normalize_str(&self, input: &str) -> String {
        let codepoints: Vec<u32> = input.chars().map(u32::from).collect();
        let output = normalize::normalize(self.tables, &codepoints, self.config.form).output;
        encode(&output)
    }

    /// Normalize into a caller buffer, returning the number of elements
    /// written. Nothing is written when the buffer is too small.
    pub fn normalize_into(&self, input: &[Element], out: &mut [Element]) -> Result<usize> {
        copy_into(&self.normalize(input)?, out)
    }

    /// Case-map `input` to the configured target and locale. Title case uses
    /// UAX #29 word boundaries.
    pub fn to_case(&self, input: &[Element]) -> Result<Vec<Element>> {
        let mapper = CaseMapper::new(self.tables, self.config.locale);
        let target = self.config.case;
        self.map_segments(input, |_, segment| {
            if target == CaseTarget::Title {
                let starts = default_word_starts(segment);
                mapper.apply(segment, target, |i| starts[i])
            } else {
                mapper.apply(segment, target, |_| false)
            }
        })
    }

    /// Case-map `input` with caller-defined word boundaries.
    ///
    /// `word_start` receives indices into `input`.
    pub fn to_case_with_word_starts<F>(
        &self,
        input: &[Element],
        mut word_start: F,
    ) -> Result<Vec<Element>>
    where
        F: FnMut(usize) -> bool,
    {
        let mapper = CaseMapper::new(self.tables, self.config.locale);
        let target = self.config.case;
        self.map_segments(input, |offset, segment| {
            mapper.apply(segment, target, |i| word_start(offset + i))
        })
    }

    /// Case-map a string.
    #[must_use]
    pub fn to_case_str(&self, input: &str) -> String {
        let codepoints: Vec<u32> = input.chars().map(u32::from).collect();
        let mapper = CaseMapper::new(self.tables, self.config.locale);
        let target = self.config.case;
        let output = if target == CaseTarget::Title {
            let starts = default_word_starts(&codepoints);
            mapper.apply(&codepoints, target, |i| starts[i])
        } else {
            mapper.apply(&codepoints, target, |_| false)
        };
        encode(&output)
    }

    /// Case-map into a caller buffer, returning the number of elements
    /// written. Nothing is written when the buffer is too small.
    pub fn to_case_into(&self, input: &[Element], out: &mut [Element]) -> Result<usize> {
        copy_into(&self.to_case(input)?, out)
    }

    /// Whether `input` is already in the configured form.
    pub fn is_normalized(&self, input: &[Element]) -> Result<bool> {
        let form = self.config.form;
        let mut normalized = true;
        self.for_each_segment(input, |_, segment| {
            normalized = normalized && quick_check::is_normalized(self.tables, segment, form);
        })?;
        Ok(normalized)
    }

    pub fn is_normalized_codepoints(&self, input: &[u32]) -> Result<bool> {
        let elements: Vec<Element> = input.iter().copied().map(Element::Codepoint).collect();
        self.is_normalized(&elements)
    }

    /// Quick-check `input` for the configured form. Across segments the
    /// most decisive answer wins: `No` over `Maybe` over `Yes`.
    pub fn quick_check(&self, input: &[Element]) -> Result<QuickCheck> {
        self.scan(input).map(|scan| scan.status)
    }

    /// Quick-check `input` and locate where processing has to start.
    ///
    /// Offsets index into `input`. They come from the first segment that is
    /// not `Yes`; when every segment is `Yes`, `first_unstable` is the input
    /// length and `safe_start` is the last segment's safe start.
    pub fn scan(&self, input: &[Element]) -> Result<Scan> {
        let form = self.config.form;
        let mut status = QuickCheck::Yes;
        let mut unstable = None;
        let mut last_safe_start = 0;
        self.for_each_segment(input, |offset, segment| {
            let scan = quick_check::scan(self.tables, segment, form);
            status = status.max(scan.status);
            if unstable.is_none() && scan.first_unstable < segment.len() {
                unstable = Some((offset + scan.first_unstable, offset + scan.safe_start));
            }
            last_safe_start = offset + scan.safe_start;
        })?;

        let (first_unstable, safe_start) = unstable.unwrap_or((input.len(), last_safe_start));
        Ok(Scan {
            status,
            first_unstable,
            safe_start,
        })
    }

    /// General category of the first element; `None` for empty input or a
    /// leading malformed element.
    pub fn category(&self, input: &[Element]) -> Result<Option<Category>> {
        self.check_malformed(input)?;
        Ok(input
            .first()
            .and_then(|element| element.scalar())
            .map(|cp| self.tables.category(cp)))
    }

    /// Number of leading elements whose category is in `mask`. A malformed
    /// element ends the run.
    pub fn category_prefix(&self, input: &[Element], mask: Category) -> Result<usize> {
        self.check_malformed(input)?;
        Ok(input
            .iter()
            .take_while(|element| {
                element
                    .scalar()
                    .is_some_and(|cp| self.tables.is_category(cp, mask))
            })
            .count())
    }

    /// Byte length of the longest prefix of `input` whose characters all
    /// have a category in `mask`.
    #[must_use]
    pub fn category_prefix_str(&self, input: &str, mask: Category) -> usize {
        input
            .char_indices()
            .find(|&(_, ch)| !self.tables.is_category(u32::from(ch), mask))
            .map_or(input.len(), |(index, _)| index)
    }

    /// Apply the malformed-input policy, then call `f` on every segment of
    /// scalar values with its offset in `input`.
    fn for_each_segment<F>(&self, input: &[Element], mut f: F) -> Result<()>
    where
        F: FnMut(usize, &[u32]),
    {
        self.check_malformed(input)?;

        let mut segment = Vec::with_capacity(input.len());
        let mut offset = 0;
        for (index, element) in input.iter().enumerate() {
            if let Some(cp) = element.scalar() {
                segment.push(cp);
            } else {
                f(offset, &segment);
                segment.clear();
                offset = index + 1;
            }
        }
        f(offset, &segment);
        Ok(())
    }

    /// Like [`Self::for_each_segment`], collecting the mapped segments with
    /// malformed elements kept in place.
    fn map_segments<F>(&self, input: &[Element], mut f: F) -> Result<Vec<Element>>
    where
        F: FnMut(usize, &[u32]) -> Vec<u32>,
    {
        let mut out = Vec::with_capacity(input.len());
        let mut malformed = input.iter().filter(|element| element.is_malformed());
        self.for_each_segment(input, |offset, segment| {
            if !segment.is_empty() {
                out.extend(f(offset, segment).into_iter().map(Element::Codepoint));
            }
            // Every segment but the last ends at a malformed element.
            if let Some(&marker) = malformed.next() {
                out.push(marker);
            }
        })?;
        Ok(out)
    }

    fn check_malformed(&self, input: &[Element]) -> Result<()> {
        let mut malformed = input
            .iter()
            .enumerate()
            .filter(|(_, element)| element.is_malformed())
            .map(|(index, _)| index);
        let Some(index) = malformed.next() else {
            return Ok(());
        };

        match self.config.malformed {
            MalformedPolicy::Reject => Err(Error::MalformedInput { index }),
            MalformedPolicy::Passthrough => {
                emit_log_with(LogLevel::Warn, || {
                    format!(
                        "passing through {} malformed element(s), first at {index}",
                        1 + malformed.count()
                    )
                });
                Ok(())
            }
        }
    }
}

fn to_codepoints(elements: Vec<Element>) -> Vec<u32> {
    elements
        .into_iter()
        .map(|element| match element {
            Element::Codepoint(cp) => cp,
            Element::Malformed => u32::from(char::REPLACEMENT_CHARACTER),
        })
        .collect()
}

fn encode(codepoints: &[u32]) -> String {
    crate::codec::encode_codepoints(codepoints)
}

fn copy_into(result: &[Element], out: &mut [Element]) -> Result<usize> {
    if result.len() > out.len() {
        return Err(Error::BufferTooSmall {
            required: result.len(),
            capacity: out.len(),
        });
    }
    out[..result.len()].copy_from_slice(result);
    Ok(result.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;
    use crate::config::{Locale, NormalizationForm};

    fn engine(config: Config) -> Engine<'static> {
        Engine::new(config)
    }

    #[test]
    fn test_normalize_elements() {
        let nfc = engine(Config::default());
        let out = nfc.normalize(&codec::decode_str("cafe\u{301}")).unwrap();
        assert_eq!(codec::encode(&out), "caf\u{e9}");

        let nfd = engine(Config::default().with_form(NormalizationForm::Nfd));
        assert_eq!(
            nfd.normalize_codepoints(&[0xE9]).unwrap(),
            vec![0x65, 0x301]
        );
        assert_eq!(nfd.normalize_str("\u{e9}"), "e\u{301}");
    }

    #[test]
    fn test_reject_malformed() {
        let nfc = engine(Config::default());
        let input = [Element::from('a'), Element::Malformed, Element::from('b')];
        assert_eq!(nfc.normalize(&input), Err(Error::MalformedInput { index: 1 }));
        assert_eq!(nfc.to_case(&input), Err(Error::MalformedInput { index: 1 }));
        assert_eq!(nfc.is_normalized(&input), Err(Error::MalformedInput { index: 1 }));
        assert_eq!(
            nfc.normalize_codepoints(&[0x61, 0xD800]),
            Err(Error::MalformedInput { index: 1 })
        );
    }

    #[test]
    fn test_passthrough_splits_segments() {
        let nfc = engine(Config::default().with_malformed(MalformedPolicy::Passthrough));
        // e | MALFORMED | ACUTE: the accent cannot reach across the marker
        let input = [
            Element::from('e'),
            Element::Malformed,
            Element::Codepoint(0x301),
            Element::from('e'),
            Element::Codepoint(0x301),
        ];
        assert_eq!(
            nfc.normalize(&input).unwrap(),
            vec![
                Element::from('e'),
                Element::Malformed,
                Element::Codepoint(0x301),
                Element::Codepoint(0xE9),
            ]
        );
    }

    #[test]
    fn test_passthrough_keeps_markers_at_edges() {
        let upper = engine(
            Config::default()
                .with_case(CaseTarget::Upper)
                .with_malformed(MalformedPolicy::Passthrough),
        );
        let input = [
            Element::Malformed,
            Element::from('a'),
            Element::Codepoint(0xDFFF),
            Element::Malformed,
        ];
        assert_eq!(
            upper.to_case(&input).unwrap(),
            vec![
                Element::Malformed,
                Element::from('A'),
                Element::Codepoint(0xDFFF),
                Element::Malformed,
            ]
        );
        assert_eq!(upper.to_case(&[]).unwrap(), Vec::<Element>::new());
    }

    #[test]
    fn test_to_case() {
        let lower = engine(Config::default());
        assert_eq!(lower.to_case_str("STRASSE"), "strasse");

        let turkish = engine(
            Config::default()
                .with_case(CaseTarget::Upper)
                .with_locale(Locale::Turkish),
        );
        assert_eq!(turkish.to_case_str("i"), "\u{130}");

        let title = engine(Config::default().with_case(CaseTarget::Title));
        assert_eq!(title.to_case_str("the quick fox"), "The Quick Fox");
        let out = title
            .to_case_with_word_starts(&codec::decode_str("abab"), |i| i == 2)
            .unwrap();
        assert_eq!(codec::encode(&out), "AbAb");
    }

    #[test]
    fn test_into_reports_required_size() {
        let nfd = engine(Config::default().with_form(NormalizationForm::Nfd));
        let input = codec::decode_str("\u{e9}\u{e9}");

        let mut small = [Element::Malformed; 3];
        let err = nfd.normalize_into(&input, &mut small).unwrap_err();
        assert_eq!(err, Error::BufferTooSmall { required: 4, capacity: 3 });
        // No partial output
        assert_eq!(small, [Element::Malformed; 3]);

        let mut big = vec![Element::Malformed; err.required_size().unwrap()];
        assert_eq!(nfd.normalize_into(&input, &mut big), Ok(4));
        assert_eq!(codec::encode(&big), "e\u{301}e\u{301}");

        let upper = engine(Config::default().with_case(CaseTarget::Upper));
        let mut one = [Element::Malformed; 1];
        assert_eq!(
            upper.to_case_into(&codec::decode_str("\u{df}"), &mut one),
            Err(Error::BufferTooSmall { required: 2, capacity: 1 })
        );
    }

    #[test]
    fn test_quick_check_and_is_normalized() {
        let nfc = engine(Config::default().with_malformed(MalformedPolicy::Passthrough));
        assert_eq!(nfc.quick_check(&codec::decode_str("abc")), Ok(QuickCheck::Yes));
        assert_eq!(
            nfc.quick_check(&codec::decode_str("x\u{301}")),
            Ok(QuickCheck::Maybe)
        );
        assert_eq!(nfc.is_normalized_codepoints(&[0x78, 0x301]), Ok(true));
        assert_eq!(nfc.is_normalized_codepoints(&[0x65, 0x301]), Ok(false));
        assert_eq!(
            nfc.quick_check(&[Element::Codepoint(0x340), Element::Malformed]),
            Ok(QuickCheck::No)
        );
    }

    #[test]
    fn test_custom_tables() {
        let tables = Tables::empty();
        let engine = Engine::with_tables(&tables, Config::default());
        // Without quick-check data every input is already normalized
        assert_eq!(
            engine.normalize_codepoints(&[0x65, 0x301, 0xAC00]).unwrap(),
            vec![0x65, 0x301, 0xAC00]
        );
        assert_eq!(engine.quick_check(&codec::decode_str("\u{e9}")), Ok(QuickCheck::Yes));
    }

    #[test]
    fn test_scan_reports_offsets() {
        let nfd = engine(Config::default().with_form(NormalizationForm::Nfd));
        let scan = nfd.scan(&codec::decode_str("caf\u{e9}")).unwrap();
        assert_eq!(
            scan,
            Scan {
                status: QuickCheck::No,
                first_unstable: 3,
                safe_start: 2,
            }
        );

        let clean = nfd.scan(&codec::decode_str("abc")).unwrap();
        assert_eq!(clean.status, QuickCheck::Yes);
        assert_eq!(clean.first_unstable, 3);
        assert_eq!(clean.safe_start, 2);
        assert_eq!(nfd.scan(&[]).unwrap().first_unstable, 0);
    }

    #[test]
    fn test_scan_offsets_cross_malformed_elements() {
        let nfc = engine(Config::default().with_malformed(MalformedPolicy::Passthrough));
        let mut input = codec::decode_str("ab");
        input.push(Element::Malformed);
        input.extend(codec::decode_str("x\u{301}e\u{301}"));
        assert_eq!(
            nfc.scan(&input).unwrap(),
            Scan {
                status: QuickCheck::Maybe,
                first_unstable: 4,
                safe_start: 3,
            }
        );

        let reject = engine(Config::default());
        assert_eq!(reject.scan(&input), Err(Error::MalformedInput { index: 2 }));
    }

    #[test]
    fn test_category_queries() {
        let engine = engine(Config::default().with_malformed(MalformedPolicy::Passthrough));
        assert_eq!(
            engine.category(&codec::decode_str("L")),
            Ok(Some(Category::LETTER_UPPERCASE))
        );
        assert_eq!(engine.category(&[]), Ok(None));
        assert_eq!(engine.category(&[Element::Malformed]), Ok(None));

        let digits = codec::decode_str("123abc");
        assert_eq!(engine.category_prefix(&digits, Category::NUMBER_DECIMAL), Ok(3));
        assert_eq!(
            engine.category_prefix(&codec::decode_str("(good)"), Category::LETTER_LOWERCASE),
            Ok(0)
        );
        let broken = [Element::from('a'), Element::Malformed, Element::from('b')];
        assert_eq!(engine.category_prefix(&broken, Category::LETTER), Ok(1));

        assert_eq!(engine.category_prefix_str("    %", Category::SEPARATOR_SPACE), 4);
        assert_eq!(engine.category_prefix_str("\u{e9}t\u{e9}!", Category::LETTER), 5);
        assert_eq!(engine.category_prefix_str("", Category::LETTER), 0);
        assert_eq!(
            engine.category_prefix_str("e\u{301}\u{20dd}x", Category::LETTER | Category::MARK),
            7
        );

        let reject = super::Engine::new(Config::default());
        assert_eq!(
            reject.category_prefix(&broken, Category::LETTER),
            Err(Error::MalformedInput { index: 1 })
        );
    }
}
