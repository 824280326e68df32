//! Configuration for normalization and case mapping calls.

use std::fmt;
use std::str::FromStr;

use unic_langid::LanguageIdentifier;

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log_with};

/// Unicode normalization form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NormalizationForm {
    /// Canonical decomposition followed by canonical composition.
    #[default]
    Nfc,
    /// Canonical decomposition.
    Nfd,
    /// Compatibility decomposition followed by canonical composition.
    Nfkc,
    /// Compatibility decomposition.
    Nfkd,
}

impl NormalizationForm {
    pub const ALL: [Self; 4] = [Self::Nfc, Self::Nfd, Self::Nfkc, Self::Nfkd];

    /// Whether the form ends with canonical composition.
    #[must_use]
    pub const fn is_composed(self) -> bool {
        matches!(self, Self::Nfc | Self::Nfkc)
    }

    /// Whether the form applies compatibility mappings.
    #[must_use]
    pub const fn is_compatibility(self) -> bool {
        matches!(self, Self::Nfkc | Self::Nfkd)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nfc => "NFC",
            Self::Nfd => "NFD",
            Self::Nfkc => "NFKC",
            Self::Nfkd => "NFKD",
        }
    }
}

impl fmt::Display for NormalizationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizationForm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nfc" => Ok(Self::Nfc),
            "nfd" => Ok(Self::Nfd),
            "nfkc" => Ok(Self::Nfkc),
            "nfkd" => Ok(Self::Nfkd),
            _ => Err(Error::InvalidForm(s.to_string())),
        }
    }
}

/// Target of a case transformation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CaseTarget {
    Upper,
    #[default]
    Lower,
    /// First cased letter of each word titlecased, the rest lowercased.
    Title,
    /// Full case folding for caseless matching.
    Fold,
}

impl CaseTarget {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Title => "title",
            Self::Fold => "fold",
        }
    }
}

impl fmt::Display for CaseTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upper" | "uppercase" => Ok(Self::Upper),
            "lower" | "lowercase" => Ok(Self::Lower),
            "title" | "titlecase" => Ok(Self::Title),
            "fold" | "casefold" => Ok(Self::Fold),
            _ => Err(Error::InvalidCase(s.to_string())),
        }
    }
}

/// Locale whose case tailorings apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Untailored Unicode case mappings.
    #[default]
    Default,
    /// Turkish and Azeri dotted/dotless i rules.
    Turkish,
    /// Lithuanian combining dot above rules.
    Lithuanian,
}

impl Locale {
    /// Map a primary language subtag to the tailoring it selects.
    #[must_use]
    pub fn from_language(language: &str) -> Self {
        match language {
            "tr" | "az" => Self::Turkish,
            "lt" => Self::Lithuanian,
            _ => Self::Default,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "und",
            Self::Turkish => "tr",
            Self::Lithuanian => "lt",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = Error;

    /// Parse a BCP 47 tag (`tr-TR`) or a POSIX locale name (`tr_TR.UTF-8`).
    /// An empty string, `C` and `POSIX` select the default rules.
    fn from_str(s: &str) -> Result<Self> {
        // Strip POSIX codeset and modifier suffixes.
        let tag = s.split(['.', '@']).next().unwrap_or_default().trim();
        if tag.is_empty() || tag == "C" || tag == "POSIX" {
            return Ok(Self::Default);
        }

        let langid: LanguageIdentifier = tag
            .replace('_', "-")
            .parse()
            .map_err(|_| Error::InvalidLocale(s.to_string()))?;
        let language = langid.language.to_string();
        let locale = Self::from_language(&language);
        if locale == Self::Default && language != "und" {
            emit_log_with(LogLevel::Info, || {
                format!("locale {s:?} has no case tailoring, using default rules")
            });
        }
        Ok(locale)
    }
}

/// What to do with malformed elements in the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MalformedPolicy {
    /// Fail with [`Error::MalformedInput`] at the first malformed element.
    #[default]
    Reject,
    /// Keep the marker in place; it splits the text into independent segments.
    Passthrough,
}

impl fmt::Display for MalformedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reject => "reject",
            Self::Passthrough => "passthrough",
        })
    }
}

impl FromStr for MalformedPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "passthrough" => Ok(Self::Passthrough),
            _ => Err(Error::InvalidPolicy(s.to_string())),
        }
    }
}

/// Options shared by every engine call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Form produced by normalization calls.
    pub form: NormalizationForm,
    /// Target of case mapping calls.
    pub case: CaseTarget,
    /// Locale tailoring for case mapping.
    pub locale: Locale,
    /// Handling of malformed input elements.
    pub malformed: MalformedPolicy,
}

impl Config {
    #[must_use]
    pub const fn with_form(mut self, form: NormalizationForm) -> Self {
        self.form = form;
        self
    }

    #[must_use]
    pub const fn with_case(mut self, case: CaseTarget) -> Self {
        self.case = case;
        self
    }

    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub const fn with_malformed(mut self, malformed: MalformedPolicy) -> Self {
        self.malformed = malformed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_parsing() {
        assert_eq!("nfc".parse::<NormalizationForm>(), Ok(NormalizationForm::Nfc));
        assert_eq!("NFKD".parse::<NormalizationForm>(), Ok(NormalizationForm::Nfkd));
        assert_eq!(" Nfkc ".parse::<NormalizationForm>(), Ok(NormalizationForm::Nfkc));
        assert_eq!(
            "nfx".parse::<NormalizationForm>(),
            Err(Error::InvalidForm("nfx".to_string()))
        );
        for form in NormalizationForm::ALL {
            assert_eq!(form.to_string().parse::<NormalizationForm>(), Ok(form));
        }
    }

    #[test]
    fn test_form_properties() {
        assert!(NormalizationForm::Nfc.is_composed());
        assert!(!NormalizationForm::Nfkd.is_composed());
        assert!(NormalizationForm::Nfkc.is_compatibility());
        assert!(!NormalizationForm::Nfd.is_compatibility());
    }

    #[test]
    fn test_case_parsing() {
        assert_eq!("UPPER".parse::<CaseTarget>(), Ok(CaseTarget::Upper));
        assert_eq!("titlecase".parse::<CaseTarget>(), Ok(CaseTarget::Title));
        assert_eq!("casefold".parse::<CaseTarget>(), Ok(CaseTarget::Fold));
        assert!(matches!(
            "sideways".parse::<CaseTarget>(),
            Err(Error::InvalidCase(_))
        ));
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("tr".parse::<Locale>(), Ok(Locale::Turkish));
        assert_eq!("az-Latn-AZ".parse::<Locale>(), Ok(Locale::Turkish));
        assert_eq!("tr_TR.UTF-8".parse::<Locale>(), Ok(Locale::Turkish));
        assert_eq!("lt-LT".parse::<Locale>(), Ok(Locale::Lithuanian));
        assert_eq!("en-US".parse::<Locale>(), Ok(Locale::Default));
        assert_eq!("".parse::<Locale>(), Ok(Locale::Default));
        assert_eq!("C".parse::<Locale>(), Ok(Locale::Default));
        assert_eq!("POSIX".parse::<Locale>(), Ok(Locale::Default));
        assert!(matches!(
            "not a locale!".parse::<Locale>(),
            Err(Error::InvalidLocale(_))
        ));
    }

    #[test]
    fn test_config_builders() {
        let config = Config::default()
            .with_form(NormalizationForm::Nfkd)
            .with_case(CaseTarget::Upper)
            .with_locale(Locale::Lithuanian)
            .with_malformed(MalformedPolicy::Passthrough);
        assert_eq!(config.form, NormalizationForm::Nfkd);
        assert_eq!(config.case, CaseTarget::Upper);
        assert_eq!(config.locale, Locale::Lithuanian);
        assert_eq!(config.malformed, MalformedPolicy::Passthrough);

        let defaults = Config::default();
        assert_eq!(defaults.form, NormalizationForm::Nfc);
        assert_eq!(defaults.malformed, MalformedPolicy::Reject);
    }
}
