//! Error types for textnorm.

use std::fmt;

/// Result type alias for textnorm operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for textnorm operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// An input element is flagged malformed and the policy is reject.
    MalformedInput { index: usize },
    /// A caller-provided output buffer cannot hold the result.
    BufferTooSmall { required: usize, capacity: usize },
    /// Unrecognized normalization form name.
    InvalidForm(String),
    /// Locale tag that is not a well-formed language identifier.
    InvalidLocale(String),
    /// Unrecognized case target name.
    InvalidCase(String),
    /// Unrecognized malformed-input policy name.
    InvalidPolicy(String),
}

impl Error {
    /// Size the output buffer must have, for [`Error::BufferTooSmall`].
    #[must_use]
    pub const fn required_size(&self) -> Option<usize> {
        match self {
            Self::BufferTooSmall { required, .. } => Some(*required),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput { index } => write!(f, "malformed input at element {index}"),
            Self::BufferTooSmall { required, capacity } => write!(
                f,
                "output buffer too small: {required} elements required, capacity is {capacity}"
            ),
            Self::InvalidForm(s) => write!(f, "invalid normalization form: {s}"),
            Self::InvalidLocale(s) => write!(f, "invalid locale: {s}"),
            Self::InvalidCase(s) => write!(f, "invalid case target: {s}"),
            Self::InvalidPolicy(s) => write!(f, "invalid malformed-input policy: {s}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MalformedInput { index: 4 };
        assert!(err.to_string().contains("element 4"));

        let err = Error::BufferTooSmall {
            required: 12,
            capacity: 3,
        };
        assert!(err.to_string().contains("12 elements required"));

        let err = Error::InvalidForm("nfx".to_string());
        assert!(err.to_string().contains("invalid normalization form"));

        let err = Error::InvalidLocale("??".to_string());
        assert!(err.to_string().contains("invalid locale"));
    }

    #[test]
    fn test_required_size() {
        let err = Error::BufferTooSmall {
            required: 7,
            capacity: 2,
        };
        assert_eq!(err.required_size(), Some(7));
        assert_eq!(Error::InvalidCase("x".into()).required_size(), None);
    }
}
