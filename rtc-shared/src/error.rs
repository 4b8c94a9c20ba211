use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`], for callers that only need to know
/// whether the peer sent malformed input or the local side passed a bad value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input violated the attribute grammar (length or character set).
    SyntaxError,
    /// A value was structurally unusable.
    InvalidParameter,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ErrorKind::SyntaxError => write!(f, "SYNTAX_ERROR"),
            ErrorKind::InvalidParameter => write!(f, "INVALID_PARAMETER"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Indicates the ICE username fragment length is outside `[min, max]`.
    #[error("ICE ufrag must be between {min} and {max} characters long.")]
    ErrIceUfragLength { min: usize, max: usize },

    /// Indicates the ICE username fragment contains a character outside
    /// ice-char (ALPHA / DIGIT / "+" / "/").
    #[error("ICE ufrag must contain only alphanumeric characters, '+', and '/'.")]
    ErrIceUfragCharset,

    /// Indicates the ICE password length is outside `[min, max]`.
    #[error("ICE pwd must be between {min} and {max} characters long.")]
    ErrIcePwdLength { min: usize, max: usize },

    /// Indicates the ICE password contains a character outside ice-char.
    #[error("ICE pwd must contain only alphanumeric characters, '+', and '/'.")]
    ErrIcePwdCharset,

    /// Indicates a fingerprint value is not a colon separated hex string.
    #[error("invalid fingerprint value: {0}")]
    ErrInvalidFingerprint(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ErrIceUfragLength { .. }
            | Error::ErrIceUfragCharset
            | Error::ErrIcePwdLength { .. }
            | Error::ErrIcePwdCharset => ErrorKind::SyntaxError,
            Error::ErrInvalidFingerprint(_) => ErrorKind::InvalidParameter,
        }
    }
}
