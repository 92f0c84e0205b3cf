use thiserror::Error;

use crate::error::ErrorKind;
use crate::source::SourceError;

/// Errors returned by MCC decoding. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum MccError {
    #[error("missing signature line: input is empty")]
    MissingSignature,
    #[error("file not in MCC format: first line is {found:?}")]
    BadSignature { found: String },
    #[error("line {line}: longer than {max} bytes")]
    LineTooLong { line: usize, max: usize },
    #[error("line {line}: not valid UTF-8")]
    NotUtf8 { line: usize },
    #[error("line {line}: unknown line {text:?}")]
    UnknownLine { line: usize, text: String },
    #[error("line {line}: decoded payload has odd hex length {len}")]
    OddLengthPayload { line: usize, len: usize },
    /// Guard for `decode_payload` callers that skip the caption pattern;
    /// lines from `parse_line` never reach it.
    #[error("line {line}: invalid payload: {message}")]
    InvalidPayload { line: usize, message: String },
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl MccError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MccError::MissingSignature
            | MccError::BadSignature { .. }
            | MccError::LineTooLong { .. }
            | MccError::NotUtf8 { .. }
            | MccError::UnknownLine { .. } => ErrorKind::Format,
            MccError::OddLengthPayload { .. } | MccError::InvalidPayload { .. } => {
                ErrorKind::Validation
            }
            MccError::Source(_) => ErrorKind::Io,
        }
    }
}

impl From<std::io::Error> for MccError {
    fn from(err: std::io::Error) -> Self {
        MccError::Source(SourceError::Io(err))
    }
}
