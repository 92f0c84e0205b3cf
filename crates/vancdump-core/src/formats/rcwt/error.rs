use thiserror::Error;

use crate::error::ErrorKind;
use crate::source::{Shortfall, SourceError};

/// Errors returned by RCWT header and record decoding.
///
/// # Examples
/// ```
/// use vancdump_core::ErrorKind;
/// use vancdump_core::formats::rcwt::RcwtError;
///
/// let err = RcwtError::UnsupportedVersion { found: [0x00, 0x02] };
/// assert_eq!(err.kind(), ErrorKind::UnsupportedVersion);
/// assert!(err.to_string().contains("00 02"));
/// ```
#[derive(Debug, Error)]
pub enum RcwtError {
    #[error("file header too short: need {needed} bytes, got {actual}")]
    HeaderTooShort { needed: usize, actual: usize },
    #[error("bad magic: expected cc cc ed, got {}", spaced_hex(.found))]
    BadMagic { found: [u8; 3] },
    #[error("unsupported version: expected 00 01, got {}", spaced_hex(.found))]
    UnsupportedVersion { found: [u8; 2] },
    #[error("truncated record header at offset {offset}: need {needed} bytes, got {actual}")]
    TruncatedRecordHeader {
        offset: u64,
        needed: usize,
        actual: usize,
    },
    #[error(
        "truncated record payload at offset {offset} ({count} triplets): need {needed} bytes, got {actual}"
    )]
    TruncatedPayload {
        offset: u64,
        count: u16,
        needed: usize,
        actual: usize,
    },
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl RcwtError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RcwtError::HeaderTooShort { .. } | RcwtError::BadMagic { .. } => ErrorKind::Format,
            RcwtError::UnsupportedVersion { .. } => ErrorKind::UnsupportedVersion,
            RcwtError::TruncatedRecordHeader { .. } | RcwtError::TruncatedPayload { .. } => {
                ErrorKind::Truncated
            }
            RcwtError::Source(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn header_too_short(short: Shortfall) -> Self {
        RcwtError::HeaderTooShort {
            needed: short.needed,
            actual: short.actual,
        }
    }
}

fn spaced_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
