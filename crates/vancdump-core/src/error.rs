use thiserror::Error;

use crate::formats::mcc::MccError;
use crate::formats::mxf::MxfError;
use crate::formats::rcwt::RcwtError;

/// Coarse classification shared by every decoder error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad magic, signature, sample coding or malformed line.
    Format,
    /// Recognised container with a version this tool does not decode.
    UnsupportedVersion,
    /// Input ended inside a record or packet.
    Truncated,
    /// Field content that cannot be decoded (e.g. odd-length hex).
    Validation,
    /// Reading input or writing output failed.
    Io,
}

/// Errors returned by the dump pipelines.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use vancdump_core::{ErrorKind, TimestampOptions, dump_rcwt};
///
/// let mut out = Vec::new();
/// let err = dump_rcwt(Cursor::new(b"not rcwt at all"), &mut out, TimestampOptions::default())
///     .unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Format);
/// ```
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("RCWT: {0}")]
    Rcwt(#[from] RcwtError),
    #[error("MXF data stream: {0}")]
    Mxf(#[from] MxfError),
    #[error("MCC: {0}")]
    Mcc(#[from] MccError),
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl DumpError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DumpError::Rcwt(err) => err.kind(),
            DumpError::Mxf(err) => err.kind(),
            DumpError::Mcc(err) => err.kind(),
            DumpError::Output(_) => ErrorKind::Io,
        }
    }
}
