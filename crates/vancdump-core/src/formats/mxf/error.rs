use thiserror::Error;

use crate::error::ErrorKind;
use crate::source::SourceError;

/// Errors returned by MXF ancillary data stream decoding.
#[derive(Debug, Error)]
pub enum MxfError {
    #[error("unsupported line count at offset {offset}: {count} (expected 1)")]
    UnsupportedLineCount { offset: u64, count: u16 },
    #[error("unsupported sample coding: {coding}")]
    UnsupportedSampleCoding { coding: u8 },
    #[error("array element size must be 1 byte, got {size}")]
    InvalidArrayElementSize { size: u32 },
    #[error("truncated {field} at offset {offset}: need {needed} bytes, got {actual}")]
    Truncated {
        field: &'static str,
        offset: u64,
        needed: usize,
        actual: usize,
    },
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl MxfError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MxfError::UnsupportedLineCount { .. }
            | MxfError::UnsupportedSampleCoding { .. }
            | MxfError::InvalidArrayElementSize { .. } => ErrorKind::Format,
            MxfError::Truncated { .. } => ErrorKind::Truncated,
            MxfError::Source(_) => ErrorKind::Io,
        }
    }

    /// Rebase offsets reported by the slice parsers onto the stream position.
    pub(crate) fn at_offset(self, base: u64) -> Self {
        match self {
            MxfError::UnsupportedLineCount { offset, count } => MxfError::UnsupportedLineCount {
                offset: base + offset,
                count,
            },
            MxfError::Truncated {
                field,
                offset,
                needed,
                actual,
            } => MxfError::Truncated {
                field,
                offset: base + offset,
                needed,
                actual,
            },
            other => other,
        }
    }
}
