use std::io::Read;

use tracing::{debug, trace};

use super::error::RcwtError;
use super::layout;
use super::parser::{RcwtHeader, RcwtRecord, parse_file_header, parse_record_header};
use crate::source::{ByteReader, ReadOutcome};

/// Streaming RCWT decoder: validates the file header on construction, then
/// yields one record at a time.
pub struct RcwtReader<R> {
    input: ByteReader<R>,
    header: RcwtHeader,
}

impl<R: Read> RcwtReader<R> {
    /// Read and validate the file header.
    ///
    /// # Errors
    /// `RcwtError::HeaderTooShort` or `RcwtError::BadMagic` when the input is
    /// not an RCWT stream, `RcwtError::UnsupportedVersion` for other versions.
    pub fn new(inner: R) -> Result<Self, RcwtError> {
        let mut input = ByteReader::new(inner);
        let bytes = input
            .read_array::<{ layout::FILE_HEADER_LEN }>()?
            .required(layout::FILE_HEADER_LEN)
            .map_err(RcwtError::header_too_short)?;
        let header = parse_file_header(&bytes)?;
        debug!(version = ?header.version, "RCWT header validated");
        Ok(Self { input, header })
    }

    pub fn header(&self) -> &RcwtHeader {
        &self.header
    }

    /// Next record, or `None` when input ends exactly at a record boundary.
    pub fn next_record(&mut self) -> Result<Option<RcwtRecord>, RcwtError> {
        let offset = self.input.position();
        let bytes = match self.input.read_array::<{ layout::RECORD_HEADER_LEN }>()? {
            ReadOutcome::Complete(bytes) => bytes,
            ReadOutcome::End => return Ok(None),
            ReadOutcome::Truncated { actual } => {
                return Err(RcwtError::TruncatedRecordHeader {
                    offset,
                    needed: layout::RECORD_HEADER_LEN,
                    actual,
                });
            }
        };
        let header = parse_record_header(&bytes)?;

        let needed = header.payload_len();
        let payload = self
            .input
            .read_bytes(needed)?
            .required(needed)
            .map_err(|short| RcwtError::TruncatedPayload {
                offset,
                count: header.count,
                needed: short.needed,
                actual: short.actual,
            })?;

        trace!(offset, time = header.time, count = header.count, "RCWT record");
        Ok(Some(RcwtRecord {
            time: header.time,
            count: header.count,
            payload,
        }))
    }
}
