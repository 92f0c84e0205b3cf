use super::error::RcwtError;
use super::layout;
use crate::formats::common::reader::FieldReader;

/// Validated RCWT file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RcwtHeader {
    pub version: [u8; 2],
}

/// Fixed part of a record: when it happened and how many triplets follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub time: i64,
    pub count: u16,
}

impl RecordHeader {
    pub fn payload_len(&self) -> usize {
        usize::from(self.count) * layout::TRIPLET_LEN
    }
}

/// One decoded record. `payload` always holds exactly `3 × count` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RcwtRecord {
    pub time: i64,
    pub count: u16,
    pub payload: Vec<u8>,
}

impl RcwtRecord {
    pub fn triplets(&self) -> impl Iterator<Item = &[u8]> {
        self.payload.chunks_exact(layout::TRIPLET_LEN)
    }
}

/// Validate the 11-byte file header.
///
/// Magic is checked before the version so a foreign file is reported as a
/// format error rather than an unsupported RCWT version.
///
/// # Examples
/// ```
/// use vancdump_core::formats::rcwt::parse_file_header;
///
/// let header = [0xcc, 0xcc, 0xed, 0xcc, 0x00, 0x50, 0x00, 0x01, 0x00, 0x00, 0x00];
/// assert_eq!(parse_file_header(&header).unwrap().version, [0x00, 0x01]);
/// ```
pub fn parse_file_header(bytes: &[u8]) -> Result<RcwtHeader, RcwtError> {
    let reader = FieldReader::new(bytes);
    reader
        .require_len(layout::FILE_HEADER_LEN)
        .map_err(RcwtError::header_too_short)?;

    let magic: [u8; 3] = reader
        .read_array(layout::MAGIC_RANGE)
        .map_err(RcwtError::header_too_short)?;
    if magic != layout::MAGIC {
        return Err(RcwtError::BadMagic { found: magic });
    }

    let version: [u8; 2] = reader
        .read_array(layout::VERSION_RANGE)
        .map_err(RcwtError::header_too_short)?;
    if version != layout::SUPPORTED_VERSION {
        return Err(RcwtError::UnsupportedVersion { found: version });
    }

    Ok(RcwtHeader { version })
}

/// Decode a 10-byte record header.
pub fn parse_record_header(bytes: &[u8]) -> Result<RecordHeader, RcwtError> {
    let reader = FieldReader::new(bytes);
    let short = |short: crate::source::Shortfall| RcwtError::TruncatedRecordHeader {
        offset: 0,
        needed: short.needed,
        actual: short.actual,
    };
    reader.require_len(layout::RECORD_HEADER_LEN).map_err(short)?;
    let time = reader.read_i64_le(layout::TIME_RANGE).map_err(short)?;
    let count = reader.read_u16_le(layout::COUNT_RANGE).map_err(short)?;
    Ok(RecordHeader { time, count })
}
