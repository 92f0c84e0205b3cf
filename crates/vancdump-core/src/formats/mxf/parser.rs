use super::error::MxfError;
use super::layout;
use crate::formats::common::reader::FieldReader;
use crate::source::Shortfall;

/// Per-line framing preceding the VANC sample array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MxfPacketHeader {
    pub line_number: u16,
    pub wrapping_type: u8,
    pub sample_coding: u8,
    pub sample_count: u16,
    pub array_len: u32,
    pub array_element_size: u32,
}

impl MxfPacketHeader {
    /// Cut a sample array down to the VANC payload it carries.
    pub fn payload_from(&self, mut array: Vec<u8>) -> Vec<u8> {
        array.truncate(usize::from(self.sample_count));
        array
    }
}

fn truncated(field: &'static str) -> impl Fn(Shortfall) -> MxfError {
    move |short| MxfError::Truncated {
        field,
        offset: 0,
        needed: short.needed,
        actual: short.actual,
    }
}

/// Decode the packet line count, accepting only single-line packets.
pub fn parse_line_count(bytes: &[u8]) -> Result<u16, MxfError> {
    let reader = FieldReader::new(bytes);
    let count = reader
        .read_u16_be(layout::LINE_COUNT_RANGE)
        .map_err(truncated("line count"))?;
    if count != layout::SUPPORTED_LINE_COUNT {
        return Err(MxfError::UnsupportedLineCount { offset: 0, count });
    }
    Ok(count)
}

/// Decode and validate the 14-byte per-line header.
///
/// # Examples
/// ```
/// use vancdump_core::formats::mxf::parse_packet_header;
///
/// let bytes = [0, 9, 1, 4, 0, 5, 0, 0, 0, 8, 0, 0, 0, 1];
/// let header = parse_packet_header(&bytes).unwrap();
/// assert_eq!(header.line_number, 9);
/// assert_eq!(header.sample_count, 5);
/// assert_eq!(header.array_len, 8);
/// ```
pub fn parse_packet_header(bytes: &[u8]) -> Result<MxfPacketHeader, MxfError> {
    let reader = FieldReader::new(bytes);
    reader
        .require_len(layout::PACKET_HEADER_LEN)
        .map_err(truncated("packet header"))?;

    let line_number = reader
        .read_u16_be(layout::LINE_NUMBER_RANGE)
        .map_err(truncated("line number"))?;
    let wrapping_type = reader
        .read_u8(layout::WRAPPING_TYPE_OFFSET)
        .map_err(truncated("wrapping type"))?;
    let sample_coding = reader
        .read_u8(layout::SAMPLE_CODING_OFFSET)
        .map_err(truncated("sample coding"))?;
    if !layout::SUPPORTED_SAMPLE_CODINGS.contains(&sample_coding) {
        return Err(MxfError::UnsupportedSampleCoding {
            coding: sample_coding,
        });
    }
    let sample_count = reader
        .read_u16_be(layout::SAMPLE_COUNT_RANGE)
        .map_err(truncated("sample count"))?;
    let array_len = reader
        .read_u32_be(layout::ARRAY_LEN_RANGE)
        .map_err(truncated("array length"))?;
    let array_element_size = reader
        .read_u32_be(layout::ARRAY_ELEMENT_SIZE_RANGE)
        .map_err(truncated("array element size"))?;
    if array_element_size != layout::ARRAY_ELEMENT_SIZE {
        return Err(MxfError::InvalidArrayElementSize {
            size: array_element_size,
        });
    }

    Ok(MxfPacketHeader {
        line_number,
        wrapping_type,
        sample_coding,
        sample_count,
        array_len,
        array_element_size,
    })
}
