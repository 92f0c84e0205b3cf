use std::ops::Range;

pub const LINE_COUNT_LEN: usize = 2;
pub const LINE_COUNT_RANGE: Range<usize> = 0..2;
pub const SUPPORTED_LINE_COUNT: u16 = 1;

pub const PACKET_HEADER_LEN: usize = 14;
pub const LINE_NUMBER_RANGE: Range<usize> = 0..2;
pub const WRAPPING_TYPE_OFFSET: usize = 2;
pub const SAMPLE_CODING_OFFSET: usize = 3;
pub const SAMPLE_COUNT_RANGE: Range<usize> = 4..6;
pub const ARRAY_LEN_RANGE: Range<usize> = 6..10;
pub const ARRAY_ELEMENT_SIZE_RANGE: Range<usize> = 10..14;

/// 8-bit luma/chroma/color-difference codings, with and without parity.
pub const SUPPORTED_SAMPLE_CODINGS: [u8; 6] = [4, 5, 6, 10, 11, 12];
pub const ARRAY_ELEMENT_SIZE: u32 = 1;
