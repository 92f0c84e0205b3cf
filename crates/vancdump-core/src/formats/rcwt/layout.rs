use std::ops::Range;

pub const FILE_HEADER_LEN: usize = 11;
pub const MAGIC_RANGE: Range<usize> = 0..3;
pub const VERSION_RANGE: Range<usize> = 6..8;

pub const MAGIC: [u8; 3] = [0xcc, 0xcc, 0xed];
pub const SUPPORTED_VERSION: [u8; 2] = [0x00, 0x01];

pub const RECORD_HEADER_LEN: usize = 10;
pub const TIME_RANGE: Range<usize> = 0..8;
pub const COUNT_RANGE: Range<usize> = 8..10;

pub const TRIPLET_LEN: usize = 3;
