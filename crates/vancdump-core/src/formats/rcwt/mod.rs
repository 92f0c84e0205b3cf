//! RCWT caption stream decoding.
//!
//! An RCWT stream is an 11-byte file header followed by records of a 10-byte
//! header (little-endian millisecond time and triplet count) and `3 × count`
//! caption bytes. The header magic and version are validated once; a clean
//! end of input is accepted only where a record header would start.
//!
//! Offsets live in `layout`, pure decoding in `parser`, and the streaming
//! record loop with its truncation rules in `reader`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::RcwtError;
pub use parser::{RcwtHeader, RcwtRecord, RecordHeader, parse_file_header, parse_record_header};
pub use reader::RcwtReader;
