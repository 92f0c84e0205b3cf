//! MXF ancillary data essence stream decoding.
//!
//! Each packet is a big-endian line count (always 1 here) followed by one
//! VANC line: line number, wrapping type, sample coding, sample count and a
//! byte array whose first `sample_count` bytes are the VANC payload.
//! Unsupported sample codings, multi-line packets and multi-byte array
//! elements are rejected rather than guessed at.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::MxfError;
pub use parser::{MxfPacketHeader, parse_line_count, parse_packet_header};
pub use reader::{MxfPacket, MxfReader};
