//! MacCaption MCC decoding.
//!
//! MCC is line-oriented text: a fixed signature line, then comments,
//! `key=value` attributes and caption lines of the form `HH:MM:SS:FF<TAB>`
//! followed by hex where single letters stand for common byte runs (`G` is
//! one `FA 00 00` padding triplet, `Z` a lone `00`, ...). Captions carry no
//! VANC line number, so every decoded payload is reported on a fixed display
//! line.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::MccError;
pub use parser::{MccLine, TimeCode, check_signature, decode_payload, parse_line};
pub use reader::MccReader;
