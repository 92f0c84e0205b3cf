use std::sync::LazyLock;

use regex::Regex;

use super::error::MccError;
use super::layout;

static CAPTION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(layout::CAPTION_PATTERN).expect("caption pattern is a valid regex")
});

/// Caption timecode in the form `hh:mm:ss:ff`. Values are not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeCode {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub frames: u8,
}

/// Classification of one MCC body line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MccLine<'a> {
    /// Blank line or `//` comment.
    Skip,
    Attribute {
        key: &'a str,
        value: &'a str,
    },
    Caption {
        timecode: TimeCode,
        payload: Vec<u8>,
    },
}

/// Check the first line of the file, without its line terminator.
pub fn check_signature(first_line: &str) -> Result<(), MccError> {
    if first_line != layout::SIGNATURE {
        return Err(MccError::BadSignature {
            found: first_line.to_string(),
        });
    }
    Ok(())
}

/// Classify and decode one body line. `line_number` is only used for errors.
///
/// # Examples
/// ```
/// use vancdump_core::formats::mcc::{MccLine, parse_line};
///
/// match parse_line("00:00:00:00\tT02AB", 5).unwrap() {
///     MccLine::Caption { payload, .. } => assert_eq!(payload, vec![0x61, 0x01, 0x02, 0xab]),
///     other => panic!("unexpected {other:?}"),
/// }
/// assert_eq!(
///     parse_line("Time Code Rate=30DF", 6).unwrap(),
///     MccLine::Attribute { key: "Time Code Rate", value: "30DF" }
/// );
/// ```
pub fn parse_line(line: &str, line_number: usize) -> Result<MccLine<'_>, MccError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(layout::COMMENT_PREFIX) {
        return Ok(MccLine::Skip);
    }
    if let Some((key, value)) = line.split_once(layout::ATTRIBUTE_SEPARATOR) {
        return Ok(MccLine::Attribute { key, value });
    }

    let unknown = || MccError::UnknownLine {
        line: line_number,
        text: line.to_string(),
    };
    let captures = CAPTION_LINE.captures(line).ok_or_else(unknown)?;
    let field = |index: usize| -> Result<u8, MccError> {
        captures
            .get(index)
            .and_then(|m| m.as_str().parse().ok())
            .ok_or_else(unknown)
    };
    let timecode = TimeCode {
        hours: field(1)?,
        minutes: field(2)?,
        seconds: field(3)?,
        frames: field(4)?,
    };
    let encoded = captures.get(5).map_or("", |m| m.as_str());
    let payload = decode_payload(encoded, line_number)?;
    Ok(MccLine::Caption { timecode, payload })
}

/// Expand shorthand letters and decode the resulting hex string.
///
/// # Examples
/// ```
/// use vancdump_core::formats::mcc::decode_payload;
///
/// assert_eq!(decode_payload("G", 1).unwrap(), vec![0xfa, 0x00, 0x00]);
/// assert_eq!(decode_payload("z", 1).unwrap(), vec![0x00]);
/// ```
pub fn decode_payload(encoded: &str, line_number: usize) -> Result<Vec<u8>, MccError> {
    let mut hex_digits = String::with_capacity(encoded.len() * 2);
    for letter in encoded.chars().map(|c| c.to_ascii_uppercase()) {
        let expanded = u8::try_from(letter).ok().and_then(layout::expansion);
        match expanded {
            Some(run) => hex_digits.push_str(run),
            None => hex_digits.push(letter),
        }
    }
    if hex_digits.len() % 2 != 0 {
        return Err(MccError::OddLengthPayload {
            line: line_number,
            len: hex_digits.len(),
        });
    }
    hex::decode(&hex_digits).map_err(|err| MccError::InvalidPayload {
        line: line_number,
        message: err.to_string(),
    })
}
