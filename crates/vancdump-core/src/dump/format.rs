//! Text rendering of decoded records.
//!
//! RCWT blocks: `<sec>.<ms>: <triplet> ...`, at most five triplets per line,
//! continuation lines repeat the timestamp. VANC lines:
//! `Line <n>:   DID: <xx>; SDID: <xx>; Data: <xx xx ...>`.

use std::io::{self, Write};

use crate::formats::rcwt::RcwtRecord;
use crate::formats::vanc::VancLine;

pub const TRIPLETS_PER_LINE: usize = 5;

/// Render a millisecond time as `<seconds>.<millis>:`.
///
/// Seconds use floor division; the millisecond part is taken from the
/// absolute value.
///
/// # Examples
/// ```
/// use vancdump_core::dump::format::format_timestamp;
///
/// assert_eq!(format_timestamp(1_033), "1.033:");
/// assert_eq!(format_timestamp(0), "0.000:");
/// assert_eq!(format_timestamp(-1_500), "-2.500:");
/// ```
pub fn format_timestamp(ms: i64) -> String {
    format!("{}.{:03}:", ms.div_euclid(1000), ms.unsigned_abs() % 1000)
}

fn hex_bytes(bytes: &[u8], separator: &str) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Lines for one RCWT record at an already transformed `time`.
pub fn format_rcwt_block(time: i64, record: &RcwtRecord) -> Vec<String> {
    let prefix = format_timestamp(time);
    let triplets: Vec<&[u8]> = record.triplets().collect();
    if triplets.is_empty() {
        return vec![prefix];
    }
    triplets
        .chunks(TRIPLETS_PER_LINE)
        .map(|chunk| {
            let mut line = prefix.clone();
            for triplet in chunk {
                line.push(' ');
                line.push_str(&hex_bytes(triplet, ""));
            }
            line
        })
        .collect()
}

/// Write one RCWT block and return the number of lines written.
pub fn write_rcwt_block<W: Write>(out: &mut W, time: i64, record: &RcwtRecord) -> io::Result<u64> {
    let lines = format_rcwt_block(time, record);
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    Ok(lines.len() as u64)
}

/// # Examples
/// ```
/// use vancdump_core::dump::format::format_vanc_line;
/// use vancdump_core::formats::vanc::VancLine;
///
/// let line = VancLine::from_payload(9, &[0x61, 0x02, 0x01, 0xab, 0xcd]).unwrap();
/// assert_eq!(format_vanc_line(&line), "Line 9:   DID: 61; SDID: 02; Data: ab cd");
/// ```
pub fn format_vanc_line(line: &VancLine) -> String {
    format!(
        "Line {}:   DID: {:02x}; SDID: {:02x}; Data: {}",
        line.line_number,
        line.did,
        line.sdid,
        hex_bytes(&line.data, " ")
    )
}

pub fn write_vanc_line<W: Write>(out: &mut W, line: &VancLine) -> io::Result<()> {
    writeln!(out, "{}", format_vanc_line(line))
}

/// Quote attribute text as a string literal.
///
/// Single quotes are used unless the text contains `'` and no `"`. The
/// chosen quote and backslashes are escaped; tab, newline and carriage
/// return use their short escapes, and other control characters are
/// written as `\xhh`.
///
/// # Examples
/// ```
/// use vancdump_core::dump::format::quote_literal;
///
/// assert_eq!(quote_literal("30DF"), "'30DF'");
/// assert_eq!(quote_literal("it's"), "\"it's\"");
/// assert_eq!(quote_literal("a'b\"c"), "'a\\'b\"c'");
/// ```
pub fn quote_literal(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push(quote);
    for c in text.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\t' => quoted.push_str("\\t"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            c if c == quote => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\u{0}'..='\u{1f}' | '\u{7f}'..='\u{a0}' | '\u{ad}' => {
                quoted.push_str(&format!("\\x{:02x}", u32::from(c)));
            }
            c => quoted.push(c),
        }
    }
    quoted.push(quote);
    quoted
}

/// Write an MCC attribute with both sides quoted, e.g. `Attribute: 'UUID'='abc'`.
pub fn write_attribute<W: Write>(out: &mut W, key: &str, value: &str) -> io::Result<()> {
    writeln!(
        out,
        "Attribute: {}={}",
        quote_literal(key),
        quote_literal(value)
    )
}
