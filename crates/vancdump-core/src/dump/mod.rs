//! Dump pipelines: decoder -> timestamp/payload transform -> line formatter.
//!
//! Every pipeline streams one record at a time from its input to `out` and
//! never buffers the whole file. Lines written before a fatal error stay
//! written; the error is returned to the caller.

pub mod format;
pub mod timestamp;

use std::io::{BufRead, Read, Write};

use serde::Serialize;
use tracing::debug;

use crate::error::DumpError;
use crate::formats::mcc::{self, MccLine, MccReader};
use crate::formats::mxf::MxfReader;
use crate::formats::rcwt::RcwtReader;
use crate::formats::vanc::VancLine;
use format::{write_attribute, write_rcwt_block, write_vanc_line};
use timestamp::{TimestampOptions, TimestampTransformer};

/// Counters reported at the end of a dump.
///
/// # Examples
/// ```
/// use vancdump_core::DumpSummary;
///
/// let summary = DumpSummary::default();
/// assert_eq!(summary.records, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DumpSummary {
    /// RCWT records, MXF packets or MCC caption lines decoded.
    pub records: u64,
    /// Text lines written to the output.
    pub lines_written: u64,
    /// VANC payloads shorter than two bytes, skipped without output.
    pub dropped: u64,
    /// MCC attribute lines echoed.
    pub attributes: u64,
}

impl DumpSummary {
    fn emit_vanc<W: Write>(
        &mut self,
        out: &mut W,
        line_number: u16,
        payload: &[u8],
    ) -> Result<(), DumpError> {
        match VancLine::from_payload(line_number, payload) {
            Some(line) => {
                write_vanc_line(out, &line).map_err(DumpError::Output)?;
                self.lines_written += 1;
            }
            None => {
                debug!(line_number, len = payload.len(), "dropping short VANC payload");
                self.dropped += 1;
            }
        }
        Ok(())
    }
}

/// Dump an RCWT stream as timestamped caption triplets.
///
/// # Errors
/// Format errors for a bad header, `Truncated` for a partial record, `Io`
/// when reading or writing fails.
pub fn dump_rcwt<R: Read, W: Write>(
    input: R,
    out: &mut W,
    options: TimestampOptions,
) -> Result<DumpSummary, DumpError> {
    let mut reader = RcwtReader::new(input)?;
    let mut transform = TimestampTransformer::new(options);
    let mut summary = DumpSummary::default();

    while let Some(record) = reader.next_record()? {
        summary.records += 1;
        let time = transform.apply(record.time);
        summary.lines_written += write_rcwt_block(out, time, &record).map_err(DumpError::Output)?;
    }

    debug!(records = summary.records, lines = summary.lines_written, "RCWT stream finished");
    Ok(summary)
}

/// Dump the VANC lines of an extracted MXF ancillary data stream.
pub fn dump_vanc_from_mxf_data_stream<R: Read, W: Write>(
    input: R,
    out: &mut W,
) -> Result<DumpSummary, DumpError> {
    let mut reader = MxfReader::new(input);
    let mut summary = DumpSummary::default();

    while let Some(packet) = reader.next_packet()? {
        summary.records += 1;
        summary.emit_vanc(out, packet.header.line_number, &packet.payload)?;
    }

    debug!(
        packets = summary.records,
        dropped = summary.dropped,
        "MXF data stream finished"
    );
    Ok(summary)
}

/// Dump the attributes and VANC payloads of an MCC file.
pub fn dump_vanc_from_mcc<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
) -> Result<DumpSummary, DumpError> {
    let mut reader = MccReader::new(input)?;
    let mut summary = DumpSummary::default();

    while let Some((line_number, text)) = reader.next_line()? {
        match mcc::parse_line(&text, line_number)? {
            MccLine::Skip => {}
            MccLine::Attribute { key, value } => {
                write_attribute(out, key, value).map_err(DumpError::Output)?;
                summary.attributes += 1;
                summary.lines_written += 1;
            }
            MccLine::Caption { payload, .. } => {
                summary.records += 1;
                summary.emit_vanc(out, mcc::layout::DISPLAY_LINE_NUMBER, &payload)?;
            }
        }
    }

    debug!(
        captions = summary.records,
        attributes = summary.attributes,
        dropped = summary.dropped,
        "MCC file finished"
    );
    Ok(summary)
}
