//! vancdump core library: closed-caption ancillary data dumps.
//!
//! This crate decodes caption data from three container encodings used in
//! broadcast post-production and renders it as timestamped hex text:
//! raw RCWT caption streams, MXF ancillary data essence streams and MacCaption
//! MCC files. Decoders (layout/reader/parser) live in `formats`, shared
//! exact-length reads in `source`, and the pipelines that tie a decoder to
//! the timestamp transform and the line formatter in `dump`.
//!
//! Invariants:
//! - A clean end of input is only accepted at a record boundary; anywhere
//!   else it is a truncation error.
//! - Records are decoded, transformed and written one at a time.
//! - The timestamp state is owned by a single pipeline run.
//!
//! # Examples
//! ```
//! use std::io::Cursor;
//!
//! use vancdump_core::dump_vanc_from_mcc;
//!
//! let mcc = "File Format=MacCaption_MCC V1.0\n\n00:00:00:00\tT0280\n";
//! let mut out = Vec::new();
//! let summary = dump_vanc_from_mcc(Cursor::new(mcc), &mut out)?;
//! assert_eq!(String::from_utf8(out)?, "Line 9:   DID: 61; SDID: 01; Data: 80\n");
//! assert_eq!(summary.records, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod dump;
mod error;
pub mod formats;
pub mod source;

pub use dump::timestamp::{FrameRate, TimestampOptions, TimestampTransformer, UnknownFrameRate};
pub use dump::{DumpSummary, dump_rcwt, dump_vanc_from_mcc, dump_vanc_from_mxf_data_stream};
pub use error::{DumpError, ErrorKind};
