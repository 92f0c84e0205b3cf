//! Byte-oriented input primitives.
//!
//! Binary decoders never call `Read` directly: every fixed-size field goes
//! through `ByteReader`, which reports a clean end of input separately from a
//! short read. Only the caller knows whether it sits on a record boundary, so
//! the decision between "stream finished" and "stream truncated" stays there.

mod error;
mod reader;

pub use error::{Shortfall, SourceError};
pub use reader::{ByteReader, ReadOutcome};
