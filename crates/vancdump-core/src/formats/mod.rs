//! Container format decoders.
//!
//! Each format follows a layered structure:
//! - `layout`: byte offsets, sizes and fixed tables (source of truth)
//! - `reader`: streaming access and format conventions (truncation mapping)
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Parsers are pure; readers own the input and decide where a clean end of
//! stream is allowed.

pub(crate) mod common;
pub mod mcc;
pub mod mxf;
pub mod rcwt;
pub mod vanc;
