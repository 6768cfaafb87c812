//! Protocol decoding modules.
//!
//! Each protocol follows a layered structure:
//! - `layout`: byte offsets and ranges (source of truth)
//! - `reader`: safe byte access and protocol conventions
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `writer`: the inverse of `parser`, used for fixtures and tests
//! - `error`: explicit, actionable errors
//!
//! Parsers are pure and contain no I/O; transports and the CLI handle
//! byte acquisition and reporting.

pub mod common;
pub mod ld2450;
