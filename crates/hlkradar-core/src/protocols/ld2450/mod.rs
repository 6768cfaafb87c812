//! HLK-LD2450 target report decoding.
//!
//! A report frame is a 4-byte start magic followed by three fixed 8-byte
//! target slots and a 2-byte end magic. Each slot holds x, y, speed
//! (sign-magnitude, bit 15 set for non-negative) and resolution (unsigned),
//! all little-endian on the wire. An all-zero slot means "no target".
//!
//! Decoding is all-or-nothing: a short buffer or a wrong start magic yields
//! an error and no targets. The end magic is only checked when
//! `DecodeOptions::require_end_magic` is set. Offsets live in `layout`,
//! bounds-checked reads and byte-order normalization in `reader`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod writer;

pub use error::Ld2450Error;
pub use parser::{DecodeOptions, Frame, TargetReading, decode_frame, decode_frame_with, decode_target};
pub use writer::{encode_frame, encode_target};
