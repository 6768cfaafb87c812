//! Conventions shared by protocol decoders: host byte order and the
//! sign-magnitude integer form.

pub mod endian;
pub(crate) mod reader;
pub mod sign;

pub use endian::{host_is_little_endian, host_to_wire16, wire_to_host16};
pub use sign::{decode_signed_magnitude16, encode_signed_magnitude16};
