use std::ops::Range;

use super::error::Ld2450Error;
use super::layout;
use crate::protocols::common::endian::wire_to_host16;
use crate::protocols::common::reader::is_all_zero;

pub struct Ld2450Reader<'a> {
    payload: &'a [u8],
}

impl<'a> Ld2450Reader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), Ld2450Error> {
        if self.payload.len() < needed {
            return Err(Ld2450Error::InsufficientData {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_slice(&self, range: Range<usize>) -> Result<&'a [u8], Ld2450Error> {
        self.payload
            .get(range.clone())
            .ok_or(Ld2450Error::InsufficientData {
                needed: range.end,
                actual: self.payload.len(),
            })
    }

    /// Read a little-endian wire field and normalize it to host order.
    pub fn read_u16_wire(&self, range: Range<usize>) -> Result<u16, Ld2450Error> {
        let bytes = self.read_slice(range)?;
        let field = <[u8; 2]>::try_from(bytes).map_err(|_| Ld2450Error::InsufficientData {
            needed: 2,
            actual: bytes.len(),
        })?;
        Ok(wire_to_host16(u16::from_ne_bytes(field)))
    }

    pub fn read_start_magic(&self) -> Result<[u8; 4], Ld2450Error> {
        let bytes = self.read_slice(layout::START_MAGIC_RANGE)?;
        Ok([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    pub fn read_end_magic(&self) -> Result<[u8; 2], Ld2450Error> {
        let bytes = self.read_slice(layout::END_MAGIC_RANGE)?;
        Ok([bytes[0], bytes[1]])
    }

    /// Bytes of target slot `index`, bounds-checked against the frame.
    pub fn read_slot(&self, index: usize) -> Result<&'a [u8], Ld2450Error> {
        self.read_slice(layout::slot_range(index))
    }

    /// `true` when the first slot-length bytes are all zero.
    pub fn is_empty_slot(&self) -> Result<bool, Ld2450Error> {
        let bytes = self.read_slice(0..layout::SLOT_LEN)?;
        Ok(is_all_zero(bytes))
    }
}
