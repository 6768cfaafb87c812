use log::trace;
use serde::{Deserialize, Serialize};

use super::error::Ld2450Error;
use super::layout;
use super::reader::Ld2450Reader;
use crate::protocols::common::sign::decode_signed_magnitude16;

/// One decoded target slot.
///
/// An absent target (all-zero slot on the wire) has every numeric field set
/// to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetReading {
    pub present: bool,
    pub x: i16,
    pub y: i16,
    pub speed: i16,
    pub resolution: u16,
}

impl TargetReading {
    pub const fn absent() -> Self {
        Self {
            present: false,
            x: 0,
            y: 0,
            speed: 0,
            resolution: 0,
        }
    }
}

/// All target slots of one frame, in wire order. The array index is the
/// slot identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    pub targets: [TargetReading; layout::TARGET_COUNT],
}

impl Frame {
    /// Present targets paired with their slot index.
    pub fn present_targets(&self) -> impl Iterator<Item = (usize, &TargetReading)> {
        self.targets
            .iter()
            .enumerate()
            .filter(|(_, target)| target.present)
    }

    pub fn present_count(&self) -> usize {
        self.present_targets().count()
    }
}

/// Decoder strictness.
///
/// The default matches sensor output as shipped: the end magic is not
/// checked and a 28-byte buffer without it still decodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Require the full 30-byte frame and a matching `55 CC` end magic.
    pub require_end_magic: bool,
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self {
            require_end_magic: true,
        }
    }
}

/// Decode one 8-byte target slot. Bytes past the first eight are ignored.
pub fn decode_target(bytes: &[u8]) -> Result<TargetReading, Ld2450Error> {
    let reader = Ld2450Reader::new(bytes);
    reader.require_len(layout::SLOT_LEN)?;

    // Checked before any field is read: a lone non-zero resolution next to
    // zero position/speed is still a present target.
    if reader.is_empty_slot()? {
        return Ok(TargetReading::absent());
    }

    let x = reader.read_u16_wire(layout::X_RANGE)?;
    let y = reader.read_u16_wire(layout::Y_RANGE)?;
    let speed = reader.read_u16_wire(layout::SPEED_RANGE)?;
    let resolution = reader.read_u16_wire(layout::RESOLUTION_RANGE)?;

    Ok(TargetReading {
        present: true,
        x: decode_signed_magnitude16(x),
        y: decode_signed_magnitude16(y),
        speed: decode_signed_magnitude16(speed),
        resolution,
    })
}

/// Decode a frame with the default (lenient) options.
///
/// # Examples
/// ```
/// use hlkradar_core::decode_frame;
///
/// let mut bytes = vec![0xAA, 0xFF, 0x03, 0x00];
/// bytes.extend_from_slice(&[0x05, 0x80, 0x0A, 0x80, 0x14, 0x00, 0xC8, 0x00]);
/// bytes.extend_from_slice(&[0u8; 16]);
///
/// let frame = decode_frame(&bytes)?;
/// assert_eq!(frame.targets[0].speed, -20);
/// assert!(!frame.targets[1].present);
/// # Ok::<(), hlkradar_core::Ld2450Error>(())
/// ```
pub fn decode_frame(bytes: &[u8]) -> Result<Frame, Ld2450Error> {
    decode_frame_with(bytes, &DecodeOptions::default())
}

/// Decode a frame. Either every slot decodes or an error is returned.
pub fn decode_frame_with(bytes: &[u8], options: &DecodeOptions) -> Result<Frame, Ld2450Error> {
    let reader = Ld2450Reader::new(bytes);
    reader.require_len(layout::START_MAGIC.len())?;

    let magic = reader.read_start_magic()?;
    if &magic != layout::START_MAGIC {
        return Err(Ld2450Error::BadMagic { found: magic });
    }

    if options.require_end_magic {
        reader.require_len(layout::FRAME_LEN)?;
        let end = reader.read_end_magic()?;
        if &end != layout::END_MAGIC {
            return Err(Ld2450Error::BadEndMagic { found: end });
        }
    } else {
        reader.require_len(layout::MIN_FRAME_LEN)?;
    }

    let mut frame = Frame::default();
    for (index, target) in frame.targets.iter_mut().enumerate() {
        *target = decode_target(reader.read_slot(index)?)?;
        trace!("slot {index}: {target:?}");
    }
    Ok(frame)
}
