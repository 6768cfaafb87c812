use super::error::Ld2450Error;
use super::layout;
use super::parser::{Frame, TargetReading};
use crate::protocols::common::endian::host_to_wire16;
use crate::protocols::common::sign::encode_signed_magnitude16;

/// Encode one target slot. Absent targets become eight zero bytes.
pub fn encode_target(target: &TargetReading) -> Result<[u8; layout::SLOT_LEN], Ld2450Error> {
    let mut slot = [0u8; layout::SLOT_LEN];
    if !target.present {
        return Ok(slot);
    }

    let x = signed_field("x", target.x)?;
    let y = signed_field("y", target.y)?;
    let speed = signed_field("speed", target.speed)?;

    write_u16_wire(&mut slot, layout::X_RANGE.start, x);
    write_u16_wire(&mut slot, layout::Y_RANGE.start, y);
    write_u16_wire(&mut slot, layout::SPEED_RANGE.start, speed);
    write_u16_wire(&mut slot, layout::RESOLUTION_RANGE.start, target.resolution);
    Ok(slot)
}

/// Encode a full frame, start and end magic included.
pub fn encode_frame(frame: &Frame) -> Result<[u8; layout::FRAME_LEN], Ld2450Error> {
    let mut bytes = [0u8; layout::FRAME_LEN];
    bytes[layout::START_MAGIC_RANGE].copy_from_slice(layout::START_MAGIC);
    for (index, target) in frame.targets.iter().enumerate() {
        bytes[layout::slot_range(index)].copy_from_slice(&encode_target(target)?);
    }
    bytes[layout::END_MAGIC_RANGE].copy_from_slice(layout::END_MAGIC);
    Ok(bytes)
}

fn signed_field(field: &'static str, value: i16) -> Result<u16, Ld2450Error> {
    encode_signed_magnitude16(value).ok_or(Ld2450Error::Unrepresentable { field, value })
}

fn write_u16_wire(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset..offset + 2].copy_from_slice(&host_to_wire16(value).to_ne_bytes());
}
