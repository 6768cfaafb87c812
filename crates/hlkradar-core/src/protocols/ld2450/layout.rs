use std::ops::Range;

pub const START_MAGIC: &[u8; 4] = &[0xAA, 0xFF, 0x03, 0x00];
pub const END_MAGIC: &[u8; 2] = &[0x55, 0xCC];

pub const START_MAGIC_RANGE: Range<usize> = 0..4;

/// Number of target slots carried by every frame.
pub const TARGET_COUNT: usize = 3;
pub const SLOT_LEN: usize = 8;
pub const SLOTS_OFFSET: usize = START_MAGIC.len();

// Field ranges relative to the start of a slot.
pub const X_RANGE: Range<usize> = 0..2;
pub const Y_RANGE: Range<usize> = 2..4;
pub const SPEED_RANGE: Range<usize> = 4..6;
pub const RESOLUTION_RANGE: Range<usize> = 6..8;

/// Bytes needed to decode every slot (end magic excluded).
pub const MIN_FRAME_LEN: usize = SLOTS_OFFSET + SLOT_LEN * TARGET_COUNT;
pub const END_MAGIC_RANGE: Range<usize> = MIN_FRAME_LEN..MIN_FRAME_LEN + END_MAGIC.len();
/// Full frame length, end magic included.
pub const FRAME_LEN: usize = END_MAGIC_RANGE.end;

/// Byte range of slot `index` within a frame.
pub const fn slot_range(index: usize) -> Range<usize> {
    let start = SLOTS_OFFSET + index * SLOT_LEN;
    start..start + SLOT_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_lengths() {
        assert_eq!(MIN_FRAME_LEN, 28);
        assert_eq!(FRAME_LEN, 30);
    }

    #[test]
    fn slots_are_contiguous() {
        assert_eq!(slot_range(0), 4..12);
        assert_eq!(slot_range(1), 12..20);
        assert_eq!(slot_range(TARGET_COUNT - 1).end, END_MAGIC_RANGE.start);
    }
}
