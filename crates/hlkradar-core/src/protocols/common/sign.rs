const SIGN_FLAG: u16 = 0x8000;
const MAGNITUDE_MASK: u16 = 0x7FFF;

/// Decode a sign-magnitude 16-bit value.
///
/// Bit 15 set means the low 15 bits are the (non-negative) value; bit 15
/// clear means the value is the negated magnitude. This is not two's
/// complement: `0x0000` and `0x8000` both decode to `0`.
///
/// The input must already be in host order.
pub fn decode_signed_magnitude16(raw: u16) -> i16 {
    let magnitude = (raw & MAGNITUDE_MASK) as i16;
    if raw & SIGN_FLAG != 0 {
        magnitude
    } else {
        -magnitude
    }
}

/// Encode a value in sign-magnitude form. Zero is written with the
/// non-negative flag set.
///
/// Returns `None` for `i16::MIN`, which has no 15-bit magnitude.
pub fn encode_signed_magnitude16(value: i16) -> Option<u16> {
    if value == i16::MIN {
        return None;
    }
    let magnitude = value.unsigned_abs();
    if value >= 0 {
        Some(SIGN_FLAG | magnitude)
    } else {
        Some(magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_signed_magnitude16, encode_signed_magnitude16};

    #[test]
    fn both_zeros_decode_to_zero() {
        assert_eq!(decode_signed_magnitude16(0x8000), 0);
        assert_eq!(decode_signed_magnitude16(0x0000), 0);
    }

    #[test]
    fn flag_set_is_non_negative() {
        assert_eq!(decode_signed_magnitude16(0x8005), 5);
        assert_eq!(decode_signed_magnitude16(0xFFFF), 32767);
    }

    #[test]
    fn flag_clear_is_negative() {
        assert_eq!(decode_signed_magnitude16(0x0005), -5);
        assert_eq!(decode_signed_magnitude16(0x7FFF), -32767);
    }

    #[test]
    fn differs_from_twos_complement() {
        assert_ne!(decode_signed_magnitude16(0xFFFB), 0xFFFBu16 as i16);
    }

    #[test]
    fn every_input_stays_in_range() {
        for raw in 0..=u16::MAX {
            let value = decode_signed_magnitude16(raw);
            assert!(value != i16::MIN);
        }
    }

    #[test]
    fn encode_inverts_decode() {
        for value in [-32767i16, -200, -1, 0, 1, 5, 32767] {
            let raw = encode_signed_magnitude16(value).unwrap();
            assert_eq!(decode_signed_magnitude16(raw), value);
        }
        assert_eq!(encode_signed_magnitude16(0), Some(0x8000));
        assert_eq!(encode_signed_magnitude16(-5), Some(0x0005));
    }

    #[test]
    fn encode_rejects_min() {
        assert_eq!(encode_signed_magnitude16(i16::MIN), None);
    }
}
