use std::sync::OnceLock;

static HOST_IS_LITTLE_ENDIAN: OnceLock<bool> = OnceLock::new();

/// Returns `true` when the host stores multi-byte integers little-endian.
///
/// The answer is read from the in-memory layout of `0x0001u16` on first use
/// and cached for the rest of the process.
pub fn host_is_little_endian() -> bool {
    *HOST_IS_LITTLE_ENDIAN.get_or_init(|| 0x0001u16.to_ne_bytes()[0] == 0x01)
}

/// Convert a 16-bit field from wire order (little-endian) to host order.
pub fn wire_to_host16(value: u16) -> u16 {
    if host_is_little_endian() {
        value
    } else {
        value.swap_bytes()
    }
}

/// Convert a 16-bit field from host order to wire order (little-endian).
pub fn host_to_wire16(value: u16) -> u16 {
    if host_is_little_endian() {
        value
    } else {
        value.swap_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::{host_is_little_endian, host_to_wire16, wire_to_host16};

    #[test]
    fn oracle_matches_target_cfg() {
        assert_eq!(host_is_little_endian(), cfg!(target_endian = "little"));
    }

    #[test]
    fn oracle_is_stable() {
        let first = host_is_little_endian();
        for _ in 0..16 {
            assert_eq!(host_is_little_endian(), first);
        }
    }

    #[test]
    fn oracle_agrees_across_threads() {
        let expected = cfg!(target_endian = "little");
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(host_is_little_endian))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn wire_host_round_trip_all_values() {
        for v in 0..=u16::MAX {
            assert_eq!(wire_to_host16(host_to_wire16(v)), v);
            assert_eq!(host_to_wire16(wire_to_host16(v)), v);
        }
    }

    #[test]
    fn native_bytes_normalize_to_little_endian_value() {
        let wire = [0x34, 0x12];
        let raw = u16::from_ne_bytes(wire);
        assert_eq!(wire_to_host16(raw), 0x1234);
    }
}
