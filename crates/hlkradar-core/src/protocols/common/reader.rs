/// `true` when every byte is `0x00`; an empty slice counts as all zero.
pub(crate) fn is_all_zero(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| b == 0)
}

#[cfg(test)]
mod tests {
    use super::is_all_zero;

    #[test]
    fn is_all_zero_true() {
        assert!(is_all_zero(&[0u8; 8]));
        assert!(is_all_zero(&[]));
    }

    #[test]
    fn is_all_zero_single_bit() {
        let mut bytes = [0u8; 8];
        bytes[7] = 0x01;
        assert!(!is_all_zero(&bytes));
    }
}
