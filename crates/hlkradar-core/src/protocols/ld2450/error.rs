use thiserror::Error;

/// Errors returned by LD2450 frame decoding and encoding.
///
/// # Examples
/// ```
/// use hlkradar_core::Ld2450Error;
///
/// let err = Ld2450Error::InsufficientData { needed: 28, actual: 4 };
/// assert!(err.to_string().contains("insufficient data"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Ld2450Error {
    #[error("insufficient data: need {needed} bytes, got {actual}")]
    InsufficientData { needed: usize, actual: usize },
    #[error("bad start magic: expected aa ff 03 00, got {}", hex_bytes(.found))]
    BadMagic { found: [u8; 4] },
    #[error("bad end magic: expected 55 cc, got {}", hex_bytes(.found))]
    BadEndMagic { found: [u8; 2] },
    #[error("{field} value {value} cannot be sign-magnitude encoded")]
    Unrepresentable { field: &'static str, value: i16 },
}

fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
