//! HLK radar core library: decoding of LD2450 target report frames.
//!
//! The crate turns one complete, already-delimited frame buffer into three
//! target readings (position, speed, resolution, presence). Decoding is
//! byte-oriented and side-effect free; serial transports and file access
//! belong to callers such as the `hlkradar` CLI. Protocol offsets live in
//! `layout`, bounds-checked reads in `reader`, and domain decoding in
//! `parser`.
//!
//! Invariants:
//! - A frame either decodes completely or yields a single error.
//! - Slots are decoded independently; an all-zero slot is an absent target.
//! - Every 16-bit field is normalized to host order exactly once, before
//!   sign-magnitude interpretation.
//! - Host byte order is detected once per process and never changes.
//!
//! # Examples
//! ```
//! use hlkradar_core::{decode_frame, encode_frame, Frame, TargetReading};
//!
//! let mut frame = Frame::default();
//! frame.targets[0] = TargetReading { present: true, x: -120, y: 800, speed: 0, resolution: 360 };
//!
//! let bytes = encode_frame(&frame)?;
//! assert_eq!(decode_frame(&bytes)?, frame);
//! # Ok::<(), hlkradar_core::Ld2450Error>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod protocols;

pub use protocols::common::{
    decode_signed_magnitude16, encode_signed_magnitude16, host_is_little_endian, host_to_wire16,
    wire_to_host16,
};
pub use protocols::ld2450::layout::{FRAME_LEN, MIN_FRAME_LEN, TARGET_COUNT};
pub use protocols::ld2450::{
    DecodeOptions, Frame, Ld2450Error, TargetReading, decode_frame, decode_frame_with,
    decode_target, encode_frame, encode_target,
};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Decoded frame together with where it came from.
///
/// # Examples
/// ```
/// use hlkradar_core::{Frame, make_report};
///
/// let report = make_report("frame.bin", 30, Frame::default());
/// assert_eq!(report.report_version, hlkradar_core::REPORT_VERSION);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// Input metadata.
    pub input: InputInfo,
    /// Decoded target slots in wire order.
    pub frame: Frame,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "hlkradar").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input metadata embedded in reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path (or `-` for inline hex) as provided by the caller.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Build a report around an already decoded frame.
pub fn make_report(input_path: &str, input_bytes: u64, frame: Frame) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "hlkradar".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        frame,
    }
}

/// Decode `bytes` and wrap the result in a report.
///
/// # Examples
/// ```
/// use hlkradar_core::{DecodeOptions, decode_report};
///
/// let err = decode_report("short.bin", &[0xAA, 0xFF], &DecodeOptions::default()).unwrap_err();
/// assert!(err.to_string().contains("insufficient data"));
/// ```
pub fn decode_report(
    input_path: &str,
    bytes: &[u8],
    options: &DecodeOptions,
) -> Result<Report, Ld2450Error> {
    let frame = decode_frame_with(bytes, options)?;
    Ok(make_report(input_path, bytes.len() as u64, frame))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_in_wire_order() {
        let mut frame = Frame::default();
        frame.targets[2] = TargetReading {
            present: true,
            x: -5,
            y: 10,
            speed: 0,
            resolution: 200,
        };
        let report = make_report("frame.bin", 30, frame);

        let value = serde_json::to_value(&report).expect("report json");
        assert_eq!(value["report_version"], 1);
        assert_eq!(value["tool"]["name"], "hlkradar");
        assert_eq!(value["input"]["bytes"], 30);

        let targets = value["frame"]["targets"].as_array().expect("targets");
        assert_eq!(targets.len(), TARGET_COUNT);
        assert_eq!(targets[0]["present"], false);
        assert_eq!(targets[2]["x"], -5);
        assert_eq!(targets[2]["resolution"], 200);
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = make_report("-", 28, Frame::default());
        let json = serde_json::to_string(&report).expect("report json");
        let parsed: Report = serde_json::from_str(&json).expect("parse report");
        assert_eq!(parsed, report);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: DecodeOptions = serde_json::from_str("{}").expect("options");
        assert_eq!(options, DecodeOptions::default());
        let options: DecodeOptions =
            serde_json::from_str(r#"{"require_end_magic":true}"#).expect("options");
        assert!(options.require_end_magic);
    }
}
