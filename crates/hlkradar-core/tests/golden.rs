use std::fs;
use std::path::{Path, PathBuf};

use hlkradar_core::{DecodeOptions, Ld2450Error, Report, decode_report, encode_frame};

fn golden_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("golden")
}

fn load_expected_report(case: &str) -> Report {
    let expected_path = golden_root().join(case).join("expected_report.json");
    let expected_json = fs::read_to_string(&expected_path).expect("read expected_report.json");
    serde_json::from_str(&expected_json).expect("parse expected report")
}

fn load_input(case: &str) -> Vec<u8> {
    fs::read(golden_root().join(case).join("input.bin")).expect("read input.bin")
}

fn run_golden(case: &str) {
    let bytes = load_input(case);
    let expected = load_expected_report(case);

    let actual = decode_report(&expected.input.path, &bytes, &DecodeOptions::default())
        .expect("decode frame");

    let actual_value = serde_json::to_value(actual).expect("serialize actual");
    let expected_value = serde_json::to_value(expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {case}");
}

#[test]
fn golden_single_target() {
    run_golden("single_target");
}

#[test]
fn golden_three_targets() {
    run_golden("three_targets");
}

#[test]
fn golden_no_targets() {
    run_golden("no_targets");
}

#[test]
fn golden_missing_end_magic() {
    run_golden("missing_end_magic");
}

#[test]
fn golden_missing_end_magic_fails_strict() {
    let bytes = load_input("missing_end_magic");
    let err = decode_report("input.bin", &bytes, &DecodeOptions::strict()).unwrap_err();
    assert!(matches!(err, Ld2450Error::InsufficientData { needed: 30, actual: 28 }));
}

#[test]
fn golden_inputs_match_encoder() {
    for case in ["single_target", "three_targets", "no_targets"] {
        let expected = load_expected_report(case);
        let encoded = encode_frame(&expected.frame).expect("encode frame");
        assert_eq!(load_input(case), encoded.to_vec(), "fixture drift in {case}");
    }
}

#[test]
fn golden_three_targets_all_present() {
    let report = load_expected_report("three_targets");
    assert_eq!(report.frame.present_count(), 3);
    assert_eq!(report.frame.targets[2].y, -32767);
}
