use std::fs;
use tempfile::tempdir;

use vbicode_cli::commands::{check, encode, Coding};

/// Helper: protected stream for `count` bytes with one damaged unit
fn protected_stream_with_damage(count: u8) -> Vec<u8> {
    let payload: Vec<u8> = (0..count).collect();
    let mut words = vbicode_core::hamming16::encode_all(&payload);
    // Double-bit damage keeps odd weight: detected but uncorrectable.
    words[0] ^= 0b0000_0110;
    words
}

#[test]
fn test_check_writes_json_report() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("stream.bin");
    let report_path = dir.path().join("report.json");

    fs::write(&input, protected_stream_with_damage(10)).unwrap();

    check::execute(
        input.to_str().unwrap(),
        Coding::Hamming16,
        false,
        Some(report_path.to_str().unwrap()),
    )
    .unwrap();

    let json = fs::read_to_string(&report_path).unwrap();
    let report: check::CheckReport = serde_json::from_str(&json).unwrap();

    assert_eq!(report.coding, "hamming16");
    assert_eq!(report.units, 10);
    assert_eq!(report.uncorrectable, 1);
    assert_eq!(report.valid + report.corrected + report.uncorrectable, 10);
}

#[test]
fn test_check_clean_parity_stream() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("text.bin");
    let encoded = dir.path().join("protected.bin");
    let report_path = dir.path().join("report.json");

    fs::write(&input, b"PAGE 100 HEADLINES").unwrap();
    encode::execute(
        input.to_str().unwrap(),
        encoded.to_str().unwrap(),
        Coding::Parity,
        false,
        false,
    )
    .unwrap();

    check::execute(
        encoded.to_str().unwrap(),
        Coding::Parity,
        false,
        Some(report_path.to_str().unwrap()),
    )
    .unwrap();

    let report: check::CheckReport =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report.uncorrectable, 0);
    assert_eq!(report.valid, 18);
    assert_eq!(report.reliable_rate, 100.0);
}

#[test]
fn test_check_rejects_odd_hamming16_stream() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("stream.bin");

    fs::write(&input, [0x15u8, 0x02, 0x49]).unwrap();

    let result = check::execute(input.to_str().unwrap(), Coding::Hamming16, false, None);
    assert!(result.is_err());
}
