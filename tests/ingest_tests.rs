//! Ingestion tests: tokenizing, truncation, file errors, and whole-file runs.

use evensquare::IngestError;
use evensquare::ingest::{read_numbers, read_numbers_from_str, read_numbers_with};
use evensquare::process_file;
use evensquare::utils::config::{INGEST_RESERVE_CHUNK, MAX_CAPACITY, MMAP_THRESHOLD};
use std::io::Write;
use tempfile::NamedTempFile;

fn input_file(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn test_read_mixed_whitespace() {
    let got = read_numbers_from_str("1 2\n3\t4\r\n  5\n\n6\n", 100).unwrap();
    assert_eq!(got.as_slice(), &[1, 2, 3, 4, 5, 6]);
    assert!(!got.truncated);
    assert_eq!(got.stopped_at, None);
}

#[test]
fn test_read_stops_at_non_integer() {
    let got = read_numbers_from_str("10 20 abc 30", 100).unwrap();
    assert_eq!(got.as_slice(), &[10, 20]);
    assert_eq!(got.stopped_at, Some(6));
    assert!(!got.truncated);
}

#[test]
fn test_read_rejects_negative_and_out_of_range() {
    assert_eq!(read_numbers_from_str("-1 2", 10).unwrap().len(), 0);
    let got = read_numbers_from_str("4294967295 4294967296", 10).unwrap();
    assert_eq!(got.as_slice(), &[u32::MAX]);
    assert_eq!(got.stopped_at, Some(11));
}

#[test]
fn test_read_truncates_at_capacity() {
    let got = read_numbers_from_str("1 2 3 4 5", 3).unwrap();
    assert_eq!(got.as_slice(), &[1, 2, 3]);
    assert!(got.truncated);
    assert_eq!(got.numbers.limit(), 3);
}

#[test]
fn test_read_exactly_capacity_not_truncated() {
    let got = read_numbers_from_str("1 2 3\n", 3).unwrap();
    assert_eq!(got.len(), 3);
    assert!(!got.truncated);
}

#[test]
fn test_read_empty_input() {
    let got = read_numbers_from_str("", 10).unwrap();
    assert!(got.is_empty());
    let got = read_numbers_from_str(" \n\t ", 10).unwrap();
    assert!(got.is_empty());
}

#[test]
fn test_read_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let err = read_numbers(&path, 10).unwrap_err();
    assert!(matches!(err, IngestError::Open { .. }));
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_read_numbers_from_file() {
    let f = input_file("7 8 9\n");
    let got = read_numbers(f.path(), 10).unwrap();
    assert_eq!(got.as_slice(), &[7, 8, 9]);
}

#[test]
fn test_read_numbers_mapped_small_threshold() {
    let f = input_file("1 2 3 4 5 6\n");
    let mapped = read_numbers_with(f.path(), 100, 1).unwrap();
    let plain = read_numbers_with(f.path(), 100, u64::MAX).unwrap();
    assert_eq!(mapped.as_slice(), &[1, 2, 3, 4, 5, 6]);
    assert_eq!(mapped.as_slice(), plain.as_slice());
}

#[test]
fn test_read_numbers_mapped_empty_file() {
    let f = input_file("");
    let got = read_numbers_with(f.path(), 100, 0).unwrap();
    assert!(got.is_empty());
}

#[test]
fn test_read_numbers_file_at_mmap_threshold() {
    let f = NamedTempFile::new().unwrap();
    f.as_file().set_len(MMAP_THRESHOLD).unwrap();
    {
        let mut file = f.as_file();
        file.write_all(b"8 3 10 ").unwrap();
    }
    // The rest of the file is NUL bytes, which are not whitespace and stop the read.
    let got = read_numbers(f.path(), 1_000).unwrap();
    assert_eq!(got.as_slice(), &[8, 3, 10]);
    assert_eq!(got.stopped_at, Some(7));
}

#[test]
fn test_read_reservation_is_capped() {
    let text = "x ".repeat(4 * INGEST_RESERVE_CHUNK);
    let got = read_numbers_from_str(&text, MAX_CAPACITY).unwrap();
    assert!(got.is_empty());
    assert_eq!(got.stopped_at, Some(0));
    assert!(got.numbers.reserved() <= INGEST_RESERVE_CHUNK);
}

#[test]
fn test_read_grows_past_initial_reservation() {
    let text: String = (0..3 * INGEST_RESERVE_CHUNK as u32 / 2)
        .map(|i| format!("{} ", i % 10))
        .collect();
    let got = read_numbers_from_str(&text, MAX_CAPACITY).unwrap();
    assert_eq!(got.len(), 3 * INGEST_RESERVE_CHUNK / 2);
    assert!(!got.truncated);
}

// --- whole-file runs ---

#[test]
fn test_process_file_scenario() -> anyhow::Result<()> {
    let f = input_file("1 2 3 4 5 6");
    let (record, input, ws) = process_file(f.path(), 1_000)?;
    assert_eq!(input.as_slice(), &[1, 2, 3, 4, 5, 6]);
    assert_eq!(ws.filtered(), &[2, 4, 6]);
    assert_eq!(ws.squared(), &[4, 16, 36]);
    assert_eq!(record.filtered_size, 3);
    assert_eq!(format!("{:.6}", record.average), "18.666667");
    Ok(())
}

#[test]
fn test_process_file_no_valid_integers() -> anyhow::Result<()> {
    let f = input_file("hello world\n");
    let (record, _, _) = process_file(f.path(), 1_000)?;
    assert_eq!(record.input_size, 0);
    assert_eq!(record.filtered_size, 0);
    assert_eq!(record.average, 0.0);
    Ok(())
}

#[test]
fn test_process_file_truncated_input() -> anyhow::Result<()> {
    let contents: String = (1..=50).map(|i| format!("{i}\n")).collect();
    let f = input_file(&contents);
    let (record, input, _) = process_file(f.path(), 10)?;
    assert!(input.truncated);
    assert_eq!(record.input_size, 10);
    // 2, 4, 6, 8, 10
    assert_eq!(record.filtered_size, 5);
    assert!((record.average - 44.0).abs() < 1e-9);
    Ok(())
}
