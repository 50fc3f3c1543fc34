//! Integration tests for the whitespace dataset reader.

use nnfs_selection::io::dataset::{parse_dataset, read_dataset};

#[test]
fn parses_plain_and_scientific_tokens() {
    let text = "1 0.5 0.25\n2.0000000e+00  9.0000000e-01  1.0000000e-01\n";
    let ds = parse_dataset(text).unwrap();
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.feature_count(), 2);
    assert_eq!(ds.instance(0).label(), 1.0);
    assert_eq!(ds.instance(1).label(), 2.0);
    assert!((ds.instance(1).value(1) - 0.9).abs() < 1e-12);
}

#[test]
fn skips_blank_lines() {
    let text = "1 0.5\n\n   \n2 0.7\n";
    let ds = parse_dataset(text).unwrap();
    assert_eq!(ds.len(), 2);
}

#[test]
fn rejects_ragged_rows() {
    let err = parse_dataset("1 0.5 0.6\n2 0.7\n").unwrap_err();
    assert!(err.to_string().contains("inconsistent"));
}

#[test]
fn reports_the_offending_line_for_bad_tokens() {
    let err = parse_dataset("1 0.5\n2 zebra\n").unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("zebra"));
    assert!(message.contains("line 2"));
}

#[test]
fn missing_files_error_with_the_path() {
    let err = read_dataset("/nonexistent/dataset.txt").unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/dataset.txt"));
}

#[test]
fn empty_input_yields_an_empty_dataset() {
    let ds = parse_dataset("").unwrap();
    assert!(ds.is_empty());
    assert_eq!(ds.feature_count(), 0);
}
