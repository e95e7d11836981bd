//! Tests for fatal error paths: nothing is written when a run fails.

mod helpers;

use std::io;

use domain_extractor::initialization::init_extractor;
use domain_extractor::{run_extraction, ExtractionError};
use tempfile::TempDir;

use helpers::{config_for, write_input};

#[test]
fn test_missing_input_creates_no_output() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("does_not_exist.csv");
    let output = dir.path().join("domains.txt");
    let extractor = init_extractor().expect("suffix list");

    let result = run_extraction(&config_for(&input, &output), &extractor, &mut io::sink());

    assert!(matches!(result, Err(ExtractionError::InputNotFound(ref p)) if *p == input));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_leaves_existing_output_untouched() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("does_not_exist.csv");
    let output = write_input(dir.path(), "domains.txt", "keep.me\n");
    let extractor = init_extractor().expect("suffix list");

    let result = run_extraction(&config_for(&input, &output), &extractor, &mut io::sink());

    assert!(result.is_err());
    assert_eq!(
        std::fs::read_to_string(&output).expect("read output"),
        "keep.me\n"
    );
}

#[test]
fn test_invalid_utf8_is_fatal_and_writes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("latin1.csv");
    std::fs::write(&input, b"example.com\ncaf\xe9.org,other.net\n").expect("write input");
    let output = dir.path().join("domains.txt");
    let extractor = init_extractor().expect("suffix list");

    let result = run_extraction(&config_for(&input, &output), &extractor, &mut io::sink());

    assert!(matches!(result, Err(ExtractionError::InputRead { .. })));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_is_fatal() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(dir.path(), "contacts.csv", "example.com\n");
    let output = dir.path().join("missing_dir").join("domains.txt");
    let extractor = init_extractor().expect("suffix list");

    let result = run_extraction(&config_for(&input, &output), &extractor, &mut io::sink());

    match result {
        Err(ExtractionError::OutputWrite { path, .. }) => assert_eq!(path, output),
        other => panic!("expected OutputWrite, got {other:?}"),
    }
}

#[test]
fn test_empty_input_writes_empty_output() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(dir.path(), "empty.csv", "");
    let output = dir.path().join("domains.txt");
    let extractor = init_extractor().expect("suffix list");

    let report = run_extraction(&config_for(&input, &output), &extractor, &mut io::sink())
        .expect("empty input is not an error");

    assert_eq!(report.total_unique, 0);
    assert_eq!(std::fs::read_to_string(&output).expect("read output"), "");
}
