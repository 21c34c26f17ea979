use crate::sequence::reader::open_path;
use crate::sequence::{LogFileRef, OrderKey, SequenceError, open_lines};
use chrono::NaiveDate;
use flate2::Compression;
use flate2::write::GzEncoder;
use pretty_assertions::assert_eq;
use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;

fn write_gz(path: &std::path::Path, contents: &[u8]) {
    let mut encoder = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    encoder.write_all(contents).unwrap();
    encoder.finish().unwrap();
}

#[test]
fn reads_plain_lines_without_terminators() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("2024-01-01-1.log");
    fs::write(&path, "first\r\nsecond\n\nlast").unwrap();

    // Act
    let lines: Vec<String> = open_path(&path, false)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    // Assert
    assert_eq!(lines, vec!["first", "second", "", "last"]);
}

#[test]
fn reads_gzipped_lines_through_the_same_interface() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("2024-01-01-1.log.gz");
    write_gz(&path, b"[10:00:00] [Server thread/INFO]: hello\nsecond\n");

    let file = LogFileRef {
        path,
        compressed: true,
        anchor: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        key: OrderKey::Dated(vec![2024, 1, 1, 1]),
    };

    // Act
    let lines: Vec<String> = open_lines(&file).unwrap().collect::<Result<_, _>>().unwrap();

    // Assert
    assert_eq!(
        lines,
        vec!["[10:00:00] [Server thread/INFO]: hello", "second"]
    );
}

#[test]
fn decodes_invalid_utf8_lossily() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("latest.log");
    fs::write(&path, b"ok\nbad \xff byte\n").unwrap();

    // Act
    let lines: Vec<String> = open_path(&path, false)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    // Assert
    assert_eq!(lines[0], "ok");
    assert_eq!(lines[1], "bad \u{FFFD} byte");
}

#[test]
fn corrupt_gzip_surfaces_a_read_error_once() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("2024-01-01-1.log.gz");
    fs::write(&path, b"definitely not gzip").unwrap();

    // Act
    let results: Vec<_> = open_path(&path, true).unwrap().collect();

    // Assert
    assert_eq!(results.len(), 1);
    assert!(matches!(results[0], Err(SequenceError::Read { .. })));
}

#[test]
fn missing_file_is_an_open_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("gone.log");

    // Act
    let result = open_path(&path, false);

    // Assert
    match result {
        Err(SequenceError::Open { path: p, .. }) => assert_eq!(p, path),
        Err(other) => panic!("unexpected error: {:?}", other),
        Ok(_) => panic!("expected an open error"),
    }
}
