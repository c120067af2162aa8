// File: crates/csvchart-core/tests/ingest.rs
// Purpose: CSV ingestion into headers + rows, including ragged rows and failure modes.

use csvchart_core::{file_info, is_valid_csv, read_csv, ChartError, Row};
use std::path::PathBuf;

fn write_csv(dir: &tempfile::TempDir, name: &str, body: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).expect("write csv");
    path
}

#[test]
fn reads_headers_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "simple.csv", b"a,b\n1,2\n");

    let table = read_csv(&path).expect("read");
    assert_eq!(table.headers(), ["a", "b"]);
    assert_eq!(table.rows(), [Row::from_iter([("a", "1"), ("b", "2")])]);
}

#[test]
fn trims_headers_and_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "spaces.csv", b" month , sales \n Jan ,  10 \n");

    let table = read_csv(&path).unwrap();
    assert_eq!(table.headers(), ["month", "sales"]);
    assert_eq!(table.value(0, "month"), Some("Jan"));
    assert_eq!(table.value(0, "sales"), Some("10"));
}

#[test]
fn quoted_fields_keep_commas_and_quotes() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "quoted.csv", b"name,value\n\"Smith, J\",\"say \"\"hi\"\"\"\n");

    let table = read_csv(&path).unwrap();
    assert_eq!(table.value(0, "name"), Some("Smith, J"));
    assert_eq!(table.value(0, "value"), Some("say \"hi\""));
}

#[test]
fn short_rows_leave_columns_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "short.csv", b"a,b,c\n1\n4,,6\n");

    let table = read_csv(&path).unwrap();
    let first = &table.rows()[0];
    assert_eq!(first.get("a"), Some("1"));
    assert!(!first.contains("b"));
    assert_eq!(first.get("c"), None);
    assert_eq!(first.len(), 1);

    // Present but empty is not the same as absent.
    let second = &table.rows()[1];
    assert_eq!(second.get("b"), Some(""));
    assert_eq!(table.column_values("b"), vec![None, Some("")]);
}

#[test]
fn long_rows_are_truncated_to_header_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "long.csv", b"a,b\n1,2,3,4\n");

    let table = read_csv(&path).unwrap();
    let row = &table.rows()[0];
    assert_eq!(row.len(), 2);
    assert_eq!(row.get("b"), Some("2"));
}

#[test]
fn header_only_file_has_no_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "header.csv", b"x,y\n");

    let table = read_csv(&path).unwrap();
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.row_count(), 0);
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_csv(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, ChartError::NotFound(_)), "got {err:?}");
}

#[test]
fn empty_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "empty.csv", b"");
    let err = read_csv(&path).unwrap_err();
    assert!(matches!(err, ChartError::EmptyFile(_)), "got {err:?}");
}

#[test]
fn latin1_bytes_are_decoded_lossily() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "regiao.csv", b"Regi\xe3o,total\nS\xe3o Paulo,10\nRio,20\n");

    let table = read_csv(&path).expect("non-UTF-8 input still reads");
    assert_eq!(table.headers(), ["Regi\u{FFFD}o", "total"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.value(0, "Regi\u{FFFD}o"), Some("S\u{FFFD}o Paulo"));
    assert_eq!(table.value(1, "total"), Some("20"));
}

#[test]
fn blank_lines_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "blank.csv", b"a,b\n\n1,2\n\n");
    let table = read_csv(&path).unwrap();
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.value(0, "b"), Some("2"));

    let only_blank = write_csv(&dir, "only_blank.csv", b"\n\n");
    let err = read_csv(&only_blank).unwrap_err();
    assert!(matches!(err, ChartError::EmptyFile(_)), "got {err:?}");
}

#[test]
fn table_helpers() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "helpers.csv", b"k,v\na,1\nb,2\n");

    let table = read_csv(&path).unwrap();
    assert!(table.has_column("k"));
    assert!(!table.has_column("missing"));
    assert_eq!(table.value(5, "k"), None);
    assert_eq!(table.column_values("v"), vec![Some("1"), Some("2")]);
    assert_eq!(table.to_string(), "Table{headers=[\"k\", \"v\"], rowCount=2, columnCount=2}");
}

#[test]
fn csv_validity_checks_existence_and_extension() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_csv(&dir, "data.CSV", b"a\n1\n");
    let txt = write_csv(&dir, "data.txt", b"a\n1\n");

    assert!(is_valid_csv(&csv));
    assert!(!is_valid_csv(&txt));
    assert!(!is_valid_csv(dir.path().join("ghost.csv")));
}

#[test]
fn file_info_describes_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "info.csv", b"a,b,c\n1,2,3\n4,5,6\n");

    let info = file_info(&path).unwrap();
    assert_eq!(info.rows, 2);
    assert_eq!(info.columns, 3);
    let text = info.to_string();
    assert!(text.ends_with("Rows: 2\nColumns: 3\nColumn names: a, b, c"), "{text}");
}
