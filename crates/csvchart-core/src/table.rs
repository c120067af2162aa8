// File: crates/csvchart-core/src/table.rs
// Summary: CSV ingestion into an immutable header + row table.
// Notes:
// - Rows shorter than the header row leave the trailing columns absent, they
//   are not filled with empty strings. Extra trailing fields are dropped.
// - Fields are decoded leniently: invalid UTF-8 (e.g. Latin-1 exports) becomes
//   U+FFFD instead of failing the file. Blank lines are skipped by the reader.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ChartError, Result};

/// One data record keyed by column name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    cells: HashMap<String, String>,
}

impl Row {
    /// Raw value for `column`; `None` when the column is absent from this row.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let cells = iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { cells }
    }
}

/// Parsed CSV content: ordered headers plus ordered rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    /// Value at (`row_index`, `column`), `None` when the row is out of range
    /// or the column is absent from that row.
    pub fn value(&self, row_index: usize, column: &str) -> Option<&str> {
        self.rows.get(row_index).and_then(|r| r.get(column))
    }

    /// One entry per row, absent cells included as `None`.
    pub fn column_values(&self, column: &str) -> Vec<Option<&str>> {
        self.rows.iter().map(|r| r.get(column)).collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Table{{headers={:?}, rowCount={}, columnCount={}}}",
            self.headers,
            self.row_count(),
            self.column_count()
        )
    }
}

fn lossy(field: &[u8]) -> String {
    String::from_utf8_lossy(field).into_owned()
}

/// Read `path` as comma separated values. Record 0 is the header row.
pub fn read_csv(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ChartError::NotFound(path.to_path_buf()));
    }
    info!(path = %path.display(), "reading CSV file");

    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ChartError::NotFound(path.to_path_buf()),
        _ => ChartError::Io(e),
    })?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let parse_err = |source: csv::Error| ChartError::Parse { path: path.to_path_buf(), source };

    let mut records = rdr.byte_records();
    let headers: Vec<String> = match records.next() {
        Some(rec) => rec.map_err(parse_err)?.iter().map(lossy).collect(),
        None => return Err(ChartError::EmptyFile(path.to_path_buf())),
    };
    debug!(?headers, "CSV headers");

    let mut rows = Vec::new();
    for rec in records {
        let rec = rec.map_err(parse_err)?;
        let row: Row = headers
            .iter()
            .zip(rec.iter())
            .map(|(h, v)| (h.as_str(), lossy(v)))
            .collect();
        rows.push(row);
    }

    info!(rows = rows.len(), columns = headers.len(), "CSV read");
    Ok(Table::new(headers, rows))
}

/// True when `path` exists and carries a `.csv` extension (any case).
pub fn is_valid_csv(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    path.exists()
        && path
            .extension()
            .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("csv"))
            .unwrap_or(false)
}

/// Short description of a CSV file's shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInfo {
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub headers: Vec<String>,
}

impl fmt::Display for FileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File: {}\nRows: {}\nColumns: {}\nColumn names: {}",
            self.path.display(),
            self.rows,
            self.columns,
            self.headers.join(", ")
        )
    }
}

pub fn file_info(path: impl AsRef<Path>) -> Result<FileInfo> {
    let path = path.as_ref();
    let table = read_csv(path)?;
    Ok(FileInfo {
        path: path.to_path_buf(),
        rows: table.row_count(),
        columns: table.column_count(),
        headers: table.headers().to_vec(),
    })
}
