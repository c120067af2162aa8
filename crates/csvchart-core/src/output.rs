// File: crates/csvchart-core/src/output.rs
// Summary: Derive the PNG path written next to the input CSV.

use std::path::{Path, PathBuf};

use crate::kind::ChartKind;

/// `<dir>/<stem>_<kind>.png`, where `dir` is the input's parent or `.` when
/// the input is a bare file name.
pub fn output_path(input: impl AsRef<Path>, kind: ChartKind) -> PathBuf {
    let input = input.as_ref();
    let base = input.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let dir = match input.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    dir.join(format!("{}_{}.png", base, kind.slug()))
}
