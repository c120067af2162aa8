// File: crates/csvchart-core/tests/output_path.rs
// Purpose: Output file naming next to the input CSV.

use csvchart_core::{output_path, ChartKind};
use std::path::PathBuf;

#[test]
fn sits_next_to_input() {
    assert_eq!(output_path("/data/sales.csv", ChartKind::Bar), PathBuf::from("/data/sales_bar.png"));
}

#[test]
fn bare_file_name_uses_current_dir() {
    let out = output_path("report.csv", ChartKind::Pie);
    assert_eq!(out, PathBuf::from("./report_pie.png"));
    assert_eq!(out.to_string_lossy(), "./report_pie.png");
}

#[test]
fn only_last_extension_is_removed() {
    assert_eq!(
        output_path("archive/q1.2024.csv", ChartKind::Scatter),
        PathBuf::from("archive/q1.2024_scatter.png")
    );
}

#[test]
fn every_kind_has_its_own_suffix() {
    let names: Vec<String> = ChartKind::ALL
        .iter()
        .map(|k| output_path("d/x.csv", *k).file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["x_bar.png", "x_line.png", "x_pie.png", "x_scatter.png"]);
}
