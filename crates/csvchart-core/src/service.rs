// File: crates/csvchart-core/src/service.rs
// Summary: End-to-end pipeline: read CSV, resolve columns, build dataset, render, write PNG.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::columns::{resolve_columns, ResolvedColumns};
use crate::dataset::build_dataset;
use crate::error::Result;
use crate::kind::ChartKind;
use crate::output::output_path;
use crate::render::{write_png, ChartRenderer, Plot};
use crate::table::{read_csv, Table};

pub struct ChartService<R> {
    renderer: R,
}

impl<R: ChartRenderer> ChartService<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Generate a `kind` chart from the CSV at `csv_path` and return the PNG path.
    pub fn generate_chart(
        &self,
        csv_path: impl AsRef<Path>,
        kind: ChartKind,
        x: Option<&str>,
        y: Option<&str>,
    ) -> Result<PathBuf> {
        let csv_path = csv_path.as_ref();
        info!(path = %csv_path.display(), %kind, "generating chart");

        let table = read_csv(csv_path)?;
        info!(rows = table.row_count(), columns = table.column_count(), "CSV loaded");

        let columns = resolve_columns(&table, x, y)?;
        info!(x = %columns.x, y = %columns.y, "using columns");

        let out = output_path(csv_path, kind);
        self.build_and_render(&table, kind, &columns, &out)?;
        info!(path = %out.display(), "chart generated");
        Ok(out)
    }

    /// Build the `kind` dataset from `table`, render it and write it to `output`.
    pub fn build_and_render(
        &self,
        table: &Table,
        kind: ChartKind,
        columns: &ResolvedColumns,
        output: impl AsRef<Path>,
    ) -> Result<()> {
        let dataset = build_dataset(table, kind, columns);
        info!(%kind, points = dataset.len(), "dataset built");

        let plot = Plot::new(dataset, columns);
        let image = self.renderer.render(&plot)?;
        write_png(&image, output)
    }

    /// Column names of the CSV at `csv_path`, in file order.
    pub fn list_columns(&self, csv_path: impl AsRef<Path>) -> Result<Vec<String>> {
        let table = read_csv(csv_path)?;
        Ok(table.headers().to_vec())
    }
}
