// File: crates/csvchart-core/src/error.rs
// Summary: Error taxonomy shared by ingestion, resolution and rendering.

use std::path::PathBuf;

use thiserror::Error;

use crate::columns::AxisRole;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("CSV file is empty: {}", .0.display())]
    EmptyFile(PathBuf),

    #[error("failed to parse CSV '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// No header at the default index for `axis`.
    #[error("could not determine {axis} column: default index {index} but only {available} column(s)")]
    ColumnResolution {
        axis: AxisRole,
        index: usize,
        available: usize,
    },

    #[error("unsupported chart kind '{0}' (expected one of BAR, LINE, PIE, SCATTER)")]
    UnsupportedChartKind(String),

    #[error("failed to render chart: {0}")]
    Render(String),

    #[error("failed to encode chart image: {0}")]
    Encode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ChartError>;
