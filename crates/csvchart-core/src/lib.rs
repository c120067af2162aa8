// File: crates/csvchart-core/src/lib.rs
// Summary: Core library entry point; exports CSV ingestion, column resolution, datasets and the chart pipeline.

pub mod error;
pub mod table;
pub mod columns;
pub mod kind;
pub mod dataset;
pub mod types;
pub mod render;
pub mod output;
pub mod service;

pub use error::{ChartError, Result};
pub use table::{read_csv, is_valid_csv, file_info, FileInfo, Row, Table};
pub use columns::{resolve_columns, AxisRole, ResolvedColumns};
pub use kind::ChartKind;
pub use dataset::{build_dataset, CategorySeries, Dataset, PieDataset, XyDataset};
pub use types::{WIDTH, HEIGHT};
pub use render::{write_png, ChartRenderer, Plot};
pub use output::output_path;
pub use service::ChartService;
