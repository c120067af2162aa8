// File: crates/csvchart-core/src/types.rs
// Summary: Shared constants for chart output.

/// Output image width in pixels.
pub const WIDTH: u32 = 800;
/// Output image height in pixels.
pub const HEIGHT: u32 = 600;

/// Series name for bar and line datasets.
pub const CATEGORY_SERIES_NAME: &str = "Values";
/// Series name for scatter datasets.
pub const XY_SERIES_NAME: &str = "Data";
