// File: crates/csvchart-render-skia/src/lib.rs
// Summary: Skia renderer crate; rasterizes csvchart plots on CPU surfaces.

pub mod chart;
pub mod scale;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{RenderOptions, SkiaRenderer};
pub use theme::Theme;
pub use types::{Insets, PlotArea};
