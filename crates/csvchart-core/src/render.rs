// File: crates/csvchart-core/src/render.rs
// Summary: Render request (`Plot`), the renderer seam and PNG writing.

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::info;

use crate::columns::ResolvedColumns;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::kind::ChartKind;
use crate::types::{HEIGHT, WIDTH};

/// Everything a renderer needs to draw one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Plot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub dataset: Dataset,
    pub width: u32,
    pub height: u32,
}

impl Plot {
    /// Titled, labelled plot for `dataset` at the default output size.
    pub fn new(dataset: Dataset, columns: &ResolvedColumns) -> Self {
        let kind = dataset.kind();
        Self {
            title: kind.title(&columns.x, &columns.y),
            x_label: columns.x.clone(),
            y_label: columns.y.clone(),
            dataset,
            width: WIDTH,
            height: HEIGHT,
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.dataset.kind()
    }
}

/// Turns a plot into pixels. Implementations must return an image of exactly
/// `plot.width` × `plot.height`.
pub trait ChartRenderer {
    fn render(&self, plot: &Plot) -> Result<RgbaImage>;
}

impl<R: ChartRenderer + ?Sized> ChartRenderer for &R {
    fn render(&self, plot: &Plot) -> Result<RgbaImage> {
        (**self).render(plot)
    }
}

impl<R: ChartRenderer + ?Sized> ChartRenderer for Box<R> {
    fn render(&self, plot: &Plot) -> Result<RgbaImage> {
        (**self).render(plot)
    }
}

/// Encode `image` as PNG at `path`, creating missing parent directories.
/// An existing file is overwritten.
pub fn write_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    image.save_with_format(path, ImageFormat::Png)?;
    info!(path = %path.display(), width = image.width(), height = image.height(), "wrote PNG");
    Ok(())
}
