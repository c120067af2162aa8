// File: crates/csvchart-render-skia/src/types.rs
// Summary: Layout types (insets, plot area).

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    // Room for the title above and tick labels plus axis name below.
    fn default() -> Self {
        Self::new(80, 32, 56, 72)
    }
}

/// Plot rectangle in pixels, inside the insets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotArea {
    /// Plot rectangle for a `width` × `height` surface. Collapses to a
    /// single pixel when the insets do not fit.
    pub fn new(width: u32, height: u32, insets: &Insets) -> Self {
        let left = insets.left.min(width.saturating_sub(1)) as f32;
        let top = insets.top.min(height.saturating_sub(1)) as f32;
        let right = (width.saturating_sub(insets.right) as f32).max(left + 1.0);
        let bottom = (height.saturating_sub(insets.bottom) as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center(&self) -> (f32, f32) {
        ((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }
}
