// File: crates/csvchart-render-skia/src/text.rs
// Summary: Text shaping for titles, axis labels and ticks using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

/// Font family group used for a piece of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    /// Titles, axis names, category labels.
    Sans,
    /// Tick values; tabular digits keep columns aligned.
    Mono,
}

impl Face {
    fn families(self) -> &'static [&'static str] {
        match self {
            Face::Sans => &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"],
            Face::Mono => &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"],
        }
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color, face: Face) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);

        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(face.families());

        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, face: Face) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT, face).longest_line()
    }

    /// Draw with the baseline at `y`, starting at `x`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, face: Face) {
        let mut p = self.layout(text, size, color, face);
        // Paragraph paints from its top-left corner.
        p.paint(canvas, (x, y - size * 0.8));
    }

    /// Draw with the baseline at `y`, horizontally centered on `cx`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color, face: Face) {
        let w = self.measure_width(text, size, face);
        self.draw_left(canvas, text, cx - w * 0.5, y, size, color, face);
    }

    /// Draw with the baseline at `y`, ending at `right`.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, right: f32, y: f32, size: f32, color: skia::Color, face: Face) {
        let w = self.measure_width(text, size, face);
        self.draw_left(canvas, text, right - w, y, size, color, face);
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with an ellipsis.
pub fn ellipsize(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
