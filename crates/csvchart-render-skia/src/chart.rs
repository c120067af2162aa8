// File: crates/csvchart-render-skia/src/chart.rs
// Summary: Skia CPU raster renderer for bar, line, pie and scatter plots.

use csvchart_core::{CategorySeries, ChartError, ChartRenderer, Dataset, PieDataset, Plot, Result, XyDataset};
use image::RgbaImage;
use skia_safe as skia;
use tracing::debug;

use crate::scale::{format_tick, linspace, value_range, LinearScale};
use crate::text::{ellipsize, Face, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, PlotArea};

const TICKS: usize = 6;
const TITLE_SIZE: f32 = 18.0;
const LABEL_SIZE: f32 = 14.0;
const TICK_SIZE: f32 = 12.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub insets: Insets,
    pub theme: Theme,
    /// Draw title, axis names, ticks and legends. Off gives font-independent output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

pub struct SkiaRenderer {
    opts: RenderOptions,
    text: TextShaper,
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, text: TextShaper::new() }
    }

    /// Render `plot` into a tightly packed RGBA8 buffer.
    /// Returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, plot: &Plot) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = (plot.width as i32, plot.height as i32);
        if w <= 0 || h <= 0 {
            return Err(ChartError::Render(format!("invalid surface size {}x{}", plot.width, plot.height)));
        }
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| ChartError::Render("failed to create raster surface".into()))?;

        {
            let canvas = surface.canvas();
            canvas.clear(self.opts.theme.background);

            let painter = Painter {
                canvas,
                theme: &self.opts.theme,
                text: self.opts.draw_labels.then_some(&self.text),
                area: PlotArea::new(plot.width, plot.height, &self.opts.insets),
            };
            painter.title(&plot.title, plot.width as f32);

            debug!(kind = %plot.kind(), points = plot.dataset.len(), "rendering plot");
            match &plot.dataset {
                Dataset::Bar(series) => painter.bars(series, &plot.x_label, &plot.y_label),
                Dataset::Line(series) => painter.line(series, &plot.x_label, &plot.y_label),
                Dataset::Pie(pie) => painter.pie(pie),
                Dataset::Scatter(xy) => painter.scatter(xy, &plot.x_label, &plot.y_label),
            }
        }

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(ChartError::Render("failed to read back surface pixels".into()));
        }
        Ok((px, w, h, stride))
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl ChartRenderer for SkiaRenderer {
    fn render(&self, plot: &Plot) -> Result<RgbaImage> {
        let (px, w, h, _) = self.render_to_rgba8(plot)?;
        RgbaImage::from_raw(w as u32, h as u32, px)
            .ok_or_else(|| ChartError::Render("pixel buffer does not match surface size".into()))
    }
}

// ---- helpers ----------------------------------------------------------------

struct Painter<'a> {
    canvas: &'a skia::Canvas,
    theme: &'a Theme,
    /// `None` when labels are disabled.
    text: Option<&'a TextShaper>,
    area: PlotArea,
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

/// Center of category slot `i` out of `n` evenly spaced slots.
fn slot_center(area: &PlotArea, i: usize, n: usize) -> f32 {
    let slot = area.width() / n.max(1) as f32;
    area.left + slot * (i as f32 + 0.5)
}

impl Painter<'_> {
    fn title(&self, title: &str, width: f32) {
        if let Some(text) = self.text {
            let y = (self.area.top * 0.6).max(TITLE_SIZE);
            text.draw_centered(self.canvas, title, width * 0.5, y, TITLE_SIZE, self.theme.title, Face::Sans);
        }
    }

    fn grid(&self, xs: &[f32], ys: &[f32]) {
        let paint = stroke(self.theme.grid, 1.0);
        let a = &self.area;
        for &x in xs {
            self.canvas.draw_line((x, a.top), (x, a.bottom), &paint);
        }
        for &y in ys {
            self.canvas.draw_line((a.left, y), (a.right, y), &paint);
        }
    }

    fn axes(&self, x_label: &str, y_label: &str) {
        let a = &self.area;
        let paint = stroke(self.theme.axis_line, 1.5);
        self.canvas.draw_line((a.left, a.bottom), (a.right, a.bottom), &paint);
        self.canvas.draw_line((a.left, a.top), (a.left, a.bottom), &paint);

        let Some(text) = self.text else { return };
        let (cx, cy) = a.center();
        text.draw_centered(self.canvas, x_label, cx, a.bottom + 50.0, LABEL_SIZE, self.theme.axis_label, Face::Sans);

        self.canvas.save();
        self.canvas.translate((a.left - 62.0, cy));
        self.canvas.rotate(-90.0, None);
        text.draw_centered(self.canvas, y_label, 0.0, 0.0, LABEL_SIZE, self.theme.axis_label, Face::Sans);
        self.canvas.restore();
    }

    /// Horizontal grid lines plus value labels left of the Y axis.
    fn y_ticks(&self, scale: &LinearScale) -> Vec<f32> {
        let ticks = linspace(scale.dmin, scale.dmax, TICKS);
        let span = scale.dmax - scale.dmin;
        let mark = stroke(self.theme.tick, 1.0);
        let mut ys = Vec::with_capacity(ticks.len());
        for v in ticks {
            let y = scale.to_px(v);
            ys.push(y);
            self.canvas.draw_line((self.area.left - 4.0, y), (self.area.left, y), &mark);
            if let Some(text) = self.text {
                text.draw_right(self.canvas, &format_tick(v, span), self.area.left - 8.0, y + 4.0, TICK_SIZE, self.theme.tick, Face::Mono);
            }
        }
        ys
    }

    /// Vertical grid positions plus value labels under the X axis.
    fn x_ticks(&self, scale: &LinearScale) -> Vec<f32> {
        let ticks = linspace(scale.dmin, scale.dmax, TICKS);
        let span = scale.dmax - scale.dmin;
        let mark = stroke(self.theme.tick, 1.0);
        let mut xs = Vec::with_capacity(ticks.len());
        for v in ticks {
            let x = scale.to_px(v);
            xs.push(x);
            self.canvas.draw_line((x, self.area.bottom), (x, self.area.bottom + 4.0), &mark);
            if let Some(text) = self.text {
                text.draw_centered(self.canvas, &format_tick(v, span), x, self.area.bottom + 20.0, TICK_SIZE, self.theme.tick, Face::Mono);
            }
        }
        xs
    }

    /// Category names under their slots, thinned out when they would overlap.
    fn category_labels(&self, series: &CategorySeries) {
        let Some(text) = self.text else { return };
        let n = series.len();
        if n == 0 {
            return;
        }
        let fit = (self.area.width() / 56.0).floor().max(1.0) as usize;
        let step = n.div_ceil(fit);
        for (i, (label, _)) in series.entries.iter().enumerate().step_by(step) {
            let x = slot_center(&self.area, i, n);
            text.draw_centered(self.canvas, &ellipsize(label, 10), x, self.area.bottom + 20.0, TICK_SIZE, self.theme.tick, Face::Sans);
        }
    }

    fn category_frame(&self, series: &CategorySeries, include_zero: bool, x_label: &str, y_label: &str) -> LinearScale {
        let (lo, hi) = value_range(series.values(), include_zero);
        let ys = LinearScale::new(lo, hi, self.area.bottom, self.area.top);
        let grid = self.y_ticks(&ys);
        self.grid(&[], &grid);
        self.axes(x_label, y_label);
        self.category_labels(series);
        ys
    }

    fn bars(&self, series: &CategorySeries, x_label: &str, y_label: &str) {
        let ys = self.category_frame(series, true, x_label, y_label);
        let n = series.len();
        if n == 0 {
            return;
        }
        let half = (self.area.width() / n as f32 * 0.7).clamp(1.0, 80.0) * 0.5;
        let base = ys.to_px(0.0_f64.clamp(ys.dmin, ys.dmax));
        let paint = fill(self.theme.bar_fill);
        for (i, v) in series.values().enumerate().filter(|(_, v)| v.is_finite()) {
            let x = slot_center(&self.area, i, n);
            let y = ys.to_px(v);
            let rect = skia::Rect::from_ltrb(x - half, y.min(base), x + half, y.max(base).max(y.min(base) + 1.0));
            self.canvas.draw_rect(rect, &paint);
        }
    }

    fn line(&self, series: &CategorySeries, x_label: &str, y_label: &str) {
        let ys = self.category_frame(series, false, x_label, y_label);
        let n = series.len();
        let points: Vec<(f32, f32)> = series
            .values()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(|(i, v)| (slot_center(&self.area, i, n), ys.to_px(v)))
            .collect();

        let line = stroke(self.theme.line_stroke, 2.0);
        for w in points.windows(2) {
            self.canvas.draw_line(w[0], w[1], &line);
        }
        let marker = fill(self.theme.line_stroke);
        for &p in &points {
            self.canvas.draw_circle(p, 3.0, &marker);
        }
    }

    fn scatter(&self, xy: &XyDataset, x_label: &str, y_label: &str) {
        let (x0, x1) = value_range(xy.x.iter().copied(), false);
        let (y0, y1) = value_range(xy.y.iter().copied(), false);
        let xs = LinearScale::new(x0, x1, self.area.left, self.area.right);
        let ys = LinearScale::new(y0, y1, self.area.bottom, self.area.top);

        let gx = self.x_ticks(&xs);
        let gy = self.y_ticks(&ys);
        self.grid(&gx, &gy);
        self.axes(x_label, y_label);

        let marker = fill(self.theme.point_fill);
        for (x, y) in xy.points().filter(|(x, y)| x.is_finite() && y.is_finite()) {
            self.canvas.draw_circle((xs.to_px(x), ys.to_px(y)), 3.5, &marker);
        }
    }

    /// Slices for positive values only; zero and negative entries take no space.
    fn pie(&self, pie: &PieDataset) {
        let slices: Vec<(&str, f64)> = pie
            .slices()
            .iter()
            .filter(|(_, v)| v.is_finite() && *v > 0.0)
            .map(|(l, v)| (l.as_str(), *v))
            .collect();
        let total: f64 = slices.iter().map(|(_, v)| v).sum();
        let (cx, cy) = self.area.center();

        if slices.is_empty() || total <= 0.0 {
            if let Some(text) = self.text {
                text.draw_centered(self.canvas, "No data available", cx, cy, LABEL_SIZE, self.theme.axis_label, Face::Sans);
            }
            return;
        }

        let legend_w = if self.text.is_some() { self.area.width() * 0.3 } else { 0.0 };
        let pie_cx = self.area.left + (self.area.width() - legend_w) * 0.5;
        let radius = ((self.area.width() - legend_w) * 0.5).min(self.area.height() * 0.5) * 0.9;
        let oval = skia::Rect::from_ltrb(pie_cx - radius, cy - radius, pie_cx + radius, cy + radius);

        let edge = stroke(self.theme.background, 1.5);
        let mut start = -90.0_f32;
        for (i, (_, v)) in slices.iter().enumerate() {
            let sweep = (v / total * 360.0) as f32;
            self.canvas.draw_arc(oval, start, sweep, true, &fill(self.theme.slice_color(i)));
            self.canvas.draw_arc(oval, start, sweep, true, &edge);
            start += sweep;
        }

        let Some(text) = self.text else { return };
        let row_h = 22.0;
        let max_rows = (self.area.height() / row_h).floor().max(1.0) as usize;
        let lx = self.area.right - legend_w + 8.0;
        let mut ly = cy - (slices.len().min(max_rows) as f32 * row_h) * 0.5;
        for (i, (label, v)) in slices.iter().enumerate().take(max_rows) {
            let swatch = skia::Rect::from_xywh(lx, ly, 12.0, 12.0);
            self.canvas.draw_rect(swatch, &fill(self.theme.slice_color(i)));
            let pct = v / total * 100.0;
            let entry = format!("{} ({:.1}%)", ellipsize(label, 14), pct);
            text.draw_left(self.canvas, &entry, lx + 18.0, ly + 11.0, TICK_SIZE, self.theme.axis_label, Face::Sans);
            ly += row_h;
        }
    }
}
