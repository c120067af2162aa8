// File: crates/csvchart-render-skia/tests/render.rs
// Purpose: Render every chart kind through Skia and check the written PNGs.

use csvchart_core::{
    write_png, CategorySeries, ChartRenderer, Dataset, PieDataset, Plot, ResolvedColumns, XyDataset,
};
use csvchart_render_skia::{RenderOptions, SkiaRenderer};

fn columns() -> ResolvedColumns {
    ResolvedColumns { x: "month".into(), y: "sales".into() }
}

fn category() -> CategorySeries {
    let mut s = CategorySeries::new("Values");
    for (l, v) in [("Jan", 10.0), ("Feb", 25.0), ("Mar", -4.0), ("Jan", 12.5)] {
        s.push(l, v);
    }
    s
}

fn datasets() -> Vec<Dataset> {
    let mut pie = PieDataset::new();
    pie.set("north", 3.0);
    pie.set("south", 1.0);
    pie.set("east", 0.0);
    let mut xy = XyDataset::new("Data");
    for i in 0..20 {
        xy.push(i as f64, (i as f64 * 0.3).sin());
    }
    vec![Dataset::Bar(category()), Dataset::Line(category()), Dataset::Pie(pie), Dataset::Scatter(xy)]
}

#[test]
fn every_kind_renders_800_by_600() {
    let renderer = SkiaRenderer::default();
    let dir = tempfile::tempdir().unwrap();

    for ds in datasets() {
        let kind = ds.kind();
        let plot = Plot::new(ds, &columns());
        let img = renderer.render(&plot).expect("render");
        assert_eq!(img.dimensions(), (800, 600), "{kind}");

        let out = dir.path().join(format!("out_{}.png", kind.slug()));
        write_png(&img, &out).expect("write png");
        assert_eq!(image::image_dimensions(&out).unwrap(), (800, 600));
    }
}

#[test]
fn rgba_buffer_shape_and_background() {
    let renderer = SkiaRenderer::default();
    let plot = Plot::new(Dataset::Bar(category()), &columns());
    let (px, w, h, stride) = renderer.render_to_rgba8(&plot).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left corner is plain light-theme background.
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn empty_datasets_still_render() {
    let renderer = SkiaRenderer::default();
    for ds in [
        Dataset::Bar(CategorySeries::new("Values")),
        Dataset::Line(CategorySeries::new("Values")),
        Dataset::Pie(PieDataset::new()),
        Dataset::Scatter(XyDataset::new("Data")),
    ] {
        let img = renderer.render(&Plot::new(ds, &columns())).expect("render empty");
        assert_eq!(img.dimensions(), (800, 600));
    }
}

#[test]
fn non_finite_values_are_ignored() {
    let mut s = CategorySeries::new("Values");
    s.push("a", f64::NAN);
    s.push("b", f64::INFINITY);
    s.push("c", 2.0);
    let renderer = SkiaRenderer::default();
    let img = renderer.render(&Plot::new(Dataset::Line(s), &columns())).expect("render");
    assert_eq!(img.dimensions(), (800, 600));
}

#[test]
fn rerender_overwrites_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("again/sales_bar.png");
    let renderer = SkiaRenderer::new(RenderOptions { draw_labels: false, ..RenderOptions::default() });
    let plot = Plot::new(Dataset::Bar(category()), &columns());

    write_png(&renderer.render(&plot).unwrap(), &out).unwrap();
    let first = image::open(&out).unwrap().to_rgba8();
    write_png(&renderer.render(&plot).unwrap(), &out).unwrap();
    let second = image::open(&out).unwrap().to_rgba8();
    assert_eq!(first.dimensions(), second.dimensions());
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn respects_plot_size() {
    let renderer = SkiaRenderer::default();
    let mut plot = Plot::new(Dataset::Bar(category()), &columns());
    plot.width = 320;
    plot.height = 200;
    let img = renderer.render(&plot).unwrap();
    assert_eq!(img.dimensions(), (320, 200));

    plot.width = 0;
    assert!(renderer.render(&plot).is_err());
}
