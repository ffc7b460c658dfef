// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing PNGs for line and bar frames.

use chart_engine::{Chart, ChartDataPoint as P, ChartSeries, Theme};
use chart_render_skia::{RenderOptions, SkiaRenderer};

fn chart() -> Chart {
    let mut chart = Chart::new();
    chart.add_series(ChartSeries::from_xy("a", &[(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)]));
    chart.add_series(ChartSeries::new("b", "B").with_points(vec![P::new(1.0, 1.0), P::new(3.0, 2.0)]));
    chart
}

#[test]
fn render_line_png() {
    let frame = chart().line_frame();
    let out = std::path::PathBuf::from("target/test_out/smoke_line.png");
    SkiaRenderer::new()
        .render_to_png(&frame, &RenderOptions::default(), &out)
        .expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn render_bar_png_bytes() {
    let frame = chart().bar_frame();
    let bytes = SkiaRenderer::new()
        .render_png_bytes(&frame, &RenderOptions::default())
        .expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_empty_frame_and_bad_color() {
    let empty = Chart::new().line_frame();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    assert!(SkiaRenderer::new().render_png_bytes(&empty, &opts).is_ok());

    let mut chart = chart();
    chart.series[0].color = Some("not-a-color".into());
    assert!(SkiaRenderer::new().render_png_bytes(&chart.line_frame(), &opts).is_ok());
}

#[test]
fn gap_filled_points_get_a_marker() {
    let mut chart = Chart::new();
    chart.add_series(ChartSeries::new("a", "A").with_points(vec![P::new(0.0, 10.0), P::new(1.0, 10.0)]));
    chart.add_series(ChartSeries::new("b", "B").with_points(vec![P::new(1.0, 10.0)]));
    let frame = chart.line_frame();
    let gap = &frame.series[1].points[0];
    assert!(!gap.present);

    let opts = RenderOptions { draw_labels: false, dot_radius: 10.0, ..RenderOptions::default() };
    let bytes = SkiaRenderer::new().render_png_bytes(&frame, &opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();

    // right edge of the marker ring; the line itself leaves the point upwards
    let x = (frame.plot.x + gap.x + 10.0) as u32;
    let y = (frame.plot.y + gap.y) as u32;
    let bg = Theme::dark().background;
    let px = img.get_pixel(x, y);
    assert_ne!([px[0], px[1], px[2]], [bg.r, bg.g, bg.b], "no marker at ({x}, {y})");
}
