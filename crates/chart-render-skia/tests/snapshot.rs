// File: crates/chart-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic small line/bar frames to PNG bytes (labels off).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_engine::{Chart, ChartDataPoint as P, ChartSeries, Insets, LayoutOptions};
use chart_render_skia::{Frame, RenderOptions, SkiaRenderer};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn chart() -> Chart {
    let mut chart = Chart::with_options(LayoutOptions {
        width: 320,
        height: 200,
        insets: Insets::new(16, 16, 16, 16),
        smooth: true,
        ..LayoutOptions::default()
    });
    chart.add_series(
        ChartSeries::new("a", "A").with_points(vec![P::new("mon", 1.0), P::new("tue", 3.0), P::new("wed", 2.0)]),
    );
    chart.add_series(ChartSeries::new("b", "B").with_points(vec![P::new("mon", 2.0), P::new("wed", 4.0)]));
    chart
}

fn render(frame: Frame<'_>) -> Vec<u8> {
    let opts = RenderOptions { width: 320, height: 200, draw_labels: false, ..RenderOptions::default() };
    SkiaRenderer::new().render_png_bytes(frame, &opts).expect("render bytes")
}

#[test]
fn golden_smoothed_lines() {
    let frame = chart().line_frame();
    let bytes = render((&frame).into());
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (320, 200));
    write_or_compare("smoothed_lines.png", &bytes);
}

#[test]
fn golden_grouped_bars() {
    let frame = chart().bar_frame();
    let bytes = render((&frame).into());
    write_or_compare("grouped_bars.png", &bytes);
}
