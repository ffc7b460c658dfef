// File: crates/chart-render-skia/src/lib.rs
// Summary: Paints engine line/bar frames onto a Skia CPU raster surface and encodes PNG.

pub mod text;

use anyhow::Result;
use skia_safe as skia;

use chart_engine::{BarFrame, GridLine, LineFrame, PathCommand, Rgba, Theme, HEIGHT, WIDTH};

pub use text::TextShaper;

const LABEL_SIZE: f32 = 12.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    pub draw_labels: bool,
    pub stroke_width: f32,
    /// Marker radius for line points; 0 disables markers.
    pub dot_radius: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH as i32,
            height: HEIGHT as i32,
            theme: Theme::dark(),
            draw_labels: true,
            stroke_width: 2.0,
            dot_radius: 4.0,
        }
    }
}

/// Frame to paint; both chart kinds share the grid and axis pass.
#[derive(Clone, Copy)]
pub enum Frame<'a> {
    Line(&'a LineFrame),
    Bar(&'a BarFrame),
}

impl<'a> From<&'a LineFrame> for Frame<'a> {
    fn from(f: &'a LineFrame) -> Self { Frame::Line(f) }
}

impl<'a> From<&'a BarFrame> for Frame<'a> {
    fn from(f: &'a BarFrame) -> Self { Frame::Bar(f) }
}

impl Frame<'_> {
    fn plot(&self) -> chart_engine::Rect {
        match self {
            Frame::Line(f) => f.plot,
            Frame::Bar(f) => f.plot,
        }
    }

    fn grid(&self) -> &chart_engine::Grid {
        match self {
            Frame::Line(f) => &f.grid,
            Frame::Bar(f) => &f.grid,
        }
    }
}

pub struct SkiaRenderer {
    text: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

impl SkiaRenderer {
    pub fn new() -> Self { Self { text: TextShaper::new() } }

    /// Render to PNG bytes in memory.
    pub fn render_png_bytes<'a>(&self, frame: impl Into<Frame<'a>>, opts: &RenderOptions) -> Result<Vec<u8>> {
        let frame = frame.into();
        let mut surface = skia::surfaces::raster_n32_premul((opts.width.max(1), opts.height.max(1)))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), frame, opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the frame to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png<'a>(
        &self,
        frame: impl Into<Frame<'a>>,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_png_bytes(frame, opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }

    fn paint(&self, canvas: &skia::Canvas, frame: Frame<'_>, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(color(theme.background));

        let plot = frame.plot();
        canvas.save();
        canvas.translate((plot.x as f32, plot.y as f32));
        draw_grid(canvas, frame.grid(), plot.width as f32, plot.height as f32, theme);
        match frame {
            Frame::Line(f) => draw_lines(canvas, f, opts),
            Frame::Bar(f) => draw_bars(canvas, f),
        }
        canvas.restore();

        draw_axes(canvas, plot, theme);
        if opts.draw_labels {
            self.draw_labels(canvas, frame, theme);
        }
    }

    fn draw_labels(&self, canvas: &skia::Canvas, frame: Frame<'_>, theme: &Theme) {
        let plot = frame.plot();
        let (l, t, b) = (plot.x as f32, plot.y as f32, (plot.y + plot.height) as f32);
        let c = color(theme.axis_label);
        for line in &frame.grid().horizontal {
            let y = t + line.position as f32 + LABEL_SIZE * 0.35;
            self.text.draw_right(canvas, &line.label, l - 8.0, y, LABEL_SIZE, c);
        }
        for line in &frame.grid().vertical {
            let x = l + line.position as f32;
            self.text.draw_centered(canvas, &line.label, x, b + LABEL_SIZE + 8.0, LABEL_SIZE, c);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Series colors come from user input; unparsable ones fall back to `fallback`.
fn series_color(hex: &str, fallback: Rgba) -> skia::Color {
    match Rgba::from_hex(hex) {
        Ok(c) => color(c),
        Err(err) => {
            tracing::warn!(%err, "series color rejected, using fallback");
            color(fallback)
        }
    }
}

fn stroke_paint(c: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(c);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn fill_paint(c: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(c);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn draw_grid(canvas: &skia::Canvas, grid: &chart_engine::Grid, w: f32, h: f32, theme: &Theme) {
    let paint = stroke_paint(color(theme.grid), 1.0);
    let pos = |l: &GridLine| l.position as f32;
    for line in &grid.horizontal {
        canvas.draw_line((0.0, pos(line)), (w, pos(line)), &paint);
    }
    for line in &grid.vertical {
        canvas.draw_line((pos(line), 0.0), (pos(line), h), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: chart_engine::Rect, theme: &Theme) {
    let paint = stroke_paint(color(theme.axis_line), 1.5);
    let (l, t) = (plot.left() as f32, plot.top() as f32);
    let (r, b) = (plot.right() as f32, plot.bottom() as f32);
    canvas.draw_line((l, b), (r, b), &paint);
    canvas.draw_line((l, t), (l, b), &paint);
}

fn draw_lines(canvas: &skia::Canvas, frame: &LineFrame, opts: &RenderOptions) {
    for s in &frame.series {
        let c = series_color(&s.color, opts.theme.axis_line);
        if !s.commands.is_empty() {
            let mut path = skia::Path::new();
            for cmd in &s.commands {
                match *cmd {
                    PathCommand::MoveTo { to } => { path.move_to((to.x as f32, to.y as f32)); }
                    PathCommand::LineTo { to } => { path.line_to((to.x as f32, to.y as f32)); }
                    PathCommand::QuadTo { ctrl, to } => {
                        path.quad_to((ctrl.x as f32, ctrl.y as f32), (to.x as f32, to.y as f32));
                    }
                }
            }
            canvas.draw_path(&path, &stroke_paint(c, opts.stroke_width));
        }
        if opts.dot_radius > 0.0 {
            // filled gaps get hollow markers
            let dot = fill_paint(c);
            let ring = stroke_paint(c, opts.stroke_width.max(1.0));
            for p in &s.points {
                let paint = if p.present { &dot } else { &ring };
                canvas.draw_circle((p.x as f32, p.y as f32), opts.dot_radius, paint);
            }
        }
    }
}

fn draw_bars(canvas: &skia::Canvas, frame: &BarFrame) {
    for bar in &frame.bars {
        if bar.width <= 0.0 || bar.height == 0.0 {
            continue;
        }
        let paint = fill_paint(series_color(&bar.color, Rgba::rgb(128, 128, 128)));
        let r = skia::Rect::from_xywh(bar.x as f32, bar.y as f32, bar.width as f32, bar.height as f32);
        canvas.draw_rect(r, &paint);
    }
}
