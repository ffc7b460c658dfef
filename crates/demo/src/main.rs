// File: crates/demo/src/main.rs
// Summary: Demo loads long-format CSV series and renders line + grouped bar PNGs, with a JSON frame dump and a hit probe.

mod input;

use anyhow::{Context, Result};
use clap::Parser;
use chart_engine::{to_svg_path, Chart, HitTest, LayoutOptions};
use chart_render_skia::{RenderOptions, SkiaRenderer};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const SAMPLE_CSV: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/weekly_visits.csv");

#[derive(Parser, Debug)]
#[command(name = "chart-demo")]
#[command(about = "Render line and grouped bar PNGs from a long-format CSV")]
struct Args {
    /// CSV with series, x, y and optional label columns
    #[arg(default_value = SAMPLE_CSV)]
    input: String,

    /// Theme preset name
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Smooth line paths
    #[arg(long)]
    smooth: bool,

    /// JSON file with layout options
    #[arg(long)]
    options: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let (path, used_alt) = resolve_path(&args.input)?;
    tracing::info!(path = %path.display(), "using input file");
    if used_alt {
        tracing::info!("extension swapped between .csv/.cvs");
    }

    let series = input::load_series_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    let points: usize = series.iter().map(|s| s.points.len()).sum();
    tracing::info!(series = series.len(), points, "loaded series");
    if series.is_empty() {
        anyhow::bail!("no series loaded; check headers/delimiter.");
    }

    let mut layout = match &args.options {
        Some(p) => {
            let json = std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            LayoutOptions::from_json(&json).with_context(|| format!("parsing {}", p.display()))?
        }
        None => LayoutOptions::default(),
    };
    layout.smooth |= args.smooth;

    let theme = chart_engine::theme::find(&args.theme);
    if layout.palette.is_none() {
        layout.palette = Some(theme.palette.iter().map(|c| c.to_string()).collect());
    }
    layout.validate()?;

    let opts = RenderOptions {
        width: layout.width as i32,
        height: layout.height as i32,
        theme,
        dot_radius: layout.dot_radius as f32,
        ..RenderOptions::default()
    };
    let chart = Chart { series, options: layout };
    let renderer = SkiaRenderer::new();

    // 1) Lines
    let line = chart.line_frame();
    tracing::info!(kind = ?line.domain.kind(), keys = line.domain.len(), "domain");
    for s in &line.series {
        tracing::debug!(series = %s.id, path = %to_svg_path(&s.commands), "svg path");
    }
    let out_line = out_name_with(&path, "line", "png");
    renderer.render_to_png(&line, &opts, &out_line)?;
    tracing::info!("wrote {}", out_line.display());

    let out_json = out_name_with(&path, "line", "json");
    std::fs::write(&out_json, serde_json::to_vec_pretty(&line)?)
        .with_context(|| format!("writing {}", out_json.display()))?;
    tracing::info!("wrote {}", out_json.display());

    // 2) Grouped bars
    let bars = chart.bar_frame();
    let out_bar = out_name_with(&path, "bar", "png");
    renderer.render_to_png(&bars, &opts, &out_bar)?;
    tracing::info!(bars = bars.bars.len(), "wrote {}", out_bar.display());

    // 3) Hit probe at the first rendered point / bar centre
    if let Some(p) = line.series.first().and_then(|s| s.points.first()) {
        match line.hit_test(p.x, p.y) {
            Some(hit) => tracing::info!(series = %hit.series_id, label = ?hit.data_point.label, y = hit.data_point.y, "line hit"),
            None => tracing::warn!("line hit probe missed"),
        }
    }
    if let Some(b) = bars.bars.first() {
        if let Some(hit) = bars.hit_test(b.x + b.width * 0.5, b.y + b.height * 0.5) {
            tracing::info!(series = %hit.series_id, index = hit.index, y = hit.data_point.y, "bar hit");
        }
    }

    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/<stem>_<suffix>.<ext>
fn out_name_with(input: &Path, suffix: &str, ext: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("{stem}_{suffix}.{ext}"));
    out
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_point_at_the_sample_csv() {
        let args = Args::try_parse_from(["chart-demo"]).unwrap();
        assert_eq!(args.input, SAMPLE_CSV);
        assert_eq!(args.theme, "dark");
        assert!(!args.smooth);
        assert!(args.options.is_none());
    }

    #[test]
    fn flags_and_input_parse() {
        let args =
            Args::try_parse_from(["chart-demo", "--smooth", "--theme", "light", "--options", "o.json", "in.csv"]).unwrap();
        assert_eq!(args.input, "in.csv");
        assert_eq!(args.theme, "light");
        assert!(args.smooth);
        assert_eq!(args.options, Some(PathBuf::from("o.json")));
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Args::try_parse_from(["chart-demo", "--bogus"]).is_err());
    }
}
