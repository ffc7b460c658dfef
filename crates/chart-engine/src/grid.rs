// File: crates/chart-engine/src/grid.rs
// Summary: Grid/tick layout: evenly spaced horizontal value lines and subsampled vertical domain ticks.

use serde::Serialize;

use crate::format::format_stepped;
use crate::normalize::Domain;
use crate::scale::ScaleMapper;

pub const DEFAULT_HORIZONTAL_LINES: usize = 5;
pub const DEFAULT_MAX_X_TICKS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Spans the plot width at a fixed y.
    Horizontal,
    /// Spans the plot height at a fixed x.
    Vertical,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridLine {
    pub orientation: Orientation,
    /// Pixel offset along the axis the line is fixed on (y for horizontal, x for vertical).
    pub position: f64,
    /// Data value at the line (domain position for vertical lines).
    pub value: f64,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Grid {
    pub horizontal: Vec<GridLine>,
    pub vertical: Vec<GridLine>,
}

impl Grid {
    pub fn is_empty(&self) -> bool { self.horizontal.is_empty() && self.vertical.is_empty() }
}

/// `steps` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            // pin the last value so rounding never drifts past `end`
            (0..steps).map(|i| if i + 1 == steps { end } else { start + step * i as f64 }).collect()
        }
    }
}

/// `count` horizontal lines from `min_y` to `max_y`, positioned with `y_scale`.
/// Labels carry enough decimals to keep neighbouring lines apart.
pub fn horizontal_lines(min_y: f64, max_y: f64, count: usize, y_scale: &ScaleMapper) -> Vec<GridLine> {
    let step = if count > 1 { (max_y - min_y) / (count as f64 - 1.0) } else { 0.0 };
    linspace(min_y, max_y, count)
        .into_iter()
        .map(|value| GridLine {
            orientation: Orientation::Horizontal,
            position: y_scale.map(value),
            value,
            label: format_stepped(value, step),
        })
        .collect()
}

/// Stride that keeps at most `max_ticks` of `len` keys.
pub fn tick_stride(len: usize, max_ticks: usize) -> usize {
    if len == 0 || max_ticks == 0 {
        return 0;
    }
    len.div_ceil(max_ticks).max(1)
}

/// Vertical lines for every `stride`-th domain key; `position_of(i)` gives the pixel x of key `i`.
pub fn vertical_lines(domain: &Domain, max_ticks: usize, position_of: impl Fn(usize) -> f64) -> Vec<GridLine> {
    let stride = tick_stride(domain.len(), max_ticks);
    if stride == 0 {
        return Vec::new();
    }
    (0..domain.len())
        .step_by(stride)
        .map(|i| GridLine {
            orientation: Orientation::Vertical,
            position: position_of(i),
            value: domain.position(i),
            label: domain.label(i),
        })
        .collect()
}
