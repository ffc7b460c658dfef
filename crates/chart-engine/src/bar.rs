// File: crates/chart-engine/src/bar.rs
// Summary: Grouped bar layout: one group per domain category, one bar per series inside each group.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};
use crate::normalize::Normalized;
use crate::scale::map;
use crate::types::ChartDataPoint;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarSpacing {
    /// Horizontal gap between neighbouring groups, in pixels.
    pub group: f64,
    /// Horizontal gap between bars inside a group, in pixels.
    pub bar: f64,
}

impl Default for BarSpacing {
    fn default() -> Self { Self { group: 16.0, bar: 4.0 } }
}

/// One rendered bar in plot-local pixels.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: f64,
    pub label: String,
    pub series_id: String,
    pub color: String,
    /// Position of the bar's category in the domain.
    pub category: usize,
    pub data_point: ChartDataPoint,
}

impl BarRect {
    pub fn rect(&self) -> Rect { Rect::from_xywh(self.x, self.y, self.width, self.height) }

    pub fn contains(&self, p: Point) -> bool { self.rect().contains(p) }
}

/// Horizontal slot of one category group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupSlot {
    pub x: f64,
    pub width: f64,
}

impl GroupSlot {
    pub fn center(&self) -> f64 { self.x + self.width * 0.5 }
}

/// Evenly sized group slots across `plot_width`, half a group gap on each side.
pub fn group_slots(groups: usize, plot_width: f64, spacing: f64) -> Vec<GroupSlot> {
    if groups == 0 {
        return Vec::new();
    }
    let width = ((plot_width - spacing * groups as f64) / groups as f64).max(0.0);
    (0..groups)
        .map(|i| GroupSlot { x: i as f64 * (width + spacing) + spacing * 0.5, width })
        .collect()
}

/// Lay out every (series, category) value as a rectangle, series by series.
///
/// Heights come from `map(value, min_y, max_y, 0, plot_height)` and bars hang
/// from `plot_height - height`. Values below zero go through the same mapping
/// and are not re-based on a zero baseline.
pub fn layout_bars(data: &Normalized, plot_width: f64, plot_height: f64, spacing: BarSpacing) -> Vec<BarRect> {
    let groups = data.domain.len();
    let series_n = data.series.len();
    if groups == 0 || series_n == 0 {
        return Vec::new();
    }

    let bar_width = |group_width: f64| {
        ((group_width - spacing.bar * (series_n as f64 - 1.0)) / series_n as f64).max(0.0)
    };
    let (min_y, max_y) = (data.bounds.min_y, data.bounds.max_y);

    let slots = group_slots(groups, plot_width, spacing.group);
    // series-major, so a first-match hit test on a shared edge resolves in series order
    let mut out = Vec::with_capacity(groups * series_n);
    for (si, s) in data.series.iter().enumerate() {
        for (gi, slot) in slots.iter().enumerate() {
            let bw = bar_width(slot.width);
            let Some(p) = s.points.get(gi) else { continue };
            let height = map(p.y, min_y, max_y, 0.0, plot_height);
            out.push(BarRect {
                x: slot.x + si as f64 * (bw + spacing.bar),
                y: plot_height - height,
                width: bw,
                height,
                value: p.y,
                label: p.original.label.clone().unwrap_or_else(|| data.domain.label(gi)),
                series_id: s.id.clone(),
                color: s.color.clone(),
                category: gi,
                data_point: p.original.clone(),
            });
        }
    }
    tracing::trace!(groups, series = series_n, bars = out.len(), "laid out bars");
    out
}
