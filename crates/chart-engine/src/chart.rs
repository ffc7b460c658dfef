// File: crates/chart-engine/src/chart.rs
// Summary: Chart struct and the normalize -> scale -> layout pipeline producing line and bar frames.

use serde::Serialize;

use crate::bar::{group_slots, layout_bars, BarRect};
use crate::geometry::{Point, Rect};
use crate::grid::{horizontal_lines, vertical_lines, Grid};
use crate::hit::{hit_test_bars, hit_test_points, Hit, HitTest, PointRecord};
use crate::normalize::{normalize_with, Bounds, Domain, Normalized};
use crate::options::LayoutOptions;
use crate::path::{build_path, PathCommand};
use crate::scale::ScaleMapper;
use crate::types::ChartSeries;

/// Geometry of one line series in plot-local pixels.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineGeometry {
    pub id: String,
    pub name: String,
    pub color: String,
    pub commands: Vec<PathCommand>,
    pub points: Vec<PointRecord>,
}

/// Everything needed to draw and interact with a line chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineFrame {
    /// Plot area on the surface; all other geometry is relative to its origin.
    pub plot: Rect,
    pub domain: Domain,
    pub bounds: Bounds,
    pub series: Vec<LineGeometry>,
    pub grid: Grid,
    pub hit_radius: f64,
}

impl LineFrame {
    pub fn is_empty(&self) -> bool { self.series.iter().all(|s| s.points.is_empty()) }
}

impl HitTest for LineFrame {
    fn hit_test(&self, x: f64, y: f64) -> Option<Hit> {
        hit_test_points(self.series.iter().map(|s| s.points.as_slice()), x, y, self.hit_radius)
    }
}

/// Everything needed to draw and interact with a grouped bar chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarFrame {
    pub plot: Rect,
    pub domain: Domain,
    pub bounds: Bounds,
    pub bars: Vec<BarRect>,
    pub grid: Grid,
}

impl BarFrame {
    pub fn is_empty(&self) -> bool { self.bars.is_empty() }
}

impl HitTest for BarFrame {
    fn hit_test(&self, x: f64, y: f64) -> Option<Hit> {
        hit_test_bars(&self.bars, x, y)
    }
}

/// Caller-owned series plus layout options. Holds no derived state: every
/// frame is recomputed from scratch.
#[derive(Clone, Debug, Default)]
pub struct Chart {
    pub series: Vec<ChartSeries>,
    pub options: LayoutOptions,
}

impl Chart {
    pub fn new() -> Self { Self::default() }

    pub fn with_options(options: LayoutOptions) -> Self {
        Self { series: Vec::new(), options }
    }

    pub fn add_series(&mut self, series: ChartSeries) {
        self.series.push(series);
    }

    pub fn normalized(&self) -> Normalized {
        normalize_with(&self.series, &self.options.colors(), self.options.y_padding)
    }

    pub fn line_frame(&self) -> LineFrame {
        let plot = self.options.plot_rect();
        let data = self.normalized();
        if data.is_empty() {
            return LineFrame {
                plot,
                domain: data.domain,
                bounds: data.bounds,
                series: Vec::new(),
                grid: Grid::default(),
                hit_radius: self.options.hit_radius(),
            };
        }

        let (x0, x1) = data.domain.extent();
        let x_scale = ScaleMapper::new(x0, x1, 0.0, plot.width);
        let y_scale = ScaleMapper::inverted_y(data.bounds.min_y, data.bounds.max_y, 0.0, plot.height);

        let series: Vec<LineGeometry> = data
            .series
            .iter()
            .map(|s| {
                let points: Vec<PointRecord> = s
                    .points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| PointRecord {
                        series_id: s.id.clone(),
                        index: i,
                        x: x_scale.map(data.domain.position(i)),
                        y: y_scale.map(p.y),
                        value: p.y,
                        label: p.original.label.clone().unwrap_or_else(|| data.domain.label(i)),
                        data_point: p.original.clone(),
                        present: p.present,
                    })
                    .collect();
                let pixels: Vec<Point> = points.iter().map(PointRecord::position).collect();
                LineGeometry {
                    id: s.id.clone(),
                    name: s.name.clone(),
                    color: s.color.clone(),
                    commands: build_path(&pixels, self.options.smooth),
                    points,
                }
            })
            .collect();

        let grid = Grid {
            horizontal: horizontal_lines(data.bounds.min_y, data.bounds.max_y, self.options.horizontal_lines, &y_scale),
            vertical: vertical_lines(&data.domain, self.options.max_x_ticks, |i| x_scale.map(data.domain.position(i))),
        };

        tracing::debug!(
            kind = ?data.domain.kind(),
            keys = data.domain.len(),
            series = series.len(),
            smooth = self.options.smooth,
            "built line frame"
        );

        LineFrame {
            plot,
            domain: data.domain,
            bounds: data.bounds,
            series,
            grid,
            hit_radius: self.options.hit_radius(),
        }
    }

    pub fn bar_frame(&self) -> BarFrame {
        let plot = self.options.plot_rect();
        let data = self.normalized();
        if data.is_empty() {
            return BarFrame { plot, domain: data.domain, bounds: data.bounds, bars: Vec::new(), grid: Grid::default() };
        }

        let spacing = self.options.spacing();
        let bars = layout_bars(&data, plot.width, plot.height, spacing);

        // category ticks sit on group centres
        let slots = group_slots(data.domain.len(), plot.width, spacing.group);
        let y_scale = ScaleMapper::inverted_y(data.bounds.min_y, data.bounds.max_y, 0.0, plot.height);
        let grid = Grid {
            horizontal: horizontal_lines(data.bounds.min_y, data.bounds.max_y, self.options.horizontal_lines, &y_scale),
            vertical: vertical_lines(&data.domain, self.options.max_x_ticks, |i| slots[i].center()),
        };

        tracing::debug!(
            kind = ?data.domain.kind(),
            categories = data.domain.len(),
            series = data.series.len(),
            bars = bars.len(),
            "built bar frame"
        );

        BarFrame { plot, domain: data.domain, bounds: data.bounds, bars, grid }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChartDataPoint as P, ChartSeries};

    #[test]
    fn single_category_line_is_centred() {
        let mut chart = Chart::new();
        chart.add_series(ChartSeries::new("s", "S").with_points(vec![P::new("only", 3.0)]));
        let frame = chart.line_frame();
        let p = &frame.series[0].points[0];
        assert_eq!(p.x, frame.plot.width / 2.0);
        assert_eq!(p.y, frame.plot.height / 2.0);
        assert!(frame.series[0].commands.is_empty());
    }

    #[test]
    fn empty_chart_has_empty_frames() {
        let chart = Chart::new();
        assert!(chart.line_frame().is_empty());
        assert!(chart.bar_frame().is_empty());
        assert!(chart.line_frame().grid.is_empty());
    }
}
