// File: crates/chart-engine/src/hit.rs
// Summary: Pointer -> data element lookup over realized point and bar geometry.
// Notes:
// - First match in series-then-point order wins; matches are not ranked by distance.

use serde::Serialize;

use crate::bar::BarRect;
use crate::geometry::Point;
use crate::types::ChartDataPoint;

/// Pixel record of one rendered data point (marker position + tooltip payload).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PointRecord {
    pub series_id: String,
    /// Index into the domain.
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub label: String,
    pub data_point: ChartDataPoint,
    /// False for gap-filled entries.
    pub present: bool,
}

impl PointRecord {
    pub fn position(&self) -> Point { Point::new(self.x, self.y) }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Hit {
    pub series_id: String,
    pub data_point: ChartDataPoint,
    /// Domain index of the element that was hit.
    pub index: usize,
}

/// Anything that can resolve a plot-local pointer position to a data element.
pub trait HitTest {
    fn hit_test(&self, x: f64, y: f64) -> Option<Hit>;
}

/// First point whose centre lies within `radius` (inclusive) of `(x, y)`.
pub fn hit_test_points<'a, I>(series: I, x: f64, y: f64, radius: f64) -> Option<Hit>
where
    I: IntoIterator<Item = &'a [PointRecord]>,
{
    let pointer = Point::new(x, y);
    let r2 = radius.max(0.0) * radius.max(0.0);
    series
        .into_iter()
        .flat_map(|pts| pts.iter())
        .find(|p| p.position().distance_sq(pointer) <= r2)
        .map(|p| Hit { series_id: p.series_id.clone(), data_point: p.data_point.clone(), index: p.index })
}

/// First bar whose rectangle contains `(x, y)` (edges inclusive).
pub fn hit_test_bars(bars: &[BarRect], x: f64, y: f64) -> Option<Hit> {
    let pointer = Point::new(x, y);
    bars.iter()
        .find(|b| b.contains(pointer))
        .map(|b| Hit { series_id: b.series_id.clone(), data_point: b.data_point.clone(), index: b.category })
}
