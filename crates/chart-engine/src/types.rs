// File: crates/chart-engine/src/types.rs
// Summary: Input data model (points, series, x values) and shared sizes/insets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default surface width in pixels.
pub const WIDTH: u32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 640;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}

/// Raw x value of an observation. Numbers, numeric strings and dates can
/// participate in a numeric domain; any other text forces a categorical one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XValue {
    Number(f64),
    Date(DateTime<Utc>),
    Text(String),
}

impl XValue {
    /// Numeric coercion: numbers as-is, dates as epoch milliseconds, text when
    /// it parses as a finite float. `None` means the key is categorical.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            XValue::Number(n) if n.is_finite() => Some(*n),
            XValue::Number(_) => None,
            XValue::Date(d) => Some(d.timestamp_millis() as f64),
            XValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// String form used for categorical ordering and fallback labels.
    pub fn key_string(&self) -> String {
        match self {
            XValue::Number(n) => n.to_string(),
            XValue::Date(d) => d.to_rfc3339(),
            XValue::Text(s) => s.clone(),
        }
    }

    pub fn is_date(&self) -> bool { matches!(self, XValue::Date(_)) }
}

impl From<f64> for XValue {
    fn from(v: f64) -> Self { XValue::Number(v) }
}

impl From<i32> for XValue {
    fn from(v: i32) -> Self { XValue::Number(v as f64) }
}

impl From<&str> for XValue {
    fn from(v: &str) -> Self { XValue::Text(v.to_string()) }
}

impl From<String> for XValue {
    fn from(v: String) -> Self { XValue::Text(v) }
}

impl From<DateTime<Utc>> for XValue {
    fn from(v: DateTime<Utc>) -> Self { XValue::Date(v) }
}

/// One observation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    pub x: XValue,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ChartDataPoint {
    pub fn new(x: impl Into<XValue>, y: f64) -> Self {
        Self { x: x.into(), y, label: None }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The y value as consumed by the engine; NaN and infinities become 0.
    pub fn value(&self) -> f64 { coerce_y(self.y) }
}

/// A named collection of points rendered as one line or one set of bars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub points: Vec<ChartDataPoint>,
}

impl ChartSeries {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), color: None, points: Vec::new() }
    }

    pub fn with_points(mut self, points: Vec<ChartDataPoint>) -> Self {
        self.points = points;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Convenience for plain numeric (x, y) pairs.
    pub fn from_xy(id: impl Into<String>, data: &[(f64, f64)]) -> Self {
        let id = id.into();
        let points = data.iter().map(|&(x, y)| ChartDataPoint::new(x, y)).collect();
        Self { name: id.clone(), id, color: None, points }
    }

    pub fn push(&mut self, point: ChartDataPoint) {
        self.points.push(point);
    }
}

#[inline]
pub fn coerce_y(y: f64) -> f64 {
    if y.is_finite() { y } else { 0.0 }
}

/// Parse a textual y value (e.g. a CSV cell); anything non-numeric is 0.
pub fn parse_y(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map(coerce_y).unwrap_or(0.0)
}
