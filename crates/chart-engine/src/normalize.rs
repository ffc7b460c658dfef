// File: crates/chart-engine/src/normalize.rs
// Summary: Merge per-series data into one shared ordered domain with dense, gap-filled values.
// Notes:
// - The domain kind (numeric / temporal / categorical) is decided once here;
//   downstream stages match on `Domain` instead of re-inspecting keys.
// - A single non-numeric key anywhere collapses the whole domain to categorical.
// - Missing observations are filled with y = 0 (missing and zero are not
//   distinguished in the value; `present` records which one it was).

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::color::ColorAssigner;
use crate::format::{format_compact, format_timestamp};
use crate::types::{ChartDataPoint, ChartSeries, XValue};

/// Default Y headroom as a fraction of the Y range.
pub const DEFAULT_Y_PADDING: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainKind {
    Numeric,
    Temporal,
    Categorical,
}

/// Sorted, distinct x keys spanning all series.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "keys", rename_all = "snake_case")]
pub enum Domain {
    /// Ascending numbers (numeric strings and mixed number/date keys land here).
    Numeric(Vec<f64>),
    /// Ascending epoch milliseconds; every key was a date.
    Temporal(Vec<f64>),
    /// Lexicographically sorted key strings.
    Categorical(Vec<String>),
}

impl Domain {
    pub fn kind(&self) -> DomainKind {
        match self {
            Domain::Numeric(_) => DomainKind::Numeric,
            Domain::Temporal(_) => DomainKind::Temporal,
            Domain::Categorical(_) => DomainKind::Categorical,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Domain::Numeric(v) | Domain::Temporal(v) => v.len(),
            Domain::Categorical(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn key(&self, i: usize) -> Option<DomainKey> {
        match self {
            Domain::Numeric(v) | Domain::Temporal(v) => v.get(i).map(|&n| DomainKey::Number(n)),
            Domain::Categorical(v) => v.get(i).map(|s| DomainKey::Category(s.clone())),
        }
    }

    /// Position of key `i` on the X axis in data units: the value itself for
    /// numeric/temporal domains, the index for categorical ones.
    pub fn position(&self, i: usize) -> f64 {
        match self {
            Domain::Numeric(v) | Domain::Temporal(v) => v.get(i).copied().unwrap_or(0.0),
            Domain::Categorical(_) => i as f64,
        }
    }

    /// `(min, max)` of [`Domain::position`] over all keys; `(0, 0)` when empty.
    pub fn extent(&self) -> (f64, f64) {
        match self {
            Domain::Numeric(v) | Domain::Temporal(v) => match (v.first(), v.last()) {
                (Some(&a), Some(&b)) => (a, b),
                _ => (0.0, 0.0),
            },
            Domain::Categorical(v) => (0.0, v.len().saturating_sub(1) as f64),
        }
    }

    /// Human-readable tick label for key `i`.
    pub fn label(&self, i: usize) -> String {
        match self {
            Domain::Numeric(v) => v.get(i).map(|&n| format_compact(n)).unwrap_or_default(),
            Domain::Temporal(v) => {
                let (lo, hi) = self.extent();
                v.get(i).map(|&ms| format_timestamp(ms, hi - lo)).unwrap_or_default()
            }
            Domain::Categorical(v) => v.get(i).cloned().unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DomainKey {
    Number(f64),
    Category(String),
}

impl DomainKey {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DomainKey::Number(n) => Some(*n),
            DomainKey::Category(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NormalizedPoint {
    pub x: DomainKey,
    pub y: f64,
    pub original: ChartDataPoint,
    /// False when the series had no observation at this key and `y` was filled.
    pub present: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NormalizedSeries {
    pub id: String,
    pub name: String,
    pub color: String,
    /// Dense: exactly one entry per domain key.
    pub points: Vec<NormalizedPoint>,
}

#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub const fn zero() -> Self {
        Self { min_x: 0.0, max_x: 0.0, min_y: 0.0, max_y: 0.0 }
    }

    /// Widen Y by `fraction` of its range on both sides; a flat range is left alone.
    pub fn padded(&self, fraction: f64) -> Self {
        let range = self.max_y - self.min_y;
        if range <= 0.0 || !fraction.is_finite() || fraction <= 0.0 {
            return *self;
        }
        let pad = range * fraction;
        Self { min_y: self.min_y - pad, max_y: self.max_y + pad, ..*self }
    }

    pub fn y_range(&self) -> f64 { self.max_y - self.min_y }
    pub fn x_range(&self) -> f64 { self.max_x - self.min_x }
}

/// Output of [`normalize`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Normalized {
    pub domain: Domain,
    pub series: Vec<NormalizedSeries>,
    /// Y-padded bounds used for scaling.
    pub bounds: Bounds,
    /// Bounds before padding.
    pub raw_bounds: Bounds,
}

impl Normalized {
    pub fn empty() -> Self {
        Self {
            domain: Domain::Numeric(Vec::new()),
            series: Vec::new(),
            bounds: Bounds::zero(),
            raw_bounds: Bounds::zero(),
        }
    }

    pub fn is_empty(&self) -> bool { self.domain.is_empty() || self.series.is_empty() }
}

/// Normalize with the default palette and default Y padding.
pub fn normalize(series: &[ChartSeries]) -> Normalized {
    normalize_with(series, &ColorAssigner::default(), DEFAULT_Y_PADDING)
}

/// Normalize with an explicit palette and Y padding fraction.
pub fn normalize_with(series: &[ChartSeries], colors: &ColorAssigner, y_padding: f64) -> Normalized {
    if series.is_empty() {
        return Normalized::empty();
    }

    let domain = build_domain(series);
    let mut acc = Extent::new();

    let normalized: Vec<NormalizedSeries> = series
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            let color = colors.resolve(s.color.as_deref(), idx).to_string();
            let points = project(s, &domain, &mut acc);
            NormalizedSeries { id: s.id.clone(), name: s.name.clone(), color, points }
        })
        .collect();

    let raw_bounds = if domain.is_empty() {
        Bounds::zero()
    } else {
        let (min_x, max_x) = domain.extent();
        Bounds { min_x, max_x, min_y: acc.min, max_y: acc.max }
    };

    tracing::trace!(
        kind = ?domain.kind(),
        keys = domain.len(),
        series = normalized.len(),
        min_y = raw_bounds.min_y,
        max_y = raw_bounds.max_y,
        "normalized series"
    );

    Normalized { bounds: raw_bounds.padded(y_padding), raw_bounds, domain, series: normalized }
}

/// Running min/max of projected y values.
struct Extent {
    min: f64,
    max: f64,
}

impl Extent {
    fn new() -> Self { Self { min: f64::INFINITY, max: f64::NEG_INFINITY } }

    fn push(&mut self, v: f64) {
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }
}

fn build_domain(series: &[ChartSeries]) -> Domain {
    let all = || series.iter().flat_map(|s| s.points.iter());

    let categorical = all().any(|p| p.x.as_number().is_none());
    if categorical {
        let mut keys: Vec<String> = all().map(|p| p.x.key_string()).collect();
        keys.sort();
        keys.dedup();
        return Domain::Categorical(keys);
    }

    let mut keys: Vec<f64> = all().filter_map(|p| p.x.as_number()).map(canonical).collect();
    keys.sort_by(|a, b| a.total_cmp(b));
    keys.dedup();

    let temporal = all().next().is_some() && all().all(|p| p.x.is_date());
    if temporal { Domain::Temporal(keys) } else { Domain::Numeric(keys) }
}

/// Fold -0.0 into 0.0 so both hash and dedup to the same key.
#[inline]
fn canonical(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

fn project(series: &ChartSeries, domain: &Domain, acc: &mut Extent) -> Vec<NormalizedPoint> {
    match domain {
        Domain::Numeric(keys) | Domain::Temporal(keys) => {
            // later observations at the same key replace earlier ones
            let mut lookup: FxHashMap<u64, &ChartDataPoint> = FxHashMap::default();
            for p in &series.points {
                if let Some(n) = p.x.as_number() {
                    lookup.insert(canonical(n).to_bits(), p);
                }
            }
            let temporal = matches!(domain, Domain::Temporal(_));
            keys.iter()
                .enumerate()
                .map(|(i, &k)| {
                    let found = lookup.get(&k.to_bits()).copied();
                    fill(DomainKey::Number(k), found, || (synthetic_numeric(k, temporal), domain.label(i)), acc)
                })
                .collect()
        }
        Domain::Categorical(keys) => {
            let mut lookup: FxHashMap<String, &ChartDataPoint> = FxHashMap::default();
            for p in &series.points {
                lookup.insert(p.x.key_string(), p);
            }
            keys.iter()
                .map(|k| {
                    let found = lookup.get(k).copied();
                    fill(DomainKey::Category(k.clone()), found, || (XValue::Text(k.clone()), k.clone()), acc)
                })
                .collect()
        }
    }
}

fn fill(
    key: DomainKey,
    found: Option<&ChartDataPoint>,
    synthetic: impl FnOnce() -> (XValue, String),
    acc: &mut Extent,
) -> NormalizedPoint {
    match found {
        Some(p) => {
            let y = p.value();
            acc.push(y);
            NormalizedPoint { x: key, y, original: p.clone(), present: true }
        }
        None => {
            acc.push(0.0);
            // gaps carry the same tick label their key gets on the axis
            let (x, label) = synthetic();
            NormalizedPoint { x: key, y: 0.0, original: ChartDataPoint { x, y: 0.0, label: Some(label) }, present: false }
        }
    }
}

fn synthetic_numeric(k: f64, temporal: bool) -> XValue {
    if temporal {
        if let Some(d) = DateTime::<Utc>::from_timestamp_millis(k as i64) {
            return XValue::Date(d);
        }
    }
    XValue::Number(k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChartDataPoint as P;

    #[test]
    fn fills_gaps_with_zero() {
        let a = ChartSeries::new("a", "A").with_points(vec![P::new(1.0, 5.0), P::new(3.0, 7.0)]);
        let b = ChartSeries::new("b", "B").with_points(vec![P::new(2.0, 1.0)]);
        let n = normalize(&[a, b]);
        assert_eq!(n.domain, Domain::Numeric(vec![1.0, 2.0, 3.0]));
        let b = &n.series[1];
        assert_eq!(b.points.iter().map(|p| p.y).collect::<Vec<_>>(), vec![0.0, 1.0, 0.0]);
        assert!(!b.points[0].present);
        assert_eq!(b.points[0].original.label.as_deref(), Some("1"));
        assert_eq!(n.raw_bounds, Bounds { min_x: 1.0, max_x: 3.0, min_y: 0.0, max_y: 7.0 });
    }

    #[test]
    fn numeric_strings_stay_numeric() {
        let s = ChartSeries::new("s", "S").with_points(vec![P::new("10", 1.0), P::new("9", 2.0)]);
        let n = normalize(&[s]);
        assert_eq!(n.domain, Domain::Numeric(vec![9.0, 10.0]));
    }

    #[test]
    fn one_text_key_makes_everything_categorical() {
        let a = ChartSeries::new("a", "A").with_points(vec![P::new(10.0, 1.0), P::new(9.0, 2.0)]);
        let b = ChartSeries::new("b", "B").with_points(vec![P::new("x", 3.0)]);
        let n = normalize(&[a, b]);
        // string order, not numeric order
        assert_eq!(n.domain, Domain::Categorical(vec!["10".into(), "9".into(), "x".into()]));
        assert_eq!(n.raw_bounds.min_x, 0.0);
        assert_eq!(n.raw_bounds.max_x, 2.0);
    }

    #[test]
    fn duplicate_keys_last_wins() {
        let s = ChartSeries::new("s", "S").with_points(vec![P::new(1.0, 1.0), P::new(1.0, 9.0)]);
        let n = normalize(&[s]);
        assert_eq!(n.domain.len(), 1);
        assert_eq!(n.series[0].points[0].y, 9.0);
    }

    #[test]
    fn padding_applies_to_y_only() {
        let s = ChartSeries::from_xy("s", &[(0.0, 0.0), (1.0, 100.0)]);
        let n = normalize(&[s]);
        assert_eq!(n.bounds.min_y, -10.0);
        assert_eq!(n.bounds.max_y, 110.0);
        assert_eq!(n.bounds.min_x, 0.0);
        assert_eq!(n.bounds.max_x, 1.0);
    }

    #[test]
    fn flat_series_is_not_padded() {
        let s = ChartSeries::from_xy("s", &[(0.0, 4.0), (1.0, 4.0)]);
        let n = normalize(&[s]);
        assert_eq!(n.bounds, n.raw_bounds);
    }

    #[test]
    fn negative_zero_key_merges() {
        let s = ChartSeries::from_xy("s", &[(-0.0, 1.0), (0.0, 2.0)]);
        let n = normalize(&[s]);
        assert_eq!(n.domain.len(), 1);
        assert_eq!(n.series[0].points[0].y, 2.0);
    }
}
