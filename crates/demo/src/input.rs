// File: crates/demo/src/input.rs
// Summary: Long-format CSV (series, x, y[, label]) -> engine series, preserving first-seen series order.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chart_engine::{parse_y, ChartDataPoint, ChartSeries, XValue};
use chrono::{DateTime, NaiveDate, Utc};

/// Load series from a CSV file.
pub fn load_series_csv(path: &Path) -> Result<Vec<ChartSeries>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_series(file)
}

pub fn read_series(reader: impl Read) -> Result<Vec<ChartSeries>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_series = idx(&["series", "name", "id"]);
    let i_x = idx(&["x", "time", "timestamp", "date", "category"]).context("missing x column")?;
    let i_y = idx(&["y", "value", "v"]).context("missing y column")?;
    let i_label = idx(&["label"]);

    let mut out: Vec<ChartSeries> = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {}", row + 1))?;
        let id = i_series.and_then(|i| rec.get(i)).map(str::trim).filter(|s| !s.is_empty()).unwrap_or("series");
        let Some(raw_x) = rec.get(i_x) else {
            tracing::warn!(row = row + 1, "row without x value skipped");
            continue;
        };
        let mut point = ChartDataPoint::new(parse_x(raw_x), parse_y(rec.get(i_y).unwrap_or("")));
        if let Some(label) = i_label.and_then(|i| rec.get(i)).map(str::trim).filter(|s| !s.is_empty()) {
            point = point.with_label(label);
        }

        match out.iter_mut().find(|s| s.id == id) {
            Some(s) => s.push(point),
            None => out.push(ChartSeries::new(id, id).with_points(vec![point])),
        }
    }
    Ok(out)
}

/// Dates (RFC 3339 or `YYYY-MM-DD`) become temporal keys, numbers stay numeric, anything else is a category.
pub fn parse_x(raw: &str) -> XValue {
    let s = raw.trim();
    if let Ok(n) = s.parse::<f64>() {
        return XValue::Number(n);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return XValue::Date(dt.with_timezone(&Utc));
    }
    if let Some(dt) = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0)) {
        return XValue::Date(dt.and_utc());
    }
    XValue::Text(s.to_string())
}
