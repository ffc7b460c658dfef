// File: crates/chart-engine/src/format.rs
// Summary: Label formatting for grid lines and ticks (compact numbers, timestamps).

use chrono::{DateTime, Utc};

const DAY_MS: f64 = 86_400_000.0;
const HOUR_MS: f64 = 3_600_000.0;

/// Compact numeric label: `12400 -> "12.4K"`, `25.0 -> "25"`, `0.125 -> "0.125"`.
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "NaN".to_string()
        } else if value.is_sign_positive() {
            "Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }
    // avoid "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        return format_with_suffix(value / 1_000_000_000.0, "B");
    }
    if abs >= 1_000_000.0 {
        return format_with_suffix(value / 1_000_000.0, "M");
    }
    if abs >= 1_000.0 {
        return format_with_suffix(value / 1_000.0, "K");
    }
    trim_trailing_zeroes(format!("{value:.3}"))
}

/// Like [`format_compact`], but with enough decimals that values `step` apart
/// never share a label.
pub fn format_stepped(value: f64, step: f64) -> String {
    if !value.is_finite() || !step.is_finite() || step <= 0.0 || step > compact_resolution(value) {
        return format_compact(value);
    }
    let decimals = (-step.log10()).floor().max(0.0) as usize + 1;
    let value = if value == 0.0 { 0.0 } else { value };
    trim_trailing_zeroes(format!("{value:.decimals$}"))
}

/// Smallest difference [`format_compact`] can show at this magnitude.
fn compact_resolution(value: f64) -> f64 {
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        1e7
    } else if abs >= 1_000_000.0 {
        1e4
    } else if abs >= 1_000.0 {
        10.0
    } else {
        1e-3
    }
}

fn format_with_suffix(value: f64, suffix: &str) -> String {
    format!("{}{}", trim_trailing_zeroes(format!("{value:.2}")), suffix)
}

fn trim_trailing_zeroes(mut s: String) -> String {
    if let Some(dot) = s.find('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.len() == dot + 1 {
            s.pop();
        }
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

/// Epoch-millisecond label whose precision follows the visible `span_ms`.
pub fn format_timestamp(ms: f64, span_ms: f64) -> String {
    let Some(dt) = DateTime::<Utc>::from_timestamp_millis(ms as i64) else {
        return format_compact(ms);
    };
    let pattern = if span_ms >= 2.0 * DAY_MS {
        "%Y-%m-%d"
    } else if span_ms >= HOUR_MS {
        "%m-%d %H:%M"
    } else {
        "%H:%M:%S"
    };
    dt.format(pattern).to_string()
}
