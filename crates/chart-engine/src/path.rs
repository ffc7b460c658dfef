// File: crates/chart-engine/src/path.rs
// Summary: Turn a series' pixel points into drawable path commands (polyline or quadratic smoothing).

use std::fmt::Write as _;

use serde::Serialize;

use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { to: Point },
    LineTo { to: Point },
    /// Quadratic curve from the current point through `ctrl` to `to`.
    QuadTo { ctrl: Point, to: Point },
}

impl PathCommand {
    /// End point of the command.
    pub fn end(&self) -> Point {
        match *self {
            PathCommand::MoveTo { to } | PathCommand::LineTo { to } | PathCommand::QuadTo { to, .. } => to,
        }
    }
}

/// Build the trace for one series.
///
/// Fewer than two points produce no commands. Smoothing needs at least three
/// points; with two it falls back to a polyline. In smoothed mode each interior
/// point becomes the control point of a quadratic ending halfway to the next
/// point, and the last segment is a straight line so the path ends exactly on
/// the final point.
pub fn build_path(points: &[Point], smooth: bool) -> Vec<PathCommand> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(n);
    out.push(PathCommand::MoveTo { to: points[0] });

    if !smooth || n < 3 {
        out.extend(points[1..].iter().map(|&to| PathCommand::LineTo { to }));
        return out;
    }

    for w in points[1..].windows(2) {
        let (cur, next) = (w[0], w[1]);
        out.push(PathCommand::QuadTo { ctrl: cur, to: cur.midpoint(next) });
    }
    out.push(PathCommand::LineTo { to: points[n - 1] });
    out
}

/// Serialize commands as SVG path data (`M x y L x y Q cx cy x y`).
pub fn to_svg_path(commands: &[PathCommand]) -> String {
    let mut d = String::new();
    for (i, c) in commands.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        let _ = match *c {
            PathCommand::MoveTo { to } => write!(d, "M {} {}", fmt(to.x), fmt(to.y)),
            PathCommand::LineTo { to } => write!(d, "L {} {}", fmt(to.x), fmt(to.y)),
            PathCommand::QuadTo { ctrl, to } => {
                write!(d, "Q {} {} {} {}", fmt(ctrl.x), fmt(ctrl.y), fmt(to.x), fmt(to.y))
            }
        };
    }
    d
}

fn fmt(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
