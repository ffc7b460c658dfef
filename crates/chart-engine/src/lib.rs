// File: crates/chart-engine/src/lib.rs
// Summary: Engine entry point; exports the normalize/scale/layout/hit-test API and plain geometry types.

pub mod types;
pub mod color;
pub mod theme;
pub mod format;
pub mod normalize;
pub mod scale;
pub mod geometry;
pub mod path;
pub mod bar;
pub mod grid;
pub mod hit;
pub mod options;
pub mod chart;

pub use types::{ChartDataPoint, ChartSeries, Insets, XValue, parse_y, HEIGHT, WIDTH};
pub use color::{ColorAssigner, ColorError, Rgba};
pub use theme::Theme;
pub use normalize::{normalize, normalize_with, Bounds, Domain, DomainKey, DomainKind, Normalized, NormalizedPoint, NormalizedSeries};
pub use scale::{map, ScaleMapper};
pub use geometry::{Point, Rect};
pub use path::{build_path, to_svg_path, PathCommand};
pub use bar::{layout_bars, BarRect, BarSpacing};
pub use grid::{Grid, GridLine, Orientation};
pub use hit::{hit_test_bars, hit_test_points, Hit, HitTest, PointRecord};
pub use options::{ConfigError, LayoutOptions};
pub use chart::{BarFrame, Chart, LineFrame, LineGeometry};
