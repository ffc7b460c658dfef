// File: crates/chart-engine/src/options.rs
// Summary: Layout parameters for one chart invocation (surface size, spacing, ticks, palette).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bar::BarSpacing;
use crate::color::{ColorAssigner, ColorError, Rgba};
use crate::geometry::Rect;
use crate::grid::{DEFAULT_HORIZONTAL_LINES, DEFAULT_MAX_X_TICKS};
use crate::normalize::DEFAULT_Y_PADDING;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid layout options JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be a finite, non-negative number (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("palette entry {index}: {source}")]
    Palette {
        index: usize,
        #[source]
        source: ColorError,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    /// Quadratic smoothing for line paths.
    pub smooth: bool,
    pub group_spacing: f64,
    pub bar_spacing: f64,
    pub horizontal_lines: usize,
    pub max_x_ticks: usize,
    /// Y headroom as a fraction of the data range.
    pub y_padding: f64,
    pub dot_radius: f64,
    /// Extra pick radius around dots for hit testing.
    pub hit_tolerance: f64,
    /// Overrides the default series palette when set.
    pub palette: Option<Vec<String>>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        let spacing = BarSpacing::default();
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            smooth: false,
            group_spacing: spacing.group,
            bar_spacing: spacing.bar,
            horizontal_lines: DEFAULT_HORIZONTAL_LINES,
            max_x_ticks: DEFAULT_MAX_X_TICKS,
            y_padding: DEFAULT_Y_PADDING,
            dot_radius: 4.0,
            hit_tolerance: 3.0,
            palette: None,
        }
    }
}

impl LayoutOptions {
    /// Parse options from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let opts: Self = serde_json::from_str(json)?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("group_spacing", self.group_spacing),
            ("bar_spacing", self.bar_spacing),
            ("y_padding", self.y_padding),
            ("dot_radius", self.dot_radius),
            ("hit_tolerance", self.hit_tolerance),
        ];
        for (field, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if let Some(palette) = &self.palette {
            for (index, c) in palette.iter().enumerate() {
                Rgba::from_hex(c).map_err(|source| ConfigError::Palette { index, source })?;
            }
        }
        Ok(())
    }

    /// Plot area inside the insets, clamped to a non-negative size.
    pub fn plot_rect(&self) -> Rect {
        let w = self.width.saturating_sub(self.insets.hsum());
        let h = self.height.saturating_sub(self.insets.vsum());
        Rect::from_xywh(self.insets.left as f64, self.insets.top as f64, w as f64, h as f64)
    }

    pub fn spacing(&self) -> BarSpacing {
        BarSpacing { group: self.group_spacing.max(0.0), bar: self.bar_spacing.max(0.0) }
    }

    pub fn hit_radius(&self) -> f64 { (self.dot_radius + self.hit_tolerance).max(0.0) }

    pub fn colors(&self) -> ColorAssigner {
        match &self.palette {
            Some(p) => ColorAssigner::new(p.clone()),
            None => ColorAssigner::default(),
        }
    }
}
