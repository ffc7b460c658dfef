// File: crates/chart-engine/src/color.rs
// Summary: Deterministic palette cycling for series colors, plus hex color parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default series palette (cycled by series index).
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#3b82f6", // blue
    "#10b981", // green
    "#f59e0b", // amber
    "#ef4444", // red
    "#8b5cf6", // violet
    "#06b6d4", // cyan
    "#ec4899", // pink
    "#84cc16", // lime
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color must have 3, 6 or 8 hex digits: {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in color {0:?}")]
    BadDigit(String),
}

/// 8-bit RGBA color, independent of any drawing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(s.to_string()));
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ColorError::BadDigit(s.to_string()));
        match hex.len() {
            3 => {
                let nib = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| ColorError::BadDigit(s.to_string()))
                };
                Ok(Self::rgb(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(ColorError::BadLength(s.to_string())),
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Assigns colors to series by index, cycling through a palette.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorAssigner {
    palette: Vec<String>,
}

impl ColorAssigner {
    /// An empty palette falls back to [`DEFAULT_PALETTE`].
    pub fn new(palette: Vec<String>) -> Self {
        if palette.is_empty() {
            return Self::default();
        }
        Self { palette }
    }

    pub fn color_for(&self, index: usize) -> &str {
        &self.palette[index % self.palette.len()]
    }

    /// Explicit series color wins over the palette slot.
    pub fn resolve<'a>(&'a self, explicit: Option<&'a str>, index: usize) -> &'a str {
        match explicit {
            Some(c) if !c.trim().is_empty() => c,
            _ => self.color_for(index),
        }
    }

    pub fn palette(&self) -> &[String] { &self.palette }
}

impl Default for ColorAssigner {
    fn default() -> Self {
        Self { palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect() }
    }
}
