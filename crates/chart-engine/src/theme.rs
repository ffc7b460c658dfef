// File: crates/chart-engine/src/theme.rs
// Summary: Named surface themes (background/grid/label colors + series palette).

use crate::color::{ColorAssigner, Rgba};

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub palette: &'static [&'static str],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            grid: Rgba::rgb(40, 40, 45),
            axis_line: Rgba::rgb(180, 180, 190),
            axis_label: Rgba::rgb(235, 235, 245),
            palette: &["#40a0ff", "#28c878", "#ffb020", "#dc5050", "#a070ff", "#30c8d8"],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(250, 250, 252),
            grid: Rgba::rgb(230, 230, 235),
            axis_line: Rgba::rgb(60, 60, 70),
            axis_label: Rgba::rgb(20, 20, 30),
            palette: &["#2078c8", "#14a05a", "#d08000", "#c83c3c", "#7040c0", "#108898"],
        }
    }

    pub fn solarized_dark() -> Self {
        // Base colors from Solarized dark palette
        Self {
            name: "solarized-dark",
            background: Rgba::rgb(0x00, 0x2b, 0x36), // base03
            grid: Rgba::rgb(0x07, 0x36, 0x42),       // base02
            axis_line: Rgba::rgb(0x93, 0xa1, 0xa1),  // base1
            axis_label: Rgba::rgb(0xee, 0xe8, 0xd5), // base2
            palette: &["#268bd2", "#2aa198", "#b58900", "#dc322f", "#6c71c4", "#859900"],
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Rgba::rgb(0xfd, 0xf6, 0xe3), // base3
            grid: Rgba::rgb(0xee, 0xe8, 0xd5),       // base2
            axis_line: Rgba::rgb(0x65, 0x7b, 0x83),  // base00
            axis_label: Rgba::rgb(0x00, 0x2b, 0x36), // base03
            palette: &["#268bd2", "#2aa198", "#b58900", "#dc322f", "#6c71c4", "#859900"],
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::rgb(0x00, 0x00, 0x00),
            grid: Rgba::rgb(0x22, 0x22, 0x22),
            axis_line: Rgba::rgb(0xff, 0xff, 0xff),
            axis_label: Rgba::rgb(0xff, 0xff, 0xff),
            palette: &["#00ffff", "#00ff00", "#ffff00", "#ff0000", "#ff00ff", "#00aaff"],
        }
    }

    /// Palette of this theme as a [`ColorAssigner`].
    pub fn color_assigner(&self) -> ColorAssigner {
        ColorAssigner::new(self.palette.iter().map(|c| c.to_string()).collect())
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn find_falls_back_to_dark() {
        assert_eq!(find("LIGHT").name, "light");
        assert_eq!(find("no-such-theme").name, "dark");
    }

    #[test]
    fn palettes_parse() {
        for t in presets() {
            for c in t.palette {
                assert!(Rgba::from_hex(c).is_ok(), "{} has bad color {}", t.name, c);
            }
        }
    }
}
