//! Plot ordering and colours for condition labels
//!
//! Conditions are plotted activity by activity, the transparent regime
//! before SM. Each activity gets a pastel shade for the transparent regime
//! and a dark shade for SM.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::condition::Regime;

/// Order in which defined conditions are plotted
pub const PLOT_ORDER: [&str; 10] = [
    "transparent_WALKING",
    "SM_WALKING",
    "transparent_RAMPS_UP",
    "SM_RAMPS_UP",
    "transparent_RAMPS_DOWN",
    "SM_RAMPS_DOWN",
    "transparent_STAIRS_UP",
    "SM_STAIRS_UP",
    "transparent_STAIRS_DOWN",
    "SM_STAIRS_DOWN",
];

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Colour as `#rrggbb`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

// First five colours of seaborn's "pastel" and "dark" palettes
const LIGHT: [Rgb; 5] = [
    Rgb::new(0xa1, 0xc9, 0xf4),
    Rgb::new(0xff, 0xb4, 0x82),
    Rgb::new(0x8d, 0xe5, 0xa1),
    Rgb::new(0xff, 0x9f, 0x9b),
    Rgb::new(0xd0, 0xbb, 0xff),
];

const DARK: [Rgb; 5] = [
    Rgb::new(0x00, 0x1c, 0x7f),
    Rgb::new(0xb1, 0x40, 0x0d),
    Rgb::new(0x12, 0x71, 0x1c),
    Rgb::new(0x8c, 0x08, 0x00),
    Rgb::new(0x59, 0x1e, 0x71),
];

/// One pastel colour per activity
pub fn light_palette() -> [Rgb; 5] {
    LIGHT
}

/// One dark colour per activity
pub fn dark_palette() -> [Rgb; 5] {
    DARK
}

/// Light and dark colours interleaved, aligned with [`PLOT_ORDER`]
pub fn custom_palette() -> Vec<Rgb> {
    LIGHT
        .iter()
        .zip(DARK.iter())
        .flat_map(|(&light, &dark)| [light, dark])
        .collect()
}

/// Colour of a condition label in [`PLOT_ORDER`]
pub fn plot_color(label: &str) -> Option<Rgb> {
    let idx = PLOT_ORDER.iter().position(|&l| l == label)?;
    custom_palette().get(idx).copied()
}

/// Matplotlib colour name used for a regime
pub fn regime_color(regime: Regime) -> &'static str {
    match regime {
        Regime::Transparent => "tab:blue",
        Regime::Sm => "tab:orange",
    }
}

/// RGB value of [`regime_color`]
pub fn regime_rgb(regime: Regime) -> Rgb {
    match regime {
        Regime::Transparent => Rgb::new(0x1f, 0x77, 0xb4),
        Regime::Sm => Rgb::new(0xff, 0x7f, 0x0e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{Condition, ConditionMapping};

    #[test]
    fn test_custom_palette_interleaves() {
        let palette = custom_palette();
        assert_eq!(palette.len(), PLOT_ORDER.len());
        assert_eq!(palette[0], light_palette()[0]);
        assert_eq!(palette[1], dark_palette()[0]);
        assert_eq!(palette[9], dark_palette()[4]);
    }

    #[test]
    fn test_plot_order_is_defined_conditions() {
        let mapping = ConditionMapping::standard();
        for pair in PLOT_ORDER.chunks(2) {
            let a: Condition = pair[0].parse().unwrap();
            let b: Condition = pair[1].parse().unwrap();
            assert_eq!(a.regime, Regime::Transparent);
            assert_eq!(b.regime, Regime::Sm);
            assert_eq!(a.activity, b.activity);
            assert_ne!(mapping.code(pair[0]), Some(0));
        }
    }

    #[test]
    fn test_plot_color() {
        assert_eq!(plot_color("SM_WALKING"), Some(dark_palette()[0]));
        assert_eq!(plot_color("transparent_STAIRS_DOWN"), Some(light_palette()[4]));
        assert_eq!(plot_color("SM_UNDEFINED"), None);
    }

    #[test]
    fn test_hex() {
        assert_eq!(light_palette()[0].hex(), "#a1c9f4");
        assert_eq!(regime_rgb(Regime::Sm).to_string(), "#ff7f0e");
        assert_eq!(regime_color(Regime::Transparent), "tab:blue");
    }
}
