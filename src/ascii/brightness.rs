//! RGB to brightness reduction.
//!
//! Each mode collapses an `(r, g, b)` triplet into a single 0-255 value.
//! The luminosity coefficients (0.21/0.72/0.07) are kept exactly as the
//! tool has always used them; they are not the BT.601/BT.709 sets.

use super::grid::{BrightnessGrid, PixelGrid};

/// Brightness formula applied per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrightnessMode {
    /// Plain average of the three channels.
    #[default]
    Average,
    /// Average of the brightest and darkest channel.
    MinMax,
    /// Perceived brightness: `floor(0.21*r + 0.72*g + 0.07*b)`.
    Luminosity,
    /// Brightest channel.
    Max,
    /// Darkest channel.
    Min,
}

impl BrightnessMode {
    /// Apply this formula to one pixel.
    #[inline]
    pub fn apply(&self, r: u8, g: u8, b: u8) -> u8 {
        let (r, g, b) = (r as u16, g as u16, b as u16);
        let value = match self {
            BrightnessMode::Average => (r + g + b) / 3,
            BrightnessMode::MinMax => {
                let hi = r.max(g).max(b);
                let lo = r.min(g).min(b);
                (hi + lo) / 2
            }
            BrightnessMode::Luminosity => {
                let y = 0.21 * r as f64 + 0.72 * g as f64 + 0.07 * b as f64;
                y.floor() as u16
            }
            BrightnessMode::Max => r.max(g).max(b),
            BrightnessMode::Min => r.min(g).min(b),
        };
        debug_assert!(value <= 255, "brightness {} out of range", value);
        value as u8
    }

    /// Parse a mode name as written in a config file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "average" => Some(BrightnessMode::Average),
            "min_max" => Some(BrightnessMode::MinMax),
            "luminosity" => Some(BrightnessMode::Luminosity),
            "max" => Some(BrightnessMode::Max),
            "min" => Some(BrightnessMode::Min),
            _ => None,
        }
    }

    /// Canonical name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            BrightnessMode::Average => "average",
            BrightnessMode::MinMax => "min_max",
            BrightnessMode::Luminosity => "luminosity",
            BrightnessMode::Max => "max",
            BrightnessMode::Min => "min",
        }
    }
}

/// Reduce an RGB grid to a brightness grid using the given mode.
///
/// Dimensions are preserved; every output value is in 0-255.
pub fn reduce(grid: &PixelGrid, mode: BrightnessMode) -> BrightnessGrid {
    let pixel_count = (grid.width * grid.height) as usize;
    let mut data = Vec::with_capacity(pixel_count);

    for (r, g, b) in grid.pixels() {
        data.push(mode.apply(r, g, b));
    }

    BrightnessGrid {
        data,
        width: grid.width,
        height: grid.height,
    }
}
