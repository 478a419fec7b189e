//! Brightness inversion for light-background output.

use super::grid::BrightnessGrid;

/// Complement every brightness value (`255 - v`).
///
/// Involutive: inverting twice returns the original grid.
pub fn invert(grid: BrightnessGrid) -> BrightnessGrid {
    BrightnessGrid {
        data: grid.data.iter().map(|&v| 255 - v).collect(),
        width: grid.width,
        height: grid.height,
    }
}
