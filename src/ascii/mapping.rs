//! Brightness to character mapping.

use super::grid::{AsciiGrid, BrightnessGrid};
use super::ramp::CharRamp;

/// Map every brightness value to a ramp character.
///
/// Each value is quantized with the ramp's bucket size: brightness `v`
/// selects `ramp[v / bucket_size]`. The last bucket may span fewer values
/// than the others; that is inherent to ceiling-division quantization.
///
/// Dimensions are preserved.
///
/// # Example
/// ```
/// use img2ascii::ascii::{map_to_chars, BrightnessGrid, CharRamp};
///
/// let grid = BrightnessGrid { data: vec![0, 255], width: 2, height: 1 };
/// let ramp = CharRamp::new("01").unwrap();
/// let ascii = map_to_chars(&grid, &ramp);
/// assert_eq!(ascii.lines().next().unwrap(), "01");
/// ```
pub fn map_to_chars(grid: &BrightnessGrid, ramp: &CharRamp) -> AsciiGrid {
    let data = grid.data.iter().map(|&v| ramp.char_for(v)).collect();

    AsciiGrid {
        data,
        width: grid.width,
        height: grid.height,
    }
}
