//! ASCII rendering pipeline.
//!
//! Converts a decoded RGB image to ASCII art in three stages:
//!
//! 1. **Brightness reduction** - collapse each RGB pixel to a 0-255 value
//!    using a selectable formula ([`BrightnessMode`])
//! 2. **Inversion** - optional brightness complement for light backgrounds
//! 3. **Character mapping** - quantize brightness into a character ramp
//!
//! Every stage is a pure function over immutable grids; dimensions are
//! preserved end to end.

mod brightness;
mod grid;
mod invert;
mod mapping;
mod ramp;

pub use brightness::{reduce, BrightnessMode};
pub use grid::{AsciiGrid, BrightnessGrid, PixelGrid};
pub use invert::invert;
pub use mapping::map_to_chars;
pub use ramp::{CharRamp, RampError, DEFAULT_RAMP};
