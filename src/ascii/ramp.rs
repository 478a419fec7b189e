//! Character ramp handling.

use std::fmt;

/// Default character ramp, ordered darkest to brightest.
/// A trimmed variant of the classic Paul Bourke density ramp.
pub const DEFAULT_RAMP: &str =
    "`^\",:;Il!i~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// A validated, non-empty character ramp.
///
/// Index 0 is the darkest character and the last index the brightest by
/// convention; the ordering itself is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharRamp {
    chars: Vec<char>,
    bucket_size: u32,
}

impl CharRamp {
    /// Build a ramp from a string of characters.
    ///
    /// Fails with [`RampError::Empty`] if the string has no characters.
    pub fn new(scale: &str) -> Result<Self, RampError> {
        let chars: Vec<char> = scale.chars().collect();
        if chars.is_empty() {
            return Err(RampError::Empty);
        }
        // Ceiling division over the 0-255 range. The historical formula
        // divides 255 (not 256) by the ramp length; kept for output
        // compatibility with existing ramps.
        let len = chars.len() as u32;
        let bucket_size = 255u32.div_ceil(len);
        Ok(CharRamp { chars, bucket_size })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; emptiness is rejected at construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Width of one quantization bucket, `ceil(255 / len)`.
    pub fn bucket_size(&self) -> u32 {
        self.bucket_size
    }

    /// Ramp index for a brightness value.
    ///
    /// When the ramp length divides 255 exactly, `255 / bucket_size` equals
    /// the length itself, so the quotient is clamped to the last index.
    #[inline]
    pub fn index(&self, brightness: u8) -> usize {
        ((brightness as u32 / self.bucket_size) as usize).min(self.chars.len() - 1)
    }

    /// Character for a brightness value.
    #[inline]
    pub fn char_for(&self, brightness: u8) -> char {
        self.chars[self.index(brightness)]
    }
}

impl Default for CharRamp {
    fn default() -> Self {
        // DEFAULT_RAMP is non-empty, so this cannot fail.
        CharRamp::new(DEFAULT_RAMP).unwrap()
    }
}

/// Errors from ramp construction.
#[derive(Debug, PartialEq, Eq)]
pub enum RampError {
    /// The ramp string contained no characters.
    Empty,
}

impl fmt::Display for RampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RampError::Empty => {
                write!(f, "Character ramp is empty; provide at least one character")
            }
        }
    }
}

impl std::error::Error for RampError {}
