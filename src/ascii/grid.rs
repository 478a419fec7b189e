//! Grid types shared across the rendering pipeline.
//!
//! All grids are stored as flat buffers in row-major order with explicit
//! dimensions, so every row has the same length by construction.

/// An RGB image as a flat buffer of `width * height` pixel triplets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Interleaved RGB bytes, `3 * width * height` in length.
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl PixelGrid {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(data.len(), (width * height * 3) as usize);
        PixelGrid {
            data,
            width,
            height,
        }
    }

    /// Iterate over pixels as `(r, g, b)` tuples in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u8, u8, u8)> + '_ {
        self.data.chunks_exact(3).map(|p| (p[0], p[1], p[2]))
    }
}

/// A single brightness value (0-255) per pixel, same dimensions as the
/// source [`PixelGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrightnessGrid {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// One character per pixel, same dimensions as the source grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiGrid {
    pub data: Vec<char>,
    pub width: u32,
    pub height: u32,
}

impl AsciiGrid {
    /// Iterate over the grid one text row at a time.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.data
            .chunks(self.width as usize)
            .map(|row| row.iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_grid_iterates_triplets() {
        let grid = PixelGrid::new(vec![1, 2, 3, 4, 5, 6], 2, 1);
        let pixels: Vec<_> = grid.pixels().collect();
        assert_eq!(pixels, vec![(1, 2, 3), (4, 5, 6)]);
    }

    #[test]
    fn test_ascii_grid_lines() {
        let grid = AsciiGrid {
            data: vec!['a', 'b', 'c', 'd'],
            width: 2,
            height: 2,
        };
        let lines: Vec<String> = grid.lines().collect();
        assert_eq!(lines, vec!["ab".to_string(), "cd".to_string()]);
    }
}
