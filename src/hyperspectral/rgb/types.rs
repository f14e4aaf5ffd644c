//! RGB image types

use ndarray::Array3;

/// 8-bit RGB image, axes (row, column, channel)
#[derive(Debug, Clone, PartialEq)]
pub struct RgbImage {
    pub pixels: Array3<u8>,
}

impl RgbImage {
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }
}
