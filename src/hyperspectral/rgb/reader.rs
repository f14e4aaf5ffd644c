use std::path::Path;

use crate::hyperspectral::common::error::Result;
use crate::hyperspectral::rgb::types::RgbImage;

pub trait RgbImageReader {
    fn read_rgb(&self, path: &Path) -> Result<RgbImage>;
}
