//! PNG reader backed by the `image` crate.

use std::path::Path;

use ndarray::Array3;
use tracing::debug;

use crate::hyperspectral::common::error::{CubeError, Result};
use crate::hyperspectral::rgb::reader::RgbImageReader;
use crate::hyperspectral::rgb::types::RgbImage;

/// Decodes PNG files of any color type and converts them to 8-bit RGB.
pub struct PngImageReader;

impl RgbImageReader for PngImageReader {
    fn read_rgb(&self, path: &Path) -> Result<RgbImage> {
        let image_error = |reason: String| CubeError::ImageRead(path.to_path_buf(), reason);

        let decoded = image::open(path).map_err(|e| image_error(e.to_string()))?;
        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();

        debug!("Decoded {}: {}x{}", path.display(), width, height);

        let pixels = Array3::from_shape_vec((height as usize, width as usize, 3), rgb.into_raw())
            .map_err(|e| image_error(e.to_string()))?;

        Ok(RgbImage { pixels })
    }
}
