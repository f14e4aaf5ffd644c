use std::path::Path;

use crate::hyperspectral::common::error::Result;
use crate::hyperspectral::envi::types::RasterData;

pub trait RasterReader {
    fn open(&self, path: &Path) -> Result<RasterData>;
}
