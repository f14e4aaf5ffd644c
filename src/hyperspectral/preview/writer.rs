use std::io::Write;

use ndarray::ArrayView2;

use crate::hyperspectral::common::error::Result;
use crate::hyperspectral::preview::types::TiffCompression;

pub trait BandWriter {
    fn write_band(&self, band: ArrayView2<f32>, output: &mut dyn Write, compression: TiffCompression) -> Result<()>;
}
