//! Raster data types

use std::collections::BTreeMap;

use ndarray::Array3;

/// Prefix of the per-band wavelength keys in [`RasterData::metadata`].
pub const BAND_KEY_PREFIX: &str = "Band_";

/// Represents a decoded multi-band raster
#[derive(Debug, Clone)]
pub struct RasterData {
    /// Band images, axes (band, row, column)
    pub bands: Array3<f32>,
    /// String-keyed metadata, `Band_<n>` -> wavelength string for every band
    /// that has one
    pub metadata: BTreeMap<String, String>,
}

impl RasterData {
    pub fn raster_count(&self) -> usize {
        self.bands.dim().0
    }

    pub fn band_key(number: usize) -> String {
        format!("{BAND_KEY_PREFIX}{number}")
    }
}
