//! Hyperspectral cube record

use std::path::{Path, PathBuf};

use ndarray::{Array1, Array2, Array3, ArrayView2, ArrayView3, Axis};
use tracing::{debug, info};

use crate::hyperspectral::common::error::{CubeError, Result};
use crate::hyperspectral::correction::{self, ReferenceRegion};
use crate::hyperspectral::cube::band_table::BandTable;
use crate::hyperspectral::envi::types::RasterData;
use crate::hyperspectral::metadata::AcquisitionMetadata;
use crate::hyperspectral::rgb::types::RgbImage;

/// A loaded dataset: reflectance cube plus everything captured alongside it.
#[derive(Debug, Clone)]
pub struct HyperspectralCube {
    source: PathBuf,
    /// Reflectance values, axes (band, row, column)
    data: Array3<f32>,
    bands: BandTable,
    scene: RgbImage,
    preview: RgbImage,
    metadata: AcquisitionMetadata,
    white_reference: Option<Array1<f32>>,
    corrected: Option<Array3<f32>>,
}

impl HyperspectralCube {
    pub fn new(
        source: PathBuf,
        data: Array3<f32>,
        bands: BandTable,
        scene: RgbImage,
        preview: RgbImage,
        metadata: AcquisitionMetadata,
    ) -> Self {
        Self {
            source,
            data,
            bands,
            scene,
            preview,
            metadata,
            white_reference: None,
            corrected: None,
        }
    }

    /// Path of the raster the cube was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn raster_count(&self) -> usize {
        self.data.dim().0
    }

    /// `(bands, rows, columns)`
    pub fn shape(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    pub fn data(&self) -> ArrayView3<'_, f32> {
        self.data.view()
    }

    pub fn bands(&self) -> &BandTable {
        &self.bands
    }

    pub fn scene(&self) -> &RgbImage {
        &self.scene
    }

    pub fn preview(&self) -> &RgbImage {
        &self.preview
    }

    pub fn metadata(&self) -> &AcquisitionMetadata {
        &self.metadata
    }

    /// Returns the wavelength and image of a band, `1 <= number <= raster_count`.
    pub fn band(&self, number: usize) -> Result<(f64, ArrayView2<'_, f32>)> {
        let index = self.band_index(number)?;
        let wavelength = self.wavelength(number)?;
        Ok((wavelength, self.data.index_axis(Axis(0), index)))
    }

    /// Same as [`band`](Self::band) on the corrected cube.
    pub fn corrected_band(&self, number: usize) -> Result<(f64, ArrayView2<'_, f32>)> {
        let index = self.band_index(number)?;
        let wavelength = self.wavelength(number)?;
        let corrected = self.corrected.as_ref().ok_or(CubeError::MissingWhiteReference)?;
        Ok((wavelength, corrected.index_axis(Axis(0), index)))
    }

    /// Estimates the white-reference spectrum over `region` and normalizes
    /// the whole cube by it. Both results are cached, replacing any earlier
    /// computation.
    pub fn compute_white_reference(&mut self, region: ReferenceRegion) -> Result<&Array1<f32>> {
        let spectrum = correction::white_reference_spectrum(self.data.view(), region)?;
        let corrected = correction::apply_white_reference(self.data.view(), spectrum.view())?;

        info!(
            bands = spectrum.len(),
            x1 = region.x1,
            x2 = region.x2,
            y1 = region.y1,
            y2 = region.y2,
            "White reference computed"
        );

        self.corrected = Some(corrected);
        Ok(&*self.white_reference.insert(spectrum))
    }

    pub fn white_reference(&self) -> Option<&Array1<f32>> {
        self.white_reference.as_ref()
    }

    pub fn corrected(&self) -> Option<&Array3<f32>> {
        self.corrected.as_ref()
    }

    /// Clamped copy of a corrected band for display.
    pub fn display_band(&self, number: usize, ceiling: f32) -> Result<Array2<f32>> {
        let (_, band) = self.corrected_band(number)?;
        debug!("Clamping corrected band {number} at {ceiling}");
        Ok(correction::clamp_for_display(band, ceiling))
    }

    fn band_index(&self, number: usize) -> Result<usize> {
        let available = self.raster_count();
        if number == 0 || number > available {
            return Err(CubeError::BandOutOfRange {
                requested: number,
                available,
            });
        }
        Ok(number - 1)
    }

    fn wavelength(&self, number: usize) -> Result<f64> {
        self.bands
            .wavelength(number)
            .ok_or_else(|| CubeError::MissingMetadataField(RasterData::band_key(number)))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;
    use ndarray::Array3;

    use super::*;

    pub fn metadata() -> AcquisitionMetadata {
        AcquisitionMetadata {
            acquired_at: NaiveDate::from_ymd_opt(2019, 3, 5)
                .and_then(|d| d.and_hms_opt(10, 15, 32))
                .unwrap(),
            latitude: 60.0,
            longitude: 25.0,
            integration_time: 30.0,
        }
    }

    pub fn rgb(height: usize, width: usize) -> RgbImage {
        RgbImage {
            pixels: Array3::zeros((height, width, 3)),
        }
    }

    pub fn cube(data: Array3<f32>) -> HyperspectralCube {
        let (bands, _, _) = data.dim();
        let table = BandTable::from_wavelengths((0..bands).map(|b| 400.0 + 5.0 * b as f64));
        HyperspectralCube::new(
            PathBuf::from("REFLECTANCE_test.dat"),
            data,
            table,
            rgb(2, 2),
            rgb(2, 2),
            metadata(),
        )
    }
}
