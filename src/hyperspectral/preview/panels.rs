//! Data behind the four diagnostic panels
//!
//! 1. RGB preview image
//! 2. one corrected band, clamped for display
//! 3. white-reference spectrum against wavelength
//! 4. vertical intensity profiles through the displayed band

use std::io::Write;

use ndarray::{Array1, Array2, Axis};
use tracing::debug;

use crate::hyperspectral::common::error::{CubeError, Result};
use crate::hyperspectral::correction::clamp_for_display;
use crate::hyperspectral::cube::HyperspectralCube;
use crate::hyperspectral::preview::types::TiffCompression;
use crate::hyperspectral::preview::writer::BandWriter;
use crate::hyperspectral::rgb::types::RgbImage;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumPoint {
    pub band: usize,
    /// `None` when the band table has no entry for this band
    pub wavelength: Option<f64>,
    pub value: f32,
}

/// Values of the displayed band down one column.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalProfile {
    pub column: usize,
    pub values: Array1<f32>,
}

#[derive(Debug, Clone)]
pub struct PreviewPanels {
    pub rgb: RgbImage,
    pub band: usize,
    pub wavelength: f64,
    /// Clamped copy of the corrected band
    pub band_image: Array2<f32>,
    pub spectrum: Vec<SpectrumPoint>,
    pub profiles: Vec<VerticalProfile>,
}

impl PreviewPanels {
    /// Composes the panels for corrected band `band` (1-based).
    ///
    /// Requires the white reference to have been computed on `cube`.
    pub fn compose(cube: &HyperspectralCube, band: usize, columns: &[usize], ceiling: f32) -> Result<Self> {
        let reference = cube.white_reference().ok_or(CubeError::MissingWhiteReference)?;
        let (wavelength, corrected) = cube.corrected_band(band)?;

        let width = corrected.dim().1;
        if let Some(&column) = columns.iter().find(|&&c| c >= width) {
            return Err(CubeError::ProfileColumnOutOfRange { column, width });
        }

        let band_image = clamp_for_display(corrected, ceiling);

        let spectrum = reference
            .iter()
            .enumerate()
            .map(|(i, &value)| SpectrumPoint {
                band: i + 1,
                wavelength: cube.bands().wavelength(i + 1),
                value,
            })
            .collect();

        let profiles = columns
            .iter()
            .map(|&column| VerticalProfile {
                column,
                values: band_image.index_axis(Axis(1), column).to_owned(),
            })
            .collect();

        debug!(band, wavelength, profiles = columns.len(), "Preview panels composed");

        Ok(Self {
            rgb: cube.preview().clone(),
            band,
            wavelength,
            band_image,
            spectrum,
            profiles,
        })
    }

    /// Writes the clamped band image through `writer`.
    pub fn export_band<W: BandWriter>(
        &self,
        writer: &W,
        output: &mut dyn Write,
        compression: TiffCompression,
    ) -> Result<()> {
        writer.write_band(self.band_image.view(), output, compression)
    }
}
