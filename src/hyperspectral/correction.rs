//! White-reference radiometric correction
//!
//! A region of the scene known to contain a calibrated white target is
//! averaged band by band; every band of the cube is then divided by its
//! reference value. This assumes the illumination of each band is
//! spatially uniform across the scene.

use ndarray::{s, Array1, Array2, Array3, ArrayView1, ArrayView2, ArrayView3, Axis};
use tracing::debug;

use crate::hyperspectral::common::error::{CubeError, Result};

/// Ceiling applied by [`clamp_for_display`] when none is configured.
pub const DEFAULT_DISPLAY_CEILING: f32 = 1.5;

/// Rectangular pixel region in the stored cube orientation.
///
/// Columns `x1..x2` and rows `y1..y2`, upper bounds excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceRegion {
    pub x1: usize,
    pub x2: usize,
    pub y1: usize,
    pub y2: usize,
}

impl ReferenceRegion {
    pub fn new(x1: usize, x2: usize, y1: usize, y2: usize) -> Self {
        Self { x1, x2, y1, y2 }
    }

    /// Checks the region is non-empty and lies inside a `height` x `width` band.
    pub fn validate(&self, height: usize, width: usize) -> Result<()> {
        if self.x1 >= self.x2 || self.y1 >= self.y2 || self.x2 > width || self.y2 > height {
            return Err(CubeError::InvalidRegion {
                x1: self.x1,
                x2: self.x2,
                y1: self.y1,
                y2: self.y2,
                width,
                height,
            });
        }
        Ok(())
    }

    pub fn pixel_count(&self) -> usize {
        (self.x2 - self.x1) * (self.y2 - self.y1)
    }

    /// Center pixel as `(row, column)`.
    pub fn center(&self) -> (usize, usize) {
        ((self.y1 + self.y2) / 2, (self.x1 + self.x2) / 2)
    }
}

/// Mean of every band over `region`, one value per band.
///
/// Sums are accumulated in `f64`, so the result only depends on the cube
/// and the region.
pub fn white_reference_spectrum(cube: ArrayView3<f32>, region: ReferenceRegion) -> Result<Array1<f32>> {
    let (_, height, width) = cube.dim();
    region.validate(height, width)?;

    let patch = cube.slice(s![.., region.y1..region.y2, region.x1..region.x2]);
    let count = region.pixel_count() as f64;

    let spectrum: Array1<f32> = patch
        .axis_iter(Axis(0))
        .map(|band| (band.iter().map(|&v| v as f64).sum::<f64>() / count) as f32)
        .collect();

    debug!(
        "White reference over {} pixels: min={:?} max={:?}",
        region.pixel_count(),
        spectrum.iter().copied().reduce(f32::min),
        spectrum.iter().copied().reduce(f32::max)
    );

    Ok(spectrum)
}

/// Divides each band of `cube` by the matching `spectrum` value.
pub fn apply_white_reference(cube: ArrayView3<f32>, spectrum: ArrayView1<f32>) -> Result<Array3<f32>> {
    let bands = cube.dim().0;
    if spectrum.len() != bands {
        return Err(CubeError::SpectrumLength {
            expected: bands,
            actual: spectrum.len(),
        });
    }
    if let Some(band) = spectrum.iter().position(|&v| v == 0.0 || !v.is_finite()) {
        return Err(CubeError::DegenerateReference { band });
    }

    let mut corrected = cube.to_owned();
    for (mut band, &reference) in corrected.axis_iter_mut(Axis(0)).zip(spectrum.iter()) {
        band /= reference;
    }
    Ok(corrected)
}

/// Copy of `band` with values above `ceiling` replaced by `ceiling`.
///
/// NaN values pass through unchanged.
pub fn clamp_for_display(band: ArrayView2<f32>, ceiling: f32) -> Array2<f32> {
    band.mapv(|v| if v > ceiling { ceiling } else { v })
}
