//! Hyperspectral cube module
//!
//! The in-memory record produced by the loader: reflectance bands, band
//! wavelengths, sidecar images, acquisition metadata and the cached
//! white-reference correction.

pub mod band_table;
pub mod orientation;
pub mod types;

pub use band_table::BandTable;
pub use orientation::{rotate_cube_270, rotate_image_270, rotate_image_90};
pub use types::HyperspectralCube;
