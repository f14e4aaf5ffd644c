//! Dataset loading module
//!
//! Locates the files of one capture under a dataset root, reads them
//! through the raster and image collaborators and assembles a
//! [`HyperspectralCube`](crate::hyperspectral::cube::HyperspectralCube).

mod config;
mod layout;
mod pipeline;
mod timing;


pub use config::{LoadConfig, LoadConfigBuilder};
pub use layout::{locate_raster, DatasetLayout, RASTER_EXTENSION};
pub use pipeline::{load_cube, CubeLoader};
pub use timing::{PipelineTimings, StepTiming, Timer};
