//! Hyperspectral cube module
//!
//! This module loads a capture from disk, with separate modules for ENVI
//! raster reading, sidecar images and metadata, white-reference
//! correction and diagnostic previews.

pub mod common;
pub mod envi;
pub mod rgb;
pub mod metadata;
pub mod cube;
pub mod correction;
pub mod loader;
pub mod preview;

pub use common::{
    CubeError,
    Result,
};

pub use envi::{
    EnviReader,
    RasterData,
    RasterReader,
};

pub use rgb::{
    PngImageReader,
    RgbImage,
    RgbImageReader,
};

pub use metadata::{
    AcquisitionMetadata,
    MetadataFields,
};

pub use cube::{
    BandTable,
    HyperspectralCube,
};

pub use correction::{
    ReferenceRegion,
    DEFAULT_DISPLAY_CEILING,
};

pub use loader::{
    load_cube,
    CubeLoader,
    DatasetLayout,
    LoadConfig,
    LoadConfigBuilder,
    PipelineTimings,
};

pub use preview::{
    BandWriter,
    PreviewPanels,
    TiffBandWriter,
    TiffCompression,
};
