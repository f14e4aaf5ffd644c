use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CubeError {
    #[error("Expected exactly one .dat raster in {}, found {}", .dir.display(), .found)]
    RasterLookup { dir: PathBuf, found: usize },

    #[error("Failed to open raster {}: {}", .0.display(), .1)]
    RasterOpen(PathBuf, String),

    #[error("Band {requested} out of range: cube has {available} bands")]
    BandOutOfRange { requested: usize, available: usize },

    #[error("Missing metadata field: {0}")]
    MissingMetadataField(String),

    #[error("Invalid value for metadata field {field}: {value:?}")]
    InvalidMetadataValue { field: String, value: String },

    #[error("Failed to parse metadata XML: {0}")]
    MetadataParse(String),

    #[error("Failed to read image {}: {}", .0.display(), .1)]
    ImageRead(PathBuf, String),

    #[error(
        "Invalid reference region x={x1}..{x2}, y={y1}..{y2} for band size {width}x{height}"
    )]
    InvalidRegion {
        x1: usize,
        x2: usize,
        y1: usize,
        y2: usize,
        width: usize,
        height: usize,
    },

    #[error("White reference is zero or not finite in band {band}")]
    DegenerateReference { band: usize },

    #[error("White reference has {actual} values but the cube has {expected} bands")]
    SpectrumLength { expected: usize, actual: usize },

    #[error("White reference spectrum has not been computed")]
    MissingWhiteReference,

    #[error("Profile column {column} out of range for band width {width}")]
    ProfileColumnOutOfRange { column: usize, width: usize },

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CubeError>;
