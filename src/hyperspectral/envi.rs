//! ENVI raster reading module
//!
//! This module provides the raster collaborator used by the cube loader:
//! header parsing and band decoding for ENVI `.dat`/`.hdr` pairs.

mod reader;
mod envi_reader;
pub mod header;
pub mod types;

pub use reader::RasterReader;
pub use envi_reader::EnviReader;
pub use header::{EnviDataType, EnviHeader, Interleave};
pub use types::RasterData;
