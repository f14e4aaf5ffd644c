//! RGB sidecar image module
//!
//! The camera stores a scene snapshot and a background preview next to the
//! reflectance raster as 8-bit PNG files.

mod reader;
mod png_reader;
pub mod types;

pub use reader::RgbImageReader;
pub use png_reader::PngImageReader;
pub use types::RgbImage;
