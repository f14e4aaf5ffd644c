//! Diagnostic preview module
//!
//! Prepares the data behind the four diagnostic views of a corrected
//! capture and exports single bands as floating-point TIFF files.

mod writer;
mod tiff_band_writer;
pub mod panels;
pub mod types;

pub use writer::BandWriter;
pub use tiff_band_writer::TiffBandWriter;
pub use panels::{PreviewPanels, SpectrumPoint, VerticalProfile};
pub use types::TiffCompression;
