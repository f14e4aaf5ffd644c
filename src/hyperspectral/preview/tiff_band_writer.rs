use std::io::Write;

use ndarray::ArrayView2;
use tiff::encoder::{colortype, compression::DeflateLevel, Compression, TiffEncoder};
use tracing::debug;

use crate::hyperspectral::common::error::{CubeError, Result};
use crate::hyperspectral::preview::types::TiffCompression;
use crate::hyperspectral::preview::writer::BandWriter;

/// Writes a band as single-channel 32-bit float TIFF.
pub struct TiffBandWriter;

impl BandWriter for TiffBandWriter {
    fn write_band(&self, band: ArrayView2<f32>, output: &mut dyn Write, compression: TiffCompression) -> Result<()> {
        let (height, width) = band.dim();
        debug!("Encoding TIFF band: {}x{}", width, height);

        let compression = match compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::Deflate => Compression::Deflate(DeflateLevel::Balanced),
        };

        let mut buffer = Vec::new();
        let pixels = band.as_standard_layout();
        let samples = pixels
            .as_slice()
            .ok_or_else(|| CubeError::EncodeError("band is not contiguous".to_string()))?;

        let mut encoder = TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| CubeError::EncodeError(e.to_string()))?
            .with_compression(compression);

        encoder
            .write_image::<colortype::Gray32Float>(width as u32, height as u32, samples)
            .map_err(|e| CubeError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;
    use std::io::Cursor;
    use tiff::decoder::{Decoder, DecodingResult};

    fn decode(bytes: Vec<u8>) -> (u32, u32, Vec<f32>) {
        let mut decoder = Decoder::new(Cursor::new(bytes)).unwrap();
        let (width, height) = decoder.dimensions().unwrap();
        match decoder.read_image().unwrap() {
            DecodingResult::F32(data) => (width, height, data),
            _ => panic!("expected f32 samples"),
        }
    }

    #[test]
    fn test_write_band_round_trips_values() {
        let band = Array2::from_shape_fn((3, 5), |(r, c)| r as f32 + c as f32 * 0.5);

        for compression in [TiffCompression::None, TiffCompression::Lzw, TiffCompression::Deflate] {
            let mut output = Vec::new();
            TiffBandWriter.write_band(band.view(), &mut output, compression).unwrap();

            let (width, height, data) = decode(output);
            assert_eq!((width, height), (5, 3));
            assert_eq!(data, band.iter().copied().collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_write_non_contiguous_view() {
        let band = Array2::from_shape_fn((4, 4), |(r, c)| (r * 4 + c) as f32);
        let transposed = band.t();

        let mut output = Vec::new();
        TiffBandWriter.write_band(transposed, &mut output, TiffCompression::None).unwrap();

        let (_, _, data) = decode(output);
        assert_eq!(data[1], 4.0);
    }
}
