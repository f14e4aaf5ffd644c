//! ENVI raster reader implementation.
//!
//! Reads a `.dat` binary raster together with its `.hdr` sidecar and
//! materializes every band as `f32`, whatever the on-disk sample type and
//! interleave.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ndarray::Array3;
use tracing::{debug, warn};

use crate::hyperspectral::common::error::{CubeError, Result};
use crate::hyperspectral::envi::header::{EnviDataType, EnviHeader, Interleave};
use crate::hyperspectral::envi::reader::RasterReader;
use crate::hyperspectral::envi::types::RasterData;

/// Raster reader for ENVI standard files.
///
/// The header is looked up as `<stem>.hdr` first, then `<file>.hdr`
/// (e.g. `REFLECTANCE_x.dat.hdr`).
pub struct EnviReader;

impl EnviReader {
    fn header_path(path: &Path) -> Option<PathBuf> {
        let replaced = path.with_extension("hdr");
        if replaced.is_file() {
            return Some(replaced);
        }
        let mut appended = path.as_os_str().to_owned();
        appended.push(".hdr");
        let appended = PathBuf::from(appended);
        appended.is_file().then_some(appended)
    }

    /// Decodes the raster bytes described by `header` into (band, row, column).
    pub fn decode(header: &EnviHeader, data: &[u8]) -> std::result::Result<Array3<f32>, String> {
        let start = header.header_offset;
        let end = header
            .data_len()
            .and_then(|len| start.checked_add(len))
            .ok_or_else(|| {
                format!(
                    "implausible raster size: {} samples x {} lines x {} bands at offset {}",
                    header.samples, header.lines, header.bands, start
                )
            })?;
        if data.len() < end {
            return Err(format!(
                "raster holds {} bytes, header describes {}",
                data.len(),
                end
            ));
        }
        if data.len() > end {
            warn!("Ignoring {} trailing bytes in raster", data.len() - end);
        }

        let samples = decode_samples(&data[start..end], header.data_type, header.big_endian);
        let (bands, lines, columns) = (header.bands, header.lines, header.samples);

        let shaped = match header.interleave {
            Interleave::Bsq => Array3::from_shape_vec((bands, lines, columns), samples),
            Interleave::Bil => Array3::from_shape_vec((lines, bands, columns), samples)
                .map(|a| a.permuted_axes([1, 0, 2])),
            Interleave::Bip => Array3::from_shape_vec((lines, columns, bands), samples)
                .map(|a| a.permuted_axes([2, 0, 1])),
        }
        .map_err(|e| e.to_string())?;

        Ok(shaped.as_standard_layout().into_owned())
    }
}

impl RasterReader for EnviReader {
    /// Opens an ENVI raster and decodes all of its bands.
    ///
    /// Wavelengths listed in the header are exposed as `Band_<n>` metadata
    /// entries (1-based), the same keys a GDAL dataset would report.
    fn open(&self, path: &Path) -> Result<RasterData> {
        let open_error = |reason: String| CubeError::RasterOpen(path.to_path_buf(), reason);

        let header_path = Self::header_path(path)
            .ok_or_else(|| open_error("no .hdr sidecar found".to_string()))?;
        debug!("Reading ENVI header {}", header_path.display());

        let header_text = std::fs::read_to_string(&header_path)
            .map_err(|e| open_error(format!("{}: {}", header_path.display(), e)))?;
        let header = EnviHeader::parse(&header_text).map_err(open_error)?;

        debug!(
            "ENVI raster: {} bands, {}x{} ({:?}, {:?})",
            header.bands, header.samples, header.lines, header.data_type, header.interleave
        );

        let data = std::fs::read(path).map_err(|e| open_error(e.to_string()))?;
        let bands = Self::decode(&header, &data).map_err(open_error)?;

        let mut metadata: BTreeMap<String, String> = header
            .wavelengths
            .iter()
            .enumerate()
            .map(|(i, w)| (RasterData::band_key(i + 1), w.clone()))
            .collect();
        if let Some(units) = &header.wavelength_units {
            metadata.insert("wavelength_units".to_string(), units.clone());
        }

        Ok(RasterData { bands, metadata })
    }
}

fn decode_samples(bytes: &[u8], data_type: EnviDataType, big_endian: bool) -> Vec<f32> {
    macro_rules! convert {
        ($ty:ty, $n:expr) => {
            bytes
                .chunks_exact($n)
                .map(|chunk| {
                    let mut raw = [0u8; $n];
                    raw.copy_from_slice(chunk);
                    if big_endian {
                        <$ty>::from_be_bytes(raw) as f32
                    } else {
                        <$ty>::from_le_bytes(raw) as f32
                    }
                })
                .collect()
        };
    }

    match data_type {
        EnviDataType::U8 => bytes.iter().map(|&v| v as f32).collect(),
        EnviDataType::I16 => convert!(i16, 2),
        EnviDataType::U16 => convert!(u16, 2),
        EnviDataType::I32 => convert!(i32, 4),
        EnviDataType::U32 => convert!(u32, 4),
        EnviDataType::F32 => convert!(f32, 4),
        EnviDataType::F64 => convert!(f64, 8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn header(interleave: &str, data_type: u32, byte_order: u32) -> EnviHeader {
        EnviHeader::parse(&format!(
            "ENVI\nsamples = 3\nlines = 2\nbands = 2\ndata type = {data_type}\ninterleave = {interleave}\nbyte order = {byte_order}\n"
        ))
        .unwrap()
    }

    // value encodes its position: band * 100 + row * 10 + column
    fn expected(b: usize, r: usize, c: usize) -> f32 {
        (b * 100 + r * 10 + c) as f32
    }

    fn encode_f32(order: &[(usize, usize, usize)]) -> Vec<u8> {
        order
            .iter()
            .flat_map(|&(b, r, c)| expected(b, r, c).to_le_bytes())
            .collect()
    }

    fn assert_positions(cube: &Array3<f32>) {
        assert_eq!(cube.dim(), (2, 2, 3));
        for b in 0..2 {
            for r in 0..2 {
                for c in 0..3 {
                    assert_eq!(cube[[b, r, c]], expected(b, r, c));
                }
            }
        }
    }

    #[test]
    fn test_decode_bsq() {
        let mut order = Vec::new();
        for b in 0..2 {
            for r in 0..2 {
                for c in 0..3 {
                    order.push((b, r, c));
                }
            }
        }
        let cube = EnviReader::decode(&header("bsq", 4, 0), &encode_f32(&order)).unwrap();
        assert_positions(&cube);
    }

    #[test]
    fn test_decode_bil() {
        let mut order = Vec::new();
        for r in 0..2 {
            for b in 0..2 {
                for c in 0..3 {
                    order.push((b, r, c));
                }
            }
        }
        let cube = EnviReader::decode(&header("bil", 4, 0), &encode_f32(&order)).unwrap();
        assert_positions(&cube);
    }

    #[test]
    fn test_decode_bip() {
        let mut order = Vec::new();
        for r in 0..2 {
            for c in 0..3 {
                for b in 0..2 {
                    order.push((b, r, c));
                }
            }
        }
        let cube = EnviReader::decode(&header("bip", 4, 0), &encode_f32(&order)).unwrap();
        assert_positions(&cube);
    }

    #[test]
    fn test_decode_big_endian_u16() {
        let bytes: Vec<u8> = (0u16..12).flat_map(|v| (v * 1000).to_be_bytes()).collect();
        let cube = EnviReader::decode(&header("bsq", 12, 1), &bytes).unwrap();

        assert_eq!(cube[[0, 0, 0]], 0.0);
        assert_eq!(cube[[0, 0, 1]], 1000.0);
        assert_eq!(cube[[1, 1, 2]], 11000.0);
    }

    #[test]
    fn test_decode_truncated_data() {
        let result = EnviReader::decode(&header("bsq", 4, 0), &[0u8; 10]);
        assert!(result.unwrap_err().contains("header describes"));
    }

    #[test]
    fn test_decode_oversized_dimensions() {
        let header = EnviHeader::parse(
            "ENVI\nsamples = 18446744073709551615\nlines = 2\nbands = 1\ndata type = 4\n",
        )
        .unwrap();

        let result = EnviReader::decode(&header, &[0u8; 16]);
        assert!(result.unwrap_err().contains("implausible raster size"));
    }

    #[test]
    fn test_decode_offset_overflow() {
        let header = EnviHeader::parse(
            "ENVI\nsamples = 1\nlines = 1\nbands = 1\ndata type = 1\nheader offset = 18446744073709551615\n",
        )
        .unwrap();

        let result = EnviReader::decode(&header, &[0u8; 16]);
        assert!(result.unwrap_err().contains("implausible raster size"));
    }

    #[test]
    fn test_open_with_wavelengths() {
        let dir = tempdir().unwrap();
        let dat = dir.path().join("REFLECTANCE_x.dat");
        std::fs::write(
            dir.path().join("REFLECTANCE_x.hdr"),
            "ENVI\nsamples = 1\nlines = 1\nbands = 2\ndata type = 4\nwavelength units = nm\nwavelength = {450.5, 460.25}\n",
        )
        .unwrap();
        let bytes: Vec<u8> = [0.25f32, 0.75].iter().flat_map(|v| v.to_le_bytes()).collect();
        std::fs::write(&dat, bytes).unwrap();

        let raster = EnviReader.open(&dat).unwrap();

        assert_eq!(raster.raster_count(), 2);
        assert_eq!(raster.bands[[1, 0, 0]], 0.75);
        assert_eq!(raster.metadata.get("Band_1").map(String::as_str), Some("450.5"));
        assert_eq!(raster.metadata.get("Band_2").map(String::as_str), Some("460.25"));
        assert_eq!(raster.metadata.get("wavelength_units").map(String::as_str), Some("nm"));
    }

    #[test]
    fn test_open_appended_header_name() {
        let dir = tempdir().unwrap();
        let dat = dir.path().join("cube.dat");
        std::fs::write(
            dir.path().join("cube.dat.hdr"),
            "ENVI\nsamples = 1\nlines = 1\nbands = 1\ndata type = 1\n",
        )
        .unwrap();
        std::fs::write(&dat, [7u8]).unwrap();

        let raster = EnviReader.open(&dat).unwrap();
        assert_eq!(raster.bands[[0, 0, 0]], 7.0);
    }

    #[test]
    fn test_open_without_header() {
        let dir = tempdir().unwrap();
        let dat = dir.path().join("cube.dat");
        std::fs::write(&dat, [0u8; 4]).unwrap();

        let result = EnviReader.open(&dat);
        assert!(matches!(result, Err(CubeError::RasterOpen(_, _))));
    }

    #[test]
    fn test_open_corrupt_header_dimensions() {
        let dir = tempdir().unwrap();
        let dat = dir.path().join("cube.dat");
        std::fs::write(
            dir.path().join("cube.hdr"),
            "ENVI\nsamples = 18446744073709551615\nlines = 2\nbands = 1\ndata type = 4\n",
        )
        .unwrap();
        std::fs::write(&dat, [0u8; 16]).unwrap();

        let result = EnviReader.open(&dat);
        assert!(matches!(result, Err(CubeError::RasterOpen(_, reason)) if reason.contains("implausible")));
    }
}
