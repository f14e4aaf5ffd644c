//! ENVI header parsing
//!
//! An ENVI header is a text file starting with the magic line `ENVI`
//! followed by `key = value` pairs. Values wrapped in `{...}` may span
//! several lines. Keys are matched case-insensitively.

use std::collections::BTreeMap;
use std::str::FromStr;

/// Sample encoding of the binary raster, from the `data type` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnviDataType {
    U8,
    I16,
    I32,
    F32,
    F64,
    U16,
    U32,
}

impl EnviDataType {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::U8),
            2 => Some(Self::I16),
            3 => Some(Self::I32),
            4 => Some(Self::F32),
            5 => Some(Self::F64),
            12 => Some(Self::U16),
            13 => Some(Self::U32),
            _ => None,
        }
    }

    pub fn bytes_per_sample(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::F64 => 8,
        }
    }
}

/// Pixel interleave of the binary raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interleave {
    /// Band sequential: band, line, sample
    #[default]
    Bsq,
    /// Band interleaved by line: line, band, sample
    Bil,
    /// Band interleaved by pixel: line, sample, band
    Bip,
}

impl FromStr for Interleave {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bsq" => Ok(Self::Bsq),
            "bil" => Ok(Self::Bil),
            "bip" => Ok(Self::Bip),
            other => Err(format!("unknown interleave '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EnviHeader {
    /// Columns per band
    pub samples: usize,
    /// Rows per band
    pub lines: usize,
    pub bands: usize,
    pub header_offset: usize,
    pub data_type: EnviDataType,
    pub interleave: Interleave,
    /// `true` for big-endian samples (`byte order = 1`)
    pub big_endian: bool,
    /// Wavelength strings as written in the header, one per band when present
    pub wavelengths: Vec<String>,
    pub wavelength_units: Option<String>,
    /// Every key/value pair of the header, keys lowercased
    pub fields: BTreeMap<String, String>,
}

impl EnviHeader {
    pub fn parse(text: &str) -> Result<Self, String> {
        let mut lines = text.lines();
        match lines.next() {
            Some(first) if first.trim() == "ENVI" => {}
            _ => return Err("missing ENVI magic line".to_string()),
        }

        let fields = parse_fields(lines)?;

        let samples = required_usize(&fields, "samples")?;
        let lines = required_usize(&fields, "lines")?;
        let bands = required_usize(&fields, "bands")?;

        let code = required_usize(&fields, "data type")?;
        let data_type = EnviDataType::from_code(code as u32)
            .ok_or_else(|| format!("unsupported data type {code}"))?;

        let header_offset = optional_usize(&fields, "header offset")?.unwrap_or(0);
        let interleave = match fields.get("interleave") {
            Some(v) => v.parse()?,
            None => Interleave::default(),
        };
        let big_endian = optional_usize(&fields, "byte order")?.unwrap_or(0) == 1;

        let wavelengths = fields
            .get("wavelength")
            .map(|v| split_list(v))
            .unwrap_or_default();
        if !wavelengths.is_empty() && wavelengths.len() != bands {
            return Err(format!(
                "header lists {} wavelengths for {} bands",
                wavelengths.len(),
                bands
            ));
        }
        let wavelength_units = fields.get("wavelength units").cloned();

        Ok(Self {
            samples,
            lines,
            bands,
            header_offset,
            data_type,
            interleave,
            big_endian,
            wavelengths,
            wavelength_units,
            fields,
        })
    }

    /// Number of bytes the binary raster must hold after the header offset.
    ///
    /// `None` when the dimensions overflow `usize`.
    pub fn data_len(&self) -> Option<usize> {
        self.samples
            .checked_mul(self.lines)?
            .checked_mul(self.bands)?
            .checked_mul(self.data_type.bytes_per_sample())
    }
}

fn parse_fields<'a>(lines: impl Iterator<Item = &'a str>) -> Result<BTreeMap<String, String>, String> {
    let mut fields = BTreeMap::new();
    let mut pending: Option<(String, String)> = None;

    for line in lines {
        if let Some((key, mut value)) = pending.take() {
            value.push(' ');
            value.push_str(line.trim());
            if value.contains('}') {
                fields.insert(key, strip_braces(&value));
            } else {
                pending = Some((key, value));
            }
            continue;
        }

        let line = line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(format!("malformed header line '{line}'"));
        };
        let key = key.trim().to_ascii_lowercase();
        let value = value.trim().to_string();

        if value.starts_with('{') && !value.contains('}') {
            pending = Some((key, value));
        } else {
            fields.insert(key, strip_braces(&value));
        }
    }

    if let Some((key, _)) = pending {
        return Err(format!("unterminated value for '{key}'"));
    }
    Ok(fields)
}

fn strip_braces(value: &str) -> String {
    value
        .trim()
        .trim_start_matches('{')
        .trim_end_matches('}')
        .trim()
        .to_string()
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn required_usize(fields: &BTreeMap<String, String>, key: &str) -> Result<usize, String> {
    optional_usize(fields, key)?.ok_or_else(|| format!("missing '{key}'"))
}

fn optional_usize(fields: &BTreeMap<String, String>, key: &str) -> Result<Option<usize>, String> {
    fields
        .get(key)
        .map(|v| {
            v.trim()
                .parse::<usize>()
                .map_err(|_| format!("'{key}' is not an unsigned integer: '{v}'"))
        })
        .transpose()
}
