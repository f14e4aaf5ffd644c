//! Band number to wavelength mapping

use std::collections::BTreeMap;

use tracing::warn;

use crate::hyperspectral::envi::types::BAND_KEY_PREFIX;

/// Wavelength of each raster band, keyed by 1-based band number.
///
/// Entry `n` is assumed to describe band `n` of the raster; nothing checks
/// that the acquisition tool wrote them in the same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BandTable {
    wavelengths: BTreeMap<usize, f64>,
}

impl BandTable {
    /// Builds the table from `Band_<n>` metadata entries. Other keys are
    /// ignored; values are parsed from their leading numeric token so unit
    /// suffixes such as `"397.32 nm"` are accepted.
    pub fn from_metadata(metadata: &BTreeMap<String, String>) -> Self {
        let mut wavelengths = BTreeMap::new();
        for (key, value) in metadata {
            let Some(number) = key
                .strip_prefix(BAND_KEY_PREFIX)
                .and_then(|n| n.parse::<usize>().ok())
            else {
                continue;
            };
            match parse_wavelength(value) {
                Some(wavelength) => {
                    wavelengths.insert(number, wavelength);
                }
                None => warn!("Ignoring unparsable wavelength {key} = {value:?}"),
            }
        }
        Self { wavelengths }
    }

    pub fn from_wavelengths(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            wavelengths: values.into_iter().enumerate().map(|(i, w)| (i + 1, w)).collect(),
        }
    }

    pub fn wavelength(&self, band: usize) -> Option<f64> {
        self.wavelengths.get(&band).copied()
    }

    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    /// `(band number, wavelength)` pairs in band order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.wavelengths.iter().map(|(&n, &w)| (n, w))
    }
}

fn parse_wavelength(value: &str) -> Option<f64> {
    value.split_whitespace().next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_from_metadata_orders_by_band_number() {
        let table = BandTable::from_metadata(&metadata(&[
            ("Band_10", "430.0"),
            ("Band_2", "400.5"),
            ("Band_1", "397.32 nm"),
            ("wavelength_units", "nm"),
        ]));

        assert_eq!(table.len(), 3);
        assert_eq!(table.wavelength(1), Some(397.32));
        assert_eq!(table.wavelength(10), Some(430.0));
        let order: Vec<usize> = table.iter().map(|(n, _)| n).collect();
        assert_eq!(order, vec![1, 2, 10]);
    }

    #[test]
    fn test_unparsable_entries_skipped() {
        let table = BandTable::from_metadata(&metadata(&[("Band_1", "n/a"), ("Band_x", "400")]));
        assert!(table.is_empty());
    }

    #[test]
    fn test_from_wavelengths_is_one_based() {
        let table = BandTable::from_wavelengths([500.0, 510.0]);
        assert_eq!(table.wavelength(0), None);
        assert_eq!(table.wavelength(2), Some(510.0));
    }
}
