//! On-disk layout of a capture
//!
//! ```text
//! <root>/<dataset>/results/REFLECTANCE_<dataset>.dat   (+ .hdr)
//! <root>/<dataset>/results/RGBSCENE_<dataset>.png
//! <root>/<dataset>/results/RGBBACKGROUND_<dataset>.png
//! <root>/<dataset>/metadata/<dataset>.xml
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::hyperspectral::common::error::{CubeError, Result};

/// Extension of the reflectance raster looked up in the results folder.
pub const RASTER_EXTENSION: &str = "dat";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLayout {
    dataset_dir: PathBuf,
    name: String,
}

impl DatasetLayout {
    pub fn new(root: impl AsRef<Path>, dataset: &str) -> Self {
        Self {
            dataset_dir: root.as_ref().join(dataset),
            name: dataset.to_string(),
        }
    }

    pub fn dataset_dir(&self) -> &Path {
        &self.dataset_dir
    }

    pub fn results_dir(&self) -> PathBuf {
        self.dataset_dir.join("results")
    }

    pub fn scene_path(&self) -> PathBuf {
        self.results_dir().join(format!("RGBSCENE_{}.png", self.name))
    }

    pub fn preview_path(&self) -> PathBuf {
        self.results_dir().join(format!("RGBBACKGROUND_{}.png", self.name))
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.dataset_dir.join("metadata").join(format!("{}.xml", self.name))
    }
}

/// Finds the single `.dat` raster in `results_dir`.
///
/// The acquisition tool writes exactly one reflectance raster per capture;
/// zero or several candidates is reported as a lookup failure rather than
/// guessing. A missing directory counts as zero candidates.
pub fn locate_raster(results_dir: &Path) -> Result<PathBuf> {
    let lookup_error = |found| CubeError::RasterLookup {
        dir: results_dir.to_path_buf(),
        found,
    };

    let entries = match std::fs::read_dir(results_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(lookup_error(0)),
        Err(e) => return Err(e.into()),
    };

    let mut candidates = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_raster = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(RASTER_EXTENSION));
        if is_raster && path.is_file() {
            candidates.push(path);
        }
    }

    debug!("Raster candidates in {}: {:?}", results_dir.display(), candidates);

    match candidates.len() {
        1 => Ok(candidates.remove(0)),
        found => Err(lookup_error(found)),
    }
}
