//! Loader configuration types

use std::path::PathBuf;

use crate::hyperspectral::correction::ReferenceRegion;
use crate::hyperspectral::metadata::MetadataFields;

/// Everything needed to load one capture.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Folder holding one sub-folder per dataset
    pub root: PathBuf,
    /// Dataset identifier, also the base name of its sidecar files
    pub dataset: String,
    /// White-reference region to correct with right after loading
    pub reference_region: Option<ReferenceRegion>,
    /// Rotate bands by 270 degrees into scene orientation
    pub rotate: bool,
    pub metadata_fields: MetadataFields,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            dataset: String::new(),
            reference_region: None,
            rotate: true,
            metadata_fields: MetadataFields::default(),
        }
    }
}

impl LoadConfig {
    pub fn builder() -> LoadConfigBuilder {
        LoadConfigBuilder::default()
    }
}

/// Builder for LoadConfig
#[derive(Default)]
pub struct LoadConfigBuilder {
    root: Option<PathBuf>,
    dataset: Option<String>,
    reference_region: Option<Option<ReferenceRegion>>,
    rotate: Option<bool>,
    metadata_fields: Option<MetadataFields>,
}

impl LoadConfigBuilder {
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = Some(dataset.into());
        self
    }

    pub fn reference_region(mut self, region: Option<ReferenceRegion>) -> Self {
        self.reference_region = Some(region);
        self
    }

    pub fn rotate(mut self, rotate: bool) -> Self {
        self.rotate = Some(rotate);
        self
    }

    pub fn metadata_fields(mut self, fields: MetadataFields) -> Self {
        self.metadata_fields = Some(fields);
        self
    }

    pub fn build(self) -> LoadConfig {
        let default = LoadConfig::default();
        LoadConfig {
            root: self.root.unwrap_or(default.root),
            dataset: self.dataset.unwrap_or(default.dataset),
            reference_region: self.reference_region.unwrap_or(default.reference_region),
            rotate: self.rotate.unwrap_or(default.rotate),
            metadata_fields: self.metadata_fields.unwrap_or(default.metadata_fields),
        }
    }
}
