//! Acquisition metadata extraction
//!
//! The camera writes an XML sidecar describing the capture. Fields are
//! located by name anywhere in the document: an element matches when its
//! tag name, or its `field`/`name` attribute, equals the requested name
//! (ASCII case-insensitive). The first match in document order wins.

use std::path::Path;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::hyperspectral::common::error::{CubeError, Result};

/// Format of the capture timestamp once the time-zone suffix is removed,
/// e.g. `05 Mar 2019 10:15:32`.
pub const TIMESTAMP_FORMAT: &str = "%d %b %Y %H:%M:%S";

/// Length of the time-zone suffix appended to the timestamp (` +0000`).
const TIMESTAMP_SUFFIX_LEN: usize = 6;

/// Names of the XML fields holding each metadata value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataFields {
    pub timestamp: String,
    pub latitude: String,
    pub longitude: String,
    pub integration_time: String,
}

impl Default for MetadataFields {
    fn default() -> Self {
        Self {
            timestamp: "datetime".to_string(),
            latitude: "latitude".to_string(),
            longitude: "longitude".to_string(),
            integration_time: "integration_time".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AcquisitionMetadata {
    pub acquired_at: NaiveDateTime,
    pub latitude: f64,
    pub longitude: f64,
    /// Integration time as recorded by the camera (milliseconds)
    pub integration_time: f64,
}

impl AcquisitionMetadata {
    pub fn parse(xml: &str, fields: &MetadataFields) -> Result<Self> {
        let doc = roxmltree::Document::parse(xml)
            .map_err(|e| CubeError::MetadataParse(e.to_string()))?;

        let timestamp = field_text(&doc, &fields.timestamp)?;
        let acquired_at = parse_timestamp(&timestamp).ok_or_else(|| invalid(&fields.timestamp, &timestamp))?;

        Ok(Self {
            acquired_at,
            latitude: numeric_field(&doc, &fields.latitude)?,
            longitude: numeric_field(&doc, &fields.longitude)?,
            integration_time: numeric_field(&doc, &fields.integration_time)?,
        })
    }

    pub fn read(path: &Path, fields: &MetadataFields) -> Result<Self> {
        debug!("Reading acquisition metadata {}", path.display());
        let xml = std::fs::read_to_string(path)
            .map_err(|e| CubeError::MetadataParse(format!("{}: {}", path.display(), e)))?;
        Self::parse(&xml, fields)
    }
}

/// Parses `"05 Mar 2019 10:15:32 +0000"`-style timestamps.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    let cut = raw.char_indices().rev().nth(TIMESTAMP_SUFFIX_LEN - 1)?.0;
    NaiveDateTime::parse_from_str(raw[..cut].trim_end(), TIMESTAMP_FORMAT).ok()
}

fn field_text(doc: &roxmltree::Document, name: &str) -> Result<String> {
    let is_named = |value: Option<&str>| value.is_some_and(|v| v.trim().eq_ignore_ascii_case(name));

    doc.descendants()
        .filter(|node| node.is_element())
        .find(|node| {
            is_named(Some(node.tag_name().name()))
                || is_named(node.attribute("field"))
                || is_named(node.attribute("name"))
        })
        .map(|node| node.text().unwrap_or("").trim().to_string())
        .ok_or_else(|| CubeError::MissingMetadataField(name.to_string()))
}

fn numeric_field(doc: &roxmltree::Document, name: &str) -> Result<f64> {
    let text = field_text(doc, name)?;
    text.parse::<f64>().map_err(|_| invalid(name, &text))
}

fn invalid(field: &str, value: &str) -> CubeError {
    CubeError::InvalidMetadataValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}
