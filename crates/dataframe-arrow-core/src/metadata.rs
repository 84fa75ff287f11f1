//! Side-channel metadata codec.
//!
//! Arrow tables and columns carry `HashMap<String, String>` metadata. This
//! module reads and writes the keys used to carry DataFrame metadata:
//!
//! | Scope  | Key      | Payload                         |
//! |--------|----------|---------------------------------|
//! | column | `labels` | JSON object of string -> string |
//! | column | `config` | JSON [`FieldConfig`]            |
//! | table  | `name`   | raw string                      |
//! | table  | `refId`  | raw string                      |
//! | table  | `meta`   | JSON [`FrameMeta`]              |
//!
//! Absent keys are never written as empty strings. Malformed JSON is a hard
//! error for the caller.

pub mod model;

use std::collections::HashMap;

use serde::{Serialize, de::DeserializeOwned};
use snafu::prelude::*;

pub use model::{FieldConfig, FrameMeta, Labels};

/// Column metadata key for field labels.
pub const LABELS_KEY: &str = "labels";
/// Column metadata key for field config.
pub const CONFIG_KEY: &str = "config";
/// Table metadata key for the frame name.
pub const NAME_KEY: &str = "name";
/// Table metadata key for the query ref id.
pub const REF_ID_KEY: &str = "refId";
/// Table metadata key for frame meta.
pub const META_KEY: &str = "meta";

/// String-keyed, string-valued metadata map as used by Arrow.
pub type MetadataMap = HashMap<String, String>;

/// Errors raised while reading or writing JSON metadata values.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum MetadataError {
    /// A metadata value is not valid JSON for its expected shape.
    #[snafu(display("Invalid JSON in metadata key {key}: {source}"))]
    InvalidJson {
        /// Metadata key that failed to parse.
        key: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A value could not be serialized to JSON.
    #[snafu(display("Failed to serialize metadata key {key}: {source}"))]
    Serialize {
        /// Metadata key being written.
        key: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Read the raw string stored under `key`.
///
/// `None` means the key is absent; an empty string is returned as `Some("")`.
pub fn read_raw<'a>(metadata: &'a MetadataMap, key: &str) -> Option<&'a str> {
    metadata.get(key).map(String::as_str)
}

/// Read and parse a JSON payload stored under `key`.
///
/// Returns `Ok(None)` when the key is absent or holds an empty string.
pub fn read_json<T: DeserializeOwned>(
    metadata: &MetadataMap,
    key: &str,
) -> Result<Option<T>, MetadataError> {
    match read_raw(metadata, key) {
        None | Some("") => Ok(None),
        Some(json) => serde_json::from_str(json)
            .map(Some)
            .context(InvalidJsonSnafu { key }),
    }
}

/// Read the field config, defaulting to an empty config when absent.
pub fn read_config(metadata: &MetadataMap) -> Result<FieldConfig, MetadataError> {
    Ok(read_json(metadata, CONFIG_KEY)?.unwrap_or_default())
}

/// Store `value` under `key` if present; leave the map untouched otherwise.
pub fn write_raw(metadata: &mut MetadataMap, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        metadata.insert(key.to_string(), value.to_string());
    }
}

/// Serialize `value` to JSON under `key` if present; leave the map untouched otherwise.
pub fn write_json<T: Serialize>(
    metadata: &mut MetadataMap,
    key: &str,
    value: Option<&T>,
) -> Result<(), MetadataError> {
    if let Some(value) = value {
        let json = serde_json::to_string(value).context(SerializeSnafu { key })?;
        metadata.insert(key.to_string(), json);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_read_distinguishes_absent_from_empty() {
        let mut md = MetadataMap::new();
        assert_eq!(read_raw(&md, NAME_KEY), None);
        md.insert(NAME_KEY.to_string(), String::new());
        assert_eq!(read_raw(&md, NAME_KEY), Some(""));
    }

    #[test]
    fn absent_labels_are_none_but_config_defaults() {
        let md = MetadataMap::new();
        let labels: Option<Labels> = read_json(&md, LABELS_KEY).unwrap();
        assert!(labels.is_none());
        assert_eq!(read_config(&md).unwrap(), FieldConfig::default());
    }

    #[test]
    fn write_none_omits_the_key() {
        let mut md = MetadataMap::new();
        write_raw(&mut md, REF_ID_KEY, None);
        write_json::<FrameMeta>(&mut md, META_KEY, None).unwrap();
        assert!(md.is_empty());
    }

    #[test]
    fn write_then_read_labels() {
        let labels: Labels = [("host", "a")].into_iter().collect();
        let mut md = MetadataMap::new();
        write_json(&mut md, LABELS_KEY, Some(&labels)).unwrap();
        assert_eq!(md.get(LABELS_KEY).map(String::as_str), Some(r#"{"host":"a"}"#));

        let back: Option<Labels> = read_json(&md, LABELS_KEY).unwrap();
        assert_eq!(back, Some(labels));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut md = MetadataMap::new();
        md.insert(CONFIG_KEY.to_string(), "{not json".to_string());
        let err = read_config(&md).unwrap_err();
        assert!(matches!(err, MetadataError::InvalidJson { ref key, .. } if key == CONFIG_KEY));
    }
}
