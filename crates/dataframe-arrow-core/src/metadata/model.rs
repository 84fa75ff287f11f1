//! Typed payloads carried as JSON strings in Arrow metadata maps.
//!
//! Arrow metadata is string-to-string only, so richer values (`labels`,
//! `config`, `meta`) are serialized to JSON at the map boundary.
//!
//! `config` and `meta` belong to whoever produced the frame. They are held as
//! plain JSON objects so any key, value shape or explicit `null` comes back
//! exactly as it was read; the well-known keys are exposed through accessors
//! that return `None` when the key is missing or has another shape.

use std::{
    collections::BTreeMap,
    ops::{Deref, DerefMut},
};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Series dimensions attached to a field, e.g. `{"host": "a"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(pub BTreeMap<String, String>);

impl Labels {
    /// Create an empty label set.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Deref for Labels {
    type Target = BTreeMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Labels {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Labels {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Labels(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

macro_rules! json_object {
    ($name:ident) => {
        impl $name {
            /// Create an empty object.
            pub fn new() -> Self {
                Self::default()
            }

            /// Set `key` to `value`, replacing any previous value.
            pub fn with(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
                self.0.insert(key.into(), value.into());
                self
            }

            fn str_key(&self, key: &str) -> Option<&str> {
                self.0.get(key).and_then(JsonValue::as_str)
            }
        }

        impl Deref for $name {
            type Target = Map<String, JsonValue>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl From<Map<String, JsonValue>> for $name {
            fn from(map: Map<String, JsonValue>) -> Self {
                $name(map)
            }
        }

        impl<K: Into<String>, V: Into<JsonValue>> FromIterator<(K, V)> for $name {
            fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
                $name(
                    iter.into_iter()
                        .map(|(k, v)| (k.into(), v.into()))
                        .collect(),
                )
            }
        }
    };
}

/// Display and formatting options for a field.
///
/// Opaque to the conversion itself; it is only carried through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldConfig(pub Map<String, JsonValue>);

json_object!(FieldConfig);

impl FieldConfig {
    /// Name shown instead of the field name (`displayName`).
    pub fn display_name(&self) -> Option<&str> {
        self.str_key("displayName")
    }

    /// Unit identifier such as `"ms"` or `"percent"` (`unit`).
    pub fn unit(&self) -> Option<&str> {
        self.str_key("unit")
    }

    /// Number of decimals to render (`decimals`).
    pub fn decimals(&self) -> Option<i64> {
        self.0.get("decimals").and_then(JsonValue::as_i64)
    }

    /// Lower bound of the expected value range (`min`).
    pub fn min(&self) -> Option<f64> {
        self.0.get("min").and_then(JsonValue::as_f64)
    }

    /// Upper bound of the expected value range (`max`).
    pub fn max(&self) -> Option<f64> {
        self.0.get("max").and_then(JsonValue::as_f64)
    }

    /// Text shown for null values (`noValue`).
    pub fn no_value(&self) -> Option<&str> {
        self.str_key("noValue")
    }

    /// Consumer-specific options (`custom`).
    pub fn custom(&self) -> Option<&JsonValue> {
        self.0.get("custom")
    }
}

/// Arbitrary frame-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameMeta(pub Map<String, JsonValue>);

json_object!(FrameMeta);

impl FrameMeta {
    /// Query text as executed by the data source (`executedQueryString`).
    pub fn executed_query_string(&self) -> Option<&str> {
        self.str_key("executedQueryString")
    }

    /// Visualisation hint from the data source (`preferredVisualisationType`).
    pub fn preferred_visualisation_type(&self) -> Option<&str> {
        self.str_key("preferredVisualisationType")
    }

    /// Data-source specific payload (`custom`).
    pub fn custom(&self) -> Option<&JsonValue> {
        self.0.get("custom")
    }
}
