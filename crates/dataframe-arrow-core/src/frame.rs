//! Language-level tabular data model.
//!
//! A [`DataFrame`] is an ordered list of named, typed [`Field`]s plus frame
//! level metadata (`name`, `ref_id`, `meta`). Field values are either owned
//! in memory or a zero-copy view over an Arrow column (see [`FieldValues`]).

pub mod field_type;
pub mod value;
pub mod values;

pub use field_type::{FieldType, ParseFieldTypeError};
pub use value::Value;
pub use values::{FieldValues, ValuesError};

use crate::metadata::{FieldConfig, FrameMeta, Labels};

/// One named, typed column of a [`DataFrame`].
#[derive(Debug, Clone)]
pub struct Field {
    /// Column name. Not required to be unique within a frame.
    pub name: String,
    /// Semantic type of the values.
    pub field_type: FieldType,
    /// Display/formatting options. Always present, possibly empty.
    pub config: FieldConfig,
    /// Series dimensions, if any.
    pub labels: Option<Labels>,
    /// Row values.
    pub values: FieldValues,
}

impl Field {
    /// Create a field with an empty config and no labels.
    pub fn new(
        name: impl Into<String>,
        field_type: FieldType,
        values: impl Into<FieldValues>,
    ) -> Self {
        Self {
            name: name.into(),
            field_type,
            config: FieldConfig::default(),
            labels: None,
            values: values.into(),
        }
    }

    /// Attach labels.
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Replace the display config.
    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    /// Number of rows in this field.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the field has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An ordered collection of fields sharing a row count.
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    /// Optional frame name.
    pub name: Option<String>,
    /// Optional id of the query that produced the frame.
    pub ref_id: Option<String>,
    /// Optional arbitrary frame metadata.
    pub meta: Option<FrameMeta>,
    /// Fields in column order.
    pub fields: Vec<Field>,
    /// Row count.
    pub length: usize,
}

impl DataFrame {
    /// Create a frame whose length is taken from the first field (0 if none).
    pub fn new(fields: Vec<Field>) -> Self {
        let length = fields.first().map_or(0, Field::len);
        Self {
            fields,
            length,
            ..Default::default()
        }
    }

    /// Set the frame name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the query ref id.
    pub fn with_ref_id(mut self, ref_id: impl Into<String>) -> Self {
        self.ref_id = Some(ref_id.into());
        self
    }

    /// Set the frame metadata.
    pub fn with_meta(mut self, meta: FrameMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Look up the first field with the given name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}
