//! Semantic field types.
//!
//! Consumers of a [`DataFrame`](crate::frame::DataFrame) reason about a small,
//! closed set of semantic types that is independent of how a column is
//! physically encoded. The mapping to and from Arrow types lives in
//! [`crate::type_mapper`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use snafu::Snafu;

/// The semantic type of a [`Field`](crate::frame::Field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Any numeric column (integer, floating point, decimal).
    Number,
    /// Boolean column.
    Boolean,
    /// Timestamp column.
    Time,
    /// UTF-8 string column.
    String,
    /// Anything the semantic layer does not model explicitly.
    Other,
}

impl FieldType {
    /// Lowercase name used in JSON and log output.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Time => "time",
            FieldType::String => "string",
            FieldType::Other => "other",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown field type name.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("Unknown field type: {input}"))]
pub struct ParseFieldTypeError {
    /// The string that failed to parse.
    pub input: String,
}

impl FromStr for FieldType {
    type Err = ParseFieldTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "number" => Ok(FieldType::Number),
            "boolean" => Ok(FieldType::Boolean),
            "time" => Ok(FieldType::Time),
            "string" => Ok(FieldType::String),
            "other" => Ok(FieldType::Other),
            _ => Err(ParseFieldTypeError {
                input: s.to_string(),
            }),
        }
    }
}
