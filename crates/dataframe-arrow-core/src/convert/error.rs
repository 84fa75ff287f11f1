//! Error type for DataFrame/table conversion.

use arrow::error::ArrowError;
use snafu::prelude::*;

use crate::{
    frame::{FieldType, ValuesError},
    metadata::MetadataError,
};

/// Errors raised while converting between DataFrames and Arrow tables.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConvertError {
    /// Column-level `labels`/`config` metadata could not be read or written.
    #[snafu(display("Invalid metadata on column {column}: {source}"))]
    ColumnMetadata {
        /// Column name.
        column: String,
        /// Underlying metadata error.
        source: MetadataError,
    },

    /// Table-level `meta` could not be read or written.
    #[snafu(display("Invalid table metadata: {source}"))]
    TableMetadata {
        /// Underlying metadata error.
        source: MetadataError,
    },

    /// Reading the source values of a field failed.
    #[snafu(display("Failed to read values of field {field}: {source}"))]
    Values {
        /// Field name.
        field: String,
        /// Underlying value error.
        source: ValuesError,
    },

    /// A value cannot be stored in the physical type chosen for its field.
    #[snafu(display(
        "Field {field} expects {expected} values but row {index} holds a {found} value"
    ))]
    IncompatibleValue {
        /// Field name.
        field: String,
        /// Row index of the offending value.
        index: usize,
        /// Semantic type of the field.
        expected: FieldType,
        /// Kind of the value found.
        found: &'static str,
    },

    /// Arrow rejected the assembled columns (e.g. mismatched lengths).
    #[snafu(display("Failed to assemble Arrow table: {source}"))]
    AssembleTable {
        /// Underlying Arrow error.
        source: ArrowError,
    },
}
