//! # dataframe-arrow
//!
//! Metadata-preserving conversion between semantic DataFrames and Arrow
//! tables, plus base64 IPC transport.
//!
//! Everything here is re-exported from `dataframe-arrow-core`; the frame
//! model, conversions and payload helpers are flattened to the crate root.
//!
//! ## Example
//!
//! ```rust
//! use dataframe_arrow::prelude::*;
//!
//! let frame = DataFrame::new(vec![Field::new(
//!     "value",
//!     FieldType::Number,
//!     vec![Value::Number(1.0), Value::Null],
//! )])
//! .with_ref_id("A");
//!
//! let payload = dataframe_to_payload(&frame, &EncodeOptions::default())?;
//! let decoded = payload_to_dataframe(&payload)?;
//! assert_eq!(decoded.length, 2);
//! assert_eq!(decoded.ref_id.as_deref(), Some("A"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Types and functions most callers need for a payload round trip.
pub mod prelude;

/// Metadata keys and codec helpers.
pub mod metadata {
    pub use dataframe_arrow_core::metadata::{
        CONFIG_KEY, LABELS_KEY, META_KEY, MetadataError, MetadataMap, NAME_KEY, REF_ID_KEY,
        read_config, read_json, read_raw, write_json, write_raw,
    };
}

pub use dataframe_arrow_core::convert::{
    ArrowDataFrame, ConvertError, build_vector, dataframe_to_table, table_to_dataframe,
};
pub use dataframe_arrow_core::frame::{
    DataFrame, Field, FieldType, FieldValues, ParseFieldTypeError, Value, ValuesError,
};
pub use dataframe_arrow_core::metadata::{FieldConfig, FrameMeta, Labels};
pub use dataframe_arrow_core::transport::{
    EncodeOptions, IpcFormat, QueryResponse, QueryResult, TransportError, dataframe_to_payload,
    decode_envelope, decode_envelope_json, decode_payload, decode_payload_bytes, encode_payload,
    payload_to_dataframe,
};
pub use dataframe_arrow_core::type_mapper::{
    PhysicalKind, UnmappedColumn, field_type_for, physical_type_for,
};
