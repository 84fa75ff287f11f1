//! `use dataframe_arrow::prelude::*;` brings in the frame model, the table
//! conversions and the base64 payload and envelope helpers.

pub use crate::{
    ArrowDataFrame, ConvertError, DataFrame, EncodeOptions, Field, FieldConfig, FieldType,
    FieldValues, FrameMeta, IpcFormat, Labels, QueryResponse, QueryResult, TransportError, Value,
    dataframe_to_payload, dataframe_to_table, decode_envelope, decode_envelope_json,
    decode_payload, payload_to_dataframe, table_to_dataframe,
};
