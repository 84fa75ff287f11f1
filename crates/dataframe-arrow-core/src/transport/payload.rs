//! Base64 Arrow IPC payloads.

use std::io::Cursor;

use arrow::{
    array::RecordBatch,
    compute::concat_batches,
    ipc::{
        reader::{FileReader, StreamReader},
        writer::{FileWriter, StreamWriter},
    },
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use log::debug;
use snafu::prelude::*;

use crate::{
    convert::{ArrowDataFrame, dataframe_to_table, table_to_dataframe},
    frame::DataFrame,
    transport::{
        EncodeOptions, IpcFormat,
        error::{
            ConvertSnafu, InvalidBase64Snafu, IpcReadSnafu, IpcWriteSnafu, TransportError,
        },
    },
};

/// Leading magic bytes of the Arrow IPC file format.
const ARROW_FILE_MAGIC: &[u8] = b"ARROW1";

/// Decode a base64 payload into an Arrow table.
///
/// Fails if the text is not base64 or the bytes are not an Arrow IPC table;
/// no partial table is ever returned.
pub fn decode_payload(text: &str) -> Result<RecordBatch, TransportError> {
    let bytes = STANDARD.decode(text.trim()).context(InvalidBase64Snafu)?;
    decode_payload_bytes(&bytes)
}

/// Parse raw Arrow IPC bytes (file or stream format) into a single table.
///
/// Multiple record batches are concatenated; a payload without batches gives
/// an empty table with the payload's schema.
pub fn decode_payload_bytes(bytes: &[u8]) -> Result<RecordBatch, TransportError> {
    let (schema, mut batches) = if bytes.starts_with(ARROW_FILE_MAGIC) {
        debug!("Reading Arrow IPC file payload ({} bytes)", bytes.len());
        let reader = FileReader::try_new(Cursor::new(bytes), None).context(IpcReadSnafu)?;
        let schema = reader.schema();
        let batches = reader
            .collect::<Result<Vec<_>, _>>()
            .context(IpcReadSnafu)?;
        (schema, batches)
    } else {
        debug!("Reading Arrow IPC stream payload ({} bytes)", bytes.len());
        let reader = StreamReader::try_new(Cursor::new(bytes), None).context(IpcReadSnafu)?;
        let schema = reader.schema();
        let batches = reader
            .collect::<Result<Vec<_>, _>>()
            .context(IpcReadSnafu)?;
        (schema, batches)
    };

    match batches.len() {
        0 => Ok(RecordBatch::new_empty(schema)),
        1 => Ok(batches.swap_remove(0)),
        n => {
            debug!("Concatenating {n} record batches into one table");
            concat_batches(&schema, &batches).context(IpcReadSnafu)
        }
    }
}

/// Serialize a table with Arrow IPC and encode it as base64.
pub fn encode_payload(table: &RecordBatch, format: IpcFormat) -> Result<String, TransportError> {
    let mut buf = Vec::new();
    match format {
        IpcFormat::File => {
            let mut writer =
                FileWriter::try_new(&mut buf, table.schema_ref()).context(IpcWriteSnafu)?;
            writer.write(table).context(IpcWriteSnafu)?;
            writer.finish().context(IpcWriteSnafu)?;
        }
        IpcFormat::Stream => {
            let mut writer =
                StreamWriter::try_new(&mut buf, table.schema_ref()).context(IpcWriteSnafu)?;
            writer.write(table).context(IpcWriteSnafu)?;
            writer.finish().context(IpcWriteSnafu)?;
        }
    }
    Ok(STANDARD.encode(&buf))
}

/// Decode a base64 payload straight into a DataFrame.
pub fn payload_to_dataframe(text: &str) -> Result<ArrowDataFrame, TransportError> {
    let table = decode_payload(text)?;
    table_to_dataframe(&table).context(ConvertSnafu)
}

/// Encode a DataFrame as a base64 payload.
pub fn dataframe_to_payload(
    frame: &DataFrame,
    options: &EncodeOptions,
) -> Result<String, TransportError> {
    let table = dataframe_to_table(frame).context(ConvertSnafu)?;
    encode_payload(&table, options.ipc_format)
}
