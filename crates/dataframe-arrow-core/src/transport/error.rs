//! Error type for payload and envelope transport.

use arrow::error::ArrowError;
use snafu::prelude::*;

use crate::convert::ConvertError;

/// Errors raised while decoding or encoding wire payloads.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum TransportError {
    /// The payload text is not valid base64.
    #[snafu(display("Payload is not valid base64: {source}"))]
    InvalidBase64 {
        /// Underlying base64 error.
        source: base64::DecodeError,
    },

    /// The payload bytes are not a valid Arrow IPC table.
    #[snafu(display("Failed to read Arrow IPC payload: {source}"))]
    IpcRead {
        /// Underlying Arrow error.
        source: ArrowError,
    },

    /// Writing the Arrow IPC payload failed.
    #[snafu(display("Failed to write Arrow IPC payload: {source}"))]
    IpcWrite {
        /// Underlying Arrow error.
        source: ArrowError,
    },

    /// The table could not be converted to or from a DataFrame.
    #[snafu(display("DataFrame conversion failed: {source}"))]
    Convert {
        /// Underlying conversion error.
        source: ConvertError,
    },

    /// The response envelope is not valid JSON of the expected shape.
    #[snafu(display("Invalid response envelope: {source}"))]
    EnvelopeJson {
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A payload inside the envelope failed to decode.
    #[snafu(display("Failed to decode payload {index} of result {key}: {source}"))]
    ResultPayload {
        /// Result key the payload belongs to.
        key: String,
        /// Position of the payload within the result.
        index: usize,
        /// Error raised by the payload.
        source: Box<TransportError>,
    },
}
