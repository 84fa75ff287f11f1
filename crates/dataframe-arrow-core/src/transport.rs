//! Wire transport: base64 Arrow IPC payloads and the multi-result envelope.
//!
//! A payload is one Arrow table serialized with Arrow IPC (file or stream
//! format) and base64 encoded. Query responses group payloads by result key:
//!
//! ```json
//! { "results": { "A": { "dataframes": ["<base64>", "..."] } } }
//! ```
//!
//! Decoding an envelope yields every frame in result-key order, then payload
//! order, and aborts on the first payload that fails.

pub mod envelope;
pub mod error;
pub mod payload;

pub use envelope::{QueryResponse, QueryResult, decode_envelope, decode_envelope_json};
pub use error::TransportError;
pub use payload::{
    dataframe_to_payload, decode_payload, decode_payload_bytes, encode_payload,
    payload_to_dataframe,
};

/// Arrow IPC framing used when encoding payloads.
///
/// Decoding detects the framing by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IpcFormat {
    /// IPC file format (`ARROW1` magic, footer with block index).
    #[default]
    File,
    /// IPC streaming format.
    Stream,
}

/// Options for encoding frames into payloads.
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    /// IPC framing to write.
    pub ipc_format: IpcFormat,
}

impl EncodeOptions {
    /// Use the given IPC framing.
    pub fn with_ipc_format(mut self, ipc_format: IpcFormat) -> Self {
        self.ipc_format = ipc_format;
        self
    }
}
