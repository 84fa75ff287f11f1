//! Multi-result response envelope.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use snafu::prelude::*;

use crate::{
    convert::ArrowDataFrame,
    frame::DataFrame,
    transport::{
        EncodeOptions,
        error::{EnvelopeJsonSnafu, TransportError},
        payload::{dataframe_to_payload, payload_to_dataframe},
    },
};

/// A query response holding base64 payloads grouped by result key.
///
/// Result keys keep their document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Results by key (usually the query ref id).
    pub results: IndexMap<String, QueryResult>,
}

/// One result of a [`QueryResponse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Base64 encoded Arrow tables, in order. Missing means none.
    #[serde(default)]
    pub dataframes: Vec<String>,
}

impl QueryResponse {
    /// Parse a JSON envelope.
    pub fn from_json(json: &str) -> Result<Self, TransportError> {
        serde_json::from_str(json).context(EnvelopeJsonSnafu)
    }

    /// Serialize the envelope to JSON.
    pub fn to_json(&self) -> Result<String, TransportError> {
        serde_json::to_string(self).context(EnvelopeJsonSnafu)
    }

    /// Encode `frames` and append them to the result under `key`.
    pub fn push_frames(
        &mut self,
        key: impl Into<String>,
        frames: &[DataFrame],
        options: &EncodeOptions,
    ) -> Result<(), TransportError> {
        let payloads = frames
            .iter()
            .map(|frame| dataframe_to_payload(frame, options))
            .collect::<Result<Vec<_>, _>>()?;
        self.results
            .entry(key.into())
            .or_default()
            .dataframes
            .extend(payloads);
        Ok(())
    }
}

/// Decode every payload of every result into one flat list of frames.
///
/// Order is result-key order, then payload order within each result. The
/// first failing payload aborts the whole call with
/// [`TransportError::ResultPayload`] naming its key and index.
pub fn decode_envelope(response: &QueryResponse) -> Result<Vec<ArrowDataFrame>, TransportError> {
    let mut frames = Vec::new();
    for (key, result) in &response.results {
        for (index, payload) in result.dataframes.iter().enumerate() {
            let frame =
                payload_to_dataframe(payload).map_err(|source| TransportError::ResultPayload {
                    key: key.clone(),
                    index,
                    source: Box::new(source),
                })?;
            frames.push(frame);
        }
    }
    Ok(frames)
}

/// Parse a JSON envelope and decode all of its frames.
pub fn decode_envelope_json(json: &str) -> Result<Vec<ArrowDataFrame>, TransportError> {
    decode_envelope(&QueryResponse::from_json(json)?)
}
