//! Custom error types for feature decoding and output.
//!
//! This module provides structured error handling using `thiserror`, so that
//! callers can tell a malformed service response apart from a local output
//! failure and react to each with context intact.

use thiserror::Error;

/// Errors raised while decoding a feature-service response body.
///
/// A response is decoded in stages: the body must parse as JSON, the JSON
/// must carry the fields a feature page is built from, and every feature in
/// it must convert to a typed record. Failing any stage fails the whole
/// response; no partial page is ever produced.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Response body is not parseable JSON
    #[error("response body is not valid JSON: {source}")]
    InvalidJson {
        /// The underlying JSON parse error
        #[source]
        source: serde_json::Error,
    },

    /// Response JSON parsed, but a field the page is built from is absent
    /// or has the wrong shape
    #[error("response JSON lacks required field '{field}'")]
    MissingField {
        /// Dotted path of the missing field (e.g. "crs.properties.name")
        field: &'static str,
    },

    /// A feature inside the response could not be converted to a record
    #[error("feature {index} could not be decoded: {message}")]
    Feature {
        /// Zero-based position of the feature within the response
        index: usize,
        /// Description of the conversion problem
        message: String,
    },
}

/// Errors raised while writing a feature collection to GeoJSON output.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The output sink rejected the bytes
    #[error("failed to write GeoJSON output: {0}")]
    Io(#[from] std::io::Error),

    /// The collection could not be serialized
    #[error("failed to encode GeoJSON output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl DecodeError {
    /// Get a user-friendly error message.
    ///
    /// This formats the error for end users, pointing at the part of the
    /// response that broke rather than the serde internals.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidJson { .. } => {
                "The service response was not valid JSON. The service may be \
                 returning an HTML error page."
                    .to_string()
            },
            Self::MissingField { field } => {
                format!("The service response is missing the '{field}' field.")
            },
            Self::Feature { index, message } => {
                format!("Feature {index} in the response is malformed: {message}")
            },
        }
    }
}
