//! Custom error types for feature-service requests.

use geopull_core::DecodeError;
use thiserror::Error;

/// Errors raised while fetching pages from a feature service.
///
/// A fetch either yields a decoded page or exactly one of these; there is no
/// partial success. Callers decide whether to retry, the client never does.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The service answered with a non-success HTTP status
    #[error("feature service returned HTTP {status}: {reason} ({url})")]
    Status {
        /// Numeric HTTP status code
        status: u16,
        /// Canonical reason phrase for the status, empty when unknown
        reason: String,
        /// The URL that produced the response
        url: String,
    },

    /// The request never produced a response (connection, TLS, timeout)
    #[error("request to feature service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response arrived but its body could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
