//! Error types for the todo API client.
//!
//! # Design
//! Every non-2xx response lands in `HttpError` with the numeric status and
//! reason phrase, plus the raw body for debugging. Failures that never
//! produced a response (DNS, refused connection, timeout) are kept apart in
//! `TransportError` so callers that care can tell them from server replies.

use thiserror::Error;

/// Errors returned by the transport and by `TodoClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status outside 200–299.
    #[error("{status}: {reason}")]
    HttpError {
        status: u16,
        reason: String,
        body: String,
    },

    /// The request could not be delivered or no response was read.
    #[error("transport failure: {0}")]
    TransportError(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
