//! Error types for the product API client.
//!
//! # Design
//! `ClientError` is the "thrown fault" channel of the client: anything that
//! prevents a transport-level response from being produced or decoded.
//! HTTP statuses are not errors here; a 404 is a `RawResponse` with
//! `status: 404`. The repository turns every `ClientError` into
//! `ApiResult::Error` using its `Display` text as the message.

use thiserror::Error;

/// Errors surfaced by `ProductApi` implementations and client setup.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base URL could not be parsed or cannot carry a path.
    #[error("invalid base url `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The request could not be sent or the response could not be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// A successful response body could not be decoded.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// Client configuration could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Deserialization(err.to_string())
    }
}
