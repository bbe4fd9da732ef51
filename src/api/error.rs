//! Errors raised by the data-access layer.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while talking to the country API.
///
/// The repository hands these back unchanged; callers that need a plain
/// message use [`ApiError::reason`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The client could not be configured.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("{source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON shape.
    #[error("Invalid response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The code cannot be a country code, so no request was sent.
    #[error("Invalid country code '{code}'")]
    InvalidCode { code: String },

    /// A single-country lookup came back empty.
    #[error("Country with code {code} not found")]
    NotFound { code: String },

    /// A failure that carried no message at all.
    #[error("request failed without an error message")]
    Unknown,
}

impl ApiError {
    /// The message describing the failure, or `None` when there is none.
    pub fn reason(&self) -> Option<String> {
        match self {
            ApiError::Unknown => None,
            other => Some(other.to_string()),
        }
    }

    /// HTTP status of the failed response, when the API answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(source: reqwest::Error) -> Self {
        ApiError::Transport { source }
    }
}
