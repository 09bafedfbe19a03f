//! Error types for the Klout API client.

use thiserror::Error;

use crate::api::transport::TransportError;

/// Error type for every Klout API operation.
#[derive(Debug, Error)]
pub enum KloutError {
    /// The client is misconfigured (e.g. the API key is empty)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The client was closed and its transport released
    #[error("Client has been closed")]
    Disposed,

    /// Upstream returned a non-success HTTP status
    #[error("API error: HTTP {status}")]
    Api { status: u16 },

    /// Response body did not match the expected JSON shape
    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// Network-level failure, passed through from the transport
    #[error("Transport error: {0}")]
    Transport(#[source] TransportError),
}

/// Result type alias for Klout API operations.
pub type KloutResult<T> = Result<T, KloutError>;

impl KloutError {
    /// HTTP status for [`KloutError::Api`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            KloutError::Api { status } => Some(*status),
            _ => None,
        }
    }

    /// Whether retrying the same call could succeed.
    ///
    /// Only rate limiting (429) and server-side (5xx) statuses qualify. The
    /// client itself never retries; this is a hint for wrapping layers.
    pub fn is_retryable(&self) -> bool {
        match self {
            KloutError::Api { status } => *status == 429 || (500..600).contains(status),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for KloutError {
    fn from(err: reqwest::Error) -> Self {
        KloutError::Transport(Box::new(err))
    }
}
