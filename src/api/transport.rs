//! HTTP transport seam.
//!
//! [`KloutClient`](crate::api::KloutClient) only needs to issue GET requests and
//! read back a status and a body, so that is all [`Transport`] asks for. The
//! default implementation, [`ReqwestTransport`], wraps a `reqwest::Client` with
//! gzip and deflate decompression enabled. Tests and callers with their own
//! HTTP stack can supply any other implementation.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

/// Boxed error produced by a transport. Passed to callers unchanged.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Status and body of a completed GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Body text (may be empty for non-success statuses)
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal async HTTP transport used by the client.
///
/// Implementations must be shareable across tasks: the client issues
/// concurrent calls through `&self`.
pub trait Transport: Send + Sync {
    /// Perform a GET request against the fully-formed `url`.
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}

/// Default transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with automatic gzip/deflate decompression and an
    /// optional per-request timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().gzip(true).deflate(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        // Error bodies are never surfaced, so don't bother reading them.
        let body = if status.is_success() {
            response.text().await?
        } else {
            String::new()
        };

        Ok(TransportResponse {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(TransportResponse::new(200, "{}").is_success());
        assert!(TransportResponse::new(204, "").is_success());
        assert!(!TransportResponse::new(199, "").is_success());
        assert!(!TransportResponse::new(301, "").is_success());
        assert!(!TransportResponse::new(404, "").is_success());
        assert!(!TransportResponse::new(500, "").is_success());
    }

    #[test]
    fn test_reqwest_transport_creation() {
        assert!(ReqwestTransport::new(None).is_ok());
        assert!(ReqwestTransport::new(Some(Duration::from_secs(5))).is_ok());
    }
}
