//! Klout REST API client implementation.
//!
//! The [`KloutClient`] provides a type-safe interface for the Klout v2 API.
//!
//! # Example
//!
//! ```rust,ignore
//! use klout::api::{IdentityKind, KloutClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = KloutClient::new("my-api-key")?;
//!
//!     let identity = client.resolve_identity("jack", IdentityKind::TwitterScreenName).await?;
//!     let score = client.get_score(&identity.id).await?;
//!     println!("Score: {:.2}", score.score);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Cancellation
//!
//! Dropping an operation's future aborts the request. Wrap a call in
//! `tokio::time::timeout` to bound it individually, or set a timeout for every
//! request of the default transport with [`KloutClientBuilder::timeout`].
//!
//! # Closing
//!
//! [`KloutClient::close`] releases the transport; afterwards every operation
//! fails with [`KloutError::Disposed`]. It takes `&mut self`, so it cannot race
//! with calls borrowed from the same client. A client shared behind an `Arc`
//! is released when the last reference is dropped.

use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::api::error::{KloutError, KloutResult};
use crate::api::identity::IdentityKind;
use crate::api::transport::{ReqwestTransport, Transport};
use crate::api::types::*;
use crate::network::{API_KEY_ENV, API_URL_ENV, DEFAULT_API_URL};

/// Builder for configuring [`KloutClient`].
#[derive(Clone)]
pub struct KloutClientBuilder {
    key: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl KloutClientBuilder {
    /// Create a new builder with the given API key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            base_url: DEFAULT_API_URL.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Override the API base URL (e.g. for a proxy or a local stub server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout of the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Build the client with the default `reqwest` transport.
    pub fn build(self) -> KloutResult<KloutClient> {
        let transport = ReqwestTransport::new(self.timeout)?;
        Ok(self.build_with_transport(transport))
    }

    /// Build the client around a caller-supplied transport.
    ///
    /// The client takes ownership and releases the transport when closed.
    /// Any builder timeout is ignored; configure it on the transport itself.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> KloutClient<T> {
        KloutClient {
            key: self.key,
            base_url: self.base_url,
            transport: Some(transport),
        }
    }
}

impl fmt::Debug for KloutClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KloutClientBuilder")
            .field("key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Klout REST API client.
///
/// Every operation validates the key and the client's liveness before any
/// network traffic, then issues a single GET. Nothing is cached or retried.
pub struct KloutClient<T = ReqwestTransport> {
    key: String,
    base_url: String,
    transport: Option<T>,
}

impl KloutClient {
    /// Create a new client with the default transport (gzip/deflate enabled).
    ///
    /// The key is not validated here; an empty key fails at call time.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(key: impl Into<String>) -> KloutResult<Self> {
        KloutClientBuilder::new(key).build()
    }

    /// Create a client from `KLOUT_API_KEY` and optionally `KLOUT_API_URL`.
    ///
    /// A missing key yields a client whose calls fail with
    /// [`KloutError::Configuration`].
    pub fn from_env() -> KloutResult<Self> {
        let key = std::env::var(API_KEY_ENV).unwrap_or_default();
        let mut builder = KloutClientBuilder::new(key);
        if let Ok(url) = std::env::var(API_URL_ENV) {
            builder = builder.base_url(url);
        }
        builder.build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(key: impl Into<String>) -> KloutClientBuilder {
        KloutClientBuilder::new(key)
    }
}

impl<T: Transport> KloutClient<T> {
    /// Create a client around a caller-supplied transport.
    ///
    /// The transport is owned and released by the client; do not share one
    /// transport between clients that are closed independently.
    pub fn with_transport(key: impl Into<String>, transport: T) -> Self {
        KloutClientBuilder::new(key).build_with_transport(transport)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a non-empty API key is configured.
    pub fn has_key(&self) -> bool {
        !self.key.is_empty()
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.transport.is_none()
    }

    /// Release the transport. Idempotent.
    pub fn close(&mut self) {
        if self.transport.take().is_some() {
            tracing::debug!(base_url = %self.base_url, "Klout client closed");
        }
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn check_key(&self) -> KloutResult<()> {
        if self.key.is_empty() {
            return Err(KloutError::Configuration("Klout key not set".to_string()));
        }
        Ok(())
    }

    fn transport(&self) -> KloutResult<&T> {
        self.transport.as_ref().ok_or(KloutError::Disposed)
    }

    /// Full request URL for `path` with the API key appended.
    fn url(&self, path: &str) -> String {
        let separator = if path.contains('?') { '&' } else { '?' };
        format!(
            "{}/{}{}key={}",
            self.base_url,
            path,
            separator,
            urlencoding::encode(&self.key)
        )
    }

    /// Execute a GET request for `path` and deserialize the body.
    async fn get<R: DeserializeOwned>(&self, path: &str) -> KloutResult<R> {
        self.check_key()?;
        let transport = self.transport()?;
        let url = self.url(path);

        tracing::debug!(path, "Klout request");
        let response = transport.get(&url).await.map_err(KloutError::Transport)?;

        if !response.is_success() {
            tracing::debug!(path, status = response.status, "Klout request failed");
            return Err(KloutError::Api {
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| {
            tracing::debug!(path, error = %e, "Failed to deserialize Klout response");
            KloutError::Deserialize(e)
        })
    }

    fn user_path(platform_id: &str, suffix: &str) -> String {
        format!("user.json/{}{}", urlencoding::encode(platform_id), suffix)
    }

    // =========================================================================
    // Identity endpoints
    // =========================================================================

    /// Resolve an external identifier to a Klout identity.
    ///
    /// Pass `IdentityKind::default()` to resolve a Twitter screen name.
    pub async fn resolve_identity(&self, identifier: &str, kind: IdentityKind) -> KloutResult<Identity> {
        let path = format!("identity.json/{}", kind.route(&urlencoding::encode(identifier)));
        tracing::debug!(%kind, "Resolving identity");
        self.get(&path).await
    }

    /// Resolve a numeric Twitter user id.
    pub async fn resolve_identity_by_twitter_id(&self, twitter_id: &str) -> KloutResult<Identity> {
        self.resolve_identity(twitter_id, IdentityKind::TwitterId).await
    }

    /// Resolve a Google+ profile id.
    pub async fn resolve_identity_by_google_id(&self, google_id: &str) -> KloutResult<Identity> {
        self.resolve_identity(google_id, IdentityKind::GoogleProfileId).await
    }

    /// Resolve an Instagram user id.
    pub async fn resolve_identity_by_instagram_id(&self, instagram_id: &str) -> KloutResult<Identity> {
        self.resolve_identity(instagram_id, IdentityKind::InstagramId).await
    }

    /// Resolve a Twitter handle.
    pub async fn resolve_identity_by_twitter_screen_name(&self, screen_name: &str) -> KloutResult<Identity> {
        self.resolve_identity(screen_name, IdentityKind::TwitterScreenName).await
    }

    /// Resolve a Klout id (returns the linked Twitter identity).
    pub async fn resolve_identity_by_klout_id(&self, klout_id: &str) -> KloutResult<Identity> {
        self.resolve_identity(klout_id, IdentityKind::KloutId).await
    }

    // =========================================================================
    // User endpoints
    // =========================================================================

    /// Get the profile of a Klout user.
    pub async fn get_user(&self, platform_id: &str) -> KloutResult<UserProfile> {
        self.get(&Self::user_path(platform_id, "")).await
    }

    /// Get the current score of a Klout user.
    pub async fn get_score(&self, platform_id: &str) -> KloutResult<Score> {
        self.get(&Self::user_path(platform_id, "/score")).await
    }

    /// Get the topics a Klout user is influential about, in upstream order.
    pub async fn get_topics(&self, platform_id: &str) -> KloutResult<Vec<Topic>> {
        self.get(&Self::user_path(platform_id, "/topics")).await
    }

    /// Get a Klout user's influencers and influencees.
    pub async fn get_influence(&self, platform_id: &str) -> KloutResult<InfluenceSet> {
        self.get(&Self::user_path(platform_id, "/influence")).await
    }
}

impl<T> fmt::Debug for KloutClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KloutClient")
            .field("key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("closed", &self.transport.is_none())
            .finish()
    }
}
