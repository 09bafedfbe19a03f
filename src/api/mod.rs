//! REST API client module for Klout.
//!
//! This module provides a type-safe async client for the Klout v2 API:
//! identity resolution, user profiles, scores, topics and influence.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use klout::api::KloutClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = KloutClient::new("my-api-key")?;
//!
//!     let identity = client.resolve_identity_by_twitter_screen_name("jack").await?;
//!     let user = client.get_user(&identity.id).await?;
//!     println!("{} has a score of {:.1}", user.nick, user.score.score);
//!
//!     for topic in client.get_topics(&identity.id).await? {
//!         println!("Topic: {}", topic.display_name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! ```rust,ignore
//! use klout::api::KloutClient;
//! use std::time::Duration;
//!
//! let client = KloutClient::builder("my-api-key")
//!     .base_url("http://localhost:8080/v2")
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! All methods return `KloutResult<T>`, an alias for `Result<T, KloutError>`:
//!
//! ```rust,ignore
//! use klout::api::KloutError;
//!
//! match client.get_user("unknown").await {
//!     Ok(user) => println!("Found {}", user.nick),
//!     Err(KloutError::Api { status: 404 }) => println!("No such user"),
//!     Err(e) if e.is_retryable() => println!("Try again later: {}", e),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub mod client;
pub mod error;
pub mod identity;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{KloutClient, KloutClientBuilder};
pub use error::{KloutError, KloutResult};
pub use identity::IdentityKind;
pub use transport::{ReqwestTransport, Transport, TransportError, TransportResponse};
pub use types::*;
