//! # Klout Rust SDK
//!
//! An async client for the Klout social influence API.
//!
//! ## Modules
//!
//! - [`api`]: REST client, response models and errors
//! - [`network`]: default endpoint and environment variable names
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use klout::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = KloutClient::from_env()?;
//!
//!     let identity = client.resolve_identity("jack", IdentityKind::TwitterScreenName).await?;
//!     let score = client.get_score(&identity.id).await?;
//!     println!("Score: {:.2} ({:+.2} this week)", score.score, score.score_delta.week_change);
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// REST API client module for identities, users, scores, topics and influence.
pub mod api;

/// Network URL and environment constants.
pub mod network;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use klout::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        IdentityKind, KloutClient, KloutClientBuilder, KloutError, KloutResult,
        ReqwestTransport, Transport, TransportError, TransportResponse,
        // Models
        Identity, Influence, InfluenceEntity, InfluencePayload, InfluenceSet, Score, ScoreBase,
        ScoreDeltas, Topic, UserProfile,
    };

    pub use crate::network::DEFAULT_API_URL;
}
