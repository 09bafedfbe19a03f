//! Response models for the Klout REST API.
//!
//! Field names follow the upstream JSON schema (camelCase on the wire).

pub mod identity;
pub mod influence;
pub mod score;
pub mod topic;
pub mod user;

// Re-export all types for convenience
pub use identity::*;
pub use influence::*;
pub use score::*;
pub use topic::*;
pub use user::*;
