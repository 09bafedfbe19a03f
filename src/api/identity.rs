//! Identity kinds and their `identity.json` routes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Namespace of an identifier passed to identity resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IdentityKind {
    /// Twitter handle, e.g. `jack`
    #[default]
    TwitterScreenName,
    /// Numeric Twitter user id
    TwitterId,
    /// Google+ profile id
    GoogleProfileId,
    /// Instagram user id
    InstagramId,
    /// Klout platform id
    KloutId,
}

impl IdentityKind {
    /// All kinds, in declaration order.
    pub const ALL: [IdentityKind; 5] = [
        IdentityKind::TwitterScreenName,
        IdentityKind::TwitterId,
        IdentityKind::GoogleProfileId,
        IdentityKind::InstagramId,
        IdentityKind::KloutId,
    ];

    /// Path fragment below `identity.json/` for an already-encoded identifier.
    pub(crate) fn route(self, identifier: &str) -> String {
        match self {
            IdentityKind::TwitterId => format!("tw/{}", identifier),
            IdentityKind::GoogleProfileId => format!("gp/{}", identifier),
            IdentityKind::InstagramId => format!("ig/{}", identifier),
            IdentityKind::TwitterScreenName => format!("twitter?screenName={}", identifier),
            IdentityKind::KloutId => format!("klout/{}/tw", identifier),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IdentityKind::TwitterScreenName => "twitter_screen_name",
            IdentityKind::TwitterId => "twitter_id",
            IdentityKind::GoogleProfileId => "google_profile_id",
            IdentityKind::InstagramId => "instagram_id",
            IdentityKind::KloutId => "klout_id",
        }
    }
}

impl fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
