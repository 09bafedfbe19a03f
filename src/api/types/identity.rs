//! Identity resolution types.

use serde::{Deserialize, Serialize};

/// Response for GET /identity.json/{kind}/{id}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Klout platform id the identifier resolved to
    pub id: String,
    /// Network tag reported by upstream ("ks" for Klout)
    #[serde(default)]
    pub network: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_deserialize() {
        let json = r#"{"id": "635263", "network": "ks"}"#;
        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.id, "635263");
        assert_eq!(identity.network, "ks");
    }

    #[test]
    fn test_identity_requires_id() {
        let json = r#"{"network": "ks"}"#;
        assert!(serde_json::from_str::<Identity>(json).is_err());
    }
}
