//! User profile types.

use serde::{Deserialize, Serialize};

use super::score::{ScoreBase, ScoreDeltas};

/// Response for GET /user.json/{id}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub klout_id: String,
    /// Display nickname (usually the Twitter handle)
    pub nick: String,
    pub score: ScoreBase,
    #[serde(default)]
    pub score_deltas: ScoreDeltas,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialize() {
        let json = r#"{
            "kloutId": "635263",
            "nick": "jtimberlake",
            "score": {"score": 84.5, "bucket": "80-89"},
            "scoreDeltas": {"dayChange": 0.1, "weekChange": -0.3, "monthChange": 1.0}
        }"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.klout_id, "635263");
        assert_eq!(user.nick, "jtimberlake");
        assert_eq!(user.score.score, 84.5);
        assert_eq!(user.score.bucket.as_deref(), Some("80-89"));
        assert_eq!(user.score_deltas.week_change, -0.3);
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let user = UserProfile {
            klout_id: "1".into(),
            nick: "n".into(),
            score: ScoreBase { score: 1.0, bucket: None },
            score_deltas: ScoreDeltas::default(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["kloutId"], "1");
        assert!(value.get("scoreDeltas").is_some());
    }
}
