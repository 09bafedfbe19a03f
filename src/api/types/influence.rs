//! Influence relationship types.

use serde::{Deserialize, Serialize};

use super::score::{ScoreBase, ScoreDeltas};

/// Profile summary attached to an influence entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluencePayload {
    pub klout_id: String,
    pub nick: String,
    pub score: ScoreBase,
    #[serde(default)]
    pub score_deltas: ScoreDeltas,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluenceEntity {
    pub id: String,
    pub payload: InfluencePayload,
}

/// A single influencer or influencee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Influence {
    pub entity: InfluenceEntity,
}

/// Response for GET /user.json/{id}/influence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluenceSet {
    /// Profiles influencing this user
    #[serde(default)]
    pub my_influencers: Vec<Influence>,
    /// Profiles this user influences
    #[serde(default)]
    pub my_influencees: Vec<Influence>,
    #[serde(default)]
    pub my_influencers_count: u64,
    #[serde(default)]
    pub my_influencees_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_influence_deserialize() {
        let json = r#"{
            "myInfluencers": [
                {"entity": {"id": "123", "payload": {
                    "kloutId": "123", "nick": "alice",
                    "score": {"score": 55.1, "bucket": "50-59"},
                    "scoreDeltas": {"dayChange": 0.0, "weekChange": 0.2, "monthChange": 1.4}
                }}}
            ],
            "myInfluencees": [],
            "myInfluencersCount": 1,
            "myInfluenceesCount": 0
        }"#;
        let set: InfluenceSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.my_influencers.len(), 1);
        assert!(set.my_influencees.is_empty());
        assert_eq!(set.my_influencers_count, 1);

        let payload = &set.my_influencers[0].entity.payload;
        assert_eq!(payload.nick, "alice");
        assert_eq!(payload.score.score, 55.1);
        assert_eq!(payload.score_deltas.month_change, 1.4);
    }

    #[test]
    fn test_influence_entity_requires_payload() {
        let json = r#"{"myInfluencers": [{"entity": {"id": "123"}}]}"#;
        assert!(serde_json::from_str::<InfluenceSet>(json).is_err());
    }
}
