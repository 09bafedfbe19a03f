//! Score types.

use serde::{Deserialize, Serialize};

/// Score changes over the last day, week and month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDeltas {
    #[serde(default)]
    pub day_change: f64,
    #[serde(default)]
    pub week_change: f64,
    #[serde(default)]
    pub month_change: f64,
}

/// Score as embedded in user and influence payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBase {
    pub score: f64,
    /// Score range bucket, e.g. "80-89"
    #[serde(default)]
    pub bucket: Option<String>,
}

/// Response for GET /user.json/{id}/score.
///
/// Not stable over time: upstream may return a different value for two calls
/// made seconds apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub score: f64,
    #[serde(default)]
    pub score_delta: ScoreDeltas,
    #[serde(default)]
    pub bucket: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_deserialize() {
        let json = r#"{
            "score": 84.27,
            "scoreDelta": {"dayChange": -0.02, "weekChange": 0.5, "monthChange": -1.25},
            "bucket": "80-89"
        }"#;
        let score: Score = serde_json::from_str(json).unwrap();
        assert_eq!(score.score, 84.27);
        assert_eq!(score.score_delta.day_change, -0.02);
        assert_eq!(score.score_delta.week_change, 0.5);
        assert_eq!(score.score_delta.month_change, -1.25);
        assert_eq!(score.bucket.as_deref(), Some("80-89"));
    }

    #[test]
    fn test_score_without_deltas() {
        let score: Score = serde_json::from_str(r#"{"score": 10.0}"#).unwrap();
        assert_eq!(score.score_delta, ScoreDeltas::default());
        assert!(score.bucket.is_none());
    }

    #[test]
    fn test_score_requires_score() {
        assert!(serde_json::from_str::<Score>(r#"{"bucket": "10-19"}"#).is_err());
        assert!(serde_json::from_str::<Score>("null").is_err());
    }
}
