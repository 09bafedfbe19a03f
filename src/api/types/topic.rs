//! Topic types.

use serde::{Deserialize, Serialize};

/// One entry of the array returned by GET /user.json/{id}/topics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub display_type: Option<String>,
    /// "sub" or "super"
    #[serde(default)]
    pub topic_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics_deserialize_in_order() {
        let json = r#"[
            {"id": "10000000000000016635", "displayName": "Music", "name": "Music",
             "slug": "music", "imageUrl": "http://kcdn3.klout.com/static/images/music.png",
             "displayType": "entertainment", "topicType": "sub"},
            {"id": "6467710261455026125", "displayName": "Pop Music"}
        ]"#;
        let topics: Vec<Topic> = serde_json::from_str(json).unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].display_name, "Music");
        assert_eq!(topics[0].slug.as_deref(), Some("music"));
        assert_eq!(topics[0].topic_type.as_deref(), Some("sub"));
        assert_eq!(topics[1].display_name, "Pop Music");
        assert!(topics[1].image_url.is_none());
    }

    #[test]
    fn test_topics_reject_object() {
        assert!(serde_json::from_str::<Vec<Topic>>(r#"{"id": "1"}"#).is_err());
    }
}
