//! Reels: short pitch videos shown in the feed.

use serde::{Deserialize, Serialize};

use crate::id::id_keyed_serde;
use crate::{EntityId, Extra};

/// Query parameters of `GET /reels`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    /// Feed flavour (`all`, `startup`, `investor`, ...).
    pub feed_type: String,
    /// Page size.
    pub limit: u32,
    /// Opaque cursor returned by the previous page.
    pub cursor: Option<String>,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            feed_type: "all".to_string(),
            limit: 10,
            cursor: None,
        }
    }
}

impl FeedQuery {
    /// Creates a query for the given feed type with the default page size.
    pub fn new(feed_type: impl Into<String>) -> Self {
        Self {
            feed_type: feed_type.into(),
            ..Self::default()
        }
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Continues from a previous page.
    #[must_use]
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

/// A reel in the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(remote = "Self")]
pub struct Reel {
    /// Reel id.
    pub id: EntityId,
    /// Title or caption.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "caption")]
    pub title: Option<String>,
    /// Video URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Number of likes.
    #[serde(default)]
    pub likes: u64,
    /// Number of comments.
    #[serde(default)]
    pub comments: u64,
    /// Whether the current user liked the reel.
    #[serde(default)]
    pub liked: bool,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body of `POST /reels/:id/comment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentRequest {
    /// Comment text.
    pub text: String,
}

impl CommentRequest {
    /// Creates a comment body.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A comment on a reel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(remote = "Self")]
pub struct Comment {
    /// Comment id.
    pub id: EntityId,
    /// Comment text.
    #[serde(default)]
    pub text: String,
    /// Remaining fields (author, timestamps).
    #[serde(flatten)]
    pub extra: Extra,
}

id_keyed_serde!(Reel, Comment);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feed_query_defaults() {
        let query = FeedQuery::default();
        assert_eq!(query.feed_type, "all");
        assert_eq!(query.limit, 10);
        assert!(query.cursor.is_none());
    }

    #[test]
    fn test_feed_query_builder() {
        let query = FeedQuery::new("startup").with_limit(25).with_cursor("c1");
        assert_eq!(query.feed_type, "startup");
        assert_eq!(query.limit, 25);
        assert_eq!(query.cursor.as_deref(), Some("c1"));
    }

    #[test]
    fn test_reel_minimal_payload() {
        let reel: Reel = serde_json::from_value(json!({"id": 3})).unwrap();
        assert_eq!(reel.id.as_str(), "3");
        assert_eq!(reel.likes, 0);
        assert!(!reel.liked);
    }

    #[test]
    fn test_reel_with_both_id_keys() {
        let reel: Reel =
            serde_json::from_value(json!({"_id": "r1", "id": "r1", "likes": 2})).unwrap();
        assert_eq!(reel.id.as_str(), "r1");
        assert_eq!(reel.likes, 2);
        assert!(!reel.extra.contains_key("_id"));
    }

    #[test]
    fn test_listing_of_reels_with_mixed_id_keys() {
        let page: crate::Listing<Reel> = serde_json::from_value(json!([
            {"_id": "r1", "id": "r1", "likes": 2},
            {"_id": "r2"},
            {"id": "r3"}
        ]))
        .unwrap();

        let ids: Vec<&str> = page.items.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn test_reel_serializes_canonical_id() {
        let reel: Reel = serde_json::from_value(json!({"_id": "r9", "caption": "Demo"})).unwrap();
        let back = serde_json::to_value(&reel).unwrap();
        assert_eq!(back["id"], "r9");
        assert_eq!(back["title"], "Demo");
    }
}
