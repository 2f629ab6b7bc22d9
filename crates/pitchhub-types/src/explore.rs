//! Explore page: search and discovery widgets.

use serde::{Deserialize, Serialize};

use crate::id::id_keyed_serde;
use crate::{EntityId, Extra, Reel, Startup};

/// Query parameters of `GET /search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text query.
    pub q: String,
    /// Restricts results to one entity type (`startup`, `investor`, `reel`).
    pub kind: Option<String>,
    /// Maximum number of results per type.
    pub limit: Option<u32>,
}

impl SearchQuery {
    /// Creates a search across all entity types.
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }

    /// Restricts the search to one entity type.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Caps the number of results.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Results of a search, grouped by entity type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResults {
    /// Matching startups.
    pub startups: Vec<Startup>,
    /// Matching investors.
    pub investors: Vec<InvestorSummary>,
    /// Matching reels.
    pub reels: Vec<Reel>,
    /// Remaining groups.
    #[serde(flatten)]
    pub extra: Extra,
}

impl SearchResults {
    /// Total number of typed results.
    #[must_use]
    pub fn total(&self) -> usize {
        self.startups.len() + self.investors.len() + self.reels.len()
    }
}

/// A trending hashtag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hashtag {
    /// Tag text, with or without the leading `#`.
    #[serde(alias = "name")]
    pub tag: String,
    /// Number of posts using the tag.
    #[serde(default, alias = "posts")]
    pub count: u64,
}

/// Short investor card used by the spotlight and search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(remote = "Self")]
pub struct InvestorSummary {
    /// Investor id.
    pub id: EntityId,
    /// Display name.
    #[serde(default, alias = "fullName")]
    pub name: String,
    /// Fund or firm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firm: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// A live pitch battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(remote = "Self")]
pub struct Battle {
    /// Battle id.
    pub id: EntityId,
    /// Battle title.
    #[serde(default)]
    pub title: String,
    /// Remaining fields (contenders, votes, ...).
    #[serde(flatten)]
    pub extra: Extra,
}

id_keyed_serde!(InvestorSummary, Battle);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_results_partial_groups() {
        let results: SearchResults = serde_json::from_value(json!({
            "startups": [{"id": 1, "name": "Acme"}],
            "hashtags": ["#ai"]
        }))
        .unwrap();

        assert_eq!(results.total(), 1);
        assert!(results.investors.is_empty());
        assert_eq!(results.extra["hashtags"], json!(["#ai"]));
    }

    #[test]
    fn test_hashtag_aliases() {
        let tag: Hashtag = serde_json::from_value(json!({"name": "#fintech", "posts": 9})).unwrap();
        assert_eq!(tag.tag, "#fintech");
        assert_eq!(tag.count, 9);
    }
}
