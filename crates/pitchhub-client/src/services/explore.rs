//! Explore page endpoints.

use pitchhub_types::{Battle, Hashtag, InvestorSummary, Listing, SearchQuery, SearchResults, Startup};

use super::with_query;
use crate::envelope::ResponseEnvelope;
use crate::error::Result;
use crate::gateway::Gateway;

/// Search and discovery widgets.
#[derive(Debug, Clone, Copy)]
pub struct ExploreService<'a> {
    gateway: &'a Gateway,
}

impl<'a> ExploreService<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Full-text search: `GET /search?q=&type=&limit=`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn search(&self, query: &SearchQuery) -> Result<ResponseEnvelope<SearchResults>> {
        self.gateway.get(&search_path(query)).await?.decode()
    }

    /// `GET /hashtags/trending`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn trending_hashtags(&self) -> Result<ResponseEnvelope<Listing<Hashtag>>> {
        self.gateway.get("/hashtags/trending").await?.decode()
    }

    /// `GET /startups/top`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn top_startups(&self) -> Result<ResponseEnvelope<Listing<Startup>>> {
        self.gateway.get("/startups/top").await?.decode()
    }

    /// `GET /startups/week`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn startups_of_the_week(&self) -> Result<ResponseEnvelope<Listing<Startup>>> {
        self.gateway.get("/startups/week").await?.decode()
    }

    /// `GET /investors/spotlight`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn investor_spotlight(&self) -> Result<ResponseEnvelope<Listing<InvestorSummary>>> {
        self.gateway.get("/investors/spotlight").await?.decode()
    }

    /// `GET /battleground/live`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn live_battles(&self) -> Result<ResponseEnvelope<Listing<Battle>>> {
        self.gateway.get("/battleground/live").await?.decode()
    }
}

fn search_path(query: &SearchQuery) -> String {
    let limit = query.limit.map(|l| l.to_string());
    with_query(
        "/search",
        &[
            ("q", Some(query.q.as_str())),
            ("type", query.kind.as_deref()),
            ("limit", limit.as_deref()),
        ],
    )
}
