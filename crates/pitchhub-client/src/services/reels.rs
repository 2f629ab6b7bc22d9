//! Reel feed endpoints.

use pitchhub_types::{Ack, Comment, CommentRequest, EntityId, FeedQuery, Listing, Reel};

use super::{json_body, path_segment, with_query};
use crate::envelope::ResponseEnvelope;
use crate::error::Result;
use crate::gateway::Gateway;

/// Feed, likes, comments and shares.
#[derive(Debug, Clone, Copy)]
pub struct ReelsService<'a> {
    gateway: &'a Gateway,
}

impl<'a> ReelsService<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// One page of the feed: `GET /reels?type=&limit=&cursor=`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn feed(&self, query: &FeedQuery) -> Result<ResponseEnvelope<Listing<Reel>>> {
        self.gateway.get(&feed_path(query)).await?.decode()
    }

    /// `POST /reels/:id/like`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn like(&self, id: &EntityId) -> Result<ResponseEnvelope<Ack>> {
        self.gateway.post(&reel_path(id, "like"), None).await?.decode()
    }

    /// `DELETE /reels/:id/like`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn unlike(&self, id: &EntityId) -> Result<ResponseEnvelope<Ack>> {
        self.gateway.delete(&reel_path(id, "like")).await?.decode()
    }

    /// `POST /reels/:id/comment`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn comment(
        &self,
        id: &EntityId,
        request: &CommentRequest,
    ) -> Result<ResponseEnvelope<Comment>> {
        let body = json_body(request)?;
        self.gateway
            .post(&reel_path(id, "comment"), Some(&body))
            .await?
            .decode()
    }

    /// `GET /reels/:id/comments`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn comments(&self, id: &EntityId) -> Result<ResponseEnvelope<Listing<Comment>>> {
        self.gateway.get(&reel_path(id, "comments")).await?.decode()
    }

    /// `POST /reels/:id/share`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn share(&self, id: &EntityId) -> Result<ResponseEnvelope<Ack>> {
        self.gateway.post(&reel_path(id, "share"), None).await?.decode()
    }
}

pub(crate) fn feed_path(query: &FeedQuery) -> String {
    let limit = query.limit.to_string();
    with_query(
        "/reels",
        &[
            ("type", Some(query.feed_type.as_str())),
            ("limit", Some(limit.as_str())),
            ("cursor", query.cursor.as_deref()),
        ],
    )
}

fn reel_path(id: &EntityId, action: &str) -> String {
    format!("/reels/{}/{action}", path_segment(id.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClientConfig, CredentialStore, PitchHubClient};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PitchHubClient {
        PitchHubClient::new(ClientConfig::new(server.uri()), CredentialStore::in_memory()).unwrap()
    }

    #[test]
    fn test_feed_path_with_and_without_cursor() {
        assert_eq!(
            feed_path(&FeedQuery::new("startup").with_limit(10).with_cursor("c1")),
            "/reels?type=startup&limit=10&cursor=c1"
        );
        assert_eq!(feed_path(&FeedQuery::default()), "/reels?type=all&limit=10");
    }

    #[tokio::test]
    async fn test_feed_sends_query_and_decodes_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reels"))
            .and(query_param("type", "investor"))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{"id": 1, "likes": 3}, {"id": 2}],
                "nextCursor": "c2"
            })))
            .mount(&server)
            .await;

        let page = client_for(&server)
            .reels()
            .feed(&FeedQuery::new("investor").with_limit(2))
            .await
            .unwrap()
            .into_data();

        assert_eq!(page.len(), 2);
        assert_eq!(page.items[0].likes, 3);
        assert_eq!(page.next_cursor.as_deref(), Some("c2"));
    }

    #[tokio::test]
    async fn test_like_and_unlike_use_distinct_verbs() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/reels/r1/like"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Liked"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/reels/r1/like"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Unliked"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let id = EntityId::new("r1");

        let liked = client.reels().like(&id).await.unwrap();
        let unliked = client.reels().unlike(&id).await.unwrap();

        assert_eq!(liked.data.message.as_deref(), Some("Liked"));
        assert_eq!(unliked.data.message.as_deref(), Some("Unliked"));
    }

    #[tokio::test]
    async fn test_comment_posts_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/reels/7/comment"))
            .and(body_json(json!({"text": "Great pitch"})))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"_id": "c9", "text": "Great pitch"})),
            )
            .mount(&server)
            .await;

        let comment = client_for(&server)
            .reels()
            .comment(&EntityId::from(7u64), &CommentRequest::new("Great pitch"))
            .await
            .unwrap();

        assert_eq!(comment.status, 201);
        assert_eq!(comment.data.id.as_str(), "c9");
    }

    #[tokio::test]
    async fn test_comments_and_share_paths() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reels/r1/comments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"_id": "c1", "id": "c1", "text": "Nice"}
            ])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/reels/r1/share"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"shares": 5})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let id = EntityId::new("r1");

        let comments = client.reels().comments(&id).await.unwrap().into_data();
        assert_eq!(comments.items[0].id.as_str(), "c1");

        let shared = client.reels().share(&id).await.unwrap().into_data();
        assert_eq!(shared.extra["shares"], 5);
    }

    #[tokio::test]
    async fn test_feed_accepts_items_with_both_id_keys() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reels"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"_id": "r1", "id": "r1", "likes": 2}])),
            )
            .mount(&server)
            .await;

        let page = client_for(&server)
            .reels()
            .feed(&FeedQuery::default())
            .await
            .unwrap()
            .into_data();

        assert_eq!(page.items[0].id.as_str(), "r1");
        assert_eq!(page.items[0].likes, 2);
    }
}
