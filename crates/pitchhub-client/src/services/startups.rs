use pitchhub_types::{Ack, EntityId, Listing, Startup};

use super::path_segment;
use crate::envelope::ResponseEnvelope;
use crate::error::Result;
use crate::gateway::Gateway;

/// Startup profiles and follows.
#[derive(Debug, Clone, Copy)]
pub struct StartupsService<'a> {
    gateway: &'a Gateway,
}

impl<'a> StartupsService<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// `GET /startups/:id`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn get(&self, id: &EntityId) -> Result<ResponseEnvelope<Startup>> {
        self.gateway
            .get(&format!("/startups/{}", path_segment(id.as_str())))
            .await?
            .decode()
    }

    /// `POST /startups/:id/follow`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn follow(&self, id: &EntityId) -> Result<ResponseEnvelope<Ack>> {
        self.gateway.post(&follow_path(id), None).await?.decode()
    }

    /// `DELETE /startups/:id/follow`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn unfollow(&self, id: &EntityId) -> Result<ResponseEnvelope<Ack>> {
        self.gateway.delete(&follow_path(id)).await?.decode()
    }

    /// Startups the current user follows: `GET /startups/following/me`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn following(&self) -> Result<ResponseEnvelope<Listing<Startup>>> {
        self.gateway.get("/startups/following/me").await?.decode()
    }
}

fn follow_path(id: &EntityId) -> String {
    format!("/startups/{}/follow", path_segment(id.as_str()))
}
