use pitchhub_types::{EntityId, Listing, Meeting};

use super::path_segment;
use crate::envelope::ResponseEnvelope;
use crate::error::Result;
use crate::gateway::Gateway;

/// Meeting requests received or sent by the current user.
#[derive(Debug, Clone, Copy)]
pub struct MeetingsService<'a> {
    gateway: &'a Gateway,
}

impl<'a> MeetingsService<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// `GET /meetings`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn list(&self) -> Result<ResponseEnvelope<Listing<Meeting>>> {
        self.gateway.get("/meetings").await?.decode()
    }

    /// `POST /meetings/:id/accept`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn accept(&self, id: &EntityId) -> Result<ResponseEnvelope<Meeting>> {
        self.respond(id, "accept").await
    }

    /// `POST /meetings/:id/reject`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn reject(&self, id: &EntityId) -> Result<ResponseEnvelope<Meeting>> {
        self.respond(id, "reject").await
    }

    async fn respond(&self, id: &EntityId, action: &str) -> Result<ResponseEnvelope<Meeting>> {
        let endpoint = format!("/meetings/{}/{action}", path_segment(id.as_str()));
        self.gateway.post(&endpoint, None).await?.decode()
    }
}
