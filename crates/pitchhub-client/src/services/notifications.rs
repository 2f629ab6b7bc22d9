use pitchhub_types::{Ack, EntityId, Listing, Notification};

use super::{path_segment, with_query};
use crate::envelope::ResponseEnvelope;
use crate::error::Result;
use crate::gateway::Gateway;

/// In-app notifications.
#[derive(Debug, Clone, Copy)]
pub struct NotificationsService<'a> {
    gateway: &'a Gateway,
}

impl<'a> NotificationsService<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// `GET /notifications`, optionally filtered with `?type=`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn list(&self, kind: Option<&str>) -> Result<ResponseEnvelope<Listing<Notification>>> {
        let endpoint = with_query("/notifications", &[("type", kind)]);
        self.gateway.get(&endpoint).await?.decode()
    }

    /// `POST /notifications/:id/read`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn mark_read(&self, id: &EntityId) -> Result<ResponseEnvelope<Ack>> {
        let endpoint = format!("/notifications/{}/read", path_segment(id.as_str()));
        self.gateway.post(&endpoint, None).await?.decode()
    }

    /// `POST /notifications/read-all`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn mark_all_read(&self) -> Result<ResponseEnvelope<Ack>> {
        self.gateway.post("/notifications/read-all", None).await?.decode()
    }
}
