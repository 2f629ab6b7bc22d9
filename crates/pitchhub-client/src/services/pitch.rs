//! Pitch endpoints.

use pitchhub_types::{
    EntityId, InvestorAiRequest, InvestorAiResponse, Meeting, Pitch, ScheduleMeetingRequest,
};

use super::{json_body, path_segment};
use crate::envelope::ResponseEnvelope;
use crate::error::Result;
use crate::gateway::Gateway;

/// Pitch details, the investor assistant, and meeting requests.
#[derive(Debug, Clone, Copy)]
pub struct PitchService<'a> {
    gateway: &'a Gateway,
}

impl<'a> PitchService<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// `GET /pitch/:id`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn get(&self, id: &EntityId) -> Result<ResponseEnvelope<Pitch>> {
        self.gateway
            .get(&format!("/pitch/{}", path_segment(id.as_str())))
            .await?
            .decode()
    }

    /// Asks the investor assistant about a pitch: `POST /pitch/:id/investor-ai`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn ask_investor_ai(
        &self,
        id: &EntityId,
        request: &InvestorAiRequest,
    ) -> Result<ResponseEnvelope<InvestorAiResponse>> {
        let body = json_body(request)?;
        self.gateway
            .post(&pitch_path(id, "investor-ai"), Some(&body))
            .await?
            .decode()
    }

    /// Requests a meeting with the founders: `POST /pitch/:id/schedule-meeting`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn schedule_meeting(
        &self,
        id: &EntityId,
        request: &ScheduleMeetingRequest,
    ) -> Result<ResponseEnvelope<Meeting>> {
        let body = json_body(request)?;
        self.gateway
            .post(&pitch_path(id, "schedule-meeting"), Some(&body))
            .await?
            .decode()
    }
}

fn pitch_path(id: &EntityId, action: &str) -> String {
    format!("/pitch/{}/{action}", path_segment(id.as_str()))
}
