//! Pitches and the meetings scheduled from them.

use serde::{Deserialize, Serialize};

use crate::id::id_keyed_serde;
use crate::{EntityId, Extra};

/// A startup pitch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(remote = "Self")]
pub struct Pitch {
    /// Pitch id.
    pub id: EntityId,
    /// Pitch title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Startup the pitch belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startup_id: Option<EntityId>,
    /// Remaining fields (deck, ask, metrics, ...).
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body of `POST /pitch/:id/investor-ai`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvestorAiRequest {
    /// Question asked about the pitch.
    pub question: String,
}

impl InvestorAiRequest {
    /// Creates a question for the investor assistant.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// Answer of the investor assistant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestorAiResponse {
    /// Generated answer.
    #[serde(default, alias = "response", alias = "reply")]
    pub answer: String,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body of `POST /pitch/:id/schedule-meeting`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMeetingRequest {
    /// Proposed start time (RFC 3339).
    pub scheduled_at: String,
    /// Optional note for the founder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Lifecycle state of a meeting request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    /// Waiting for the founder's answer.
    #[default]
    Pending,
    /// Accepted by the founder.
    Accepted,
    /// Rejected by the founder.
    Rejected,
    /// Cancelled by either side.
    Cancelled,
    /// Any status this client does not know.
    #[serde(other)]
    Unknown,
}

/// A meeting between an investor and a startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(remote = "Self")]
pub struct Meeting {
    /// Meeting id.
    pub id: EntityId,
    /// Current status.
    #[serde(default)]
    pub status: MeetingStatus,
    /// Scheduled start time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
    /// Pitch the meeting was requested from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch_id: Option<EntityId>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

id_keyed_serde!(Pitch, Meeting);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_meeting_status_defaults_and_unknown() {
        let meeting: Meeting = serde_json::from_value(json!({"id": "m1"})).unwrap();
        assert_eq!(meeting.status, MeetingStatus::Pending);

        let meeting: Meeting =
            serde_json::from_value(json!({"id": "m2", "status": "rescheduled"})).unwrap();
        assert_eq!(meeting.status, MeetingStatus::Unknown);
    }

    #[test]
    fn test_investor_ai_answer_aliases() {
        let answer: InvestorAiResponse =
            serde_json::from_value(json!({"response": "Strong team"})).unwrap();
        assert_eq!(answer.answer, "Strong team");
    }

    #[test]
    fn test_schedule_request_shape() {
        let request = ScheduleMeetingRequest {
            scheduled_at: "2026-11-02T10:00:00Z".to_string(),
            message: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"scheduledAt": "2026-11-02T10:00:00Z"})
        );
    }
}
