//! Common types used throughout `pitchhub`.
//!
//! This crate provides the wire types exchanged with the PitchHub API:
//! user roles and profiles, request bodies, query parameters and the
//! response models the client narrows incoming JSON into.
//!
//! Field names follow the server's camelCase JSON convention. Fields the
//! client does not model explicitly are preserved in flattened `extra` maps
//! so nothing the server sends is silently dropped.

mod auth;
mod explore;
mod id;
mod listing;
mod notification;
mod pitch;
mod reel;
mod role;
mod startup;
mod user;

pub use auth::{AuthResponse, ForgotPasswordRequest, GoogleAuthRequest, LoginRequest, SignupRequest};
pub use explore::{Battle, Hashtag, InvestorSummary, SearchQuery, SearchResults};
pub use id::EntityId;
pub use listing::Listing;
pub use notification::Notification;
pub use pitch::{
    InvestorAiRequest, InvestorAiResponse, Meeting, MeetingStatus, Pitch, ScheduleMeetingRequest,
};
pub use reel::{Comment, CommentRequest, FeedQuery, Reel};
pub use role::Role;
pub use startup::Startup;
pub use user::{UpdateProfileRequest, UserProfile};

/// Free-form JSON object used for fields the client does not model.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// Field deserializer that turns a mistyped value into `None` instead of
/// failing the whole record.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Generic acknowledgement returned by action endpoints (like, follow,
/// mark-read, ...).
///
/// Servers usually answer these with a short message and sometimes a
/// counter; anything else lands in `extra`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ack {
    /// Human-readable status message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Whether the server reported success explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}
