//! User profiles.

use serde::{Deserialize, Serialize};

use crate::id::id_keyed_serde;
use crate::{lenient, EntityId, Extra, Role};

/// Profile of the signed-in user as echoed back by the server.
///
/// Only the fields the client acts on are typed; the rest of the record is
/// kept in `extra` and written back unchanged when the profile is persisted.
/// A typed field holding a value of the wrong JSON type reads as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(remote = "Self")]
pub struct UserProfile {
    /// Server-side user id.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    /// Role discriminator used for role-based navigation.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Account email.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Remaining profile fields.
    #[serde(flatten)]
    pub extra: Extra,
}

impl UserProfile {
    /// Creates a profile carrying only a role.
    #[must_use]
    pub fn with_role(role: Role) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }

    /// Returns true when the profile has the given role.
    #[must_use]
    pub fn has_role(&self, role: &Role) -> bool {
        self.role.as_ref() == Some(role)
    }
}

/// Partial profile update sent to `PATCH /users/me`.
///
/// Only fields that are set are serialized, so the server sees a true
/// partial update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// New short biography.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// New avatar URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Role-specific fields (company name, ticket size, ...).
    #[serde(flatten)]
    pub extra: Extra,
}

id_keyed_serde!(UserProfile);
