use serde::{Deserialize, Serialize};

use crate::id::id_keyed_serde;
use crate::{EntityId, Extra};

/// Public profile of a startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(remote = "Self")]
pub struct Startup {
    /// Startup id.
    pub id: EntityId,
    /// Company name.
    #[serde(default)]
    pub name: String,
    /// One-line pitch.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "tagline")]
    pub description: Option<String>,
    /// Number of followers.
    #[serde(default)]
    pub followers: u64,
    /// Whether the current user follows the startup.
    #[serde(default, alias = "following")]
    pub is_following: bool,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

id_keyed_serde!(Startup);
