use serde::{Deserialize, Serialize};

use crate::id::id_keyed_serde;
use crate::{EntityId, Extra};

/// An in-app notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(remote = "Self")]
pub struct Notification {
    /// Notification id.
    pub id: EntityId,
    /// Category (`like`, `comment`, `meeting`, `follow`, ...).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Notification text.
    #[serde(default, alias = "text")]
    pub message: String,
    /// Whether it has been read.
    #[serde(default, alias = "isRead")]
    pub read: bool,
    /// Creation time as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

id_keyed_serde!(Notification);
