//! Domain service wrappers.
//!
//! Each service borrows the client's [`Gateway`](crate::Gateway) and maps
//! one method to one REST endpoint. Services build paths, make exactly one
//! gateway call and narrow the JSON body into a typed model; they never
//! retry, cache or swallow errors.

mod auth;
mod explore;
mod meetings;
mod notifications;
mod pitch;
mod reels;
mod startups;
mod users;

pub use auth::AuthService;
pub use explore::ExploreService;
pub use meetings::MeetingsService;
pub use notifications::NotificationsService;
pub use pitch::PitchService;
pub use reels::ReelsService;
pub use startups::StartupsService;
pub use users::UsersService;

use serde::Serialize;
use serde_json::Value;
use url::form_urlencoded;

use crate::error::{RequestError, Result};

/// Percent-encodes an id for use as a single path segment.
pub(crate) fn path_segment(id: &str) -> String {
    form_urlencoded::byte_serialize(id.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Appends an ordered query string to `path`, skipping absent values.
///
/// Returns `path` unchanged when every value is absent.
pub(crate) fn with_query(path: &str, params: &[(&str, Option<&str>)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in params {
        if let Some(value) = value {
            serializer.append_pair(key, value);
            any = true;
        }
    }

    if any {
        format!("{path}?{}", serializer.finish())
    } else {
        path.to_string()
    }
}

/// Converts a typed request body into JSON.
pub(crate) fn json_body<T: Serialize>(body: &T) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| {
        RequestError::validation(format!("Request body could not be serialized: {e}"))
    })
}
