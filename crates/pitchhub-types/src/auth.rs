//! Authentication requests and responses.

use serde::{Deserialize, Serialize};

use crate::{lenient, Extra, Role, UserProfile};

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl LoginRequest {
    /// Creates a login request.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Body of `POST /auth/signup`.
///
/// The four registration flows (viewer, startup, investor, incubator) share
/// `email`, `password` and `fullName`; their role-specific fields travel in
/// `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Account email. Required.
    pub email: String,
    /// Account password. Required.
    pub password: String,
    /// Display name. Required.
    pub full_name: String,
    /// Role chosen during onboarding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Role-specific registration fields.
    #[serde(flatten)]
    pub extra: Extra,
}

impl SignupRequest {
    /// Names of the required fields that are empty or whitespace, using
    /// their wire names.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("email", &self.email),
            ("password", &self.password),
            ("fullName", &self.full_name),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Body of `POST /auth/google`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleAuthRequest {
    /// ID token credential issued by Google Identity Services.
    pub credential: String,
    /// Role to assign when the Google account is new.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Body of `POST /auth/forgot-password`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ForgotPasswordRequest {
    /// Email the one-time code is sent to.
    pub email: String,
}

/// Response of the login, signup and Google auth endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent requests.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Profile of the authenticated user. Absent when `user` is not an object.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
    /// Informational message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}
