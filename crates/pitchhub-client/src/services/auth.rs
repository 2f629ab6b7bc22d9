//! Authentication endpoints.

use pitchhub_types::{
    Ack, AuthResponse, ForgotPasswordRequest, GoogleAuthRequest, LoginRequest, SignupRequest,
};
use serde_json::Value;

use super::json_body;
use crate::envelope::ResponseEnvelope;
use crate::error::{RequestError, Result};
use crate::gateway::Gateway;

/// Signup, login, Google sign-in and password recovery.
///
/// None of these calls send a bearer token. `signup`, `login` and
/// `google_auth` write the returned token and profile through to the
/// credential store before returning.
#[derive(Debug, Clone, Copy)]
pub struct AuthService<'a> {
    gateway: &'a Gateway,
}

impl<'a> AuthService<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Fails locally with a 400 validation error, without any request, if
    /// `email`, `password` or `fullName` is empty. Otherwise propagates
    /// gateway errors.
    pub async fn signup(&self, request: &SignupRequest) -> Result<ResponseEnvelope<AuthResponse>> {
        let missing = request.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(?missing, "Rejecting signup with missing fields");
            return Err(RequestError::validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        self.authenticate("/auth/signup", &json_body(request)?).await
    }

    /// Signs in with email and password.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors; a 401 means invalid credentials.
    pub async fn login(&self, request: &LoginRequest) -> Result<ResponseEnvelope<AuthResponse>> {
        self.authenticate("/auth/login", &json_body(request)?).await
    }

    /// Signs in with a Google ID token.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors.
    pub async fn google_auth(
        &self,
        request: &GoogleAuthRequest,
    ) -> Result<ResponseEnvelope<AuthResponse>> {
        self.authenticate("/auth/google", &json_body(request)?).await
    }

    /// Requests a one-time password reset code by email.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors.
    pub async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<ResponseEnvelope<Ack>> {
        self.gateway
            .post_public("/auth/forgot-password", Some(&json_body(request)?))
            .await?
            .decode()
    }

    /// Ends the local session by clearing the stored token and profile.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the credential store cannot be cleared.
    pub fn logout(&self) -> Result<()> {
        self.gateway.credentials().clear_auth_data()?;
        tracing::info!("Logged out");
        Ok(())
    }

    async fn authenticate(
        &self,
        endpoint: &str,
        body: &Value,
    ) -> Result<ResponseEnvelope<AuthResponse>> {
        let envelope = self.gateway.post_public(endpoint, Some(body)).await?;

        // Token comes from the raw body, before the profile is narrowed.
        let store = self.gateway.credentials();
        let token = envelope.data.get("token").and_then(Value::as_str);
        if let Some(token) = token {
            store.set_auth_token(Some(token))?;
        }
        let has_token = token.is_some();

        let envelope: ResponseEnvelope<AuthResponse> = envelope.decode()?;
        if let Some(user) = &envelope.data.user {
            if user.role.as_ref().is_some_and(|role| !role.is_known()) {
                tracing::warn!(role = ?user.role, "Server returned an unrecognized role");
            }
            store.set_user_data(Some(user))?;
        }

        tracing::info!(
            endpoint,
            has_token,
            role = ?envelope.data.user.as_ref().and_then(|u| u.role.as_ref()),
            "Authenticated"
        );
        Ok(envelope)
    }
}
