use pitchhub_types::{UpdateProfileRequest, UserProfile};

use super::json_body;
use crate::envelope::ResponseEnvelope;
use crate::error::Result;
use crate::gateway::Gateway;

/// The current user's own profile.
#[derive(Debug, Clone, Copy)]
pub struct UsersService<'a> {
    gateway: &'a Gateway,
}

impl<'a> UsersService<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// `GET /users/me`.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn me(&self) -> Result<ResponseEnvelope<UserProfile>> {
        self.gateway.get("/users/me").await?.decode()
    }

    /// Partial profile update: `PATCH /users/me`.
    ///
    /// The stored session profile is not refreshed; call
    /// [`CredentialStore::set_user_data`](crate::CredentialStore::set_user_data)
    /// with the result if the local copy should follow.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors. A 2xx body that does not fit the
    /// response model is a `Decode` error.
    pub async fn update_me(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<ResponseEnvelope<UserProfile>> {
        let body = json_body(request)?;
        self.gateway.patch("/users/me", Some(&body)).await?.decode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClientConfig, CredentialStore, PitchHubClient};
    use pitchhub_types::Role;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_me_and_update() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 5, "role": "Investor", "fullName": "Grace"
            })))
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/users/me"))
            .and(body_json(json!({"fullName": "Grace H."})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 5, "role": "investor", "fullName": "Grace H."
            })))
            .mount(&server)
            .await;

        let client =
            PitchHubClient::new(ClientConfig::new(server.uri()), CredentialStore::in_memory())
                .unwrap();

        let me = client.users().me().await.unwrap().into_data();
        assert!(me.has_role(&Role::Investor));

        let updated = client
            .users()
            .update_me(&UpdateProfileRequest {
                full_name: Some("Grace H.".to_string()),
                ..UpdateProfileRequest::default()
            })
            .await
            .unwrap()
            .into_data();
        assert_eq!(updated.full_name.as_deref(), Some("Grace H."));
    }
}
