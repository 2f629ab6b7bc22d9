//! # PitchHub API Client
//!
//! HTTP client for the PitchHub startup/investor networking API.
//!
//! ## Layers
//!
//! - [`CredentialStore`] - single-slot session: one bearer token, one profile
//! - [`Gateway`] - the one place HTTP requests are built and failures normalized
//! - [`services`] - one thin wrapper per REST domain (auth, reels, pitch, ...)
//! - [`PitchHubClient`] - ties the three together
//!
//! Every call returns either a [`ResponseEnvelope`] or a [`RequestError`];
//! transport failures, non-2xx responses, configuration and validation
//! problems all surface as the same error type.
//!
//! ## Example
//!
//! ```rust,ignore
//! use pitchhub_client::{ClientConfig, CredentialStore, PitchHubClient};
//! use pitchhub_types::{FeedQuery, LoginRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pitchhub_client::RequestError> {
//!     let client = PitchHubClient::new(ClientConfig::from_env(), CredentialStore::in_memory())?;
//!
//!     client.auth().login(&LoginRequest::new("ada@example.com", "secret")).await?;
//!     let feed = client.reels().feed(&FeedQuery::new("startup")).await?;
//!     println!("{} reels", feed.data.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub mod gateway;
pub mod services;
pub mod store;

pub use config::ClientConfig;
pub use envelope::ResponseEnvelope;
pub use error::{ErrorKind, RequestError, Result};
pub use gateway::{Gateway, Method};
pub use services::{
    AuthService, ExploreService, MeetingsService, NotificationsService, PitchService,
    ReelsService, StartupsService, UsersService,
};
pub use store::{CredentialStore, FileStorage, MemoryStorage, Storage, StorageError};
pub use tokio_util::sync::CancellationToken;

/// Version of the client library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Entry point to the PitchHub API.
///
/// Cheap to clone; clones share the HTTP connection pool and the session.
#[derive(Debug, Clone)]
pub struct PitchHubClient {
    gateway: Gateway,
}

impl PitchHubClient {
    /// Creates a client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL is malformed or the
    /// HTTP client cannot be built. A missing base URL is not an error here.
    pub fn new(config: ClientConfig, credentials: CredentialStore) -> Result<Self> {
        Ok(Self {
            gateway: Gateway::new(&config, credentials)?,
        })
    }

    /// Creates a client configured from the environment with an in-memory
    /// session.
    ///
    /// # Errors
    ///
    /// See [`PitchHubClient::new`].
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env(), CredentialStore::in_memory())
    }

    /// The underlying gateway, for endpoints without a typed wrapper.
    #[must_use]
    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// The session store.
    #[must_use]
    pub fn credentials(&self) -> &CredentialStore {
        self.gateway.credentials()
    }

    /// Signup, login, Google sign-in, password recovery and logout.
    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.gateway)
    }

    /// Search and discovery.
    #[must_use]
    pub fn explore(&self) -> ExploreService<'_> {
        ExploreService::new(&self.gateway)
    }

    /// Reel feed and interactions.
    #[must_use]
    pub fn reels(&self) -> ReelsService<'_> {
        ReelsService::new(&self.gateway)
    }

    /// Pitch details and meeting requests.
    #[must_use]
    pub fn pitch(&self) -> PitchService<'_> {
        PitchService::new(&self.gateway)
    }

    /// Meetings.
    #[must_use]
    pub fn meetings(&self) -> MeetingsService<'_> {
        MeetingsService::new(&self.gateway)
    }

    /// Startup profiles and follows.
    #[must_use]
    pub fn startups(&self) -> StartupsService<'_> {
        StartupsService::new(&self.gateway)
    }

    /// Notifications.
    #[must_use]
    pub fn notifications(&self) -> NotificationsService<'_> {
        NotificationsService::new(&self.gateway)
    }

    /// The current user's profile.
    #[must_use]
    pub fn users(&self) -> UsersService<'_> {
        UsersService::new(&self.gateway)
    }
}
