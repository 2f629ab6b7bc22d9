//! Client configuration.

use std::time::Duration;

use crate::error::{RequestError, Result};

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "PITCHHUB_API_URL";

/// Environment variable holding an optional request timeout in seconds.
pub const TIMEOUT_ENV: &str = "PITCHHUB_TIMEOUT_SECS";

/// Configuration for [`crate::PitchHubClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL, e.g. `https://api.pitchhub.app/api`.
    ///
    /// When absent every request fails with a configuration error.
    pub base_url: Option<String>,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: None,
            user_agent: format!("pitchhub-client/{}", crate::VERSION),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Reads the configuration from the environment.
    ///
    /// An unset or empty `PITCHHUB_API_URL` leaves the base URL absent; the
    /// gateway warns about that once when it is built. An unparseable
    /// `PITCHHUB_TIMEOUT_SECS` is logged and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(API_URL_ENV) {
            config = config.with_base_url(url);
        }

        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Some(Duration::from_secs(secs)),
                _ => tracing::warn!(var = TIMEOUT_ENV, value = %raw, "Ignoring invalid timeout"),
            }
        }

        config
    }

    /// Sets the base URL. Trailing slashes are trimmed so endpoints can be
    /// appended verbatim.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url = base_url.into();
        let url = url.trim().trim_end_matches('/');
        self.base_url = if url.is_empty() {
            None
        } else {
            Some(url.to_string())
        };
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Checks that a configured base URL is an absolute http(s) URL.
    ///
    /// A missing base URL is not an error here; it is reported on each
    /// request instead.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for malformed or non-HTTP URLs.
    pub fn validate(&self) -> Result<()> {
        let Some(base_url) = &self.base_url else {
            return Ok(());
        };

        let parsed = url::Url::parse(base_url).map_err(|e| {
            RequestError::configuration(format!("Invalid API base URL '{base_url}': {e}"))
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(RequestError::configuration(format!(
                "Unsupported API base URL scheme '{scheme}'"
            ))),
        }
    }
}
