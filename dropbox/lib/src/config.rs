//! Client configuration loaded from the environment.
//!
//! | Variable | Required | Default |
//! |---|---|---|
//! | `DROPBOX_ACCESS_TOKEN` | for route calls | - |
//! | `DROPBOX_API_URL` | no | `https://api.dropboxapi.com/` |
//! | `DROPBOX_TIMEOUT_SECS` | no | `30` |

use std::time::Duration;

use url::Url;

use crate::error::{AuthError, ConfigError};

/// Environment variable holding the OAuth2 access token.
pub const ACCESS_TOKEN_ENV: &str = "DROPBOX_ACCESS_TOKEN";
/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "DROPBOX_API_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "DROPBOX_TIMEOUT_SECS";

/// Base URL for RPC routes.
pub const DEFAULT_API_URL: &str = "https://api.dropboxapi.com/";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings needed to build an [`ApiClient`](crate::ApiClient).
#[derive(Clone)]
pub struct ClientConfig {
    /// OAuth2 access token, if configured.
    pub access_token: Option<String>,
    /// Base URL route paths are joined onto.
    pub api_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Loads the configuration from process environment variables.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// Blank values are treated as unset.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use dropbox_api::ClientConfig;
    ///
    /// let config = ClientConfig::from_lookup(|key| match key {
    ///     "DROPBOX_ACCESS_TOKEN" => Some("sl.token".to_string()),
    ///     "DROPBOX_TIMEOUT_SECS" => Some("5".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.timeout.as_secs(), 5);
    /// assert_eq!(config.api_url.as_str(), "https://api.dropboxapi.com/");
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_url = match get(API_URL_ENV) {
            Some(raw) => Url::parse(&raw)?,
            None => Url::parse(DEFAULT_API_URL)?,
        };

        let timeout = match get(TIMEOUT_ENV) {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| {
                    ConfigError::invalid_value(TIMEOUT_ENV, raw.as_str(), e.to_string())
                })?;
                if secs == 0 {
                    return Err(ConfigError::invalid_value(
                        TIMEOUT_ENV,
                        raw,
                        "timeout must be positive",
                    ));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            access_token: get(ACCESS_TOKEN_ENV),
            api_url,
            timeout,
        })
    }

    /// Returns the access token.
    ///
    /// ## Errors
    ///
    /// Returns [`AuthError::MissingAccessToken`] if none is configured.
    pub fn access_token(&self) -> Result<&str, AuthError> {
        self.access_token
            .as_deref()
            .ok_or(AuthError::MissingAccessToken {
                env_var: ACCESS_TOKEN_ENV,
            })
    }
}
