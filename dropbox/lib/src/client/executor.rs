//! Route execution with tracing instrumentation.
//!
//! This module provides the [`ApiClient`] struct for calling Dropbox routes
//! with bearer authentication, status mapping and route error decoding.

use std::fmt;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, RETRY_AFTER};
use serde::Serialize;
use tracing::{Span, debug, instrument, warn};
use url::Url;

use crate::auth::ApiAuthMethod;
use crate::config::{ClientConfig, DEFAULT_TIMEOUT_SECS};
use crate::endpoint::Endpoint;
use crate::error::{ApiError, AuthError, CallError, ClientError, ConfigError, ValidationError};
use crate::response::ResponseFormat;
use crate::taxonomy::{DecodeError, ErrorEnvelope, TaggedError};

/// Builder for configuring an [`ApiClient`].
#[derive(Debug)]
pub struct ApiClientBuilder {
    base_url: Url,
    timeout: Duration,
    default_headers: HeaderMap,
    auth: Option<(ApiAuthMethod, String)>,
}

impl ApiClientBuilder {
    /// Creates a new builder with the specified base URL.
    fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
            auth: None,
        }
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a default header to all requests, e.g. `Dropbox-API-Select-User`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| ClientError::Connection(format!("invalid header name: {e}")))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| ClientError::Connection(format!("invalid header value: {e}")))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the authentication method and access token.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use dropbox_api::ApiAuthMethod;
    ///
    /// let client = ApiClient::builder(base_url)
    ///     .auth(ApiAuthMethod::BearerToken, "sl.xxx")
    ///     .build()?;
    /// ```
    pub fn auth(mut self, method: ApiAuthMethod, token: impl Into<String>) -> Self {
        self.auth = Some((method, token.into()));
        self
    }

    /// Builds the [`ApiClient`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(self.default_headers)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(ApiClient {
            client,
            base_url: self.base_url,
            timeout: self.timeout,
            auth: self.auth,
        })
    }
}

/// Async client for Dropbox routes.
///
/// Wraps a pooled `reqwest::Client`; calls take `&self`, so one client can
/// be shared across tasks.
///
/// ## Examples
///
/// ```rust,ignore
/// use dropbox_api::{ApiClient, CallError, ClientConfig};
///
/// let client = ApiClient::from_config(&ClientConfig::from_env()?)?;
/// let result = client.copy_reference_get("/report.pdf").await?;
/// println!("{} expires {}", result.copy_reference, result.expires);
/// ```
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    auth: Option<(ApiAuthMethod, String)>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("auth", &self.auth.as_ref().map(|(method, _)| method))
            .finish()
    }
}

impl ApiClient {
    /// Creates a new builder for configuring an API client.
    pub fn builder(base_url: Url) -> ApiClientBuilder {
        ApiClientBuilder::new(base_url)
    }

    /// Creates a new API client with default settings and no credentials.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        Self::builder(base_url).build()
    }

    /// Creates a client authenticated with the configured access token.
    ///
    /// ## Errors
    ///
    /// Returns [`AuthError::MissingAccessToken`] if the configuration has no
    /// token, or an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let token = config.access_token()?;
        Self::builder(config.api_url.clone())
            .timeout(config.timeout)
            .auth(ApiAuthMethod::BearerToken, token)
            .build()
    }

    /// Returns the base URL for this client.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Calls a route with `arg` as its JSON argument.
    ///
    /// ## Type Parameters
    ///
    /// * `A` - The route argument type.
    /// * `F` - The [`ResponseFormat`] of a successful response.
    /// * `E` - The route error taxonomy decoded from 409 responses.
    ///
    /// ## Errors
    ///
    /// - [`CallError::Route`] when the route reports a recognized error.
    /// - [`CallError::Unrecognized`] when its subtype is not in `E`'s table.
    /// - [`CallError::Api`] for transport, auth, rate-limit and parse errors.
    #[instrument(
        name = "api_request",
        skip(self, endpoint, arg),
        fields(
            dropbox.route = endpoint.id(),
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn call<A, F, E>(
        &self,
        endpoint: &Endpoint<F, E>,
        arg: &A,
    ) -> Result<F::Output, CallError<E>>
    where
        A: Serialize + ?Sized,
        F: ResponseFormat,
        E: TaggedError,
    {
        let span = Span::current();
        span.record("http.method", endpoint.method().to_string().as_str());

        let full_url = endpoint
            .full_url(&self.base_url)
            .map_err(ConfigError::InvalidUrl)?;
        span.record("http.url", full_url.as_str());

        let mut request = self
            .client
            .request(endpoint.method().to_reqwest(), full_url)
            .header(ACCEPT, F::content_type());
        if endpoint.method().has_body() {
            request = request.json(arg);
        }
        request = self.apply_auth(request)?;

        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        span.record("http.status_code", status.as_u16());

        if !status.is_success() {
            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            span.record("otel.status_code", otel_status);
            return Err(failure(endpoint, response).await);
        }

        span.record("otel.status_code", "OK");

        let body = response.bytes().await.map_err(ClientError::Request)?;
        let parsed = F::parse(body).await?;

        Ok(parsed)
    }

    /// Classifies a `reqwest` send failure.
    fn transport_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout {
                duration_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else if err.is_connect() {
            ClientError::Connection(err.to_string())
        } else {
            ClientError::Request(err)
        }
    }

    /// Applies authentication to a request builder based on the configured auth method.
    fn apply_auth(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, AuthError> {
        let Some((method, token)) = &self.auth else {
            return Ok(request);
        };

        match method {
            ApiAuthMethod::BearerToken => {
                let mut value = HeaderValue::try_from(format!("Bearer {token}"))
                    .map_err(|_| AuthError::InvalidKeyFormat)?;
                value.set_sensitive(true);
                Ok(request.header(AUTHORIZATION, value))
            }
            ApiAuthMethod::None => Ok(request),
        }
    }
}

/// Maps a non-success response onto the error hierarchy.
async fn failure<F, E>(endpoint: &Endpoint<F, E>, response: reqwest::Response) -> CallError<E>
where
    F: ResponseFormat,
    E: TaggedError,
{
    let status = response.status();
    let retry_after_secs = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => return ClientError::Request(e).into(),
    };

    match status.as_u16() {
        400 => ClientError::BadInput {
            message: String::from_utf8_lossy(&body).into_owned(),
        }
        .into(),
        401 => AuthError::from_response_body(&body).into(),
        403 => AuthError::InsufficientPermissions {
            operation: endpoint.id().to_string(),
        }
        .into(),
        409 => route_error(endpoint.id(), &body),
        429 => ClientError::RateLimited { retry_after_secs }.into(),
        code => {
            let message = match std::str::from_utf8(&body) {
                Ok(text) if !text.trim().is_empty() => text.to_string(),
                _ => status.to_string(),
            };
            ClientError::HttpStatus {
                status: code,
                message,
            }
            .into()
        }
    }
}

/// Decodes a 409 body against `E`'s subtype table.
///
/// Unknown subtypes fall back to [`CallError::Unrecognized`]; any other decode
/// failure is a [`ValidationError::ErrorBody`].
fn route_error<E: TaggedError>(route: &str, body: &[u8]) -> CallError<E> {
    let envelope = match ErrorEnvelope::parse(body) {
        Ok(envelope) => envelope,
        Err(err) => return ValidationError::ErrorBody(err).into(),
    };

    match envelope.decode::<E>() {
        Ok(error) => {
            debug!(route, summary = %error.error_summary, "route returned an error");
            CallError::Route(error)
        }
        Err(DecodeError::UnknownErrorSubtype { error, tag }) => {
            warn!(route, error, %tag, "unknown error subtype, using generic error");
            CallError::Unrecognized {
                error,
                tag,
                error_summary: envelope.error_summary,
            }
        }
        Err(err) => ValidationError::ErrorBody(err).into(),
    }
}
