//! How credentials are attached to requests.

/// Authentication applied by [`ApiClient`](crate::ApiClient).
///
/// User-linked routes take an OAuth2 bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiAuthMethod {
    /// `Authorization: Bearer <token>`.
    #[default]
    BearerToken,
    /// No credentials are sent.
    None,
}
