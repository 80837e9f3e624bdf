//! Client configuration errors.

use thiserror::Error;

/// Errors in client configuration.
///
/// These occur while loading [`ClientConfig`](crate::ClientConfig) or
/// building request URLs, and indicate a setup problem rather than a
/// server-side failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// An environment variable holds an unusable value.
    #[error("Invalid value for {var}: '{value}' ({reason})")]
    InvalidValue {
        /// The variable name.
        var: &'static str,
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl ConfigError {
    /// Creates an invalid value error.
    pub fn invalid_value(var: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            var,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url() {
        let url_err = url::Url::parse("not-a-url").unwrap_err();
        let err = ConfigError::InvalidUrl(url_err);
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_invalid_value() {
        let err = ConfigError::invalid_value("DROPBOX_TIMEOUT_SECS", "soon", "expected seconds");
        assert_eq!(
            err.to_string(),
            "Invalid value for DROPBOX_TIMEOUT_SECS: 'soon' (expected seconds)"
        );
    }
}
