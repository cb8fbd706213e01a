//! Configuration validation.
//!
//! Semantic checks only; serde handles the syntactic ones. Returns every
//! problem found rather than stopping at the first.

use thiserror::Error;
use url::Url;

use crate::config::schema::RelayConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("upstream.url '{url}' is not a valid URL: {reason}")]
    InvalidUpstreamUrl { url: String, reason: String },

    #[error("upstream.url '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("upstream.model must not be empty")]
    EmptyModel,

    #[error("upstream.request_timeout_ms must be greater than zero")]
    ZeroTimeout,

    #[error("listener.port must be greater than zero")]
    ZeroPort,

    #[error("listener.max_body_bytes must be greater than zero")]
    ZeroBodyLimit,
}

/// Validate a fully assembled configuration.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.upstream.url) {
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(ValidationError::UnsupportedScheme(config.upstream.url.clone()));
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidUpstreamUrl {
            url: config.upstream.url.clone(),
            reason: e.to_string(),
        }),
    }

    if config.upstream.model.trim().is_empty() {
        errors.push(ValidationError::EmptyModel);
    }
    if config.upstream.request_timeout_ms == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }
    if config.listener.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(validate_config(&RelayConfig::default()), Ok(()));
    }

    #[test]
    fn missing_api_key_is_not_a_validation_error() {
        let config = RelayConfig::default();
        assert!(config.upstream.api_key.is_empty());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn collects_all_errors() {
        let mut config = RelayConfig::default();
        config.upstream.url = "not a url".into();
        config.upstream.model = "  ".into();
        config.listener.port = 0;
        config.listener.max_body_bytes = 0;
        config.upstream.request_timeout_ms = Some(0);

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(matches!(errors[0], ValidationError::InvalidUpstreamUrl { .. }));
        assert!(errors.contains(&ValidationError::EmptyModel));
        assert!(errors.contains(&ValidationError::ZeroPort));
        assert!(errors.contains(&ValidationError::ZeroBodyLimit));
        assert!(errors.contains(&ValidationError::ZeroTimeout));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let mut config = RelayConfig::default();
        config.upstream.url = "ftp://example.com/v1/chat/completions".into();
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::UnsupportedScheme(config.upstream.url.clone())])
        );
    }
}
