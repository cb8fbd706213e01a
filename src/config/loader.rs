//! Configuration loading.
//!
//! Layers, lowest precedence first: built-in defaults, optional TOML file,
//! process environment. CLI overrides are applied by the caller before
//! validation.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::{ApiKey, RelayConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Bearer credential forwarded upstream.
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";

/// Listen port.
pub const ENV_PORT: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read a TOML file into a config. Missing sections fall back to defaults.
pub fn load_file(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Overlay environment values onto `config`.
///
/// `lookup` abstracts `std::env::var` so tests don't touch the process
/// environment. An empty `PORT` is treated as unset.
pub fn apply_env<F>(config: &mut RelayConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup(ENV_API_KEY) {
        config.upstream.api_key = ApiKey::new(key);
    }

    if let Some(port) = lookup(ENV_PORT).filter(|p| !p.trim().is_empty()) {
        config.listener.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
            var: ENV_PORT,
            value: port.clone(),
        })?;
    }

    Ok(())
}

/// Assemble the configuration from an optional file and the given
/// environment, without validating it.
pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<RelayConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => load_file(path)?,
        None => RelayConfig::default(),
    };
    apply_env(&mut config, lookup)?;
    Ok(config)
}

/// Assemble the configuration from an optional file and the process
/// environment.
pub fn load_config(path: Option<&Path>) -> Result<RelayConfig, ConfigError> {
    load_with(path, |var| std::env::var(var).ok())
}

/// Run semantic validation, wrapping failures as a `ConfigError`.
pub fn validate(config: &RelayConfig) -> Result<(), ConfigError> {
    validate_config(config).map_err(ConfigError::Validation)
}
