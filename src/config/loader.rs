//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::FrontendConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable carrying the session signing secret.
pub const SESSION_SECRET_ENV: &str = "SESSION_SECRET";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

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

/// Parse configuration from TOML text. Validation happens later, once
/// overrides have been applied.
pub fn parse_config(content: &str) -> Result<FrontendConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Values supplied at startup outside the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Value of `SESSION_SECRET`, if set.
    pub session_secret: Option<String>,

    /// Listener address from the command line.
    pub bind_address: Option<String>,
}

/// Resolve the startup configuration.
///
/// Reads the file when one is given, otherwise starts from defaults, then
/// applies `overrides`. An empty secret counts as unset. Validation runs
/// last, so overridden values are checked like file values.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<FrontendConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => FrontendConfig::default(),
    };

    if let Some(secret) = overrides.session_secret.filter(|s| !s.is_empty()) {
        config.session.secret = secret;
    }
    if let Some(bind) = overrides.bind_address {
        config.listener.bind_address = bind;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
