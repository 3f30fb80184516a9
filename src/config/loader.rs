//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::fields::FIELDS;
use crate::config::schema::ObservabilityConfig;
use crate::config::validation::{advisories, validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid override {key}: {reason}")]
    Override { key: &'static str, reason: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Decode a TOML document over the defaults. Does not validate.
pub fn from_toml_str(content: &str) -> Result<ObservabilityConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Apply overrides for every env key that `lookup` resolves.
pub fn apply_overrides<F>(config: &mut ObservabilityConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for spec in FIELDS {
        let Some(raw) = lookup(spec.env_key) else {
            continue;
        };
        spec.field
            .write(config, &raw)
            .map_err(|reason| ConfigError::Override {
                key: spec.env_key,
                reason,
            })?;
        tracing::debug!(field = spec.path, key = spec.env_key, "Applied config override");
    }
    Ok(())
}

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: &mut ObservabilityConfig) -> Result<(), ConfigError> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Validate a decoded config and report unenforced constraints it breaks.
pub fn finalize(config: ObservabilityConfig) -> Result<ObservabilityConfig, ConfigError> {
    validate_config(&config)?;

    for advisory in advisories(&config) {
        tracing::warn!(field = advisory.field(), "{}", advisory);
    }

    Ok(config)
}

/// Load, override and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ObservabilityConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config = from_toml_str(&content)?;

    apply_env_overrides(&mut config)?;

    let config = finalize(config)?;
    tracing::info!(
        path = %path.display(),
        service_name = %config.service_name,
        environment = %config.environment,
        "Configuration loaded"
    );
    Ok(config)
}
