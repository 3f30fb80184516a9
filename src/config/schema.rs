//! Configuration schema definitions.
//!
//! This module defines the observability configuration structure. All types
//! derive Serde traits for deserialization from config files; missing keys
//! fall back to the documented defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::duration::SignedDuration;

/// Environment name that selects production behaviour.
pub const PRODUCTION: &str = "production";

/// Environment name that selects development behaviour.
pub const DEVELOPMENT: &str = "development";

/// Root observability configuration for a service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Name of the emitting service. Must not be empty.
    pub service_name: String,

    /// Deployment environment ("production", "development", ...).
    pub environment: String,

    /// Application log settings.
    pub logging: LoggingConfig,

    /// External APM agent settings.
    #[serde(alias = "new_relic")]
    pub external_apm: ExternalApmConfig,

    /// Health check settings.
    pub health_checks: HealthChecksConfig,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "boilerplate".to_string(),
            environment: DEVELOPMENT.to_string(),
            logging: LoggingConfig::default(),
            external_apm: ExternalApmConfig::default(),
            health_checks: HealthChecksConfig::default(),
        }
    }
}

/// Build a fresh default configuration.
pub fn default_config() -> ObservabilityConfig {
    ObservabilityConfig::default()
}

impl ObservabilityConfig {
    /// Log level to use once environment fallbacks are applied.
    ///
    /// An empty level resolves to "info" in production and "debug" in
    /// development. Any other combination returns the configured level as is.
    pub fn effective_logging_level(&self) -> &str {
        if self.logging.level.is_empty() {
            match self.environment.as_str() {
                PRODUCTION => return "info",
                DEVELOPMENT => return "debug",
                _ => {}
            }
        }
        &self.logging.level
    }

    /// True only for the exact, case-sensitive environment "production".
    pub fn is_production(&self) -> bool {
        self.environment == PRODUCTION
    }
}

/// Application logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error).
    pub level: String,

    /// Output format ("json" or any text format).
    pub format: String,

    /// Queries slower than this are logged as slow.
    pub slow_query_threshold: SignedDuration,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
            slow_query_threshold: SignedDuration::from_millis(100),
        }
    }
}

/// External APM agent configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExternalApmConfig {
    /// Agent license key.
    pub license_key: String,

    /// Forward application logs to the APM backend.
    pub app_log_forwarding_enabled: bool,

    /// Enable distributed tracing.
    pub distributed_tracing_enabled: bool,

    /// Agent debug logging. Off by default so agent output does not mix with
    /// the service's JSON log stream.
    pub debug_logging: bool,
}

impl Default for ExternalApmConfig {
    fn default() -> Self {
        Self {
            license_key: String::new(),
            app_log_forwarding_enabled: true,
            distributed_tracing_enabled: true,
            debug_logging: false,
        }
    }
}

/// Health check configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HealthChecksConfig {
    /// Enable periodic health checks.
    pub enabled: bool,

    /// Interval between check rounds (declared minimum 1s).
    #[serde(with = "humantime_serde")]
    pub interval: Duration,

    /// Per-check timeout (declared minimum 1s).
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,

    /// Names of the subsystems to probe, in configured order.
    pub checks: Vec<String>,
}

impl Default for HealthChecksConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: Duration::from_secs(30),
            timeout: Duration::from_secs(3),
            checks: vec!["database".to_string(), "redis".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = default_config();
        assert_eq!(config.service_name, "boilerplate");
        assert_eq!(config.environment, "development");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.slow_query_threshold, SignedDuration::from_millis(100));
        assert_eq!(config.external_apm.license_key, "");
        assert!(config.external_apm.app_log_forwarding_enabled);
        assert!(config.external_apm.distributed_tracing_enabled);
        assert!(!config.external_apm.debug_logging);
        assert!(config.health_checks.enabled);
        assert_eq!(config.health_checks.interval, Duration::from_secs(30));
        assert_eq!(config.health_checks.timeout, Duration::from_secs(3));
        assert_eq!(config.health_checks.checks, vec!["database", "redis"]);
    }

    #[test]
    fn test_default_is_fresh_each_call() {
        let mut a = default_config();
        a.health_checks.checks.push("kafka".into());
        a.service_name.clear();

        let b = default_config();
        assert_eq!(b.health_checks.checks.len(), 2);
        assert_eq!(b.service_name, "boilerplate");
    }

    #[test]
    fn test_effective_logging_level() {
        let mut config = default_config();

        config.environment = "production".into();
        config.logging.level = String::new();
        assert_eq!(config.effective_logging_level(), "info");

        config.environment = "development".into();
        assert_eq!(config.effective_logging_level(), "debug");

        config.environment = "production".into();
        config.logging.level = "warn".into();
        assert_eq!(config.effective_logging_level(), "warn");

        config.environment = "staging".into();
        config.logging.level = String::new();
        assert_eq!(config.effective_logging_level(), "");
    }

    #[test]
    fn test_is_production() {
        let mut config = default_config();
        assert!(!config.is_production());

        config.environment = "production".into();
        assert!(config.is_production());

        config.environment = "Production".into();
        assert!(!config.is_production());
    }
}
