//! Field table binding config paths to env keys and rules.
//!
//! Every leaf field of [`ObservabilityConfig`] has one row. Validation walks
//! the rows in order and checks the enforced ones; the env override decoder
//! walks the same rows and writes any value the environment supplies.

use std::time::Duration;

use crate::config::duration::SignedDuration;
use crate::config::schema::ObservabilityConfig;
use crate::config::validation::ValidationError;

/// Prefix shared by every override key.
pub const ENV_PREFIX: &str = "OBSERVABILITY_";

/// Accepted values for `logging.level`.
pub const LOG_LEVELS: &[&str] = &["debug", "info", "warn", "error"];

/// Declared minimum for health check interval and timeout.
pub const HEALTH_CHECK_MIN_PERIOD: Duration = Duration::from_secs(1);

/// Identifies a leaf field of the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ServiceName,
    Environment,
    LoggingLevel,
    LoggingFormat,
    SlowQueryThreshold,
    LicenseKey,
    AppLogForwarding,
    DistributedTracing,
    ApmDebugLogging,
    HealthChecksEnabled,
    HealthChecksInterval,
    HealthChecksTimeout,
    HealthChecks,
}

/// Borrowed view of a field's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
    Duration(Duration),
    SignedDuration(SignedDuration),
    List(&'a [String]),
}

impl std::fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Flag(b) => write!(f, "{}", b),
            FieldValue::Duration(d) => write!(f, "{}", humantime::format_duration(*d)),
            FieldValue::SignedDuration(d) => write!(f, "{}", d),
            FieldValue::List(items) => write!(f, "{}", items.join(",")),
        }
    }
}

/// Constraint attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Text must not be empty.
    Required,
    /// Text must be one of the listed values, compared exactly.
    OneOf(&'static [&'static str]),
    /// Duration must not be below zero.
    NonNegative,
    /// Duration must be at least the given value.
    AtLeast(Duration),
    Unconstrained,
}

/// One row of the field table.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: Field,
    /// Dotted path, matching the decoder key layout.
    pub path: &'static str,
    /// Environment variable that overrides this field.
    pub env_key: &'static str,
    pub rule: Rule,
    /// Whether `validate_config` fails on this rule.
    pub enforced: bool,
}

/// The field table. Enforced rows run in this order.
pub static FIELDS: &[FieldSpec] = &[
    FieldSpec {
        field: Field::ServiceName,
        path: "service_name",
        env_key: "OBSERVABILITY_SERVICE_NAME",
        rule: Rule::Required,
        enforced: true,
    },
    FieldSpec {
        field: Field::Environment,
        path: "environment",
        env_key: "OBSERVABILITY_ENVIRONMENT",
        rule: Rule::Required,
        enforced: false,
    },
    FieldSpec {
        field: Field::LoggingLevel,
        path: "logging.level",
        env_key: "OBSERVABILITY_LOGGING_LEVEL",
        rule: Rule::OneOf(LOG_LEVELS),
        enforced: true,
    },
    FieldSpec {
        field: Field::LoggingFormat,
        path: "logging.format",
        env_key: "OBSERVABILITY_LOGGING_FORMAT",
        rule: Rule::Required,
        enforced: false,
    },
    FieldSpec {
        field: Field::SlowQueryThreshold,
        path: "logging.slow_query_threshold",
        env_key: "OBSERVABILITY_LOGGING_SLOW_QUERY_THRESHOLD",
        rule: Rule::NonNegative,
        enforced: true,
    },
    FieldSpec {
        field: Field::LicenseKey,
        path: "external_apm.license_key",
        env_key: "OBSERVABILITY_EXTERNAL_APM_LICENSE_KEY",
        rule: Rule::Required,
        enforced: false,
    },
    FieldSpec {
        field: Field::AppLogForwarding,
        path: "external_apm.app_log_forwarding_enabled",
        env_key: "OBSERVABILITY_EXTERNAL_APM_APP_LOG_FORWARDING_ENABLED",
        rule: Rule::Unconstrained,
        enforced: false,
    },
    FieldSpec {
        field: Field::DistributedTracing,
        path: "external_apm.distributed_tracing_enabled",
        env_key: "OBSERVABILITY_EXTERNAL_APM_DISTRIBUTED_TRACING_ENABLED",
        rule: Rule::Unconstrained,
        enforced: false,
    },
    FieldSpec {
        field: Field::ApmDebugLogging,
        path: "external_apm.debug_logging",
        env_key: "OBSERVABILITY_EXTERNAL_APM_DEBUG_LOGGING",
        rule: Rule::Unconstrained,
        enforced: false,
    },
    FieldSpec {
        field: Field::HealthChecksEnabled,
        path: "health_checks.enabled",
        env_key: "OBSERVABILITY_HEALTH_CHECKS_ENABLED",
        rule: Rule::Unconstrained,
        enforced: false,
    },
    FieldSpec {
        field: Field::HealthChecksInterval,
        path: "health_checks.interval",
        env_key: "OBSERVABILITY_HEALTH_CHECKS_INTERVAL",
        rule: Rule::AtLeast(HEALTH_CHECK_MIN_PERIOD),
        enforced: false,
    },
    FieldSpec {
        field: Field::HealthChecksTimeout,
        path: "health_checks.timeout",
        env_key: "OBSERVABILITY_HEALTH_CHECKS_TIMEOUT",
        rule: Rule::AtLeast(HEALTH_CHECK_MIN_PERIOD),
        enforced: false,
    },
    FieldSpec {
        field: Field::HealthChecks,
        path: "health_checks.checks",
        env_key: "OBSERVABILITY_HEALTH_CHECKS_CHECKS",
        rule: Rule::Unconstrained,
        enforced: false,
    },
];

impl Field {
    /// Read the current value of this field.
    pub fn read(self, config: &ObservabilityConfig) -> FieldValue<'_> {
        match self {
            Field::ServiceName => FieldValue::Text(&config.service_name),
            Field::Environment => FieldValue::Text(&config.environment),
            Field::LoggingLevel => FieldValue::Text(&config.logging.level),
            Field::LoggingFormat => FieldValue::Text(&config.logging.format),
            Field::SlowQueryThreshold => {
                FieldValue::SignedDuration(config.logging.slow_query_threshold)
            }
            Field::LicenseKey => FieldValue::Text(&config.external_apm.license_key),
            Field::AppLogForwarding => {
                FieldValue::Flag(config.external_apm.app_log_forwarding_enabled)
            }
            Field::DistributedTracing => {
                FieldValue::Flag(config.external_apm.distributed_tracing_enabled)
            }
            Field::ApmDebugLogging => FieldValue::Flag(config.external_apm.debug_logging),
            Field::HealthChecksEnabled => FieldValue::Flag(config.health_checks.enabled),
            Field::HealthChecksInterval => FieldValue::Duration(config.health_checks.interval),
            Field::HealthChecksTimeout => FieldValue::Duration(config.health_checks.timeout),
            Field::HealthChecks => FieldValue::List(&config.health_checks.checks),
        }
    }

    /// Decode `raw` and store it in this field.
    pub fn write(self, config: &mut ObservabilityConfig, raw: &str) -> Result<(), String> {
        match self {
            Field::ServiceName => config.service_name = raw.to_string(),
            Field::Environment => config.environment = raw.to_string(),
            Field::LoggingLevel => config.logging.level = raw.to_string(),
            Field::LoggingFormat => config.logging.format = raw.to_string(),
            Field::SlowQueryThreshold => {
                config.logging.slow_query_threshold = raw.parse().map_err(|e| {
                    format!("invalid duration {:?}: {}", raw, e)
                })?
            }
            Field::LicenseKey => config.external_apm.license_key = raw.to_string(),
            Field::AppLogForwarding => {
                config.external_apm.app_log_forwarding_enabled = parse_flag(raw)?
            }
            Field::DistributedTracing => {
                config.external_apm.distributed_tracing_enabled = parse_flag(raw)?
            }
            Field::ApmDebugLogging => config.external_apm.debug_logging = parse_flag(raw)?,
            Field::HealthChecksEnabled => config.health_checks.enabled = parse_flag(raw)?,
            Field::HealthChecksInterval => config.health_checks.interval = parse_duration(raw)?,
            Field::HealthChecksTimeout => config.health_checks.timeout = parse_duration(raw)?,
            Field::HealthChecks => {
                config.health_checks.checks = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(String::from)
                    .collect()
            }
        }
        Ok(())
    }
}

impl FieldSpec {
    /// Check this row's rule against the config, ignoring `enforced`.
    pub fn check(&self, config: &ObservabilityConfig) -> Result<(), ValidationError> {
        let value = self.field.read(config);
        let invalid = |reason: String| ValidationError::InvalidValue {
            field: self.path,
            value: value.to_string(),
            reason,
        };

        match (self.rule, value) {
            (Rule::Required, FieldValue::Text(s)) if s.is_empty() => {
                Err(ValidationError::MissingField { field: self.path })
            }
            (Rule::OneOf(allowed), FieldValue::Text(s)) if !allowed.contains(&s) => Err(invalid(
                format!("must be one of: {}", allowed.join(", ")),
            )),
            (Rule::NonNegative, FieldValue::SignedDuration(d)) if d.is_negative() => {
                Err(invalid("must be non-negative".to_string()))
            }
            (Rule::AtLeast(min), FieldValue::Duration(d)) if d < min => Err(invalid(format!(
                "must be at least {}",
                humantime::format_duration(min)
            ))),
            _ => Ok(()),
        }
    }
}

fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(format!("expected true/false/1/0, got {:?}", raw)),
    }
}

fn parse_duration(raw: &str) -> Result<Duration, String> {
    humantime::parse_duration(raw.trim()).map_err(|e| format!("invalid duration {:?}: {}", raw, e))
}
