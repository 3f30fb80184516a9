//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check required values and allowed sets
//! - Validate value ranges (slow query threshold >= 0)
//!
//! # Design Decisions
//! - Stops at the first violation and returns it
//! - Validation is pure function: ObservabilityConfig → Result<(), ValidationError>
//! - Only rules marked `enforced` in the field table are checked; the rest
//!   are reported as advisories by the loader
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::fields::FIELDS;
use crate::config::schema::ObservabilityConfig;

/// A single configuration validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// A field holds a value outside its allowed range or set.
    #[error("invalid {field}: {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl ValidationError {
    /// Dotted path of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field } => *field,
            ValidationError::InvalidValue { field, .. } => *field,
        }
    }
}

/// Validate a configuration, failing on the first enforced rule it breaks.
pub fn validate_config(config: &ObservabilityConfig) -> Result<(), ValidationError> {
    FIELDS
        .iter()
        .filter(|spec| spec.enforced)
        .try_for_each(|spec| spec.check(config))
}

/// Declared constraints the configuration breaks but which are not enforced.
pub fn advisories(config: &ObservabilityConfig) -> Vec<ValidationError> {
    FIELDS
        .iter()
        .filter(|spec| !spec.enforced)
        .filter_map(|spec| spec.check(config).err())
        .collect()
}

impl ObservabilityConfig {
    /// See [`validate_config`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_config(self)
    }
}
