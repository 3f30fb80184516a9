//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize over defaults)
//!     → fields.rs (OBSERVABILITY_* env overrides)
//!     → validation.rs (semantic checks, advisories)
//!     → ObservabilityConfig (validated, immutable)
//!     → read by logging, APM and health check consumers
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no hot reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - One field table drives both override decoding and validation

pub mod duration;
pub mod fields;
pub mod loader;
pub mod schema;
pub mod validation;

pub use duration::SignedDuration;
pub use loader::{load_config, ConfigError};
pub use schema::default_config;
pub use schema::ExternalApmConfig;
pub use schema::HealthChecksConfig;
pub use schema::LoggingConfig;
pub use schema::ObservabilityConfig;
pub use validation::{validate_config, ValidationError};
