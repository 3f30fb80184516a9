//! Observability configuration for backend services.

pub mod config;
pub mod observability;

pub use config::schema::{default_config, ObservabilityConfig};
pub use config::validation::ValidationError;
