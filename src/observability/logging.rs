//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global tracing subscriber from the observability config
//! - Pick the log level from `RUST_LOG` or the effective configured level
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format when `logging.format = "json"`, plain text otherwise
//! - Installing twice is an error, not a panic

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::ObservabilityConfig;

const FALLBACK_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    Filter(#[from] ParseError),

    #[error("Failed to install tracing subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Output format selected by `logging.format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

impl LogFormat {
    pub fn from_config(config: &ObservabilityConfig) -> Self {
        if config.logging.format.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Filter directive derived from the config, used when `RUST_LOG` is unset.
pub fn filter_directive(config: &ObservabilityConfig) -> &str {
    match config.effective_logging_level() {
        "" => FALLBACK_LEVEL,
        level => level,
    }
}

/// Install the global subscriber, writing to stdout.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), LoggingError> {
    init_logging_to(config, std::io::stdout)
}

/// Install the global subscriber with a custom writer.
pub fn init_logging_to<W>(config: &ObservabilityConfig, writer: W) -> Result<(), LoggingError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_directive(config))?,
    };

    let format = LogFormat::from_config(config);
    let (json, text) = match format {
        LogFormat::Json => (Some(fmt::layer().json().with_writer(writer)), None),
        LogFormat::Text => (None, Some(fmt::layer().with_writer(writer))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .try_init()?;

    tracing::debug!(
        service_name = %config.service_name,
        environment = %config.environment,
        format = ?format,
        "Logging initialized"
    );
    Ok(())
}
