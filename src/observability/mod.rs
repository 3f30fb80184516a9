//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! ObservabilityConfig (validated)
//!     → logging.rs (filter from effective level, JSON or text output)
//!     → tracing events from every module
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - `RUST_LOG` wins over the configured level when set

pub mod logging;
