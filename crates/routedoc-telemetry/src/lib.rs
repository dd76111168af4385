//! Logging setup for routedoc.
//!
//! Document assembly reports through `tracing`: route registration, skipped
//! validation rules and operations placed in the document are logged at
//! `debug`, finished documents at `info`. This crate installs a
//! `tracing-subscriber` registry that writes those events as JSON or as
//! human-readable text.
//!
//! # Example
//!
//! ```rust,no_run
//! use routedoc_telemetry::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::development())?;
//! tracing::info!("Documentation ready");
//! # Ok::<(), routedoc_telemetry::TelemetryError>(())
//! ```

pub mod error;
pub mod logging;

pub use error::TelemetryError;
pub use logging::{create_env_filter, init_logging, LogConfig};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
