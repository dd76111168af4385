//! Typed configuration for routedoc.
//!
//! This crate provides a strongly-typed configuration with support for:
//! - TOML and JSON configuration files
//! - Environment variable overrides
//! - Strict validation (fails on unknown fields)
//! - Layered configuration (defaults → file → env)
//!
//! # Overview
//!
//! [`RoutedocConfig`] holds two sections:
//!
//! - [`DocsConfig`] - how routes become operations, and document metadata
//! - [`TelemetryConfigSection`] - logging settings
//!
//! # Example
//!
//! ```no_run
//! use routedoc_config::ConfigLoader;
//!
//! # fn main() -> Result<(), routedoc_config::ConfigError> {
//! let config = ConfigLoader::new()
//!     .with_defaults()
//!     .with_optional_file("routedoc.toml")?
//!     .with_env_prefix("ROUTEDOC")
//!     .load()?;
//!
//! println!("Swagger UI at {}", config.docs.ui_path);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! [docs]
//! parse_route_parameters = true
//! override_mode = "passthrough"
//! title = "Pet Store"
//! version = "2.1.0"
//! host = "api.example.com"
//! base_path = "/v2"
//! schemes = ["https"]
//! ui_path = "/docs"
//!
//! [telemetry.logging]
//! enabled = true
//! level = "info"
//! format = "json"
//! ```
//!
//! # Environment Variable Overrides
//!
//! Values can be overridden with variables named `PREFIX__SECTION__KEY`:
//!
//! - `ROUTEDOC__DOCS__PARSE_ROUTE_PARAMETERS=false`
//! - `ROUTEDOC__DOCS__OVERRIDE_MODE=adjusted`
//! - `ROUTEDOC__TELEMETRY__LOGGING__LEVEL=debug`

mod config;
mod error;
mod loader;
mod schema;

pub use config::*;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
