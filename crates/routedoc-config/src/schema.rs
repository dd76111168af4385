//! Configuration schema types.
//!
//! This module defines the structure of all configuration sections.

use routedoc_docs::{DocsOptions, Info, OverrideMode};
use routedoc_telemetry::LogConfig;
use serde::{Deserialize, Serialize};

/// Schemes a document may advertise.
pub const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "ws", "wss"];

/// Documentation section.
///
/// Controls how routes become operations and the document-level metadata.
///
/// # Example
///
/// ```
/// use routedoc_config::DocsConfig;
///
/// let config: DocsConfig = toml::from_str(r#"
///     title = "Pets"
///     base_path = "/api"
///     override_mode = "adjusted"
/// "#).unwrap();
///
/// assert!(config.parse_route_parameters);
/// assert_eq!(config.base_path.as_deref(), Some("/api"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DocsConfig {
    /// Derive path parameters from route placeholders.
    #[serde(default = "default_true")]
    pub parse_route_parameters: bool,

    /// How shared parameter definitions are attached to operations.
    #[serde(default)]
    pub override_mode: OverrideMode,

    /// API title.
    #[serde(default = "default_title")]
    pub title: String,

    /// API version.
    #[serde(default = "default_version")]
    pub version: String,

    /// API description.
    #[serde(default)]
    pub description: Option<String>,

    /// Host serving the API (e.g., "api.example.com").
    #[serde(default)]
    pub host: Option<String>,

    /// Base path of every operation; must start with `/`.
    #[serde(default)]
    pub base_path: Option<String>,

    /// Transfer protocols (http, https, ws, wss).
    #[serde(default)]
    pub schemes: Vec<String>,

    /// Path the Swagger UI page is served under.
    #[serde(default = "default_ui_path")]
    pub ui_path: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            parse_route_parameters: true,
            override_mode: OverrideMode::default(),
            title: default_title(),
            version: default_version(),
            description: None,
            host: None,
            base_path: None,
            schemes: Vec::new(),
            ui_path: default_ui_path(),
        }
    }
}

impl DocsConfig {
    /// Options handed to the operation builder.
    pub fn options(&self) -> DocsOptions {
        DocsOptions {
            parse_route_parameters: self.parse_route_parameters,
            override_mode: self.override_mode,
        }
    }

    /// Document metadata.
    pub fn info(&self) -> Info {
        Info {
            title: self.title.clone(),
            version: self.version.clone(),
            description: self.description.clone(),
        }
    }
}

fn default_title() -> String {
    "API".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_ui_path() -> String {
    "/docs".to_string()
}

/// Log format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON formatted logs (production).
    #[default]
    Json,
    /// Human-readable pretty format (development).
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Enable logging.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level or filter directive (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include ANSI color codes in output.
    #[serde(default)]
    pub ansi_enabled: bool,

    /// Include source file and line in logs.
    #[serde(default)]
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: LogFormat::default(),
            ansi_enabled: false,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Settings for [`routedoc_telemetry::init_logging`].
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            enabled: self.enabled,
            level: self.level.clone(),
            json_format: self.format == LogFormat::Json,
            ansi: self.ansi_enabled,
            file_line_info: self.include_location,
            include_target: true,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Telemetry configuration section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfigSection {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_true() -> bool {
    true
}
