//! Main configuration types.
//!
//! This module provides the top-level [`RoutedocConfig`] struct and its builder.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, DocsConfig, LogFormat, TelemetryConfigSection, ALLOWED_SCHEMES};

/// Complete routedoc configuration.
///
/// Use [`ConfigLoader`](crate::ConfigLoader) to load configuration from files
/// and environment variables.
///
/// # Example
///
/// ```
/// use routedoc_config::RoutedocConfig;
///
/// let config = RoutedocConfig::default();
/// assert!(config.docs.parse_route_parameters);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct RoutedocConfig {
    /// Documentation configuration.
    #[serde(default)]
    pub docs: DocsConfig,

    /// Telemetry configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfigSection,
}

impl RoutedocConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> RoutedocConfigBuilder {
        RoutedocConfigBuilder::new()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if:
    /// - The title is empty
    /// - `base_path` or `ui_path` does not start with `/`
    /// - A scheme is not one of http, https, ws, wss
    /// - The log level is not a valid filter directive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let docs = &self.docs;

        if docs.title.trim().is_empty() {
            return Err(ConfigError::invalid_value("docs.title", "must not be empty"));
        }

        if let Some(base_path) = &docs.base_path {
            if !base_path.starts_with('/') {
                return Err(ConfigError::invalid_value(
                    "docs.base_path",
                    format!("must start with '/': {base_path}"),
                ));
            }
        }

        if !docs.ui_path.starts_with('/') {
            return Err(ConfigError::invalid_value(
                "docs.ui_path",
                format!("must start with '/': {}", docs.ui_path),
            ));
        }

        if let Some(scheme) = docs
            .schemes
            .iter()
            .find(|s| !ALLOWED_SCHEMES.contains(&s.as_str()))
        {
            return Err(ConfigError::invalid_value(
                "docs.schemes",
                format!("unsupported scheme '{scheme}', expected one of {ALLOWED_SCHEMES:?}"),
            ));
        }

        let logging = &self.telemetry.logging;
        if logging.enabled {
            routedoc_telemetry::create_env_filter(&logging.level)
                .map_err(|e| ConfigError::invalid_value("telemetry.logging.level", e.to_string()))?;
        }

        Ok(())
    }

    /// Development preset: pretty debug logs with source locations.
    ///
    /// # Example
    ///
    /// ```
    /// use routedoc_config::RoutedocConfig;
    ///
    /// let config = RoutedocConfig::development();
    /// assert_eq!(config.telemetry.logging.level, "debug");
    /// ```
    #[must_use]
    pub fn development() -> Self {
        let mut config = Self::default();

        config.telemetry.logging.level = "debug".to_string();
        config.telemetry.logging.format = LogFormat::Pretty;
        config.telemetry.logging.ansi_enabled = true;
        config.telemetry.logging.include_location = true;

        config
    }

    /// Production preset: JSON info logs, documents advertised over https.
    ///
    /// # Example
    ///
    /// ```
    /// use routedoc_config::{LogFormat, RoutedocConfig};
    ///
    /// let config = RoutedocConfig::production();
    /// assert_eq!(config.telemetry.logging.format, LogFormat::Json);
    /// ```
    #[must_use]
    pub fn production() -> Self {
        let mut config = Self::default();

        config.telemetry.logging.level = "info".to_string();
        config.telemetry.logging.format = LogFormat::Json;
        config.telemetry.logging.ansi_enabled = false;

        config.docs.schemes = vec!["https".to_string()];

        config
    }
}

/// Builder for [`RoutedocConfig`].
#[derive(Debug, Default)]
pub struct RoutedocConfigBuilder {
    docs: Option<DocsConfig>,
    telemetry: Option<TelemetryConfigSection>,
}

impl RoutedocConfigBuilder {
    /// Create a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the documentation configuration.
    #[must_use]
    pub fn docs(mut self, docs: DocsConfig) -> Self {
        self.docs = Some(docs);
        self
    }

    /// Set the telemetry configuration.
    #[must_use]
    pub fn telemetry(mut self, telemetry: TelemetryConfigSection) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    /// Build the configuration. Unset sections use their defaults.
    #[must_use]
    pub fn build(self) -> RoutedocConfig {
        RoutedocConfig {
            docs: self.docs.unwrap_or_default(),
            telemetry: self.telemetry.unwrap_or_default(),
        }
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails.
    pub fn build_validated(self) -> Result<RoutedocConfig, ConfigError> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoggingConfig;

    fn with_docs(docs: DocsConfig) -> RoutedocConfig {
        RoutedocConfig::builder().docs(docs).build()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = RoutedocConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.telemetry.logging.level, "info");
    }

    #[test]
    fn test_builder_docs() {
        let config = with_docs(DocsConfig {
            title: "Pets".to_string(),
            ..Default::default()
        });

        assert_eq!(config.docs.title, "Pets");
        // Other sections use defaults
        assert_eq!(config.telemetry, TelemetryConfigSection::default());
    }

    #[test]
    fn test_validate_base_path() {
        let config = with_docs(DocsConfig {
            base_path: Some("api".to_string()),
            ..Default::default()
        });
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("base_path"));

        let config = with_docs(DocsConfig {
            base_path: Some("/api".to_string()),
            ..Default::default()
        });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_ui_path() {
        let config = with_docs(DocsConfig {
            ui_path: "docs".to_string(),
            ..Default::default()
        });
        assert!(config.validate().unwrap_err().to_string().contains("ui_path"));
    }

    #[test]
    fn test_validate_schemes() {
        let config = with_docs(DocsConfig {
            schemes: vec!["https".to_string(), "ftp".to_string()],
            ..Default::default()
        });
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ftp"));
    }

    #[test]
    fn test_validate_empty_title() {
        let config = with_docs(DocsConfig {
            title: "  ".to_string(),
            ..Default::default()
        });
        assert!(config.validate().unwrap_err().to_string().contains("title"));
    }

    #[test]
    fn test_validate_log_level() {
        let config = RoutedocConfig::builder()
            .telemetry(TelemetryConfigSection {
                logging: LoggingConfig {
                    level: "routedoc=loud".to_string(),
                    ..Default::default()
                },
            })
            .build();
        assert!(config.validate().unwrap_err().to_string().contains("level"));
    }

    #[test]
    fn test_presets() {
        let dev = RoutedocConfig::development();
        assert_eq!(dev.telemetry.logging.format, LogFormat::Pretty);
        assert!(dev.telemetry.logging.include_location);
        assert!(dev.validate().is_ok());

        let prod = RoutedocConfig::production();
        assert_eq!(prod.telemetry.logging.format, LogFormat::Json);
        assert_eq!(prod.docs.schemes, vec!["https".to_string()]);
        assert!(prod.validate().is_ok());
    }

    #[test]
    fn test_build_validated() {
        assert!(RoutedocConfig::builder().build_validated().is_ok());

        let result = RoutedocConfig::builder()
            .docs(DocsConfig {
                base_path: Some("relative".to_string()),
                ..Default::default()
            })
            .build_validated();
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_round_trip_sections() {
        let toml_str = toml::to_string_pretty(&RoutedocConfig::default()).unwrap();
        assert!(toml_str.contains("[docs]"));
        assert!(toml_str.contains("[telemetry.logging]"));
    }

    #[test]
    fn test_unknown_section_rejected() {
        let toml_str = r#"
            [server]
            http_addr = "127.0.0.1:8000"
        "#;
        let result: Result<RoutedocConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }
}
