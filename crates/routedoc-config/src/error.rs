//! Errors raised while layering routedoc configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Failure in one of the configuration layers (file, string, env) or in
/// the final validation of the merged result.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `with_file` was given a path that does not exist.
    #[error("no configuration file at {path}")]
    FileNotFound {
        /// Requested path.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("cannot read configuration file {path}")]
    ReadError {
        /// File being read.
        path: PathBuf,
        /// I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A TOML layer did not match the configuration schema.
    #[error("invalid TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// A JSON layer did not match the configuration schema.
    #[error("invalid JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A field holds a value the documentation layer cannot use, such as a
    /// relative `docs.base_path` or an unknown scheme.
    #[error("{field}: {reason}")]
    InvalidValue {
        /// Dotted field path, e.g. `docs.ui_path`.
        field: String,
        /// What is wrong with the value.
        reason: String,
    },

    /// A `PREFIX__SECTION__KEY` override could not be converted.
    #[error("environment override {var} rejected: {reason}")]
    EnvParseError {
        /// Variable name.
        var: String,
        /// Conversion failure.
        reason: String,
    },

    /// The loader was misused, e.g. an unsupported format name.
    #[error("configuration rejected: {0}")]
    ValidationError(String),
}

impl ConfigError {
    /// Missing file at `path`.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Unreadable file at `path`.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Bad value for `field`.
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Unconvertible environment override.
    pub fn env_parse_error(var: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::EnvParseError {
            var: var.into(),
            reason: reason.into(),
        }
    }

    /// Rejected configuration.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors_convert() {
        let err: ConfigError = toml::from_str::<toml::Table>("= broken").unwrap_err().into();
        assert!(matches!(err, ConfigError::TomlError(_)));

        let err: ConfigError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, ConfigError::JsonError(_)));
    }

    #[test]
    fn test_file_not_found_error() {
        let err = ConfigError::file_not_found("/path/to/config.toml");
        assert!(err.to_string().contains("/path/to/config.toml"));
    }

    #[test]
    fn test_invalid_value_error() {
        let err = ConfigError::invalid_value("docs.base_path", "must start with '/'");
        assert!(err.to_string().contains("docs.base_path"));
        assert!(err.to_string().contains("must start with"));
    }

    #[test]
    fn test_env_parse_error() {
        let err = ConfigError::env_parse_error(
            "ROUTEDOC__DOCS__PARSE_ROUTE_PARAMETERS",
            "expected boolean",
        );
        assert!(err.to_string().contains("ROUTEDOC__DOCS__PARSE_ROUTE_PARAMETERS"));
        assert!(err.to_string().contains("expected boolean"));
    }

    #[test]
    fn test_validation_error() {
        let err = ConfigError::validation_error("unsupported configuration format: yaml");
        assert!(err.to_string().contains("unsupported configuration format: yaml"));
    }
}
