//! File-based configuration loading.

use std::io::Write;

use routedoc_config::{ConfigError, ConfigLoader, LogFormat};
use routedoc_docs::OverrideMode;
use tempfile::NamedTempFile;

fn config_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_toml_file() {
    let file = config_file(
        ".toml",
        r#"
            [docs]
            title = "Pet Store"
            version = "2.1.0"
            host = "api.example.com"
            base_path = "/v2"
            schemes = ["https", "wss"]
            override_mode = "adjusted"

            [telemetry.logging]
            level = "debug"
            format = "pretty"
        "#,
    );

    let config = ConfigLoader::new().with_file(file.path()).unwrap().load().unwrap();

    assert_eq!(config.docs.title, "Pet Store");
    assert_eq!(config.docs.host.as_deref(), Some("api.example.com"));
    assert_eq!(config.docs.base_path.as_deref(), Some("/v2"));
    assert_eq!(config.docs.override_mode, OverrideMode::Adjusted);
    assert!(config.docs.parse_route_parameters);
    assert_eq!(config.telemetry.logging.format, LogFormat::Pretty);
}

#[test]
fn test_load_json_file() {
    let file = config_file(".json", r#"{"docs": {"parse_route_parameters": false}}"#);

    let config = ConfigLoader::new().with_file(file.path()).unwrap().load().unwrap();

    assert!(!config.docs.parse_route_parameters);
    assert_eq!(config.docs.ui_path, "/docs");
}

#[test]
fn test_optional_file_present() {
    let file = config_file(".toml", "[docs]\ntitle = \"Optional\"\n");

    let config = ConfigLoader::new()
        .with_optional_file(file.path())
        .unwrap()
        .load()
        .unwrap();

    assert_eq!(config.docs.title, "Optional");
}

#[test]
fn test_unknown_field_in_file() {
    let file = config_file(".toml", "[docs]\ntitel = \"typo\"\n");

    let result = ConfigLoader::new().with_file(file.path());
    assert!(matches!(result, Err(ConfigError::TomlError(_))));
}

#[test]
fn test_unsupported_extension() {
    let file = config_file(".yaml", "docs: {}\n");

    let result = ConfigLoader::new().with_file(file.path());
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_file_with_invalid_scheme_fails_validation() {
    let file = config_file(".toml", "[docs]\nschemes = [\"gopher\"]\n");

    let result = ConfigLoader::new().with_file(file.path()).unwrap().load();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}
