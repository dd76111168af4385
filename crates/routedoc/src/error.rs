//! Facade error type.

use routedoc_config::ConfigError;
use routedoc_docs::DocsError;
use routedoc_router::RouteError;
use routedoc_telemetry::TelemetryError;
use thiserror::Error;

/// Errors surfaced by [`ApiServer`](crate::ApiServer) and [`Endpoint`](crate::Endpoint).
#[derive(Debug, Error)]
pub enum RoutedocError {
    /// A route could not be registered.
    #[error(transparent)]
    Route(#[from] RouteError),

    /// The document could not be built or serialized.
    #[error(transparent)]
    Docs(#[from] DocsError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
}

/// Result type for facade operations.
pub type RoutedocResult<T> = Result<T, RoutedocError>;
