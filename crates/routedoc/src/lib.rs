//! # Routedoc
//!
//! **Swagger 2.0 documentation generated from HTTP route definitions**
//!
//! Routedoc turns the routes an application registers into a Swagger 2.0
//! document:
//!
//! - **Path parameters from placeholders**: `{id}` and `{id?}` in a route's
//!   domain and URI become path parameters, required or optional
//! - **Shared definitions**: parameters registered once on the server
//!   replace the synthesized ones wherever their placeholder appears
//! - **Operation builder**: query, header, form and body parameters,
//!   responses, validation rules
//! - **Layered configuration**: defaults, TOML/JSON files, environment
//! - **Structured logging** through `tracing`
//!
//! ## Quick Start
//!
//! ```rust
//! use routedoc::prelude::*;
//!
//! # fn main() -> Result<(), RoutedocError> {
//! let mut api = ApiServer::new(DocsOptions::default(), Info::new("Blog", "1.0.0"));
//! api.tag("posts", Some("Blog posts"));
//!
//! api.get("/users/{userId}/posts/{postId?}", "PostController@show_post")?
//!     .tags(["posts"])
//!     .add_query_parameter("expand", "Relations to include", false, SchemaType::String)
//!     .add_response(200, "The post");
//!
//! let doc = api.document()?;
//! let op = doc.paths["/users/{userId}/posts/{postId}"].get.as_ref().unwrap();
//! assert_eq!(op.operation_id.as_deref(), Some("showPost"));
//! assert_eq!(op.parameters().len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crates
//!
//! ```text
//! routedoc-router     routes, actions, URI placeholder tokens
//! routedoc-docs       Swagger model, operation builder, reconciler, UI page
//! routedoc-config     layered configuration
//! routedoc-telemetry  logging setup
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod endpoint;
mod error;
mod server;

pub use endpoint::Endpoint;
pub use error::{RoutedocError, RoutedocResult};
pub use server::{init_logging, ApiServer};

pub use routedoc_config as config;
pub use routedoc_docs as docs;
pub use routedoc_router as router;
pub use routedoc_telemetry as telemetry;

pub use routedoc_config::{ConfigLoader, RoutedocConfig};
pub use routedoc_docs::{
    DocsOptions, Info, Operation, OverrideMode, Parameter, ParameterLocation, SchemaType,
    Swagger, SwaggerUi,
};
pub use routedoc_router::{Route, RouteAction, RouteDefinition};

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use routedoc::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{ApiServer, Endpoint, RoutedocError, RoutedocResult};

    pub use routedoc_config::{ConfigLoader, RoutedocConfig};

    pub use routedoc_docs::{
        DocsOptions, Info, Operation, OverrideMode, Parameter, ParameterDescription,
        ParameterLocation, ParameterOverrides, Response, Schema, SchemaType, Swagger,
        SwaggerUi, Tag,
    };

    pub use routedoc_router::{
        MethodSet, Route, RouteAction, RouteCollection, RouteDefinition, RouteId,
    };
}
