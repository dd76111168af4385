//! # Routedoc Docs
//!
//! Swagger 2.0 documentation built from route definitions.
//!
//! This crate provides:
//! - **Swagger model**: the document, path items, operations, parameters
//! - **Operation builder**: parameter registration keyed by (location, name)
//! - **Parameter reconciliation**: path parameters derived from URI
//!   placeholders, with shared definitions substituted by placeholder
//! - **Rule introspection**: validation rule strings mapped onto parameters
//! - **Swagger UI**: a page rendering the document
//!
//! ## Quick Start
//!
//! ```rust
//! use routedoc_docs::{DocsOptions, Operation, ParameterOverrides, SchemaType};
//! use routedoc_router::{MethodSet, Route};
//!
//! let route = Route::new(
//!     MethodSet::new().get(),
//!     "/users/{id}",
//!     "UserController@show_user".parse().unwrap(),
//! )
//! .unwrap();
//!
//! let mut op = Operation::new();
//! op.set_route(&route, &ParameterOverrides::new(), &DocsOptions::default())
//!     .add_query_parameter("expand", "Relations to include", false, SchemaType::String)
//!     .add_response(200, "The user");
//!
//! assert_eq!(op.operation_id.as_deref(), Some("showUser"));
//! assert_eq!(op.parameters().len(), 2);
//! ```

mod error;
mod operation;
mod reconcile;
mod rules;
mod swagger;
mod ui;

pub use error::{DocsError, DocsResult};
pub use operation::{
    camel_case, DocsOptions, Operation, ParameterDescription, BODY_PARAMETER, FORM_URLENCODED,
    MULTIPART_FORM_DATA,
};
pub use reconcile::{reconcile, OverrideMode, ParameterOverrides};
pub use rules::{Rule, RuleSet};
pub use swagger::{
    Constraints, Info, Items, Parameter, ParameterLocation, PathItem, Response, Schema,
    SchemaType, Swagger, Tag,
};
pub use ui::{DocExpansion, SwaggerUi, DEFAULT_SWAGGER_UI_VERSION};
