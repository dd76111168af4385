//! Route definitions for routedoc.
//!
//! This crate holds the routing side of the documentation adapter: the
//! routes an application registers, and the placeholder tokens in their URI
//! templates.
//!
//! # Features
//!
//! - **Route records**: methods, URI, domain, name, prefix, action, tags
//! - **Explicit interface**: [`RouteDefinition`] lists everything the
//!   documentation layer reads from a route
//! - **URI templates**: `{name}` and `{name?}` tokens in template order
//!
//! # Example
//!
//! ```rust
//! use routedoc_router::{path_tokens, RouteCollection, RouteAction, RouteDefinition};
//! use http::Method;
//!
//! let mut routes = RouteCollection::new();
//! let action = "PostController@show".parse().unwrap();
//! let id = routes
//!     .add(&[Method::GET], "/users/{userId}/posts/{postId?}", action)
//!     .unwrap();
//!
//! let route = routes.get(id).unwrap();
//! let tokens = path_tokens(&route.template());
//! assert_eq!(tokens.len(), 2);
//! assert!(!tokens[1].required);
//! ```

mod collection;
mod error;
mod method_set;
mod route;
mod template;

pub use collection::{RouteCollection, RouteId};
pub use error::{RouteError, RouteResult};
pub use method_set::MethodSet;
pub use route::{IntoRouteAction, Route, RouteAction, RouteDefinition, CLOSURE_ACTION};
pub use template::{path_tokens, strip_optional_markers, PathToken, PathTokens};
