//! Route definitions.
//!
//! A [`Route`] is the registration record the documentation layer reads:
//! methods, URI, optional domain, name, prefix, action and the tags that
//! group its operations. The read side is exposed through the
//! [`RouteDefinition`] trait so other route sources can be documented too.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::{RouteError, RouteResult};
use crate::method_set::MethodSet;

/// Name reported as the action method of closure routes.
pub const CLOSURE_ACTION: &str = "Closure";

/// What a route dispatches to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    /// An inline handler with no addressable method name.
    Closure,
    /// A controller method, written `Controller@method`.
    Controller {
        /// Controller name, possibly namespaced.
        controller: String,
        /// Method invoked on the controller.
        method: String,
    },
}

impl RouteAction {
    /// Creates a controller action.
    #[must_use]
    pub fn controller(controller: impl Into<String>, method: impl Into<String>) -> Self {
        Self::Controller {
            controller: controller.into(),
            method: method.into(),
        }
    }

    /// Returns true for closure actions.
    #[must_use]
    pub fn is_closure(&self) -> bool {
        matches!(self, Self::Closure)
    }

    /// Method name of the action, `"Closure"` for closures.
    #[must_use]
    pub fn method(&self) -> &str {
        match self {
            Self::Closure => CLOSURE_ACTION,
            Self::Controller { method, .. } => method,
        }
    }
}

impl fmt::Display for RouteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closure => f.write_str(CLOSURE_ACTION),
            Self::Controller { controller, method } => write!(f, "{controller}@{method}"),
        }
    }
}

impl FromStr for RouteAction {
    type Err = RouteError;

    /// Parses `Controller@method`; a bare controller name is an invokable
    /// controller and maps to `__invoke`.
    fn from_str(action: &str) -> RouteResult<Self> {
        match action.split_once('@') {
            Some(("", _)) => Err(RouteError::invalid_action(action, "missing controller")),
            Some((_, "")) => Err(RouteError::invalid_action(action, "missing method")),
            Some((controller, method)) => {
                if method.contains('@') {
                    return Err(RouteError::invalid_action(action, "more than one '@'"));
                }
                Ok(Self::controller(controller, method))
            }
            None if action.is_empty() => Err(RouteError::invalid_action(action, "empty action")),
            None => Ok(Self::controller(action, "__invoke")),
        }
    }
}

/// Conversion into a [`RouteAction`], so registration accepts either a
/// parsed action or its `Controller@method` text.
pub trait IntoRouteAction {
    /// Performs the conversion.
    fn into_route_action(self) -> RouteResult<RouteAction>;
}

impl IntoRouteAction for RouteAction {
    fn into_route_action(self) -> RouteResult<RouteAction> {
        Ok(self)
    }
}

impl IntoRouteAction for &str {
    fn into_route_action(self) -> RouteResult<RouteAction> {
        self.parse()
    }
}

impl IntoRouteAction for String {
    fn into_route_action(self) -> RouteResult<RouteAction> {
        self.parse()
    }
}

/// Read access to a route, as needed to document it.
///
/// Implemented by [`Route`]; other route sources implement it to be fed to
/// the operation builder directly.
pub trait RouteDefinition {
    /// HTTP methods the route answers to.
    fn methods(&self) -> MethodSet;

    /// Route URI, without a leading slash (except for the root route `/`).
    fn uri(&self) -> &str;

    /// Domain constraint, which may carry placeholders of its own.
    fn domain(&self) -> Option<&str>;

    /// Route name.
    fn name(&self) -> Option<&str>;

    /// Prefix applied to the URI.
    fn prefix(&self) -> Option<&str>;

    /// Dispatch target.
    fn action(&self) -> &RouteAction;

    /// Tags grouping the route's operations.
    fn tags(&self) -> &[String];

    /// Method name of the action (`"Closure"` for closures).
    fn action_method(&self) -> &str {
        self.action().method()
    }

    /// The string scanned for placeholders: domain followed by URI.
    fn template(&self) -> String {
        format!("{}{}", self.domain().unwrap_or_default(), self.uri())
    }
}

/// A registered route.
///
/// # Example
///
/// ```rust
/// use routedoc_router::{MethodSet, Route, RouteAction, RouteDefinition};
///
/// let mut route = Route::new(
///     MethodSet::new().get(),
///     "/users/{id}",
///     "UserController@show".parse().unwrap(),
/// )
/// .unwrap();
/// route.set_prefix("api").set_name("users.show");
///
/// assert_eq!(route.uri(), "api/users/{id}");
/// assert_eq!(route.action_method(), "show");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    methods: MethodSet,
    uri: String,
    domain: Option<String>,
    name: Option<String>,
    prefix: Option<String>,
    action: RouteAction,
    tags: Vec<String>,
    wheres: IndexMap<String, String>,
    middleware: Vec<String>,
    defaults: IndexMap<String, String>,
}

impl Route {
    /// Creates a route.
    ///
    /// The URI is trimmed of surrounding slashes; an empty URI becomes `/`.
    pub fn new(methods: MethodSet, uri: &str, action: RouteAction) -> RouteResult<Self> {
        let uri = normalize_uri(uri);
        if methods.is_empty() {
            return Err(RouteError::NoMethods { uri });
        }

        Ok(Self {
            methods,
            uri,
            domain: None,
            name: None,
            prefix: None,
            action,
            tags: Vec::new(),
            wheres: IndexMap::new(),
            middleware: Vec::new(),
            defaults: IndexMap::new(),
        })
    }

    /// Appends to the route name, so group names compose (`users.` + `show`).
    pub fn set_name(&mut self, name: &str) -> &mut Self {
        match &mut self.name {
            Some(existing) => existing.push_str(name),
            None => self.name = Some(name.to_string()),
        }
        self
    }

    /// Prepends a prefix to the URI and records it.
    pub fn set_prefix(&mut self, prefix: &str) -> &mut Self {
        let recorded = match self.prefix.take() {
            Some(existing) => format!(
                "{}/{}",
                prefix.trim_end_matches('/'),
                existing.trim_start_matches('/')
            ),
            None => prefix.to_string(),
        };
        let recorded = recorded.trim_matches('/').to_string();
        self.prefix = (!recorded.is_empty()).then_some(recorded);

        let uri = format!(
            "{}/{}",
            prefix.trim_end_matches('/'),
            self.uri.trim_start_matches('/')
        );
        self.uri = normalize_uri(&uri);
        self
    }

    /// Sets or clears the domain constraint.
    pub fn set_domain(&mut self, domain: Option<&str>) -> &mut Self {
        self.domain = domain.map(str::to_string);
        self
    }

    /// Replaces the URI.
    pub fn set_uri(&mut self, uri: &str) -> &mut Self {
        self.uri = normalize_uri(uri);
        self
    }

    /// Replaces the action.
    pub fn set_action(&mut self, action: RouteAction) -> &mut Self {
        self.action = action;
        self
    }

    /// Adds a placeholder constraint.
    pub fn add_where(&mut self, name: &str, expression: &str) -> &mut Self {
        self.wheres.insert(name.to_string(), expression.to_string());
        self
    }

    /// Adds middleware names, skipping ones already attached.
    pub fn add_middleware<I, S>(&mut self, middleware: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in middleware {
            let name = name.into();
            if !self.middleware.contains(&name) {
                self.middleware.push(name);
            }
        }
        self
    }

    /// Adds tags, skipping ones already attached.
    pub fn add_tags<I, S>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            let tag = tag.into();
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
        self
    }

    /// Sets a default value for a placeholder.
    pub fn set_default(&mut self, key: &str, value: &str) -> &mut Self {
        self.defaults.insert(key.to_string(), value.to_string());
        self
    }

    /// Placeholder constraints.
    pub fn wheres(&self) -> &IndexMap<String, String> {
        &self.wheres
    }

    /// Attached middleware.
    pub fn middleware(&self) -> &[String] {
        &self.middleware
    }

    /// Placeholder defaults.
    pub fn defaults(&self) -> &IndexMap<String, String> {
        &self.defaults
    }

    /// Full action name, `Controller@method` or `Closure`.
    pub fn action_name(&self) -> String {
        self.action.to_string()
    }
}

impl RouteDefinition for Route {
    fn methods(&self) -> MethodSet {
        self.methods
    }

    fn uri(&self) -> &str {
        &self.uri
    }

    fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    fn action(&self) -> &RouteAction {
        &self.action
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

fn normalize_uri(uri: &str) -> String {
    let trimmed = uri.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
