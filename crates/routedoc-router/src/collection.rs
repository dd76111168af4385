//! Route registration.
//!
//! This module provides [`RouteCollection`], the ordered store of routes the
//! documentation layer walks when it assembles a document.

use std::ops::{Index, IndexMut};

use http::Method;

use crate::error::RouteResult;
use crate::method_set::MethodSet;
use crate::route::{Route, RouteAction, RouteDefinition};

/// Position of a route inside a [`RouteCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteId(usize);

impl RouteId {
    /// Index of the route in registration order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Routes in registration order.
///
/// # Example
///
/// ```rust
/// use routedoc_router::{RouteCollection, RouteAction, RouteDefinition};
/// use http::Method;
///
/// let mut routes = RouteCollection::new();
/// let id = routes
///     .add(&[Method::GET], "/users/{id}", RouteAction::controller("UserController", "show"))
///     .unwrap();
///
/// assert_eq!(routes.len(), 1);
/// assert_eq!(routes.get(id).unwrap().uri(), "users/{id}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteCollection {
    routes: Vec<Route>,
}

impl RouteCollection {
    /// Creates a new empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a route for the given methods.
    ///
    /// A GET route also answers HEAD, matching how routers register them.
    pub fn add(
        &mut self,
        methods: &[Method],
        uri: &str,
        action: RouteAction,
    ) -> RouteResult<RouteId> {
        let mut set: MethodSet = methods.iter().collect();
        if set.contains(&Method::GET) {
            set.insert(&Method::HEAD);
        }
        Ok(self.push(Route::new(set, uri, action)?))
    }

    /// Registers a route answering every documentable method.
    pub fn any(&mut self, uri: &str, action: RouteAction) -> RouteResult<RouteId> {
        Ok(self.push(Route::new(MethodSet::all(), uri, action)?))
    }

    /// Appends an already built route.
    pub fn push(&mut self, route: Route) -> RouteId {
        tracing::debug!(
            uri = %route.uri(),
            action = %route.action(),
            "Registering route"
        );
        self.routes.push(route);
        RouteId(self.routes.len() - 1)
    }

    /// Returns the route registered under `id`.
    #[must_use]
    pub fn get(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.0)
    }

    /// Returns mutable access to the route registered under `id`.
    pub fn get_mut(&mut self, id: RouteId) -> Option<&mut Route> {
        self.routes.get_mut(id.0)
    }

    /// Finds a route by its name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name() == Some(name))
    }

    /// Iterates routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (RouteId, &Route)> {
        self.routes.iter().enumerate().map(|(i, r)| (RouteId(i), r))
    }

    /// Returns the number of routes registered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no routes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Index<RouteId> for RouteCollection {
    type Output = Route;

    fn index(&self, id: RouteId) -> &Route {
        &self.routes[id.0]
    }
}

impl IndexMut<RouteId> for RouteCollection {
    fn index_mut(&mut self, id: RouteId) -> &mut Route {
        &mut self.routes[id.0]
    }
}
