//! HTTP method sets for route definitions.
//!
//! This module provides [`MethodSet`], the set of HTTP methods a single
//! route answers to. Only the methods a Swagger 2.0 path item can describe
//! are tracked; anything else is rejected on insert.

use http::Method;

/// The HTTP methods registered for a single route.
///
/// Iteration always follows the canonical order GET, POST, PUT, DELETE,
/// PATCH, HEAD, OPTIONS regardless of insertion order.
///
/// # Example
///
/// ```rust
/// use routedoc_router::MethodSet;
/// use http::Method;
///
/// let methods = MethodSet::new().get().post();
///
/// assert!(methods.contains(&Method::GET));
/// assert!(methods.contains(&Method::POST));
/// assert!(!methods.contains(&Method::DELETE));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MethodSet {
    get: bool,
    post: bool,
    put: bool,
    delete: bool,
    patch: bool,
    head: bool,
    options: bool,
}

impl MethodSet {
    /// Creates a new empty method set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every documentable method, as registered by `any` routes.
    #[must_use]
    pub fn all() -> Self {
        Self {
            get: true,
            post: true,
            put: true,
            delete: true,
            patch: true,
            head: true,
            options: true,
        }
    }

    /// Adds GET.
    #[must_use]
    pub fn get(mut self) -> Self {
        self.get = true;
        self
    }

    /// Adds POST.
    #[must_use]
    pub fn post(mut self) -> Self {
        self.post = true;
        self
    }

    /// Adds PUT.
    #[must_use]
    pub fn put(mut self) -> Self {
        self.put = true;
        self
    }

    /// Adds DELETE.
    #[must_use]
    pub fn delete(mut self) -> Self {
        self.delete = true;
        self
    }

    /// Adds PATCH.
    #[must_use]
    pub fn patch(mut self) -> Self {
        self.patch = true;
        self
    }

    /// Adds HEAD.
    #[must_use]
    pub fn head(mut self) -> Self {
        self.head = true;
        self
    }

    /// Adds OPTIONS.
    #[must_use]
    pub fn options(mut self) -> Self {
        self.options = true;
        self
    }

    /// Inserts a method into the set.
    ///
    /// Returns `false` when the method cannot be documented (TRACE, CONNECT
    /// and extension methods) and leaves the set unchanged.
    pub fn insert(&mut self, method: &Method) -> bool {
        let slot = match *method {
            Method::GET => &mut self.get,
            Method::POST => &mut self.post,
            Method::PUT => &mut self.put,
            Method::DELETE => &mut self.delete,
            Method::PATCH => &mut self.patch,
            Method::HEAD => &mut self.head,
            Method::OPTIONS => &mut self.options,
            _ => return false,
        };
        *slot = true;
        true
    }

    /// Returns true if the method is part of the set.
    #[must_use]
    pub fn contains(&self, method: &Method) -> bool {
        match *method {
            Method::GET => self.get,
            Method::POST => self.post,
            Method::PUT => self.put,
            Method::DELETE => self.delete,
            Method::PATCH => self.patch,
            Method::HEAD => self.head,
            Method::OPTIONS => self.options,
            _ => false,
        }
    }

    /// Returns true if no methods are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.get
            || self.post
            || self.put
            || self.delete
            || self.patch
            || self.head
            || self.options)
    }

    /// Returns the registered methods in canonical order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Method> {
        let flags = [
            (self.get, Method::GET),
            (self.post, Method::POST),
            (self.put, Method::PUT),
            (self.delete, Method::DELETE),
            (self.patch, Method::PATCH),
            (self.head, Method::HEAD),
            (self.options, Method::OPTIONS),
        ];
        flags
            .into_iter()
            .filter_map(|(set, method)| set.then_some(method))
            .collect()
    }
}

impl<'a> FromIterator<&'a Method> for MethodSet {
    fn from_iter<I: IntoIterator<Item = &'a Method>>(iter: I) -> Self {
        let mut set = Self::new();
        for method in iter {
            set.insert(method);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_set_new() {
        let set = MethodSet::new();
        assert!(set.is_empty());
        assert!(set.to_vec().is_empty());
    }

    #[test]
    fn test_method_set_builders() {
        let set = MethodSet::new().get().post().put().delete();
        assert!(set.contains(&Method::GET));
        assert!(set.contains(&Method::POST));
        assert!(set.contains(&Method::PUT));
        assert!(set.contains(&Method::DELETE));
        assert!(!set.contains(&Method::PATCH));
    }

    #[test]
    fn test_method_set_canonical_order() {
        let set = MethodSet::new().options().head().get();
        assert_eq!(set.to_vec(), vec![Method::GET, Method::HEAD, Method::OPTIONS]);
    }

    #[test]
    fn test_method_set_insert_rejects_trace() {
        let mut set = MethodSet::new();
        assert!(!set.insert(&Method::TRACE));
        assert!(!set.insert(&Method::CONNECT));
        assert!(set.is_empty());

        assert!(set.insert(&Method::PATCH));
        assert!(set.contains(&Method::PATCH));
    }

    #[test]
    fn test_method_set_all() {
        let set = MethodSet::all();
        assert_eq!(set.to_vec().len(), 7);
        assert!(!set.contains(&Method::TRACE));
    }

    #[test]
    fn test_method_set_from_iterator() {
        let methods = [Method::GET, Method::HEAD, Method::CONNECT];
        let set: MethodSet = methods.iter().collect();
        assert_eq!(set, MethodSet::new().get().head());
    }
}
