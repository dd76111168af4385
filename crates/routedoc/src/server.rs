//! API documentation server.
//!
//! [`ApiServer`] owns the registered routes, one operation per route, and
//! the document metadata. [`ApiServer::document`] assembles them into a
//! Swagger 2.0 document.

use http::Method;
use routedoc_config::RoutedocConfig;
use routedoc_docs::{DocsOptions, Info, Operation, Parameter, Swagger, SwaggerUi, Tag};
use routedoc_router::{
    strip_optional_markers, IntoRouteAction, RouteCollection, RouteDefinition, RouteId,
};
use std::sync::Arc;

use crate::endpoint::Endpoint;
use crate::error::RoutedocResult;

/// Collects routes and documents them.
///
/// # Example
///
/// ```rust
/// use routedoc::{ApiServer, DocsOptions, Info};
///
/// let mut api = ApiServer::new(DocsOptions::default(), Info::new("Pets", "1.0.0"));
/// api.get("/pets/{petId}", "PetController@show_pet")?
///     .summary("Find a pet")
///     .add_response(200, "The pet");
///
/// let doc = api.document()?;
/// let op = doc.operation("showPet").unwrap();
/// assert_eq!(op.parameters().len(), 1);
/// # Ok::<(), routedoc::RoutedocError>(())
/// ```
#[derive(Debug)]
pub struct ApiServer {
    options: DocsOptions,
    document: Swagger,
    routes: RouteCollection,
    operations: Vec<Operation>,
    ui_path: String,
}

impl ApiServer {
    /// Creates a server with no routes.
    #[must_use]
    pub fn new(options: DocsOptions, info: Info) -> Self {
        Self {
            options,
            document: Swagger::new(info),
            routes: RouteCollection::new(),
            operations: Vec::new(),
            ui_path: "/docs".to_string(),
        }
    }

    /// Creates a server from loaded configuration.
    #[must_use]
    pub fn from_config(config: &RoutedocConfig) -> Self {
        let docs = &config.docs;
        let mut server = Self::new(docs.options(), docs.info());
        server.document.host.clone_from(&docs.host);
        server.document.base_path.clone_from(&docs.base_path);
        server.document.schemes.clone_from(&docs.schemes);
        server.ui_path.clone_from(&docs.ui_path);
        server
    }

    /// Options applied to newly registered routes.
    #[must_use]
    pub fn docs_options(&self) -> DocsOptions {
        self.options
    }

    /// Registered routes.
    #[must_use]
    pub fn routes(&self) -> &RouteCollection {
        &self.routes
    }

    /// Operation documenting a registered route.
    #[must_use]
    pub fn operation(&self, id: RouteId) -> Option<&Operation> {
        self.operations.get(id.index())
    }

    /// Returns the document tag with `name`, creating it when missing.
    pub fn tag(&mut self, name: &str, description: Option<&str>) -> &mut Tag {
        let tag = self.document.tag_mut(name);
        if let Some(description) = description {
            tag.set_description(description);
        }
        tag
    }

    /// Registers a shared parameter definition.
    ///
    /// Routes registered afterwards whose placeholder matches `name` take
    /// this definition instead of a synthesized path parameter.
    pub fn parameter(&mut self, name: &str, parameter: Parameter) -> Arc<Parameter> {
        let parameter = Arc::new(parameter);
        self.document
            .parameters
            .insert(name.to_string(), Arc::clone(&parameter));
        parameter
    }

    /// Registers a route for `methods`.
    pub fn route(
        &mut self,
        methods: &[Method],
        uri: &str,
        action: impl IntoRouteAction,
    ) -> RoutedocResult<Endpoint<'_>> {
        let id = self.routes.add(methods, uri, action.into_route_action()?)?;
        Ok(self.attach(id))
    }

    /// Registers a GET route.
    pub fn get(
        &mut self,
        uri: &str,
        action: impl IntoRouteAction,
    ) -> RoutedocResult<Endpoint<'_>> {
        self.route(&[Method::GET], uri, action)
    }

    /// Registers a POST route.
    pub fn post(
        &mut self,
        uri: &str,
        action: impl IntoRouteAction,
    ) -> RoutedocResult<Endpoint<'_>> {
        self.route(&[Method::POST], uri, action)
    }

    /// Registers a PUT route.
    pub fn put(
        &mut self,
        uri: &str,
        action: impl IntoRouteAction,
    ) -> RoutedocResult<Endpoint<'_>> {
        self.route(&[Method::PUT], uri, action)
    }

    /// Registers a PATCH route.
    pub fn patch(
        &mut self,
        uri: &str,
        action: impl IntoRouteAction,
    ) -> RoutedocResult<Endpoint<'_>> {
        self.route(&[Method::PATCH], uri, action)
    }

    /// Registers a DELETE route.
    pub fn delete(
        &mut self,
        uri: &str,
        action: impl IntoRouteAction,
    ) -> RoutedocResult<Endpoint<'_>> {
        self.route(&[Method::DELETE], uri, action)
    }

    /// Registers an OPTIONS route.
    pub fn options(
        &mut self,
        uri: &str,
        action: impl IntoRouteAction,
    ) -> RoutedocResult<Endpoint<'_>> {
        self.route(&[Method::OPTIONS], uri, action)
    }

    /// Registers a route answering every documentable method.
    pub fn any(
        &mut self,
        uri: &str,
        action: impl IntoRouteAction,
    ) -> RoutedocResult<Endpoint<'_>> {
        let id = self.routes.any(uri, action.into_route_action()?)?;
        Ok(self.attach(id))
    }

    /// Reopens a registered route.
    pub fn endpoint(&mut self, id: RouteId) -> Option<Endpoint<'_>> {
        let route = self.routes.get_mut(id)?;
        let operation = self.operations.get_mut(id.index())?;
        Some(Endpoint::new(route, operation, &self.document.parameters, self.options))
    }

    fn attach(&mut self, id: RouteId) -> Endpoint<'_> {
        let mut operation = Operation::new();
        operation.set_route(&self.routes[id], &self.document.parameters, &self.options);
        self.operations.push(operation);

        Endpoint::new(
            &mut self.routes[id],
            &mut self.operations[id.index()],
            &self.document.parameters,
            self.options,
        )
    }

    /// Assembles the Swagger document.
    ///
    /// Each route contributes its operation under every method it answers,
    /// keyed by its URI with optional markers removed. HEAD is left out when
    /// the route also answers GET. A route documented under several methods
    /// suffixes its operationId with the method, keeping identifiers unique.
    /// Operation tags missing from the document tag list are appended to it.
    pub fn document(&self) -> RoutedocResult<Swagger> {
        let mut document = self.document.clone();

        for (id, route) in self.routes.iter() {
            let operation = &self.operations[id.index()];
            let key = path_key(route.uri());
            let methods = route.methods();
            let item = document.paths.entry(key.clone()).or_default();

            let documented: Vec<Method> = methods
                .to_vec()
                .into_iter()
                .filter(|m| *m != Method::HEAD || !methods.contains(&Method::GET))
                .collect();

            for method in &documented {
                if item.get(method).is_some() {
                    tracing::warn!(path = %key, method = %method, "Replacing documented operation");
                }
                let mut documented_op = operation.clone();
                if documented.len() > 1 {
                    documented_op.operation_id = operation
                        .operation_id
                        .as_deref()
                        .map(|id| method_operation_id(id, method));
                }
                item.set(method, documented_op)?;
            }

            for tag in &operation.tags {
                document.tag_mut(tag);
            }
        }

        tracing::info!(
            paths = document.paths.len(),
            routes = self.routes.len(),
            "Swagger document assembled"
        );
        Ok(document)
    }

    /// Serializes the document as pretty JSON.
    pub fn to_json(&self) -> RoutedocResult<String> {
        Ok(self.document()?.to_json()?)
    }

    /// Swagger UI page for the document, served under the configured path.
    pub fn swagger_ui(&self) -> RoutedocResult<SwaggerUi> {
        let document = self.document()?;
        let title = document.info.title.clone();
        Ok(SwaggerUi::new(self.ui_path.as_str(), &document).title(title))
    }
}

/// Installs the global subscriber described by `config`.
pub fn init_logging(config: &RoutedocConfig) -> RoutedocResult<()> {
    routedoc_telemetry::init_logging(&config.telemetry.logging.log_config())?;
    Ok(())
}

/// `index` under GET becomes `indexGet`.
fn method_operation_id(operation_id: &str, method: &Method) -> String {
    let method = method.as_str().to_ascii_lowercase();
    let mut chars = method.chars();
    let suffix: String = chars
        .next()
        .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
        .unwrap_or_default();
    format!("{operation_id}{suffix}")
}

fn path_key(uri: &str) -> String {
    let uri = strip_optional_markers(uri);
    if uri.starts_with('/') {
        uri
    } else {
        format!("/{uri}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routedoc_docs::{OverrideMode, ParameterLocation, SchemaType};

    fn server() -> ApiServer {
        ApiServer::new(DocsOptions::default(), Info::new("Test", "1.0.0"))
    }

    #[test]
    fn test_path_key() {
        assert_eq!(path_key("/"), "/");
        assert_eq!(path_key("users/{id}"), "/users/{id}");
        assert_eq!(path_key("posts/{postId?}"), "/posts/{postId}");
    }

    #[test]
    fn test_get_route_skips_head() {
        let mut api = server();
        api.get("/users", "UserController@index").unwrap();

        let doc = api.document().unwrap();
        let item = &doc.paths["/users"];
        assert!(item.get.is_some());
        assert!(item.head.is_none());
    }

    #[test]
    fn test_head_only_route_is_documented() {
        let mut api = server();
        api.route(&[Method::HEAD], "/ping", "PingController@head").unwrap();

        let doc = api.document().unwrap();
        assert!(doc.paths["/ping"].head.is_some());
    }

    #[test]
    fn test_any_route_documents_every_method() {
        let mut api = server();
        api.any("/echo", "EchoController@echo").unwrap();

        let doc = api.document().unwrap();
        let methods: Vec<Method> = doc.paths["/echo"].operations().map(|(m, _)| m).collect();
        assert_eq!(methods.len(), 6);
        assert!(!methods.contains(&Method::HEAD));
    }

    #[test]
    fn test_multi_method_route_has_unique_operation_ids() {
        let mut api = server();
        api.any("/echo", "EchoController@echo").unwrap();
        api.get("/users", "UserController@index").unwrap();

        let doc = api.document().unwrap();
        let ids: Vec<&str> = doc.paths["/echo"]
            .operations()
            .filter_map(|(_, op)| op.operation_id.as_deref())
            .collect();
        assert_eq!(
            ids,
            vec!["echoGet", "echoPut", "echoPost", "echoDelete", "echoOptions", "echoPatch"]
        );
        assert!(doc.operation("index").is_some());
    }

    #[test]
    fn test_method_operation_id() {
        assert_eq!(method_operation_id("showUser", &Method::PATCH), "showUserPatch");
    }

    #[test]
    fn test_shared_parameter_is_substituted() {
        let mut api = server();
        let shared = api.parameter(
            "userId",
            Parameter::path("userId", true)
                .with_type(SchemaType::Integer)
                .with_description("User identifier"),
        );
        let endpoint = api.get("/users/{userId}", "UserController@show").unwrap();

        let attached = &endpoint.operation().parameters()[0];
        assert!(Arc::ptr_eq(attached, &shared));
    }

    #[test]
    fn test_adjusted_mode_follows_placeholder() {
        let options = DocsOptions {
            override_mode: OverrideMode::Adjusted,
            ..Default::default()
        };
        let mut api = ApiServer::new(options, Info::new("Test", "1.0.0"));
        api.parameter("id?", Parameter::path("id", true));
        let endpoint = api.get("/items/{id?}", "ItemController@show").unwrap();

        let param = endpoint.operation().parameter(ParameterLocation::Path, "id").unwrap();
        assert!(!param.required);
    }

    #[test]
    fn test_tag_declares_and_operations_extend() {
        let mut api = server();
        api.tag("users", Some("User management"));
        api.get("/users", "UserController@index")
            .unwrap()
            .tags(["users", "admin"]);

        let doc = api.document().unwrap();
        let names: Vec<&str> = doc.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["users", "admin"]);
        assert_eq!(doc.tags[0].description.as_deref(), Some("User management"));
    }

    #[test]
    fn test_from_config() {
        let mut config = RoutedocConfig::production();
        config.docs.title = "Pets".to_string();
        config.docs.base_path = Some("/v2".to_string());
        config.docs.parse_route_parameters = false;

        let mut api = ApiServer::from_config(&config);
        api.get("/pets/{id}", "PetController@show").unwrap();

        let doc = api.document().unwrap();
        assert_eq!(doc.info.title, "Pets");
        assert_eq!(doc.base_path.as_deref(), Some("/v2"));
        assert_eq!(doc.schemes, vec!["https".to_string()]);
        assert!(doc.paths["/pets/{id}"].get.as_ref().unwrap().parameters().is_empty());
    }

    #[test]
    fn test_invalid_action_rejected() {
        let mut api = server();
        assert!(api.get("/users", "UserController@").is_err());
        assert!(api.routes().is_empty());
    }

    #[test]
    fn test_endpoint_reopen() {
        let mut api = server();
        api.post("/users", "UserController@store").unwrap();
        let id = api.routes().iter().map(|(id, _)| id).next().unwrap();

        api.endpoint(id).unwrap().summary("Create a user");
        assert_eq!(api.operation(id).unwrap().summary.as_deref(), Some("Create a user"));
    }

    #[test]
    fn test_swagger_ui_uses_configured_path() {
        let mut config = RoutedocConfig::default();
        config.docs.ui_path = "/api-docs".to_string();

        let api = ApiServer::from_config(&config);
        let ui = api.swagger_ui().unwrap();
        assert_eq!(ui.spec_path(), "/api-docs/swagger.json");
        assert!(ui.html().contains("<title>API</title>"));
    }
}
