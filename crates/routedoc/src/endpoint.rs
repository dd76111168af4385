//! Registered route handle.
//!
//! An [`Endpoint`] pairs a route with the operation documenting it. Route
//! setters keep the operation in step: new placeholders introduced by a
//! prefix, domain or URI change gain path parameters, and a new action
//! re-derives the operationId.

use routedoc_docs::{
    camel_case, reconcile, DocsOptions, Operation, ParameterDescription, ParameterLocation,
    ParameterOverrides, SchemaType,
};
use routedoc_router::{IntoRouteAction, Route, RouteDefinition};

use crate::error::RoutedocResult;

/// Mutable handle on a registered route and its operation.
#[derive(Debug)]
pub struct Endpoint<'a> {
    route: &'a mut Route,
    operation: &'a mut Operation,
    overrides: &'a ParameterOverrides,
    options: DocsOptions,
}

impl<'a> Endpoint<'a> {
    pub(crate) fn new(
        route: &'a mut Route,
        operation: &'a mut Operation,
        overrides: &'a ParameterOverrides,
        options: DocsOptions,
    ) -> Self {
        Self {
            route,
            operation,
            overrides,
            options,
        }
    }

    /// The route.
    pub fn route(&self) -> &Route {
        self.route
    }

    /// The operation documenting the route.
    pub fn operation(&self) -> &Operation {
        self.operation
    }

    /// Mutable access to the operation.
    pub fn operation_mut(&mut self) -> &mut Operation {
        self.operation
    }

    /// Appends to the route name.
    pub fn name(&mut self, name: &str) -> &mut Self {
        self.route.set_name(name);
        self
    }

    /// Prefixes the route URI.
    pub fn prefix(&mut self, prefix: &str) -> &mut Self {
        self.route.set_prefix(prefix);
        self.sync_path_parameters()
    }

    /// Sets or clears the domain constraint.
    pub fn domain(&mut self, domain: Option<&str>) -> &mut Self {
        self.route.set_domain(domain);
        self.sync_path_parameters()
    }

    /// Replaces the route URI.
    pub fn set_uri(&mut self, uri: &str) -> &mut Self {
        self.route.set_uri(uri);
        self.sync_path_parameters()
    }

    /// Constrains a placeholder with a pattern.
    pub fn where_(&mut self, name: &str, expression: &str) -> &mut Self {
        self.route.add_where(name, expression);
        self
    }

    /// Attaches middleware names.
    pub fn middleware<I, S>(&mut self, middleware: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.route.add_middleware(middleware);
        self
    }

    /// Tags the route and its operation.
    pub fn tags<I, S>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            let tag = tag.into();
            self.operation.add_tag(&tag);
            self.route.add_tags([tag]);
        }
        self
    }

    /// Sets a placeholder default.
    pub fn defaults(&mut self, key: &str, value: &str) -> &mut Self {
        self.route.set_default(key, value);
        self
    }

    /// Replaces the action; the operationId follows the new action method.
    pub fn uses(&mut self, action: impl IntoRouteAction) -> RoutedocResult<&mut Self> {
        let action = action.into_route_action()?;
        self.operation.operation_id =
            (!action.is_closure()).then(|| camel_case(action.method()));
        self.route.set_action(action);
        Ok(self)
    }

    /// Route URI.
    pub fn uri(&self) -> &str {
        self.route.uri()
    }

    /// Route name.
    pub fn get_name(&self) -> Option<&str> {
        self.route.name()
    }

    /// Method name of the action.
    pub fn get_action_method(&self) -> &str {
        self.route.action_method()
    }

    /// Full action name, `Controller@method` or `Closure`.
    pub fn get_action_name(&self) -> String {
        self.route.action_name()
    }

    /// Domain constraint.
    pub fn get_domain(&self) -> Option<&str> {
        self.route.domain()
    }

    /// Recorded prefix.
    pub fn get_prefix(&self) -> Option<&str> {
        self.route.prefix()
    }

    /// Registers a header parameter.
    pub fn add_header_parameter<'d>(
        &mut self,
        name: &str,
        description: impl Into<ParameterDescription<'d>>,
        required: bool,
        param_type: SchemaType,
    ) -> &mut Self {
        self.operation
            .add_header_parameter(name, description, required, param_type);
        self
    }

    /// Registers a query parameter.
    pub fn add_query_parameter<'d>(
        &mut self,
        name: &str,
        description: impl Into<ParameterDescription<'d>>,
        required: bool,
        param_type: SchemaType,
    ) -> &mut Self {
        self.operation
            .add_query_parameter(name, description, required, param_type);
        self
    }

    /// Registers a path parameter.
    pub fn add_path_parameter<'d>(
        &mut self,
        name: &str,
        description: impl Into<ParameterDescription<'d>>,
        required: bool,
        param_type: SchemaType,
    ) -> &mut Self {
        self.operation
            .add_path_parameter(name, description, required, param_type);
        self
    }

    /// Registers a form field.
    pub fn add_form_data_parameter<'d>(
        &mut self,
        name: &str,
        description: impl Into<ParameterDescription<'d>>,
        required: bool,
        param_type: SchemaType,
    ) -> &mut Self {
        self.operation
            .add_form_data_parameter(name, description, required, param_type);
        self
    }

    /// Registers a body parameter.
    pub fn add_body_parameter<'d>(
        &mut self,
        name: &str,
        description: impl Into<ParameterDescription<'d>>,
        required: bool,
    ) -> &mut Self {
        self.operation.add_body_parameter(name, description, required);
        self
    }

    /// Registers parameters from validation rules.
    pub fn add_rules<I, K, V>(
        &mut self,
        location: ParameterLocation,
        rules: I,
    ) -> RoutedocResult<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.operation.add_rules(location, rules)?;
        Ok(self)
    }

    /// Sets the response for a status code.
    pub fn add_response(&mut self, code: u16, description: &str) -> &mut Self {
        self.operation.add_response(code, description);
        self
    }

    /// Sets the summary.
    pub fn summary(&mut self, summary: &str) -> &mut Self {
        self.operation.set_summary(summary);
        self
    }

    /// Sets the description.
    pub fn description(&mut self, description: &str) -> &mut Self {
        self.operation.set_description(description);
        self
    }

    /// Overrides the derived operationId.
    pub fn operation_id(&mut self, operation_id: &str) -> &mut Self {
        self.operation.set_operation_id(operation_id);
        self
    }

    /// Marks the operation deprecated.
    pub fn deprecated(&mut self) -> &mut Self {
        self.operation.deprecated = true;
        self
    }

    fn sync_path_parameters(&mut self) -> &mut Self {
        if !self.options.parse_route_parameters {
            return self;
        }

        let template = self.route.template();
        for parameter in reconcile(&template, self.overrides, self.options.override_mode) {
            if self
                .operation
                .parameter(parameter.location, &parameter.name)
                .is_none()
            {
                self.operation.add_parameter(parameter);
            }
        }
        self
    }
}
