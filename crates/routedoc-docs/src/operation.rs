//! Operation building.
//!
//! [`Operation`] is one documented action. It is seeded from a route (tags,
//! operationId, path parameters) and then refined through the parameter and
//! response methods. Parameters are unique per (location, name): registering
//! an existing pair updates the entry already attached.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use routedoc_router::RouteDefinition;
use serde::{Deserialize, Serialize};

use crate::error::DocsResult;
use crate::reconcile::{reconcile, OverrideMode, ParameterOverrides};
use crate::rules::RuleSet;
use crate::swagger::{Parameter, ParameterLocation, Response, Schema, SchemaType};

/// MIME type set when the first form field is registered.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// MIME type used once a form carries a file field.
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Name of the parameter built from body validation rules.
pub const BODY_PARAMETER: &str = "body";

/// Options controlling how routes seed operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocsOptions {
    /// Derive path parameters from route placeholders.
    pub parse_route_parameters: bool,
    /// How shared parameter definitions are attached.
    pub override_mode: OverrideMode,
}

impl Default for DocsOptions {
    fn default() -> Self {
        Self {
            parse_route_parameters: true,
            override_mode: OverrideMode::Passthrough,
        }
    }
}

/// Description applied when registering a parameter.
pub enum ParameterDescription<'a> {
    /// Leave the description untouched.
    None,
    /// Set the description text.
    Text(String),
    /// Customize the parameter in place.
    With(Box<dyn FnOnce(&mut Parameter) + 'a>),
}

impl<'a> ParameterDescription<'a> {
    /// Wraps a callback that customizes the parameter.
    pub fn with(f: impl FnOnce(&mut Parameter) + 'a) -> Self {
        Self::With(Box::new(f))
    }
}

impl fmt::Debug for ParameterDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::With(_) => f.write_str("With(..)"),
        }
    }
}

impl From<&str> for ParameterDescription<'_> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ParameterDescription<'_> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T: Into<String>> From<Option<T>> for ParameterDescription<'_> {
    fn from(text: Option<T>) -> Self {
        text.map_or(Self::None, |t| Self::Text(t.into()))
    }
}

/// An API operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Tags for grouping.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Short summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Full description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unique operation identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "operationId")]
    pub operation_id: Option<String>,
    /// MIME types the operation consumes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consumes: Vec<String>,
    /// MIME types the operation produces.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub produces: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    parameters: Vec<Arc<Parameter>>,
    /// Responses by status code.
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
    /// Whether deprecated.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
}

impl Operation {
    /// Creates an operation with no responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the operation from a route.
    ///
    /// Adds the route's tags, sets the operationId to the camel-cased action
    /// method unless the action is a closure, and, when enabled in
    /// `options`, attaches the parameters reconciled from the route's
    /// domain and URI placeholders.
    pub fn set_route<R>(
        &mut self,
        route: &R,
        overrides: &ParameterOverrides,
        options: &DocsOptions,
    ) -> &mut Self
    where
        R: RouteDefinition + ?Sized,
    {
        for tag in route.tags() {
            self.add_tag(tag);
        }

        if !route.action().is_closure() {
            self.operation_id = Some(camel_case(route.action_method()));
        }

        if options.parse_route_parameters {
            for parameter in reconcile(&route.template(), overrides, options.override_mode) {
                self.add_parameter(parameter);
            }
        }

        self
    }

    /// Adds a tag unless already present.
    pub fn add_tag(&mut self, tag: &str) -> &mut Self {
        if !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_string());
        }
        self
    }

    /// Attached parameters in registration order.
    pub fn parameters(&self) -> &[Arc<Parameter>] {
        &self.parameters
    }

    /// Finds an attached parameter.
    #[must_use]
    pub fn parameter(&self, location: ParameterLocation, name: &str) -> Option<&Parameter> {
        self.parameters
            .iter()
            .find(|p| p.is(location, name))
            .map(AsRef::as_ref)
    }

    /// Attaches a parameter as-is.
    ///
    /// An entry with the same (location, name) is replaced in place, keeping
    /// its position.
    pub fn add_parameter(&mut self, parameter: Arc<Parameter>) -> &mut Self {
        match self
            .parameters
            .iter()
            .position(|p| p.is(parameter.location, &parameter.name))
        {
            Some(index) => self.parameters[index] = parameter,
            None => self.parameters.push(parameter),
        }
        self
    }

    /// Registers a header parameter.
    pub fn add_header_parameter<'a>(
        &mut self,
        name: &str,
        description: impl Into<ParameterDescription<'a>>,
        required: bool,
        param_type: SchemaType,
    ) -> &mut Self {
        self.register_parameter(
            ParameterLocation::Header,
            name,
            description,
            required,
            Some(param_type),
        )
    }

    /// Registers a query parameter.
    pub fn add_query_parameter<'a>(
        &mut self,
        name: &str,
        description: impl Into<ParameterDescription<'a>>,
        required: bool,
        param_type: SchemaType,
    ) -> &mut Self {
        self.register_parameter(
            ParameterLocation::Query,
            name,
            description,
            required,
            Some(param_type),
        )
    }

    /// Registers a path parameter.
    pub fn add_path_parameter<'a>(
        &mut self,
        name: &str,
        description: impl Into<ParameterDescription<'a>>,
        required: bool,
        param_type: SchemaType,
    ) -> &mut Self {
        self.register_parameter(
            ParameterLocation::Path,
            name,
            description,
            required,
            Some(param_type),
        )
    }

    /// Registers a form field.
    ///
    /// The first form field makes the operation consume
    /// `application/x-www-form-urlencoded` unless `consumes` is already set.
    pub fn add_form_data_parameter<'a>(
        &mut self,
        name: &str,
        description: impl Into<ParameterDescription<'a>>,
        required: bool,
        param_type: SchemaType,
    ) -> &mut Self {
        self.use_form_encoding(false);
        self.register_parameter(
            ParameterLocation::FormData,
            name,
            description,
            required,
            Some(param_type),
        )
    }

    /// Registers a body parameter. Body parameters carry no type.
    pub fn add_body_parameter<'a>(
        &mut self,
        name: &str,
        description: impl Into<ParameterDescription<'a>>,
        required: bool,
    ) -> &mut Self {
        self.register_parameter(ParameterLocation::Body, name, description, required, None)
    }

    /// Registers a parameter, updating the existing (location, name) entry
    /// when there is one.
    ///
    /// The type is set for every location but body; `required` is set or
    /// cleared; then the description is applied.
    pub fn register_parameter<'a>(
        &mut self,
        location: ParameterLocation,
        name: &str,
        description: impl Into<ParameterDescription<'a>>,
        required: bool,
        param_type: Option<SchemaType>,
    ) -> &mut Self {
        let parameter = self.get_or_create_parameter(location, name);

        if location != ParameterLocation::Body {
            if let Some(param_type) = param_type {
                parameter.param_type = Some(param_type);
            }
        }

        parameter.required = required;

        match description.into() {
            ParameterDescription::None => {}
            ParameterDescription::Text(text) => parameter.description = Some(text),
            ParameterDescription::With(customize) => customize(parameter),
        }

        self
    }

    /// Returns the parameter with the given identity, creating it when
    /// missing.
    ///
    /// A parameter shared with other operations is copied before it is
    /// handed out, so changes stay local to this operation.
    pub fn get_or_create_parameter(
        &mut self,
        location: ParameterLocation,
        name: &str,
    ) -> &mut Parameter {
        let index = match self.parameters.iter().position(|p| p.is(location, name)) {
            Some(index) => index,
            None => {
                self.parameters.push(Arc::new(Parameter::new(name, location)));
                self.parameters.len() - 1
            }
        };
        Arc::make_mut(&mut self.parameters[index])
    }

    /// Sets the response for a status code.
    pub fn add_response(&mut self, code: u16, description: &str) -> &mut Self {
        self.responses
            .insert(code.to_string(), Response::new(description));
        self
    }

    /// Registers parameters from validation rule declarations.
    ///
    /// Each `field => "rule|rule"` pair becomes one parameter at `location`,
    /// reusing an existing entry of the same name. `field.*` declarations
    /// describe the items of the `field` array. Nested fields (`a.b`) cannot
    /// be expressed as flat parameters and are skipped.
    ///
    /// For [`ParameterLocation::Body`] the fields instead become properties of
    /// a single object schema on a parameter named `body`. A form carrying a
    /// file field consumes `multipart/form-data`.
    ///
    /// ```rust
    /// use routedoc_docs::{Operation, ParameterLocation, SchemaType};
    ///
    /// let mut op = Operation::new();
    /// op.add_rules(ParameterLocation::Query, [
    ///     ("page", "integer|min:1"),
    ///     ("ids", "array"),
    ///     ("ids.*", "integer"),
    /// ])
    /// .unwrap();
    ///
    /// let ids = op.parameter(ParameterLocation::Query, "ids").unwrap();
    /// assert_eq!(ids.items.as_ref().unwrap().item_type, SchemaType::Integer);
    /// ```
    pub fn add_rules<I, K, V>(
        &mut self,
        location: ParameterLocation,
        rules: I,
    ) -> DocsResult<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut fields = Vec::new();
        let mut items = Vec::new();

        for (field, declaration) in rules {
            let field = field.as_ref();
            let rule_set = RuleSet::parse(field, declaration.as_ref())?;

            if let Some(base) = field.strip_suffix(".*") {
                if base.contains('.') {
                    tracing::debug!(field = %field, "Skipping nested validation field");
                } else {
                    items.push((base.to_string(), rule_set));
                }
            } else if field.contains('.') {
                tracing::debug!(field = %field, "Skipping nested validation field");
            } else {
                fields.push(rule_set);
            }
        }

        if location == ParameterLocation::Body {
            self.add_body_rules(&fields, &items);
            return Ok(self);
        }

        for rule_set in &fields {
            rule_set.apply(self.get_or_create_parameter(location, rule_set.field()));
            if location == ParameterLocation::FormData {
                self.use_form_encoding(rule_set.value_type() == SchemaType::File);
            }
        }

        for (base, rule_set) in items {
            let parameter = self.get_or_create_parameter(location, &base);
            parameter.param_type = Some(SchemaType::Array);
            parameter.items = Some(rule_set.to_items());
        }

        Ok(self)
    }

    fn add_body_rules(&mut self, fields: &[RuleSet], items: &[(String, RuleSet)]) {
        if fields.is_empty() && items.is_empty() {
            return;
        }

        // Swagger allows one body parameter; rules extend whichever is attached.
        let name = self
            .parameters
            .iter()
            .find(|p| p.location == ParameterLocation::Body)
            .map_or_else(|| BODY_PARAMETER.to_string(), |p| p.name.clone());
        let parameter = self.get_or_create_parameter(ParameterLocation::Body, &name);
        let schema = parameter.schema.get_or_insert_with(Schema::object);

        for rule_set in fields {
            schema
                .properties
                .insert(rule_set.field().to_string(), rule_set.to_schema());
            if rule_set.is_required()
                && !schema.required.iter().any(|r| r == rule_set.field())
            {
                schema.required.push(rule_set.field().to_string());
            }
        }

        for (base, rule_set) in items {
            let property = schema
                .properties
                .entry(base.clone())
                .or_insert_with(|| Schema::of(SchemaType::Array));
            property.schema_type = Some(SchemaType::Array);
            property.items = Some(Box::new(rule_set.to_schema()));
        }

        parameter.required = !schema.required.is_empty();
    }

    fn use_form_encoding(&mut self, multipart: bool) {
        if multipart {
            self.consumes.retain(|c| c != FORM_URLENCODED);
            if !self.consumes.iter().any(|c| c == MULTIPART_FORM_DATA) {
                self.consumes.push(MULTIPART_FORM_DATA.to_string());
            }
        } else if self.consumes.is_empty() {
            self.consumes.push(FORM_URLENCODED.to_string());
        }
    }

    /// Sets the summary.
    pub fn set_summary(&mut self, summary: &str) -> &mut Self {
        self.summary = Some(summary.to_string());
        self
    }

    /// Sets the description.
    pub fn set_description(&mut self, description: &str) -> &mut Self {
        self.description = Some(description.to_string());
        self
    }

    /// Sets the operationId.
    pub fn set_operation_id(&mut self, operation_id: &str) -> &mut Self {
        self.operation_id = Some(operation_id.to_string());
        self
    }
}

/// Converts an action method name to camelCase.
///
/// Words are split on `-`, `_` and whitespace; each word's first letter is
/// upper-cased, the rest kept, and the result's first letter lower-cased.
///
/// ```rust
/// use routedoc_docs::camel_case;
///
/// assert_eq!(camel_case("show_user"), "showUser");
/// assert_eq!(camel_case("get-items"), "getItems");
/// assert_eq!(camel_case("listUsers"), "listUsers");
/// ```
#[must_use]
pub fn camel_case(value: &str) -> String {
    let studly: String = value
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect();

    let mut chars = studly.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}
