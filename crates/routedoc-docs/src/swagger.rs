//! Swagger 2.0 document types.
//!
//! This module provides the object graph of a Swagger 2.0 document: the
//! root [`Swagger`] object, path items, parameters, responses and the
//! schema subset needed for body parameters.
//!
//! ## Swagger 2.0 Compliance
//!
//! Field names follow the Swagger 2.0 specification:
//! <https://swagger.io/specification/v2/>

use std::sync::Arc;

use http::Method;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{DocsError, DocsResult};
use crate::operation::Operation;

/// Swagger document root object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swagger {
    /// Specification version, always "2.0".
    pub swagger: String,
    /// API metadata.
    pub info: Info,
    /// Host serving the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Base path relative to the host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "basePath")]
    pub base_path: Option<String>,
    /// Transfer protocols.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemes: Vec<String>,
    /// MIME types the API consumes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consumes: Vec<String>,
    /// MIME types the API produces.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub produces: Vec<String>,
    /// API paths and operations.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    /// Reusable schemas.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub definitions: IndexMap<String, Schema>,
    /// Parameters shared across operations.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, Arc<Parameter>>,
    /// Tags for API grouping.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl Swagger {
    /// Creates an empty document.
    #[must_use]
    pub fn new(info: Info) -> Self {
        Self {
            swagger: "2.0".to_string(),
            info,
            host: None,
            base_path: None,
            schemes: Vec::new(),
            consumes: Vec::new(),
            produces: Vec::new(),
            paths: IndexMap::new(),
            definitions: IndexMap::new(),
            parameters: IndexMap::new(),
            tags: Vec::new(),
        }
    }

    /// Returns the tag with the given name, creating it when missing.
    pub fn tag_mut(&mut self, name: &str) -> &mut Tag {
        let index = match self.tags.iter().position(|t| t.name == name) {
            Some(index) => index,
            None => {
                self.tags.push(Tag::new(name));
                self.tags.len() - 1
            }
        };
        &mut self.tags[index]
    }

    /// Finds an operation by its identifier.
    #[must_use]
    pub fn operation(&self, operation_id: &str) -> Option<&Operation> {
        self.paths
            .values()
            .flat_map(PathItem::operations)
            .map(|(_, op)| op)
            .find(|op| op.operation_id.as_deref() == Some(operation_id))
    }

    /// Serializes the document as pretty JSON.
    pub fn to_json(&self) -> DocsResult<String> {
        serde_json::to_string_pretty(self).map_err(DocsError::from)
    }
}

/// API metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// API title.
    pub title: String,
    /// API version.
    pub version: String,
    /// API description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Info {
    /// Creates metadata without description.
    #[must_use]
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            description: None,
        }
    }
}

/// API tag for grouping operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Tag {
    /// Creates a tag without description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the description.
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }
}

/// A path item containing operations for a single path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// GET operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    /// PUT operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    /// POST operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    /// DELETE operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    /// OPTIONS operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    /// HEAD operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    /// PATCH operation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
}

impl PathItem {
    /// Places an operation under a method, replacing any previous one.
    pub fn set(&mut self, method: &Method, operation: Operation) -> DocsResult<()> {
        let slot = match *method {
            Method::GET => &mut self.get,
            Method::PUT => &mut self.put,
            Method::POST => &mut self.post,
            Method::DELETE => &mut self.delete,
            Method::OPTIONS => &mut self.options,
            Method::HEAD => &mut self.head,
            Method::PATCH => &mut self.patch,
            _ => {
                return Err(DocsError::InvalidOperation {
                    operation_id: operation.operation_id.unwrap_or_default(),
                    reason: format!("{method} cannot be documented"),
                })
            }
        };
        *slot = Some(operation);
        Ok(())
    }

    /// Returns the operation registered under a method.
    #[must_use]
    pub fn get(&self, method: &Method) -> Option<&Operation> {
        match *method {
            Method::GET => self.get.as_ref(),
            Method::PUT => self.put.as_ref(),
            Method::POST => self.post.as_ref(),
            Method::DELETE => self.delete.as_ref(),
            Method::OPTIONS => self.options.as_ref(),
            Method::HEAD => self.head.as_ref(),
            Method::PATCH => self.patch.as_ref(),
            _ => None,
        }
    }

    /// Iterates the registered operations with their methods.
    pub fn operations(&self) -> impl Iterator<Item = (Method, &Operation)> {
        [
            (Method::GET, self.get.as_ref()),
            (Method::PUT, self.put.as_ref()),
            (Method::POST, self.post.as_ref()),
            (Method::DELETE, self.delete.as_ref()),
            (Method::OPTIONS, self.options.as_ref()),
            (Method::HEAD, self.head.as_ref()),
            (Method::PATCH, self.patch.as_ref()),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.map(|op| (method, op)))
    }
}

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterLocation {
    /// URL path segment.
    #[serde(rename = "path")]
    Path,
    /// Query string.
    #[serde(rename = "query")]
    Query,
    /// HTTP header.
    #[serde(rename = "header")]
    Header,
    /// Form field.
    #[serde(rename = "formData")]
    FormData,
    /// Request body.
    #[serde(rename = "body")]
    Body,
}

/// JSON Schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// String type.
    String,
    /// Number type.
    Number,
    /// Integer type.
    Integer,
    /// Boolean type.
    Boolean,
    /// Array type.
    Array,
    /// Object type.
    Object,
    /// Uploaded file (form data only).
    File,
}

impl SchemaType {
    /// True for integer and number.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Number)
    }
}

/// Validation keywords shared by parameters, array items and schemas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Format (e.g., "date-time", "email").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Minimum value (for numbers).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Maximum value (for numbers).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Minimum length (for strings).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "minLength")]
    pub min_length: Option<u64>,
    /// Maximum length (for strings).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "maxLength")]
    pub max_length: Option<u64>,
    /// Minimum item count (for arrays).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "minItems")]
    pub min_items: Option<u64>,
    /// Maximum item count (for arrays).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "maxItems")]
    pub max_items: Option<u64>,
    /// Pattern regex (for strings).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Enum values.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[serde(rename = "enum")]
    pub enum_values: Vec<serde_json::Value>,
}

/// Item description of an array parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Items {
    /// Item type.
    #[serde(rename = "type")]
    pub item_type: SchemaType,
    /// Item constraints.
    #[serde(flatten)]
    pub constraints: Constraints,
}

impl Items {
    /// Items of the given type without constraints.
    #[must_use]
    pub fn of(item_type: SchemaType) -> Self {
        Self {
            item_type,
            constraints: Constraints::default(),
        }
    }
}

/// An operation parameter, identified by (location, name).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Parameter location.
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether required.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Value type (absent for body parameters).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub param_type: Option<SchemaType>,
    /// Array item description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,
    /// Default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    /// Body schema (body parameters only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    /// Validation keywords.
    #[serde(flatten)]
    pub constraints: Constraints,
}

impl Parameter {
    /// Creates an optional parameter with no type.
    #[must_use]
    pub fn new(name: impl Into<String>, location: ParameterLocation) -> Self {
        Self {
            name: name.into(),
            location,
            description: None,
            required: false,
            param_type: None,
            items: None,
            default: None,
            schema: None,
            constraints: Constraints::default(),
        }
    }

    /// Creates a string path parameter.
    #[must_use]
    pub fn path(name: impl Into<String>, required: bool) -> Self {
        Self {
            required,
            param_type: Some(SchemaType::String),
            ..Self::new(name, ParameterLocation::Path)
        }
    }

    /// Sets the type.
    #[must_use]
    pub fn with_type(mut self, param_type: SchemaType) -> Self {
        self.param_type = Some(param_type);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the parameter required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// True when the parameter has the given identity.
    #[must_use]
    pub fn is(&self, location: ParameterLocation, name: &str) -> bool {
        self.location == location && self.name == name
    }
}

/// Response definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Description (required).
    pub description: String,
    /// Response body schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

impl Response {
    /// Creates a response with a description only.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            schema: None,
        }
    }
}

/// JSON Schema definition (the subset used for bodies).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Schema type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub schema_type: Option<SchemaType>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Reference to another schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    /// Object properties.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,
    /// Required properties.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Array item schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    /// Validation keywords.
    #[serde(flatten)]
    pub constraints: Constraints,
}

impl Schema {
    /// Create a schema of the given type.
    #[must_use]
    pub fn of(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Default::default()
        }
    }

    /// Create a string schema.
    #[must_use]
    pub fn string() -> Self {
        Self::of(SchemaType::String)
    }

    /// Create an object schema.
    #[must_use]
    pub fn object() -> Self {
        Self::of(SchemaType::Object)
    }

    /// Create an array schema with the given item schema.
    #[must_use]
    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of(SchemaType::Array)
        }
    }

    /// Create a reference schema.
    #[must_use]
    pub fn reference(ref_path: impl Into<String>) -> Self {
        Self {
            reference: Some(ref_path.into()),
            ..Default::default()
        }
    }

    /// Add a property to an object schema.
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Mark a property as required.
    #[must_use]
    pub fn required_property(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }
}
