//! Validation-rule introspection.
//!
//! Request validation is commonly declared as pipe-separated rule strings
//! such as `"required|integer|min:1"`. [`RuleSet`] parses such a declaration
//! and maps what it can onto a Swagger parameter: presence, type, format,
//! bounds, enumerations and patterns. Rules with no Swagger counterpart are
//! ignored.

use std::fmt;

use crate::error::{DocsError, DocsResult};
use crate::swagger::{Constraints, Items, Parameter, ParameterLocation, Schema, SchemaType};

/// A single parsed validation rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// The field must be present.
    Required,
    /// The field may be null.
    Nullable,
    /// The field is validated only when present.
    Sometimes,
    /// The field has a value type.
    Type(SchemaType),
    /// The value follows a string format.
    Format(String),
    /// Lower bound.
    Min(f64),
    /// Upper bound.
    Max(f64),
    /// Inclusive bounds.
    Between(f64, f64),
    /// Exact size.
    Size(f64),
    /// Allowed values.
    In(Vec<String>),
    /// Pattern the value must match, delimiters stripped.
    Regex(String),
    /// A rule with no Swagger counterpart.
    Other(String),
}

impl Rule {
    /// Parses one rule such as `min:3` or `in:a,b`.
    pub fn parse(field: &str, rule: &str) -> DocsResult<Self> {
        let (name, args) = match rule.split_once(':') {
            Some((name, args)) => (name, Some(args)),
            None => (rule, None),
        };

        let number = |arg: &str| -> DocsResult<f64> {
            arg.trim()
                .parse::<f64>()
                .map_err(|_| DocsError::invalid_rule(field, rule, "expected a number"))
        };
        let argument = || {
            args.filter(|a| !a.is_empty())
                .ok_or_else(|| DocsError::invalid_rule(field, rule, "missing argument"))
        };

        let parsed = match name {
            "required" => Self::Required,
            "nullable" => Self::Nullable,
            "sometimes" => Self::Sometimes,
            "string" => Self::Type(SchemaType::String),
            "integer" | "int" => Self::Type(SchemaType::Integer),
            "numeric" => Self::Type(SchemaType::Number),
            "boolean" | "bool" => Self::Type(SchemaType::Boolean),
            "array" => Self::Type(SchemaType::Array),
            "file" | "image" => Self::Type(SchemaType::File),
            "email" => Self::Format("email".to_string()),
            "date" => Self::Format("date".to_string()),
            "date_format" => Self::Format("date-time".to_string()),
            "uuid" => Self::Format("uuid".to_string()),
            "url" => Self::Format("uri".to_string()),
            "ip" | "ipv4" => Self::Format("ipv4".to_string()),
            "ipv6" => Self::Format("ipv6".to_string()),
            "min" => Self::Min(number(argument()?)?),
            "max" => Self::Max(number(argument()?)?),
            "size" => Self::Size(number(argument()?)?),
            "between" => {
                let (low, high) = argument()?
                    .split_once(',')
                    .ok_or_else(|| DocsError::invalid_rule(field, rule, "expected two bounds"))?;
                Self::Between(number(low)?, number(high)?)
            }
            "in" => Self::In(argument()?.split(',').map(|v| v.trim().to_string()).collect()),
            "regex" => Self::Regex(strip_delimiters(argument()?).to_string()),
            _ => {
                tracing::debug!(
                    field = %field,
                    rule = %rule,
                    "Ignoring unsupported validation rule"
                );
                Self::Other(rule.to_string())
            }
        };

        Ok(parsed)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("required"),
            Self::Nullable => f.write_str("nullable"),
            Self::Sometimes => f.write_str("sometimes"),
            Self::Type(t) => write!(f, "{}", type_name(*t)),
            Self::Format(format) => write!(f, "format:{format}"),
            Self::Min(v) => write!(f, "min:{v}"),
            Self::Max(v) => write!(f, "max:{v}"),
            Self::Between(low, high) => write!(f, "between:{low},{high}"),
            Self::Size(v) => write!(f, "size:{v}"),
            Self::In(values) => write!(f, "in:{}", values.join(",")),
            Self::Regex(pattern) => write!(f, "regex:/{pattern}/"),
            Self::Other(rule) => f.write_str(rule),
        }
    }
}

/// The rules declared for one field.
///
/// # Example
///
/// ```rust
/// use routedoc_docs::{Parameter, ParameterLocation, RuleSet, SchemaType};
///
/// let rules = RuleSet::parse("age", "required|integer|min:18").unwrap();
/// let mut param = Parameter::new("age", ParameterLocation::Query);
/// rules.apply(&mut param);
///
/// assert!(param.required);
/// assert_eq!(param.param_type, Some(SchemaType::Integer));
/// assert_eq!(param.constraints.minimum, Some(18.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    field: String,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Parses a pipe-separated declaration.
    pub fn parse(field: &str, declaration: &str) -> DocsResult<Self> {
        Self::from_rules(field, declaration.split('|'))
    }

    /// Parses rules given one per item, which allows `|` inside a regex.
    pub fn from_rules<I, S>(field: &str, rules: I) -> DocsResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = rules
            .into_iter()
            .map(|r| r.as_ref().trim().to_string())
            .filter(|r| !r.is_empty())
            .map(|r| Rule::parse(field, &r))
            .collect::<DocsResult<Vec<_>>>()?;

        Ok(Self {
            field: field.to_string(),
            rules,
        })
    }

    /// Field the rules are declared on.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Parsed rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// True when `required` is declared. `nullable` and `sometimes` never
    /// make a field required.
    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }

    /// The declared value type; the last type rule wins, string otherwise.
    pub fn value_type(&self) -> SchemaType {
        self.rules
            .iter()
            .rev()
            .find_map(|r| match r {
                Rule::Type(t) => Some(*t),
                _ => None,
            })
            .unwrap_or(SchemaType::String)
    }

    /// Maps the rules onto a parameter.
    ///
    /// Body parameters get their description of the value through
    /// [`RuleSet::to_schema`] instead, so only `required` is set on them.
    pub fn apply(&self, parameter: &mut Parameter) {
        parameter.required = self.is_required();
        if parameter.location == ParameterLocation::Body {
            return;
        }

        let value_type = self.value_type();
        parameter.param_type = Some(value_type);
        if value_type == SchemaType::Array && parameter.items.is_none() {
            parameter.items = Some(Items::of(SchemaType::String));
        }
        self.apply_constraints(value_type, &mut parameter.constraints);
    }

    /// Describes the rules as array items, for `field.*` declarations.
    pub fn to_items(&self) -> Items {
        let value_type = self.value_type();
        let mut items = Items::of(value_type);
        self.apply_constraints(value_type, &mut items.constraints);
        items
    }

    /// Describes the rules as a schema, for body properties.
    pub fn to_schema(&self) -> Schema {
        let value_type = self.value_type();
        let mut schema = Schema::of(value_type);
        if value_type == SchemaType::Array {
            schema.items = Some(Box::new(Schema::string()));
        }
        self.apply_constraints(value_type, &mut schema.constraints);
        schema
    }

    fn apply_constraints(&self, value_type: SchemaType, constraints: &mut Constraints) {
        for rule in &self.rules {
            match rule {
                Rule::Format(format) => constraints.format = Some(format.clone()),
                Rule::Min(v) => set_bounds(constraints, value_type, Some(*v), None),
                Rule::Max(v) => set_bounds(constraints, value_type, None, Some(*v)),
                Rule::Between(low, high) => {
                    set_bounds(constraints, value_type, Some(*low), Some(*high));
                }
                Rule::Size(v) => set_bounds(constraints, value_type, Some(*v), Some(*v)),
                Rule::In(values) => {
                    constraints.enum_values = values
                        .iter()
                        .map(|v| enum_value(value_type, v))
                        .collect();
                }
                Rule::Regex(pattern) => constraints.pattern = Some(pattern.clone()),
                Rule::Required
                | Rule::Nullable
                | Rule::Sometimes
                | Rule::Type(_)
                | Rule::Other(_) => {}
            }
        }
    }
}

fn set_bounds(
    constraints: &mut Constraints,
    value_type: SchemaType,
    min: Option<f64>,
    max: Option<f64>,
) {
    match value_type {
        SchemaType::Integer | SchemaType::Number => {
            constraints.minimum = min.or(constraints.minimum);
            constraints.maximum = max.or(constraints.maximum);
        }
        SchemaType::Array => {
            constraints.min_items = min.map(count).or(constraints.min_items);
            constraints.max_items = max.map(count).or(constraints.max_items);
        }
        // Sizes of uploads are kilobytes, which Swagger cannot express.
        SchemaType::File => {}
        SchemaType::String | SchemaType::Boolean | SchemaType::Object => {
            constraints.min_length = min.map(count).or(constraints.min_length);
            constraints.max_length = max.map(count).or(constraints.max_length);
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(bound: f64) -> u64 {
    bound.max(0.0).round() as u64
}

fn enum_value(value_type: SchemaType, value: &str) -> serde_json::Value {
    match value_type {
        SchemaType::Integer => value
            .parse::<i64>()
            .map_or_else(|_| value.into(), serde_json::Value::from),
        SchemaType::Number => value
            .parse::<f64>()
            .map_or_else(|_| value.into(), serde_json::Value::from),
        _ => value.into(),
    }
}

fn strip_delimiters(pattern: &str) -> &str {
    let Some(delimiter) = pattern.chars().next() else {
        return pattern;
    };
    if delimiter.is_alphanumeric() || delimiter == '\\' {
        return pattern;
    }

    let body = &pattern[delimiter.len_utf8()..];
    match body.rfind(delimiter) {
        Some(end) => &body[..end],
        None => pattern,
    }
}

fn type_name(value_type: SchemaType) -> &'static str {
    match value_type {
        SchemaType::String => "string",
        SchemaType::Number => "numeric",
        SchemaType::Integer => "integer",
        SchemaType::Boolean => "boolean",
        SchemaType::Array => "array",
        SchemaType::Object => "object",
        SchemaType::File => "file",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(name: &str) -> Parameter {
        Parameter::new(name, ParameterLocation::Query)
    }

    #[test]
    fn test_parse_rule_set() {
        let rules = RuleSet::parse("age", "required|integer|min:1|max:10").unwrap();
        assert_eq!(rules.field(), "age");
        assert_eq!(
            rules.rules(),
            [
                Rule::Required,
                Rule::Type(SchemaType::Integer),
                Rule::Min(1.0),
                Rule::Max(10.0),
            ]
        );
    }

    #[test]
    fn test_parse_skips_empty_segments() {
        let rules = RuleSet::parse("name", "required||string|").unwrap();
        assert_eq!(rules.rules().len(), 2);
    }

    #[test]
    fn test_invalid_numeric_argument() {
        let err = RuleSet::parse("age", "integer|min:abc").unwrap_err();
        assert!(matches!(err, DocsError::InvalidRule { ref rule, .. } if rule == "min:abc"));
    }

    #[test]
    fn test_missing_argument() {
        assert!(RuleSet::parse("age", "max").is_err());
        assert!(RuleSet::parse("age", "between:1").is_err());
    }

    #[test]
    fn test_unknown_rules_ignored() {
        let rules = RuleSet::parse("email", "required|unique:users,email|confirmed").unwrap();
        let mut param = query("email");
        rules.apply(&mut param);

        assert!(param.required);
        assert_eq!(param.param_type, Some(SchemaType::String));
        assert_eq!(param.constraints, Constraints::default());
    }

    #[test]
    fn test_nullable_is_not_required() {
        let rules = RuleSet::parse("nickname", "nullable|string").unwrap();
        let mut param = query("nickname");
        param.required = true;
        rules.apply(&mut param);
        assert!(!param.required);

        let rules = RuleSet::parse("nickname", "sometimes|required|string").unwrap();
        assert!(rules.is_required());
    }

    #[test]
    fn test_numeric_bounds() {
        let rules = RuleSet::parse("price", "numeric|between:0.5,99.5").unwrap();
        let mut param = query("price");
        rules.apply(&mut param);

        assert_eq!(param.param_type, Some(SchemaType::Number));
        assert_eq!(param.constraints.minimum, Some(0.5));
        assert_eq!(param.constraints.maximum, Some(99.5));
        assert!(param.constraints.min_length.is_none());
    }

    #[test]
    fn test_string_length_bounds() {
        let rules = RuleSet::parse("name", "string|min:3|max:50").unwrap();
        let mut param = query("name");
        rules.apply(&mut param);

        assert_eq!(param.constraints.min_length, Some(3));
        assert_eq!(param.constraints.max_length, Some(50));
        assert!(param.constraints.minimum.is_none());
    }

    #[test]
    fn test_bounds_follow_final_type() {
        // Type declared after the bound still decides its meaning.
        let rules = RuleSet::parse("count", "min:2|integer").unwrap();
        let mut param = query("count");
        rules.apply(&mut param);
        assert_eq!(param.constraints.minimum, Some(2.0));
    }

    #[test]
    fn test_array_bounds_and_items() {
        let rules = RuleSet::parse("ids", "array|size:3").unwrap();
        let mut param = query("ids");
        rules.apply(&mut param);

        assert_eq!(param.param_type, Some(SchemaType::Array));
        assert_eq!(param.items, Some(Items::of(SchemaType::String)));
        assert_eq!(param.constraints.min_items, Some(3));
        assert_eq!(param.constraints.max_items, Some(3));
    }

    #[test]
    fn test_formats() {
        for (decl, format) in [
            ("email", "email"),
            ("date", "date"),
            ("date_format:Y-m-d H:i:s", "date-time"),
            ("uuid", "uuid"),
            ("url", "uri"),
            ("ip", "ipv4"),
        ] {
            let rules = RuleSet::parse("field", decl).unwrap();
            let mut param = query("field");
            rules.apply(&mut param);
            assert_eq!(param.constraints.format.as_deref(), Some(format), "{decl}");
        }
    }

    #[test]
    fn test_in_rule_enum() {
        let rules = RuleSet::parse("status", "in:active, inactive").unwrap();
        let mut param = query("status");
        rules.apply(&mut param);
        assert_eq!(
            param.constraints.enum_values,
            vec![serde_json::json!("active"), serde_json::json!("inactive")]
        );

        let rules = RuleSet::parse("level", "integer|in:1,2,3").unwrap();
        let mut param = query("level");
        rules.apply(&mut param);
        assert_eq!(
            param.constraints.enum_values,
            vec![serde_json::json!(1), serde_json::json!(2), serde_json::json!(3)]
        );
    }

    #[test]
    fn test_regex_rule() {
        let rules =
            RuleSet::from_rules("code", ["required", "regex:/^[A-Z]{2}|[0-9]{3}$/i"]).unwrap();
        let mut param = query("code");
        rules.apply(&mut param);
        assert_eq!(param.constraints.pattern.as_deref(), Some("^[A-Z]{2}|[0-9]{3}$"));
    }

    #[test]
    fn test_strip_delimiters() {
        assert_eq!(strip_delimiters("/abc/"), "abc");
        assert_eq!(strip_delimiters("#a/b#u"), "a/b");
        assert_eq!(strip_delimiters("abc"), "abc");
        assert_eq!(strip_delimiters("/unterminated"), "/unterminated");
        assert_eq!(strip_delimiters(""), "");
    }

    #[test]
    fn test_file_rule() {
        let rules = RuleSet::parse("avatar", "required|image|max:2048").unwrap();
        let mut param = Parameter::new("avatar", ParameterLocation::FormData);
        rules.apply(&mut param);

        assert_eq!(param.param_type, Some(SchemaType::File));
        assert!(param.constraints.max_length.is_none());
    }

    #[test]
    fn test_body_parameter_only_required() {
        let rules = RuleSet::parse("payload", "required|integer|min:1").unwrap();
        let mut param = Parameter::new("payload", ParameterLocation::Body);
        rules.apply(&mut param);

        assert!(param.required);
        assert!(param.param_type.is_none());
        assert!(param.constraints.minimum.is_none());
    }

    #[test]
    fn test_to_items_and_schema() {
        let rules = RuleSet::parse("tags.*", "string|max:20").unwrap();
        let items = rules.to_items();
        assert_eq!(items.item_type, SchemaType::String);
        assert_eq!(items.constraints.max_length, Some(20));

        let schema = RuleSet::parse("age", "integer|min:0").unwrap().to_schema();
        assert_eq!(schema.schema_type, Some(SchemaType::Integer));
        assert_eq!(schema.constraints.minimum, Some(0.0));
    }

    #[test]
    fn test_rule_display() {
        let rules = RuleSet::parse("x", "required|integer|between:1,5|in:a,b").unwrap();
        let rendered: Vec<_> = rules.rules().iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["required", "integer", "between:1,5", "in:a,b"]);
    }
}
