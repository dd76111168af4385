//! Route parameter reconciliation.
//!
//! Turns the placeholders of a URI template into the path parameters of an
//! operation, substituting shared parameter definitions where one is
//! registered under the placeholder's raw text.

use std::sync::Arc;

use indexmap::IndexMap;
use routedoc_router::path_tokens;
use serde::{Deserialize, Serialize};

use crate::swagger::Parameter;

/// Shared parameter definitions keyed by placeholder text.
pub type ParameterOverrides = IndexMap<String, Arc<Parameter>>;

/// How a shared definition is attached when it matches a placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverrideMode {
    /// Attach the shared definition itself. Its own `required` flag is kept
    /// even when the placeholder says otherwise.
    #[default]
    Passthrough,
    /// Attach a copy whose `required` flag follows the placeholder:
    /// `{name}` forces required, `{name?}` clears it.
    Adjusted,
}

/// Builds the path parameters for a URI template.
///
/// One parameter is produced per `{...}` token, in template order:
///
/// - a token whose raw text (including a trailing `?`) is a key of
///   `overrides` yields that shared definition, attached per `mode`;
/// - any other token yields a fresh string path parameter named after the
///   token with `?` trimmed, required unless the token ends with `?`.
///
/// Duplicate tokens produce duplicate entries; callers attaching the result
/// to an operation collapse them by (location, name).
///
/// # Example
///
/// ```rust
/// use routedoc_docs::{reconcile, OverrideMode, ParameterOverrides};
///
/// let params = reconcile(
///     "/users/{userId}/posts/{postId?}",
///     &ParameterOverrides::new(),
///     OverrideMode::Passthrough,
/// );
///
/// assert_eq!(params.len(), 2);
/// assert!(params[0].required);
/// assert!(!params[1].required);
/// ```
#[must_use]
pub fn reconcile(
    template: &str,
    overrides: &ParameterOverrides,
    mode: OverrideMode,
) -> Vec<Arc<Parameter>> {
    path_tokens(template)
        .into_iter()
        .map(|token| match overrides.get(&token.raw) {
            Some(shared) => match mode {
                OverrideMode::Passthrough => Arc::clone(shared),
                OverrideMode::Adjusted => {
                    let mut adjusted = Parameter::clone(shared);
                    adjusted.required = token.required;
                    Arc::new(adjusted)
                }
            },
            None => Arc::new(Parameter::path(token.name, token.required)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swagger::{ParameterLocation, SchemaType};
    use proptest::prelude::*;

    fn shared(name: &str, required: bool) -> Arc<Parameter> {
        let mut param = Parameter::new(name, ParameterLocation::Path)
            .with_type(SchemaType::Integer)
            .with_description("Shared definition");
        param.required = required;
        Arc::new(param)
    }

    #[test]
    fn test_reconcile_synthesizes_path_parameters() {
        let params = reconcile(
            "/users/{userId}/posts/{postId?}",
            &ParameterOverrides::new(),
            OverrideMode::Passthrough,
        );

        assert_eq!(params.len(), 2);
        assert_eq!(*params[0], Parameter::path("userId", true));
        assert_eq!(*params[1], Parameter::path("postId", false));
        assert_eq!(params[1].param_type, Some(SchemaType::String));
        assert_eq!(params[1].location, ParameterLocation::Path);
        assert!(params[1].description.is_none());
    }

    #[test]
    fn test_reconcile_empty_template() {
        let params = reconcile("", &ParameterOverrides::new(), OverrideMode::Passthrough);
        assert!(params.is_empty());
    }

    #[test]
    fn test_reconcile_passthrough_keeps_identity() {
        let def = shared("id", false);
        let mut overrides = ParameterOverrides::new();
        overrides.insert("id".to_string(), Arc::clone(&def));

        let params = reconcile("/users/{id}", &overrides, OverrideMode::Passthrough);

        assert_eq!(params.len(), 1);
        assert!(Arc::ptr_eq(&params[0], &def));
        // The shared flag wins over the required placeholder.
        assert!(!params[0].required);
    }

    #[test]
    fn test_reconcile_adjusted_follows_placeholder() {
        let def = shared("id", false);
        let mut overrides = ParameterOverrides::new();
        overrides.insert("id".to_string(), Arc::clone(&def));

        let params = reconcile("/users/{id}", &overrides, OverrideMode::Adjusted);

        assert!(!Arc::ptr_eq(&params[0], &def));
        assert!(params[0].required);
        assert_eq!(params[0].description.as_deref(), Some("Shared definition"));
        assert!(!def.required);
    }

    #[test]
    fn test_reconcile_adjusted_optional_clears_required() {
        let def = shared("slug", true);
        let mut overrides = ParameterOverrides::new();
        overrides.insert("slug?".to_string(), Arc::clone(&def));

        let params = reconcile("/posts/{slug?}", &overrides, OverrideMode::Adjusted);
        assert!(!params[0].required);
        assert!(def.required);
    }

    #[test]
    fn test_reconcile_override_matches_raw_token_only() {
        let def = shared("id", true);
        let mut overrides = ParameterOverrides::new();
        overrides.insert("id".to_string(), Arc::clone(&def));

        let params = reconcile("/users/{id?}", &overrides, OverrideMode::Passthrough);

        assert!(!Arc::ptr_eq(&params[0], &def));
        assert_eq!(*params[0], Parameter::path("id", false));
    }

    #[test]
    fn test_reconcile_duplicate_tokens() {
        let params = reconcile("/{id}/{id}", &ParameterOverrides::new(), OverrideMode::Passthrough);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_reconcile_question_mark_only() {
        let params = reconcile("/{?}", &ParameterOverrides::new(), OverrideMode::Passthrough);
        assert_eq!(params[0].name, "");
        assert!(!params[0].required);
    }

    proptest! {
        #[test]
        fn prop_one_parameter_per_token(
            names in proptest::collection::vec("[a-z]{1,6}\\??", 0..6),
            literal in "[a-z/]{0,6}",
        ) {
            let template: String = names
                .iter()
                .map(|n| format!("{literal}/{{{n}}}"))
                .collect();
            let params =
                reconcile(&template, &ParameterOverrides::new(), OverrideMode::Passthrough);

            prop_assert_eq!(params.len(), names.len());
            for (param, raw) in params.iter().zip(&names) {
                prop_assert_eq!(param.name.as_str(), raw.trim_matches('?'));
                prop_assert_eq!(param.required, !raw.ends_with('?'));
            }
        }
    }
}
