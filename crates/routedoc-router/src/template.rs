//! URI template token extraction.
//!
//! Route URIs carry placeholder segments of the form `{name}` (required) or
//! `{name?}` (optional). This module pulls those tokens out in left-to-right
//! order using a small-vector so the common case of a handful of
//! placeholders never touches the heap.

use std::sync::OnceLock;

use regex::Regex;
use smallvec::SmallVec;

/// Maximum number of tokens stored inline (stack allocated).
const INLINE_TOKENS: usize = 4;

/// Tokens extracted from one URI template, in template order.
pub type PathTokens = SmallVec<[PathToken; INLINE_TOKENS]>;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{(.*?)\}").expect("valid regex"))
}

/// A single `{...}` placeholder found in a URI template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathToken {
    /// Inner text of the placeholder, including any trailing `?`.
    pub raw: String,
    /// Placeholder name with `?` markers trimmed from both ends.
    pub name: String,
    /// False when the placeholder ends with `?`.
    pub required: bool,
}

impl PathToken {
    /// Builds a token from the inner text of a placeholder.
    ///
    /// ```rust
    /// use routedoc_router::PathToken;
    ///
    /// let token = PathToken::from_raw("postId?");
    /// assert_eq!(token.name, "postId");
    /// assert!(!token.required);
    /// ```
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            name: raw.trim_matches('?').to_string(),
            required: !raw.ends_with('?'),
        }
    }
}

/// Extracts every `{...}` token from a URI template.
///
/// Matching is non-greedy, so `{a}{b}` yields two tokens. Duplicates are
/// kept; a template without placeholders yields an empty list.
///
/// # Example
///
/// ```rust
/// use routedoc_router::path_tokens;
///
/// let tokens = path_tokens("/users/{userId}/posts/{postId?}");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].name, "userId");
/// assert!(tokens[0].required);
/// assert_eq!(tokens[1].name, "postId");
/// assert!(!tokens[1].required);
/// ```
#[must_use]
pub fn path_tokens(template: &str) -> PathTokens {
    token_pattern()
        .captures_iter(template)
        .filter_map(|cap| cap.get(1))
        .map(|inner| PathToken::from_raw(inner.as_str()))
        .collect()
}

/// Rewrites `{name?}` placeholders to `{name}`.
///
/// Swagger path keys have no notion of optional segments, so the marker is
/// dropped when a route URI becomes a document path.
#[must_use]
pub fn strip_optional_markers(template: &str) -> String {
    token_pattern()
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let inner = caps.get(1).map_or("", |m| m.as_str());
            format!("{{{}}}", inner.trim_matches('?'))
        })
        .into_owned()
}
