//! Swagger UI page.
//!
//! [`SwaggerUi`] renders a standalone HTML page that loads Swagger UI from a
//! CDN and points it at the document served next to it, under
//! `<path>/swagger.json`.
//!
//! ```rust
//! use routedoc_docs::{Info, Swagger, SwaggerUi};
//!
//! let doc = Swagger::new(Info {
//!     title: "Pets".to_string(),
//!     version: "1.0.0".to_string(),
//!     description: None,
//! });
//! let ui = SwaggerUi::new("/docs", &doc);
//!
//! assert_eq!(ui.spec_path(), "/docs/swagger.json");
//! assert!(ui.html().contains("/docs/swagger.json"));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::DocsResult;
use crate::swagger::Swagger;

/// Swagger UI release loaded from the CDN unless overridden.
pub const DEFAULT_SWAGGER_UI_VERSION: &str = "5.18.2";

/// Swagger UI page for one document.
#[derive(Debug, Clone)]
pub struct SwaggerUi {
    path: String,
    spec: Swagger,
    title: String,
    deep_linking: bool,
    doc_expansion: DocExpansion,
    display_request_duration: bool,
    swagger_version: String,
}

/// How far operations are expanded when the page opens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocExpansion {
    /// Everything collapsed.
    None,
    /// Tags expanded, operations collapsed.
    #[default]
    List,
    /// Everything expanded.
    Full,
}

impl DocExpansion {
    fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::List => "list",
            Self::Full => "full",
        }
    }
}

impl SwaggerUi {
    /// Creates the page for `spec`, served under `path`.
    #[must_use]
    pub fn new(path: impl Into<String>, spec: &Swagger) -> Self {
        Self {
            path: path.into(),
            title: format!("{} - Swagger UI", spec.info.title),
            spec: spec.clone(),
            deep_linking: true,
            doc_expansion: DocExpansion::default(),
            display_request_duration: true,
            swagger_version: DEFAULT_SWAGGER_UI_VERSION.to_string(),
        }
    }

    /// Sets the page title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Enables or disables deep linking.
    #[must_use]
    pub fn deep_linking(mut self, enabled: bool) -> Self {
        self.deep_linking = enabled;
        self
    }

    /// Sets the expansion level.
    #[must_use]
    pub fn doc_expansion(mut self, expansion: DocExpansion) -> Self {
        self.doc_expansion = expansion;
        self
    }

    /// Enables or disables the request duration display.
    #[must_use]
    pub fn display_request_duration(mut self, enabled: bool) -> Self {
        self.display_request_duration = enabled;
        self
    }

    /// Pins the Swagger UI release.
    #[must_use]
    pub fn swagger_version(mut self, version: impl Into<String>) -> Self {
        self.swagger_version = version.into();
        self
    }

    /// Path the page is served under.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path of the JSON document the page loads.
    pub fn spec_path(&self) -> String {
        format!("{}/swagger.json", self.path.trim_end_matches('/'))
    }

    /// The document as pretty JSON, to serve at [`SwaggerUi::spec_path`].
    pub fn spec_json(&self) -> DocsResult<String> {
        self.spec.to_json()
    }

    /// Renders the page.
    pub fn html(&self) -> String {
        format!(
            r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@{version}/swagger-ui.css" />
    <style>body {{ margin: 0; }}</style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@{version}/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {{
            window.ui = SwaggerUIBundle({{
                url: {spec_url},
                dom_id: "#swagger-ui",
                deepLinking: {deep_linking},
                docExpansion: "{doc_expansion}",
                displayRequestDuration: {display_duration},
                presets: [SwaggerUIBundle.presets.apis]
            }});
        }};
    </script>
</body>
</html>"##,
            title = html_escape(&self.title),
            version = html_escape(&self.swagger_version),
            spec_url = js_string(&self.spec_path()),
            deep_linking = self.deep_linking,
            doc_expansion = self.doc_expansion.as_str(),
            display_duration = self.display_request_duration,
        )
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Quotes a value as a JavaScript string literal safe inside `<script>`.
fn js_string(s: &str) -> String {
    serde_json::Value::from(s).to_string().replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swagger::Info;

    fn spec() -> Swagger {
        Swagger::new(Info {
            title: "Test API".to_string(),
            version: "1.0.0".to_string(),
            description: None,
        })
    }

    #[test]
    fn test_swagger_ui_paths() {
        let ui = SwaggerUi::new("/docs", &spec());
        assert_eq!(ui.path(), "/docs");
        assert_eq!(ui.spec_path(), "/docs/swagger.json");

        let ui = SwaggerUi::new("/docs/", &spec());
        assert_eq!(ui.spec_path(), "/docs/swagger.json");
    }

    #[test]
    fn test_swagger_ui_html() {
        let html = SwaggerUi::new("/docs", &spec()).html();
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("Test API - Swagger UI"));
        assert!(html.contains(r#"url: "/docs/swagger.json""#));
        assert!(html.contains(r#"docExpansion: "list""#));
        assert!(html.contains(DEFAULT_SWAGGER_UI_VERSION));
    }

    #[test]
    fn test_swagger_ui_options() {
        let html = SwaggerUi::new("/docs", &spec())
            .title("<Pets>")
            .deep_linking(false)
            .doc_expansion(DocExpansion::Full)
            .display_request_duration(false)
            .swagger_version("5.0.0")
            .html();

        assert!(html.contains("&lt;Pets&gt;"));
        assert!(html.contains("deepLinking: false"));
        assert!(html.contains(r#"docExpansion: "full""#));
        assert!(html.contains("displayRequestDuration: false"));
        assert!(html.contains("swagger-ui-dist@5.0.0"));
    }

    #[test]
    fn test_swagger_ui_spec_json() {
        let json = SwaggerUi::new("/docs", &spec()).spec_json().unwrap();
        assert!(json.contains("\"swagger\": \"2.0\""));
        assert!(json.contains("Test API"));
    }

    #[test]
    fn test_swagger_ui_spec_url_is_a_script_string() {
        let html = SwaggerUi::new("/a&b's", &spec()).html();
        assert!(html.contains(r#"url: "/a&b's/swagger.json""#));
        assert!(!html.contains("&amp;b"));

        let html = SwaggerUi::new(r#"/x"</script>"#, &spec()).html();
        assert!(html.contains(r#"url: "/x\"<\/script>/swagger.json""#));
        assert_eq!(html.matches("</script>").count(), 2);
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("'x'"), "&#x27;x&#x27;");
    }

    #[test]
    fn test_doc_expansion_serde() {
        let expansion: DocExpansion = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(expansion, DocExpansion::None);
        assert_eq!(DocExpansion::Full.as_str(), "full");
    }
}
