//! Template rendering for generated files.
//! The backend's `pom.xml` and entry point template carry `{{token}}`
//! placeholders that are substituted verbatim, while the generated properties
//! files are rendered with MiniJinja behind [`TemplateRenderer`].
use std::sync::LazyLock;

use indexmap::IndexMap;
use minijinja::{Environment, UndefinedBehavior};
use regex::{Captures, Regex};

use crate::error::{Error, Result};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder pattern is valid")
});

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - JSON object holding the variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// Replaces every `{{name}}` whose name is a key of `mapping`.
/// Tokens without a matching key are left untouched.
pub fn substitute(content: &str, mapping: &IndexMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(content, |caps: &Captures| match mapping.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Names of the placeholders still present in `content`, in order of
/// first appearance.
pub fn unresolved_placeholders(content: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(content) {
        let token = caps[1].to_string();
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

/// Substitutes placeholders and fails if any `{{...}}` marker survives.
///
/// # Errors
/// * `Error::UnresolvedPlaceholders` naming `path` and the leftover tokens
pub fn substitute_all(
    content: &str,
    mapping: &IndexMap<String, String>,
    path: &std::path::Path,
) -> Result<String> {
    let rendered = substitute(content, mapping);
    let tokens = unresolved_placeholders(&rendered);
    if !tokens.is_empty() || rendered.contains("{{") {
        return Err(Error::UnresolvedPlaceholders {
            path: path.display().to_string(),
            tokens,
        });
    }
    Ok(rendered)
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that fails on any variable missing from the
    /// context instead of rendering it empty.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template does not parse or refers to
    ///   a variable that is not in the context
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template("temp", template).map_err(Error::MinijinjaError)?;

        let tmpl = env.get_template("temp").map_err(Error::MinijinjaError)?;

        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapping(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_substitute_known_tokens() {
        let result = substitute(
            "<groupId>{{groupId}}</groupId><name>{{ projectName }}</name>",
            &mapping(&[("groupId", "com.acme"), ("projectName", "acme-shop")]),
        );
        assert_eq!(result, "<groupId>com.acme</groupId><name>acme-shop</name>");
    }

    #[test]
    fn test_substitute_leaves_unknown_tokens() {
        let result = substitute("{{known}} {{unknown}}", &mapping(&[("known", "x")]));
        assert_eq!(result, "x {{unknown}}");
        assert_eq!(unresolved_placeholders(&result), vec!["unknown"]);
    }

    #[test]
    fn test_substitute_values_are_not_reinterpreted() {
        let result = substitute("{{a}}", &mapping(&[("a", "{{b}}"), ("b", "nope")]));
        assert_eq!(result, "{{b}}");
    }

    #[test]
    fn test_substitute_all_rejects_leftovers() {
        let err = substitute_all("{{a}} {{b}}", &mapping(&[("a", "1")]), "pom.xml".as_ref())
            .unwrap_err();
        match err {
            Error::UnresolvedPlaceholders { path, tokens } => {
                assert_eq!(path, "pom.xml");
                assert_eq!(tokens, vec!["b"]);
            }
            other => panic!("Expected UnresolvedPlaceholders, got {other:?}"),
        }
    }

    #[test]
    fn test_minijinja_renderer_is_strict() {
        let renderer = MiniJinjaRenderer::new();
        let context = json!({"name": "test"});

        assert_eq!(renderer.render("Hello {{ name }}!", &context).unwrap(), "Hello test!");
        assert!(renderer.render("Hello {{ missing }}!", &context).is_err());
    }
}
