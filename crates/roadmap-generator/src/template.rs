//! HTML template system for page generation.
//!
//! A lightweight string-interpolation template rather than a full engine.
//! Variables are written `{{ name }}`; `{{ name? }}` renders empty when unset.

use std::collections::HashMap;

use thiserror::Error;

/// Template rendering errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Missing required variable.
    #[error("missing required variable: {0}")]
    MissingVariable(String),

    /// Template not found.
    #[error("template not found: {0}")]
    NotFound(String),

    /// Invalid template syntax.
    #[error("invalid template syntax: {0}")]
    InvalidSyntax(String),
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Template context with variables for interpolation.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    /// Create a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable into the context.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Builder-style insert.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }
}

/// A named template.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Render the template with the given context.
    ///
    /// Substituted values are never rescanned, so content containing `{{`
    /// (Go templates in `docker inspect --format`, for instance) is safe.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut result = self.content.clone();
        let mut pos = 0;

        while let Some(start) = result[pos..].find("{{") {
            let start = pos + start;
            let end = result[start..]
                .find("}}")
                .ok_or_else(|| TemplateError::InvalidSyntax("unclosed {{ delimiter".to_string()))?;
            let end = start + end + 2;

            let var_name = result[start + 2..end - 2].trim();

            let (var_name, optional) = match var_name.strip_suffix('?') {
                Some(stripped) => (stripped, true),
                None => (var_name, false),
            };

            let value = match context.get(var_name) {
                Some(v) => v.to_string(),
                None if optional => String::new(),
                None => return Err(TemplateError::MissingVariable(var_name.to_string())),
            };

            result.replace_range(start..end, &value);
            pos = start + value.len();
        }

        Ok(result)
    }
}

/// Registry of templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// Create a new registry with the built-in templates.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register(Template::new("base", DEFAULT_BASE_TEMPLATE));
        registry.register(Template::new("guide", DEFAULT_GUIDE_TEMPLATE));
        registry
    }

    /// Register a template, replacing any with the same name.
    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Render a named template with the given context.
    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        let template = self
            .get(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))?;
        template.render(context)
    }
}

/// Stylesheet shared with the interactive app.
pub const STYLESHEET: &str = include_str!("../../../style/main.css");

/// Document shell.
pub const DEFAULT_BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <meta name="description" content="{{ description? }}">
    <style>
{{ stylesheet }}
    </style>
</head>
<body>
{{ content }}
</body>
</html>
"##;

/// Page body: header, table of contents and the rendered groups.
pub const DEFAULT_GUIDE_TEMPLATE: &str = r##"<header class="roadmap-header">
    <div class="roadmap-header-inner">
        <h1>{{ site_title }}</h1>
        {{ query_note? }}
    </div>
</header>
<div class="roadmap-layout">
    {{ toc }}
    <main class="roadmap-main" id="roadmap-main">
        {{ groups }}
        <footer class="roadmap-footer">
            {{ footer_tip? }}
            <p>Generated {{ generated }}</p>
        </footer>
    </main>
</div>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_interpolation() {
        let template = Template::new("test", "Hello, {{ name }}!");
        let ctx = TemplateContext::new().with_var("name", "World");

        assert_eq!(template.render(&ctx).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_optional_variable() {
        let template = Template::new("test", "a{{ missing? }}b");
        assert_eq!(template.render(&TemplateContext::new()).unwrap(), "ab");
    }

    #[test]
    fn test_missing_required_variable() {
        let template = Template::new("test", "{{ required }}");
        let result = template.render(&TemplateContext::new());
        assert!(matches!(result, Err(TemplateError::MissingVariable(v)) if v == "required"));
    }

    #[test]
    fn test_unclosed_delimiter() {
        let template = Template::new("test", "{{ broken");
        let result = template.render(&TemplateContext::new());
        assert!(matches!(result, Err(TemplateError::InvalidSyntax(_))));
    }

    #[test]
    fn test_substituted_braces_are_not_rescanned() {
        let template = Template::new("test", "<pre>{{ code }}</pre>");
        let ctx = TemplateContext::new().with_var("code", "docker inspect -f '{{.State.Pid}}' web");

        assert_eq!(
            template.render(&ctx).unwrap(),
            "<pre>docker inspect -f '{{.State.Pid}}' web</pre>"
        );
    }

    #[test]
    fn test_registry_builtins() {
        let registry = TemplateRegistry::new();
        assert!(registry.get("base").is_some());
        assert!(registry.get("guide").is_some());
        assert!(matches!(
            registry.render("nope", &TemplateContext::new()),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_register_overrides() {
        let mut registry = TemplateRegistry::new();
        registry.register(Template::new("base", "<body>{{ content }}</body>"));

        let ctx = TemplateContext::new().with_var("content", "x");
        assert_eq!(registry.render("base", &ctx).unwrap(), "<body>x</body>");
    }
}
