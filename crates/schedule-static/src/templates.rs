//! Standalone page shell.

use minijinja::Environment;

/// Context for rendering the page shell.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ShellContext {
    /// Document title
    pub title: String,
    /// Rendered page fragment
    pub body: String,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in shell template.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("shell.html", SHELL_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Wrap a page fragment in a full HTML document.
    pub fn render_shell(&self, context: &ShellContext) -> Result<String, minijinja::Error> {
        self.env.get_template("shell.html")?.render(context)
    }
}

const SHELL_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta http-equiv="Content-Type" content="text/html; charset=UTF-8">
<title>{{ title }}</title>
</head>
<body>
{{ body | safe }}
</body>
</html>"##;
