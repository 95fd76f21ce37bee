//! HTML shell for the landing page.

use minijinja::{context, AutoEscape, Environment};

use crate::fields::PageFields;

/// Template engine holding the page shell.
pub struct PageTemplate {
    env: Environment<'static>,
}

impl PageTemplate {
    /// Create a template engine with the page shell loaded.
    pub fn new() -> Self {
        let mut env = Environment::new();

        // Fields and assets are inserted verbatim.
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.add_template("page.html", PAGE_TEMPLATE)
            .expect("Failed to add page template");

        Self { env }
    }

    /// Render the page from resolved fields, the stylesheet, and the templated script.
    pub fn render(
        &self,
        fields: &PageFields,
        css: &str,
        script: &str,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;

        tmpl.render(context! {
            page => fields,
            css => css,
            script => script,
        })
    }
}

impl Default for PageTemplate {
    fn default() -> Self {
        Self::new()
    }
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{ page.title }}</title>
    <link rel="preconnect" href="https://fonts.gstatic.com" />
    <link href="{{ page.font_url }}" rel="stylesheet" />
    <style>
{{ css }}
    </style>
  </head>
  <body>
    <main>
      <div class="content-wrapper">
        <h1 id="title">{{ page.heading }}</h1>
        <p id="tagline">{{ page.tagline }}</p>
      </div>
      <button id="cta" aria-label="{{ page.cta_label }}">{{ page.cta_label }}</button>
    </main>

    <script defer>
{{ script }}
    </script>
  </body>
</html>"##;
