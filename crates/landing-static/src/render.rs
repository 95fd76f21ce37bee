//! Page assembly from extracted fields and verbatim assets.

use landing_md::{ConfigMap, ContentMap};

use crate::assets::AssetPipeline;
use crate::fields::PageFields;
use crate::templates::PageTemplate;

/// Everything the assembler reads, built once per build.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Fields from the configuration document
    pub config: ConfigMap,
    /// Sections from the content document
    pub content: ContentMap,
    /// Stylesheet text, embedded as-is
    pub css: String,
    /// Script text, subject to navigation templating
    pub script: String,
}

impl RenderContext {
    pub fn new(
        config: ConfigMap,
        content: ContentMap,
        css: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        Self {
            config,
            content,
            css: css.into(),
            script: script.into(),
        }
    }
}

impl PageTemplate {
    /// Resolve fields, template the script, and render the page.
    pub fn assemble(&self, context: &RenderContext) -> Result<String, minijinja::Error> {
        let fields = PageFields::resolve(&context.config, &context.content);
        let script = AssetPipeline::template_script(&context.script, &fields.cta_link);

        self.render(&fields, &context.css, &script)
    }
}

/// Assemble a page with a fresh [`PageTemplate`].
pub fn assemble(context: &RenderContext) -> Result<String, minijinja::Error> {
    PageTemplate::new().assemble(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::*;
    use landing_md::{extract_config, extract_content};
    use pretty_assertions::assert_eq;

    const SCRIPT: &str = "btn.addEventListener('click', () => {\n  window.location.href = 'https://old.example/x';\n});";

    #[test]
    fn empty_context_uses_every_fallback() {
        let html = assemble(&RenderContext::default()).unwrap();

        assert!(html.contains(&format!("<title>{}</title>", DEFAULT_TITLE)));
        assert!(html.contains(&format!("<link href=\"{}\" rel=\"stylesheet\" />", DEFAULT_FONT_URL)));
        assert!(html.contains(&format!("<h1 id=\"title\">{}</h1>", DEFAULT_HEADING)));
        assert!(html.contains(&format!("<p id=\"tagline\">{}</p>", DEFAULT_TAGLINE)));
        assert!(html.contains(&format!(">{}</button>", DEFAULT_CTA_LABEL)));
    }

    #[test]
    fn script_points_at_configured_link() {
        let config = extract_config("**CTA Button Link**: https://new.example/y\n");
        let context = RenderContext::new(config, ContentMap::new(), "", SCRIPT);

        let html = assemble(&context).unwrap();

        let expected = SCRIPT.replace("https://old.example/x", "https://new.example/y");
        assert!(html.contains(&expected));
        assert!(!html.contains("old.example"));
    }

    #[test]
    fn script_falls_back_to_default_link() {
        let context = RenderContext::new(ConfigMap::new(), ContentMap::new(), "", SCRIPT);

        let html = assemble(&context).unwrap();

        assert!(html.contains(&format!("window.location.href = '{}';", DEFAULT_CTA_LINK)));
    }

    #[test]
    fn content_without_sections_still_renders() {
        let content = extract_content("# Just a title\n\n**Text**: outside any section\n");
        assert!(content.is_empty());

        let context = RenderContext::new(ConfigMap::new(), content, "main {}", "");
        let html = assemble(&context).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(&format!("<h1 id=\"title\">{}</h1>", DEFAULT_HEADING)));
        assert!(!html.contains("outside any section"));
    }

    #[test]
    fn css_is_embedded_verbatim() {
        let css = "body {\n  background: #000;\n}\n\n@media (max-width: 600px) { h1 { font-size: 2rem; } }\n";
        let context = RenderContext::new(ConfigMap::new(), ContentMap::new(), css, "");

        let html = assemble(&context).unwrap();

        assert!(html.contains(&format!("<style>\n{}\n    </style>", css)));
    }

    #[test]
    fn identical_context_gives_identical_output() {
        let context = RenderContext::new(
            extract_config("**Title**: Same\n"),
            extract_content("## Tagline\n**Text**: same\n"),
            "h1 {}",
            SCRIPT,
        );

        let engine = PageTemplate::new();
        assert_eq!(engine.assemble(&context).unwrap(), engine.assemble(&context).unwrap());
        assert_eq!(assemble(&context).unwrap(), assemble(&context).unwrap());
    }
}
