//! Page field resolution with literal fallbacks.

use landing_md::{ConfigMap, ContentMap};

pub const DEFAULT_TITLE: &str = "RNA Cartography";
pub const DEFAULT_FONT_URL: &str = "https://fonts.googleapis.com/css2?family=Anton&display=swap";
pub const DEFAULT_CTA_LINK: &str = "https://openemage.org";
pub const DEFAULT_HEADING: &str = "RNA CARTOGRAPHY";
pub const DEFAULT_TAGLINE: &str = "charting the mRNA life cycle in native context";
pub const DEFAULT_CTA_LABEL: &str = "stay tuned";

/// Where a templated field is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A key in the configuration document.
    Config(&'static str),
    /// A key inside a section of the content document.
    Content {
        section: &'static str,
        key: &'static str,
    },
}

/// A templated field: lookup path plus fallback.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub source: Source,
    pub fallback: &'static str,
}

impl Field {
    /// Resolve against the extracted maps. Absence falls back, never errors.
    pub fn resolve<'a>(&self, config: &'a ConfigMap, content: &'a ContentMap) -> &'a str {
        let found = match self.source {
            Source::Config(key) => config.get(key),
            Source::Content { section, key } => content.field(section, key),
        };
        found.unwrap_or(self.fallback)
    }
}

pub const TITLE: Field = Field {
    source: Source::Config("title"),
    fallback: DEFAULT_TITLE,
};

pub const FONT_URL: Field = Field {
    source: Source::Config("google_fonts_url"),
    fallback: DEFAULT_FONT_URL,
};

pub const CTA_LINK: Field = Field {
    source: Source::Config("cta_button_link"),
    fallback: DEFAULT_CTA_LINK,
};

pub const HEADING: Field = Field {
    source: Source::Content {
        section: "main_heading",
        key: "text",
    },
    fallback: DEFAULT_HEADING,
};

pub const TAGLINE: Field = Field {
    source: Source::Content {
        section: "tagline",
        key: "text",
    },
    fallback: DEFAULT_TAGLINE,
};

pub const CTA_LABEL: Field = Field {
    source: Source::Content {
        section: "call_to_action_button",
        key: "text",
    },
    fallback: DEFAULT_CTA_LABEL,
};

/// Resolved values for every templated field of the page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PageFields {
    /// Document title
    pub title: String,
    /// Font stylesheet URL
    pub font_url: String,
    /// Call-to-action destination
    pub cta_link: String,
    /// Main heading text
    pub heading: String,
    /// Tagline text
    pub tagline: String,
    /// Call-to-action button label
    pub cta_label: String,
}

impl PageFields {
    /// Resolve every field, falling back where a lookup is absent.
    pub fn resolve(config: &ConfigMap, content: &ContentMap) -> Self {
        let get = |field: Field| field.resolve(config, content).to_string();

        Self {
            title: get(TITLE),
            font_url: get(FONT_URL),
            cta_link: get(CTA_LINK),
            heading: get(HEADING),
            tagline: get(TAGLINE),
            cta_label: get(CTA_LABEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_md::{extract_config, extract_content};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_maps_resolve_to_fallbacks() {
        let fields = PageFields::resolve(&ConfigMap::new(), &ContentMap::new());

        assert_eq!(
            fields,
            PageFields {
                title: DEFAULT_TITLE.to_string(),
                font_url: DEFAULT_FONT_URL.to_string(),
                cta_link: DEFAULT_CTA_LINK.to_string(),
                heading: DEFAULT_HEADING.to_string(),
                tagline: DEFAULT_TAGLINE.to_string(),
                cta_label: DEFAULT_CTA_LABEL.to_string(),
            }
        );
    }

    #[test]
    fn resolves_from_extracted_maps() {
        let config = extract_config(
            "**Title**: Landing\n**Google Fonts URL**: https://fonts.example/a\n**CTA Button Link**: https://example.org/go\n",
        );
        let content = extract_content(
            "## Main Heading\n**Text**: HELLO\n## Tagline\n**Text**: a tagline\n## Call to Action Button\n**Text**: go\n",
        );

        let fields = PageFields::resolve(&config, &content);

        assert_eq!(fields.title, "Landing");
        assert_eq!(fields.font_url, "https://fonts.example/a");
        assert_eq!(fields.cta_link, "https://example.org/go");
        assert_eq!(fields.heading, "HELLO");
        assert_eq!(fields.tagline, "a tagline");
        assert_eq!(fields.cta_label, "go");
    }

    #[test]
    fn section_without_key_falls_back() {
        let content = extract_content("## Tagline\n**Style**: italic\n");

        assert_eq!(TAGLINE.resolve(&ConfigMap::new(), &content), DEFAULT_TAGLINE);
    }

    #[test]
    fn empty_value_is_not_absent() {
        let config = extract_config("**Title**:\n");

        assert_eq!(TITLE.resolve(&config, &ContentMap::new()), "");
    }
}
