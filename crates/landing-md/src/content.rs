//! Sectioned content extraction.

use std::collections::BTreeMap;

use crate::config::ConfigMap;
use crate::line::normalize_key;

/// Token that opens a content section.
pub const SECTION_MARKER: &str = "## ";

/// Normalized section title to that section's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentMap {
    sections: BTreeMap<String, ConfigMap>,
}

impl ContentMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields of a section, if the section exists.
    pub fn section(&self, title: &str) -> Option<&ConfigMap> {
        self.sections.get(title)
    }

    /// A single field inside a section.
    pub fn field(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|fields| fields.get(key))
    }

    /// Insert a section, replacing any section with the same title.
    pub fn insert(&mut self, title: impl Into<String>, fields: ConfigMap) {
        self.sections.insert(title.into(), fields);
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate sections in title order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigMap)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Extract a [`ContentMap`] from a document split by [`SECTION_MARKER`].
///
/// Text before the first marker is a preamble and is dropped. Each section's
/// first line is its title; the remaining lines are scanned for fields.
pub fn extract_content(source: &str) -> ContentMap {
    let mut content = ContentMap::new();

    for segment in source.split(SECTION_MARKER).skip(1) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let mut lines = segment.lines();
        let title = lines.next().map(normalize_key).unwrap_or_default();

        let mut fields = ConfigMap::new();
        fields.extend_from_lines(lines);

        content.insert(title, fields);
    }

    content
}
