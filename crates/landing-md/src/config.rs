//! Flat configuration extraction.

use std::collections::BTreeMap;

use crate::line::parse_key_value_line;

/// Normalized key to raw value mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMap {
    entries: BTreeMap<String, String>,
}

impl ConfigMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value by its normalized key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert a value, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Scan lines and insert every bold+colon field found.
    pub(crate) fn extend_from_lines<'a>(&mut self, lines: impl Iterator<Item = &'a str>) {
        for (key, value) in lines.filter_map(parse_key_value_line) {
            self.entries.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConfigMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Extract a [`ConfigMap`] from a flat markdown document.
///
/// Lines that are not `**Key**: value` fields are ignored.
pub fn extract_config(source: &str) -> ConfigMap {
    let mut config = ConfigMap::new();
    config.extend_from_lines(source.lines());
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_config_document() {
        let source = r#"# Site Configuration

Free-form notes about the page live here.

## Metadata

- **Title**: RNA Cartography
- **Google Fonts URL**: https://fonts.googleapis.com/css2?family=Anton&display=swap

## Links

- **CTA Button Link**: https://example.org/talks/2025
"#;

        let config = extract_config(source);

        assert_eq!(config.len(), 3);
        assert_eq!(config.get("title"), Some("RNA Cartography"));
        assert_eq!(
            config.get("google_fonts_url"),
            Some("https://fonts.googleapis.com/css2?family=Anton&display=swap")
        );
        assert_eq!(
            config.get("cta_button_link"),
            Some("https://example.org/talks/2025")
        );
    }

    #[test]
    fn last_duplicate_wins() {
        let config = extract_config("**A**: 1\nsomething else\n**a**: 2\n");

        assert_eq!(config.len(), 1);
        assert_eq!(config.get("a"), Some("2"));
    }

    #[test]
    fn prose_does_not_overwrite_field() {
        let source = "# Config\n\n**Title**: Real\n\n**Title** note: overwritten later?\n";

        let config = extract_config(source);

        assert_eq!(config.get("title"), Some("Real"));
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn empty_document_yields_empty_map() {
        assert!(extract_config("").is_empty());
        assert!(extract_config("\n\n# Heading only\n").is_empty());
    }

    #[test]
    fn handles_crlf_line_endings() {
        let config = extract_config("**Title**: Landing\r\n**Theme**: dark\r\n");

        assert_eq!(config.get("title"), Some("Landing"));
        assert_eq!(config.get("theme"), Some("dark"));
    }

    #[test]
    fn iterates_in_key_order() {
        let config = extract_config("**b**: 2\n**a**: 1\n");
        let keys: Vec<_> = config.iter().map(|(k, _)| k).collect();

        assert_eq!(keys, vec!["a", "b"]);
    }
}
