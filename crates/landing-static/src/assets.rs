//! Asset processing for the embedded stylesheet and script.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Navigation assignment whose URL literal is replaced by the configured link.
static NAVIGATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"window\.location\.href = ['"][^'"]*['"];"#)
        .expect("navigation pattern is a valid regex")
});

/// Errors from CSS processing.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("CSS parse error: {0}")]
    CssParse(String),

    #[error("CSS minify error: {0}")]
    CssMinify(String),
}

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Point the script's first navigation assignment at `url`.
    ///
    /// A script without such an assignment is returned unchanged.
    pub fn template_script(script: &str, url: &str) -> String {
        let replacement = format!("window.location.href = '{}';", url);
        NAVIGATION
            .replace(script, NoExpand(&replacement))
            .into_owned()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, AssetError> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| AssetError::CssParse(e.to_string()))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| AssetError::CssMinify(e.to_string()))?;

        Ok(minified.code)
    }
}
