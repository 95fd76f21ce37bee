//! Landing page builder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use landing_md::{extract_config, extract_content};

use crate::assets::AssetPipeline;
use crate::render::RenderContext;
use crate::templates::PageTemplate;

/// Configuration for building the landing page.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Configuration document (`**Key**: value` lines)
    pub config_path: PathBuf,

    /// Content document (`## ` sections)
    pub content_path: PathBuf,

    /// Stylesheet embedded in the page
    pub styles_path: PathBuf,

    /// Script embedded in the page
    pub script_path: PathBuf,

    /// Output HTML file
    pub output_path: PathBuf,

    /// Minify the embedded CSS
    pub minify: bool,
}

impl BuildConfig {
    /// Default source layout under a project root.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            config_path: root.join("content/config.md"),
            content_path: root.join("content/content.md"),
            styles_path: root.join("src/styles/main.css"),
            script_path: root.join("src/scripts/animation.js"),
            output_path: root.join("index.html"),
            minify: false,
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::from_root("")
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Written HTML file
    pub output_path: PathBuf,

    /// Size of the written file in bytes
    pub bytes: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

impl BuildResult {
    /// Output size in kilobytes.
    pub fn kilobytes(&self) -> f64 {
        self.bytes as f64 / 1024.0
    }
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read {}: {source}", path.display())]
    ReadError { path: PathBuf, source: io::Error },

    #[error("Failed to render template: {0}")]
    TemplateError(#[from] minijinja::Error),

    #[error("Failed to write {}: {source}", path.display())]
    WriteError { path: PathBuf, source: io::Error },
}

/// Source texts read from disk.
struct Sources {
    config: String,
    content: String,
    css: String,
    script: String,
}

/// Landing page builder.
pub struct SiteBuilder {
    config: BuildConfig,
    template: PageTemplate,
}

impl SiteBuilder {
    /// Create a new builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            template: PageTemplate::new(),
        }
    }

    /// Build the page and write it to the output path.
    ///
    /// Every source is read before anything is written, so a missing asset
    /// leaves any previous output untouched.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let sources = self.read_sources()?;

        let config = extract_config(&sources.config);
        let content = extract_content(&sources.content);
        tracing::debug!(
            "Extracted {} config keys and {} content sections",
            config.len(),
            content.len()
        );

        let css = if self.config.minify {
            self.minify(sources.css)
        } else {
            sources.css
        };

        let context = RenderContext::new(config, content, css, sources.script);
        let html = self.template.assemble(&context)?;

        self.write_output(&html)?;

        Ok(BuildResult {
            output_path: self.config.output_path.clone(),
            bytes: html.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn read_sources(&self) -> Result<Sources, BuildError> {
        Ok(Sources {
            config: read(&self.config.config_path)?,
            content: read(&self.config.content_path)?,
            css: read(&self.config.styles_path)?,
            script: read(&self.config.script_path)?,
        })
    }

    fn minify(&self, css: String) -> String {
        match AssetPipeline::minify_css(&css) {
            Ok(minified) => minified,
            Err(e) => {
                tracing::warn!(
                    "Failed to minify {}, embedding as-is: {}",
                    self.config.styles_path.display(),
                    e
                );
                css
            }
        }
    }

    fn write_output(&self, html: &str) -> Result<(), BuildError> {
        let path = &self.config.output_path;
        let write_error = |source: io::Error| BuildError::WriteError {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }

        fs::write(path, html).map_err(write_error)
    }
}

fn read(path: &Path) -> Result<String, BuildError> {
    let text = fs::read_to_string(path).map_err(|source| BuildError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Read {} ({} bytes)", path.display(), text.len());
    Ok(text)
}
