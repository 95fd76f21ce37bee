//! Configuration file structure (landing.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use landing_static::BuildConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    paths: PathsConfig,
    #[serde(default)]
    build: BuildSettings,
}

#[derive(Debug, Deserialize)]
struct PathsConfig {
    #[serde(default = "default_config")]
    config: PathBuf,
    #[serde(default = "default_content")]
    content: PathBuf,
    #[serde(default = "default_styles")]
    styles: PathBuf,
    #[serde(default = "default_script")]
    script: PathBuf,
    #[serde(default = "default_output")]
    output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            config: default_config(),
            content: default_content(),
            styles: default_styles(),
            script: default_script(),
            output: default_output(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct BuildSettings {
    #[serde(default)]
    minify: bool,
}

fn default_config() -> PathBuf {
    PathBuf::from("content/config.md")
}
fn default_content() -> PathBuf {
    PathBuf::from("content/content.md")
}
fn default_styles() -> PathBuf {
    PathBuf::from("src/styles/main.css")
}
fn default_script() -> PathBuf {
    PathBuf::from("src/scripts/animation.js")
}
fn default_output() -> PathBuf {
    PathBuf::from("index.html")
}

impl ConfigFile {
    /// Load configuration if the file exists.
    /// Returns an error if the file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Resolve into a build configuration, relative paths taken from `root`.
    pub fn into_build_config(self, root: &Path) -> BuildConfig {
        let paths = self.paths;
        BuildConfig {
            config_path: root.join(paths.config),
            content_path: root.join(paths.content),
            styles_path: root.join(paths.styles),
            script_path: root.join(paths.script),
            output_path: root.join(paths.output),
            minify: self.build.minify,
        }
    }
}

/// Written by `landing init`.
pub const DEFAULT_CONFIG_FILE: &str = r#"# Landing page build configuration

[paths]
config = "content/config.md"
content = "content/content.md"
styles = "src/styles/main.css"
script = "src/scripts/animation.js"
output = "index.html"

[build]
# Minify the embedded stylesheet
minify = false
"#;
