//! Landing page build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use landing_static::SiteBuilder;

use crate::settings::ConfigFile;

/// Run the build command.
pub fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building landing page...");

    let root = config_path.parent().unwrap_or(Path::new(""));
    let mut config = ConfigFile::load(config_path)?.into_build_config(root);

    if let Some(output) = output {
        config.output_path = output;
    }
    if let Some(minify) = minify {
        config.minify = minify;
    }

    let result = SiteBuilder::new(config).build()?;

    let name = result
        .output_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| result.output_path.display().to_string());

    tracing::info!("Built {} successfully in {}ms", name, result.duration_ms);
    tracing::info!("Output: {}", result.output_path.display());
    tracing::info!("Size: {:.1} KB", result.kilobytes());

    Ok(())
}
