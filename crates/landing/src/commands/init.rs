//! Scaffold a landing page project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::settings::DEFAULT_CONFIG_FILE;

const DEFAULT_CONFIG_MD: &str = include_str!("../scaffold/config.md");
const DEFAULT_CONTENT_MD: &str = include_str!("../scaffold/content.md");
const DEFAULT_CSS: &str = include_str!("../scaffold/main.css");
const DEFAULT_JS: &str = include_str!("../scaffold/animation.js");

/// Files created by `init`, relative to the project root.
const SCAFFOLD: &[(&str, &str)] = &[
    ("landing.toml", DEFAULT_CONFIG_FILE),
    ("content/config.md", DEFAULT_CONFIG_MD),
    ("content/content.md", DEFAULT_CONTENT_MD),
    ("src/styles/main.css", DEFAULT_CSS),
    ("src/scripts/animation.js", DEFAULT_JS),
];

/// Run the init command.
pub fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing landing page...");

    let created = scaffold(Path::new("."), yes)?;

    if created == 0 {
        tracing::warn!("All files already exist. Use --yes to overwrite.");
        return Ok(());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'landing build' to generate index.html.");

    Ok(())
}

/// Write scaffold files under `root`, keeping existing ones unless `overwrite`.
///
/// Returns the number of files written.
fn scaffold(root: &Path, overwrite: bool) -> Result<usize> {
    let mut written = 0;

    for (relative, contents) in SCAFFOLD {
        let path = root.join(relative);

        if path.exists() && !overwrite {
            tracing::debug!("Keeping existing {}", relative);
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        fs::write(&path, contents).with_context(|| format!("Failed to write {}", relative))?;
        tracing::info!("Created {}", relative);
        written += 1;
    }

    Ok(written)
}
