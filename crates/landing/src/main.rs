//! Landing CLI - builds a single-file landing page from markdown sources.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod settings;

#[derive(Parser)]
#[command(name = "landing")]
#[command(about = "Builds a self-contained landing page from markdown, CSS, and a script")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to landing.toml config file
    #[arg(short, long, default_value = "landing.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold content, styles, and script in the current directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Build the landing page
    Build {
        /// Output file (defaults to config or "index.html")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minify the embedded CSS
        #[arg(long)]
        minify: bool,
    },

    /// Preview the built page
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to serve
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(yes)?;
        }
        Commands::Build { output, minify } => {
            let minify = if minify { Some(true) } else { None };
            commands::build::run(&cli.config, output, minify)?;
        }
        Commands::Serve { port, dir } => {
            commands::serve::run(port, dir).await?;
        }
    }

    Ok(())
}
