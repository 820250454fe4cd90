//! # Texed - A Modal Text Editor
//!
//! A small vim-style editor: Normal, Insert, Visual and Command modes over a
//! plain line buffer.
//!
//! ## Quick Start
//!
//! ```bash
//! # Open a scratch file (new_file.txt in the current directory)
//! cargo run
//!
//! # Open or create a file
//! cargo run -- path/to/notes.txt
//!
//! # Use another config file, with debug logging
//! cargo run -- -c my-config.toml -vv notes.txt
//! ```

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use texed_core::{Config, Session};
use texed_ui::{run, Flags};

/// File opened when none is given on the command line.
const PLACEHOLDER_FILE: &str = "new_file.txt";

/// Texed - a modal text editor
#[derive(Parser, Debug)]
#[command(name = "texed")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to open; created empty if it does not exist
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting texed v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(args.config.as_deref())?;

    let path = args.file.unwrap_or_else(|| PathBuf::from(PLACEHOLDER_FILE));
    materialize(&path)?;
    let session =
        Session::open(&path).with_context(|| format!("Cannot open {}", path.display()))?;

    // Run the application
    run(Flags { session, config }).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

/// An explicitly requested config file must load; the default one may be
/// missing or broken, in which case defaults are used.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    match explicit {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::load()),
    }
}

/// Creates an empty file at `path` if nothing is there yet.
fn materialize(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        return Ok(());
    }

    tracing::info!("Creating {}", path.display());
    std::fs::File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    Ok(())
}
