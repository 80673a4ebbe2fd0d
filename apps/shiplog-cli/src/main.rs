//! shiplog entry point.

mod app;
mod config;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Copy a directory tree while logging throttled transfer progress.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Source directory
    src: PathBuf,

    /// Destination directory
    dst: PathBuf,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Bytes per copy chunk (overrides config)
    #[arg(long)]
    chunk_size: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting shiplog");

    let mut config = config::Config::load(args.config.as_deref())?;
    if let Some(chunk_size) = args.chunk_size {
        config.chunk_size = chunk_size;
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(app::run(config, args.src, args.dst))?;

    Ok(())
}
