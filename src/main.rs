use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Rewrites local-offset `<time>` values in a GPX track file to UTC.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the .gpx file to fix in place.
    path: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let rewritten: usize = gpx_normalizer::from_gpx_file(&cli.path)
        .with_context(|| format!("failed to fix '{}'", cli.path))?;
    tracing::info!(fields = rewritten, path = %cli.path, "time values converted to UTC");
    println!("done");
    Ok(())
}
