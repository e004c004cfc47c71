//! Prints the widget tree built from a UXML file as JSON.
//!
//! Usage: `uxml_snapshot <file.uxml>`. Warnings go to the tracing subscriber
//! (`RUST_LOG=warn`); configuration comes from `uibuddy.toml` and `UIBUDDY_*`.

use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;
use uibuddy::{UiBuddyConfig, UiBuilder};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: uxml_snapshot <file.uxml>");
    };

    let config = UiBuddyConfig::load();
    tracing::debug!(?config, "loaded configuration");

    let root = UiBuilder::with_config(config).build_file(&path)?;
    let json = serde_json::to_string_pretty(&root).context("failed to serialize widget tree")?;
    println!("{json}");
    Ok(())
}
