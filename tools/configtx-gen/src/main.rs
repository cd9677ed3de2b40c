//! configtx-gen: channel genesis block generator

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use configtx_gen::{run, Args};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let outcome = run(&args)
        .with_context(|| format!("Generating genesis block from {}", args.profile.display()))?;

    info!(
        channel_id = outcome.block.channel_id(),
        block_hash = %outcome.block.block_hash_hex(),
        tx_id = %outcome.block.metadata.tx_id,
        "[configtx-gen] Genesis block generated"
    );

    if let Some(tree) = outcome.inspection {
        println!("{tree}");
    }

    Ok(())
}
