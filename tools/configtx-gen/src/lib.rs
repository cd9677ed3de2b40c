//! # configtx-gen
//!
//! Command-line front end for the channel bootstrapper.
//!
//! Reads a JSON network profile, verifies every organization from its MSP
//! directory, composes the genesis configuration and writes the encoded
//! genesis block.
//!
//! Relative MSP directories in the profile are resolved against the
//! profile's own directory, so a profile can be moved together with its
//! crypto material.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use channel_bootstrap::{
    BootstrapDependencies, BootstrapError, Bootstrapper, ConfigurationError,
    DefaultGenesisAssembler, DirectoryIdentityLoader, Profile,
};
use clap::Parser;
use shared_types::keys::TEST_CHAIN_ID;
use shared_types::{EncodingError, GenesisBlock};
use thiserror::Error;
use tracing::info;

/// Build a channel genesis block from a network profile
#[derive(Parser, Debug, Clone)]
#[command(name = "configtx-gen")]
#[command(about = "Generate channel genesis blocks from network profiles")]
pub struct Args {
    /// Path to the JSON profile
    #[arg(short, long)]
    pub profile: PathBuf,

    /// Channel to generate the genesis block for
    #[arg(short, long, default_value = TEST_CHAIN_ID)]
    pub channel_id: String,

    /// Where to write the encoded genesis block
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the composed configuration tree as JSON
    #[arg(long)]
    pub inspect: bool,

    /// Fixed block timestamp (Unix seconds) for reproducible output
    #[arg(long)]
    pub timestamp: Option<u64>,
}

/// Tool failures
#[derive(Debug, Error)]
pub enum GenError {
    #[error("Failed to read profile {path}: {source}")]
    ReadProfile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write genesis block to {path}: {source}")]
    WriteBlock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error("Failed to render configuration: {0}")]
    Render(#[from] serde_json::Error),
}

/// What a run produced
#[derive(Debug)]
pub struct Outcome {
    /// The generated block
    pub block: GenesisBlock,
    /// File the block was written to, if any
    pub written_to: Option<PathBuf>,
    /// Pretty-printed configuration tree, if requested
    pub inspection: Option<String>,
}

/// Load a profile and resolve its MSP directories relative to its location
pub fn load_profile(path: &Path) -> Result<Profile, GenError> {
    let document = fs::read_to_string(path).map_err(|source| GenError::ReadProfile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut profile = Profile::from_json(&document)?;

    if let Some(base) = path.parent() {
        profile.resolve_paths(base);
    }
    Ok(profile)
}

/// Execute one generation run
pub fn run(args: &Args) -> Result<Outcome, GenError> {
    let profile = load_profile(&args.profile)?;

    let assembler = match args.timestamp {
        Some(timestamp) => DefaultGenesisAssembler::with_timestamp(timestamp),
        None => DefaultGenesisAssembler::new(),
    };
    let deps = BootstrapDependencies::new(
        Arc::new(DirectoryIdentityLoader::new()),
        Arc::new(assembler),
    );

    let bootstrapper = Bootstrapper::construct(&profile, deps)?;
    let block = bootstrapper.genesis_block_for_channel(&args.channel_id)?;

    let written_to = match &args.output {
        Some(path) => {
            let bytes = block.encode()?;
            fs::write(path, &bytes).map_err(|source| GenError::WriteBlock {
                path: path.clone(),
                source,
            })?;
            info!(
                bytes = bytes.len(),
                "[configtx-gen] Wrote genesis block to {}",
                path.display()
            );
            Some(path.clone())
        }
        None => None,
    };

    let inspection = if args.inspect {
        Some(serde_json::to_string_pretty(block.config())?)
    } else {
        None
    };

    Ok(Outcome {
        block,
        written_to,
        inspection,
    })
}
