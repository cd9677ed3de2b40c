//! Default genesis assembler
//!
//! Wraps a composed tree into a genesis block:
//!
//! - validates the channel identifier
//! - builds the envelope with sequence zero
//! - commits to the envelope digest in a genesis header
//! - stamps a timestamp and a transaction id derived from the digest

use std::time::{SystemTime, UNIX_EPOCH};

use sha2::{Digest, Sha256};
use shared_types::{BlockHeader, BlockMetadata, ConfigEnvelope, ConfigGroup, GenesisBlock};
use tracing::debug;

use crate::error::{AssemblyError, ConfigurationError};
use crate::ports::GenesisAssembler;

/// Channel identifiers must be shorter than this
pub const MAX_CHANNEL_ID_LENGTH: usize = 250;

/// Check a channel identifier against the network's naming rules
///
/// Identifiers start with a lowercase ASCII letter, continue with lowercase
/// letters, digits, `.` or `-`, and are shorter than
/// [`MAX_CHANNEL_ID_LENGTH`].
pub fn validate_channel_id(channel_id: &str) -> Result<(), ConfigurationError> {
    let invalid = |reason: &str| ConfigurationError::InvalidChannelId {
        channel_id: channel_id.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = channel_id.chars();
    match chars.next() {
        None => return Err(invalid("must not be empty")),
        Some(first) if !first.is_ascii_lowercase() => {
            return Err(invalid("must start with a lowercase letter"))
        }
        Some(_) => {}
    }

    if channel_id.len() >= MAX_CHANNEL_ID_LENGTH {
        return Err(invalid("must be shorter than 250 characters"));
    }

    if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-') {
        return Err(invalid(
            "may only contain lowercase letters, digits, '.' and '-'",
        ));
    }

    Ok(())
}

/// Assembles genesis blocks from composed trees
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultGenesisAssembler {
    /// Fixed timestamp (Unix seconds); `None` uses the current time
    timestamp: Option<u64>,
}

impl DefaultGenesisAssembler {
    /// Assembler stamping the current time
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembler stamping a fixed timestamp, for reproducible output
    pub fn with_timestamp(timestamp: u64) -> Self {
        Self {
            timestamp: Some(timestamp),
        }
    }

    fn timestamp(&self) -> u64 {
        self.timestamp.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        })
    }
}

impl GenesisAssembler for DefaultGenesisAssembler {
    fn assemble(&self, tree: ConfigGroup, channel_id: &str) -> Result<GenesisBlock, AssemblyError> {
        validate_channel_id(channel_id)?;

        let envelope = ConfigEnvelope::genesis(channel_id, tree);
        let data_hash = envelope.digest()?;
        let timestamp = self.timestamp();

        let mut hasher = Sha256::new();
        hasher.update(data_hash);
        hasher.update(timestamp.to_be_bytes());
        let tx_id = hex::encode(hasher.finalize());

        debug!(
            channel_id,
            data_hash = %hex::encode(data_hash),
            timestamp,
            "[channel-bootstrap] Assembling genesis block"
        );

        Ok(GenesisBlock {
            header: BlockHeader::genesis(data_hash),
            envelope,
            metadata: BlockMetadata { timestamp, tx_id },
        })
    }
}
