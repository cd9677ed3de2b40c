//! # Config Envelope
//!
//! The unit the genesis block commits to: a channel identifier, a sequence
//! number and the composed configuration tree.
//!
//! ## Canonical Encoding
//!
//! - Encoded with `bincode` over the serde derives of the tree.
//! - All maps in the tree are `BTreeMap`, so key order is fixed.
//! - Identical envelopes therefore encode to identical bytes, and the SHA-256
//!   of the encoding is stable across independent runs.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::entities::ConfigGroup;
use crate::errors::EncodingError;
use crate::Hash;

/// Configuration committed to by a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEnvelope {
    /// Channel this configuration belongs to.
    pub channel_id: String,
    /// Configuration sequence; zero at genesis.
    pub sequence: u64,
    /// The channel root group.
    pub config: ConfigGroup,
}

impl ConfigEnvelope {
    /// Sequence number of every genesis configuration.
    pub const GENESIS_SEQUENCE: u64 = 0;

    /// Genesis envelope for `channel_id`.
    pub fn genesis(channel_id: impl Into<String>, config: ConfigGroup) -> Self {
        Self {
            channel_id: channel_id.into(),
            sequence: Self::GENESIS_SEQUENCE,
            config,
        }
    }

    /// Canonical byte encoding.
    pub fn encode(&self) -> Result<Vec<u8>, EncodingError> {
        bincode::serialize(self).map_err(|e| EncodingError::Encode(e.to_string()))
    }

    /// SHA-256 of the canonical encoding.
    pub fn digest(&self) -> Result<Hash, EncodingError> {
        let bytes = self.encode()?;
        Ok(Sha256::digest(&bytes).into())
    }
}

/// Canonical byte encoding of a bare tree.
pub fn encode_tree(tree: &ConfigGroup) -> Result<Vec<u8>, EncodingError> {
    bincode::serialize(tree).map_err(|e| EncodingError::Encode(e.to_string()))
}
