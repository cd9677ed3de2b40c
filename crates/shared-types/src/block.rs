//! # Genesis Block
//!
//! The terminal artifact of a bootstrap run. A genesis block has special
//! properties:
//!
//! - Number: 0
//! - Previous hash: 32 zero bytes
//! - Data hash: SHA-256 of the canonical config envelope
//! - Envelope sequence: 0
//!
//! Metadata (timestamp, transaction id) is stamped by the assembler and is the
//! only part that may differ between two blocks built from the same tree for
//! the same channel.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use sha2::{Digest, Sha256};

use crate::entities::ConfigGroup;
use crate::envelope::ConfigEnvelope;
use crate::errors::EncodingError;
use crate::Hash;

/// Block header.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Block number; always 0 for genesis.
    pub number: u64,
    /// Hash of the previous block; all zeros for genesis.
    #[serde_as(as = "Bytes")]
    pub previous_hash: Hash,
    /// SHA-256 of the canonical config envelope.
    #[serde_as(as = "Bytes")]
    pub data_hash: Hash,
}

impl BlockHeader {
    /// Header of a genesis block committing to `data_hash`.
    pub fn genesis(data_hash: Hash) -> Self {
        Self {
            number: 0,
            previous_hash: [0u8; 32],
            data_hash,
        }
    }

    /// SHA-256 over the header fields.
    pub fn hash(&self) -> Hash {
        let mut hasher = Sha256::new();
        hasher.update(self.number.to_be_bytes());
        hasher.update(self.previous_hash);
        hasher.update(self.data_hash);
        hasher.finalize().into()
    }
}

/// Assembler-stamped metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockMetadata {
    /// Unix timestamp (seconds) at assembly.
    pub timestamp: u64,
    /// Identifier of the configuration transaction carried by the block.
    pub tx_id: String,
}

/// The block that starts a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisBlock {
    /// Block header.
    pub header: BlockHeader,
    /// Committed configuration.
    pub envelope: ConfigEnvelope,
    /// Assembler-stamped metadata.
    pub metadata: BlockMetadata,
}

impl GenesisBlock {
    /// Channel the block starts.
    pub fn channel_id(&self) -> &str {
        &self.envelope.channel_id
    }

    /// Configuration sequence; always 0.
    pub fn sequence(&self) -> u64 {
        self.envelope.sequence
    }

    /// The composed configuration tree.
    pub fn config(&self) -> &ConfigGroup {
        &self.envelope.config
    }

    /// Hash identifying this block.
    pub fn block_hash(&self) -> Hash {
        self.header.hash()
    }

    /// True if the header commits to the carried envelope.
    pub fn verify_data_hash(&self) -> Result<bool, EncodingError> {
        Ok(self.envelope.digest()? == self.header.data_hash)
    }

    /// Canonical byte encoding of the whole block.
    pub fn encode(&self) -> Result<Vec<u8>, EncodingError> {
        bincode::serialize(self).map_err(|e| EncodingError::Encode(e.to_string()))
    }

    /// Decode a block produced by [`GenesisBlock::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, EncodingError> {
        bincode::deserialize(bytes).map_err(|e| EncodingError::Decode(e.to_string()))
    }

    /// Hex form of the block hash, for logs.
    pub fn block_hash_hex(&self) -> String {
        hex::encode(self.block_hash())
    }
}
