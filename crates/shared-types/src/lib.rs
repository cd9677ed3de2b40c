//! # Shared Types Crate
//!
//! This crate contains the configuration-tree data model used to describe a
//! channel at genesis: groups, values, policies, organization identities and
//! the genesis block that wraps the composed tree.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Every crate in the workspace builds and reads
//!   trees through these types.
//! - **Deterministic Layout**: All maps are ordered (`BTreeMap`), so identical
//!   trees always encode to identical bytes.
//! - **Explicit Paths**: Hierarchical locations are `ConfigPath` values, never
//!   slash-joined strings.

pub mod block;
pub mod entities;
pub mod envelope;
pub mod errors;
pub mod identity;
pub mod keys;
pub mod path;
pub mod policy;

pub use block::{BlockHeader, BlockMetadata, GenesisBlock};
pub use entities::*;
pub use envelope::{encode_tree, ConfigEnvelope};
pub use errors::*;
pub use identity::{CryptoSuiteConfig, OrganizationIdentity};
pub use path::ConfigPath;
pub use policy::*;

/// A 32-byte SHA-256 digest.
pub type Hash = [u8; 32];
