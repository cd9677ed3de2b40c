//! # Adapters Module
//!
//! Concrete implementations of the outbound ports.
//!
//! ## Modules
//!
//! - `msp_directory`: identity verification from MSP directories on disk
//! - `assembler`: genesis block assembly with channel-id validation

pub mod assembler;
pub mod msp_directory;

pub use assembler::{validate_channel_id, DefaultGenesisAssembler, MAX_CHANNEL_ID_LENGTH};
pub use msp_directory::DirectoryIdentityLoader;
