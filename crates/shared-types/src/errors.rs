//! # Error Types
//!
//! Errors raised by the shared types themselves.

use thiserror::Error;

/// Canonical encoding or decoding failed.
#[derive(Debug, Clone, Error)]
pub enum EncodingError {
    /// Serialization into the canonical byte form failed.
    #[error("Canonical encoding failed: {0}")]
    Encode(String),

    /// Bytes could not be decoded into the expected structure.
    #[error("Canonical decoding failed: {0}")]
    Decode(String),
}
