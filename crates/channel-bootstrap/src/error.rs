//! Error types for the channel bootstrap subsystem

use std::fmt;
use std::path::PathBuf;

use shared_types::{ConfigPath, EncodingError};
use thiserror::Error;

/// Result type alias for bootstrap operations
pub type BootstrapResult<T> = std::result::Result<T, BootstrapError>;

/// Result type alias for template composition
pub type CompositionResult<T> = std::result::Result<T, CompositionError>;

/// Errors that abort a bootstrap operation
///
/// None of these are recoverable at this layer: the caller gets either a fully
/// composed tree or the diagnostic.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// An organization's identity failed external verification
    #[error("Identity verification failed for organization {organization}: {source}")]
    Verification {
        /// Profile name of the organization
        organization: String,
        /// Underlying verifier error
        #[source]
        source: VerificationError,
    },

    /// Profile settings or the channel identifier are unusable
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Two templates disagree at an identical path
    #[error(transparent)]
    Composition(#[from] CompositionError),

    /// The genesis assembler rejected the request
    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}

impl BootstrapError {
    /// True for profile and channel-identifier problems the operator can fix
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::Assembly(AssemblyError::Configuration(_))
        )
    }

    /// True if the error points at a section builder producing overlapping output
    pub fn is_builder_defect(&self) -> bool {
        matches!(self, Self::Composition(_))
    }
}

/// Identity material failed validation
#[derive(Debug, Clone, Error)]
pub enum VerificationError {
    /// The MSP directory could not be read
    #[error("MSP directory {dir} is unreadable: {reason}")]
    Unreadable {
        /// Directory that was read
        dir: PathBuf,
        /// I/O failure description
        reason: String,
    },

    /// No root certificates were found
    #[error("MSP directory {dir} contains no root certificates")]
    MissingRootCertificates {
        /// Directory that was read
        dir: PathBuf,
    },

    /// A certificate file is not PEM-encoded
    #[error("Malformed certificate: {path}")]
    MalformedCertificate {
        /// Offending file
        path: PathBuf,
    },

    /// The MSP identifier is empty
    #[error("MSP identifier must not be empty")]
    EmptyMspId,

    /// The crypto suite settings are not supported
    #[error("Unsupported crypto suite: {0}")]
    UnsupportedCryptoSuite(String),

    /// The MSP settings file could not be parsed
    #[error("Malformed MSP settings in {path}: {reason}")]
    MalformedSettings {
        /// Offending file
        path: PathBuf,
        /// Parse failure description
        reason: String,
    },

    /// The verifier rejected the identity for another reason
    #[error("Identity {msp_id} rejected: {reason}")]
    Rejected {
        /// MSP identifier presented
        msp_id: String,
        /// Rejection reason
        reason: String,
    },
}

/// Unusable profile settings or channel identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Orderer type outside the recognized set
    #[error("Unknown consensus type: {0}")]
    UnknownConsensusType(String),

    /// Broker-backed consensus configured without brokers
    #[error("Consensus type {consensus_type} requires at least one broker endpoint")]
    MissingBrokerEndpoints {
        /// Consensus type requested
        consensus_type: String,
    },

    /// A broker endpoint is blank
    #[error("Invalid broker endpoint: {0:?}")]
    InvalidBrokerEndpoint(String),

    /// Batch size limits are inconsistent
    #[error("Invalid batch size: {0}")]
    InvalidBatchSize(String),

    /// Channel identifier does not meet naming rules
    #[error("Invalid channel ID {channel_id:?}: {reason}")]
    InvalidChannelId {
        /// Identifier presented
        channel_id: String,
        /// Rule that was violated
        reason: String,
    },

    /// Profile document could not be parsed
    #[error("Malformed profile: {0}")]
    MalformedProfile(String),
}

/// Kind of tree entry two templates disagreed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A config value
    Value,
    /// A policy
    Policy,
    /// A group's own mod-policy
    ModPolicy,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Value => f.write_str("value"),
            EntryKind::Policy => f.write_str("policy"),
            EntryKind::ModPolicy => f.write_str("mod-policy"),
        }
    }
}

/// Templates disagree at an identical path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositionError {
    /// Different entries were set at the same path
    #[error("Conflicting {entry} at {path}")]
    Conflict {
        /// Location of the conflict
        path: ConfigPath,
        /// What kind of entry conflicted
        entry: EntryKind,
    },
}

impl CompositionError {
    /// Path the conflict was detected at
    pub fn path(&self) -> &ConfigPath {
        match self {
            Self::Conflict { path, .. } => path,
        }
    }
}

/// Genesis assembly failed
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// Channel identifier rejected
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The envelope could not be encoded
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
