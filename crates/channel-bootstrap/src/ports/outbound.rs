//! Driven ports (Outbound dependencies)

use std::path::Path;

use shared_types::{ConfigGroup, CryptoSuiteConfig, GenesisBlock, OrganizationIdentity};

use crate::error::{AssemblyError, VerificationError};

/// Loads and verifies an organization's identity material
///
/// Invoked once per organization during construction. Any error aborts the
/// whole bootstrap; there is no partial result.
pub trait IdentityVerifier: Send + Sync {
    /// Load the identity bundle stored in `dir` and verify it for `msp_id`
    fn verify_organization(
        &self,
        dir: &Path,
        crypto_suite: &CryptoSuiteConfig,
        msp_id: &str,
    ) -> Result<OrganizationIdentity, VerificationError>;
}

/// Wraps a composed tree into a genesis block
///
/// Implementations validate `channel_id`, fix the configuration sequence at
/// zero and stamp their own metadata.
pub trait GenesisAssembler: Send + Sync {
    /// Assemble the genesis block of `channel_id` carrying `tree`
    fn assemble(&self, tree: ConfigGroup, channel_id: &str) -> Result<GenesisBlock, AssemblyError>;
}
