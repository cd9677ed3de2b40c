//! # Organization Identities
//!
//! An `OrganizationIdentity` is the externally verified trust material of one
//! organization: its MSP identifier, root and intermediate certificates,
//! administrator certificates and organizational unit identifiers. Once
//! embedded in a config group it is treated as an opaque, immutable value.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::Hash;

/// Crypto provider settings an organization's identities are checked with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CryptoSuiteConfig {
    /// Provider name (`SW` or `PKCS11`).
    #[serde(rename = "Default")]
    pub provider: String,
    /// Hash family (`SHA2` or `SHA3`).
    pub hash_family: String,
    /// Security level in bits (256 or 384).
    pub security_level: u32,
}

impl CryptoSuiteConfig {
    /// Providers the network accepts.
    pub const SUPPORTED_PROVIDERS: [&'static str; 2] = ["SW", "PKCS11"];
    /// Hash families the network accepts.
    pub const SUPPORTED_HASH_FAMILIES: [&'static str; 2] = ["SHA2", "SHA3"];
    /// Security levels the network accepts.
    pub const SUPPORTED_SECURITY_LEVELS: [u32; 2] = [256, 384];

    /// True if every setting is one the network accepts.
    pub fn is_supported(&self) -> bool {
        Self::SUPPORTED_PROVIDERS.contains(&self.provider.as_str())
            && Self::SUPPORTED_HASH_FAMILIES.contains(&self.hash_family.as_str())
            && Self::SUPPORTED_SECURITY_LEVELS.contains(&self.security_level)
    }
}

impl Default for CryptoSuiteConfig {
    fn default() -> Self {
        Self {
            provider: "SW".to_string(),
            hash_family: "SHA2".to_string(),
            security_level: 256,
        }
    }
}

/// Verified identity bundle of one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationIdentity {
    /// MSP identifier, referenced by signature policies.
    pub msp_id: String,
    /// PEM-encoded root certificates.
    pub root_certs: Vec<Vec<u8>>,
    /// PEM-encoded intermediate certificates.
    pub intermediate_certs: Vec<Vec<u8>>,
    /// PEM-encoded administrator certificates.
    pub admin_certs: Vec<Vec<u8>>,
    /// Organizational unit identifiers recognized by the organization.
    pub organizational_unit_identifiers: Vec<String>,
    /// Crypto provider settings.
    pub crypto_suite: CryptoSuiteConfig,
}

impl OrganizationIdentity {
    /// Identity with the given roots and nothing else.
    pub fn new(msp_id: impl Into<String>, root_certs: Vec<Vec<u8>>) -> Self {
        Self {
            msp_id: msp_id.into(),
            root_certs,
            intermediate_certs: Vec::new(),
            admin_certs: Vec::new(),
            organizational_unit_identifiers: Vec::new(),
            crypto_suite: CryptoSuiteConfig::default(),
        }
    }

    /// Builder-style method to set administrator certificates.
    #[must_use]
    pub fn with_admin_certs(mut self, admin_certs: Vec<Vec<u8>>) -> Self {
        self.admin_certs = admin_certs;
        self
    }

    /// Builder-style method to set intermediate certificates.
    #[must_use]
    pub fn with_intermediate_certs(mut self, intermediate_certs: Vec<Vec<u8>>) -> Self {
        self.intermediate_certs = intermediate_certs;
        self
    }

    /// Builder-style method to set organizational unit identifiers.
    #[must_use]
    pub fn with_organizational_units(mut self, units: Vec<String>) -> Self {
        self.organizational_unit_identifiers = units;
        self
    }

    /// Builder-style method to set the crypto suite.
    #[must_use]
    pub fn with_crypto_suite(mut self, crypto_suite: CryptoSuiteConfig) -> Self {
        self.crypto_suite = crypto_suite;
        self
    }

    /// SHA-256 over the MSP id and all certificate material, in order.
    pub fn fingerprint(&self) -> Hash {
        let mut hasher = Sha256::new();
        hasher.update(self.msp_id.as_bytes());
        for cert in self
            .root_certs
            .iter()
            .chain(&self.intermediate_certs)
            .chain(&self.admin_certs)
        {
            hasher.update((cert.len() as u64).to_le_bytes());
            hasher.update(cert);
        }
        for unit in &self.organizational_unit_identifiers {
            hasher.update(unit.as_bytes());
        }
        hasher.finalize().into()
    }
}
