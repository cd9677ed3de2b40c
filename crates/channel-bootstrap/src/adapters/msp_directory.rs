//! Directory-backed identity verifier
//!
//! Reads an organization's identity material from the conventional MSP
//! directory layout:
//!
//! ```text
//! <msp_dir>/
//! ├── cacerts/            root certificates (required, at least one)
//! ├── intermediatecerts/  intermediate certificates (optional)
//! ├── admincerts/         administrator certificates (optional)
//! └── config.json         organizational unit identifiers (optional)
//! ```
//!
//! Certificates must be PEM-encoded. Files are read in name order so the
//! resulting identity is identical across runs.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use shared_types::{CryptoSuiteConfig, OrganizationIdentity};
use tracing::{debug, trace};

use crate::error::VerificationError;
use crate::ports::IdentityVerifier;

const CA_CERTS_DIR: &str = "cacerts";
const INTERMEDIATE_CERTS_DIR: &str = "intermediatecerts";
const ADMIN_CERTS_DIR: &str = "admincerts";
const SETTINGS_FILE: &str = "config.json";

const PEM_BEGIN: &str = "-----BEGIN CERTIFICATE-----";
const PEM_END: &str = "-----END CERTIFICATE-----";

/// Optional settings file of an MSP directory
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MspSettings {
    #[serde(default)]
    organizational_unit_identifiers: Vec<OrganizationalUnit>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OrganizationalUnit {
    #[serde(rename = "OrganizationalUnitIdentifier")]
    identifier: String,
}

/// Verifies identities stored in MSP directories on the local filesystem
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectoryIdentityLoader;

impl DirectoryIdentityLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self
    }

    fn read_certificates(dir: &Path) -> Result<Vec<Vec<u8>>, VerificationError> {
        if !dir.is_dir() {
            trace!("[channel-bootstrap] No certificate directory at {}", dir.display());
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(dir).map_err(|e| unreadable(dir, e))?;
        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| unreadable(dir, e))?.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        files
            .into_iter()
            .map(|path| {
                let bytes = fs::read(&path).map_err(|e| unreadable(&path, e))?;
                if !is_pem_certificate(&bytes) {
                    return Err(VerificationError::MalformedCertificate { path });
                }
                Ok(bytes)
            })
            .collect()
    }

    fn read_settings(dir: &Path) -> Result<MspSettings, VerificationError> {
        let path = dir.join(SETTINGS_FILE);
        if !path.is_file() {
            return Ok(MspSettings::default());
        }

        let document = fs::read_to_string(&path).map_err(|e| unreadable(&path, e))?;
        serde_json::from_str(&document).map_err(|e| VerificationError::MalformedSettings {
            path,
            reason: e.to_string(),
        })
    }
}

impl IdentityVerifier for DirectoryIdentityLoader {
    fn verify_organization(
        &self,
        dir: &Path,
        crypto_suite: &CryptoSuiteConfig,
        msp_id: &str,
    ) -> Result<OrganizationIdentity, VerificationError> {
        if msp_id.trim().is_empty() {
            return Err(VerificationError::EmptyMspId);
        }

        if !crypto_suite.is_supported() {
            return Err(VerificationError::UnsupportedCryptoSuite(format!(
                "{}/{}/{}",
                crypto_suite.provider, crypto_suite.hash_family, crypto_suite.security_level
            )));
        }

        if !dir.is_dir() {
            return Err(VerificationError::Unreadable {
                dir: dir.to_path_buf(),
                reason: "not a directory".to_string(),
            });
        }

        let root_certs = Self::read_certificates(&dir.join(CA_CERTS_DIR))?;
        if root_certs.is_empty() {
            return Err(VerificationError::MissingRootCertificates {
                dir: dir.to_path_buf(),
            });
        }
        let intermediate_certs = Self::read_certificates(&dir.join(INTERMEDIATE_CERTS_DIR))?;
        let admin_certs = Self::read_certificates(&dir.join(ADMIN_CERTS_DIR))?;
        let settings = Self::read_settings(dir)?;

        debug!(
            msp_id,
            roots = root_certs.len(),
            intermediates = intermediate_certs.len(),
            admins = admin_certs.len(),
            "[channel-bootstrap] Loaded MSP directory {}",
            dir.display()
        );

        Ok(OrganizationIdentity::new(msp_id, root_certs)
            .with_intermediate_certs(intermediate_certs)
            .with_admin_certs(admin_certs)
            .with_organizational_units(
                settings
                    .organizational_unit_identifiers
                    .into_iter()
                    .map(|unit| unit.identifier)
                    .collect(),
            )
            .with_crypto_suite(crypto_suite.clone()))
    }
}

fn unreadable(dir: &Path, err: std::io::Error) -> VerificationError {
    VerificationError::Unreadable {
        dir: PathBuf::from(dir),
        reason: err.to_string(),
    }
}

fn is_pem_certificate(bytes: &[u8]) -> bool {
    match std::str::from_utf8(bytes) {
        Ok(text) => {
            let text = text.trim();
            text.starts_with(PEM_BEGIN) && text.ends_with(PEM_END)
        }
        Err(_) => false,
    }
}
