//! Profile configuration types
//!
//! A profile describes one network bootstrap: the ordering service, the
//! application organizations and the consortiums. Every section is optional;
//! an absent section produces no subtree in the genesis configuration.
//!
//! Field names follow the network's profile documents (PascalCase keys).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};
use shared_types::CryptoSuiteConfig;

use crate::error::ConfigurationError;

/// Default orderer endpoint
pub const DEFAULT_ORDERER_ADDRESS: &str = "127.0.0.1:7050";

/// Default batch timeout
pub const DEFAULT_BATCH_TIMEOUT: Duration = Duration::from_secs(2);

/// One network bootstrap profile
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Profile {
    /// Ordering service settings
    #[serde(default)]
    pub orderer: Option<OrdererProfile>,

    /// Application organizations
    #[serde(default)]
    pub application: Option<ApplicationProfile>,

    /// Consortium definitions by name
    #[serde(default)]
    pub consortiums: Option<BTreeMap<String, ConsortiumProfile>>,
}

impl Profile {
    /// Parse a JSON profile document
    pub fn from_json(document: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(document).map_err(|e| ConfigurationError::MalformedProfile(e.to_string()))
    }

    /// Resolve relative MSP directories against `base`
    pub fn resolve_paths(&mut self, base: &Path) {
        for org in self.organizations_mut() {
            if org.msp_dir.is_relative() {
                org.msp_dir = base.join(&org.msp_dir);
            }
        }
    }

    /// Every organization referenced anywhere in the profile
    pub fn organizations(&self) -> impl Iterator<Item = &OrganizationProfile> {
        let orderer = self.orderer.iter().flat_map(|o| o.organizations.iter());
        let application = self.application.iter().flat_map(|a| a.organizations.iter());
        let consortiums = self
            .consortiums
            .iter()
            .flat_map(|c| c.values())
            .flat_map(|c| c.organizations.iter());
        orderer.chain(application).chain(consortiums)
    }

    fn organizations_mut(&mut self) -> impl Iterator<Item = &mut OrganizationProfile> {
        let orderer = self.orderer.iter_mut().flat_map(|o| o.organizations.iter_mut());
        let application = self
            .application
            .iter_mut()
            .flat_map(|a| a.organizations.iter_mut());
        let consortiums = self
            .consortiums
            .iter_mut()
            .flat_map(|c| c.values_mut())
            .flat_map(|c| c.organizations.iter_mut());
        orderer.chain(application).chain(consortiums)
    }
}

/// Ordering service settings
#[serde_as]
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrdererProfile {
    /// Consensus implementation name (`solo` or `kafka`)
    pub orderer_type: String,

    /// Endpoints clients use to reach the ordering service
    #[serde(default)]
    pub addresses: Vec<String>,

    /// Time to wait before cutting a batch, in milliseconds
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub batch_timeout: Duration,

    /// Batch cutting limits
    pub batch_size: BatchSizeProfile,

    /// Maximum number of channels (0 = unlimited)
    #[serde(default)]
    pub max_channels: u64,

    /// Ordering organizations
    #[serde(default)]
    pub organizations: Vec<OrganizationProfile>,

    /// Broker endpoints for the broker-backed consensus kind
    #[serde(default)]
    pub broker_endpoints: Vec<String>,
}

impl Default for OrdererProfile {
    fn default() -> Self {
        Self {
            orderer_type: "solo".to_string(),
            addresses: vec![DEFAULT_ORDERER_ADDRESS.to_string()],
            batch_timeout: DEFAULT_BATCH_TIMEOUT,
            batch_size: BatchSizeProfile::default(),
            max_channels: 0,
            organizations: Vec::new(),
            broker_endpoints: Vec::new(),
        }
    }
}

/// Batch cutting limits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchSizeProfile {
    /// Maximum number of messages in a batch
    pub max_message_count: u32,
    /// Hard upper bound on batch size in bytes
    pub absolute_max_bytes: u32,
    /// Preferred batch size in bytes
    pub preferred_max_bytes: u32,
}

impl Default for BatchSizeProfile {
    fn default() -> Self {
        Self {
            max_message_count: 10,
            absolute_max_bytes: 10 * 1024 * 1024,
            preferred_max_bytes: 512 * 1024,
        }
    }
}

impl BatchSizeProfile {
    /// Validate limits against each other
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.max_message_count == 0 {
            return Err(ConfigurationError::InvalidBatchSize(
                "MaxMessageCount cannot be 0".to_string(),
            ));
        }

        if self.absolute_max_bytes == 0 {
            return Err(ConfigurationError::InvalidBatchSize(
                "AbsoluteMaxBytes cannot be 0".to_string(),
            ));
        }

        if self.preferred_max_bytes > self.absolute_max_bytes {
            return Err(ConfigurationError::InvalidBatchSize(format!(
                "PreferredMaxBytes ({}) exceeds AbsoluteMaxBytes ({})",
                self.preferred_max_bytes, self.absolute_max_bytes
            )));
        }

        Ok(())
    }
}

/// Application organizations
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationProfile {
    /// Member organizations
    #[serde(default)]
    pub organizations: Vec<OrganizationProfile>,
}

/// One consortium
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConsortiumProfile {
    /// Member organizations
    #[serde(default)]
    pub organizations: Vec<OrganizationProfile>,
}

/// Which role administers an organization
///
/// Only the two role principals are recognized; other principal kinds are
/// not modelled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminPrincipal {
    /// Administrators of the organization
    #[default]
    #[serde(rename = "Role.ADMIN")]
    Admin,
    /// Any member of the organization
    #[serde(rename = "Role.MEMBER")]
    Member,
}

impl AdminPrincipal {
    /// True if derived admin policies must require the admin role
    pub fn is_admin_role(self) -> bool {
        self == AdminPrincipal::Admin
    }
}

/// One organization
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrganizationProfile {
    /// Name of the organization's config group
    pub name: String,

    /// MSP identifier
    #[serde(rename = "ID")]
    pub id: String,

    /// Directory holding the organization's identity material
    #[serde(rename = "MSPDir", alias = "IdentityDir")]
    pub msp_dir: PathBuf,

    /// Crypto provider settings
    #[serde(rename = "BCCSP", alias = "CryptoSuiteConfig", default)]
    pub crypto_suite: CryptoSuiteConfig,

    /// Role that administers the organization
    #[serde(default)]
    pub admin_principal: AdminPrincipal,

    /// Anchor peers (application organizations only)
    #[serde(default)]
    pub anchor_peers: Vec<AnchorPeerProfile>,
}

impl OrganizationProfile {
    /// Organization with default crypto settings and admin principal
    pub fn new(name: impl Into<String>, id: impl Into<String>, msp_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            msp_dir: msp_dir.into(),
            crypto_suite: CryptoSuiteConfig::default(),
            admin_principal: AdminPrincipal::default(),
            anchor_peers: Vec::new(),
        }
    }

    /// Builder-style method to set the admin principal
    pub fn with_admin_principal(mut self, principal: AdminPrincipal) -> Self {
        self.admin_principal = principal;
        self
    }

    /// Builder-style method to add an anchor peer
    pub fn with_anchor_peer(mut self, host: impl Into<String>, port: u16) -> Self {
        self.anchor_peers.push(AnchorPeerProfile {
            host: host.into(),
            port,
        });
        self
    }
}

/// Anchor peer endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnchorPeerProfile {
    /// DNS name or IP address
    pub host: String,
    /// Listening port
    pub port: u16,
}
