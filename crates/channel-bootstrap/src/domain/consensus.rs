//! Consensus type selection
//!
//! The ordering service runs one of a closed set of consensus kinds. The
//! profile names it with a string; construction turns that string into a
//! `ConsensusKind` once, so every later step matches exhaustively.

use std::fmt;

use crate::config::OrdererProfile;
use crate::error::ConfigurationError;

/// Non-empty list of broker endpoints
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrokerList(Vec<String>);

impl BrokerList {
    /// Validate and wrap a broker list
    pub fn new(consensus_type: &str, brokers: Vec<String>) -> Result<Self, ConfigurationError> {
        if brokers.is_empty() {
            return Err(ConfigurationError::MissingBrokerEndpoints {
                consensus_type: consensus_type.to_string(),
            });
        }

        if let Some(blank) = brokers.iter().find(|b| b.trim().is_empty()) {
            return Err(ConfigurationError::InvalidBrokerEndpoint(blank.clone()));
        }

        Ok(Self(brokers))
    }

    /// Broker endpoints in profile order
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Recognized consensus implementations
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsensusKind {
    /// Single ordering node
    Solo,
    /// Broker-backed ordering cluster
    Kafka {
        /// Broker endpoints the orderers connect to
        brokers: BrokerList,
    },
}

impl ConsensusKind {
    /// Profile name of the single-node kind
    pub const SOLO: &'static str = "solo";
    /// Profile name of the broker-backed kind
    pub const KAFKA: &'static str = "kafka";

    /// Resolve the consensus kind named by an orderer profile
    pub fn from_profile(orderer: &OrdererProfile) -> Result<Self, ConfigurationError> {
        match orderer.orderer_type.as_str() {
            Self::SOLO => Ok(ConsensusKind::Solo),
            Self::KAFKA => Ok(ConsensusKind::Kafka {
                brokers: BrokerList::new(Self::KAFKA, orderer.broker_endpoints.clone())?,
            }),
            other => Err(ConfigurationError::UnknownConsensusType(other.to_string())),
        }
    }

    /// Name written into the `ConsensusType` value
    pub fn name(&self) -> &'static str {
        match self {
            ConsensusKind::Solo => Self::SOLO,
            ConsensusKind::Kafka { .. } => Self::KAFKA,
        }
    }

    /// Broker endpoints, if this kind uses brokers
    pub fn brokers(&self) -> Option<&[String]> {
        match self {
            ConsensusKind::Solo => None,
            ConsensusKind::Kafka { brokers } => Some(brokers.as_slice()),
        }
    }
}

impl fmt::Display for ConsensusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
