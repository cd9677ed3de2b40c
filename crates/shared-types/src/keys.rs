//! # Well-Known Configuration Keys
//!
//! Group, value and policy names that every participant in the network agrees
//! on. Section builders and policy references use these constants exclusively.

// =============================================================================
// GROUP KEYS
// =============================================================================

/// Group holding the ordering-service configuration.
pub const ORDERER_GROUP_KEY: &str = "Orderer";

/// Group holding the application organizations.
pub const APPLICATION_GROUP_KEY: &str = "Application";

/// Group holding consortium definitions (ordering system channel only).
pub const CONSORTIUMS_GROUP_KEY: &str = "Consortiums";

// =============================================================================
// VALUE KEYS
// =============================================================================

/// Hashing algorithm used for block hashes.
pub const HASHING_ALGORITHM_KEY: &str = "HashingAlgorithm";

/// Merkle width used when hashing block data.
pub const BLOCK_DATA_HASHING_STRUCTURE_KEY: &str = "BlockDataHashingStructure";

/// Addresses clients use to reach the ordering service.
pub const ORDERER_ADDRESSES_KEY: &str = "OrdererAddresses";

/// Consensus implementation selector.
pub const CONSENSUS_TYPE_KEY: &str = "ConsensusType";

/// Batch size limits for block cutting.
pub const BATCH_SIZE_KEY: &str = "BatchSize";

/// Maximum time to wait before cutting a batch.
pub const BATCH_TIMEOUT_KEY: &str = "BatchTimeout";

/// Limits on channel creation.
pub const CHANNEL_RESTRICTIONS_KEY: &str = "ChannelRestrictions";

/// Broker endpoints for the broker-backed consensus kind.
pub const KAFKA_BROKERS_KEY: &str = "KafkaBrokers";

/// Organization identity bundle.
pub const MSP_KEY: &str = "MSP";

/// Anchor peers advertised by an application organization.
pub const ANCHOR_PEERS_KEY: &str = "AnchorPeers";

/// Policy a consortium applies to channel creation requests.
pub const CHANNEL_CREATION_POLICY_KEY: &str = "ChannelCreationPolicy";

// =============================================================================
// POLICY KEYS
// =============================================================================

/// Who may read from a group.
pub const READERS_POLICY_KEY: &str = "Readers";

/// Who may write to a group.
pub const WRITERS_POLICY_KEY: &str = "Writers";

/// Who may administer a group.
pub const ADMINS_POLICY_KEY: &str = "Admins";

/// Who may sign blocks produced by the ordering service.
pub const BLOCK_VALIDATION_POLICY_KEY: &str = "BlockValidation";

// =============================================================================
// DEFAULTS
// =============================================================================

/// Default block hashing algorithm.
pub const DEFAULT_HASHING_ALGORITHM: &str = "SHA256";

/// Default Merkle width: a flat hash over all block data.
pub const DEFAULT_BLOCK_DATA_HASHING_WIDTH: u32 = u32::MAX;

/// Channel identifier used by test networks and the legacy genesis operation.
pub const TEST_CHAIN_ID: &str = "testchainid";
