//! Driving ports (Inbound API)

use shared_types::{ConfigGroup, GenesisBlock};

use crate::error::BootstrapResult;

/// Primary bootstrap API
///
/// Both operations take `&self`: a constructed generator is immutable and can
/// serve any number of channels.
pub trait GenesisGenerator: Send + Sync {
    /// Channel, orderer and application sections composed under `Admins`
    ///
    /// Repeatable: every call yields an identical tree.
    fn channel_template(&self) -> BootstrapResult<ConfigGroup>;

    /// Genesis block for `channel_id`, including the consortiums section
    fn genesis_block_for_channel(&self, channel_id: &str) -> BootstrapResult<GenesisBlock>;
}
