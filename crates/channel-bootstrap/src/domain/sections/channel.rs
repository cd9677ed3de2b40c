//! Channel section: hashing settings, orderer addresses and root policies.

use shared_types::keys::{
    ADMINS_POLICY_KEY, BLOCK_DATA_HASHING_STRUCTURE_KEY, DEFAULT_BLOCK_DATA_HASHING_WIDTH,
    DEFAULT_HASHING_ALGORITHM, HASHING_ALGORITHM_KEY, ORDERER_ADDRESSES_KEY, READERS_POLICY_KEY,
    WRITERS_POLICY_KEY,
};
use shared_types::{ConfigGroup, ConfigPath, ConfigValue, ConfigValueKind};

use crate::domain::policy_template::{implicit_any, implicit_majority};

fn root_value(key: &str, value: ConfigValueKind) -> ConfigGroup {
    let mut fragment = ConfigGroup::new();
    fragment
        .values
        .insert(key.to_string(), ConfigValue::new(value));
    fragment
}

/// Channel fragments; `orderer_addresses` is empty when no orderer is configured
pub fn build_channel(orderer_addresses: &[String]) -> Vec<ConfigGroup> {
    let root = ConfigPath::root();
    vec![
        root_value(
            HASHING_ALGORITHM_KEY,
            ConfigValueKind::HashingAlgorithm(DEFAULT_HASHING_ALGORITHM.to_string()),
        ),
        root_value(
            BLOCK_DATA_HASHING_STRUCTURE_KEY,
            ConfigValueKind::BlockDataHashingStructure {
                width: DEFAULT_BLOCK_DATA_HASHING_WIDTH,
            },
        ),
        root_value(
            ORDERER_ADDRESSES_KEY,
            ConfigValueKind::OrdererAddresses(orderer_addresses.to_vec()),
        ),
        implicit_any(&root, READERS_POLICY_KEY),
        implicit_any(&root, WRITERS_POLICY_KEY),
        implicit_majority(&root, ADMINS_POLICY_KEY),
    ]
}
