//! Orderer section
//!
//! Consensus selector, batch limits, channel restrictions, the
//! `BlockValidation` policy, baseline policies and one MSP group per ordering
//! organization. The broker-backed kind also embeds its broker list.

use std::time::Duration;

use shared_types::keys::{
    ADMINS_POLICY_KEY, BATCH_SIZE_KEY, BATCH_TIMEOUT_KEY, BLOCK_VALIDATION_POLICY_KEY,
    CHANNEL_RESTRICTIONS_KEY, CONSENSUS_TYPE_KEY, KAFKA_BROKERS_KEY, ORDERER_GROUP_KEY,
    READERS_POLICY_KEY, WRITERS_POLICY_KEY,
};
use shared_types::{BatchSize, ConfigGroup, ConfigPath, ConfigValue, ConfigValueKind, ImplicitMetaRule};

use crate::config::OrdererProfile;
use crate::domain::consensus::ConsensusKind;
use crate::domain::msp_template::{organization_group, VerifiedOrganization};
use crate::domain::policy_template::{implicit_any, implicit_majority, implicit_with_sub_policy};
use crate::error::ConfigurationError;

/// Render a batch timeout the way the ordering service parses it
///
/// Whole seconds render as `"{n}s"`, anything else as `"{n}ms"`.
pub fn format_batch_timeout(timeout: Duration) -> String {
    let millis = timeout.as_millis();
    if millis % 1000 == 0 {
        format!("{}s", millis / 1000)
    } else {
        format!("{millis}ms")
    }
}

fn orderer_value(section: &ConfigPath, key: &str, value: ConfigValueKind) -> ConfigGroup {
    let mut fragment = ConfigGroup::new();
    fragment
        .ensure_path(section)
        .values
        .insert(key.to_string(), ConfigValue::new(value));
    fragment
}

/// Orderer fragments for a validated consensus kind
pub fn build_orderer(
    profile: &OrdererProfile,
    consensus: &ConsensusKind,
    organizations: &[VerifiedOrganization],
) -> Result<Vec<ConfigGroup>, ConfigurationError> {
    profile.batch_size.validate()?;

    let section = ConfigPath::new([ORDERER_GROUP_KEY]);
    let batch_size = BatchSize {
        max_message_count: profile.batch_size.max_message_count,
        absolute_max_bytes: profile.batch_size.absolute_max_bytes,
        preferred_max_bytes: profile.batch_size.preferred_max_bytes,
    };

    let mut fragments = vec![
        orderer_value(
            &section,
            CONSENSUS_TYPE_KEY,
            ConfigValueKind::ConsensusType(consensus.name().to_string()),
        ),
        orderer_value(&section, BATCH_SIZE_KEY, ConfigValueKind::BatchSize(batch_size)),
        orderer_value(
            &section,
            BATCH_TIMEOUT_KEY,
            ConfigValueKind::BatchTimeout(format_batch_timeout(profile.batch_timeout)),
        ),
        orderer_value(
            &section,
            CHANNEL_RESTRICTIONS_KEY,
            ConfigValueKind::ChannelRestrictions {
                max_count: profile.max_channels,
            },
        ),
        implicit_with_sub_policy(
            &section,
            BLOCK_VALIDATION_POLICY_KEY,
            WRITERS_POLICY_KEY,
            ImplicitMetaRule::Any,
        ),
        implicit_any(&section, READERS_POLICY_KEY),
        implicit_any(&section, WRITERS_POLICY_KEY),
        implicit_majority(&section, ADMINS_POLICY_KEY),
    ];

    fragments.extend(
        organizations
            .iter()
            .map(|org| organization_group(&section, org)),
    );

    match consensus {
        ConsensusKind::Solo => {}
        ConsensusKind::Kafka { brokers } => fragments.push(orderer_value(
            &section,
            KAFKA_BROKERS_KEY,
            ConfigValueKind::KafkaBrokers(brokers.as_slice().to_vec()),
        )),
    }

    Ok(fragments)
}
