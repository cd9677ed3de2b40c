//! Consortiums section
//!
//! A marker group for the consortiums root, then per consortium a
//! channel-creation policy (any member admin) and one MSP group per member.

use std::collections::BTreeMap;

use shared_types::keys::{ADMINS_POLICY_KEY, CHANNEL_CREATION_POLICY_KEY, CONSORTIUMS_GROUP_KEY};
use shared_types::{ConfigGroup, ConfigPath, ConfigValue, ConfigValueKind, ImplicitMetaRule};

use crate::domain::msp_template::{organization_group, VerifiedOrganization};
use crate::domain::policy_template::implicit_meta_policy;

/// Consortium fragments, consortiums in name order
pub fn build_consortiums(
    consortiums: &BTreeMap<String, Vec<VerifiedOrganization>>,
) -> Vec<ConfigGroup> {
    let section = ConfigPath::new([CONSORTIUMS_GROUP_KEY]);

    let mut marker = ConfigGroup::new();
    marker.ensure_path(&section);
    let mut fragments = vec![marker];

    for (name, members) in consortiums {
        let consortium = section.child(name);

        let mut creation = ConfigGroup::new();
        creation.ensure_path(&consortium).values.insert(
            CHANNEL_CREATION_POLICY_KEY.to_string(),
            ConfigValue::new(ConfigValueKind::ChannelCreationPolicy(implicit_meta_policy(
                ADMINS_POLICY_KEY,
                ImplicitMetaRule::Any,
            ))),
        );
        fragments.push(creation);

        fragments.extend(members.iter().map(|org| organization_group(&consortium, org)));
    }
    fragments
}
