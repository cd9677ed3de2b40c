//! Application section: baseline policies, MSP groups and anchor peers.

use shared_types::keys::{
    ADMINS_POLICY_KEY, ANCHOR_PEERS_KEY, APPLICATION_GROUP_KEY, READERS_POLICY_KEY,
    WRITERS_POLICY_KEY,
};
use shared_types::{ConfigGroup, ConfigPath, ConfigValue, ConfigValueKind};

use crate::domain::msp_template::{organization_group, VerifiedOrganization};
use crate::domain::policy_template::{implicit_any, implicit_majority};

fn anchor_peers(section: &ConfigPath, org: &VerifiedOrganization) -> ConfigGroup {
    let mut fragment = ConfigGroup::new();
    fragment.ensure_path(&section.child(&org.name)).values.insert(
        ANCHOR_PEERS_KEY.to_string(),
        ConfigValue::new(ConfigValueKind::AnchorPeers(org.anchor_peers.clone())),
    );
    fragment
}

/// Application fragments; every organization gets an `AnchorPeers` value
pub fn build_application(organizations: &[VerifiedOrganization]) -> Vec<ConfigGroup> {
    let section = ConfigPath::new([APPLICATION_GROUP_KEY]);
    let mut fragments = vec![
        implicit_any(&section, READERS_POLICY_KEY),
        implicit_any(&section, WRITERS_POLICY_KEY),
        implicit_majority(&section, ADMINS_POLICY_KEY),
    ];

    for org in organizations {
        fragments.push(organization_group(&section, org));
        fragments.push(anchor_peers(&section, org));
    }
    fragments
}
