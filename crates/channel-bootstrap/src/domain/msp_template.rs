//! Organization (MSP) group fragments
//!
//! Wraps a verified identity bundle into a config subtree:
//!
//! - `MSP` value holding the identity as an opaque payload
//! - `Readers` and `Writers` satisfied by any member of the organization
//! - `Admins` satisfied by an organization admin when the admin flag is set,
//!   otherwise by any member (no admin clause)
//!
//! The organization group is modified under its own `Admins` policy.
//! Identity material is never re-verified here.

use shared_types::keys::{ADMINS_POLICY_KEY, MSP_KEY, READERS_POLICY_KEY, WRITERS_POLICY_KEY};
use shared_types::{
    AnchorPeer, ConfigGroup, ConfigPath, ConfigPolicy, ConfigValue, ConfigValueKind,
    MspPrincipal, OrganizationIdentity, Policy,
};

/// An organization whose identity passed external verification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedOrganization {
    /// Name of the organization's config group
    pub name: String,
    /// Verified identity bundle
    pub identity: OrganizationIdentity,
    /// Whether derived admin policies require the admin role
    pub admin: bool,
    /// Advertised anchor peers
    pub anchor_peers: Vec<AnchorPeer>,
}

impl VerifiedOrganization {
    /// MSP identifier of the organization
    pub fn msp_id(&self) -> &str {
        &self.identity.msp_id
    }
}

/// Fragment embedding `identity` at `path`
pub fn msp_group(path: &ConfigPath, identity: &OrganizationIdentity, admin: bool) -> ConfigGroup {
    let member = Policy::signed_by(MspPrincipal::member(&identity.msp_id));
    let admins = if admin {
        Policy::signed_by(MspPrincipal::admin(&identity.msp_id))
    } else {
        member.clone()
    };

    let mut fragment = ConfigGroup::new();
    let org = fragment.ensure_path(path);
    org.mod_policy = ADMINS_POLICY_KEY.to_string();
    org.values.insert(
        MSP_KEY.to_string(),
        ConfigValue::new(ConfigValueKind::Msp(identity.clone())),
    );
    org.policies
        .insert(READERS_POLICY_KEY.to_string(), ConfigPolicy::new(member.clone()));
    org.policies
        .insert(WRITERS_POLICY_KEY.to_string(), ConfigPolicy::new(member));
    org.policies
        .insert(ADMINS_POLICY_KEY.to_string(), ConfigPolicy::new(admins));
    fragment
}

/// Fragment embedding a verified organization under `parent`
pub fn organization_group(parent: &ConfigPath, org: &VerifiedOrganization) -> ConfigGroup {
    msp_group(&parent.child(&org.name), &org.identity, org.admin)
}
