//! Implicit-meta policy fragments
//!
//! Each function returns a root-adjacent fragment holding exactly one policy
//! at the requested path. Fragments are pure data and never fail to build.

use shared_types::{ConfigGroup, ConfigPath, ConfigPolicy, ImplicitMetaRule, Policy};

/// Bare implicit-meta policy aggregating `sub_policy` with `rule`
pub fn implicit_meta_policy(sub_policy: &str, rule: ImplicitMetaRule) -> Policy {
    Policy::implicit_meta(sub_policy, rule)
}

/// Fragment with `policy_name` aggregating a differently named sub-policy
///
/// Used where the governing policy differs from what it aggregates, such as
/// a block-validation policy over the organizations' writers.
pub fn implicit_with_sub_policy(
    path: &ConfigPath,
    policy_name: &str,
    sub_policy: &str,
    rule: ImplicitMetaRule,
) -> ConfigGroup {
    let mut fragment = ConfigGroup::new();
    fragment.ensure_path(path).policies.insert(
        policy_name.to_string(),
        ConfigPolicy::new(implicit_meta_policy(sub_policy, rule)),
    );
    fragment
}

/// Fragment with `policy_name` satisfied by any child's `policy_name`
pub fn implicit_any(path: &ConfigPath, policy_name: &str) -> ConfigGroup {
    implicit_with_sub_policy(path, policy_name, policy_name, ImplicitMetaRule::Any)
}

/// Fragment with `policy_name` requiring a strict majority of children's `policy_name`
pub fn implicit_majority(path: &ConfigPath, policy_name: &str) -> ConfigGroup {
    implicit_with_sub_policy(path, policy_name, policy_name, ImplicitMetaRule::Majority)
}

/// Fragment with `policy_name` requiring every child's `policy_name`
pub fn implicit_all(path: &ConfigPath, policy_name: &str) -> ConfigGroup {
    implicit_with_sub_policy(path, policy_name, policy_name, ImplicitMetaRule::All)
}
