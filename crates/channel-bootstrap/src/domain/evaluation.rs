//! Structural policy evaluation
//!
//! Resolves a named policy in a composed tree against a set of signer
//! principals, without any cryptography. Used to check that a generated tree
//! grants the authority it is supposed to grant.
//!
//! - A policy that does not exist is never satisfied.
//! - Signature policies are satisfied by the listed signers.
//! - Implicit-meta policies count the child groups whose sub-policy is
//!   satisfied and compare with the rule's threshold. A group without
//!   children never satisfies an implicit-meta policy.

use shared_types::{ConfigGroup, ConfigPath, MspPrincipal, Policy};
use tracing::trace;

/// Evaluates policies of one composed tree
#[derive(Clone, Copy, Debug)]
pub struct PolicyEvaluator<'a> {
    root: &'a ConfigGroup,
}

impl<'a> PolicyEvaluator<'a> {
    /// Evaluator over `root`
    pub fn new(root: &'a ConfigGroup) -> Self {
        Self { root }
    }

    /// True if `signers` satisfy the policy `policy_name` of the group at `path`
    pub fn evaluate(&self, path: &ConfigPath, policy_name: &str, signers: &[MspPrincipal]) -> bool {
        match self.root.group(path) {
            Some(group) => evaluate_in(group, policy_name, signers),
            None => {
                trace!("[channel-bootstrap] No group at {path}");
                false
            }
        }
    }
}

fn evaluate_in(group: &ConfigGroup, policy_name: &str, signers: &[MspPrincipal]) -> bool {
    let Some(entry) = group.policies.get(policy_name) else {
        return false;
    };

    match &entry.policy {
        Policy::Signature(signature) => signature.is_satisfied_by(signers),
        Policy::ImplicitMeta(meta) => {
            let children = group.groups.len();
            if children == 0 {
                return false;
            }
            let satisfied = group
                .groups
                .values()
                .filter(|child| evaluate_in(child, &meta.sub_policy, signers))
                .count();
            satisfied >= meta.rule.threshold(children)
        }
    }
}
