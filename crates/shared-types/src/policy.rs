//! # Policies
//!
//! Access-control rules embedded in the configuration tree.
//!
//! Two shapes exist:
//!
//! - **Signature** policies name MSP principals directly (`SignedBy`) or
//!   require `n` of a list of nested rules (`NOutOf`).
//! - **Implicit-meta** policies aggregate a named sub-policy over every child
//!   group of the group they are attached to, with an ANY, MAJORITY or ALL
//!   threshold.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Aggregation applied by an implicit-meta policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImplicitMetaRule {
    /// At least one child satisfies the sub-policy.
    Any,
    /// Every child satisfies the sub-policy.
    All,
    /// Strictly more than half of the children satisfy the sub-policy.
    Majority,
}

impl ImplicitMetaRule {
    /// Number of satisfied children required out of `children`.
    ///
    /// Callers must treat a childless group as unsatisfied regardless of the
    /// returned threshold.
    pub fn threshold(self, children: usize) -> usize {
        match self {
            ImplicitMetaRule::Any => 1,
            ImplicitMetaRule::All => children,
            ImplicitMetaRule::Majority => children / 2 + 1,
        }
    }
}

impl fmt::Display for ImplicitMetaRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImplicitMetaRule::Any => f.write_str("ANY"),
            ImplicitMetaRule::All => f.write_str("ALL"),
            ImplicitMetaRule::Majority => f.write_str("MAJORITY"),
        }
    }
}

/// Role of an identity inside its organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MspRole {
    /// Any valid identity issued by the organization.
    Member,
    /// An identity listed as an administrator of the organization.
    Admin,
}

/// An (organization, role) pair a signature policy can name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MspPrincipal {
    /// MSP identifier of the organization.
    pub msp_id: String,
    /// Required role.
    pub role: MspRole,
}

impl MspPrincipal {
    /// Any member of `msp_id`.
    pub fn member(msp_id: impl Into<String>) -> Self {
        Self {
            msp_id: msp_id.into(),
            role: MspRole::Member,
        }
    }

    /// An administrator of `msp_id`.
    pub fn admin(msp_id: impl Into<String>) -> Self {
        Self {
            msp_id: msp_id.into(),
            role: MspRole::Admin,
        }
    }

    /// True if an identity holding `signer` satisfies this principal.
    ///
    /// Administrators are members too, so an admin signer satisfies a member
    /// principal of the same organization.
    pub fn is_satisfied_by(&self, signer: &MspPrincipal) -> bool {
        self.msp_id == signer.msp_id
            && (self.role == MspRole::Member || signer.role == MspRole::Admin)
    }
}

impl fmt::Display for MspPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = match self.role {
            MspRole::Member => "member",
            MspRole::Admin => "admin",
        };
        write!(f, "{}.{}", self.msp_id, role)
    }
}

/// Explicit signature rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignaturePolicy {
    /// A single principal must sign.
    SignedBy(MspPrincipal),
    /// At least `n` of `rules` must be satisfied.
    NOutOf {
        /// Required number of satisfied rules.
        n: u32,
        /// Candidate rules.
        rules: Vec<SignaturePolicy>,
    },
}

impl SignaturePolicy {
    /// Evaluate against the principals that signed.
    pub fn is_satisfied_by(&self, signers: &[MspPrincipal]) -> bool {
        match self {
            SignaturePolicy::SignedBy(principal) => {
                signers.iter().any(|signer| principal.is_satisfied_by(signer))
            }
            SignaturePolicy::NOutOf { n, rules } => {
                let satisfied = rules
                    .iter()
                    .filter(|rule| rule.is_satisfied_by(signers))
                    .count();
                satisfied >= *n as usize
            }
        }
    }

    /// Every principal named anywhere in this rule.
    pub fn principals(&self) -> Vec<&MspPrincipal> {
        match self {
            SignaturePolicy::SignedBy(principal) => vec![principal],
            SignaturePolicy::NOutOf { rules, .. } => {
                rules.iter().flat_map(SignaturePolicy::principals).collect()
            }
        }
    }
}

/// Implicit-meta rule: aggregate `sub_policy` over all children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplicitMetaPolicy {
    /// Name of the policy looked up in each child group.
    pub sub_policy: String,
    /// Aggregation threshold.
    pub rule: ImplicitMetaRule,
}

/// A policy definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Policy {
    /// Explicit signature rule.
    Signature(SignaturePolicy),
    /// Aggregation over child groups.
    ImplicitMeta(ImplicitMetaPolicy),
}

impl Policy {
    /// Implicit-meta policy over `sub_policy`.
    pub fn implicit_meta(sub_policy: impl Into<String>, rule: ImplicitMetaRule) -> Self {
        Policy::ImplicitMeta(ImplicitMetaPolicy {
            sub_policy: sub_policy.into(),
            rule,
        })
    }

    /// Signature policy requiring `principal`.
    pub fn signed_by(principal: MspPrincipal) -> Self {
        Policy::Signature(SignaturePolicy::SignedBy(principal))
    }

    /// The implicit-meta body, if this is one.
    pub fn as_implicit_meta(&self) -> Option<&ImplicitMetaPolicy> {
        match self {
            Policy::ImplicitMeta(meta) => Some(meta),
            Policy::Signature(_) => None,
        }
    }

    /// The signature body, if this is one.
    pub fn as_signature(&self) -> Option<&SignaturePolicy> {
        match self {
            Policy::Signature(signature) => Some(signature),
            Policy::ImplicitMeta(_) => None,
        }
    }
}

/// A policy as stored in a config group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigPolicy {
    /// Version of this entry; zero at genesis.
    pub version: u64,
    /// Policy governing modification of this entry. Empty means inherited.
    pub mod_policy: String,
    /// The rule itself.
    pub policy: Policy,
}

impl ConfigPolicy {
    /// Genesis entry with an inherited mod-policy.
    pub fn new(policy: Policy) -> Self {
        Self {
            version: 0,
            mod_policy: String::new(),
            policy,
        }
    }
}
