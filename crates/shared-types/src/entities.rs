//! # Configuration Tree Entities
//!
//! The configuration of a channel is a tree of `ConfigGroup` nodes. Each group
//! owns child groups, leaf `ConfigValue` settings and `ConfigPolicy` rules, all
//! keyed by name in ordered maps.
//!
//! ## Mod-Policy Resolution
//!
//! Every group, value and policy carries a `mod_policy` naming the policy that
//! governs its modification. An empty string means "inherit": the effective
//! mod-policy is the nearest non-empty one on the way up to the root.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::identity::OrganizationIdentity;
use crate::path::ConfigPath;
use crate::policy::{ConfigPolicy, Policy};

// =============================================================================
// VALUE PAYLOADS
// =============================================================================

/// Batch cutting limits of the ordering service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSize {
    /// Maximum number of messages in a batch.
    pub max_message_count: u32,
    /// Hard upper bound on the serialized size of a batch.
    pub absolute_max_bytes: u32,
    /// Preferred serialized size of a batch.
    pub preferred_max_bytes: u32,
}

/// An endpoint an organization advertises for cross-organization discovery.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AnchorPeer {
    /// DNS name or IP address.
    pub host: String,
    /// Listening port.
    pub port: u16,
}

/// Typed payload of a config value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigValueKind {
    /// Block hashing algorithm name.
    HashingAlgorithm(String),
    /// Merkle width for block data hashing.
    BlockDataHashingStructure {
        /// Tree width; `u32::MAX` means a flat hash.
        width: u32,
    },
    /// Ordering service endpoints.
    OrdererAddresses(Vec<String>),
    /// Consensus implementation name.
    ConsensusType(String),
    /// Batch cutting limits.
    BatchSize(BatchSize),
    /// Batch timeout, rendered as a duration string such as `2s`.
    BatchTimeout(String),
    /// Maximum number of channels; zero means unlimited.
    ChannelRestrictions {
        /// Channel limit.
        max_count: u64,
    },
    /// Broker endpoints for the broker-backed consensus kind.
    KafkaBrokers(Vec<String>),
    /// Organization identity bundle.
    Msp(OrganizationIdentity),
    /// Anchor peers of an application organization.
    AnchorPeers(Vec<AnchorPeer>),
    /// Policy a consortium applies to channel creation.
    ChannelCreationPolicy(Policy),
}

/// A named leaf setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue {
    /// Version of this entry; zero at genesis.
    pub version: u64,
    /// Policy governing modification of this entry. Empty means inherited.
    pub mod_policy: String,
    /// Typed payload.
    pub value: ConfigValueKind,
}

impl ConfigValue {
    /// Genesis entry with an inherited mod-policy.
    pub fn new(value: ConfigValueKind) -> Self {
        Self {
            version: 0,
            mod_policy: String::new(),
            value,
        }
    }
}

// =============================================================================
// CONFIG GROUP
// =============================================================================

/// A node of the configuration tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigGroup {
    /// Version of this group; zero at genesis.
    pub version: u64,
    /// Policy governing modification of this group. Empty means inherited.
    pub mod_policy: String,
    /// Child groups by name.
    pub groups: BTreeMap<String, ConfigGroup>,
    /// Leaf values by name.
    pub values: BTreeMap<String, ConfigValue>,
    /// Policies by name.
    pub policies: BTreeMap<String, ConfigPolicy>,
}

impl ConfigGroup {
    /// Empty group with an inherited mod-policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the group has no children, values, policies or mod-policy.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
            && self.values.is_empty()
            && self.policies.is_empty()
            && self.mod_policy.is_empty()
    }

    /// Mutable access to the group at `path`, creating empty groups on the way.
    pub fn ensure_path(&mut self, path: &ConfigPath) -> &mut ConfigGroup {
        path.segments().iter().fold(self, |group, segment| {
            group.groups.entry(segment.clone()).or_default()
        })
    }

    /// The group at `path`, if present.
    pub fn group(&self, path: &ConfigPath) -> Option<&ConfigGroup> {
        path.segments()
            .iter()
            .try_fold(self, |group, segment| group.groups.get(segment))
    }

    /// The value whose group path plus key is `path`.
    pub fn value_at(&self, path: &ConfigPath) -> Option<&ConfigValue> {
        let key = path.last()?;
        self.group(&path.parent()?)?.values.get(key)
    }

    /// The policy whose group path plus key is `path`.
    pub fn policy_at(&self, path: &ConfigPath) -> Option<&ConfigPolicy> {
        let key = path.last()?;
        self.group(&path.parent()?)?.policies.get(key)
    }

    /// Mod-policy that governs the group at `path`, resolving inheritance.
    ///
    /// Returns `None` if the path does not exist or no group between the root
    /// and `path` names a mod-policy.
    pub fn effective_mod_policy(&self, path: &ConfigPath) -> Option<&str> {
        let mut resolved = non_empty(&self.mod_policy);
        let mut group = self;
        for segment in path.segments() {
            group = group.groups.get(segment)?;
            resolved = non_empty(&group.mod_policy).or(resolved);
        }
        resolved
    }

    /// Paths of this group's descendants, depth first in key order.
    pub fn descendant_paths(&self) -> Vec<ConfigPath> {
        let mut paths = Vec::new();
        collect_paths(self, &ConfigPath::root(), &mut paths);
        paths
    }
}

fn non_empty(policy: &str) -> Option<&str> {
    (!policy.is_empty()).then_some(policy)
}

fn collect_paths(group: &ConfigGroup, path: &ConfigPath, paths: &mut Vec<ConfigPath>) {
    for (name, child) in &group.groups {
        let child_path = path.child(name);
        paths.push(child_path.clone());
        collect_paths(child, &child_path, paths);
    }
}
