//! Template composition
//!
//! A [`Template`] is an input-free producer of root-adjacent fragments. Three
//! combinators exist:
//!
//! - [`SimpleTemplate`]: an ordered fragment list, returned as is
//! - [`CompositeTemplate`]: path-matching union of every fragment of every
//!   input template into one root
//! - [`ModPolicyTemplate`]: composes its input into one root and pins the
//!   root's mod-policy, filling every unset descendant mod-policy with it
//!
//! ## Merge Rules
//!
//! Groups at the same path are merged recursively. Values and policies at the
//! same path must be identical, otherwise composition fails with
//! [`CompositionError::Conflict`]. Two different explicit group mod-policies
//! at the same path are a conflict too; an unset one yields to a set one.
//!
//! Since the merge is a union with an equality check over ordered maps, it is
//! associative and the composed tree does not depend on how inputs are nested.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use shared_types::{ConfigGroup, ConfigPath};

use crate::error::{CompositionError, CompositionResult, EntryKind};

/// Pure producer of root-adjacent config fragments
pub trait Template: Send + Sync {
    /// Fragments produced by this template, in order
    fn fragments(&self) -> CompositionResult<Vec<ConfigGroup>>;

    /// Merge every fragment into a single root
    fn compose(&self) -> CompositionResult<ConfigGroup> {
        let mut root = ConfigGroup::new();
        for fragment in self.fragments()? {
            merge_group(&mut root, fragment, &ConfigPath::root())?;
        }
        Ok(root)
    }
}

impl<T: Template + ?Sized> Template for Box<T> {
    fn fragments(&self) -> CompositionResult<Vec<ConfigGroup>> {
        (**self).fragments()
    }
}

/// Ordered fragment list, no internal merge
#[derive(Clone, Debug, Default)]
pub struct SimpleTemplate {
    fragments: Vec<ConfigGroup>,
}

impl SimpleTemplate {
    /// Wrap `fragments` in order
    pub fn new(fragments: Vec<ConfigGroup>) -> Self {
        Self { fragments }
    }

    /// Number of fragments
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// True if there are no fragments
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl Template for SimpleTemplate {
    fn fragments(&self) -> CompositionResult<Vec<ConfigGroup>> {
        Ok(self.fragments.clone())
    }
}

/// Path-matching union of several templates
#[derive(Default)]
pub struct CompositeTemplate {
    templates: Vec<Box<dyn Template>>,
}

impl CompositeTemplate {
    /// Compose `templates` in order
    pub fn new(templates: Vec<Box<dyn Template>>) -> Self {
        Self { templates }
    }

    /// Builder-style method to append a template
    pub fn with(mut self, template: impl Template + 'static) -> Self {
        self.templates.push(Box::new(template));
        self
    }
}

impl Template for CompositeTemplate {
    fn fragments(&self) -> CompositionResult<Vec<ConfigGroup>> {
        let mut root = ConfigGroup::new();
        for template in &self.templates {
            for fragment in template.fragments()? {
                merge_group(&mut root, fragment, &ConfigPath::root())?;
            }
        }
        Ok(vec![root])
    }
}

/// Pins the mod-policy of the composed root
pub struct ModPolicyTemplate {
    mod_policy: String,
    template: Box<dyn Template>,
}

impl ModPolicyTemplate {
    /// Compose `template` under `mod_policy`
    pub fn new(mod_policy: impl Into<String>, template: impl Template + 'static) -> Self {
        Self {
            mod_policy: mod_policy.into(),
            template: Box::new(template),
        }
    }

    /// Policy pinned at the root
    pub fn mod_policy(&self) -> &str {
        &self.mod_policy
    }
}

impl Template for ModPolicyTemplate {
    fn fragments(&self) -> CompositionResult<Vec<ConfigGroup>> {
        let mut root = self.template.compose()?;
        root.mod_policy = self.mod_policy.clone();
        fill_mod_policies(&mut root, &self.mod_policy);
        Ok(vec![root])
    }
}

/// Merge `source` into `target`, both located at `path`
pub fn merge_group(
    target: &mut ConfigGroup,
    source: ConfigGroup,
    path: &ConfigPath,
) -> CompositionResult<()> {
    if !source.mod_policy.is_empty() {
        if target.mod_policy.is_empty() {
            target.mod_policy = source.mod_policy;
        } else if target.mod_policy != source.mod_policy {
            return Err(CompositionError::Conflict {
                path: path.clone(),
                entry: EntryKind::ModPolicy,
            });
        }
    }
    target.version = target.version.max(source.version);

    merge_entries(&mut target.values, source.values, path, EntryKind::Value)?;
    merge_entries(&mut target.policies, source.policies, path, EntryKind::Policy)?;

    for (name, child) in source.groups {
        let child_path = path.child(&name);
        let slot = target.groups.entry(name).or_default();
        merge_group(slot, child, &child_path)?;
    }
    Ok(())
}

fn merge_entries<V: PartialEq>(
    target: &mut BTreeMap<String, V>,
    source: BTreeMap<String, V>,
    path: &ConfigPath,
    entry: EntryKind,
) -> CompositionResult<()> {
    for (key, incoming) in source {
        match target.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(incoming);
            }
            Entry::Occupied(existing) => {
                if *existing.get() != incoming {
                    return Err(CompositionError::Conflict {
                        path: path.child(existing.key()),
                        entry,
                    });
                }
            }
        }
    }
    Ok(())
}

fn fill_mod_policies(group: &mut ConfigGroup, mod_policy: &str) {
    for value in group.values.values_mut() {
        if value.mod_policy.is_empty() {
            value.mod_policy = mod_policy.to_string();
        }
    }
    for policy in group.policies.values_mut() {
        if policy.mod_policy.is_empty() {
            policy.mod_policy = mod_policy.to_string();
        }
    }
    for child in group.groups.values_mut() {
        if child.mod_policy.is_empty() {
            child.mod_policy = mod_policy.to_string();
        }
        fill_mod_policies(child, mod_policy);
    }
}
