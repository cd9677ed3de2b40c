//! Domain layer for the channel bootstrap subsystem
//!
//! Pure, synchronous building blocks:
//! - policy_template: implicit-meta policy fragments
//! - msp_template: organization groups around verified identities
//! - sections: per-section fragment lists
//! - composer: template combinators and the merge
//! - evaluation: structural policy checks over a composed tree

pub mod composer;
pub mod consensus;
pub mod evaluation;
pub mod msp_template;
pub mod policy_template;
pub mod sections;

pub use composer::{merge_group, CompositeTemplate, ModPolicyTemplate, SimpleTemplate, Template};
pub use consensus::{BrokerList, ConsensusKind};
pub use evaluation::PolicyEvaluator;
pub use msp_template::{msp_group, organization_group, VerifiedOrganization};
pub use sections::Section;
