//! # channel-bootstrap
//!
//! Genesis configuration builder for permissioned channels.
//!
//! ## Architecture
//!
//! Several independent parties contribute to a channel's starting
//! configuration: the ordering-service operator, the application member
//! organizations and the consortium definitions. Each contribution is built
//! as a list of small root-adjacent fragments, and the fragments are merged
//! into one tree by path.
//!
//! ```text
//! Profile ──→ [IdentityVerifier] ──→ Section builders ──→ Composer ──→ [GenesisAssembler]
//!                                   channel / orderer /   union by path,   genesis block
//!                                   application /         mod-policy
//!                                   consortiums           pinned to Admins
//! ```
//!
//! Identity verification and block assembly are outbound ports; everything
//! in between is pure and deterministic.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use channel_bootstrap::{
//!     BootstrapDependencies, Bootstrapper, DefaultGenesisAssembler, DirectoryIdentityLoader,
//!     Profile,
//! };
//!
//! let profile = Profile::from_json(&std::fs::read_to_string("profile.json")?)?;
//! let deps = BootstrapDependencies::new(
//!     Arc::new(DirectoryIdentityLoader::new()),
//!     Arc::new(DefaultGenesisAssembler::new()),
//! );
//!
//! let bootstrapper = Bootstrapper::construct(&profile, deps)?;
//! let block = bootstrapper.genesis_block_for_channel("mychannel")?;
//! ```
//!
//! ## Failure Model
//!
//! Nothing here panics on bad input. Verification failures, unknown
//! consensus types, invalid batch limits, malformed channel identifiers and
//! overlapping section output all surface as [`BootstrapError`].

pub mod adapters;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-export main types
pub use adapters::{validate_channel_id, DefaultGenesisAssembler, DirectoryIdentityLoader};
pub use config::{
    AdminPrincipal, AnchorPeerProfile, ApplicationProfile, BatchSizeProfile, ConsortiumProfile,
    OrdererProfile, OrganizationProfile, Profile,
};
pub use diagnostics::{
    Diagnostics, DiagnosticsRecorder, DiagnosticsSnapshot, NoOpDiagnostics, TracingDiagnostics,
};
pub use domain::{
    CompositeTemplate, ConsensusKind, ModPolicyTemplate, PolicyEvaluator, Section, SimpleTemplate,
    Template, VerifiedOrganization,
};
pub use error::{
    AssemblyError, BootstrapError, BootstrapResult, CompositionError, CompositionResult,
    ConfigurationError, EntryKind, VerificationError,
};
pub use ports::{GenesisAssembler, GenesisGenerator, IdentityVerifier};
pub use service::{BootstrapDependencies, Bootstrapper};
