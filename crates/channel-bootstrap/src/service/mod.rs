//! Bootstrapper - Core service
//!
//! # Lifecycle
//! 1. `construct` resolves the consensus kind, verifies every organization
//!    through the injected verifier and runs the section builders once.
//! 2. The resulting fragment lists are immutable. `channel_template` and
//!    `genesis_block_for_channel` compose them on every call, so one
//!    bootstrapper serves any number of channels.
//!
//! # Composition
//! ```text
//! genesis  = ModPolicy(Admins, Composite(consortiums, channel_template))
//! channel_template = ModPolicy(Admins, Composite(channel, orderer, application))
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use shared_types::keys::{ADMINS_POLICY_KEY, TEST_CHAIN_ID};
use shared_types::{AnchorPeer, ConfigGroup, GenesisBlock};
use tracing::info;

use crate::config::{OrganizationProfile, Profile};
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::domain::sections::{
    build_application, build_channel, build_consortiums, build_orderer, Section,
};
use crate::domain::{
    CompositeTemplate, ConsensusKind, ModPolicyTemplate, SimpleTemplate, Template,
    VerifiedOrganization,
};
use crate::error::{BootstrapError, BootstrapResult};
use crate::ports::{GenesisAssembler, GenesisGenerator, IdentityVerifier};

/// Dependencies for Bootstrapper
pub struct BootstrapDependencies {
    pub verifier: Arc<dyn IdentityVerifier>,
    pub assembler: Arc<dyn GenesisAssembler>,
    pub diagnostics: Arc<dyn Diagnostics>,
}

impl BootstrapDependencies {
    /// Dependencies reporting through `tracing`
    pub fn new(verifier: Arc<dyn IdentityVerifier>, assembler: Arc<dyn GenesisAssembler>) -> Self {
        Self {
            verifier,
            assembler,
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    /// Builder-style method to replace the diagnostics sink
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}

/// Channel genesis bootstrapper
pub struct Bootstrapper {
    channel_groups: Vec<ConfigGroup>,
    orderer_groups: Vec<ConfigGroup>,
    application_groups: Vec<ConfigGroup>,
    consortiums_groups: Vec<ConfigGroup>,
    consensus: Option<ConsensusKind>,
    assembler: Arc<dyn GenesisAssembler>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Bootstrapper {
    /// Verify every organization in `profile` and build all sections
    ///
    /// Fails without a partial result if any organization fails verification
    /// or any setting is unusable.
    pub fn construct(profile: &Profile, deps: BootstrapDependencies) -> BootstrapResult<Self> {
        match Self::build(profile, &deps) {
            Ok(sections) => {
                info!(
                    orderer = sections.consensus.as_ref().map(ConsensusKind::name),
                    application = profile.application.is_some(),
                    consortiums = profile.consortiums.is_some(),
                    "[channel-bootstrap] Bootstrapper constructed"
                );
                Ok(Self {
                    channel_groups: sections.channel,
                    orderer_groups: sections.orderer,
                    application_groups: sections.application,
                    consortiums_groups: sections.consortiums,
                    consensus: sections.consensus,
                    assembler: deps.assembler,
                    diagnostics: deps.diagnostics,
                })
            }
            Err(err) => {
                deps.diagnostics.construction_failed(&err.to_string());
                Err(err)
            }
        }
    }

    fn build(profile: &Profile, deps: &BootstrapDependencies) -> BootstrapResult<BuiltSections> {
        let diagnostics = deps.diagnostics.as_ref();

        let consensus = profile
            .orderer
            .as_ref()
            .map(ConsensusKind::from_profile)
            .transpose()?;

        let addresses = profile
            .orderer
            .as_ref()
            .map(|orderer| orderer.addresses.clone())
            .unwrap_or_default();
        let channel = build_channel(&addresses);
        diagnostics.section_built(Section::Channel, channel.len());

        let orderer = match (&profile.orderer, &consensus) {
            (Some(orderer), Some(kind)) => {
                let orgs = verify_all(deps, Section::Orderer, &orderer.organizations)?;
                let fragments = build_orderer(orderer, kind, &orgs)?;
                diagnostics.section_built(Section::Orderer, fragments.len());
                fragments
            }
            _ => {
                diagnostics.section_skipped(Section::Orderer);
                Vec::new()
            }
        };

        let application = match &profile.application {
            Some(app) => {
                let orgs = verify_all(deps, Section::Application, &app.organizations)?;
                let fragments = build_application(&orgs);
                diagnostics.section_built(Section::Application, fragments.len());
                fragments
            }
            None => {
                diagnostics.section_skipped(Section::Application);
                Vec::new()
            }
        };

        let consortiums = match &profile.consortiums {
            Some(definitions) => {
                let mut members = BTreeMap::new();
                for (name, consortium) in definitions {
                    let orgs = verify_all(deps, Section::Consortiums, &consortium.organizations)?;
                    members.insert(name.clone(), orgs);
                }
                let fragments = build_consortiums(&members);
                diagnostics.section_built(Section::Consortiums, fragments.len());
                fragments
            }
            None => {
                diagnostics.section_skipped(Section::Consortiums);
                Vec::new()
            }
        };

        Ok(BuiltSections {
            channel,
            orderer,
            application,
            consortiums,
            consensus,
        })
    }

    fn channel_template_def(&self) -> ModPolicyTemplate {
        ModPolicyTemplate::new(
            ADMINS_POLICY_KEY,
            CompositeTemplate::default()
                .with(SimpleTemplate::new(self.channel_groups.clone()))
                .with(SimpleTemplate::new(self.orderer_groups.clone()))
                .with(SimpleTemplate::new(self.application_groups.clone())),
        )
    }

    /// Channel, orderer and application sections composed under `Admins`
    pub fn channel_template(&self) -> BootstrapResult<ConfigGroup> {
        Ok(self.channel_template_def().compose()?)
    }

    /// Genesis block for `channel_id`
    pub fn genesis_block_for_channel(&self, channel_id: &str) -> BootstrapResult<GenesisBlock> {
        let result = self.assemble_for(channel_id);
        match &result {
            Ok(block) => self
                .diagnostics
                .genesis_assembled(channel_id, &block.block_hash_hex()),
            Err(err) => self.diagnostics.construction_failed(&err.to_string()),
        }
        result
    }

    fn assemble_for(&self, channel_id: &str) -> BootstrapResult<GenesisBlock> {
        let tree = ModPolicyTemplate::new(
            ADMINS_POLICY_KEY,
            CompositeTemplate::default()
                .with(SimpleTemplate::new(self.consortiums_groups.clone()))
                .with(self.channel_template_def()),
        )
        .compose()?;

        Ok(self.assembler.assemble(tree, channel_id)?)
    }

    /// Genesis block for the well-known test channel
    pub fn genesis_block(&self) -> BootstrapResult<GenesisBlock> {
        self.genesis_block_for_channel(TEST_CHAIN_ID)
    }

    /// Fragments built for `section`; empty if the section is not configured
    pub fn section_groups(&self, section: Section) -> &[ConfigGroup] {
        match section {
            Section::Channel => &self.channel_groups,
            Section::Orderer => &self.orderer_groups,
            Section::Application => &self.application_groups,
            Section::Consortiums => &self.consortiums_groups,
        }
    }

    /// Consensus kind of the ordering service, if one is configured
    pub fn consensus(&self) -> Option<&ConsensusKind> {
        self.consensus.as_ref()
    }
}

impl GenesisGenerator for Bootstrapper {
    fn channel_template(&self) -> BootstrapResult<ConfigGroup> {
        Bootstrapper::channel_template(self)
    }

    fn genesis_block_for_channel(&self, channel_id: &str) -> BootstrapResult<GenesisBlock> {
        Bootstrapper::genesis_block_for_channel(self, channel_id)
    }
}

struct BuiltSections {
    channel: Vec<ConfigGroup>,
    orderer: Vec<ConfigGroup>,
    application: Vec<ConfigGroup>,
    consortiums: Vec<ConfigGroup>,
    consensus: Option<ConsensusKind>,
}

fn verify_all(
    deps: &BootstrapDependencies,
    section: Section,
    organizations: &[OrganizationProfile],
) -> BootstrapResult<Vec<VerifiedOrganization>> {
    organizations
        .iter()
        .map(|org| {
            let identity = deps
                .verifier
                .verify_organization(&org.msp_dir, &org.crypto_suite, &org.id)
                .map_err(|source| BootstrapError::Verification {
                    organization: org.name.clone(),
                    source,
                })?;
            deps.diagnostics
                .organization_verified(section, &org.name, &identity.msp_id);

            Ok(VerifiedOrganization {
                name: org.name.clone(),
                identity,
                admin: org.admin_principal.is_admin_role(),
                anchor_peers: org
                    .anchor_peers
                    .iter()
                    .map(|peer| AnchorPeer {
                        host: peer.host.clone(),
                        port: peer.port,
                    })
                    .collect(),
            })
        })
        .collect()
}
