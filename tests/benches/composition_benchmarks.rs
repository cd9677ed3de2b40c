//! # Channel Bootstrap Benchmarks
//!
//! | Operation | Input | Target |
//! |-----------|-------|--------|
//! | Channel template composition | 3 sections, N orgs | < 1ms at N = 16 |
//! | Genesis assembly | composed tree + envelope digest | < 5ms at N = 16 |

use std::path::Path;
use std::sync::Arc;

use channel_bootstrap::{
    ApplicationProfile, BootstrapDependencies, Bootstrapper, ConsortiumProfile,
    DefaultGenesisAssembler, IdentityVerifier, NoOpDiagnostics, OrdererProfile,
    OrganizationProfile, Profile, VerificationError,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shared_types::{CryptoSuiteConfig, OrganizationIdentity};

/// Accepts every organization with a synthetic root certificate
struct InMemoryVerifier;

impl IdentityVerifier for InMemoryVerifier {
    fn verify_organization(
        &self,
        _dir: &Path,
        crypto_suite: &CryptoSuiteConfig,
        msp_id: &str,
    ) -> Result<OrganizationIdentity, VerificationError> {
        Ok(OrganizationIdentity::new(msp_id, vec![vec![0x42; 512]])
            .with_crypto_suite(crypto_suite.clone()))
    }
}

fn profile(orgs: usize) -> Profile {
    let organizations: Vec<_> = (0..orgs)
        .map(|i| OrganizationProfile::new(format!("Org{i}"), format!("Org{i}MSP"), "msp"))
        .collect();

    Profile {
        orderer: Some(OrdererProfile {
            organizations: vec![OrganizationProfile::new("OrdererOrg", "OrdererMSP", "msp")],
            ..Default::default()
        }),
        application: Some(ApplicationProfile {
            organizations: organizations.clone(),
        }),
        consortiums: Some(
            [("SampleConsortium".to_string(), ConsortiumProfile { organizations })]
                .into_iter()
                .collect(),
        ),
    }
}

fn bootstrapper(orgs: usize) -> Option<Bootstrapper> {
    let deps = BootstrapDependencies::new(
        Arc::new(InMemoryVerifier),
        Arc::new(DefaultGenesisAssembler::with_timestamp(0)),
    )
    .with_diagnostics(Arc::new(NoOpDiagnostics));
    Bootstrapper::construct(&profile(orgs), deps).ok()
}

fn bench_channel_template(c: &mut Criterion) {
    let mut group = c.benchmark_group("channel-template");

    for orgs in [1usize, 4, 16, 64] {
        let Some(bootstrapper) = bootstrapper(orgs) else {
            continue;
        };
        group.throughput(Throughput::Elements(orgs as u64));
        group.bench_with_input(BenchmarkId::new("compose", orgs), &bootstrapper, |b, bs| {
            b.iter(|| black_box(bs.channel_template().is_ok()))
        });
    }
    group.finish();
}

fn bench_genesis_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("genesis-block");

    for orgs in [1usize, 4, 16, 64] {
        let Some(bootstrapper) = bootstrapper(orgs) else {
            continue;
        };
        group.throughput(Throughput::Elements(orgs as u64));
        group.bench_with_input(BenchmarkId::new("assemble", orgs), &bootstrapper, |b, bs| {
            b.iter(|| black_box(bs.genesis_block_for_channel("benchchannel").is_ok()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_channel_template, bench_genesis_block);
criterion_main!(benches);
