//! # Test Fixtures
//!
//! A throwaway network layout on disk: one MSP directory per organization and
//! a profile document referencing them by relative path.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use channel_bootstrap::{
    BootstrapDependencies, BootstrapResult, Bootstrapper, DefaultGenesisAssembler,
    DiagnosticsRecorder, DirectoryIdentityLoader, Profile,
};
use serde_json::{json, Value};
use tempfile::TempDir;

/// Fixed timestamp used by every fixture assembler
pub const FIXTURE_TIMESTAMP: u64 = 1_700_000_000;

fn pem(label: &str) -> String {
    format!("-----BEGIN CERTIFICATE-----\n{label}\n-----END CERTIFICATE-----\n")
}

/// Network layout rooted in a temporary directory
pub struct NetworkFixture {
    dir: TempDir,
}

impl NetworkFixture {
    /// Empty layout with the standard organizations on disk
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("temp dir"),
        };
        for org in ["OrdererOrg", "Org1", "Org2", "Org3"] {
            fixture.add_msp(org);
        }
        fixture
    }

    /// Root of the layout
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write an MSP directory for `org` with one root and one admin cert
    pub fn add_msp(&self, org: &str) -> PathBuf {
        let msp = self.root().join("crypto").join(org);
        for (sub, label) in [("cacerts", "ROOT"), ("admincerts", "ADMIN")] {
            let dir = msp.join(sub);
            fs::create_dir_all(&dir).expect("create msp dir");
            fs::write(dir.join(format!("{org}-{sub}.pem")), pem(&format!("{org}-{label}")))
                .expect("write cert");
        }
        msp
    }

    /// Write `document` as the profile and load it back with resolved paths
    pub fn profile(&self, document: &Value) -> Profile {
        let path = self.root().join("profile.json");
        fs::write(&path, serde_json::to_string_pretty(document).expect("render"))
            .expect("write profile");

        let mut profile =
            Profile::from_json(&fs::read_to_string(&path).expect("read profile")).expect("parse");
        profile.resolve_paths(self.root());
        profile
    }

    /// Construct a bootstrapper over `profile` with the real adapters
    pub fn bootstrap(
        &self,
        profile: &Profile,
    ) -> (BootstrapResult<Bootstrapper>, Arc<DiagnosticsRecorder>) {
        let recorder = Arc::new(DiagnosticsRecorder::new());
        let deps = BootstrapDependencies::new(
            Arc::new(DirectoryIdentityLoader::new()),
            Arc::new(DefaultGenesisAssembler::with_timestamp(FIXTURE_TIMESTAMP)),
        )
        .with_diagnostics(recorder.clone());
        (Bootstrapper::construct(profile, deps), recorder)
    }
}

/// Organization entry referencing the fixture's MSP directory
pub fn org(name: &str) -> Value {
    json!({
        "Name": name,
        "ID": format!("{name}MSP"),
        "MSPDir": format!("crypto/{name}"),
    })
}

/// Orderer section
pub fn orderer(kind: &str, brokers: &[&str]) -> Value {
    json!({
        "OrdererType": kind,
        "Addresses": ["orderer0.example.com:7050"],
        "BatchTimeout": 2000,
        "BatchSize": {
            "MaxMessageCount": 10,
            "AbsoluteMaxBytes": 10485760,
            "PreferredMaxBytes": 524288
        },
        "MaxChannels": 0,
        "Organizations": [org("OrdererOrg")],
        "BrokerEndpoints": brokers,
    })
}

/// Orderer, three application organizations and one consortium
pub fn sample_profile() -> Value {
    let mut org2 = org("Org2");
    org2["AdminPrincipal"] = json!("Role.MEMBER");
    let mut org1 = org("Org1");
    org1["AnchorPeers"] = json!([{"Host": "peer0.org1.example.com", "Port": 7051}]);

    json!({
        "Orderer": orderer("solo", &[]),
        "Application": {
            "Organizations": [org1, org2, org("Org3")]
        },
        "Consortiums": {
            "SampleConsortium": {
                "Organizations": [org("Org1"), org("Org2")]
            }
        }
    })
}
