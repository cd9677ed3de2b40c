//! # Genesis Flow
//!
//! Profile on disk → directory identity loader → section builders → composer
//! → default assembler.

use channel_bootstrap::{BootstrapError, ConfigurationError, Section, VerificationError};
use serde_json::json;
use shared_types::keys::{
    ANCHOR_PEERS_KEY, APPLICATION_GROUP_KEY, BATCH_TIMEOUT_KEY, CHANNEL_CREATION_POLICY_KEY,
    CONSENSUS_TYPE_KEY, CONSORTIUMS_GROUP_KEY, HASHING_ALGORITHM_KEY, KAFKA_BROKERS_KEY, MSP_KEY,
    ORDERER_ADDRESSES_KEY, ORDERER_GROUP_KEY,
};
use shared_types::{
    AnchorPeer, ConfigPath, ConfigValueKind, GenesisBlock, ImplicitMetaRule, Policy,
};

use super::fixtures::{org, orderer, sample_profile, NetworkFixture, FIXTURE_TIMESTAMP};

fn value(block: &GenesisBlock, path: &[&str]) -> ConfigValueKind {
    block
        .config()
        .value_at(&ConfigPath::from(path))
        .unwrap_or_else(|| panic!("no value at {path:?}"))
        .value
        .clone()
}

#[test]
fn test_full_profile_genesis() {
    let network = NetworkFixture::new();
    let profile = network.profile(&sample_profile());
    let (bootstrapper, _) = network.bootstrap(&profile);
    let block = bootstrapper
        .unwrap()
        .genesis_block_for_channel("mychannel")
        .unwrap();

    assert_eq!(block.channel_id(), "mychannel");
    assert_eq!(block.sequence(), 0);
    assert_eq!(block.header.number, 0);
    assert_eq!(block.metadata.timestamp, FIXTURE_TIMESTAMP);
    assert!(block.verify_data_hash().unwrap());

    assert_eq!(
        value(&block, &[HASHING_ALGORITHM_KEY]),
        ConfigValueKind::HashingAlgorithm("SHA256".to_string())
    );
    assert_eq!(
        value(&block, &[ORDERER_ADDRESSES_KEY]),
        ConfigValueKind::OrdererAddresses(vec!["orderer0.example.com:7050".to_string()])
    );
    assert_eq!(
        value(&block, &[ORDERER_GROUP_KEY, CONSENSUS_TYPE_KEY]),
        ConfigValueKind::ConsensusType("solo".to_string())
    );
    assert_eq!(
        value(&block, &[ORDERER_GROUP_KEY, BATCH_TIMEOUT_KEY]),
        ConfigValueKind::BatchTimeout("2s".to_string())
    );
    assert_eq!(
        value(&block, &[APPLICATION_GROUP_KEY, "Org1", ANCHOR_PEERS_KEY]),
        ConfigValueKind::AnchorPeers(vec![AnchorPeer {
            host: "peer0.org1.example.com".to_string(),
            port: 7051,
        }])
    );
    assert_eq!(
        value(&block, &[APPLICATION_GROUP_KEY, "Org3", ANCHOR_PEERS_KEY]),
        ConfigValueKind::AnchorPeers(vec![])
    );
    assert_eq!(
        value(&block, &[CONSORTIUMS_GROUP_KEY, "SampleConsortium", CHANNEL_CREATION_POLICY_KEY]),
        ConfigValueKind::ChannelCreationPolicy(Policy::implicit_meta("Admins", ImplicitMetaRule::Any))
    );
}

#[test]
fn test_identity_loaded_from_disk() {
    let network = NetworkFixture::new();
    let profile = network.profile(&sample_profile());
    let block = network.bootstrap(&profile).0.unwrap().genesis_block().unwrap();

    let ConfigValueKind::Msp(identity) = value(&block, &[ORDERER_GROUP_KEY, "OrdererOrg", MSP_KEY])
    else {
        panic!("MSP value expected");
    };
    assert_eq!(identity.msp_id, "OrdererOrgMSP");
    assert_eq!(identity.root_certs.len(), 1);
    assert_eq!(identity.admin_certs.len(), 1);
    assert!(String::from_utf8_lossy(&identity.root_certs[0]).contains("OrdererOrg-ROOT"));
}

#[test]
fn test_every_node_has_effective_mod_policy() {
    let network = NetworkFixture::new();
    let profile = network.profile(&sample_profile());
    let block = network.bootstrap(&profile).0.unwrap().genesis_block().unwrap();
    let tree = block.config();

    assert_eq!(tree.mod_policy, "Admins");
    for path in tree.descendant_paths() {
        let group = tree.group(&path).unwrap();
        assert!(!group.mod_policy.is_empty(), "{path} has no mod-policy");
        for (key, value) in &group.values {
            assert!(!value.mod_policy.is_empty(), "{path}/{key} has no mod-policy");
        }
        for (key, policy) in &group.policies {
            assert!(!policy.mod_policy.is_empty(), "{path}/{key} has no mod-policy");
        }
    }
}

#[test]
fn test_block_survives_encoding() {
    let network = NetworkFixture::new();
    let profile = network.profile(&sample_profile());
    let block = network
        .bootstrap(&profile)
        .0
        .unwrap()
        .genesis_block_for_channel("mychannel")
        .unwrap();

    let decoded = GenesisBlock::decode(&block.encode().unwrap()).unwrap();
    assert_eq!(decoded, block);
    assert_eq!(decoded.block_hash(), block.block_hash());
}

#[test]
fn test_kafka_embeds_brokers() {
    let network = NetworkFixture::new();
    let profile = network.profile(&json!({
        "Orderer": orderer("kafka", &["kafka0:9092", "kafka1:9092"])
    }));
    let block = network.bootstrap(&profile).0.unwrap().genesis_block().unwrap();

    assert_eq!(
        value(&block, &[ORDERER_GROUP_KEY, KAFKA_BROKERS_KEY]),
        ConfigValueKind::KafkaBrokers(vec!["kafka0:9092".to_string(), "kafka1:9092".to_string()])
    );
}

#[test]
fn test_consensus_validation() {
    let network = NetworkFixture::new();

    let solo = network.profile(&json!({ "Orderer": orderer("solo", &[]) }));
    assert!(network.bootstrap(&solo).0.is_ok());

    let kafka = network.profile(&json!({ "Orderer": orderer("kafka", &[]) }));
    let err = network.bootstrap(&kafka).0.err().unwrap();
    assert!(matches!(
        err,
        BootstrapError::Configuration(ConfigurationError::MissingBrokerEndpoints { .. })
    ));

    let unknown = network.profile(&json!({ "Orderer": orderer("pbft", &[]) }));
    let err = network.bootstrap(&unknown).0.err().unwrap();
    assert!(matches!(
        err,
        BootstrapError::Configuration(ConfigurationError::UnknownConsensusType(ref kind)) if kind == "pbft"
    ));
}

#[test]
fn test_missing_msp_aborts_construction() {
    let network = NetworkFixture::new();
    let profile = network.profile(&json!({
        "Application": {
            "Organizations": [org("Org1"), org("Ghost")]
        }
    }));

    let (result, recorder) = network.bootstrap(&profile);
    match result.err().unwrap() {
        BootstrapError::Verification {
            organization,
            source: VerificationError::Unreadable { .. },
        } => assert_eq!(organization, "Ghost"),
        other => panic!("unexpected error: {other}"),
    }

    let snapshot = recorder.snapshot();
    assert_eq!(snapshot.organizations_verified, 1);
    assert_eq!(snapshot.failures, 1);
}

#[test]
fn test_malformed_channel_id_is_configuration_error() {
    let network = NetworkFixture::new();
    let profile = network.profile(&sample_profile());
    let bootstrapper = network.bootstrap(&profile).0.unwrap();

    let too_long = "c".repeat(250);
    for channel in ["", "MyChannel", "my_channel", too_long.as_str()] {
        let err = bootstrapper.genesis_block_for_channel(channel).unwrap_err();
        assert!(err.is_configuration(), "{channel:?} accepted");
    }
}

#[test]
fn test_diagnostics_report_sections() {
    let network = NetworkFixture::new();
    let profile = network.profile(&json!({ "Orderer": orderer("solo", &[]) }));
    let (bootstrapper, recorder) = network.bootstrap(&profile);
    let bootstrapper = bootstrapper.unwrap();
    bootstrapper.genesis_block_for_channel("alpha").unwrap();
    bootstrapper.genesis_block_for_channel("beta").unwrap();

    let snapshot = recorder.snapshot();
    assert_eq!(snapshot.sections_built, 2);
    assert_eq!(snapshot.sections_skipped, 2);
    assert_eq!(snapshot.organizations_verified, 1);
    assert_eq!(snapshot.genesis_blocks, 2);
    assert!(bootstrapper.section_groups(Section::Application).is_empty());
}
