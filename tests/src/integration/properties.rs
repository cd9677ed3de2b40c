//! # Bootstrap Properties
//!
//! Determinism, section omission, policy correctness, admin propagation,
//! bootstrapper reuse and conflict detection.

use channel_bootstrap::domain::policy_template::implicit_majority;
use channel_bootstrap::domain::{msp_group, PolicyEvaluator};
use channel_bootstrap::{
    CompositeTemplate, CompositionError, EntryKind, SimpleTemplate, Template,
};
use proptest::prelude::*;
use serde_json::json;
use shared_types::keys::{
    ADMINS_POLICY_KEY, APPLICATION_GROUP_KEY, BATCH_SIZE_KEY, BLOCK_VALIDATION_POLICY_KEY,
    CONSORTIUMS_GROUP_KEY, ORDERER_GROUP_KEY,
};
use shared_types::{
    encode_tree, BatchSize, ConfigGroup, ConfigPath, ConfigValue, ConfigValueKind, MspPrincipal,
    MspRole, OrganizationIdentity,
};

use super::fixtures::{org, orderer, sample_profile, NetworkFixture};

#[test]
fn test_composition_is_byte_identical_across_runs() {
    let first = NetworkFixture::new();
    let second = NetworkFixture::new();

    let a = first
        .bootstrap(&first.profile(&sample_profile()))
        .0
        .unwrap();
    let b = second
        .bootstrap(&second.profile(&sample_profile()))
        .0
        .unwrap();

    let tree_a = encode_tree(&a.channel_template().unwrap()).unwrap();
    let tree_b = encode_tree(&b.channel_template().unwrap()).unwrap();
    assert_eq!(tree_a, tree_b);

    let block_a = a.genesis_block_for_channel("mychannel").unwrap();
    let block_b = b.genesis_block_for_channel("mychannel").unwrap();
    assert_eq!(
        hex::encode(block_a.header.data_hash),
        hex::encode(block_b.header.data_hash)
    );
    assert_eq!(block_a.encode().unwrap(), block_b.encode().unwrap());
}

#[test]
fn test_absent_consortiums_yield_no_subtree() {
    let network = NetworkFixture::new();
    let mut document = sample_profile();
    document
        .as_object_mut()
        .unwrap()
        .remove("Consortiums");

    let block = network
        .bootstrap(&network.profile(&document))
        .0
        .unwrap()
        .genesis_block()
        .unwrap();

    assert!(!block.config().groups.contains_key(CONSORTIUMS_GROUP_KEY));
    assert!(block.config().groups.contains_key(ORDERER_GROUP_KEY));
    assert!(block.config().groups.contains_key(APPLICATION_GROUP_KEY));
}

#[test]
fn test_empty_profile_yields_channel_section_only() {
    let network = NetworkFixture::new();
    let tree = network
        .bootstrap(&network.profile(&json!({})))
        .0
        .unwrap()
        .channel_template()
        .unwrap();

    assert!(tree.groups.is_empty());
    assert_eq!(tree.values.len(), 3);
    assert_eq!(tree.policies.len(), 3);
}

#[test]
fn test_block_validation_any_orderer_writer() {
    let network = NetworkFixture::new();
    let mut orderer_section = orderer("solo", &[]);
    orderer_section["Organizations"] = json!([org("OrdererOrg"), org("Org3")]);

    let tree = network
        .bootstrap(&network.profile(&json!({ "Orderer": orderer_section })))
        .0
        .unwrap()
        .channel_template()
        .unwrap();
    let evaluator = PolicyEvaluator::new(&tree);
    let section = ConfigPath::new([ORDERER_GROUP_KEY]);

    for msp_id in ["OrdererOrgMSP", "Org3MSP"] {
        assert!(evaluator.evaluate(
            &section,
            BLOCK_VALIDATION_POLICY_KEY,
            &[MspPrincipal::member(msp_id)]
        ));
    }
    assert!(!evaluator.evaluate(
        &section,
        BLOCK_VALIDATION_POLICY_KEY,
        &[MspPrincipal::member("Org1MSP")]
    ));
}

#[test]
fn test_admins_require_strict_majority() {
    let network = NetworkFixture::new();
    let tree = network
        .bootstrap(&network.profile(&sample_profile()))
        .0
        .unwrap()
        .channel_template()
        .unwrap();
    let evaluator = PolicyEvaluator::new(&tree);
    let section = ConfigPath::new([APPLICATION_GROUP_KEY]);

    // Org2 is administered by members, Org1 and Org3 by admins
    let one = [MspPrincipal::admin("Org1MSP")];
    let two = [MspPrincipal::admin("Org1MSP"), MspPrincipal::member("Org2MSP")];
    let members_only = [MspPrincipal::member("Org1MSP"), MspPrincipal::member("Org3MSP")];

    assert!(!evaluator.evaluate(&section, ADMINS_POLICY_KEY, &one));
    assert!(evaluator.evaluate(&section, ADMINS_POLICY_KEY, &two));
    assert!(!evaluator.evaluate(&section, ADMINS_POLICY_KEY, &members_only));
}

#[test]
fn test_admin_flag_propagation() {
    let network = NetworkFixture::new();
    let tree = network
        .bootstrap(&network.profile(&sample_profile()))
        .0
        .unwrap()
        .channel_template()
        .unwrap();

    let admin_roles = |org: &str| -> Vec<MspRole> {
        tree.policy_at(&ConfigPath::new([APPLICATION_GROUP_KEY, org, ADMINS_POLICY_KEY]))
            .and_then(|p| p.policy.as_signature())
            .map(|s| s.principals().into_iter().map(|p| p.role).collect())
            .unwrap_or_default()
    };

    assert_eq!(admin_roles("Org1"), vec![MspRole::Admin]);
    assert_eq!(admin_roles("Org2"), vec![MspRole::Member]);
}

#[test]
fn test_reuse_differs_only_in_channel_and_metadata() {
    let network = NetworkFixture::new();
    let bootstrapper = network
        .bootstrap(&network.profile(&sample_profile()))
        .0
        .unwrap();

    let alpha = bootstrapper.genesis_block_for_channel("alpha").unwrap();
    let beta = bootstrapper.genesis_block_for_channel("beta").unwrap();

    assert_eq!(alpha.config(), beta.config());
    assert_eq!(alpha.sequence(), beta.sequence());
    assert_ne!(alpha.channel_id(), beta.channel_id());
    assert_ne!(alpha.header.data_hash, beta.header.data_hash);
    assert_ne!(alpha.metadata.tx_id, beta.metadata.tx_id);
}

fn batch_size_fragment(max_message_count: u32) -> ConfigGroup {
    let mut fragment = ConfigGroup::new();
    fragment
        .ensure_path(&ConfigPath::new([ORDERER_GROUP_KEY]))
        .values
        .insert(
            BATCH_SIZE_KEY.to_string(),
            ConfigValue::new(ConfigValueKind::BatchSize(BatchSize {
                max_message_count,
                absolute_max_bytes: 10 * 1024 * 1024,
                preferred_max_bytes: 512 * 1024,
            })),
        );
    fragment
}

#[test]
fn test_conflicting_batch_size_rejected() {
    let err = CompositeTemplate::default()
        .with(SimpleTemplate::new(vec![batch_size_fragment(10)]))
        .with(SimpleTemplate::new(vec![batch_size_fragment(500)]))
        .compose()
        .unwrap_err();

    assert_eq!(
        err,
        CompositionError::Conflict {
            path: ConfigPath::new([ORDERER_GROUP_KEY, BATCH_SIZE_KEY]),
            entry: EntryKind::Value,
        }
    );
}

fn application_with(orgs: usize) -> ConfigGroup {
    let section = ConfigPath::new([APPLICATION_GROUP_KEY]);
    let mut fragments = vec![implicit_majority(&section, ADMINS_POLICY_KEY)];
    for i in 0..orgs {
        let identity = OrganizationIdentity::new(format!("Org{i}MSP"), vec![vec![i as u8]]);
        fragments.push(msp_group(&section.child(format!("Org{i}")), &identity, true));
    }
    SimpleTemplate::new(fragments).compose().unwrap()
}

proptest! {
    #[test]
    fn prop_majority_threshold(orgs in 1usize..8, signing in 0usize..8) {
        let signing = signing.min(orgs);
        let tree = application_with(orgs);
        let signers: Vec<_> = (0..signing)
            .map(|i| MspPrincipal::admin(format!("Org{i}MSP")))
            .collect();

        let satisfied = PolicyEvaluator::new(&tree).evaluate(
            &ConfigPath::new([APPLICATION_GROUP_KEY]),
            ADMINS_POLICY_KEY,
            &signers,
        );
        prop_assert_eq!(satisfied, signing * 2 > orgs);
    }
}
