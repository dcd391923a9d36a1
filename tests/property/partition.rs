// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Placement Partitioning
//!
//! For any list of distinct hubs and any server verdict per hub:
//! - every hub lands in exactly one of the compatible/non-compatible sets
//! - each output reference is an input reference, type and id untouched
//! - output order follows the server's result order

use proptest::prelude::*;
use std::collections::HashSet;
use tokio_util::sync::CancellationToken;

use crate::fixtures::{connect, MockPolicyServer};
use pbm_client::types::MethodFault;
use pbm_client::{ManagedObjectReference, ProfileId};

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Distinct datastore references, each paired with a pass/fail verdict
fn hubs_with_verdicts() -> impl Strategy<Value = Vec<(ManagedObjectReference, bool)>> {
    prop::collection::vec(
        (
            prop_oneof![Just("Datastore"), Just("StoragePod"), Just("datastore")],
            "[a-zA-Z0-9 _-]{0,12}",
            any::<bool>(),
        ),
        0..24,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (kind, suffix, pass))| {
                (ManagedObjectReference::new(kind, format!("{i}-{suffix}")), pass)
            })
            .collect()
    })
}

fn profile_ids() -> impl Strategy<Value = Vec<ProfileId>> {
    prop::collection::vec("[a-f0-9]{1,8}".prop_map(ProfileId::from), 0..4)
}

/// Server double failing exactly the hubs marked as failing
fn verdict_server(entries: &[(ManagedObjectReference, bool)]) -> MockPolicyServer {
    let failing: HashSet<(String, String)> = entries
        .iter()
        .filter(|(_, pass)| !pass)
        .map(|(r, _)| (r.kind.clone(), r.value.clone()))
        .collect();

    MockPolicyServer::new().with_compatibility(move |hub, _, _| {
        if failing.contains(&(hub.hub_type.clone(), hub.hub_id.clone())) {
            vec![MethodFault::new("PbmFault", "requirements not met")]
        } else {
            Vec::new()
        }
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_partition_is_complete_and_disjoint(
        entries in hubs_with_verdicts(),
        ids in profile_ids(),
    ) {
        let datastores: Vec<ManagedObjectReference> =
            entries.iter().map(|(r, _)| r.clone()).collect();

        let (compatible, non_compatible) = tokio_test::block_on(async {
            let (client, _server) = connect(verdict_server(&entries)).await;
            let cancel = CancellationToken::new();
            let compatible = client
                .compatible_datastores(&cancel, &datastores, None, &ids)
                .await
                .unwrap();
            let non_compatible = client
                .non_compatible_datastores(&cancel, &datastores, None, &ids)
                .await
                .unwrap();
            (compatible, non_compatible)
        });

        prop_assert_eq!(compatible.len() + non_compatible.len(), datastores.len());
        for d in &compatible {
            prop_assert!(!non_compatible.contains(d));
        }
    }

    #[test]
    fn prop_partition_preserves_references_and_order(
        entries in hubs_with_verdicts(),
    ) {
        let datastores: Vec<ManagedObjectReference> =
            entries.iter().map(|(r, _)| r.clone()).collect();
        let expected_pass: Vec<ManagedObjectReference> = entries
            .iter()
            .filter(|(_, pass)| *pass)
            .map(|(r, _)| r.clone())
            .collect();
        let expected_fail: Vec<ManagedObjectReference> = entries
            .iter()
            .filter(|(_, pass)| !*pass)
            .map(|(r, _)| r.clone())
            .collect();

        let (compatible, non_compatible) = tokio_test::block_on(async {
            let (client, _server) = connect(verdict_server(&entries)).await;
            let cancel = CancellationToken::new();
            let ids = [ProfileId::new("1")];
            (
                client.compatible_datastores(&cancel, &datastores, None, &ids).await.unwrap(),
                client.non_compatible_datastores(&cancel, &datastores, None, &ids).await.unwrap(),
            )
        });

        prop_assert_eq!(compatible, expected_pass);
        prop_assert_eq!(non_compatible, expected_fail);
    }
}
