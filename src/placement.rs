// Copyright (c) 2025 - Cowboy AI, Inc.
//! Placement Compatibility Resolver
//!
//! Asks the placement solver which hubs satisfy a set of profile
//! requirements and partitions candidate datastores by the answer.
//!
//! # Algorithm
//!
//! ```text
//! datastores ──> PlacementHub (type/id verbatim)
//! profile ids ──> CapabilityProfile requirement (one per id, order kept)
//!                    │
//!                    ▼
//!           PbmCheckRequirements (one round trip)
//!                    │
//!                    ▼
//!   one CompatibilityResult per hub, error empty iff compatible
//! ```
//!
//! The two partitioning operations are asymmetric.
//! [`Client::compatible_datastores`] evaluates against the caller's subject,
//! while [`Client::non_compatible_datastores`] always evaluates hubs alone.
//! They are independent calls and are not complements of each other.
//! Callers that need fault details use [`Client::check_requirements`].

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::client::Client;
use crate::errors::PbmResult;
use crate::methods::CheckRequirements;
use crate::types::{
    CompatibilityResult, ManagedObjectReference, PlacementHub, PlacementRequirement, ProfileId,
    ServerObjectRef,
};

/// Hubs for the given datastores, type and id copied verbatim
pub fn hubs_for(datastores: &[ManagedObjectReference]) -> Vec<PlacementHub> {
    datastores.iter().map(PlacementHub::from).collect()
}

/// One capability-profile requirement per id, in input order
pub fn requirements_for(ids: &[ProfileId]) -> Vec<PlacementRequirement> {
    ids.iter().cloned().map(PlacementRequirement::profile).collect()
}

/// Datastores of the results whose error field is empty
pub fn compatible_references(results: &[CompatibilityResult]) -> Vec<ManagedObjectReference> {
    results
        .iter()
        .filter(|r| r.is_compatible())
        .map(|r| r.hub.to_reference())
        .collect()
}

/// Datastores of the results whose error field is non-empty
pub fn non_compatible_references(results: &[CompatibilityResult]) -> Vec<ManagedObjectReference> {
    results
        .iter()
        .filter(|r| !r.is_compatible())
        .map(|r| r.hub.to_reference())
        .collect()
}

impl Client {
    /// Check hubs against requirements, returning raw per-hub results
    ///
    /// `subject` is the entity being placed; `None` evaluates the hubs
    /// independent of any entity.
    pub async fn check_requirements(
        &self,
        cancel: &CancellationToken,
        hubs: &[PlacementHub],
        subject: Option<&ServerObjectRef>,
        requirements: &[PlacementRequirement],
    ) -> PbmResult<Vec<CompatibilityResult>> {
        let request = CheckRequirements {
            hubs_to_search: hubs,
            placement_subject_ref: subject,
            placement_subject_requirement: requirements,
        };

        let results: Vec<CompatibilityResult> =
            self.invoke(cancel, self.placement_solver(), &request).await?;
        debug!(
            "Checked {} hubs against {} requirements: {} compatible",
            hubs.len(),
            requirements.len(),
            results.iter().filter(|r| r.is_compatible()).count()
        );
        Ok(results)
    }

    /// Datastores compatible with the profiles for the given subject
    pub async fn compatible_datastores(
        &self,
        cancel: &CancellationToken,
        datastores: &[ManagedObjectReference],
        subject: Option<&ServerObjectRef>,
        ids: &[ProfileId],
    ) -> PbmResult<Vec<ManagedObjectReference>> {
        let hubs = hubs_for(datastores);
        let requirements = requirements_for(ids);

        let results = self
            .check_requirements(cancel, &hubs, subject, &requirements)
            .await?;
        Ok(compatible_references(&results))
    }

    /// Datastores that fail the profiles, evaluated without a subject
    ///
    /// `_subject` is accepted for parity with
    /// [`compatible_datastores`](Self::compatible_datastores) and is never
    /// sent.
    pub async fn non_compatible_datastores(
        &self,
        cancel: &CancellationToken,
        datastores: &[ManagedObjectReference],
        _subject: Option<&ServerObjectRef>,
        ids: &[ProfileId],
    ) -> PbmResult<Vec<ManagedObjectReference>> {
        let hubs = hubs_for(datastores);
        let requirements = requirements_for(ids);

        let results = self
            .check_requirements(cancel, &hubs, None, &requirements)
            .await?;
        Ok(non_compatible_references(&results))
    }
}
