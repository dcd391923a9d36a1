// Copyright (c) 2025 - Cowboy AI, Inc.
//! Profile Operations
//!
//! Query, retrieval, CRUD and association lookups for capability profiles.
//! Every operation is a single round trip against the profile manager.
//!
//! Batch results stay as data: a delete that succeeds at the transport level
//! may still carry per-profile faults in its outcomes, and callers are
//! expected to inspect them.

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::client::Client;
use crate::errors::PbmResult;
use crate::methods::{
    Create, Delete, QueryAssociatedEntities, QueryAssociatedEntity, QueryProfile,
    RetrieveContent, Update,
};
use crate::types::{
    CapabilityProfileCreateSpec, CapabilityProfileUpdateSpec, Profile, ProfileCategory, ProfileId,
    ProfileOperationOutcome, ProfileResourceType, QueryProfileResult, ServerObjectRef,
    ServerObjectType,
};

impl Client {
    /// List the ids of profiles matching a resource type and category
    pub async fn query_profile(
        &self,
        cancel: &CancellationToken,
        resource_type: &ProfileResourceType,
        category: ProfileCategory,
    ) -> PbmResult<Vec<ProfileId>> {
        let request = QueryProfile {
            resource_type,
            profile_category: Some(category),
        };

        let ids = self.invoke(cancel, self.profile_manager(), &request).await?;
        debug!("Found {} {} profiles", ids.len(), category);
        Ok(ids)
    }

    /// Fetch full profile bodies
    pub async fn retrieve_content(
        &self,
        cancel: &CancellationToken,
        ids: &[ProfileId],
    ) -> PbmResult<Vec<Profile>> {
        let request = RetrieveContent { profile_ids: ids };
        self.invoke(cancel, self.profile_manager(), &request).await
    }

    /// Create a capability profile and return its id
    ///
    /// No id is observable on failure; [`ProfileId::default`] is the zero
    /// value and never names a created profile.
    pub async fn create_profile(
        &self,
        cancel: &CancellationToken,
        spec: &CapabilityProfileCreateSpec,
    ) -> PbmResult<ProfileId> {
        let request = Create { create_spec: spec };
        let id = self.invoke(cancel, self.profile_manager(), &request).await?;
        debug!("Created profile {:?} as {}", spec.name, id);
        Ok(id)
    }

    /// Update an existing profile in place
    pub async fn update_profile(
        &self,
        cancel: &CancellationToken,
        id: &ProfileId,
        spec: &CapabilityProfileUpdateSpec,
    ) -> PbmResult<()> {
        let request = Update {
            profile_id: id,
            update_spec: spec,
        };
        self.invoke(cancel, self.profile_manager(), &request).await
    }

    /// Delete a batch of profiles
    ///
    /// Returns one outcome per requested id, in server order. An `Ok` result
    /// does not mean every delete succeeded.
    pub async fn delete_profiles(
        &self,
        cancel: &CancellationToken,
        ids: &[ProfileId],
    ) -> PbmResult<Vec<ProfileOperationOutcome>> {
        let request = Delete { profile_id: ids };
        let outcomes: Vec<ProfileOperationOutcome> =
            self.invoke(cancel, self.profile_manager(), &request).await?;

        let failed = outcomes.iter().filter(|o| !o.is_success()).count();
        if failed > 0 {
            debug!("{} of {} profile deletes reported faults", failed, outcomes.len());
        }
        Ok(outcomes)
    }

    /// Entities of a given type associated with a profile
    pub async fn query_associated_entity(
        &self,
        cancel: &CancellationToken,
        id: &ProfileId,
        entity_type: ServerObjectType,
    ) -> PbmResult<Vec<ServerObjectRef>> {
        let request = QueryAssociatedEntity {
            profile: id,
            entity_type: Some(entity_type),
        };
        self.invoke(cancel, self.profile_manager(), &request).await
    }

    /// Entities associated with each of a batch of profiles
    pub async fn query_associated_entities(
        &self,
        cancel: &CancellationToken,
        ids: &[ProfileId],
    ) -> PbmResult<Vec<QueryProfileResult>> {
        let request = QueryAssociatedEntities { profiles: ids };
        self.invoke(cancel, self.profile_manager(), &request).await
    }
}
