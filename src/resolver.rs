// Copyright (c) 2025 - Cowboy AI, Inc.
//! Profile Name Resolution

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::client::Client;
use crate::errors::{PbmError, PbmResult};
use crate::types::{Profile, ProfileCategory, ProfileResourceType};

/// First profile whose name equals `name` exactly, in the given order
pub fn find_by_name<'a>(profiles: &'a [Profile], name: &str) -> Option<&'a Profile> {
    profiles.iter().find(|p| p.name() == name)
}

impl Client {
    /// Resolve a storage requirement profile name to its unique id
    ///
    /// Lists every storage requirement profile, retrieves them all, and
    /// returns the id of the first exact, case-sensitive name match in
    /// server order. When several profiles share the name, which one wins
    /// depends on the order the server returns them in.
    pub async fn profile_id_by_name(
        &self,
        cancel: &CancellationToken,
        name: &str,
    ) -> PbmResult<String> {
        let ids = self
            .query_profile(cancel, &ProfileResourceType::storage(), ProfileCategory::Requirement)
            .await?;

        let profiles = self.retrieve_content(cancel, &ids).await?;

        match find_by_name(&profiles, name) {
            Some(profile) => {
                debug!("Resolved profile {:?} to {}", name, profile.profile_id());
                Ok(profile.profile_id().unique_id.clone())
            }
            None => Err(PbmError::NotFound {
                name: name.to_string(),
            }),
        }
    }
}
