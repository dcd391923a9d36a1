// Copyright (c) 2025 - Cowboy AI, Inc.
//! PBM Service Instance Content

use serde::{Deserialize, Serialize};

use super::reference::ManagedObjectReference;

/// Identity of the PBM service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutInfo {
    pub name: String,
    pub version: String,
    pub instance_uuid: String,
}

/// References to the server-side PBM singletons
///
/// Retrieved once per connection by
/// [`Client::new`](crate::client::Client::new) and never refreshed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceContent {
    pub about_info: AboutInfo,
    pub session_manager: ManagedObjectReference,
    pub capability_metadata_manager: ManagedObjectReference,
    pub profile_manager: ManagedObjectReference,
    pub compliance_manager: ManagedObjectReference,
    pub placement_solver: ManagedObjectReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_manager: Option<ManagedObjectReference>,
}

impl ServiceContent {
    /// Reasons this content cannot back a client, empty when usable
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.profile_manager.is_empty() {
            problems.push("missing profile manager reference".to_string());
        }
        if self.placement_solver.is_empty() {
            problems.push("missing placement solver reference".to_string());
        }
        problems
    }
}
