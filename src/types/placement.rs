// Copyright (c) 2025 - Cowboy AI, Inc.
//! Placement Hubs, Requirements and Compatibility Results

use serde::{Deserialize, Serialize};

use super::fault::MethodFault;
use super::profile::{CapabilityConstraints, ProfileId};
use super::reference::ManagedObjectReference;

/// A candidate placement target, e.g. a datastore
///
/// Conversions to and from [`ManagedObjectReference`] copy type and id
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementHub {
    pub hub_type: String,
    pub hub_id: String,
}

impl PlacementHub {
    pub fn new(hub_type: impl Into<String>, hub_id: impl Into<String>) -> Self {
        Self {
            hub_type: hub_type.into(),
            hub_id: hub_id.into(),
        }
    }

    pub fn to_reference(&self) -> ManagedObjectReference {
        ManagedObjectReference::new(self.hub_type.clone(), self.hub_id.clone())
    }
}

impl From<&ManagedObjectReference> for PlacementHub {
    fn from(r: &ManagedObjectReference) -> Self {
        Self::new(r.kind.clone(), r.value.clone())
    }
}

impl From<PlacementHub> for ManagedObjectReference {
    fn from(hub: PlacementHub) -> Self {
        ManagedObjectReference::new(hub.hub_type, hub.hub_id)
    }
}

/// A policy requirement passed to the compatibility check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_typeName")]
#[non_exhaustive]
pub enum PlacementRequirement {
    /// Satisfy the rules of a stored capability profile
    #[serde(rename = "PbmPlacementCapabilityProfileRequirement", rename_all = "camelCase")]
    CapabilityProfile { profile_id: ProfileId },

    /// Satisfy inline capability constraints
    #[serde(rename = "PbmPlacementCapabilityConstraintsRequirement")]
    CapabilityConstraints { constraints: CapabilityConstraints },
}

impl PlacementRequirement {
    pub fn profile(profile_id: ProfileId) -> Self {
        PlacementRequirement::CapabilityProfile { profile_id }
    }
}

/// Compatibility of one hub with the requested requirements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub hub: PlacementHub,

    /// Provider-specific matching resources, kept opaque
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matching_resources: Vec<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_many: Option<i64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warning: Vec<MethodFault>,

    /// Empty iff the hub satisfies every requirement
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub error: Vec<MethodFault>,
}

impl CompatibilityResult {
    /// A result with no faults
    pub fn compatible(hub: PlacementHub) -> Self {
        Self {
            hub,
            matching_resources: Vec::new(),
            how_many: None,
            warning: Vec::new(),
            error: Vec::new(),
        }
    }

    /// A result carrying the given faults
    pub fn incompatible(hub: PlacementHub, error: Vec<MethodFault>) -> Self {
        Self {
            error,
            ..Self::compatible(hub)
        }
    }

    pub fn is_compatible(&self) -> bool {
        self.error.is_empty()
    }
}
