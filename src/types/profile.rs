// Copyright (c) 2025 - Cowboy AI, Inc.
//! Capability Profile Domain Model
//!
//! A capability profile is a named storage policy stored on the server.
//! Profiles are identified by a server-assigned [`ProfileId`] and come back
//! from `PbmRetrieveContent` as a polymorphic [`Profile`] whose common part
//! is a [`ProfileBase`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::fault::MethodFault;
use super::reference::ServerObjectRef;

/// Opaque, server-assigned profile identifier
///
/// The default value is the empty (zero) identifier. It never names a real
/// profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileId {
    pub unique_id: String,
}

impl ProfileId {
    pub fn new(unique_id: impl Into<String>) -> Self {
        Self {
            unique_id: unique_id.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.unique_id
    }

    /// Whether this is the zero identifier
    pub fn is_empty(&self) -> bool {
        self.unique_id.is_empty()
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.unique_id)
    }
}

impl From<&str> for ProfileId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ProfileId {
    fn from(s: String) -> Self {
        Self { unique_id: s }
    }
}

/// Resource type filter for profile queries
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResourceType {
    pub resource_type: String,
}

impl ProfileResourceType {
    pub const STORAGE: &'static str = "STORAGE";

    /// The storage resource type, the only one the service defines
    pub fn storage() -> Self {
        Self {
            resource_type: Self::STORAGE.to_string(),
        }
    }
}

impl Default for ProfileResourceType {
    fn default() -> Self {
        Self::storage()
    }
}

/// Profile category filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileCategory {
    /// User-visible storage requirement policies
    Requirement,
    /// Resource profiles published by storage providers
    Resource,
    /// Data service policies (replication, encryption, ...)
    DataServicePolicy,
}

impl ProfileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requirement => "REQUIREMENT",
            Self::Resource => "RESOURCE",
            Self::DataServicePolicy => "DATA_SERVICE_POLICY",
        }
    }
}

impl fmt::Display for ProfileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields shared by every profile kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBase {
    pub profile_id: ProfileId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub creation_time: DateTime<Utc>,
    #[serde(default)]
    pub created_by: String,
    pub last_updated_time: DateTime<Utc>,
    #[serde(default)]
    pub last_updated_by: String,
}

impl ProfileBase {
    /// A freshly created profile base, timestamped now
    pub fn new(profile_id: ProfileId, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            profile_id,
            name: name.into(),
            description: None,
            creation_time: now,
            created_by: String::new(),
            last_updated_time: now,
            last_updated_by: String::new(),
        }
    }
}

/// One property constraint inside a capability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInstance {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    pub value: serde_json::Value,
}

/// Conjunction of property instances
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintInstance {
    #[serde(default)]
    pub property_instance: Vec<PropertyInstance>,
}

/// Capability identifier within a provider namespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapabilityMetadataId {
    pub namespace: String,
    pub id: String,
}

/// A capability with the constraints placed on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityInstance {
    pub id: CapabilityMetadataId,
    #[serde(default)]
    pub constraint: Vec<ConstraintInstance>,
}

/// A named rule set of a capability profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubProfile {
    pub name: String,
    #[serde(default)]
    pub capability: Vec<CapabilityInstance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_provision: Option<bool>,
}

/// Sub-profile constraints of a capability profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityConstraints {
    #[serde(default)]
    pub sub_profiles: Vec<SubProfile>,
}

/// A capability-based storage profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityProfile {
    #[serde(flatten)]
    pub base: ProfileBase,
    pub profile_category: ProfileCategory,
    pub resource_type: ProfileResourceType,
    #[serde(default)]
    pub constraints: CapabilityConstraints,
    #[serde(default)]
    pub generation_id: i64,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_created_profile_type: Option<String>,
}

/// The datastore default profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultProfile {
    #[serde(flatten)]
    pub base: ProfileBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<CapabilityConstraints>,
}

/// A profile returned by `PbmRetrieveContent`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_typeName")]
pub enum Profile {
    #[serde(rename = "PbmCapabilityProfile")]
    Capability(CapabilityProfile),
    #[serde(rename = "PbmDefaultProfile")]
    Default(DefaultProfile),
}

impl Profile {
    /// The fields every profile kind carries
    pub fn base(&self) -> &ProfileBase {
        match self {
            Profile::Capability(p) => &p.base,
            Profile::Default(p) => &p.base,
        }
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn profile_id(&self) -> &ProfileId {
        &self.base().profile_id
    }
}

/// Definition of a new capability profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityProfileCreateSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ProfileCategory>,
    pub resource_type: ProfileResourceType,
    pub constraints: CapabilityConstraints,
}

impl CapabilityProfileCreateSpec {
    /// A storage requirement profile with the given rules
    pub fn storage_requirement(name: impl Into<String>, constraints: CapabilityConstraints) -> Self {
        Self {
            name: name.into(),
            description: None,
            category: Some(ProfileCategory::Requirement),
            resource_type: ProfileResourceType::storage(),
            constraints,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Changes to an existing capability profile; unset fields are left as-is
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityProfileUpdateSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<CapabilityConstraints>,
}

/// Per-profile outcome of a batch operation such as delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOperationOutcome {
    pub profile_id: ProfileId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault: Option<MethodFault>,
}

impl ProfileOperationOutcome {
    pub fn is_success(&self) -> bool {
        self.fault.is_none()
    }
}

/// Profiles associated with one server object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryProfileResult {
    pub object: ServerObjectRef,
    #[serde(default)]
    pub profile_id: Vec<ProfileId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault: Option<MethodFault>,
}
