// Copyright (c) 2025 - Cowboy AI, Inc.
//! PBM Method Definitions
//!
//! One request type per server method. Each implements [`Method`], which
//! ties the request to its wire name and response type. The request struct
//! holds the arguments only; the target managed object travels separately
//! in the [`MethodCall`](crate::transport::MethodCall).
//!
//! Responses arrive as `{"returnval": ...}`. The server omits `returnval`
//! for empty arrays and for methods without a result, so those methods
//! supply an [`Method::empty_response`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::{PbmError, PbmResult};
use crate::types::{
    CapabilityProfileCreateSpec, CapabilityProfileUpdateSpec, CompatibilityResult, PlacementHub,
    PlacementRequirement, Profile, ProfileCategory, ProfileId, ProfileOperationOutcome,
    ProfileResourceType, QueryProfileResult, ServerObjectRef, ServerObjectType, ServiceContent,
};

/// A PBM server method
pub trait Method: Serialize {
    /// Wire name of the method
    const NAME: &'static str;

    /// Decoded `returnval`
    type Response: DeserializeOwned;

    /// Response to use when the server omits `returnval`
    fn empty_response() -> Option<Self::Response> {
        None
    }
}

/// Encode request arguments as a JSON object
pub fn encode<M: Method>(request: &M) -> PbmResult<serde_json::Value> {
    serde_json::to_value(request)
        .map_err(|e| PbmError::Serialization(format!("{}: {}", M::NAME, e)))
}

/// Decode a raw response body into the method's return value
pub fn decode<M: Method>(body: serde_json::Value) -> PbmResult<M::Response> {
    #[derive(Deserialize)]
    struct Envelope {
        #[serde(default)]
        returnval: Option<serde_json::Value>,
    }

    let returnval = match body {
        serde_json::Value::Null => None,
        other => {
            serde_json::from_value::<Envelope>(other)
                .map_err(|e| PbmError::Deserialization(format!("{}: {}", M::NAME, e)))?
                .returnval
        }
    };

    match returnval {
        Some(serde_json::Value::Null) | None => M::empty_response().ok_or_else(|| {
            PbmError::Deserialization(format!("{}: response has no returnval", M::NAME))
        }),
        Some(value) => serde_json::from_value(value)
            .map_err(|e| PbmError::Deserialization(format!("{}: {}", M::NAME, e))),
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RetrieveServiceContent {}

impl Method for RetrieveServiceContent {
    const NAME: &'static str = "PbmRetrieveServiceContent";
    type Response = ServiceContent;
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryProfile<'a> {
    pub resource_type: &'a ProfileResourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_category: Option<ProfileCategory>,
}

impl Method for QueryProfile<'_> {
    const NAME: &'static str = "PbmQueryProfile";
    type Response = Vec<ProfileId>;

    fn empty_response() -> Option<Self::Response> {
        Some(Vec::new())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrieveContent<'a> {
    pub profile_ids: &'a [ProfileId],
}

impl Method for RetrieveContent<'_> {
    const NAME: &'static str = "PbmRetrieveContent";
    type Response = Vec<Profile>;

    fn empty_response() -> Option<Self::Response> {
        Some(Vec::new())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequirements<'a> {
    pub hubs_to_search: &'a [PlacementHub],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_subject_ref: Option<&'a ServerObjectRef>,
    pub placement_subject_requirement: &'a [PlacementRequirement],
}

impl Method for CheckRequirements<'_> {
    const NAME: &'static str = "PbmCheckRequirements";
    type Response = Vec<CompatibilityResult>;

    fn empty_response() -> Option<Self::Response> {
        Some(Vec::new())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Create<'a> {
    pub create_spec: &'a CapabilityProfileCreateSpec,
}

impl Method for Create<'_> {
    const NAME: &'static str = "PbmCreate";
    type Response = ProfileId;
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Update<'a> {
    pub profile_id: &'a ProfileId,
    pub update_spec: &'a CapabilityProfileUpdateSpec,
}

impl Method for Update<'_> {
    const NAME: &'static str = "PbmUpdate";
    type Response = ();

    fn empty_response() -> Option<Self::Response> {
        Some(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delete<'a> {
    pub profile_id: &'a [ProfileId],
}

impl Method for Delete<'_> {
    const NAME: &'static str = "PbmDelete";
    type Response = Vec<ProfileOperationOutcome>;

    fn empty_response() -> Option<Self::Response> {
        Some(Vec::new())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryAssociatedEntity<'a> {
    pub profile: &'a ProfileId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<ServerObjectType>,
}

impl Method for QueryAssociatedEntity<'_> {
    const NAME: &'static str = "PbmQueryAssociatedEntity";
    type Response = Vec<ServerObjectRef>;

    fn empty_response() -> Option<Self::Response> {
        Some(Vec::new())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryAssociatedEntities<'a> {
    pub profiles: &'a [ProfileId],
}

impl Method for QueryAssociatedEntities<'_> {
    const NAME: &'static str = "PbmQueryAssociatedEntities";
    type Response = Vec<QueryProfileResult>;

    fn empty_response() -> Option<Self::Response> {
        Some(Vec::new())
    }
}
