// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for pbm-client
//!
//! Provides an in-memory PBM server double implementing `Transport`.
//!
//! # Design Principles
//! - All profile data is deterministic (fixed ids and timestamps)
//! - Profiles are returned in insertion order, standing in for server order
//! - Every call is recorded so tests can assert on round trips and targets

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use pbm_client::types::{
    CapabilityConstraints, CapabilityProfile, CompatibilityResult, MethodFault, PlacementHub,
    PlacementRequirement, Profile, ProfileBase, ProfileCategory, ProfileId,
    ProfileOperationOutcome, ProfileResourceType, ServerObjectRef,
};
use pbm_client::{Client, MethodCall, Transport, TransportError};

// Fixed test timestamp (2026-01-19T12:00:00Z)
pub const FIXED_TIMESTAMP: &str = "2026-01-19T12:00:00Z";

pub const PROFILE_MANAGER: &str = "ProfileManager";
pub const PLACEMENT_SOLVER: &str = "placementSolver";

/// Parse the fixed timestamp
pub fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(FIXED_TIMESTAMP)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

/// A storage requirement capability profile with fixed timestamps
pub fn requirement_profile(id: &str, name: &str) -> Profile {
    Profile::Capability(CapabilityProfile {
        base: ProfileBase {
            profile_id: ProfileId::new(id),
            name: name.to_string(),
            description: None,
            creation_time: fixed_timestamp(),
            created_by: "Administrator@vsphere.local".to_string(),
            last_updated_time: fixed_timestamp(),
            last_updated_by: "Administrator@vsphere.local".to_string(),
        },
        profile_category: ProfileCategory::Requirement,
        resource_type: ProfileResourceType::storage(),
        constraints: CapabilityConstraints::default(),
        generation_id: 0,
        is_default: false,
        system_created_profile_type: None,
    })
}

type CompatibilityRule =
    dyn Fn(&PlacementHub, Option<&ServerObjectRef>, &[PlacementRequirement]) -> Vec<MethodFault>
        + Send
        + Sync;

/// In-memory PBM server
pub struct MockPolicyServer {
    profiles: Mutex<Vec<Profile>>,
    compatibility: Box<CompatibilityRule>,
    delete_faults: HashSet<String>,
    associations: HashMap<String, Vec<ServerObjectRef>>,
    failures: HashMap<&'static str, TransportError>,
    stalled: HashSet<&'static str>,
    calls: Mutex<Vec<MethodCall>>,
    next_id: Mutex<u64>,
}

impl Default for MockPolicyServer {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPolicyServer {
    /// An empty server where every hub is compatible
    pub fn new() -> Self {
        Self {
            profiles: Mutex::new(Vec::new()),
            compatibility: Box::new(|_, _, _| Vec::new()),
            delete_faults: HashSet::new(),
            associations: HashMap::new(),
            failures: HashMap::new(),
            stalled: HashSet::new(),
            calls: Mutex::new(Vec::new()),
            next_id: Mutex::new(100),
        }
    }

    pub fn with_profile(self, profile: Profile) -> Self {
        self.profiles.lock().unwrap().push(profile);
        self
    }

    /// Decide per hub which faults it reports
    pub fn with_compatibility<F>(mut self, rule: F) -> Self
    where
        F: Fn(&PlacementHub, Option<&ServerObjectRef>, &[PlacementRequirement]) -> Vec<MethodFault>
            + Send
            + Sync
            + 'static,
    {
        self.compatibility = Box::new(rule);
        self
    }

    /// Report a fault when deleting this id
    pub fn failing_delete(mut self, id: &str) -> Self {
        self.delete_faults.insert(id.to_string());
        self
    }

    pub fn with_association(mut self, id: &str, entities: Vec<ServerObjectRef>) -> Self {
        self.associations.insert(id.to_string(), entities);
        self
    }

    /// Fail every call of `method` with a transport error
    pub fn failing(mut self, method: &'static str, error: TransportError) -> Self {
        self.failures.insert(method, error);
        self
    }

    /// Never answer calls of `method`
    pub fn stalling(mut self, method: &'static str) -> Self {
        self.stalled.insert(method);
        self
    }

    pub fn calls(&self) -> Vec<MethodCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls made after bootstrap
    pub fn operation_calls(&self) -> Vec<MethodCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.method != "PbmRetrieveServiceContent")
            .collect()
    }

    pub fn profiles(&self) -> Vec<Profile> {
        self.profiles.lock().unwrap().clone()
    }

    fn service_content() -> Value {
        json!({
            "aboutInfo": { "name": "PBM", "version": "8.0", "instanceUuid": "4f3c2b1a-0000-4000-8000-000000000001" },
            "sessionManager": { "type": "PbmSessionManager", "value": "SessionManager" },
            "capabilityMetadataManager": { "type": "PbmCapabilityMetadataManager", "value": "MetadataManager" },
            "profileManager": { "type": "PbmProfileProfileManager", "value": PROFILE_MANAGER },
            "complianceManager": { "type": "PbmComplianceManager", "value": "complianceManager" },
            "placementSolver": { "type": "PbmPlacementSolver", "value": PLACEMENT_SOLVER }
        })
    }

    fn arg<T: for<'de> Deserialize<'de>>(body: &Value, key: &str) -> T {
        serde_json::from_value(body.get(key).cloned().unwrap_or(Value::Null))
            .unwrap_or_else(|e| panic!("bad {} argument: {}", key, e))
    }

    fn dispatch(&self, call: &MethodCall) -> Result<Value, TransportError> {
        let body = &call.body;
        let returnval = match call.method {
            "PbmRetrieveServiceContent" => Self::service_content(),
            "PbmQueryProfile" => {
                let category: ProfileCategory = Self::arg(body, "profileCategory");
                let ids: Vec<ProfileId> = self
                    .profiles()
                    .iter()
                    .filter(|p| match p {
                        Profile::Capability(c) => c.profile_category == category,
                        Profile::Default(_) => false,
                    })
                    .map(|p| p.profile_id().clone())
                    .collect();
                json!(ids)
            }
            "PbmRetrieveContent" => {
                let ids: Vec<ProfileId> = Self::arg(body, "profileIds");
                let profiles = self.profiles();
                let mut found = Vec::new();
                for id in &ids {
                    match profiles.iter().find(|p| p.profile_id() == id) {
                        Some(p) => found.push(p.clone()),
                        None => {
                            return Err(TransportError::Fault(MethodFault::new(
                                "PbmFaultNotFound",
                                format!("profile {} not found", id),
                            )))
                        }
                    }
                }
                json!(found)
            }
            "PbmCheckRequirements" => {
                let hubs: Vec<PlacementHub> = Self::arg(body, "hubsToSearch");
                let subject: Option<ServerObjectRef> = Self::arg(body, "placementSubjectRef");
                let reqs: Vec<PlacementRequirement> =
                    Self::arg(body, "placementSubjectRequirement");
                let results: Vec<CompatibilityResult> = hubs
                    .into_iter()
                    .map(|hub| {
                        let faults = (self.compatibility)(&hub, subject.as_ref(), &reqs);
                        CompatibilityResult::incompatible(hub, faults)
                    })
                    .collect();
                json!(results)
            }
            "PbmCreate" => {
                let spec: Value = Self::arg(body, "createSpec");
                let mut next = self.next_id.lock().unwrap();
                *next += 1;
                let id = next.to_string();
                let name = spec["name"].as_str().unwrap_or_default();
                self.profiles
                    .lock()
                    .unwrap()
                    .push(requirement_profile(&id, name));
                json!({ "uniqueId": id })
            }
            "PbmUpdate" => {
                let id: ProfileId = Self::arg(body, "profileId");
                let spec: Value = Self::arg(body, "updateSpec");
                let mut profiles = self.profiles.lock().unwrap();
                let Some(Profile::Capability(p)) =
                    profiles.iter_mut().find(|p| p.profile_id() == &id)
                else {
                    return Err(TransportError::Fault(MethodFault::new(
                        "PbmFaultNotFound",
                        format!("profile {} not found", id),
                    )));
                };
                if let Some(description) = spec["description"].as_str() {
                    p.base.description = Some(description.to_string());
                }
                if let Some(name) = spec["name"].as_str() {
                    p.base.name = name.to_string();
                }
                Value::Null
            }
            "PbmDelete" => {
                let ids: Vec<ProfileId> = Self::arg(body, "profileId");
                let outcomes: Vec<ProfileOperationOutcome> = ids
                    .into_iter()
                    .map(|id| {
                        let fault = self.delete_faults.contains(id.as_str()).then(|| {
                            MethodFault::new("PbmFaultProfileStorageFault", "profile in use")
                        });
                        if fault.is_none() {
                            self.profiles
                                .lock()
                                .unwrap()
                                .retain(|p| p.profile_id() != &id);
                        }
                        ProfileOperationOutcome {
                            profile_id: id,
                            fault,
                        }
                    })
                    .collect();
                json!(outcomes)
            }
            "PbmQueryAssociatedEntity" => {
                let id: ProfileId = Self::arg(body, "profile");
                json!(self.associations.get(id.as_str()).cloned().unwrap_or_default())
            }
            "PbmQueryAssociatedEntities" => {
                let ids: Vec<ProfileId> = Self::arg(body, "profiles");
                let results: Vec<Value> = ids
                    .iter()
                    .flat_map(|id| {
                        self.associations
                            .get(id.as_str())
                            .cloned()
                            .unwrap_or_default()
                            .into_iter()
                            .map(move |object| json!({ "object": object, "profileId": [id] }))
                    })
                    .collect();
                json!(results)
            }
            other => panic!("unexpected method {}", other),
        };

        if returnval.is_null() {
            Ok(Value::Null)
        } else {
            Ok(json!({ "returnval": returnval }))
        }
    }
}

#[async_trait]
impl Transport for MockPolicyServer {
    async fn invoke(
        &self,
        _cancel: &CancellationToken,
        call: &MethodCall,
    ) -> Result<Value, TransportError> {
        self.calls.lock().unwrap().push(call.clone());
        if self.stalled.contains(call.method) {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
        if let Some(err) = self.failures.get(call.method) {
            return Err(err.clone());
        }
        self.dispatch(call)
    }
}

/// Bootstrap a client against the server double
pub async fn connect(server: MockPolicyServer) -> (Client, Arc<MockPolicyServer>) {
    let server = Arc::new(server);
    let client = Client::with_transport(&CancellationToken::new(), server.clone())
        .await
        .expect("bootstrap against mock server");
    (client, server)
}

/// The two-profile server from the gold/silver scenario
pub fn gold_silver_server() -> MockPolicyServer {
    MockPolicyServer::new()
        .with_profile(requirement_profile("1", "gold"))
        .with_profile(requirement_profile("2", "silver"))
}
