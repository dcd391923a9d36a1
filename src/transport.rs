// Copyright (c) 2025 - Cowboy AI, Inc.
//! Transport abstraction for PBM round trips
//!
//! The client never talks to the network itself. It hands each operation to
//! a [`Transport`] as a single [`MethodCall`] and receives the decoded JSON
//! response. Authentication, wire encoding and retry policy belong to the
//! transport implementation.
//!
//! ```text
//! Client ──MethodCall──> Transport ──> PBM endpoint
//!        <──Value─────────┘
//! ```
//!
//! A [`Session`] is an already-authenticated vCenter session that can bind a
//! transport to a service endpoint (`/pbm/sdk`, `urn:pbm`).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::errors::TransportError;
use crate::types::ManagedObjectReference;

/// Endpoint path of the PBM service
pub const PBM_PATH: &str = "/pbm/sdk";

/// XML namespace of the PBM service
pub const PBM_NAMESPACE: &str = "urn:pbm";

/// Location and namespace of a service on a vCenter session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    pub path: String,
    pub namespace: String,
}

impl ServiceEndpoint {
    pub fn new(path: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            namespace: namespace.into(),
        }
    }

    /// The well-known policy service endpoint
    pub fn pbm() -> Self {
        Self::new(PBM_PATH, PBM_NAMESPACE)
    }
}

impl Default for ServiceEndpoint {
    fn default() -> Self {
        Self::pbm()
    }
}

/// One request addressed to a managed object
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    /// Method name, e.g. "PbmQueryProfile"
    pub method: &'static str,
    /// Service namespace the method belongs to
    pub namespace: String,
    /// Managed object the method is invoked on
    pub this: ManagedObjectReference,
    /// Request arguments, excluding `this`
    pub body: serde_json::Value,
}

/// Performs one request/response exchange
///
/// Implementations should observe `cancel` where they can; the client also
/// races every call against the token and drops the exchange when it fires.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn invoke(
        &self,
        cancel: &CancellationToken,
        call: &MethodCall,
    ) -> Result<serde_json::Value, TransportError>;
}

/// An authenticated session able to reach additional service endpoints
pub trait Session {
    /// Bind a transport to the given endpoint, sharing this session's
    /// authentication
    fn service_client(&self, endpoint: &ServiceEndpoint) -> Arc<dyn Transport>;
}
