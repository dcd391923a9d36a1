// Copyright (c) 2025 - Cowboy AI, Inc.
//! PBM Client and Service Reference Directory
//!
//! A [`Client`] is created by one `PbmRetrieveServiceContent` round trip
//! against the well-known service instance. The returned [`ServiceContent`]
//! names the server singletons (profile manager, placement solver) that every
//! later operation addresses. It is fetched exactly once and never refreshed.
//!
//! # Operation Flow
//!
//! ```text
//! Client::new ──> PbmRetrieveServiceContent ──> ServiceContent
//!      │
//!      ├── profile operations   ──> ProfileManager
//!      ├── placement checks     ──> PlacementSolver
//!      └── name resolution      ──> ProfileManager (x2)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use pbm_client::Client;
//! use tokio_util::sync::CancellationToken;
//!
//! let cancel = CancellationToken::new();
//! let client = Client::new(&cancel, &session).await?;
//! let id = client.profile_id_by_name(&cancel, "gold").await?;
//! ```

use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::errors::{PbmError, PbmResult, TransportError};
use crate::methods::{self, Method, RetrieveServiceContent};
use crate::transport::{MethodCall, Session, ServiceEndpoint, Transport};
use crate::types::{ManagedObjectReference, ServiceContent};

/// Managed object type of the PBM service instance
pub const SERVICE_INSTANCE_TYPE: &str = "PbmServiceInstance";

/// Managed object value of the PBM service instance
pub const SERVICE_INSTANCE_VALUE: &str = "ServiceInstance";

/// Client for the storage policy-based management service
///
/// Cheap to clone; clones share the transport and the service content.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    namespace: String,
    service_content: Arc<ServiceContent>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("namespace", &self.namespace)
            .field("service_content", &self.service_content)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Connect to the PBM endpoint of an established session
    pub async fn new<S>(cancel: &CancellationToken, session: &S) -> PbmResult<Self>
    where
        S: Session + ?Sized,
    {
        Self::with_endpoint(cancel, session, ServiceEndpoint::pbm()).await
    }

    /// Connect to a relocated policy endpoint of an established session
    pub async fn with_endpoint<S>(
        cancel: &CancellationToken,
        session: &S,
        endpoint: ServiceEndpoint,
    ) -> PbmResult<Self>
    where
        S: Session + ?Sized,
    {
        let transport = session.service_client(&endpoint);
        Self::connect(cancel, transport, endpoint.namespace).await
    }

    /// Connect through a transport already bound to the PBM endpoint
    pub async fn with_transport(
        cancel: &CancellationToken,
        transport: Arc<dyn Transport>,
    ) -> PbmResult<Self> {
        Self::connect(cancel, transport, ServiceEndpoint::pbm().namespace).await
    }

    async fn connect(
        cancel: &CancellationToken,
        transport: Arc<dyn Transport>,
        namespace: String,
    ) -> PbmResult<Self> {
        let this = ManagedObjectReference::new(SERVICE_INSTANCE_TYPE, SERVICE_INSTANCE_VALUE);
        let request = RetrieveServiceContent::default();

        let body = methods::encode(&request)?;
        let call = MethodCall {
            method: RetrieveServiceContent::NAME,
            namespace: namespace.clone(),
            this,
            body,
        };

        let raw = round_trip(transport.as_ref(), cancel, &call)
            .await
            .map_err(|e| PbmError::connection("failed to retrieve PBM service content", e))?;

        let content = methods::decode::<RetrieveServiceContent>(raw).map_err(|e| {
            warn!("Unusable PBM service content: {}", e);
            PbmError::unusable_content(format!("unusable PBM service content: {}", e))
        })?;

        let problems = content.validate();
        if !problems.is_empty() {
            warn!("Unusable PBM service content: {}", problems.join(", "));
            return Err(PbmError::unusable_content(format!(
                "unusable PBM service content: {}",
                problems.join(", ")
            )));
        }

        info!(
            "Connected to {} {} ({})",
            content.about_info.name, content.about_info.version, content.about_info.instance_uuid
        );

        Ok(Self {
            transport,
            namespace,
            service_content: Arc::new(content),
        })
    }

    /// The server singletons retrieved at connection time
    pub fn service_content(&self) -> &ServiceContent {
        &self.service_content
    }

    pub(crate) fn profile_manager(&self) -> &ManagedObjectReference {
        &self.service_content.profile_manager
    }

    pub(crate) fn placement_solver(&self) -> &ManagedObjectReference {
        &self.service_content.placement_solver
    }

    /// Issue one method call against `this` and decode its return value
    pub(crate) async fn invoke<M: Method>(
        &self,
        cancel: &CancellationToken,
        this: &ManagedObjectReference,
        request: &M,
    ) -> PbmResult<M::Response> {
        let call = MethodCall {
            method: M::NAME,
            namespace: self.namespace.clone(),
            this: this.clone(),
            body: methods::encode(request)?,
        };

        debug!("Invoking {} on {}", M::NAME, this);
        let raw = round_trip(self.transport.as_ref(), cancel, &call).await?;
        methods::decode::<M>(raw)
    }
}

/// Run one exchange, abandoning it if the token fires first
async fn round_trip(
    transport: &dyn Transport,
    cancel: &CancellationToken,
    call: &MethodCall,
) -> Result<serde_json::Value, TransportError> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!("{} cancelled", call.method);
            Err(TransportError::Cancelled)
        }
        result = transport.invoke(cancel, call) => result,
    }
}
