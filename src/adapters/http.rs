// Copyright (c) 2025 - Cowboy AI, Inc.

//! HTTP Transport Adapter
//!
//! Implements [`Transport`] over HTTP with `reqwest`, reusing an already
//! authenticated vCenter session cookie.
//!
//! # Request Mapping
//!
//! ```text
//! MethodCall { method, this, body }
//!     = POST {base_url}{endpoint_path}/{method}
//!       X-Pbm-Namespace: {namespace}
//!       X-Request-Id: <uuid v7>
//!       { "_this": this, ...body }
//! ```
//!
//! # Response Mapping
//!
//! - 2xx: JSON body returned as-is (`{"returnval": ...}`)
//! - 5xx with `{ "faultType", "localizedMessage" }`: [`TransportError::Fault`]
//! - any other status: [`TransportError::Http`]
//!
//! # Example
//!
//! ```rust,no_run
//! use pbm_client::adapters::HttpTransport;
//! use pbm_client::{Client, PbmConfig};
//! use std::sync::Arc;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PbmConfig::from_env()?;
//!     let transport = HttpTransport::new(&config, config.endpoint())?;
//!
//!     let cancel = CancellationToken::new();
//!     let client = Client::with_transport(&cancel, Arc::new(transport)).await?;
//!     println!("{}", client.service_content().about_info.version);
//!
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::{Client as HttpClient, StatusCode};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::PbmConfig;
use crate::errors::{PbmError, PbmResult, TransportError};
use crate::transport::{MethodCall, ServiceEndpoint, Session, Transport};
use crate::types::MethodFault;

/// Name of the vCenter session cookie
const SESSION_COOKIE: &str = "vmware_soap_session";

/// Transport bound to one service endpoint
#[derive(Clone)]
pub struct HttpTransport {
    client: HttpClient,
    base_url: String,
    endpoint: ServiceEndpoint,
}

impl HttpTransport {
    /// Build a transport for `endpoint` from connection settings
    pub fn new(config: &PbmConfig, endpoint: ServiceEndpoint) -> PbmResult<Self> {
        let client = build_http_client(config)?;
        Ok(Self::with_client(client, config.base_url.clone(), endpoint))
    }

    fn with_client(client: HttpClient, base_url: String, endpoint: ServiceEndpoint) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoint,
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}{}/{}", self.base_url, self.endpoint.path, method)
    }
}

/// Build the shared `reqwest` client carrying the session cookie
fn build_http_client(config: &PbmConfig) -> PbmResult<HttpClient> {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    if !config.session_cookie.is_empty() {
        headers.insert(
            reqwest::header::COOKIE,
            HeaderValue::from_str(&format!("{}={}", SESSION_COOKIE, config.session_cookie))
                .map_err(|e| PbmError::Configuration(format!("Invalid session cookie: {}", e)))?,
        );
    }

    HttpClient::builder()
        .timeout(config.timeout())
        .danger_accept_invalid_certs(config.insecure)
        .default_headers(headers)
        .build()
        .map_err(|e| PbmError::Configuration(format!("Failed to create HTTP client: {}", e)))
}

fn request_body(call: &MethodCall) -> serde_json::Value {
    let mut body = match &call.body {
        serde_json::Value::Object(map) => map.clone(),
        _ => serde_json::Map::new(),
    };
    body.insert(
        "_this".to_string(),
        serde_json::json!({ "type": call.this.kind, "value": call.this.value }),
    );
    serde_json::Value::Object(body)
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout(e.to_string())
    } else {
        TransportError::Io(e.to_string())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn invoke(
        &self,
        cancel: &CancellationToken,
        call: &MethodCall,
    ) -> Result<serde_json::Value, TransportError> {
        let request_id = Uuid::now_v7();
        let url = self.method_url(call.method);
        debug!("POST {} ({})", url, request_id);

        let send = self
            .client
            .post(&url)
            .header("X-Pbm-Namespace", &call.namespace)
            .header("X-Request-Id", request_id.to_string())
            .json(&request_body(call))
            .send();

        let response = tokio::select! {
            _ = cancel.cancelled() => return Err(TransportError::Cancelled),
            response = send => response.map_err(map_reqwest_error)?,
        };

        let status = response.status();
        if status.is_success() {
            if status == StatusCode::NO_CONTENT {
                return Ok(serde_json::Value::Null);
            }
            return response.json().await.map_err(map_reqwest_error);
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        if status.is_server_error() {
            if let Ok(fault) = serde_json::from_str::<MethodFault>(&body) {
                warn!("{} faulted ({}): {}", call.method, request_id, fault);
                return Err(TransportError::Fault(fault));
            }
        }

        warn!("{} returned {} ({})", call.method, status, request_id);
        Err(TransportError::Http {
            status: status.as_u16(),
            body,
        })
    }
}

/// An authenticated vCenter session reachable over HTTP
#[derive(Clone)]
pub struct HttpSession {
    client: HttpClient,
    base_url: String,
}

impl HttpSession {
    pub fn new(config: &PbmConfig) -> PbmResult<Self> {
        Ok(Self {
            client: build_http_client(config)?,
            base_url: config.base_url.clone(),
        })
    }
}

impl Session for HttpSession {
    fn service_client(&self, endpoint: &ServiceEndpoint) -> Arc<dyn Transport> {
        Arc::new(HttpTransport::with_client(
            self.client.clone(),
            self.base_url.clone(),
            endpoint.clone(),
        ))
    }
}
