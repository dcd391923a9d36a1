// Copyright (c) 2025 - Cowboy AI, Inc.
//! Configuration for connecting to the PBM service

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::{PbmError, PbmResult};
use crate::transport::{ServiceEndpoint, PBM_NAMESPACE, PBM_PATH};

/// Configuration for a PBM connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PbmConfig {
    /// vCenter base URL (e.g., "https://vcenter.example.com")
    pub base_url: String,

    /// Path of the PBM endpoint
    #[serde(default = "default_endpoint_path")]
    pub endpoint_path: String,

    /// Service namespace
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Authenticated vCenter session cookie
    #[serde(default)]
    pub session_cookie: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Accept invalid TLS certificates
    #[serde(default)]
    pub insecure: bool,
}

fn default_endpoint_path() -> String {
    PBM_PATH.to_string()
}

fn default_namespace() -> String {
    PBM_NAMESPACE.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for PbmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost".to_string(),
            endpoint_path: default_endpoint_path(),
            namespace: default_namespace(),
            session_cookie: String::new(),
            timeout_secs: default_timeout(),
            insecure: false,
        }
    }
}

impl PbmConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `PBM_URL`, `PBM_SESSION`, `PBM_TIMEOUT_SECS` and `PBM_INSECURE`;
    /// unset variables keep their defaults.
    pub fn from_env() -> PbmResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> PbmResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("PBM_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(session) = lookup("PBM_SESSION") {
            config.session_cookie = session;
        }
        if let Some(timeout) = lookup("PBM_TIMEOUT_SECS") {
            config.timeout_secs = timeout.parse().map_err(|e| {
                PbmError::Configuration(format!("PBM_TIMEOUT_SECS {:?}: {}", timeout, e))
            })?;
        }
        if let Some(insecure) = lookup("PBM_INSECURE") {
            config.insecure = match insecure.to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                other => {
                    return Err(PbmError::Configuration(format!(
                        "PBM_INSECURE must be a boolean, got {:?}",
                        other
                    )))
                }
            };
        }

        Ok(config)
    }

    /// Endpoint the client binds to
    pub fn endpoint(&self) -> ServiceEndpoint {
        ServiceEndpoint::new(self.endpoint_path.clone(), self.namespace.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
