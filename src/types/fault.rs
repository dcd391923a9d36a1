// Copyright (c) 2025 - Cowboy AI, Inc.
//! Server fault payloads

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fault reported by the server, either for a whole call or for a single
/// item inside a result
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodFault {
    /// Server fault type name (e.g. "PbmFaultProfileStorageFault")
    pub fault_type: String,

    /// Localized human-readable message, when the server supplies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_message: Option<String>,
}

impl MethodFault {
    /// Create a fault with a message
    pub fn new(fault_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            fault_type: fault_type.into(),
            localized_message: Some(message.into()),
        }
    }
}

impl fmt::Display for MethodFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.localized_message {
            Some(msg) => write!(f, "{}: {}", self.fault_type, msg),
            None => write!(f, "{}", self.fault_type),
        }
    }
}
