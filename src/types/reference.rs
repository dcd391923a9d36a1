// Copyright (c) 2025 - Cowboy AI, Inc.
//! Server Object References
//!
//! Two kinds of reference cross the wire:
//!
//! - [`ManagedObjectReference`]: a (type, value) handle to a managed object,
//!   used for the PBM managers themselves and for caller-supplied
//!   datastores.
//! - [`ServerObjectRef`]: the subject entity whose placement or association
//!   is being queried (a VM, a virtual disk, a datastore, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a server-side managed object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManagedObjectReference {
    /// Managed object type (e.g. "Datastore", "PbmProfileProfileManager")
    #[serde(rename = "type")]
    pub kind: String,

    /// Server-assigned value (e.g. "datastore-12")
    pub value: String,
}

impl ManagedObjectReference {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Reference to a datastore by its value
    pub fn datastore(value: impl Into<String>) -> Self {
        Self::new("Datastore", value)
    }

    /// Whether either half of the reference is missing
    pub fn is_empty(&self) -> bool {
        self.kind.is_empty() || self.value.is_empty()
    }
}

impl fmt::Display for ManagedObjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}

/// Object type of a [`ServerObjectRef`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServerObjectType {
    #[serde(rename = "virtualMachine")]
    VirtualMachine,
    #[serde(rename = "virtualMachineAndDisks")]
    VirtualMachineAndDisks,
    #[serde(rename = "virtualDiskId")]
    VirtualDiskId,
    #[serde(rename = "virtualDiskUUID")]
    VirtualDiskUuid,
    #[serde(rename = "datastore")]
    Datastore,
    #[serde(rename = "vsanObjectId")]
    VsanObjectId,
    #[serde(rename = "fileShareId")]
    FileShareId,
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl ServerObjectType {
    /// Wire name of the object type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VirtualMachine => "virtualMachine",
            Self::VirtualMachineAndDisks => "virtualMachineAndDisks",
            Self::VirtualDiskId => "virtualDiskId",
            Self::VirtualDiskUuid => "virtualDiskUUID",
            Self::Datastore => "datastore",
            Self::VsanObjectId => "vsanObjectId",
            Self::FileShareId => "fileShareId",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a wire name; unrecognized names map to `Unknown`
    pub fn parse(s: &str) -> Self {
        match s {
            "virtualMachine" => Self::VirtualMachine,
            "virtualMachineAndDisks" => Self::VirtualMachineAndDisks,
            "virtualDiskId" => Self::VirtualDiskId,
            "virtualDiskUUID" => Self::VirtualDiskUuid,
            "datastore" => Self::Datastore,
            "vsanObjectId" => Self::VsanObjectId,
            "fileShareId" => Self::FileShareId,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ServerObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ServerObjectType {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Subject entity of a placement check or association query
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerObjectRef {
    pub object_type: ServerObjectType,

    /// Object key, e.g. "vm-42" or "vm-42:2000" for a disk
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_uuid: Option<String>,
}

impl ServerObjectRef {
    pub fn new(object_type: ServerObjectType, key: impl Into<String>) -> Self {
        Self {
            object_type,
            key: key.into(),
            server_uuid: None,
        }
    }

    /// Scope the reference to a specific vCenter instance
    pub fn with_server_uuid(mut self, server_uuid: impl Into<String>) -> Self {
        self.server_uuid = Some(server_uuid.into());
        self
    }
}
