//! Client for the storage policy-based management (PBM) service
//!
//! This crate bootstraps a connection to the PBM endpoint of a vCenter
//! session, runs profile queries and CRUD operations, checks datastore
//! placement compatibility and resolves profile names to ids.

pub mod adapters;
pub mod client;
pub mod config;
pub mod errors;
pub mod methods;
pub mod placement;
pub mod profiles;
pub mod resolver;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use client::Client;
pub use config::PbmConfig;
pub use errors::{PbmError, PbmResult, TransportError};
pub use transport::{MethodCall, ServiceEndpoint, Session, Transport};
pub use types::{
    CompatibilityResult, ManagedObjectReference, PlacementHub, PlacementRequirement, Profile,
    ProfileCategory, ProfileId, ProfileResourceType, ServerObjectRef, ServiceContent,
};
