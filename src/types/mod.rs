// Copyright (c) 2025 - Cowboy AI, Inc.
//! PBM Data Model
//!
//! Value types exchanged with the policy-based management service. All of
//! them are ephemeral: they are built for a single call, sent, and dropped.
//! The only state a [`Client`](crate::client::Client) keeps is its
//! [`ServiceContent`].
//!
//! # Type Map
//!
//! ```text
//! ManagedObjectReference ──> PlacementHub ──> CompatibilityResult
//!                                                  │
//! ProfileId ──> PlacementRequirement ──────────────┘
//!
//! ProfileId ──> Profile (CapabilityProfile | DefaultProfile)
//! ```

pub mod fault;
pub mod placement;
pub mod profile;
pub mod reference;
pub mod service_content;

pub use fault::MethodFault;
pub use placement::{CompatibilityResult, PlacementHub, PlacementRequirement};
pub use profile::{
    CapabilityConstraints, CapabilityInstance, CapabilityMetadataId, CapabilityProfile,
    CapabilityProfileCreateSpec, CapabilityProfileUpdateSpec, ConstraintInstance, DefaultProfile,
    Profile, ProfileBase, ProfileCategory, ProfileId, ProfileOperationOutcome,
    ProfileResourceType, PropertyInstance, QueryProfileResult, SubProfile,
};
pub use reference::{ManagedObjectReference, ServerObjectRef, ServerObjectType};
pub use service_content::{AboutInfo, ServiceContent};
