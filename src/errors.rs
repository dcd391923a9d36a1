// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for PBM client operations
//!
//! Two layers are kept apart:
//!
//! - [`TransportError`]: the round trip itself failed (cancelled, timed out,
//!   HTTP failure, server fault). These are produced by a
//!   [`Transport`](crate::transport::Transport) and surfaced unchanged.
//! - [`PbmError`]: everything an operation on the
//!   [`Client`](crate::client::Client) can fail with.
//!
//! Per-item failures inside a successful response (a hub that does not
//! satisfy a policy, a profile that could not be deleted) are not errors at
//! all. They live on the result types as data.

use thiserror::Error;

use crate::types::MethodFault;

/// Errors raised below the application layer by a transport
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The cancellation token fired before the exchange completed
    #[error("request cancelled")]
    Cancelled,

    /// The exchange exceeded the transport deadline
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Non-success HTTP status without a decodable fault
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Server-side fault returned for the whole call
    #[error("server fault: {0}")]
    Fault(MethodFault),

    /// Connection or I/O level failure
    #[error("transport I/O error: {0}")]
    Io(String),
}

/// Errors that can occur in PBM client operations
#[derive(Debug, Error)]
pub enum PbmError {
    /// Bootstrap against the policy endpoint failed
    #[error("PBM connection error: {reason}")]
    Connection {
        reason: String,
        #[source]
        source: Option<TransportError>,
    },

    /// A round trip failed in the transport
    #[error("PBM transport error: {0}")]
    Transport(#[from] TransportError),

    /// Named lookup completed without a match
    #[error("No PBM profile found with name: {name:?}")]
    NotFound { name: String },

    /// Request body could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Response body could not be decoded
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl PbmError {
    /// Bootstrap failure caused by a failed round trip
    pub fn connection(reason: impl Into<String>, source: TransportError) -> Self {
        PbmError::Connection {
            reason: reason.into(),
            source: Some(source),
        }
    }

    /// Bootstrap failure caused by unusable service content
    pub fn unusable_content(reason: impl Into<String>) -> Self {
        PbmError::Connection {
            reason: reason.into(),
            source: None,
        }
    }

    /// Whether this error is a cancelled round trip
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            PbmError::Transport(TransportError::Cancelled)
                | PbmError::Connection {
                    source: Some(TransportError::Cancelled),
                    ..
                }
        )
    }
}

/// Result type for PBM client operations
pub type PbmResult<T> = Result<T, PbmError>;
