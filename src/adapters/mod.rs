// Copyright (c) 2025 - Cowboy AI, Inc.

//! Transport adapter implementations
//!
//! Concrete implementations of the [`Transport`](crate::transport::Transport)
//! and [`Session`](crate::transport::Session) traits.

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::{HttpSession, HttpTransport};
