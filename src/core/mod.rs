//! Core components of the `sogou-p4p-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`P4pClient`] and its builder.
//! - The primary [`P4pError`] type.
//! - The host-keyed [`HostJar`] cookie store shared by both HTTP clients.

/// The main client (`P4pClient`), builder, and configuration.
pub mod client;
/// The host-keyed cookie store (`HostJar`).
pub mod cookies;
/// The primary error type (`P4pError`) for the crate.
pub mod error;

// convenient re-exports so most code can just `use crate::core::P4pClient`
pub use client::{P4pClient, P4pClientBuilder};
pub use cookies::HostJar;
pub use error::P4pError;
