//! Core types and utilities for hapsync.
//!
//! This crate provides the foundational types used throughout the hapsync
//! toolkit:
//!
//! - **Resource identifiers**: The durable `parent/leaf` identity handed to
//!   external callers for every managed load-balancer object
//! - **Error types**: Identifier parse errors shared across crates
//!
//! # Example
//!
//! ```
//! use hapsync_core::ResourceId;
//!
//! // Encode the identity of a root-scoped backend
//! let id = ResourceId::root("app-backend");
//! assert_eq!(id.to_string(), "root/app-backend");
//!
//! // Parse an identity back into its parts
//! let id = ResourceId::parse("front-http/bd1").unwrap();
//! assert_eq!(id.parent(), "front-http");
//! assert_eq!(id.leaf(), "bd1");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ids;

pub use ids::{IdError, ResourceId, ROOT_PARENT};
