//! Wire representations of the managed object kinds.
//!
//! Field sets mirror what the Data Plane API stores per kind. Parent names
//! are deliberately absent: nested kinds (binds, servers, server templates)
//! are addressed by query parameters, and the API never echoes the parent in
//! the object body.

use serde::{Deserialize, Serialize};

/// Response envelope for single-object and list reads.
///
/// Every read carries the current document version in `_version`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Versioned<T> {
    #[serde(rename = "_version", default)]
    #[allow(dead_code)]
    pub(crate) version: i64,
    pub(crate) data: T,
}

/// Load-balancing algorithm selection for a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Algorithm name (e.g. "roundrobin", "leastconn").
    pub algorithm: String,
}

/// A backend pool. Root-scoped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backend {
    /// Unique backend name. Immutable for the object's lifetime; a rename is
    /// destroy-and-recreate.
    pub name: String,
    /// Protocol mode ("http" or "tcp").
    #[serde(default)]
    pub mode: String,
    /// Load-balancing algorithm.
    pub balance: Balance,
}

/// A listening frontend. Root-scoped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontend {
    /// Unique frontend name.
    pub name: String,
    /// Protocol mode ("http" or "tcp").
    #[serde(default)]
    pub mode: String,
    /// Maximum concurrent connections.
    #[serde(default)]
    pub maxconn: i64,
    /// Backend to route to when no rule matches.
    #[serde(default)]
    pub default_backend: String,
    /// HTTP connection reuse mode.
    #[serde(default)]
    pub http_connection_mode: String,
}

/// A bind address. Nested under a frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bind {
    /// Bind name, unique within its frontend.
    pub name: String,
    /// Listen address.
    #[serde(default)]
    pub address: String,
    /// Listen port.
    #[serde(default)]
    pub port: i64,
}

/// A pool member. Nested under a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Server name, unique within its backend.
    pub name: String,
    /// Server address.
    #[serde(default)]
    pub address: String,
    /// Server port.
    #[serde(default)]
    pub port: i64,
    /// Health-check toggle ("enabled" or "disabled").
    #[serde(default)]
    pub check: String,
}

/// A server template for DNS-discovered pool members. Nested under a backend.
///
/// Templates have no name of their own; the prefix acts as the leaf identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerTemplate {
    /// Name prefix for the generated servers.
    pub prefix: String,
    /// FQDN to resolve members from.
    #[serde(default)]
    pub fqdn: String,
    /// Number of servers, or an inclusive range ("1-3").
    #[serde(default)]
    pub num_or_range: String,
    /// Port for the generated servers.
    #[serde(default)]
    pub port: i64,
    /// Health-check toggle.
    #[serde(default)]
    pub check: String,
    /// Resolvers section used for discovery.
    #[serde(default)]
    pub resolvers: String,
}

/// A DNS resolvers section. Read-only at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolver {
    /// Resolvers section name.
    pub name: String,
}
