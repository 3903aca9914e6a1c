//! Typed client for the HAProxy Data Plane API.
//!
//! The Data Plane API exposes the whole HAProxy configuration as a single
//! versioned document. Every mutation must be queued under a short-lived
//! transaction opened against the current document version and then
//! committed; a commit advances the version by one, and a transaction opened
//! against a stale version is rejected with a conflict.
//!
//! This crate covers the wire layer only:
//!
//! - [`ClientConfig`]: connection parameters with environment defaults
//! - [`DataplaneClient`]: authenticated send/decode primitive plus one typed
//!   request builder per object kind and operation
//! - [`Transaction`] endpoints and the configuration version reader
//!
//! Conflict retry and per-kind reconciliation live in `hapsync-reconcile`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod backend;
mod bind;
mod client;
mod config;
mod configuration;
mod error;
mod frontend;
mod models;
mod resolver;
mod server;
mod server_template;
mod transaction;

pub use client::DataplaneClient;
pub use config::ClientConfig;
pub use configuration::Configuration;
pub use error::{ClientError, Result};
pub use models::{Backend, Balance, Bind, Frontend, Resolver, Server, ServerTemplate};
pub use transaction::Transaction;
