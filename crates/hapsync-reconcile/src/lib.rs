//! Reconciliation of declared load-balancer objects against the versioned
//! configuration document.
//!
//! The Data Plane API's configuration is a single optimistically-versioned
//! document shared by every caller. A mutation is only safe as a full
//! sequence: read the current version, open a transaction against it, queue
//! the change, commit. When another party commits in between, the sequence
//! fails with a conflict and must be re-run from the version read.
//!
//! This crate provides:
//!
//! - [`RetryPolicy`] and [`run_versioned`]: the conflict-retry orchestrator
//!   that re-executes a whole mutation sequence on conflict, and only on
//!   conflict
//! - [`KindSpec`]: a per-kind descriptor so one generic [`Reconciler`]
//!   serves all five object kinds instead of five duplicated CRUD
//!   implementations
//! - [`Reconciler`]: Create/Read/Update/Delete orchestration returning
//!   observed state addressed by a durable [`ResourceId`]
//!
//! Retry on conflict applies uniformly to every kind's mutations.
//!
//! [`ResourceId`]: hapsync_core::ResourceId

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod kind;
pub mod kinds;
pub mod reconciler;
pub mod retry;

pub use error::{ReconcileError, Result};
pub use kind::{KindSpec, Scope};
pub use kinds::{BackendKind, BindKind, FrontendKind, ServerKind, ServerTemplateKind};
pub use reconciler::{Observed, Reconciler};
pub use retry::{run_versioned, Backoff, RetryPolicy};

/// Reconciler for backend pools.
pub type BackendReconciler = Reconciler<BackendKind>;
/// Reconciler for listening frontends.
pub type FrontendReconciler = Reconciler<FrontendKind>;
/// Reconciler for frontend binds.
pub type BindReconciler = Reconciler<BindKind>;
/// Reconciler for backend servers.
pub type ServerReconciler = Reconciler<ServerKind>;
/// Reconciler for backend server templates.
pub type ServerTemplateReconciler = Reconciler<ServerTemplateKind>;
