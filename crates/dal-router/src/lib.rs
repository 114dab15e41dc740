//! DAL Router - statement routing for master/slave database sets
//!
//! Decides where a statement runs and how to reach it.
//!
//! # Architecture
//!
//! ```text
//! Statement
//!     │
//!     ▼
//! ┌─────────────────────────┐
//! │    ReplicaSelector      │  Decides: which physical database
//! │ (first + fallback chain)│
//! └───────────┬─────────────┘
//!             │
//!             ▼
//! ┌─────────────────────────┐
//! │ ConnectionStringResolver│  Decides: which connection string
//! │ (bootstrap or locator)  │
//! └─────────────────────────┘
//! ```
//!
//! The two components are independent; an execution pipeline calls one and
//! then the other before opening a connection.
//!
//! # Candidate ordering
//!
//! Slaves are ordered by descending ratio (stable on ties). The heaviest slave
//! is the first candidate, the remaining slaves follow, and the master is
//! always the last fallback. A set without slaves yields no candidates.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use dal_core::{DalBootstrap, DalConfig};
//! use dal_router::{ConnectionStringResolver, ReplicaSelector};
//! use dal_types::StatementContext;
//!
//! let bootstrap = Arc::new(DalBootstrap::from_config(&DalConfig::from_env()?));
//! let selector = ReplicaSelector::from_bootstrap(&bootstrap);
//! let resolver = ConnectionStringResolver::new(bootstrap);
//!
//! let candidates = selector.select_candidates(&StatementContext::new("orders"))?;
//! for db in candidates.candidates() {
//!     if let Some(entry) = resolver.resolve(&db.connection_string_name)? {
//!         // open a connection with entry.connection_string()
//!     }
//! }
//! ```

// Core modules
mod error;

// Strategy module (replica selection and the strategy traits)
mod strategy;

// Connection-string resolution
pub mod connection;

// Re-exports: Error types
pub use error::RouterError;

// Re-exports: Strategy traits and implementations
pub use strategy::{ConnectionStringSource, ReadWriteSplitting, ReplicaSelector};

// Re-exports: Connection strings
pub use connection::{ConnectionStringRegistry, ConnectionStringResolver, RejectedEntry};
