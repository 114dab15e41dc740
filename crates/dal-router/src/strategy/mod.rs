//! Routing Strategies
//!
//! Two independent questions are answered before a connection is opened:
//!
//! ```text
//! Statement
//!     │
//!     ▼
//! ┌─────────────────────────┐
//! │   ReadWriteSplitting    │  (ReplicaSelector)
//! │   (Which database?)     │
//! └───────────┬─────────────┘
//!             │ Database.connection_string_name
//!             ▼
//! ┌─────────────────────────┐
//! │ ConnectionStringSource  │  (ConnectionStringResolver)
//! │ (What connection string?)│
//! └─────────────────────────┘
//! ```

mod replica;

pub use replica::ReplicaSelector;

use dal_types::{ConnectionStringEntry, OperationalDatabases, Statement};

use crate::error::RouterError;

/// Trait for replica selection strategies
pub trait ReadWriteSplitting: Send + Sync {
    /// Order the physical databases a statement may run on
    fn select_candidates(&self, statement: &dyn Statement) -> Result<OperationalDatabases, RouterError>;

    /// Strategy name for logging
    fn name(&self) -> &'static str;
}

/// Trait for connection-string lookup strategies
pub trait ConnectionStringSource: Send + Sync {
    /// Look up a logical connection name. `Ok(None)` is a routine miss.
    fn resolve(&self, key: &str) -> Result<Option<ConnectionStringEntry>, RouterError>;

    /// Strategy name for logging
    fn name(&self) -> &'static str;
}
