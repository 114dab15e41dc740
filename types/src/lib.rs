//! DAL Types - shared data model for the routing layer
//!
//! Types here are plain data with no routing behaviour:
//!
//! - `Database`, `DatabaseType`, `DatabaseWrapper`, `DatabaseSet`: the physical
//!   topology registered under a logical database set
//! - `OperationalDatabases`: the replica selector's candidate chain
//! - `ConnectionStringEntry`: one resolved connection string
//! - `Statement`: the only view of a query the router needs

// ========== Topology ==========
pub mod database;

// ========== Connection strings ==========
pub mod connection;

// ========== Statements ==========
pub mod statement;

pub use database::{Database, DatabaseSet, DatabaseType, DatabaseWrapper, OperationalDatabases};
pub use connection::ConnectionStringEntry;
pub use statement::{Statement, StatementContext};
