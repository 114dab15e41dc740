//! DAL Core - bootstrap configuration shared by the routing components
//!
//! This crate loads the DAL configuration and turns it into the read-only
//! registries the router consumes:
//!
//! - `ConnectionStringKeys`: logical connection name → literal connection string
//! - `DatabaseSetRegistry`: logical database set → physical databases
//! - the optional connection locator path (external XML file)

pub mod config;
pub mod error;
pub mod registry;
pub mod bootstrap;

pub use config::{DalConfig, ConnectionStringConfig, DatabaseConfig, DatabaseSetConfig};
pub use error::ConfigError;
pub use registry::{ConnectionStringKeys, DatabaseSetRegistry};
pub use bootstrap::DalBootstrap;
