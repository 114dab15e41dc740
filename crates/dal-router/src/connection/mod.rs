//! Connection-string resolution
//!
//! - `registry`: the case-insensitive entry store
//! - `locator`: streaming reader for the external XML locator file
//! - `resolver`: lazy, lock-guarded lookups over the registry

mod registry;
pub mod locator;
mod resolver;

pub use registry::{ConnectionStringRegistry, RejectedEntry};
pub use resolver::ConnectionStringResolver;
