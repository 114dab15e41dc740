//! Error types for the router module

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

/// Router error types
///
/// `Clone` so a failed one-time initialization can be reported to every
/// caller that follows.
#[derive(Debug, Clone, Error)]
pub enum RouterError {
    /// Lookup key was empty
    #[error("Connection string key can not be empty")]
    EmptyKey,

    /// Bootstrap configuration names no connection strings
    #[error("Missing connection strings in DAL configuration")]
    MissingConnectionStrings,

    /// A requested locator entry lacks a required attribute
    #[error(
        "Connection string '{entry}' configuration error, required attribute '{attribute}' is not found or its value is not valid"
    )]
    MissingAttribute {
        entry: String,
        attribute: &'static str,
    },

    /// Locator file could not be opened or read
    #[error("Failed to read connection locator {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// Locator file is not well-formed XML
    #[error("Malformed connection locator {}: {message}", path.display())]
    Xml { path: PathBuf, message: String },

    /// Statement targets a database set that is not registered
    #[error("Database set not found: {0}")]
    DatabaseSetNotFound(String),

    /// Database set does not have exactly one master
    #[error("Database set '{database_set}' must have exactly one master, found {count}")]
    InvalidMasterCount { database_set: String, count: usize },
}
