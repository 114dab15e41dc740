//! Physical database topology
//!
//! A logical database set groups one master with zero or more slaves.
//! Slaves carry a ratio, a relative weight used to order read candidates.

use serde::{Deserialize, Serialize};

/// Role of a physical database inside its set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    /// Primary, read-write
    Master,
    /// Replica, read-only
    Slave,
}

impl std::fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseType::Master => write!(f, "master"),
            DatabaseType::Slave => write!(f, "slave"),
        }
    }
}

/// Handle to one physical database
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Database {
    /// Physical database name (unique within a set)
    pub name: String,

    /// Logical connection-string key used to reach this database
    pub connection_string_name: String,
}

impl Database {
    pub fn new(name: impl Into<String>, connection_string_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            connection_string_name: connection_string_name.into(),
        }
    }
}

/// A physical database registered under a logical set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseWrapper {
    pub database: Database,
    pub database_type: DatabaseType,

    /// Selection weight among slaves (higher = preferred). Ignored for master.
    pub ratio: u32,
}

impl DatabaseWrapper {
    /// Create a master wrapper
    pub fn master(database: Database) -> Self {
        Self {
            database,
            database_type: DatabaseType::Master,
            ratio: 0,
        }
    }

    /// Create a slave wrapper with the given ratio
    pub fn slave(database: Database, ratio: u32) -> Self {
        Self {
            database,
            database_type: DatabaseType::Slave,
            ratio,
        }
    }

    pub fn is_master(&self) -> bool {
        self.database_type == DatabaseType::Master
    }
}

/// Named, ordered group of physical databases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSet {
    pub name: String,

    /// Wrappers in registration order
    pub wrappers: Vec<DatabaseWrapper>,
}

impl DatabaseSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wrappers: vec![],
        }
    }

    /// Append a wrapper, keeping registration order
    pub fn with_wrapper(mut self, wrapper: DatabaseWrapper) -> Self {
        self.wrappers.push(wrapper);
        self
    }

    pub fn masters(&self) -> impl Iterator<Item = &DatabaseWrapper> {
        self.wrappers.iter().filter(|w| w.database_type == DatabaseType::Master)
    }

    pub fn slaves(&self) -> impl Iterator<Item = &DatabaseWrapper> {
        self.wrappers.iter().filter(|w| w.database_type == DatabaseType::Slave)
    }
}

/// Candidate chain produced by replica selection
///
/// `first_candidate` is the preferred target; `other_candidates` is tried in
/// order when it is unusable and ends with the master. Both are empty when the
/// set has no slaves, in which case the caller talks to the master directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationalDatabases {
    pub first_candidate: Option<Database>,
    pub other_candidates: Vec<Database>,
}

impl OperationalDatabases {
    /// True when no candidate was produced (no slaves in the set)
    pub fn is_empty(&self) -> bool {
        self.first_candidate.is_none() && self.other_candidates.is_empty()
    }

    /// All candidates in try order: first, then the fallback chain
    pub fn candidates(&self) -> impl Iterator<Item = &Database> {
        self.first_candidate.iter().chain(self.other_candidates.iter())
    }
}
