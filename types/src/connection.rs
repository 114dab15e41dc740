//! Connection string entries

use serde::{Deserialize, Serialize};

/// One named connection string
///
/// Immutable once constructed. The default value is the empty entry, which
/// callers treat as "not configured".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionStringEntry {
    name: String,
    connection_string: String,
}

impl ConnectionStringEntry {
    pub fn new(name: impl Into<String>, connection_string: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            connection_string: connection_string.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    /// True when there is no connection string to use
    pub fn is_empty(&self) -> bool {
        self.connection_string.is_empty()
    }
}
