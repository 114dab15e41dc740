//! Connection string registry

use std::collections::HashMap;

use dal_types::ConnectionStringEntry;
use tracing::warn;

/// Why an entry was not added to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectedEntry {
    EmptyName,
    EmptyConnectionString,
    Duplicate,
}

impl std::fmt::Display for RejectedEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectedEntry::EmptyName => write!(f, "empty name"),
            RejectedEntry::EmptyConnectionString => write!(f, "empty connection string"),
            RejectedEntry::Duplicate => write!(f, "duplicate name"),
        }
    }
}

/// Ordered connection string entries, looked up case-insensitively
#[derive(Debug, Clone, Default)]
pub struct ConnectionStringRegistry {
    entries: Vec<ConnectionStringEntry>,
    /// lower-cased name → index into `entries`
    index: HashMap<String, usize>,
}

impl ConnectionStringRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from literal name/value pairs, skipping pairs that can't be added
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut registry = Self::new();
        for (name, value) in pairs {
            if let Err(reason) = registry.try_insert(ConnectionStringEntry::new(name, value)) {
                warn!(name, %reason, "Skipping connection string");
            }
        }
        registry
    }

    /// Add an entry unless its name is empty or taken, or it has no connection string
    pub fn try_insert(&mut self, entry: ConnectionStringEntry) -> Result<(), RejectedEntry> {
        if entry.name().is_empty() {
            return Err(RejectedEntry::EmptyName);
        }
        if entry.is_empty() {
            return Err(RejectedEntry::EmptyConnectionString);
        }

        let key = entry.name().to_lowercase();
        if self.index.contains_key(&key) {
            return Err(RejectedEntry::Duplicate);
        }

        self.index.insert(key, self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Look up an entry by name, ignoring case
    pub fn get(&self, name: &str) -> Option<&ConnectionStringEntry> {
        self.index
            .get(&name.to_lowercase())
            .map(|&idx| &self.entries[idx])
    }

    /// Entry names in insertion order
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
