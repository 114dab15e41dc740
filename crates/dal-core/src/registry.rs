//! Read-only registries built from bootstrap configuration

use std::collections::HashMap;

use dal_types::DatabaseSet;

/// Logical connection names with their literal values, in configuration order
#[derive(Debug, Clone, Default)]
pub struct ConnectionStringKeys {
    entries: Vec<(String, String)>,
}

impl ConnectionStringKeys {
    pub fn new() -> Self {
        Self { entries: vec![] }
    }

    /// Append a name/value pair. Duplicates are kept; consumers decide.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// All names in configuration order
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// First value registered under `name` (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.entries
            .iter()
            .find(|(n, _)| n.to_lowercase() == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for ConnectionStringKeys {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(n, v)| (n.into(), v.into())).collect(),
        }
    }
}

/// Logical database set name → physical topology
///
/// Built once and then shared read-only; it carries no lock of its own.
#[derive(Debug, Clone, Default)]
pub struct DatabaseSetRegistry {
    sets: HashMap<String, DatabaseSet>,
}

impl DatabaseSetRegistry {
    pub fn new() -> Self {
        Self { sets: HashMap::new() }
    }

    /// Register a set, replacing any set with the same name
    pub fn register(&mut self, set: DatabaseSet) {
        self.sets.insert(set.name.clone(), set);
    }

    /// Get a set by name (exact match)
    pub fn get(&self, name: &str) -> Option<&DatabaseSet> {
        self.sets.get(name)
    }

    /// Registered set names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.sets.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl FromIterator<DatabaseSet> for DatabaseSetRegistry {
    fn from_iter<I: IntoIterator<Item = DatabaseSet>>(iter: I) -> Self {
        let mut registry = Self::new();
        for set in iter {
            registry.register(set);
        }
        registry
    }
}
