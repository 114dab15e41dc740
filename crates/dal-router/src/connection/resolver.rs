//! Connection string resolver
//!
//! The registry is built on the first lookup and never rebuilt. Without a
//! locator path it is copied from the bootstrap pairs; with one, the locator
//! file is parsed under the write lock. Lookups hold the read lock for a
//! single map access.

use std::sync::Arc;

use dal_core::DalBootstrap;
use dal_types::ConnectionStringEntry;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use tracing::{info, trace};

use crate::error::RouterError;
use crate::strategy::ConnectionStringSource;
use super::{locator, ConnectionStringRegistry};

/// Resolves logical connection names to connection strings
pub struct ConnectionStringResolver {
    bootstrap: Arc<DalBootstrap>,
    registry: RwLock<ConnectionStringRegistry>,
    /// Outcome of the one-time build, replayed to every caller
    initialized: OnceCell<Result<(), RouterError>>,
}

impl ConnectionStringResolver {
    pub fn new(bootstrap: Arc<DalBootstrap>) -> Self {
        Self {
            bootstrap,
            registry: RwLock::new(ConnectionStringRegistry::new()),
            initialized: OnceCell::new(),
        }
    }

    /// Resolve a logical name. A name that is not configured is `Ok(None)`.
    pub fn resolve(&self, key: &str) -> Result<Option<ConnectionStringEntry>, RouterError> {
        if key.is_empty() {
            return Err(RouterError::EmptyKey);
        }
        self.ensure_initialized()?;

        let entry = self.registry.read().get(key).cloned();
        trace!(key, found = entry.is_some(), "Connection string lookup");
        Ok(entry)
    }

    /// Resolve a logical name, returning the empty entry when it is not configured
    pub fn resolve_or_empty(&self, key: &str) -> Result<ConnectionStringEntry, RouterError> {
        Ok(self.resolve(key)?.unwrap_or_default())
    }

    /// Names held by the registry, in registration order
    pub fn registered_names(&self) -> Result<Vec<String>, RouterError> {
        self.ensure_initialized()?;
        Ok(self.registry.read().names())
    }

    fn ensure_initialized(&self) -> Result<(), RouterError> {
        self.initialized.get_or_init(|| self.initialize()).clone()
    }

    fn initialize(&self) -> Result<(), RouterError> {
        let keys = self.bootstrap.connection_string_keys();
        if keys.is_empty() {
            return Err(RouterError::MissingConnectionStrings);
        }

        match self.bootstrap.connection_locator_path() {
            None => {
                let registry = ConnectionStringRegistry::from_pairs(keys.iter());
                info!(entries = registry.len(), "Connection strings loaded from bootstrap");
                *self.registry.write() = registry;
            }
            Some(path) => {
                let mut registry = self.registry.write();
                *registry = locator::load_connection_strings(path, &keys.names())?;
                info!(
                    entries = registry.len(),
                    locator = %path.display(),
                    "Connection strings loaded from locator"
                );
            }
        }
        Ok(())
    }
}

impl ConnectionStringSource for ConnectionStringResolver {
    fn resolve(&self, key: &str) -> Result<Option<ConnectionStringEntry>, RouterError> {
        ConnectionStringResolver::resolve(self, key)
    }

    fn name(&self) -> &'static str {
        "Default"
    }
}
