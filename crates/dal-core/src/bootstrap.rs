//! Bootstrap registry handed to the routing components

use std::path::{Path, PathBuf};

use dal_types::DatabaseSet;
use tracing::info;

use crate::config::DalConfig;
use crate::registry::{ConnectionStringKeys, DatabaseSetRegistry};

/// Everything the router reads from configuration, frozen after construction
#[derive(Debug, Clone, Default)]
pub struct DalBootstrap {
    connection_string_keys: ConnectionStringKeys,
    connection_locator_path: Option<PathBuf>,
    database_sets: DatabaseSetRegistry,
}

impl DalBootstrap {
    pub fn new(
        connection_string_keys: ConnectionStringKeys,
        connection_locator_path: Option<PathBuf>,
        database_sets: DatabaseSetRegistry,
    ) -> Self {
        Self {
            connection_string_keys,
            connection_locator_path,
            database_sets,
        }
    }

    /// Build the registries from a loaded configuration
    pub fn from_config(config: &DalConfig) -> Self {
        let connection_string_keys = config
            .connection_strings
            .iter()
            .map(|c| (c.name.clone(), c.value.clone()))
            .collect::<ConnectionStringKeys>();

        let database_sets = config
            .database_sets
            .iter()
            .map(DatabaseSet::from)
            .collect::<DatabaseSetRegistry>();

        info!(
            connection_strings = connection_string_keys.len(),
            database_sets = database_sets.len(),
            locator = ?config.connection_locator_path,
            "DAL bootstrap loaded"
        );

        Self::new(
            connection_string_keys,
            config.connection_locator_path.clone(),
            database_sets,
        )
    }

    pub fn connection_string_keys(&self) -> &ConnectionStringKeys {
        &self.connection_string_keys
    }

    /// External connection locator file, if configured
    pub fn connection_locator_path(&self) -> Option<&Path> {
        self.connection_locator_path.as_deref()
    }

    pub fn database_sets(&self) -> &DatabaseSetRegistry {
        &self.database_sets
    }
}
