//! Configuration module for the DAL routing layer

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use dal_types::{Database, DatabaseSet, DatabaseType, DatabaseWrapper};

use crate::error::ConfigError;

/// Environment variable naming a JSON configuration file
pub const CONFIG_PATH_ENV: &str = "DAL_CONFIG";

/// Environment variable overriding the connection locator path.
/// An empty value switches back to direct mode.
pub const CONNECTION_LOCATOR_ENV: &str = "DAL_CONNECTION_LOCATOR";

/// DAL configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DalConfig {
    /// Logical connection names and their literal connection strings
    #[serde(default)]
    pub connection_strings: Vec<ConnectionStringConfig>,

    /// External XML file holding the real connection strings.
    /// When set, `connection_strings` only names which keys to look up.
    #[serde(default)]
    pub connection_locator_path: Option<PathBuf>,

    /// Logical database sets
    #[serde(default)]
    pub database_sets: Vec<DatabaseSetConfig>,
}

/// One logical connection string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionStringConfig {
    pub name: String,

    #[serde(default)]
    pub value: String,
}

/// One logical database set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSetConfig {
    pub name: String,

    #[serde(default)]
    pub databases: Vec<DatabaseConfig>,
}

/// One physical database inside a set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub name: String,

    /// Logical connection-string key for this database
    pub connection_string: String,

    pub database_type: DatabaseType,

    /// Slave weight
    #[serde(default)]
    pub ratio: u32,
}

impl DalConfig {
    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Load configuration from environment variables
    ///
    /// Reads the file named by `DAL_CONFIG` if set, otherwise starts empty,
    /// then applies `DAL_CONNECTION_LOCATOR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };
        Ok(config.with_env_overrides())
    }

    /// Apply environment overrides on top of this configuration
    pub fn with_env_overrides(self) -> Self {
        self.with_locator_override(std::env::var(CONNECTION_LOCATOR_ENV).ok())
    }

    fn with_locator_override(mut self, value: Option<String>) -> Self {
        if let Some(path) = value {
            let path = path.trim();
            self.connection_locator_path = if path.is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }
        self
    }
}

impl From<&DatabaseSetConfig> for DatabaseSet {
    fn from(config: &DatabaseSetConfig) -> Self {
        config
            .databases
            .iter()
            .fold(DatabaseSet::new(config.name.clone()), |set, db| {
                set.with_wrapper(DatabaseWrapper {
                    database: Database::new(db.name.clone(), db.connection_string.clone()),
                    database_type: db.database_type,
                    ratio: db.ratio,
                })
            })
    }
}
