//! User service configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

use common::DatabaseConfig;

/// Which repository adapter backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Map-backed store; data lives as long as the process
    #[default]
    Memory,
    /// Relational table through SeaORM
    Database,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            "database" | "db" | "postgres" | "sqlite" => Ok(StorageBackend::Database),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::Database => write!(f, "database"),
        }
    }
}

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// Repository adapter selection
    pub storage: StorageBackend,
    /// Connection settings, used when `storage` is `Database`
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let storage = match env::var("USER_STORAGE") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to in-memory storage", e);
                StorageBackend::Memory
            }),
            Err(_) => StorageBackend::default(),
        };

        Self {
            storage,
            database: DatabaseConfig::from_env(),
        }
    }
}
