//! Connection pool for the relational user store.

use std::collections::HashSet;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr,
    Statement,
};
use sea_orm_migration::MigratorTrait;

use common::DatabaseConfig;

use super::migrations::Migrator;

/// Applied state of one schema migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationStatus {
    pub name: String,
    pub applied: bool,
}

/// Attach user-store context to a database failure.
fn context(what: &str, err: DbErr) -> DbErr {
    DbErr::Custom(format!("user store {what}: {err}"))
}

/// Pooled connection to the users database.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    async fn open(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options)
            .await
            .map_err(|e| context("connection failed", e))?;
        tracing::debug!(?config, "User store connected");
        Ok(Self { connection })
    }

    /// Connect and bring the `users` schema up to date.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = Self::open(config).await?;
        db.run_migrations().await?;
        tracing::info!("User store ready, migrations applied");
        Ok(db)
    }

    /// Connect without touching the schema (migrate CLI).
    pub async fn connect_without_migrations(config: &DatabaseConfig) -> Result<Self, DbErr> {
        Self::open(config).await
    }

    /// Handle for repositories; clones share the pool.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None)
            .await
            .map_err(|e| context("migration failed", e))
    }

    /// Roll back the most recent migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1))
            .await
            .map_err(|e| context("rollback failed", e))
    }

    /// Every known migration, in order, with whether it has been applied.
    ///
    /// A database that was never migrated reports everything as pending.
    pub async fn migration_status(&self) -> Result<Vec<MigrationStatus>, DbErr> {
        let applied: HashSet<String> = match Migrator::get_migration_models(&self.connection).await {
            Ok(models) => models.into_iter().map(|m| m.version).collect(),
            Err(e) => {
                tracing::debug!(error = %e, "No migration history yet");
                HashSet::new()
            }
        };

        Ok(Migrator::migrations()
            .iter()
            .map(|m| MigrationStatus {
                name: m.name().to_string(),
                applied: applied.contains(m.name()),
            })
            .collect())
    }

    /// Drop every table and re-apply all migrations.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection)
            .await
            .map_err(|e| context("reset failed", e))
    }

    /// Round-trip a trivial query for health checks.
    pub async fn ping(&self) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();
        self.connection
            .execute(Statement::from_string(backend, "SELECT 1".to_string()))
            .await
            .map_err(|e| context("ping failed", e))?;
        Ok(())
    }
}
