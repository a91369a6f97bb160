//! User Service Library
//!
//! Clean-architecture user management: a persistence port with in-memory and
//! SeaORM adapters, one use case per operation, and a controller that turns
//! outcomes into tagged responses. [`container::Container`] wires it together.

pub mod config;
pub mod container;
pub mod controller;
pub mod infra;
pub mod repository;
pub mod usecase;

use tracing::info;

use common::DatabaseConfig;

use crate::infra::Database;

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    action: MigrateAction,
    config: &DatabaseConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(config).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            for migration in db.migration_status().await? {
                let marker = if migration.applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, migration.name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}
