//! Service container - the manually wired object graph.
//!
//! repository -> use cases -> controller. Swapping the repository rebuilds
//! everything downstream of it, so no component keeps a handle to the old one.
//!
//! A process-wide instance is available through [`global`]; binaries
//! [`install`] a configured container at startup and tests may swap the
//! repository with [`replace_user_repository`].

use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use common::AppResult;

use crate::config::{StorageBackend, UserServiceConfig};
use crate::controller::UserController;
use crate::infra::Database;
use crate::repository::{InMemoryUserStore, UserRepository, UserStore};
use crate::usecase::UserUseCases;

/// Concrete object graph for the user service
#[derive(Clone)]
pub struct Container {
    database: Option<Database>,
    use_cases: UserUseCases,
    user_controller: Arc<UserController>,
}

impl Container {
    /// Wire every component over the given repository
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        let use_cases = UserUseCases::new(user_repository);
        let user_controller = Arc::new(UserController::new(use_cases.clone()));

        Self {
            database: None,
            use_cases,
            user_controller,
        }
    }

    /// Container over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserStore::new()))
    }

    /// Container over the relational store behind `database`
    pub fn with_database(database: Database) -> Self {
        let mut container = Self::new(Arc::new(UserStore::new(database.get_connection())));
        container.database = Some(database);
        container
    }

    /// Build the container selected by configuration.
    ///
    /// The database backend connects and applies pending migrations first.
    pub async fn from_config(config: &UserServiceConfig) -> AppResult<Self> {
        tracing::info!(storage = %config.storage, "Building service container");
        match config.storage {
            StorageBackend::Memory => Ok(Self::in_memory()),
            StorageBackend::Database => {
                let database = Database::connect(&config.database).await?;
                Ok(Self::with_database(database))
            }
        }
    }

    /// Replace the repository and rebuild the use cases and controller.
    pub fn set_user_repository(&mut self, user_repository: Arc<dyn UserRepository>) {
        *self = Self::new(user_repository);
    }

    pub fn use_cases(&self) -> &UserUseCases {
        &self.use_cases
    }

    pub fn users(&self) -> Arc<UserController> {
        self.user_controller.clone()
    }

    /// Database handle, present only for the relational backend
    pub fn database(&self) -> Option<&Database> {
        self.database.as_ref()
    }
}

static GLOBAL: Lazy<RwLock<Arc<Container>>> =
    Lazy::new(|| RwLock::new(Arc::new(Container::in_memory())));

/// The process-wide container (in-memory until something is installed)
pub fn global() -> Arc<Container> {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Make `container` the process-wide instance
pub fn install(container: Container) -> Arc<Container> {
    let container = Arc::new(container);
    *GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = container.clone();
    container
}

/// Swap the process-wide repository, rebuilding the graph around it.
///
/// Callers still holding the previous `Arc<Container>` keep the old graph.
pub fn replace_user_repository(user_repository: Arc<dyn UserRepository>) -> Arc<Container> {
    install(Container::new(user_repository))
}
