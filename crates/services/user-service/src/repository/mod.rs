//! Repository layer - the user persistence port and its adapters.
//!
//! - [`UserRepository`]: the port the use cases depend on
//! - [`InMemoryUserStore`]: map-backed adapter for development and tests
//! - [`UserStore`]: SeaORM adapter over the relational `users` table

pub mod entities;
mod memory;
mod port;
mod user_repository;

pub use memory::InMemoryUserStore;
pub use port::{UserRepository, EMAIL_TAKEN};
pub use user_repository::UserStore;

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use port::MockUserRepository;
