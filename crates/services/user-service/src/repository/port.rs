//! User repository port.

use async_trait::async_trait;

use common::AppResult;
use domain::{NewUser, User, UserChanges, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Entity name used in conflict errors for a duplicate email.
pub const EMAIL_TAKEN: &str = "User with this email";

/// User repository trait for dependency injection.
///
/// Lookups report a missing user as `None` (or `false` for `delete`) rather
/// than as an error. Every adapter must reject a second user with the same
/// email with `AppError::Conflict`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find user by (already normalized) email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Create a new user, assigning its ID and timestamps
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// Merge the given changes and refresh `updated_at`
    async fn update(&self, id: UserId, changes: UserChanges) -> AppResult<Option<User>>;

    /// Delete user by ID, returning whether a user was removed
    async fn delete(&self, id: UserId) -> AppResult<bool>;

    /// List users ordered by ID
    async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<User>>;

    /// Total number of users
    async fn count(&self) -> AppResult<u64>;
}
