//! Map-backed user repository for development and tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use common::{AppError, AppResult};
use domain::{NewUser, User, UserChanges, UserId};

use super::port::{UserRepository, EMAIL_TAKEN};

#[derive(Default)]
struct MemoryState {
    users: BTreeMap<UserId, User>,
    last_id: UserId,
}

impl MemoryState {
    fn email_taken_by_other(&self, email: &str, id: Option<UserId>) -> bool {
        self.users
            .values()
            .any(|user| user.email == email && Some(user.id) != id)
    }
}

/// In-memory implementation of UserRepository.
///
/// IDs start at 1 and are never reused, even after a delete.
#[derive(Default)]
pub struct InMemoryUserStore {
    state: RwLock<MemoryState>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let mut state = self.state.write().await;
        if state.email_taken_by_other(new_user.email(), None) {
            return Err(AppError::conflict(EMAIL_TAKEN));
        }

        state.last_id += 1;
        let user = User::from_new(state.last_id, new_user, Utc::now());
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> AppResult<Option<User>> {
        let mut state = self.state.write().await;
        if !state.users.contains_key(&id) {
            return Ok(None);
        }
        if let Some(email) = changes.email.as_deref() {
            if state.email_taken_by_other(email, Some(id)) {
                return Err(AppError::conflict(EMAIL_TAKEN));
            }
        }

        Ok(state.users.get_mut(&id).map(|user| {
            user.apply(changes, Utc::now());
            user.clone()
        }))
    }

    async fn delete(&self, id: UserId) -> AppResult<bool> {
        let mut state = self.state.write().await;
        Ok(state.users.remove(&id).is_some())
    }

    async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<User>> {
        let state = self.state.read().await;
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(state.users.values().skip(skip).take(take).cloned().collect())
    }

    async fn count(&self) -> AppResult<u64> {
        let state = self.state.read().await;
        Ok(state.users.len() as u64)
    }
}
