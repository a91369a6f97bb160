//! DeleteUser - hard delete by ID.

use std::sync::Arc;

use common::{AppError, AppResult};
use domain::UserId;

use super::parse_user_id;
use crate::repository::UserRepository;

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Delete the user, returning the ID that was removed.
    pub async fn execute(&self, id: &str) -> AppResult<UserId> {
        let id = parse_user_id(id)?;
        if self.repo.delete(id).await? {
            Ok(id)
        } else {
            Err(AppError::NotFound)
        }
    }
}
