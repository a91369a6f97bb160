//! GetUser / GetUserByEmail - single user lookups.

use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{normalize_email, User};

use super::parse_user_id;
use crate::repository::UserRepository;

pub struct GetUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> AppResult<User> {
        let id = parse_user_id(id)?;
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }
}

pub struct GetUserByEmailUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetUserByEmailUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, email: &str) -> AppResult<User> {
        self.repo
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or_not_found()
    }
}
