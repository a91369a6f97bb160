//! GetCurrentUser - resolve the user behind the caller's session.

use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::User;

use super::parse_user_id;
use crate::repository::UserRepository;

pub struct GetCurrentUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetCurrentUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// `session` is the user ID the caller is acting as, if any.
    pub async fn execute(&self, session: Option<&str>) -> AppResult<User> {
        let id = session
            .and_then(|raw| parse_user_id(raw).ok())
            .ok_or(AppError::Unauthorized)?;

        self.repo.find_by_id(id).await?.ok_or_not_found()
    }
}
