//! ListUsers - one page of users plus the total count.

use std::sync::Arc;

use common::{AppResult, ListParams, Paginated};
use domain::User;

use crate::repository::UserRepository;

pub struct ListUsersUseCase {
    repo: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, params: ListParams) -> AppResult<Paginated<User>> {
        let (users, total) = tokio::try_join!(
            self.repo.list(params.limit(), params.offset()),
            self.repo.count(),
        )?;
        Ok(Paginated::new(users, &params, total))
    }
}
