//! CreateUser - validate, enforce email uniqueness, persist.

use std::sync::Arc;

use serde::Deserialize;
use validator::Validate;

use common::{AppError, AppResult};
use domain::{NewUser, User};

use super::validation_error;
use crate::repository::{UserRepository, EMAIL_TAKEN};

/// Input accepted by CreateUser
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserInput {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
}

impl CreateUserInput {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }

    fn trimmed(&self) -> Self {
        Self::new(self.email.trim(), self.name.trim())
    }
}

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Create a user with a lowercased email and trimmed name.
    ///
    /// The uniqueness check and the insert are not atomic; the repository's
    /// own uniqueness enforcement catches a concurrent duplicate.
    pub async fn execute(&self, input: CreateUserInput) -> AppResult<User> {
        let input = input.trimmed();
        input.validate().map_err(|e| validation_error(&e))?;

        let new_user = NewUser::new(&input.email, &input.name)?;

        if self.repo.find_by_email(new_user.email()).await?.is_some() {
            return Err(AppError::conflict(EMAIL_TAKEN));
        }

        let user = self.repo.create(new_user).await?;
        tracing::debug!(user_id = user.id, "User created");
        Ok(user)
    }
}
