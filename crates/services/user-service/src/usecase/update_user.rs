//! UpdateUser - partial update with the same rules as CreateUser.

use std::sync::Arc;

use serde::Deserialize;
use validator::Validate;

use common::{AppError, AppResult, OptionExt};
use domain::{User, UserChanges};

use super::{parse_user_id, validation_error};
use crate::repository::{UserRepository, EMAIL_TAKEN};

/// Input accepted by UpdateUser. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserInput {
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,
}

impl UpdateUserInput {
    fn trimmed(&self) -> Self {
        Self {
            email: self.email.as_deref().map(|e| e.trim().to_string()),
            name: self.name.as_deref().map(|n| n.trim().to_string()),
        }
    }
}

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str, input: UpdateUserInput) -> AppResult<User> {
        let id = parse_user_id(id)?;
        let input = input.trimmed();
        input.validate().map_err(|e| validation_error(&e))?;

        let changes = UserChanges::new(input.email.as_deref(), input.name.as_deref())?;
        if changes.is_empty() {
            return Err(AppError::validation("No fields to update"));
        }

        if let Some(email) = changes.email.as_deref() {
            // A missing user is reported before any email conflict.
            self.repo.find_by_id(id).await?.ok_or_not_found()?;
            if let Some(owner) = self.repo.find_by_email(email).await? {
                if owner.id != id {
                    return Err(AppError::conflict(EMAIL_TAKEN));
                }
            }
        }

        self.repo.update(id, changes).await?.ok_or_not_found()
    }
}
