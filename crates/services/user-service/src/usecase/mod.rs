//! Application layer - one use case per user operation.
//!
//! Use cases depend only on the [`UserRepository`] port, never on a concrete
//! adapter. Input shapes are checked with `validator` rules before anything
//! reaches the repository.

mod create_user;
mod current_user;
mod delete_user;
mod get_user;
mod list_users;
mod update_user;

use std::sync::Arc;

use validator::ValidationErrors;

use common::{AppError, AppResult};
use domain::UserId;

use crate::repository::UserRepository;

pub use create_user::{CreateUserInput, CreateUserUseCase};
pub use current_user::GetCurrentUserUseCase;
pub use delete_user::DeleteUserUseCase;
pub use get_user::{GetUserByEmailUseCase, GetUserUseCase};
pub use list_users::ListUsersUseCase;
pub use update_user::{UpdateUserInput, UpdateUserUseCase};

/// Every user use case, built over one repository.
#[derive(Clone)]
pub struct UserUseCases {
    pub create_user: Arc<CreateUserUseCase>,
    pub get_user: Arc<GetUserUseCase>,
    pub get_user_by_email: Arc<GetUserByEmailUseCase>,
    pub list_users: Arc<ListUsersUseCase>,
    pub update_user: Arc<UpdateUserUseCase>,
    pub delete_user: Arc<DeleteUserUseCase>,
    pub current_user: Arc<GetCurrentUserUseCase>,
}

impl UserUseCases {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            create_user: Arc::new(CreateUserUseCase::new(repo.clone())),
            get_user: Arc::new(GetUserUseCase::new(repo.clone())),
            get_user_by_email: Arc::new(GetUserByEmailUseCase::new(repo.clone())),
            list_users: Arc::new(ListUsersUseCase::new(repo.clone())),
            update_user: Arc::new(UpdateUserUseCase::new(repo.clone())),
            delete_user: Arc::new(DeleteUserUseCase::new(repo.clone())),
            current_user: Arc::new(GetCurrentUserUseCase::new(repo)),
        }
    }
}

/// Parse a user ID received as a string.
pub fn parse_user_id(raw: &str) -> AppResult<UserId> {
    raw.trim()
        .parse::<UserId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::validation("Invalid user id"))
}

/// Collapse validator output into a single validation error.
///
/// Fields are visited in name order so the reported message is stable.
pub(crate) fn validation_error(errors: &ValidationErrors) -> AppError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let message = fields
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Validation failed".to_string());

    AppError::validation(message)
}
