//! User controller - the boundary every caller goes through.
//!
//! Each method logs entry and exit and never fails: errors from the use
//! cases come back as the failure half of an [`ActionResponse`].

use serde::Serialize;
use tracing::{error, info, warn};

use common::{ActionResponse, AppResult, ListParams, Paginated};
use domain::{UserId, UserResponse};

use crate::usecase::{CreateUserInput, UpdateUserInput, UserUseCases};

/// Payload returned after a successful delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedUser {
    pub id: String,
}

impl From<UserId> for DeletedUser {
    fn from(id: UserId) -> Self {
        Self { id: id.to_string() }
    }
}

fn log_outcome<T>(action: &'static str, result: &AppResult<T>) {
    match result {
        Ok(_) => info!(action, "completed"),
        Err(e) if e.is_client_error() => warn!(action, code = e.code(), error = %e, "rejected"),
        Err(e) => error!(action, code = e.code(), error = %e, "failed"),
    }
}

fn respond<T, U: Serialize>(
    action: &'static str,
    result: AppResult<T>,
    f: impl FnOnce(T) -> U,
) -> ActionResponse<U> {
    log_outcome(action, &result);
    ActionResponse::from_result(result, f)
}

pub struct UserController {
    use_cases: UserUseCases,
}

impl UserController {
    pub fn new(use_cases: UserUseCases) -> Self {
        Self { use_cases }
    }

    pub async fn create_user(&self, input: CreateUserInput) -> ActionResponse<UserResponse> {
        info!(action = "create_user", email = %input.email, "started");
        let result = self.use_cases.create_user.execute(input).await;
        log_outcome("create_user", &result);
        match result {
            Ok(user) => ActionResponse::created(UserResponse::from(user)),
            Err(e) => ActionResponse::failure(e),
        }
    }

    pub async fn get_user(&self, id: &str) -> ActionResponse<UserResponse> {
        info!(action = "get_user", id, "started");
        let result = self.use_cases.get_user.execute(id).await;
        respond("get_user", result, UserResponse::from)
    }

    pub async fn get_user_by_email(&self, email: &str) -> ActionResponse<UserResponse> {
        info!(action = "get_user_by_email", email, "started");
        let result = self.use_cases.get_user_by_email.execute(email).await;
        respond("get_user_by_email", result, UserResponse::from)
    }

    pub async fn list_users(&self, params: ListParams) -> ActionResponse<Paginated<UserResponse>> {
        info!(
            action = "list_users",
            limit = params.limit,
            offset = params.offset,
            "started"
        );
        let result = self.use_cases.list_users.execute(params).await;
        respond("list_users", result, |page| page.map(UserResponse::from))
    }

    pub async fn update_user(
        &self,
        id: &str,
        input: UpdateUserInput,
    ) -> ActionResponse<UserResponse> {
        info!(action = "update_user", id, "started");
        let result = self.use_cases.update_user.execute(id, input).await;
        respond("update_user", result, UserResponse::from)
    }

    pub async fn delete_user(&self, id: &str) -> ActionResponse<DeletedUser> {
        info!(action = "delete_user", id, "started");
        let result = self.use_cases.delete_user.execute(id).await;
        respond("delete_user", result, DeletedUser::from)
    }

    pub async fn get_current_user(&self, session: Option<&str>) -> ActionResponse<UserResponse> {
        info!(
            action = "get_current_user",
            has_session = session.is_some(),
            "started"
        );
        let result = self.use_cases.current_user.execute(session).await;
        respond("get_current_user", result, UserResponse::from)
    }
}
