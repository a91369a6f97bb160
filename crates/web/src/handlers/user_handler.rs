//! User handlers.
//!
//! Thin adapters from HTTP to [`UserController`]; every response is the
//! controller's tagged envelope.
//!
//! [`UserController`]: user_service_lib::controller::UserController

use axum::{
    extract::{rejection::QueryRejection, Extension, Path, Query, State},
    middleware,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;

use common::{ActionResponse, AppError, ListParams, Paginated};
use domain::UserResponse;
use user_service_lib::controller::DeletedUser;
use user_service_lib::usecase::{CreateUserInput, UpdateUserInput};

use crate::extractors::JsonBody;
use crate::middleware::{session_middleware, Session};
use crate::state::AppState;

/// User creation request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Email address, stored lowercase
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Display name, 1 to 100 characters after trimming
    #[schema(example = "John Doe")]
    pub name: String,
}

impl From<CreateUserRequest> for CreateUserInput {
    fn from(req: CreateUserRequest) -> Self {
        CreateUserInput::new(req.email, req.name)
    }
}

/// Partial user update; omitted fields are left unchanged
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[schema(example = "new@example.com")]
    pub email: Option<String>,
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
}

impl From<UpdateUserRequest> for UpdateUserInput {
    fn from(req: UpdateUserRequest) -> Self {
        UpdateUserInput {
            email: req.email,
            name: req.name,
        }
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/me", get(get_current_user))
        .route("/by-email/:email", get(get_user_by_email))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
        .route_layer(middleware::from_fn(session_middleware))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> ActionResponse<UserResponse> {
    state.container().users().create_user(payload.into()).await
}

/// List users, ordered by ID
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(
        ("limit" = Option<u64>, Query, description = "Page size, 1 to 100 (default 20)"),
        ("offset" = Option<u64>, Query, description = "Number of users to skip")
    ),
    responses(
        (status = 200, description = "Page of users with pagination metadata"),
        (status = 400, description = "Malformed query")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> ActionResponse<Paginated<UserResponse>> {
    match query {
        Ok(Query(params)) => state.container().users().list_users(params).await,
        Err(e) => ActionResponse::failure(AppError::validation(e.body_text())),
    }
}

/// User behind the `x-user-id` session header
#[utoipa::path(
    get,
    path = "/users/me",
    tag = "Users",
    params(
        ("x-user-id" = Option<String>, Header, description = "ID of the acting user")
    ),
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "No session"),
        (status = 404, description = "Session user no longer exists")
    )
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    session: Option<Extension<Session>>,
) -> ActionResponse<UserResponse> {
    let session = session.map(|Extension(s)| s.user_id);
    state
        .container()
        .users()
        .get_current_user(session.as_deref())
        .await
}

/// Find a user by email
#[utoipa::path(
    get,
    path = "/users/by-email/{email}",
    tag = "Users",
    params(
        ("email" = String, Path, description = "Email address, matched case-insensitively")
    ),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ActionResponse<UserResponse> {
    state.container().users().get_user_by_email(&email).await
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ActionResponse<UserResponse> {
    state.container().users().get_user(&id).await
}

/// Update a user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateUserRequest>,
) -> ActionResponse<UserResponse> {
    state
        .container()
        .users()
        .update_user(&id, payload.into())
        .await
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted; body carries the removed ID"),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ActionResponse<DeletedUser> {
    state.container().users().delete_user(&id).await
}
