//! HTTP tests driving the router with an in-memory container.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use common::AppError;
use user_service_lib::container::{self, Container};
use user_service_lib::repository::{InMemoryUserStore, MockUserRepository};
use web_lib::config::WebConfig;
use web_lib::routes::create_router;
use web_lib::state::AppState;

fn app() -> Router {
    create_router(AppState::new(
        Arc::new(Container::in_memory()),
        WebConfig::default(),
    ))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn create(app: &Router, email: &str, name: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/users",
        Some(json!({ "email": email, "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"].clone()
}

#[tokio::test]
async fn create_user_returns_envelope() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "email": "  Ada@Example.COM ", "name": " Ada Lovelace " })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert!(body.get("error").is_none());

    let user = &body["data"];
    assert_eq!(user["id"], "1");
    assert_eq!(user["email"], "ada@example.com");
    assert_eq!(user["name"], "Ada Lovelace");
    assert_eq!(user["createdAt"], user["updatedAt"]);
    assert!(user["createdAt"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn create_user_rejects_bad_input() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "email": "not-an-email", "name": "Ada" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Invalid email address");

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "email": "ada@example.com", "name": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "Name must be between 1 and 100 characters"
    );

    let (status, body) = send(&app, Method::POST, "/users", Some(json!({ "email": 5 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let app = app();
    create(&app, "dup@example.com", "First").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "email": "DUP@example.com", "name": "Second" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
    assert_eq!(
        body["error"]["message"],
        "User with this email already exists"
    );
}

#[tokio::test]
async fn get_user_by_id_and_email() {
    let app = app();
    let created = create(&app, "grace@example.com", "Grace").await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/users/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], created);

    let (status, body) = send(&app, Method::GET, "/users/by-email/Grace@Example.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], created["id"]);

    let (status, body) = send(&app, Method::GET, "/users/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, body) = send(&app, Method::GET, "/users/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Invalid user id");
}

#[tokio::test]
async fn list_users_paginates() {
    let app = app();
    for i in 1..=5 {
        create(&app, &format!("user{i}@example.com"), &format!("User {i}")).await;
    }

    let (status, body) = send(&app, Method::GET, "/users?limit=2&offset=1", None).await;
    assert_eq!(status, StatusCode::OK);
    let page = &body["data"];
    let ids: Vec<&str> = page["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["2", "3"]);
    assert_eq!(page["meta"], json!({ "limit": 2, "offset": 1, "total": 5 }));

    let (_, body) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(body["data"]["meta"]["limit"], 20);
    assert_eq!(body["data"]["data"].as_array().unwrap().len(), 5);

    let (status, body) = send(&app, Method::GET, "/users?limit=lots", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn update_then_delete() {
    let app = app();
    let created = create(&app, "old@example.com", "Old Name").await;
    let uri = format!("/users/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "name": "New Name" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "New Name");
    assert_eq!(body["data"]["email"], "old@example.com");

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "No fields to update");

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], created["id"]);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({ "name": "Ghost" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_missing_user_to_taken_email_is_not_found() {
    let app = app();
    create(&app, "taken@example.com", "Taken").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/users/999",
        Some(json!({ "email": "taken@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn current_user_uses_session_header() {
    let app = app();
    let created = create(&app, "me@example.com", "Me").await;

    let (status, body) = send(&app, Method::GET, "/users/me", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let request = Request::builder()
        .uri("/users/me")
        .header("x-user-id", created["id"].as_str().unwrap())
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["data"]["email"], "me@example.com");
}

#[tokio::test]
async fn internal_errors_are_hidden() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .returning(|_| Err(AppError::internal("connection reset by peer")));
    let app = create_router(AppState::new(
        Arc::new(Container::new(Arc::new(repo))),
        WebConfig::default(),
    ));

    let (status, body) = send(&app, Method::GET, "/users/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(body["error"]["message"], "An internal error occurred");
}

#[tokio::test]
async fn health_reports_memory_storage() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"]["backend"], "memory");
}

#[tokio::test]
async fn global_state_follows_repository_swap() {
    let app = create_router(AppState::global(WebConfig::default()));
    container::replace_user_repository(Arc::new(InMemoryUserStore::new()));

    let created = create(&app, "swap@example.com", "Swap").await;
    let uri = format!("/users/{}", created["id"].as_str().unwrap());
    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    container::replace_user_repository(Arc::new(InMemoryUserStore::new()));
    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn restricted_cors_allows_only_configured_origins() {
    let config = WebConfig {
        cors_permissive: false,
        cors_origins: vec!["https://app.example.com".to_string()],
        ..WebConfig::default()
    };
    let app = create_router(AppState::new(Arc::new(Container::in_memory()), config));

    let preflight = |origin: &'static str| {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/users")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-user-id")
            .body(Body::empty())
            .unwrap()
    };

    let allowed = app
        .clone()
        .oneshot(preflight("https://app.example.com"))
        .await
        .unwrap();
    let headers = allowed.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://app.example.com"
    );
    assert!(headers[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap()
        .contains("PUT"));
    assert!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .contains("x-user-id"));

    let denied = app
        .oneshot(preflight("https://evil.example.com"))
        .await
        .unwrap();
    assert!(denied
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
