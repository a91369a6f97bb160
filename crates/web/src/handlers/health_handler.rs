//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub storage: StorageHealth,
}

/// Health of the backing user store.
#[derive(Debug, Serialize)]
pub struct StorageHealth {
    pub backend: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - pings the database when one backs the container.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let container = state.container();

    let storage = match container.database() {
        None => StorageHealth {
            backend: "memory".to_string(),
            status: "healthy".to_string(),
            error: None,
        },
        Some(db) => match db.ping().await {
            Ok(()) => StorageHealth {
                backend: "database".to_string(),
                status: "healthy".to_string(),
                error: None,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                StorageHealth {
                    backend: "database".to_string(),
                    status: "unhealthy".to_string(),
                    error: Some(e.to_string()),
                }
            }
        },
    };

    let healthy = storage.status == "healthy";
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        storage,
    };

    if healthy {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}
