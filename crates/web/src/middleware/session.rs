//! Session middleware.
//!
//! There is no authentication: the caller names the user it acts as in the
//! `x-user-id` header, and the raw value is handed to GetCurrentUser.

use axum::{body::Body, http::Request, middleware::Next, response::Response};

/// Header carrying the acting user's ID.
pub const SESSION_HEADER: &str = "x-user-id";

/// Session attached to a request that carried a non-empty `x-user-id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
}

/// Copy the session header, if any, into the request extensions.
pub async fn session_middleware(mut request: Request<Body>, next: Next) -> Response {
    let session = request
        .headers()
        .get(SESSION_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| Session {
            user_id: v.to_string(),
        });

    if let Some(session) = session {
        request.extensions_mut().insert(session);
    }

    next.run(request).await
}
