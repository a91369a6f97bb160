//! Tagged success/failure envelope returned by every controller call.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::{AppError, AppResult, ErrorBody};

/// Standard response wrapper: `{"success": true, "data": ...}` or
/// `{"success": false, "error": {"code": ..., "message": ...}}`.
#[derive(Debug, Serialize)]
pub struct ActionResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ActionResponse<T> {
    pub fn success(data: T) -> Self {
        Self::with_status(data, StatusCode::OK)
    }

    pub fn created(data: T) -> Self {
        Self::with_status(data, StatusCode::CREATED)
    }

    fn with_status(data: T, status: StatusCode) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            status,
        }
    }

    pub fn failure(err: AppError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(err.body()),
            status: err.status(),
        }
    }

    /// Wrap a use case result, mapping the success value with `f`.
    pub fn from_result<U>(result: AppResult<U>, f: impl FnOnce(U) -> T) -> Self {
        match result {
            Ok(value) => Self::success(f(value)),
            Err(err) => Self::failure(err),
        }
    }

    /// HTTP status this response maps to
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Error code of a failed response
    pub fn error_code(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.code.as_str())
    }
}

impl<T: Serialize> IntoResponse for ActionResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}
