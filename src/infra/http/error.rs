use std::error::Error as StdError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::error::ErrorReport;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// HTTP error with a flat `{"error": ...}` wire shape. Richer diagnostics
/// ride along as an [`ErrorReport`] for the shared logging middleware and
/// never reach the client.
#[derive(Debug)]
pub struct ApiError {
    source: &'static str,
    status: StatusCode,
    message: String,
    detail: Vec<String>,
}

impl ApiError {
    pub fn new(source: &'static str, status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            source,
            status,
            detail: vec![message.clone()],
            message,
        }
    }

    pub fn bad_request(source: &'static str, message: impl Into<String>) -> Self {
        Self::new(source, StatusCode::BAD_REQUEST, message)
    }

    pub fn conflict(source: &'static str, message: impl Into<String>) -> Self {
        Self::new(source, StatusCode::CONFLICT, message)
    }

    pub fn not_found(source: &'static str, message: impl Into<String>) -> Self {
        Self::new(source, StatusCode::NOT_FOUND, message)
    }

    /// The client-facing message is fixed; the cause chain goes to the logs.
    pub fn internal(source: &'static str, error: &dyn StdError) -> Self {
        let mut detail = vec![error.to_string()];
        let mut current = error.source();
        while let Some(inner) = current {
            detail.push(inner.to_string());
            current = inner.source();
        }
        Self {
            source,
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
            detail,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(ErrorBody { error: self.message })).into_response();
        ErrorReport {
            source: self.source,
            status: self.status,
            messages: self.detail,
        }
        .attach(&mut response);
        response
    }
}
