use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::store::StoreError;

#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    BadRequest(String),
    NotFound(String),
    Upstream(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg).into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg).into_response(),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::MissingRow(_) => ApiError::NotFound(value.to_string()),
            StoreError::Url(err) => {
                error!("Store URL error: {err}");
                ApiError::Internal("Store is misconfigured".into())
            }
            StoreError::Http(err) => {
                error!("HTTP error: {err}");
                ApiError::Upstream("Failed to reach the class store".into())
            }
            StoreError::Status { .. } | StoreError::MissingId => {
                error!("Store error: {value}");
                ApiError::Upstream("Class store rejected the request".into())
            }
        }
    }
}
