//! API error handling.
//!
//! Every failure leaves the service as a status code plus a JSON body of
//! the form `{"detail": "..."}`.

use super::dto::ErrorBody;
use crate::db::error::StoreError;
use crate::libs::messages::Message;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Status and detail text of a failed request.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// 404 with the fixed "Task not found" detail.
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, Message::TaskNotFound.to_string())
    }

    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(_) => Self::not_found(),
            // Storage failures carry the raw SQLite message to the client.
            StoreError::Sqlite(error) => Self::internal_error(error.to_string()),
            StoreError::Worker(error) => Self::internal_error(Message::StorageWorkerFailed(error).to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), Message::InvalidRequestBody(rejection.body_text()).to_string())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, Message::InvalidTaskId(rejection.body_text()).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_store_error_maps_to_404() {
        let error = ApiError::from(StoreError::NotFound(7));
        assert_eq!(error.status, StatusCode::NOT_FOUND);
        assert_eq!(error.detail, "Task not found");
    }

    #[test]
    fn sqlite_error_keeps_raw_text() {
        let error = ApiError::from(StoreError::Sqlite(rusqlite::Error::QueryReturnedNoRows));
        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.detail, rusqlite::Error::QueryReturnedNoRows.to_string());
    }

    #[test]
    fn worker_error_maps_to_500() {
        let error = ApiError::from(StoreError::Worker("task cancelled".to_string()));
        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.detail.contains("task cancelled"));
    }
}
