//! Extractors whose rejections use the service's `{"detail": ...}` body.

use super::error::ApiError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON request body. Malformed or incomplete bodies are rejected before
/// the handler runs.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Payload<T>(pub T);

/// Typed path parameters, e.g. the `{id}` of `/tasks/{id}`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct TaskPath<T>(pub T);
