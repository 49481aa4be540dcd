//! Request handlers for the `/tasks` routes.
//!
//! Each handler validates its input through the extractors, runs exactly
//! one repository operation on a blocking thread and wraps the outcome.

use super::dto::{DeletedTask, TaskResponse};
use super::error::ApiError;
use super::extract::{Payload, TaskPath};
use super::AppState;
use crate::db::error::StoreError;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFields};
use crate::{msg_debug, msg_error};
use axum::extract::State;
use axum::Json;

/// `GET /tasks/`
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state
        .run(|tasks| tasks.list())
        .await
        .inspect_err(|error| log_failure(error, Message::TaskLookupFailed))?;

    msg_debug!(Message::TasksListed(tasks.len()));
    Ok(Json(tasks))
}

/// `POST /tasks/`
pub async fn create_task(
    State(state): State<AppState>,
    Payload(fields): Payload<TaskFields>,
) -> Result<Json<TaskResponse<Task>>, ApiError> {
    let task = state
        .run(move |tasks| tasks.insert(&fields))
        .await
        .inspect_err(|error| log_failure(error, Message::TaskCreateFailed))?;

    Ok(respond(Message::TaskCreated, task))
}

/// `GET /tasks/{id}`
pub async fn get_task(State(state): State<AppState>, TaskPath(id): TaskPath<i64>) -> Result<Json<TaskResponse<Task>>, ApiError> {
    let task = state
        .run(move |tasks| tasks.get(id))
        .await
        .inspect_err(|error| log_failure(error, Message::TaskLookupFailed))?;

    Ok(respond(Message::TaskRetrieved, task))
}

/// `PUT /tasks/{id}`
pub async fn update_task(
    State(state): State<AppState>,
    TaskPath(id): TaskPath<i64>,
    Payload(fields): Payload<TaskFields>,
) -> Result<Json<TaskResponse<Task>>, ApiError> {
    let task = state
        .run(move |tasks| tasks.update(id, &fields))
        .await
        .inspect_err(|error| log_failure(error, Message::TaskUpdateFailed))?;

    Ok(respond(Message::TaskUpdated, task))
}

/// `DELETE /tasks/{id}`
pub async fn delete_task(
    State(state): State<AppState>,
    TaskPath(id): TaskPath<i64>,
) -> Result<Json<TaskResponse<DeletedTask>>, ApiError> {
    let id = state
        .run(move |tasks| tasks.delete(id))
        .await
        .inspect_err(|error| log_failure(error, Message::TaskDeleteFailed))?;

    Ok(respond(Message::TaskDeleted, DeletedTask { id }))
}

fn respond<T>(message: Message, task: T) -> Json<TaskResponse<T>> {
    Json(TaskResponse {
        message: message.to_string(),
        task,
    })
}

fn log_failure(error: &StoreError, describe: fn(String) -> Message) {
    match error {
        StoreError::NotFound(id) => msg_debug!(format!("{} (id {})", Message::TaskNotFound, id)),
        _ => msg_error!(describe(error.to_string())),
    }
}
