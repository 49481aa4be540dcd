//! HTTP endpoint layer.
//!
//! Maps the `/tasks` routes onto the task repository and translates
//! repository outcomes into status codes.
//!
//! | Route | Operation |
//! |---|---|
//! | `GET /tasks/` | list all tasks |
//! | `POST /tasks/` | create a task |
//! | `GET /tasks/{id}` | fetch one task |
//! | `PUT /tasks/{id}` | replace a task |
//! | `DELETE /tasks/{id}` | delete a task |
//!
//! ```rust,no_run
//! use std::path::Path;
//! use todos::api::{router, AppState};
//! use todos::db::{db::Db, tasks::Tasks};
//! use todos::libs::config::CorsConfig;
//!
//! let db = Db::open(Path::new("todos.db"))?;
//! let app = router(AppState::new(Tasks::new(&db)), &CorsConfig::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;

use crate::db::error::{StoreError, StoreResult};
use crate::db::tasks::Tasks;
use crate::libs::config::CorsConfig;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use handlers::{create_task, delete_task, get_task, list_tasks, update_task};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    tasks: Tasks,
}

impl AppState {
    pub fn new(tasks: Tasks) -> Self {
        Self { tasks }
    }

    /// Runs a repository operation on the blocking thread pool so SQLite
    /// never stalls the async workers.
    pub async fn run<T, F>(&self, operation: F) -> StoreResult<T>
    where
        F: FnOnce(&Tasks) -> StoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let tasks = self.tasks.clone();
        tokio::task::spawn_blocking(move || operation(&tasks))
            .await
            .map_err(|error| StoreError::Worker(error.to_string()))?
    }
}

/// Builds the application router with tracing and CORS applied.
///
/// Both `/tasks` and `/tasks/` serve the collection routes.
pub fn router(state: AppState, cors: &CorsConfig) -> Result<Router> {
    let application = Router::new()
        .route("/tasks/", get(list_tasks).post(create_task))
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", get(get_task).put(update_task).delete(delete_task))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors)?)
        .with_state(state);

    Ok(application)
}

/// CORS for the configured origins with credentials.
///
/// Credentialed requests cannot use wildcard methods or headers, so the
/// preflight's requested methods and headers are mirrored back instead.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin).map_err(|_| msg_error_anyhow!(Message::InvalidCorsOrigin(origin.clone()))))
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
