use thiserror::Error;

/// Failures of the task repository.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row matched the requested id.
    #[error("Task not found: {0}")]
    NotFound(i64),

    /// SQLite rejected or failed a statement. The transaction, if any, has
    /// been rolled back.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// The blocking worker running the statement panicked or was cancelled.
    #[error("storage worker failed: {0}")]
    Worker(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
