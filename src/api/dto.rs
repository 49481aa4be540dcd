use serde::{Deserialize, Serialize};

/// Success envelope: a human-readable message plus the affected task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResponse<T> {
    pub message: String,
    pub task: T,
}

/// Body of a delete response; only the id survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedTask {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
