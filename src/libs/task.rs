use serde::{Deserialize, Serialize};

/// A stored task as exposed to API clients.
///
/// The `user_id` column exists in storage but is deliberately absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Writable fields of a task, as sent by clients on create and update.
///
/// Updates replace every field, so this is also the full update payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TaskFields {
    pub fn new(title: &str, description: &str, completed: bool) -> Self {
        TaskFields {
            title: title.to_string(),
            description: description.to_string(),
            completed,
        }
    }

    /// Attaches a storage-assigned id.
    pub fn into_task(self, id: i64) -> Task {
        Task {
            id,
            title: self.title,
            description: Some(self.description),
            completed: self.completed,
        }
    }
}
