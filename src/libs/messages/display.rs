//! Display implementation for todos messages.
//!
//! Turns a [`Message`] into the text shown to API clients and operators.
//! Response messages ("Task successfully created", "Task not found") are part
//! of the HTTP contract and must not change wording.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated => "Task successfully created".to_string(),
            Message::TaskRetrieved => "Task successfully retrieved".to_string(),
            Message::TaskUpdated => "Task successfully updated".to_string(),
            Message::TaskDeleted => "Task successfully deleted".to_string(),
            Message::TaskNotFound => "Task not found".to_string(),
            Message::TasksListed(count) => format!("Tasks retrieved from database: {}", count),
            Message::TaskCreateFailed(error) => format!("Failed to create task: {}", error),
            Message::TaskUpdateFailed(error) => format!("Failed to update task: {}", error),
            Message::TaskDeleteFailed(error) => format!("Failed to delete task: {}", error),
            Message::TaskLookupFailed(error) => format!("Failed to read tasks: {}", error),

            // === REQUEST MESSAGES ===
            Message::InvalidRequestBody(error) => format!("Invalid request body: {}", error),
            Message::InvalidTaskId(error) => format!("Invalid task id: {}", error),
            Message::StorageWorkerFailed(error) => format!("Storage worker failed: {}", error),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Database opened at {}", path),
            Message::DatabaseNotFound(path) => format!("No database found at {}", path),
            Message::DatabaseClosed => "Database connection closed".to_string(),
            Message::DatabaseCloseFailed(error) => format!("Failed to close database connection: {}", error),
            Message::DatabaseStillInUse => "Database connection still referenced, releasing on drop".to_string(),
            Message::DatabaseTaskCount(count) => format!("{} task(s) in storage", count),
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::MigrationHistoryEntry(version, name, applied_at) => {
                format!("  v{}: {} (applied: {})", version, name, applied_at)
            }
            Message::TodosAlreadyNormalized => "Table todos already has the expected columns".to_string(),
            Message::TodosRebuilt(columns) => format!("Table todos rebuilt from columns: {}", columns.join(", ")),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigAlreadyExists(path) => format!("Configuration already exists at {}", path),
            Message::InvalidCorsOrigin(origin) => format!("Invalid CORS origin: {}", origin),
            Message::InvalidServerAddress(address) => format!("Invalid server address: {}", address),

            // === SERVER MESSAGES ===
            Message::ServerStarting => "Starting todos server".to_string(),
            Message::ServerListening(address) => format!("Listening on {}", address),
            Message::ServerBindFailed(address, error) => format!("Failed to bind to {}: {}", address, error),
            Message::ServerError(error) => format!("Server error: {}", error),
            Message::ServerShutdownComplete => "Server shutdown complete".to_string(),
            Message::ReceivedCtrlC => "Received Ctrl+C, shutting down".to_string(),
            Message::ReceivedSigterm => "Received SIGTERM, shutting down".to_string(),
            Message::SignalHandlerFailed(error) => format!("Failed to install signal handler: {}", error),
        };
        write!(f, "{}", text)
    }
}
