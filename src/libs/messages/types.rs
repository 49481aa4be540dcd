//! Message catalogue for the todos service.
//!
//! Every piece of user-facing text, whether it ends up in an HTTP response
//! body, in the log or on the terminal, is named here. The text itself lives
//! in [`super::display`].

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated,
    TaskRetrieved,
    TaskUpdated,
    TaskDeleted,
    TaskNotFound,
    TasksListed(usize), // count
    TaskCreateFailed(String),
    TaskUpdateFailed(String),
    TaskDeleteFailed(String),
    TaskLookupFailed(String),

    // === REQUEST MESSAGES ===
    InvalidRequestBody(String),
    InvalidTaskId(String),
    StorageWorkerFailed(String),

    // === DATABASE MESSAGES ===
    DatabaseOpened(String), // path
    DatabaseNotFound(String),
    DatabaseClosed,
    DatabaseCloseFailed(String),
    DatabaseStillInUse,
    DatabaseTaskCount(usize),
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),
    MigrationFailed(u32, String), // version, error
    AllMigrationsCompleted,
    MigrationHistory,
    MigrationHistoryEntry(u32, String, String), // version, name, applied_at
    TodosAlreadyNormalized,
    TodosRebuilt(Vec<String>), // legacy columns

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String), // path
    ConfigAlreadyExists(String),
    InvalidCorsOrigin(String),
    InvalidServerAddress(String),

    // === SERVER MESSAGES ===
    ServerStarting,
    ServerListening(String),
    ServerBindFailed(String, String), // address, error
    ServerError(String),
    ServerShutdownComplete,
    ReceivedCtrlC,
    ReceivedSigterm,
    SignalHandlerFailed(String),
}
