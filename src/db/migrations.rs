//! Database schema migration management and versioning.
//!
//! Migrations are numbered, recorded in a `migrations` table once applied,
//! and only pending ones run on startup. All pending migrations run inside a
//! single transaction with foreign-key enforcement suspended, so a failure
//! leaves the previous schema and data untouched.
//!
//! ## Registered migrations
//!
//! 1. `create_todos_table`: creates `todos` in its current shape when the
//!    database is new.
//! 2. `normalize_todos_columns`: rebuilds `todos` through a shadow table when
//!    an older layout is found (for example the `is_completed` flag of the
//!    first schema, a table without `user_id`, or one whose `id` lacks
//!    AUTOINCREMENT). Tables already in the expected shape, constraints
//!    included, are left alone.
//!
//! ```rust,no_run
//! use todos::db::migrations::{init_with_migrations, get_db_version};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("todos.db")?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Transaction};

/// SQL schema for the migrations tracking table.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const CREATE_TODOS: &str = "CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    completed INTEGER DEFAULT 0,
    user_id INTEGER
)";

const CREATE_TODOS_BACKUP: &str = "CREATE TABLE todos_backup (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    completed INTEGER DEFAULT 0,
    user_id INTEGER
)";

/// Column set of `todos` after normalization, in declaration order.
pub const TODOS_COLUMNS: [&str; 5] = ["id", "title", "description", "completed", "user_id"];

/// A single numbered schema change.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations, applied in version order.
///
/// Meant for single-threaded use during startup, before the connection is
/// shared with request handlers.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: base table for new databases
        self.add_migration(1, "create_todos_table", |tx| {
            tx.execute(CREATE_TODOS, [])?;
            Ok(())
        });

        // Version 2: bring older layouts to the current column set
        self.add_migration(2, "normalize_todos_columns", normalize_todos);
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every pending migration.
    ///
    /// Foreign-key enforcement is switched off for the duration (SQLite
    /// ignores that pragma inside a transaction) and switched back on
    /// afterwards, whether or not the migrations succeeded.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_info!(Message::MigrationsFound(pending.len()));

        conn.pragma_update(None, "foreign_keys", false)?;
        let result = Self::apply(conn, &pending);
        conn.pragma_update(None, "foreign_keys", true)?;
        result?;

        msg_success!(Message::AllMigrationsCompleted);
        Ok(())
    }

    /// Runs `pending` in one transaction. Dropping the transaction on an
    /// early return rolls everything back.
    fn apply(conn: &mut Connection, pending: &[&Migration]) -> Result<()> {
        let tx = conn.transaction()?;

        for migration in pending {
            msg_info!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_success!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        Ok(())
    }

    /// Highest applied version, or 0 for a database that was never migrated.
    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        if !table_exists(conn, "migrations")? {
            return Ok(0);
        }
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;

        Ok(version.unwrap_or(0))
    }

    fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        if !table_exists(conn, "migrations")? {
            return Ok(false);
        }
        let count: i32 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;

        Ok(count > 0)
    }

    /// Applied migrations as `(version, name, applied_at)`, ordered by version.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        if !table_exists(conn, "migrations")? {
            return Ok(Vec::new());
        }
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Declared type, NOT NULL flag and primary-key position of each
/// [`TODOS_COLUMNS`] entry in [`CREATE_TODOS`].
const TODOS_DEFINITION: [(&str, &str, bool, i64); 5] = [
    ("id", "INTEGER", false, 1),
    ("title", "TEXT", true, 0),
    ("description", "TEXT", false, 0),
    ("completed", "INTEGER", false, 0),
    ("user_id", "INTEGER", false, 0),
];

/// Rebuilds `todos` into the [`CREATE_TODOS`] shape unless it is already
/// there.
///
/// Rows are copied by column name. A legacy `is_completed` flag feeds
/// `completed`; columns the old table lacks become NULL (or 0 for
/// `completed`). The AUTOINCREMENT counter is carried over so ids of deleted
/// rows are not handed out again.
fn normalize_todos(tx: &Transaction) -> Result<()> {
    if todos_in_shape(tx)? {
        msg_debug!(Message::TodosAlreadyNormalized);
        return Ok(());
    }

    let columns = table_columns(tx, "todos")?;

    let has = |name: &str| columns.iter().any(|column| column == name);
    let description = if has("description") { "description" } else { "NULL" };
    let completed = if has("completed") {
        "COALESCE(completed, 0)"
    } else if has("is_completed") {
        "COALESCE(is_completed, 0)"
    } else {
        "0"
    };
    let user_id = if has("user_id") { "user_id" } else { "NULL" };

    tx.execute("DROP TABLE IF EXISTS todos_backup", [])?;
    tx.execute(CREATE_TODOS_BACKUP, [])?;
    tx.execute(
        &format!(
            "INSERT INTO todos_backup (id, title, description, completed, user_id) SELECT id, title, {}, {}, {} FROM todos",
            description, completed, user_id
        ),
        [],
    )?;

    let sequence: Option<i64> = tx
        .query_row("SELECT seq FROM sqlite_sequence WHERE name = 'todos'", [], |row| row.get(0))
        .optional()?;

    tx.execute("DROP TABLE todos", [])?;
    tx.execute("ALTER TABLE todos_backup RENAME TO todos", [])?;

    if let Some(seq) = sequence {
        let updated = tx.execute("UPDATE sqlite_sequence SET seq = MAX(seq, ?1) WHERE name = 'todos'", params![seq])?;
        if updated == 0 {
            tx.execute("INSERT INTO sqlite_sequence (name, seq) VALUES ('todos', ?1)", params![seq])?;
        }
    }

    msg_info!(Message::TodosRebuilt(columns));
    Ok(())
}

/// Whether `todos` matches [`TODOS_DEFINITION`] column by column and
/// declares `id` AUTOINCREMENT.
fn todos_in_shape(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info(todos)")?;
    let definition = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, bool>(3)?,
                row.get::<_, i64>(5)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let columns_match = definition.len() == TODOS_DEFINITION.len()
        && definition.iter().zip(TODOS_DEFINITION).all(|((name, kind, not_null, pk), expected)| {
            name == expected.0 && kind.eq_ignore_ascii_case(expected.1) && *not_null == expected.2 && *pk == expected.3
        });
    if !columns_match {
        return Ok(false);
    }

    let sql: Option<String> = conn
        .query_row("SELECT sql FROM sqlite_master WHERE type = 'table' AND name = 'todos'", [], |row| row.get(0))
        .optional()?;

    Ok(sql.is_some_and(|sql| sql.to_uppercase().contains("AUTOINCREMENT")))
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let count: i32 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        params![table],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Column names of `table` in declaration order. Empty if the table does not exist.
pub fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let columns = stmt.query_map([], |row| row.get::<_, String>(1))?.collect::<Result<Vec<_>, _>>()?;
    Ok(columns)
}

/// Applies all pending migrations to `conn`.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}

/// Whether `conn` is behind the latest registered migration.
pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    Ok(current < manager.latest_version())
}
