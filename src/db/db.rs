use super::migrations::init_with_migrations;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_warning};
use anyhow::Result;
use parking_lot::Mutex;
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Owner of the process-wide SQLite connection.
///
/// The connection is opened once, migrated, and then shared behind a mutex
/// with every repository that needs it. [`Db::close`] releases it at
/// shutdown.
pub struct Db {
    conn: Arc<Mutex<Connection>>,
    path: PathBuf,
}

impl Db {
    /// Opens the database at `path` and applies pending migrations.
    ///
    /// A migration failure is returned as an error; callers must not serve
    /// requests in that case.
    pub fn open(path: &Path) -> Result<Db> {
        let mut conn = Self::new_without_migrations(path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db {
            conn: Arc::new(Mutex::new(conn)),
            path: path.to_path_buf(),
        })
    }

    /// Opens a configured connection without touching the schema.
    pub fn new_without_migrations(path: &Path) -> Result<Connection> {
        Self::configure(Connection::open(path)?)
    }

    /// Opens an existing database file without touching the schema.
    ///
    /// Unlike [`Db::new_without_migrations`] this never creates the file.
    pub fn open_existing(path: &Path) -> Result<Connection> {
        if !path.is_file() {
            return Err(msg_error_anyhow!(Message::DatabaseNotFound(path.display().to_string())));
        }
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX)?;
        Self::configure(conn)
    }

    fn configure(conn: Connection) -> Result<Connection> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(conn)
    }

    /// Shared handle to the connection.
    pub fn handle(&self) -> Arc<Mutex<Connection>> {
        Arc::clone(&self.conn)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Closes the connection.
    ///
    /// If a repository still holds a handle, the connection is released when
    /// the last handle is dropped instead.
    pub fn close(self) -> Result<()> {
        match Arc::try_unwrap(self.conn) {
            Ok(conn) => conn.into_inner().close().map_err(|(_, error)| error.into()),
            Err(_) => {
                msg_warning!(Message::DatabaseStillInUse);
                Ok(())
            }
        }
    }
}
