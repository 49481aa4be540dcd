use super::db::Db;
use super::error::{StoreError, StoreResult};
use crate::libs::task::{Task, TaskFields};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;

const INSERT_TASK: &str = "INSERT INTO todos (title, description, completed) VALUES (?1, ?2, ?3)";
const SELECT_TASKS: &str = "SELECT id, title, description, COALESCE(completed, 0) FROM todos ORDER BY id";
const SELECT_TASK_BY_ID: &str = "SELECT id, title, description, COALESCE(completed, 0) FROM todos WHERE id = ?1";
const UPDATE_TASK: &str = "UPDATE todos SET title = ?1, description = ?2, completed = ?3 WHERE id = ?4";
const DELETE_TASK: &str = "DELETE FROM todos WHERE id = ?1";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM todos";

/// Task repository over the shared connection.
///
/// Cloning is cheap and every clone talks to the same connection. Each call
/// holds the connection lock for one statement (or one transaction), so
/// concurrent callers are serialized rather than interleaved. Calls block;
/// async callers should run them on a blocking thread.
#[derive(Clone)]
pub struct Tasks {
    conn: Arc<Mutex<Connection>>,
}

impl Tasks {
    pub fn new(db: &Db) -> Self {
        Tasks { conn: db.handle() }
    }

    /// All tasks in insertion order.
    pub fn list(&self) -> StoreResult<Vec<Task>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(SELECT_TASKS)?;
        let tasks = stmt.query_map([], task_from_row)?.collect::<Result<Vec<_>, _>>()?;

        Ok(tasks)
    }

    /// Inserts a task and returns it with its assigned id.
    pub fn insert(&self, fields: &TaskFields) -> StoreResult<Task> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        tx.execute(INSERT_TASK, params![fields.title, fields.description, fields.completed])?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(fields.clone().into_task(id))
    }

    pub fn get(&self, id: i64) -> StoreResult<Task> {
        let conn = self.conn.lock();
        let task = conn.query_row(SELECT_TASK_BY_ID, params![id], task_from_row).optional()?;

        task.ok_or(StoreError::NotFound(id))
    }

    /// Replaces every field of task `id` and returns the fields as given.
    pub fn update(&self, id: i64, fields: &TaskFields) -> StoreResult<Task> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        let affected = tx.execute(UPDATE_TASK, params![fields.title, fields.description, fields.completed, id])?;
        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        tx.commit()?;

        Ok(fields.clone().into_task(id))
    }

    /// Deletes task `id` and returns the id.
    pub fn delete(&self, id: i64) -> StoreResult<i64> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        let affected = tx.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        tx.commit()?;

        Ok(id)
    }

    pub fn count(&self) -> StoreResult<usize> {
        let conn = self.conn.lock();
        let count: i64 = conn.query_row(COUNT_TASKS, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        completed: row.get(3)?,
    })
}
