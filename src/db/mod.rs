//! Database layer for the todos service.
//!
//! Persistence is a single SQLite file holding the `todos` table and the
//! `migrations` bookkeeping table.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use todos::db::{db::Db, tasks::Tasks};
//! use todos::libs::task::TaskFields;
//!
//! let db = Db::open(Path::new("todos.db"))?;
//! let tasks = Tasks::new(&db);
//! let task = tasks.insert(&TaskFields::new("Buy milk", "2%", false))?;
//! assert_eq!(tasks.get(task.id)?, task);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ### Connection Management
//! - **One connection per process**: opened by [`db::Db`], shared through a mutex
//! - **Blocking calls**: repository methods block and are run off the async runtime
//! - **Transactions**: every write commits or rolls back as a unit

/// Connection ownership and startup.
///
/// Opens the SQLite file, applies pragmas and migrations, and hands out the
/// shared connection handle.
pub mod db;

/// Repository error type.
pub mod error;

/// Schema migrations with version tracking.
pub mod migrations;

/// CRUD operations over the `todos` table.
pub mod tasks;
