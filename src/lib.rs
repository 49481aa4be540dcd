//! # Todos - task tracking backend
//!
//! A small HTTP service exposing create, read, update and delete operations
//! over tasks stored in SQLite.
//!
//! ## Features
//!
//! - **JSON API**: `/tasks/` collection and `/tasks/{id}` item routes
//! - **SQLite Storage**: one connection per process, transactional writes
//! - **Versioned Migrations**: older table layouts are normalized at startup
//! - **CORS**: configurable origin allow-list for browser clients
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todos::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
