//! Core library modules for the todos service.
//!
//! ## Features
//!
//! - **Core Infrastructure**: configuration, file locations, messaging
//! - **Data Model**: the task entity and its writable fields
//! - **Runtime**: the HTTP server lifecycle
//!
//! ```rust,no_run
//! use todos::libs::config::Config;
//! use todos::libs::server;
//!
//! # async fn run() -> anyhow::Result<()> {
//! server::serve(Config::read()?).await
//! # }
//! ```

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod server;
pub mod task;
