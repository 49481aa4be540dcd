//! Convenient macros for application messaging and logging.
//!
//! The macros route every message either to `tracing` (debug mode) or to
//! plain console output (normal mode), so call sites never decide that
//! themselves.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is on when either of these environment variables is set:
//! - **`TODOS_DEBUG`**: explicit debug mode
//! - **`RUST_LOG`**: standard Rust logging configuration
//!
//! The check runs once and is cached.
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: plain message
//! - **`msg_success!`**, **`msg_info!`**, **`msg_warning!`**: prefixed status lines
//! - **`msg_error!`**: errors, written to stderr in normal mode
//! - **`msg_debug!`**: only emitted in debug mode
//! - **`msg_error_anyhow!`**: builds an `anyhow::Error` from a message
//!
//! ```rust
//! use todos::{msg_info, msg_error};
//! use todos::libs::messages::Message;
//!
//! msg_info!(Message::ServerStarting);
//! msg_error!(Message::TaskCreateFailed("disk I/O error".to_string()));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Returns `true` when `TODOS_DEBUG` or `RUST_LOG` is set. Cached after the
/// first call.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TODOS_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message.
///
/// The `true` form surrounds the message with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix.
///
/// In normal mode the message goes to stderr so it never mixes with
/// regular output.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

/// Debug-only message with 🔍 prefix. Suppressed entirely in normal mode.
///
/// ```rust
/// use todos::msg_debug;
///
/// let task_id = 42;
/// msg_debug!(format!("Processing task with ID: {}", task_id));
/// ```
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message with ❌ prefix.
///
/// ```rust
/// use todos::msg_error_anyhow;
/// use todos::libs::messages::Message;
///
/// let error = msg_error_anyhow!(Message::InvalidCorsOrigin("not a url".to_string()));
/// assert!(error.to_string().contains("Invalid CORS origin"));
/// ```
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}
