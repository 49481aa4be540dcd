//! HTTP server lifecycle.
//!
//! Opens and migrates the database, serves the API until SIGINT/SIGTERM,
//! then closes the database connection.

use crate::api::{router, AppState};
use crate::db::{db::Db, tasks::Tasks};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_error, msg_error_anyhow, msg_info, msg_success, msg_warning};
use anyhow::Result;
use tokio::net::TcpListener;
use tokio::signal;

/// Runs the service with `config` until a shutdown signal arrives.
///
/// Startup fails, and no request is accepted, if the database cannot be
/// opened or migrated.
pub async fn serve(config: Config) -> Result<()> {
    msg_info!(Message::ServerStarting);

    let address = config.server.socket_addr()?;
    let db_path = config.database.resolve_path()?;
    let db = Db::open(&db_path)?;
    msg_info!(Message::DatabaseOpened(db.path().display().to_string()));

    let tasks = Tasks::new(&db);
    msg_info!(Message::DatabaseTaskCount(tasks.count()?));

    let application = router(AppState::new(tasks), &config.cors)?;

    let listener = TcpListener::bind(address)
        .await
        .map_err(|error| msg_error_anyhow!(Message::ServerBindFailed(address.to_string(), error.to_string())))?;
    msg_info!(Message::ServerListening(listener.local_addr()?.to_string()));

    let served = axum::serve(listener, application).with_graceful_shutdown(shutdown_signal()).await;

    // The router, and with it every repository handle, is gone by now.
    match db.close() {
        Ok(()) => msg_info!(Message::DatabaseClosed),
        Err(error) => msg_error!(Message::DatabaseCloseFailed(error.to_string())),
    }

    if let Err(error) = served {
        msg_error!(Message::ServerError(error.to_string()));
        return Err(error.into());
    }

    msg_success!(Message::ServerShutdownComplete);
    Ok(())
}

/// Completes on Ctrl+C, or on SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            msg_warning!(Message::SignalHandlerFailed(error.to_string()));
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(error) => {
                msg_warning!(Message::SignalHandlerFailed(error.to_string()));
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => msg_info!(Message::ReceivedCtrlC),
        () = terminate => msg_info!(Message::ReceivedSigterm),
    }
}
