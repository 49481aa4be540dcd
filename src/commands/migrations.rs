use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, needs_migration, MigrationManager},
    },
    libs::{config::Config, messages::Message},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    /// SQLite database file (defaults to the configured database)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show current database version
    Status,
    /// Show migration history
    History,
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let path = match args.database {
        Some(path) => path,
        None => Config::read()?.database.resolve_path()?,
    };
    let conn = Db::open_existing(&path)?;

    match args.command {
        MigrationsCommand::Status => {
            msg_print!(Message::DatabaseVersion(get_db_version(&conn)?));
            if needs_migration(&conn)? {
                msg_info!(Message::DatabaseNeedsUpdate);
            } else {
                msg_info!(Message::DatabaseUpToDate);
            }
        }
        MigrationsCommand::History => {
            let manager = MigrationManager::new();
            let history = manager.get_migration_history(&conn)?;

            msg_print!(Message::MigrationHistory, true);
            for (version, name, applied_at) in history {
                msg_print!(Message::MigrationHistoryEntry(version, name, applied_at));
            }
        }
    }

    Ok(())
}
