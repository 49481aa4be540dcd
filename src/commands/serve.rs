use crate::libs::config::Config;
use crate::libs::server;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Configuration file (defaults to config.json next to the executable)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Host to listen on
    #[arg(long)]
    host: Option<String>,
    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
    /// SQLite database file
    #[arg(short, long)]
    database: Option<PathBuf>,
}

impl ServeArgs {
    /// Applies command-line overrides on top of the file configuration.
    fn apply(self, mut config: Config) -> Config {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(database) = self.database {
            config.database.path = Some(database);
        }
        config
    }
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::read_from(path)?,
        None => Config::read()?,
    };
    server::serve(args.apply(config)).await
}
