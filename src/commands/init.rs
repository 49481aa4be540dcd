use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the file (defaults to config.json next to the executable)
    #[arg(short, long)]
    path: Option<PathBuf>,
    /// Overwrite an existing file
    #[arg(short, long)]
    force: bool,
}

pub fn cmd(args: InitArgs) -> Result<()> {
    let path = match args.path {
        Some(path) => path,
        None => Config::default_path()?,
    };

    if path.exists() && !args.force {
        msg_warning!(Message::ConfigAlreadyExists(path.display().to_string()));
        return Ok(());
    }

    Config::default().save_to(&path)?;
    msg_success!(Message::ConfigSaved(path.display().to_string()));
    Ok(())
}
