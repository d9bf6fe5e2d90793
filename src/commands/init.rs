//! First-run setup.
//!
//! Writes the configuration file (keeping any values already in it) and
//! creates the task table, so both can be inspected before the first task
//! is entered.

use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the configuration file instead of writing it
    #[arg(short, long)]
    pub delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        if Config::delete_file()? {
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_info!(Message::ConfigNotFound);
        }
        return Ok(());
    }

    let config = Config::read()?;
    config.save()?;
    msg_success!(Message::ConfigSaved(Config::file_path()?.display().to_string()));

    let db_file = config.db_file()?;
    let tasks = Tasks::open(&db_file);
    match tasks.try_initialize() {
        Ok(()) => msg_success!(Message::StoreReady(db_file.display().to_string())),
        Err(e) => {
            msg_error!(Message::StoreInitFailed(db_file.display().to_string()));
            return Err(e.into());
        }
    }
    Ok(())
}
