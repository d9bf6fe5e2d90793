pub mod add;
pub mod courses;
pub mod delete;
pub mod init;
pub mod list;
pub mod menu;

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Write the default configuration and prepare the task store")]
    Init(init::InitArgs),
    #[command(about = "Add a task (opens the entry form when no description is given)")]
    Add(add::AddArgs),
    #[command(about = "Show all recorded tasks")]
    List,
    #[command(about = "Delete a task by ID")]
    Delete(delete::DeleteArgs),
    #[command(about = "Show the configured courses and priorities")]
    Courses,
    #[command(about = "Switch between the entry form and the task history")]
    Menu,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    /// Loads the configuration, opens the task store once, and hands both
    /// to the chosen command. No subcommand means the interactive menu.
    pub fn run(self) -> Result<()> {
        match self.command {
            Some(Commands::Init(args)) => init::cmd(args),
            Some(Commands::Courses) => courses::cmd(&Config::read()?),
            Some(Commands::Add(args)) => {
                let config = Config::read()?;
                add::cmd(args, &config, &open_store(&config)?)
            }
            Some(Commands::List) => list::cmd(&open_store(&Config::read()?)?),
            Some(Commands::Delete(args)) => delete::cmd(args, &open_store(&Config::read()?)?),
            Some(Commands::Menu) | None => {
                let config = Config::read()?;
                menu::cmd(&config, &open_store(&config)?)
            }
        }
    }
}

/// Opens the task store the configuration points at.
pub fn open_store(config: &Config) -> Result<Tasks> {
    Ok(Tasks::open(config.db_file()?))
}
