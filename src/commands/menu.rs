//! Interactive navigator between the entry form and the task history.

use super::{add, delete, list};
use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message},
    msg_info,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

pub fn cmd(config: &Config, tasks: &Tasks) -> Result<()> {
    msg_info!(Message::AboutApp);

    let pages = [Message::MenuAddTask, Message::MenuTaskHistory, Message::MenuQuit];
    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectPage.to_string())
            .items(&pages[..])
            .default(0)
            .interact()?;

        match choice {
            0 => add::form(config, tasks)?,
            1 => history(tasks)?,
            _ => return Ok(()),
        }
    }
}

/// History page: the table, then an optional delete.
///
/// The delete is offered even when the table is empty, since a row whose
/// date cannot be read empties the listing but can still be deleted by ID.
fn history(tasks: &Tasks) -> Result<()> {
    list::show_history(tasks);

    let wants_delete = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteFromHistory.to_string())
        .default(false)
        .interact()?;
    if wants_delete {
        let id = delete::prompt_id()?;
        if delete::delete_task(tasks, id) {
            list::show_history(tasks);
        }
    }
    Ok(())
}
