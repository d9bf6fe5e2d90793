use crate::{db::tasks::Tasks, libs::messages::Message, msg_error, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete, as shown by `tugas list`; prompted for when omitted
    pub id: Option<i64>,
}

pub fn cmd(args: DeleteArgs, tasks: &Tasks) -> Result<()> {
    let id = match args.id {
        Some(id) => id,
        None => prompt_id()?,
    };

    if id < 1 {
        msg_warning!(Message::TaskIdMustBePositive);
        return Ok(());
    }

    delete_task(tasks, id);
    Ok(())
}

/// Asks for a task ID of 1 or more.
pub fn prompt_id() -> Result<i64> {
    let id = Input::<i64>::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskIdToDelete.to_string())
        .validate_with(|id: &i64| -> Result<(), String> {
            if *id >= 1 {
                Ok(())
            } else {
                Err(Message::TaskIdMustBePositive.to_string())
            }
        })
        .interact_text()?;
    Ok(id)
}

/// Deletes one task and reports the outcome. Returns whether it was removed.
pub fn delete_task(tasks: &Tasks, id: i64) -> bool {
    let deleted = tasks.delete(id);
    if deleted {
        msg_success!(Message::TaskDeleted(id));
    } else {
        msg_error!(Message::TaskDeleteFailed(id));
    }
    deleted
}
