use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd(tasks: &Tasks) -> Result<()> {
    show_history(tasks);
    Ok(())
}

/// Prints the history table. Returns false when there was nothing to show.
pub fn show_history(tasks: &Tasks) -> bool {
    msg_print!(Message::TaskHistoryHeader, true);

    let rows = tasks.list();
    if rows.is_empty() {
        msg_info!(Message::NoTasksRecorded);
        return false;
    }

    View::tasks(&rows);
    true
}
