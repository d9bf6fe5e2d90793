//! Task entry: flags for scripting, an interactive form otherwise.

use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        messages::Message,
        task::{today, DueDateInput, Priority, Task, TaskError, DATE_FORMAT},
    },
    msg_debug, msg_error, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description; without it the entry form is shown
    #[arg(short, long)]
    pub description: Option<String>,

    /// Course the task belongs to (defaults to the configured default course)
    #[arg(short, long)]
    pub course: Option<String>,

    /// Standard, Important or Urgent (defaults to Standard)
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Due date (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub due: Option<String>,
}

pub fn cmd(args: AddArgs, config: &Config, tasks: &Tasks) -> Result<()> {
    if args.description.is_none() {
        return form(config, tasks);
    }

    match task_from_args(&args, config) {
        Ok(task) => save(tasks, &task),
        Err(Message::TaskDescriptionRequired) => msg_warning!(Message::TaskDescriptionRequired),
        Err(msg) => msg_error!(msg),
    }
    Ok(())
}

/// Builds a task from command-line flags, rejecting anything invalid.
///
/// Unlike the lenient [`Task::new`], a malformed date or an empty
/// description is reported back instead of being replaced.
pub fn task_from_args(args: &AddArgs, config: &Config) -> Result<Task, Message> {
    let course = args.course.clone().unwrap_or_else(|| config.default_category.clone());
    if !config.is_known_category(&course) {
        return Err(Message::UnknownCourse(course));
    }

    let priority = args
        .priority
        .as_deref()
        .map(str::parse::<Priority>)
        .transpose()
        .map_err(|e| Message::InvalidTaskInput(e.to_string()))?;
    let due_date = match &args.due {
        Some(text) => DueDateInput::from(text.as_str()),
        None => DueDateInput::Date(today()),
    };

    Task::try_new(args.description.as_deref().unwrap_or_default(), priority, &course, due_date).map_err(|e| match e {
        TaskError::EmptyDescription => Message::TaskDescriptionRequired,
        e => Message::InvalidTaskInput(e.to_string()),
    })
}

/// Interactive entry form: description, course, priority, due date.
pub fn form(config: &Config, tasks: &Tasks) -> Result<()> {
    msg_print!(Message::TaskFormHeader, true);
    msg_print!(Message::TaskFormIntro);

    let theme = ColorfulTheme::default();
    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;

    let course_index = Select::with_theme(&theme)
        .with_prompt(Message::PromptTaskCourse.to_string())
        .items(&config.categories[..])
        .default(config.default_category_index())
        .interact()?;

    let priorities = config.priorities();
    let priority_index = Select::with_theme(&theme)
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&priorities.iter().map(Priority::as_str).collect::<Vec<_>>()[..])
        .default(0)
        .interact()?;

    let due_date: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .default(today().format(DATE_FORMAT).to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            DueDateInput::from(input.as_str())
                .resolve()
                .map(|_| ())
                .map_err(|_| Message::DueDateFormatHint.to_string())
        })
        .interact_text()?;

    if description.trim().is_empty() {
        msg_warning!(Message::TaskDescriptionRequired);
        return Ok(());
    }

    match Task::try_new(&description, Some(priorities[priority_index]), &config.categories[course_index], due_date) {
        Ok(task) => save(tasks, &task),
        Err(e) => msg_error!(Message::InvalidTaskInput(e.to_string())),
    }
    Ok(())
}

fn save(tasks: &Tasks, task: &Task) {
    msg_debug!(format!("Saving {}", task));
    if tasks.insert(task) {
        msg_success!(Message::TaskSaved);
    } else {
        msg_error!(Message::TaskSaveFailed);
    }
}
