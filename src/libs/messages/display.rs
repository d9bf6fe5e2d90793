//! Display implementation for application messages.
//!
//! All user-facing wording is kept in one match so the CLI reads
//! consistently and the text can be changed in one place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK ENTRY ===
            Message::TaskFormHeader => "📚 Course Task Tracker".to_string(),
            Message::TaskFormIntro => "Add a new task so nothing slips through.".to_string(),
            Message::TaskSaved => "Task saved successfully!".to_string(),
            Message::TaskSaveFailed => "Failed to save task.".to_string(),
            Message::TaskDescriptionRequired => "Task description is required!".to_string(),
            Message::InvalidTaskInput(error) => format!("Invalid task: {}", error),
            Message::UnknownCourse(course) => format!("Unknown course '{}'. Run 'tugas courses' to see the configured list.", course),

            // === TASK HISTORY ===
            Message::TaskHistoryHeader => "🗂️ All Tasks".to_string(),
            Message::NoTasksRecorded => "No tasks recorded yet. Add one with 'tugas add' or from the menu.".to_string(),
            Message::TaskDeleted(id) => format!("Task with ID {} deleted.", id),
            Message::TaskDeleteFailed(id) => format!("Failed to delete task ID {}. Make sure the ID is valid.", id),
            Message::TaskIdMustBePositive => "Please enter a valid task ID (1 or greater).".to_string(),
            Message::ConfirmDeleteFromHistory => "Delete a task?".to_string(),

            // === NAVIGATION ===
            Message::MenuAddTask => "➕ Add task".to_string(),
            Message::MenuTaskHistory => "🗂️ Task history".to_string(),
            Message::MenuQuit => "Quit".to_string(),
            Message::AboutApp => "Keeps track of coursework tasks and their deadlines.".to_string(),

            // === CONFIGURATION ===
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigDeleted => "Configuration file removed.".to_string(),
            Message::ConfigNotFound => "No configuration file to remove.".to_string(),
            Message::ConfigParseError(error) => format!("Failed to parse configuration: {}", error),
            Message::ConfigNoCourses => "Configuration must list at least one course.".to_string(),
            Message::StoreReady(path) => format!("Task store ready at {}", path),
            Message::StoreInitFailed(path) => format!("Could not initialize the task store at {}", path),
            Message::CoursesHeader => "Configured courses:".to_string(),

            // === PROMPTS ===
            Message::PromptSelectPage => "Choose a page".to_string(),
            Message::PromptTaskDescription => "Task description*".to_string(),
            Message::PromptTaskCourse => "Course*".to_string(),
            Message::PromptTaskPriority => "Priority*".to_string(),
            Message::PromptTaskDueDate => "🗓️ Due date (YYYY-MM-DD)*".to_string(),
            Message::PromptTaskIdToDelete => "ID of the task to delete".to_string(),
            Message::DueDateFormatHint => "Use the YYYY-MM-DD format, e.g. 2024-03-01".to_string(),
        };
        write!(f, "{}", text)
    }
}
