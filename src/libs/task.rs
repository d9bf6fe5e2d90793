//! Task entity and its construction rules.
//!
//! A [`Task`] is the only record the application stores. It can be built two
//! ways:
//!
//! - [`Task::try_new`] validates every field and reports the first problem as
//!   a [`TaskError`]. The CLI uses this for values typed on the command line.
//! - [`Task::new`] never fails. An empty description becomes
//!   [`DEFAULT_DESCRIPTION`], a missing priority becomes
//!   [`Priority::Standard`] and a missing or unparseable due date becomes
//!   today's local date.
//!
//! ## Examples
//!
//! ```rust
//! use tugas::libs::task::{today, Priority, Task};
//!
//! let before = today();
//! let task = Task::new("", None, "Database", "not-a-date");
//! assert_eq!(task.description, "No description");
//! assert_eq!(task.priority, Priority::Standard);
//! assert!(task.due_date == before || task.due_date == today());
//! ```

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Placeholder stored when a task is created without a description.
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// Storage and input format for due dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format used when due dates are shown to the user.
pub const DISPLAY_DATE_FORMAT: &str = "%d-%m-%Y";

/// Reasons a task cannot be built by [`Task::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("task description must not be empty")]
    EmptyDescription,
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),
    #[error("due date is missing")]
    MissingDueDate,
    #[error("unknown priority '{0}', expected one of: Standard, Important, Urgent")]
    UnknownPriority(String),
}

/// How pressing a task is. Informational only; nothing is ordered by it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Standard,
    Important,
    Urgent,
}

impl Priority {
    /// Every priority, in the order the entry form offers them.
    pub const ALL: [Priority; 3] = [Priority::Standard, Priority::Important, Priority::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Standard => "Standard",
            Priority::Important => "Important",
            Priority::Urgent => "Urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    /// Accepts the English labels case-insensitively, plus the Indonesian
    /// labels older databases were written with.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "standar" => Ok(Priority::Standard),
            "important" | "penting" => Ok(Priority::Important),
            "urgent" => Ok(Priority::Urgent),
            _ => Err(TaskError::UnknownPriority(s.to_string())),
        }
    }
}

/// A due date as it arrives from the caller, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DueDateInput {
    Date(NaiveDate),
    Text(String),
    Missing,
}

impl DueDateInput {
    /// Resolves the input to a date, failing on missing or malformed text.
    pub fn resolve(&self) -> Result<NaiveDate, TaskError> {
        match self {
            DueDateInput::Date(date) => Ok(*date),
            DueDateInput::Text(text) if has_date_shape(text) => {
                NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| TaskError::InvalidDueDate(text.clone()))
            }
            DueDateInput::Text(text) => Err(TaskError::InvalidDueDate(text.clone())),
            DueDateInput::Missing => Err(TaskError::MissingDueDate),
        }
    }

    /// Resolves the input to a date, substituting today on any failure.
    pub fn resolve_or_today(&self) -> NaiveDate {
        self.resolve().unwrap_or_else(|_| today())
    }
}

impl From<NaiveDate> for DueDateInput {
    fn from(date: NaiveDate) -> Self {
        DueDateInput::Date(date)
    }
}

impl From<&str> for DueDateInput {
    fn from(text: &str) -> Self {
        DueDateInput::Text(text.to_string())
    }
}

impl From<String> for DueDateInput {
    fn from(text: String) -> Self {
        DueDateInput::Text(text)
    }
}

impl<T: Into<DueDateInput>> From<Option<T>> for DueDateInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(DueDateInput::Missing)
    }
}

/// Four-digit year, then one or two digits each for month and day.
///
/// chrono alone would also take padding, a sign or a negative year.
fn has_date_shape(text: &str) -> bool {
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };

    let mut parts = text.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) => digits(year, 4, 4) && digits(month, 1, 2) && digits(day, 1, 2),
        _ => false,
    }
}

/// Current date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Assigned by the store on insert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub description: String,
    pub priority: Priority,
    /// Course the task belongs to.
    pub category: String,
    pub due_date: NaiveDate,
}

impl Task {
    /// Builds a task, replacing every invalid value with its default.
    pub fn new(description: &str, priority: Option<Priority>, category: &str, due_date: impl Into<DueDateInput>) -> Self {
        let description = if description.is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            description.to_string()
        };

        Task {
            id: None,
            description,
            priority: priority.unwrap_or_default(),
            category: category.to_string(),
            due_date: due_date.into().resolve_or_today(),
        }
    }

    /// Builds a task, rejecting an empty description or a bad due date.
    ///
    /// A missing priority still falls back to [`Priority::Standard`]; the
    /// entry form always offers a default.
    pub fn try_new(
        description: &str,
        priority: Option<Priority>,
        category: &str,
        due_date: impl Into<DueDateInput>,
    ) -> Result<Self, TaskError> {
        if description.trim().is_empty() {
            return Err(TaskError::EmptyDescription);
        }
        let due_date = due_date.into().resolve()?;

        Ok(Task {
            id: None,
            description: description.to_string(),
            priority: priority.unwrap_or_default(),
            category: category.to_string(),
            due_date,
        })
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id.map(|id| id.to_string()).unwrap_or_else(|| "None".to_string());
        write!(
            f,
            "Task(ID: {}, Date: {}, Priority: '{}', Course: '{}', Desc: '{}')",
            id,
            self.due_date.format(DISPLAY_DATE_FORMAT),
            self.priority,
            self.category,
            self.description
        )
    }
}

/// Read-only projection of a stored task, as shown in the history table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    /// Row key.
    pub id: i64,
    /// Due date formatted `DD-MM-YYYY`.
    pub due_date: String,
    pub description: String,
    pub course: String,
    pub priority: String,
}

impl TaskRow {
    /// Column labels, in display order.
    pub const HEADERS: [&'static str; 5] = ["ID", "Due Date", "Description", "Course", "Priority"];

    /// Projects a stored task. Returns `None` for a task that was never persisted.
    pub fn from_task(task: &Task) -> Option<Self> {
        Some(TaskRow {
            id: task.id?,
            due_date: task.due_date.format(DISPLAY_DATE_FORMAT).to_string(),
            description: task.description.clone(),
            course: task.category.clone(),
            priority: task.priority.to_string(),
        })
    }
}
