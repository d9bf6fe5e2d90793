//! Database layer for tugas.
//!
//! A single SQLite file holding a single table, `tugas`. Every operation
//! opens its own connection through [`db::Db`] and closes it before
//! returning; nothing is pooled and no transaction spans two operations.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tugas::db::tasks::Tasks;
//! use tugas::libs::task::{Priority, Task};
//!
//! let tasks = Tasks::open("tasks.db");
//! let task = Task::new("Finish lab report", Some(Priority::Urgent), "Database", "2024-03-01");
//! assert!(tasks.insert(&task));
//!
//! for row in tasks.list() {
//!     println!("{} {} {}", row.id, row.due_date, row.description);
//! }
//! ```

/// Connection handle.
pub mod db;

/// Task table operations: initialize, insert, list, delete.
pub mod tasks;
