//! Core library modules for tugas.
//!
//! - **Entity**: [`task`] holds the task record and its validation rules
//! - **Configuration**: [`config`] and [`data_storage`] locate and read settings
//! - **Presentation**: [`view`] renders tables, [`messages`] holds user-facing text
//! - **Diagnostics**: [`logging`] installs the tracing subscriber
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tugas::db::tasks::Tasks;
//! use tugas::libs::{config::Config, task::Task, view::View};
//!
//! let config = Config::read()?;
//! let tasks = Tasks::open(config.db_file()?);
//! tasks.insert(&Task::new("Read chapter 3", None, &config.default_category, "2024-03-01"));
//! View::tasks(&tasks.list());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod logging;
pub mod messages;
pub mod task;
pub mod view;
