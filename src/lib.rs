//! # tugas - coursework task tracker
//!
//! A command-line utility for recording coursework tasks and reviewing them
//! later.
//!
//! ## Features
//!
//! - **Task Entry**: Interactive form or flags for description, course, priority and due date
//! - **Task History**: Table of all recorded tasks, newest due date first
//! - **Deletion**: Remove a task permanently by its ID
//! - **Configuration**: Course list and store location kept in a JSON file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tugas::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
