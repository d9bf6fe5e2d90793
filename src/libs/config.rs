//! Application configuration.
//!
//! Settings are read once at startup from `config.json` in the application
//! data directory (see [`DataStorage`]). A missing file is not an error: the
//! defaults below are used. A file that exists but cannot be parsed is.
//!
//! ## Example file
//!
//! ```json
//! {
//!   "categories": ["English", "Database", "Statistics"],
//!   "default_category": "Database",
//!   "db_path": "/home/me/tasks.db"
//! }
//! ```
//!
//! Every field is optional. Priorities are not configurable; the entry form
//! always offers the three values of [`Priority`].

use super::data_storage::DataStorage;
use super::messages::Message;
use super::task::Priority;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Store file name used when `db_path` is not configured.
pub const DB_FILE_NAME: &str = "tugas.db";

/// Courses offered by the entry form out of the box.
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "English",
    "Database",
    "Embedded Systems",
    "Artificial Intelligence",
    "Computer Networks",
    "Civics",
    "Object-Oriented Programming",
    "Statistics",
];

pub const DEFAULT_CATEGORY: &str = "Object-Oriented Programming";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Courses a task can be filed under. Only the entry form enforces this list.
    pub categories: Vec<String>,

    /// Course preselected in the entry form.
    pub default_category: String,

    /// Store file location. Defaults to `tugas.db` in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            default_category: DEFAULT_CATEGORY.to_string(),
            db_path: None,
        }
    }
}

impl Config {
    pub fn file_path() -> Result<PathBuf> {
        Ok(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    /// Reads the configuration from the data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::file_path()?)
    }

    /// Reads the configuration from `path`, falling back to defaults if the
    /// file does not exist.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config =
            serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))?;
        if config.categories.is_empty() {
            msg_bail_anyhow!(Message::ConfigNoCourses);
        }
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns whether one existed.
    pub fn delete_file() -> Result<bool> {
        let path = Self::file_path()?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// Store file to use, resolving the data-directory default.
    pub fn db_file(&self) -> Result<PathBuf> {
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => Ok(DataStorage::new().get_path(DB_FILE_NAME)?),
        }
    }

    pub fn priorities(&self) -> &'static [Priority] {
        &Priority::ALL
    }

    pub fn is_known_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Position of the default course in `categories`, or 0 if it is not listed.
    pub fn default_category_index(&self) -> usize {
        self.categories.iter().position(|c| *c == self.default_category).unwrap_or(0)
    }
}
