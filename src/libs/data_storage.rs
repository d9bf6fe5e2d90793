use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "tugas";

/// Application data directory, where the config file and the default store live.
///
/// - **Windows**: `%LOCALAPPDATA%\tugas`
/// - **macOS**: `~/Library/Application Support/tugas`
/// - **Linux**: `~/.local/share/tugas`
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::at(base.join(APP_NAME))
    }

    /// Uses `base_path` directly instead of the platform directory.
    pub fn at(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` inside the data directory, creating the directory if needed.
    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
