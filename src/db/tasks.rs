use super::db::Db;
use crate::libs::task::{Priority, Task, TaskRow, DATE_FORMAT, DISPLAY_DATE_FORMAT};
use chrono::NaiveDate;
use rusqlite::params;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, warn};

const SCHEMA_TUGAS: &str = "CREATE TABLE IF NOT EXISTS tugas (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    deskripsi TEXT NOT NULL,
    tingkatan TEXT NOT NULL,
    kategori TEXT NOT NULL,
    tanggal DATE NOT NULL
);";
const INSERT_TUGAS: &str = "INSERT INTO tugas (deskripsi, tingkatan, kategori, tanggal) VALUES (?1, ?2, ?3, ?4)";
const SELECT_TUGAS: &str = "SELECT id, tanggal, deskripsi, kategori, tingkatan FROM tugas ORDER BY tanggal DESC, id DESC";
const DELETE_TUGAS: &str = "DELETE FROM tugas WHERE id = ?1";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open task store at {}: {source}", .path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("task store query failed: {0}")]
    Query(#[from] rusqlite::Error),
    #[error("no task with ID {0}")]
    NotFound(i64),
    #[error("stored due date '{0}' is not a valid date")]
    InvalidStoredDate(String),
}

/// A row exactly as it sits in the `tugas` table.
struct StoredRow {
    id: i64,
    tanggal: String,
    deskripsi: String,
    kategori: String,
    tingkatan: String,
}

impl StoredRow {
    fn due_date(&self) -> Result<NaiveDate, StoreError> {
        NaiveDate::parse_from_str(&self.tanggal, DATE_FORMAT).map_err(|_| StoreError::InvalidStoredDate(self.tanggal.clone()))
    }

    fn into_task(self) -> Result<Task, StoreError> {
        let due_date = self.due_date()?;
        let priority = self.tingkatan.parse::<Priority>().unwrap_or_else(|_| {
            warn!(id = self.id, priority = %self.tingkatan, "unknown stored priority, reading as Standard");
            Priority::Standard
        });

        Ok(Task {
            id: Some(self.id),
            description: self.deskripsi,
            priority,
            category: self.kategori,
            due_date,
        })
    }

    fn into_display_row(self) -> Result<TaskRow, StoreError> {
        let due_date = self.due_date()?;

        Ok(TaskRow {
            id: self.id,
            due_date: due_date.format(DISPLAY_DATE_FORMAT).to_string(),
            description: self.deskripsi,
            course: self.kategori,
            priority: self.tingkatan,
        })
    }
}

/// Data access for the `tugas` table.
///
/// Holds only the store location. Each operation opens a fresh connection
/// and drops it before returning, so a `Tasks` value can live for the whole
/// process and be shared by reference.
///
/// The plain operations (`insert`, `list`, `delete`, `initialize`) never
/// fail: store errors are logged and turned into `false` or an empty list.
/// The `try_*` variants return the underlying [`StoreError`].
#[derive(Debug, Clone)]
pub struct Tasks {
    path: PathBuf,
}

impl Tasks {
    /// Points at the store file and makes sure the table exists.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let tasks = Tasks { path: path.into() };
        tasks.initialize();
        tasks
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Db, StoreError> {
        Db::open(&self.path).map_err(|source| StoreError::Connection {
            path: self.path.clone(),
            source,
        })
    }

    /// Creates the table if missing. Safe to call any number of times.
    pub fn initialize(&self) -> bool {
        match self.try_initialize() {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "failed to create task table");
                false
            }
        }
    }

    pub fn try_initialize(&self) -> Result<(), StoreError> {
        let db = self.connect()?;
        db.conn.execute(SCHEMA_TUGAS, [])?;
        Ok(())
    }

    /// Stores a new task. True only if the store handed back a row ID.
    pub fn insert(&self, task: &Task) -> bool {
        match self.try_insert(task) {
            Ok(id) if id > 0 => {
                debug!(id, "task inserted");
                true
            }
            Ok(id) => {
                error!(id, "task insert reported no row ID");
                false
            }
            Err(e) => {
                error!(error = %e, "failed to insert task");
                false
            }
        }
    }

    /// Stores a new task and returns its row ID.
    ///
    /// The insert runs in its own transaction; an error drops the
    /// transaction, which rolls it back.
    pub fn try_insert(&self, task: &Task) -> Result<i64, StoreError> {
        let mut db = self.connect()?;
        let tx = db.conn.transaction()?;
        tx.execute(
            INSERT_TUGAS,
            params![
                task.description,
                task.priority.as_str(),
                task.category,
                task.due_date.format(DATE_FORMAT).to_string()
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(id)
    }

    /// All tasks as display rows, latest due date first, then latest ID.
    /// Empty on any store error.
    pub fn list(&self) -> Vec<TaskRow> {
        self.try_list().unwrap_or_else(|e| {
            error!(error = %e, "failed to list tasks");
            Vec::new()
        })
    }

    pub fn try_list(&self) -> Result<Vec<TaskRow>, StoreError> {
        self.fetch_rows()?.into_iter().map(StoredRow::into_display_row).collect()
    }

    /// All tasks as entities, in the same order as [`Tasks::list`].
    pub fn try_fetch_all(&self) -> Result<Vec<Task>, StoreError> {
        self.fetch_rows()?.into_iter().map(StoredRow::into_task).collect()
    }

    fn fetch_rows(&self) -> Result<Vec<StoredRow>, StoreError> {
        let db = self.connect()?;
        let mut stmt = db.conn.prepare(SELECT_TUGAS)?;
        let row_iter = stmt.query_map([], |row| {
            Ok(StoredRow {
                id: row.get(0)?,
                tanggal: row.get(1)?,
                deskripsi: row.get(2)?,
                kategori: row.get(3)?,
                tingkatan: row.get(4)?,
            })
        })?;

        let mut rows = Vec::new();
        for row in row_iter {
            rows.push(row?);
        }
        Ok(rows)
    }

    /// Removes a task permanently. True only if exactly one row went away;
    /// an unknown ID is reported as `false` like any other failure.
    pub fn delete(&self, id: i64) -> bool {
        match self.try_delete(id) {
            Ok(()) => {
                debug!(id, "task deleted");
                true
            }
            Err(StoreError::NotFound(id)) => {
                warn!(id, "no task to delete");
                false
            }
            Err(e) => {
                error!(id, error = %e, "failed to delete task");
                false
            }
        }
    }

    pub fn try_delete(&self, id: i64) -> Result<(), StoreError> {
        let mut db = self.connect()?;
        let tx = db.conn.transaction()?;
        let affected = tx.execute(DELETE_TUGAS, params![id])?;
        if affected != 1 {
            tx.rollback()?;
            return Err(StoreError::NotFound(id));
        }
        tx.commit()?;

        Ok(())
    }
}
