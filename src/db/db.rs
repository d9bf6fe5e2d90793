use rusqlite::Connection;
use std::path::Path;

/// A single open connection to the task store.
///
/// Opened per operation and closed when dropped, on success and error paths
/// alike.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn open(path: &Path) -> rusqlite::Result<Db> {
        let conn = Connection::open(path)?;
        Ok(Db { conn })
    }
}
