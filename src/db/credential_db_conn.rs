// src/db/credential_db_conn.rs
use rusqlite::{Connection, OpenFlags};
use std::{fs, path::Path};

use crate::consts::CREDENTIALS_TABLE;
use crate::error::Result;

/// Open (or create) the credential database at `db_path`
pub fn open_credential_db<P: AsRef<Path>>(db_path: P) -> Result<Connection> {
    if let Some(parent) = db_path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let conn = Connection::open(db_path)?;
    ensure_schema(&conn)?;
    Ok(conn)
}

/// Open an existing credential database read-write
///
/// Never creates the file or the schema; a wrong path is an error.
pub fn open_existing_credential_db<P: AsRef<Path>>(db_path: P) -> Result<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    Ok(Connection::open_with_flags(db_path, flags)?)
}

/// Throwaway database for tests and dry runs
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    ensure_schema(&conn)?;
    Ok(conn)
}

fn ensure_schema(conn: &Connection) -> Result<()> {
    Ok(conn.execute_batch(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {CREDENTIALS_TABLE} (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            data        TEXT NOT NULL,
            "createdAt" TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now')),
            "updatedAt" TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
        );
        "#
    ))?)
}
