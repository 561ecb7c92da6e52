// src/db/credential_db_ops.rs
//! Credential row operations
//!
//! The store only ever sees envelope text. It never decrypts.

use rusqlite::{params, Connection, OptionalExtension};

use crate::consts::CREDENTIALS_TABLE;
use crate::credential::CredentialStore;
use crate::error::{CoreError, Result};

use super::credential_db_conn::{
    open_credential_db, open_existing_credential_db, open_in_memory,
};

/// SQLite-backed [`CredentialStore`]
pub struct SqliteCredentialStore {
    conn: Connection,
}

impl SqliteCredentialStore {
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Ok(Self::from_connection(open_credential_db(path)?))
    }

    /// Like [`Self::open`], but fails instead of creating a missing database
    pub fn open_existing<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Ok(Self::from_connection(open_existing_credential_db(path)?))
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::from_connection(open_in_memory()?))
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Insert a new credential row holding `data` (envelope text)
    pub fn insert_credential(&self, id: &str, name: &str, data: &str) -> Result<()> {
        self.conn.execute(
            &format!("INSERT INTO {CREDENTIALS_TABLE} (id, name, data) VALUES (?1, ?2, ?3)"),
            params![id, name, data],
        )?;
        Ok(())
    }

    /// Last modification timestamp of a credential row
    pub fn updated_at(&self, id: &str) -> Result<Option<String>> {
        let ts = self
            .conn
            .query_row(
                &format!(r#"SELECT "updatedAt" FROM {CREDENTIALS_TABLE} WHERE id = ?1"#),
                [id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(ts)
    }
}

impl CredentialStore for SqliteCredentialStore {
    fn fetch_data(&mut self, id: &str) -> Result<Option<String>> {
        let data = self
            .conn
            .query_row(
                &format!("SELECT data FROM {CREDENTIALS_TABLE} WHERE id = ?1"),
                [id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(data)
    }

    fn store_data(&mut self, id: &str, data: &str) -> Result<()> {
        let rows = self.conn.execute(
            &format!(
                r#"UPDATE {CREDENTIALS_TABLE}
                   SET data = ?1, "updatedAt" = strftime('%Y-%m-%d %H:%M:%f', 'now')
                   WHERE id = ?2"#
            ),
            params![data, id],
        )?;
        if rows == 0 {
            return Err(CoreError::CredentialNotFound { id: id.to_owned() });
        }
        Ok(())
    }
}
