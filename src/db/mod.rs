// src/db/mod.rs
pub mod credential_db_conn;
pub mod credential_db_ops;

pub use credential_db_conn::{
    open_credential_db, open_existing_credential_db, open_in_memory,
};
pub use credential_db_ops::SqliteCredentialStore;
