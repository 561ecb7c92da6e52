// src/lib.rs
//! salted-envelope — OpenSSL-compatible `Salted__` envelopes for small secrets
//!
//! Features:
//! - EVP_BytesToKey (MD5, one iteration) key/IV derivation, bit-exact
//! - AES-256-CBC with PKCS#7 padding
//! - Base64 `Salted__ || salt || ciphertext` envelopes
//! - Zeroize-on-drop key material and plaintext via secure-gate
//! - Thin credential tooling on top: TOML config, SQLite store, field update

pub mod aliases;
pub mod codec;
pub mod config;
pub mod consts;
pub mod credential;
pub mod crypto;
pub mod db;
pub mod envelope;
pub mod error;

// Re-export everything users need at the crate root
pub use aliases::{Passphrase, PlainText, Salt8};
pub use codec::{decode, decode_envelope, encode, encode_with_rng, encode_with_salt};
pub use config::Config;
pub use credential::{
    read_credential, seal_credential, update_credential_field, CredentialStore, FieldUpdate,
};
pub use db::SqliteCredentialStore;
pub use envelope::{is_salted_envelope, Envelope};
pub use error::{CodecError, CoreError, FormatError};
