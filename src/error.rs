// src/error.rs
//! Public error types for the entire crate
//!
//! [`CodecError`] is all the envelope codec can fail with. [`CoreError`] is the
//! outer error for config, store and credential workflows.

use thiserror::Error;

/// Why an envelope could not be parsed
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("envelope too short: {len} bytes, need at least 16")]
    TooShort { len: usize },

    #[error("missing \"Salted__\" prefix")]
    MissingMagic,

    #[error("ciphertext length {len} is not a positive multiple of 16")]
    UnalignedCiphertext { len: usize },
}

/// Errors from the envelope codec
#[derive(Error, Debug)]
pub enum CodecError {
    /// Malformed envelope. Corrupted or foreign data, never retryable.
    #[error("malformed envelope: {0}")]
    Format(#[from] FormatError),

    /// Bad PKCS#7 padding after decryption. Wrong passphrase and corrupted
    /// ciphertext are indistinguishable here.
    #[error("invalid padding after decryption (wrong passphrase or corrupted data)")]
    Padding,

    /// The secure random source failed while generating a salt.
    #[error("secure random source unavailable: {0}")]
    Randomness(String),

    #[error("key derivation requires a non-empty salt")]
    EmptySalt,
}

/// Errors from the config, store and credential layers
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Decrypted credential is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Credential not found: {id}")]
    CredentialNotFound { id: String },

    #[error("Credential {id} does not hold a JSON object")]
    NotAnObject { id: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
