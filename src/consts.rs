// src/consts.rs
//! Shared constants — fixed by the legacy envelope format

/// Literal prefix of every envelope (OpenSSL `enc` salted header)
pub const SALTED_MAGIC: &[u8; 8] = b"Salted__";

/// Salt length in bytes
pub const SALT_LEN: usize = 8;

/// Prefix + salt
pub const HEADER_LEN: usize = SALTED_MAGIC.len() + SALT_LEN;

/// AES block size
pub const BLOCK_LEN: usize = 16;

/// AES-256 key length
pub const KEY_LEN: usize = 32;

/// CBC IV length
pub const IV_LEN: usize = 16;

/// Key + IV, the EVP_BytesToKey output length
pub const KEY_MATERIAL_LEN: usize = KEY_LEN + IV_LEN;

/// MD5 digest length — one derivation block
pub const MD5_LEN: usize = 16;

/// Default config file, overridden by `SALTED_CONFIG`
pub const DEFAULT_CONFIG_PATH: &str = "salted-config.toml";

/// Table holding the credential rows
pub const CREDENTIALS_TABLE: &str = "credentials_entity";
