// src/crypto/mod.rs
//! Pure cryptographic operations — no I/O, no database
//!
//! All functions work exclusively on in-memory buffers.
pub mod cipher;
pub mod kdf;
pub mod rng;

pub use cipher::{decrypt_cbc, encrypt_cbc, padded_len};
pub use kdf::{derive_key_stream, DerivedKeyMaterial};
pub use rng::{random_salt, random_salt_from};
