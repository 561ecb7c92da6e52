// src/aliases.rs
//! Secret buffer types built on secure-gate
//!
//! These are the canonical types used throughout salted-envelope. Every alias
//! zeroizes its contents on drop, so key material and decoded plaintext are
//! wiped on every exit path, including errors.
//!
//! All access goes through `.expose_secret()` / `.expose_secret_mut()`.

pub use secure_gate::{dynamic_alias, fixed_alias};

// Generic fixed-size secret buffer
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type Block16 = SpanBuffer<16>; // CBC working block
pub type Md5Block16 = SpanBuffer<16>; // one MD5 digest in the derivation chain

// Fixed-size secrets
fixed_alias!(Aes256Key32, 32); // AES-256 key, first 32 bytes of key material
fixed_alias!(Iv16, 16); // CBC IV, last 16 bytes of key material
fixed_alias!(KeyMaterial48, 48); // full EVP_BytesToKey output
fixed_alias!(Salt8, 8); // public, but kept in the same wrapper family

// Dynamic secrets
dynamic_alias!(Passphrase, String);
dynamic_alias!(PlainText, Vec<u8>);
