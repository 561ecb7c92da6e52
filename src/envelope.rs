// src/envelope.rs
//! The `Salted__` envelope layout
//!
//! ```text
//! offset 0   8 bytes   "Salted__"
//! offset 8   8 bytes   salt
//! offset 16  N bytes   AES-256-CBC ciphertext, N a positive multiple of 16
//! ```
//!
//! The whole byte string travels as standard, padded base64.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::aliases::Salt8;
use crate::consts::{BLOCK_LEN, HEADER_LEN, SALTED_MAGIC, SALT_LEN};
use crate::error::FormatError;

/// A parsed envelope: public salt plus ciphertext
pub struct Envelope {
    salt: Salt8,
    ciphertext: Vec<u8>,
}

impl Envelope {
    pub fn new(salt: Salt8, ciphertext: Vec<u8>) -> Self {
        Self { salt, ciphertext }
    }

    /// Parse base64 envelope text
    ///
    /// ASCII whitespace is ignored so line-wrapped `openssl enc -base64`
    /// output is accepted.
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let raw = decode_base64(text)?;
        Self::from_bytes(&raw)
    }

    /// Validate and split raw envelope bytes
    pub fn from_bytes(raw: &[u8]) -> Result<Self, FormatError> {
        if raw.len() < HEADER_LEN {
            return Err(FormatError::TooShort { len: raw.len() });
        }

        let (magic, rest) = raw.split_at(SALTED_MAGIC.len());
        if magic != SALTED_MAGIC {
            return Err(FormatError::MissingMagic);
        }

        let (salt_bytes, ciphertext) = rest.split_at(SALT_LEN);
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
            return Err(FormatError::UnalignedCiphertext {
                len: ciphertext.len(),
            });
        }

        let mut salt = Salt8::new([0u8; SALT_LEN]);
        salt.expose_secret_mut().copy_from_slice(salt_bytes);

        Ok(Self {
            salt,
            ciphertext: ciphertext.to_vec(),
        })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.ciphertext.len());
        out.extend_from_slice(SALTED_MAGIC);
        out.extend_from_slice(self.salt.expose_secret());
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Single-line standard base64, as stored in the credential row
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    pub fn salt(&self) -> &Salt8 {
        &self.salt
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Lowercase hex of the salt, for logs
    pub fn salt_hex(&self) -> String {
        hex::encode(self.salt.expose_secret())
    }
}

/// Cheap probe: is `text` base64 of something shaped like an envelope?
///
/// Never decrypts.
pub fn is_salted_envelope(text: &str) -> bool {
    Envelope::parse(text).is_ok()
}

fn decode_base64(text: &str) -> Result<Vec<u8>, FormatError> {
    if text.bytes().any(|b| b.is_ascii_whitespace()) {
        let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        return Ok(STANDARD.decode(compact)?);
    }
    Ok(STANDARD.decode(text)?)
}
