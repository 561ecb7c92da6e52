// src/crypto/kdf.rs
//! EVP_BytesToKey (MD5, one iteration) — out-param, zeroizing intermediates
//!
//! `D_1 = MD5(passphrase || salt)`, `D_i = MD5(D_{i-1} || passphrase || salt)`,
//! output is `D_1 || D_2 || ...` truncated to the requested length.
//! This is weak by modern standards. It is kept bit-exact because the envelope
//! format depends on it.

use md5::digest::generic_array::GenericArray;
use md5::{Digest, Md5};

use crate::aliases::{Aes256Key32, Iv16, KeyMaterial48, Md5Block16, Salt8};
use crate::consts::{IV_LEN, KEY_LEN, KEY_MATERIAL_LEN, MD5_LEN};
use crate::error::CodecError;

/// Derive `out.len()` bytes of key stream directly into the caller's buffer
///
/// Deterministic: identical `(passphrase, salt, out.len())` always yields
/// identical bytes. An empty salt is rejected.
pub fn derive_key_stream(
    passphrase: &[u8],
    salt: &[u8],
    out: &mut [u8],
) -> Result<(), CodecError> {
    if salt.is_empty() {
        return Err(CodecError::EmptySalt);
    }

    let mut hasher = Md5::new();
    let mut block = Md5Block16::new([0u8; MD5_LEN]);
    let mut filled = 0;

    while filled < out.len() {
        if filled > 0 {
            hasher.update(block.expose_secret());
        }
        hasher.update(passphrase);
        hasher.update(salt);
        hasher.finalize_into_reset(GenericArray::from_mut_slice(block.expose_secret_mut()));

        let take = (out.len() - filled).min(MD5_LEN);
        out[filled..filled + take].copy_from_slice(&block.expose_secret()[..take]);
        filled += take;
    }

    Ok(())
}

/// The 48 bytes of key material for one encode/decode call
///
/// Key and IV are wiped when this value drops.
pub struct DerivedKeyMaterial {
    key: Aes256Key32,
    iv: Iv16,
}

impl DerivedKeyMaterial {
    /// Expand `passphrase` and `salt` into an AES-256 key and a CBC IV
    pub fn derive(passphrase: &[u8], salt: &Salt8) -> Result<Self, CodecError> {
        let mut material = KeyMaterial48::new([0u8; KEY_MATERIAL_LEN]);
        derive_key_stream(passphrase, salt.expose_secret(), material.expose_secret_mut())?;

        let (key_bytes, iv_bytes) = material.expose_secret().split_at(KEY_LEN);
        let mut key = Aes256Key32::new([0u8; KEY_LEN]);
        let mut iv = Iv16::new([0u8; IV_LEN]);
        key.expose_secret_mut().copy_from_slice(key_bytes);
        iv.expose_secret_mut().copy_from_slice(iv_bytes);

        Ok(Self { key, iv })
    }

    #[inline]
    pub fn key(&self) -> &Aes256Key32 {
        &self.key
    }

    #[inline]
    pub fn iv(&self) -> &Iv16 {
        &self.iv
    }
}
