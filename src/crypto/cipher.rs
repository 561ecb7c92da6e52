// src/crypto/cipher.rs
//! AES-256-CBC with PKCS#7 padding — in-memory, one block at a time

use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes256Dec, Aes256Enc, Block as AesBlock};

use crate::aliases::{Aes256Key32, Block16, Iv16, PlainText};
use crate::consts::BLOCK_LEN;
use crate::error::CodecError;

/// Ciphertext length for a plaintext of `len` bytes (always at least one pad byte)
#[inline]
pub const fn padded_len(len: usize) -> usize {
    (len / BLOCK_LEN + 1) * BLOCK_LEN
}

#[inline(always)]
fn xor_in_place(block: &mut [u8], other: &[u8; BLOCK_LEN]) {
    for (b, o) in block.iter_mut().zip(other) {
        *b ^= o;
    }
}

/// Encrypt `plaintext` under `key`/`iv`, PKCS#7-padded
pub fn encrypt_cbc(key: &Aes256Key32, iv: &Iv16, plaintext: &[u8]) -> Vec<u8> {
    let cipher = Aes256Enc::new(key.expose_secret().into());
    let out_len = padded_len(plaintext.len());
    let pad = (out_len - plaintext.len()) as u8;

    let mut out = Vec::with_capacity(out_len);
    let mut prev: [u8; BLOCK_LEN] = *iv.expose_secret();
    let mut block = Block16::new([0u8; BLOCK_LEN]);

    for start in (0..out_len).step_by(BLOCK_LEN) {
        let end = (start + BLOCK_LEN).min(plaintext.len());
        let tail = &plaintext[start.min(end)..end];
        let buf = block.expose_secret_mut();
        buf[..tail.len()].copy_from_slice(tail);
        buf[tail.len()..].fill(pad);

        xor_in_place(buf, &prev);
        cipher.encrypt_block(AesBlock::from_mut_slice(buf));

        prev.copy_from_slice(buf);
        out.extend_from_slice(buf);
    }

    out
}

/// Decrypt `ciphertext` under `key`/`iv` and strip PKCS#7 padding
///
/// Fails with [`CodecError::Padding`] when the length is not a positive
/// multiple of 16 or the padding bytes are malformed. The partially decrypted
/// buffer is zeroized in that case.
pub fn decrypt_cbc(
    key: &Aes256Key32,
    iv: &Iv16,
    ciphertext: &[u8],
) -> Result<PlainText, CodecError> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(CodecError::Padding);
    }

    let cipher = Aes256Dec::new(key.expose_secret().into());
    let mut plaintext = PlainText::new(ciphertext.to_vec());
    let mut prev: [u8; BLOCK_LEN] = *iv.expose_secret();

    for chunk in plaintext.expose_secret_mut().chunks_exact_mut(BLOCK_LEN) {
        let mut current = [0u8; BLOCK_LEN];
        current.copy_from_slice(chunk);

        cipher.decrypt_block(AesBlock::from_mut_slice(chunk));
        xor_in_place(chunk, &prev);

        prev = current;
    }

    let len = unpadded_len(plaintext.expose_secret())?;
    plaintext.expose_secret_mut().truncate(len);
    Ok(plaintext)
}

/// Validate PKCS#7 padding and return the length of the unpadded data
fn unpadded_len(data: &[u8]) -> Result<usize, CodecError> {
    let pad = *data.last().ok_or(CodecError::Padding)?;
    let pad_len = pad as usize;
    if pad_len == 0 || pad_len > BLOCK_LEN || pad_len > data.len() {
        return Err(CodecError::Padding);
    }

    let (body, padding) = data.split_at(data.len() - pad_len);
    // inspect every pad byte, no early exit
    let mismatch = padding.iter().fold(0u8, |acc, &b| acc | (b ^ pad));
    if mismatch != 0 {
        return Err(CodecError::Padding);
    }

    Ok(body.len())
}
