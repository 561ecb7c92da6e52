// src/codec.rs
//! Envelope codec — salt, derive, encrypt, serialize (and back)
//!
//! Every call is self-contained: no state survives between calls and all key
//! material is wiped before returning.

use rand::TryCryptoRng;
use tracing::debug;

use crate::aliases::{PlainText, Salt8};
use crate::crypto::{
    decrypt_cbc, encrypt_cbc, random_salt, random_salt_from, DerivedKeyMaterial,
};
use crate::envelope::Envelope;
use crate::error::CodecError;

/// Encrypt `plaintext` into base64 `Salted__` envelope text
///
/// Only fails if the OS random source is unavailable.
pub fn encode(plaintext: &[u8], passphrase: &[u8]) -> Result<String, CodecError> {
    let salt = random_salt()?;
    encode_with_salt(plaintext, passphrase, &salt)
}

/// [`encode`] with a caller-supplied CSPRNG for the salt
pub fn encode_with_rng<R>(
    plaintext: &[u8],
    passphrase: &[u8],
    rng: &mut R,
) -> Result<String, CodecError>
where
    R: TryCryptoRng + ?Sized,
{
    let salt = random_salt_from(rng)?;
    encode_with_salt(plaintext, passphrase, &salt)
}

/// Deterministic encoding under a fixed salt
///
/// Reusing a salt with the same passphrase makes ciphertexts correlatable.
/// Meant for interop vectors and tests; production code calls [`encode`].
pub fn encode_with_salt(
    plaintext: &[u8],
    passphrase: &[u8],
    salt: &Salt8,
) -> Result<String, CodecError> {
    let material = DerivedKeyMaterial::derive(passphrase, salt)?;
    let ciphertext = encrypt_cbc(material.key(), material.iv(), plaintext);

    let envelope = Envelope::new(Salt8::new(*salt.expose_secret()), ciphertext);
    debug!(
        plaintext_len = plaintext.len(),
        ciphertext_len = envelope.ciphertext().len(),
        salt = %envelope.salt_hex(),
        "encoded Salted__ envelope"
    );
    Ok(envelope.to_base64())
}

/// Decrypt base64 `Salted__` envelope text back to plaintext
///
/// Fails with [`CodecError::Format`] for malformed envelopes and
/// [`CodecError::Padding`] for a wrong passphrase or corrupted ciphertext.
pub fn decode(envelope: &str, passphrase: &[u8]) -> Result<PlainText, CodecError> {
    let envelope = Envelope::parse(envelope)?;
    decode_envelope(&envelope, passphrase)
}

/// Decrypt an already parsed [`Envelope`]
pub fn decode_envelope(envelope: &Envelope, passphrase: &[u8]) -> Result<PlainText, CodecError> {
    let material = DerivedKeyMaterial::derive(passphrase, envelope.salt())?;
    let plaintext = decrypt_cbc(material.key(), material.iv(), envelope.ciphertext())?;

    debug!(
        ciphertext_len = envelope.ciphertext().len(),
        plaintext_len = plaintext.expose_secret().len(),
        salt = %envelope.salt_hex(),
        "decoded Salted__ envelope"
    );
    Ok(plaintext)
}
