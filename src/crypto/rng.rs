// src/crypto/rng.rs
//! Salt generation from a cryptographically secure source
//!
//! `OsRng` is a zero-sized handle onto the operating system CSPRNG, so every
//! call is independent and safe to run from any thread. Failures are surfaced,
//! never papered over with a weaker generator.

use rand::rngs::OsRng;
use rand::TryCryptoRng;

use crate::aliases::Salt8;
use crate::consts::SALT_LEN;
use crate::error::CodecError;

/// Fresh 8-byte salt from the OS CSPRNG
#[inline]
pub fn random_salt() -> Result<Salt8, CodecError> {
    random_salt_from(&mut OsRng)
}

/// Fresh 8-byte salt from a caller-supplied CSPRNG
pub fn random_salt_from<R>(rng: &mut R) -> Result<Salt8, CodecError>
where
    R: TryCryptoRng + ?Sized,
{
    let mut salt = Salt8::new([0u8; SALT_LEN]);
    rng.try_fill_bytes(salt.expose_secret_mut())
        .map_err(|e| CodecError::Randomness(e.to_string()))?;
    Ok(salt)
}
