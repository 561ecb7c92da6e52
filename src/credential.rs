// src/credential.rs
//! Credential workflows: fetch → decode → mutate → encode → store
//!
//! Each step is a fallible call whose error reaches the caller unchanged.
//! Nothing here is cryptographic; the codec does all of that.

use serde_json::{Map, Value};
use tracing::info;

use crate::aliases::Passphrase;
use crate::codec::{decode, encode};
use crate::error::{CoreError, Result};

/// Somewhere that keeps one opaque envelope string per credential id
pub trait CredentialStore {
    fn fetch_data(&mut self, id: &str) -> Result<Option<String>>;

    /// Replace the envelope of an existing credential
    fn store_data(&mut self, id: &str, data: &str) -> Result<()>;
}

/// Result of [`update_credential_field`]
#[derive(Debug, Clone, PartialEq)]
pub struct FieldUpdate {
    pub previous: Option<Value>,
    pub current: Value,
}

/// Fetch and decrypt a credential into its JSON object
pub fn read_credential<S>(
    store: &mut S,
    id: &str,
    passphrase: &Passphrase,
) -> Result<Map<String, Value>>
where
    S: CredentialStore + ?Sized,
{
    let data = store
        .fetch_data(id)?
        .ok_or_else(|| CoreError::CredentialNotFound { id: id.to_owned() })?;

    let plaintext = decode(&data, passphrase.expose_secret().as_bytes())?;
    let text = std::str::from_utf8(plaintext.expose_secret())?;

    match serde_json::from_str(text)? {
        Value::Object(map) => Ok(map),
        _ => Err(CoreError::NotAnObject { id: id.to_owned() }),
    }
}

/// Serialize compactly and encrypt a credential object
pub fn seal_credential(
    credential: &Map<String, Value>,
    passphrase: &Passphrase,
) -> Result<String> {
    let json = serde_json::to_string(credential)?;
    Ok(encode(json.as_bytes(), passphrase.expose_secret().as_bytes())?)
}

/// Set one top-level field of a stored credential, keeping every other field
pub fn update_credential_field<S>(
    store: &mut S,
    id: &str,
    passphrase: &Passphrase,
    field: &str,
    value: Value,
) -> Result<FieldUpdate>
where
    S: CredentialStore + ?Sized,
{
    let mut credential = read_credential(store, id, passphrase)?;

    let previous = credential.insert(field.to_owned(), value.clone());
    let sealed = seal_credential(&credential, passphrase)?;
    store.store_data(id, &sealed)?;

    info!(credential_id = id, field, "credential field updated");
    Ok(FieldUpdate {
        previous,
        current: value,
    })
}
