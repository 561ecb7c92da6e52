// src/config/app.rs
use super::defaults::*;
use crate::aliases::Passphrase;
use crate::consts::DEFAULT_CONFIG_PATH;
use crate::error::{CoreError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_credential")]
    pub credential: Credential,
    #[serde(default)]
    pub keys: Keys,
    #[serde(default = "default_store")]
    pub store: Store,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credential {
    pub id: String,
    #[serde(default = "default_credential_name")]
    pub name: String,
    #[serde(default = "default_field")]
    pub field: String,
}

#[derive(Clone, Default, Deserialize)]
pub struct Keys {
    pub encryption_key: Option<String>,
}

// never print the key
impl std::fmt::Debug for Keys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keys")
            .field(
                "encryption_key",
                &self.encryption_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Store {
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credential: default_credential(),
            keys: Keys::default(),
            store: default_store(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CoreError::Config(format!("invalid TOML: {e}")))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load config for a binary: explicit path, else `SALTED_CONFIG`, else
    /// `salted-config.toml`. A missing file falls back to defaults. Env
    /// overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => std::env::var(ENV_CONFIG)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH)),
        };

        let mut conf = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            warn!(path = %config_path.display(), "config file not found, using built-in defaults");
            Self::default()
        };

        conf.apply_env_overrides();
        Ok(conf)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(ENV_ENCRYPTION_KEY) {
            self.keys.encryption_key = Some(key);
        }
        if let Ok(path) = std::env::var(ENV_STORE_PATH) {
            self.store.path = PathBuf::from(path);
        }
    }

    /// The shared passphrase, wrapped so it is wiped on drop
    pub fn passphrase(&self) -> Result<Passphrase> {
        self.keys
            .encryption_key
            .as_ref()
            .filter(|k| !k.is_empty())
            .map(|k| Passphrase::new(k.clone()))
            .ok_or_else(|| {
                CoreError::Config(format!(
                    "no encryption key configured (set [keys].encryption_key or {ENV_ENCRYPTION_KEY})"
                ))
            })
    }
}
