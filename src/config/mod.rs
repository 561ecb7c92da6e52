// src/config/mod.rs
//! Configuration for the credential tooling
//!
//! TOML file + env overrides, built once by the caller and passed down.
//! The codec itself takes no configuration.

pub use app::{Config, Credential, Keys, Store};
pub use defaults::{ENV_CONFIG, ENV_ENCRYPTION_KEY, ENV_STORE_PATH};

mod app;
mod defaults;
