// src/config/defaults.rs
use crate::config::app::{Credential, Store};

pub const ENV_CONFIG: &str = "SALTED_CONFIG";
pub const ENV_ENCRYPTION_KEY: &str = "SALTED_ENCRYPTION_KEY";
pub const ENV_STORE_PATH: &str = "SALTED_STORE_PATH";

pub const DEFAULT_CREDENTIAL_ID: &str = "c7OfsVIzconTwQgh";
pub const DEFAULT_CREDENTIAL_NAME: &str = "IBM VPC SSH Key";
pub const DEFAULT_FIELD: &str = "host";
pub const DEFAULT_STORE_PATH: &str = "credentials.sqlite";

pub fn default_credential_name() -> String {
    DEFAULT_CREDENTIAL_NAME.into()
}

pub fn default_field() -> String {
    DEFAULT_FIELD.into()
}

pub fn default_credential() -> Credential {
    Credential {
        id: DEFAULT_CREDENTIAL_ID.into(),
        name: default_credential_name(),
        field: default_field(),
    }
}

pub fn default_store() -> Store {
    Store {
        path: DEFAULT_STORE_PATH.into(),
    }
}
