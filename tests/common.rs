// tests/common.rs
//! Shared test utilities — logging setup and fixtures

#![allow(dead_code)]

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Passphrase used by every scenario test
pub const PASSPHRASE: &str = "tmoe6lnXCkgJDlWj4AvQCXX9QDdMQIF2";

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent — safe to call multiple times
}

/// Raw decoded bytes of envelope text
pub fn envelope_bytes(envelope: &str) -> Vec<u8> {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    STANDARD.decode(envelope).expect("valid base64")
}

/// Re-encode raw envelope bytes as text
pub fn envelope_text(bytes: &[u8]) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    STANDARD.encode(bytes)
}
