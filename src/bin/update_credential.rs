// src/bin/update_credential.rs
//! Point a stored credential at a new host
//!
//! Usage: update_credential <NEW_HOST> [--config PATH] [--field NAME]

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use salted_envelope::{update_credential_field, Config, SqliteCredentialStore};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "update_credential", about = "Update the host of an encrypted credential")]
struct Args {
    /// New IP address for the credential
    new_host: IpAddr,

    /// Config file (defaults to $SALTED_CONFIG, then salted-config.toml)
    #[arg(long, env = "SALTED_CONFIG")]
    config: Option<PathBuf>,

    /// JSON field to replace (defaults to the configured field)
    #[arg(long)]
    field: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::load(args.config.as_deref()).context("failed to load configuration")?;
    let passphrase = config.passphrase()?;
    let field = args.field.unwrap_or_else(|| config.credential.field.clone());

    let mut store = SqliteCredentialStore::open_existing(&config.store.path)
        .with_context(|| format!("failed to open credential store {}", config.store.path.display()))?;

    info!(
        credential = %config.credential.name,
        id = %config.credential.id,
        "updating credential"
    );

    let update = update_credential_field(
        &mut store,
        &config.credential.id,
        &passphrase,
        &field,
        Value::String(args.new_host.to_string()),
    )
    .with_context(|| format!("failed to update credential {}", config.credential.name))?;

    match update.previous.as_ref() {
        Some(Value::String(prev)) => println!("Current {field}: {prev}"),
        Some(prev) => println!("Current {field}: {prev}"),
        None => println!("Current {field}: <unset>"),
    }
    println!("✓ Updated {field} to: {}", args.new_host);
    println!("✓ Credential updated successfully");

    Ok(())
}
