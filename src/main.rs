//! Address Book - Main entry point
//!
//! Reads contacts from stdin, one `name,phone,...` line each, and prints the
//! resulting address book sorted by name.

use address_book::{loader, Config};
use anyhow::Result;
use std::io::{self, BufWriter, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Logging goes to stderr so stdout carries only the listing
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let book = loader::load(io::stdin().lock(), config.separator)?;
    info!(contacts = book.len(), "Address book loaded");

    let mut records: Vec<_> = book.iter().collect();
    records.sort_by(|a, b| a.name().cmp(b.name()));

    let mut out = BufWriter::new(io::stdout().lock());
    for record in records {
        writeln!(out, "{}", record)?;
    }
    out.flush()?;

    Ok(())
}
