//! br-ids - Main entry point
//!
//! Reads `<kind> <value>` lines from stdin and writes one JSON report per
//! line to stdout. Logs go to stderr.

use anyhow::Result;
use br_identifiers::checker::check_line;
use br_identifiers::{Config, ValidationMetrics};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can drive the fallback filter
    let config = Config::from_env();
    let fallback = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only, stdout carries the reports)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
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

    info!(
        format_style = ?config.format_style,
        max_input_length = config.max_input_length,
        "Starting br-ids"
    );

    let metrics = ValidationMetrics::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let report = check_line(&line, &config, &metrics);
        serde_json::to_writer(&mut out, &report)?;
        writeln!(out)?;
    }
    out.flush()?;

    info!("{}", metrics.summary());
    Ok(())
}
