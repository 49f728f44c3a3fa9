//! Tracing subscriber setup
//!
//! Filter directives come from `SORTTY_LOG`, then `RUST_LOG`, then default to
//! `warn`. While the UI owns the terminal, stderr output would tear the screen,
//! so the interactive mode only logs when given a log file.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "warn";

fn env_filter() -> EnvFilter {
    if let Ok(directives) = std::env::var("SORTTY_LOG") {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber, writing to `log_file` or stderr
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter());

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            registry
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true),
                )
                .init();
        }
        None => {
            registry
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .without_time()
                        .compact(),
                )
                .init();
        }
    }
    Ok(())
}
