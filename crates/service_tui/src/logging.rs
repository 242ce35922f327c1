//! Tracing setup.
//!
//! The UI owns the terminal, so log records go to a file. `RUST_LOG` takes
//! precedence over the configured level.

use crate::config::AppConfig;
use crate::error::AppError;
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber writing to `config.log_file`.
pub fn init(config: &AppConfig) -> Result<(), AppError> {
    if let Some(parent) = config.log_file.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.log_directives())
            .map_err(|e| AppError::logging(e.to_string()))?,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
        .with(filter)
        .try_init()
        .map_err(|e| AppError::logging(e.to_string()))
}
