//! Error types for the terminal browser.

use thiserror::Error;

/// Startup and terminal errors.
///
/// Catalog failures never reach this type: they are logged where the fetch
/// runs and the screen settles empty.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// IO error (terminal, log file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging could not be initialised
    #[error("Logging error: {0}")]
    Logging(String),
}

impl AppError {
    /// Create a logging error
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
