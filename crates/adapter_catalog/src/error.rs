//! Catalog error types.

use thiserror::Error;

/// Errors raised while talking to the character catalog.
///
/// The UI does not tell these apart: any of them means "nothing to show",
/// and is logged at the call site.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request could not be sent or the body could not be read
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Catalog returned HTTP {status} for {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Body was not the expected envelope
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A list request asked for zero characters
    #[error("Invalid limit: {0} (must be at least 1)")]
    InvalidLimit(usize),
}

impl CatalogError {
    /// Whether the failure happened before any response arrived.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = CatalogError::Status {
            status: 503,
            url: "http://localhost/characters".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Catalog returned HTTP 503 for http://localhost/characters"
        );
        assert!(!err.is_network());
    }

    #[test]
    fn test_decode_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CatalogError = serde_err.into();
        assert!(err.to_string().starts_with("Decode error"));
    }

    #[test]
    fn test_invalid_limit_display() {
        assert!(CatalogError::InvalidLimit(0).to_string().contains("at least 1"));
    }
}
