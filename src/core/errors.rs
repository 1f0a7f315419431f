//! Shared error types for the crate

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors, raised before a rule activates
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
