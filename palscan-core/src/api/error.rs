//! Error types for the API

use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Infrastructure error (I/O, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
