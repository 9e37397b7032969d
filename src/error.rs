//! Error types for the rating pipeline
//!
//! This module defines all error types using anyhow for consistent error
//! handling throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating-pipeline scenarios
#[derive(Debug, thiserror::Error)]
pub enum RatingsError {
    #[error("Failed to read dataset '{path}': {message}")]
    DatasetRead { path: String, message: String },

    #[error("Invalid dataset format in '{path}': {message}")]
    DatasetFormat { path: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Unknown team: {name}")]
    UnknownTeam { name: String },
}
