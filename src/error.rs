use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for symptom-intake
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Invalid config file {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
