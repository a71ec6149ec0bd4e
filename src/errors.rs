//! Unified application error type.
//! Store, storage backends, CLI and HTTP layer all return AppError so that
//! every failure maps to exactly one user-visible message and status.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Validation (client input)
    // ---------------------------
    #[error("Missing required log fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ---------------------------
    // Lookup
    // ---------------------------
    #[error("Time log with ID {0} not found")]
    NotFound(u64),

    // ---------------------------
    // Durable storage
    // ---------------------------
    #[error("Failed to persist logs to {target}: {source}")]
    Persistence {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read logs from {target}: {source}")]
    Load {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("Data file {path} is corrupt: {reason}")]
    CorruptData { path: String, reason: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration from {path}: {reason}")]
    ConfigLoad { path: String, reason: String },

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for errors caused by bad client input (HTTP 400).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::MissingFields(_)
                | AppError::InvalidField { .. }
                | AppError::InvalidBody(_)
                | AppError::InvalidArgument(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
