//! Custom error types for tally
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every failing command maps to exactly one
//! of these kinds, printed on stderr with a non-zero exit status.

use thiserror::Error;

/// The main error type for tally operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// No entity (or record at the requested offset) matched the input
    #[error("{entity} not found: {input}")]
    NotFound { entity: &'static str, input: String },

    /// A partial name matched more than one entity
    #[error("multiple {entity} names match '{input}': {names}. Be more specific.", names = .matches.join(", "))]
    Ambiguous {
        entity: &'static str,
        input: String,
        matches: Vec<String>,
    },

    /// A required field was absent and no default is configured
    #[error("{0}")]
    MissingInput(String),

    /// Malformed user input (amount, date, config value)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The shared database is unavailable, locked, or does not match the
    /// expected schema
    #[error("Storage error: {0}")]
    Persistence(String),

    /// Configuration file errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl TallyError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(input: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "Account",
            input: input.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(input: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "Category",
            input: input.into(),
        }
    }

    /// Create a "not found" error for records
    pub fn record_not_found(input: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "Record",
            input: input.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an "ambiguous match" error
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<rusqlite::Error> for TallyError {
    fn from(err: rusqlite::Error) -> Self {
        use rusqlite::ffi::ErrorCode;

        match &err {
            rusqlite::Error::SqliteFailure(inner, _)
                if matches!(
                    inner.code,
                    ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked
                ) =>
            {
                Self::Persistence(
                    "the shared database is locked by another process; try again".into(),
                )
            }
            _ => Self::Persistence(err.to_string()),
        }
    }
}

/// Result type alias for tally operations
pub type TallyResult<T> = Result<T, TallyError>;
