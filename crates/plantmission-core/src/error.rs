//! Error types for the plant mission core.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all garden operations.
///
/// Domain-rule violations (`AlreadyCompleted`, `UnknownMission`,
/// `InvalidPlantReference`) are recoverable: the command is rejected and the
/// state is left untouched.
#[derive(Error, Debug)]
pub enum GardenError {
    /// The mission has already been recorded in the ledger
    #[error("Mission with ID {id} is already completed")]
    AlreadyCompleted { id: u64 },
    /// No generated mission carries the given ID
    #[error("Mission with ID {id} not found")]
    UnknownMission { id: u64 },
    /// No plant carries the given ID
    #[error("Plant with ID {id} not found")]
    InvalidPlantReference { id: u64 },
    /// A persisted slice failed structural validation
    #[error("Malformed snapshot slice '{key}': {reason}")]
    MalformedSnapshot { key: String, reason: String },
    /// A cross-field invariant does not hold
    #[error("Invariant violation: {message}")]
    InvariantViolation { message: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> GardenError {
        GardenError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> GardenError {
        GardenError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl GardenError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a malformed snapshot error for the given slice key.
    pub fn malformed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedSnapshot {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invariant violation error.
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }

    /// Returns true for errors that reject a command without touching state.
    pub fn is_domain_rule(&self) -> bool {
        matches!(
            self,
            Self::AlreadyCompleted { .. }
                | Self::UnknownMission { .. }
                | Self::InvalidPlantReference { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| GardenError::database(message).with_source(e))
    }
}

/// Result type alias for garden operations
pub type Result<T> = std::result::Result<T, GardenError>;
