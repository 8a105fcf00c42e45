//! Error types for the docket library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all tracker operations.
///
/// Variants fall into two groups: validation failures (missing input,
/// unknown item or list) and everything else. Request handlers use
/// [`DocketError::is_validation`] to tell them apart.
#[derive(Error, Debug)]
pub enum DocketError {
    /// Database connection or query errors
    #[error("Database error: {message}: {source}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Item not found for the given ID
    #[error("Task with ID {id} not found")]
    ItemNotFound { id: u64 },
    /// No list carries the given title
    #[error("List '{title}' not found")]
    ListNotFound { title: String },
    /// Invalid input validation errors
    #[error("{reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
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
    pub fn with_source(self, source: rusqlite::Error) -> DocketError {
        DocketError::Database {
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
    pub fn with_reason(self, reason: impl Into<String>) -> DocketError {
        DocketError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl DocketError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns true for errors caused by the request rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ItemNotFound { .. } | Self::ListNotFound { .. } | Self::InvalidInput { .. }
        )
    }

    pub(crate) fn join(e: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {e}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| DocketError::database(message).with_source(e))
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, DocketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(DocketError::ItemNotFound { id: 3 }.is_validation());
        assert!(DocketError::ListNotFound {
            title: "Chores".to_string()
        }
        .is_validation());
        assert!(DocketError::invalid_input("content")
            .with_reason("Content is required!")
            .is_validation());

        let db_err = DocketError::database("Failed to insert item")
            .with_source(rusqlite::Error::QueryReturnedNoRows);
        assert!(!db_err.is_validation());
        assert!(!DocketError::XdgDirectory("no home".to_string()).is_validation());
    }

    #[test]
    fn test_messages_are_user_facing() {
        let err = DocketError::invalid_input("content").with_reason("Content is required!");
        assert_eq!(err.to_string(), "Content is required!");

        let err = DocketError::ItemNotFound { id: 5 };
        assert_eq!(err.to_string(), "Task with ID 5 not found");

        let err = Err::<(), _>(rusqlite::Error::QueryReturnedNoRows)
            .db_context("Failed to update item")
            .unwrap_err();
        assert!(err.to_string().starts_with("Database error: Failed to update item"));
    }
}
