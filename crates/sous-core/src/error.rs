//! Error types for the sous library.
//!
//! The cooking session state machine itself never fails; these errors come
//! from loading recipes (the local store, import files, configuration).

use std::path::PathBuf;

use thiserror::Error;

/// Failures while storing or loading recipes.
#[derive(Error, Debug)]
pub enum SousError {
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    #[error("Recipe with ID {id} not found")]
    RecipeNotFound { id: u64 },
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// No data directory could be resolved for the default database path.
    #[error("Data directory error: {0}")]
    DataDirectory(String),
    #[error("Invalid recipe field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// An imported recipe file is not valid recipe JSON.
    #[error("Malformed recipe JSON: {source}")]
    RecipeFormat {
        #[from]
        source: serde_json::Error,
    },
    /// A blocking store task panicked or was cancelled.
    #[error("Background task failed: {0}")]
    TaskFailed(String),
}

/// Finishes an [`SousError::InvalidInput`] once the reason is known.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    pub fn with_reason(self, reason: impl Into<String>) -> SousError {
        SousError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl SousError {
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns true when the recipe does not exist, as opposed to a transient
    /// failure while fetching it.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SousError::RecipeNotFound { .. })
    }

    pub(crate) fn join_error(e: tokio::task::JoinError) -> Self {
        SousError::TaskFailed(e.to_string())
    }
}

/// Attaches a message to a failed SQLite call.
pub trait DatabaseResultExt<T> {
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|source| SousError::Database {
            message: message.to_string(),
            source,
        })
    }
}

pub type Result<T> = std::result::Result<T, SousError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinct_from_transient() {
        assert!(SousError::RecipeNotFound { id: 7 }.is_not_found());

        let transient = Err::<(), _>(rusqlite::Error::InvalidQuery)
            .db_context("Failed to query recipe")
            .unwrap_err();
        assert!(!transient.is_not_found());
        assert!(!SousError::TaskFailed("cancelled".to_string()).is_not_found());
        assert!(transient.to_string().contains("Failed to query recipe"));
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = SousError::invalid_input("title").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid recipe field 'title': must not be empty"
        );
    }
}
