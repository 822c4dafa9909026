//! Error types for the garden planner library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for all garden planner operations.
///
/// Every variant renders as a single user-facing message; the planner records
/// that message as its current error, replacing whatever was there before.
#[derive(Error, Debug)]
pub enum GardenError {
    /// Invalid input validation errors (malformed region code, bad date)
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Non-success response or transport failure from the planting API
    #[error("{message}")]
    DataFetch { message: String },
    /// Add-to-garden was attempted without a selected crop
    #[error("Please select a crop first")]
    NoSelection,
    /// Add-to-garden was attempted without a planting date
    #[error("Please enter a planting date")]
    MissingDate,
    /// No fetched crop matches the requested name
    #[error("Crop '{name}' not found in the planting calendar")]
    CropNotFound { name: String },
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

    /// Creates a data fetch error carrying a user-visible message.
    pub fn data_fetch(message: impl Into<String>) -> Self {
        Self::DataFetch {
            message: message.into(),
        }
    }

    /// The message shown to the user: the bare reason for validation
    /// failures, the full display string otherwise.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput { reason, .. } => reason.clone(),
            other => other.to_string(),
        }
    }

    /// Returns true for failures caused by user input rather than the
    /// environment (network, disk).
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::NoSelection | Self::MissingDate | Self::CropNotFound { .. }
        )
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to GardenError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GardenError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| GardenError::database(message).with_source(e))
    }
}

/// Result type alias for garden planner operations
pub type Result<T> = std::result::Result<T, GardenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(GardenError::NoSelection.to_string(), "Please select a crop first");
        assert_eq!(GardenError::MissingDate.to_string(), "Please enter a planting date");
        assert_eq!(
            GardenError::data_fetch("Error fetching weather data").to_string(),
            "Error fetching weather data"
        );
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = GardenError::invalid_input("region").with_reason("bad code");
        assert!(matches!(err, GardenError::InvalidInput { ref field, .. } if field == "region"));
        assert!(err.is_user_error());
        assert_eq!(err.user_message(), "bad code");
        assert_eq!(err.to_string(), "Invalid input for field 'region': bad code");
        assert!(!GardenError::data_fetch("down").is_user_error());
    }
}
