//! Storage error types
//!
//! This module defines the errors raised while converting between the JSON
//! document and the domain model.

use thiserror::Error;

use core_kernel::CoreError;

/// Message reported when a strict load meets two persons with the same identity
pub const MESSAGE_DUPLICATE_PERSON: &str = "Persons list contains duplicate person(s).";

/// Errors that can occur while loading or saving the address book
#[derive(Debug, Error)]
pub enum StorageError {
    /// A stored person cannot become a valid domain person
    #[error("{0}")]
    DataConstraint(String),

    /// A strict load found two persons with the same identity
    #[error("{}", MESSAGE_DUPLICATE_PERSON)]
    DuplicatePerson,

    /// The document is not valid JSON or lacks a required field
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Storage settings could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

impl StorageError {
    /// Creates a data constraint error
    pub fn data_constraint(message: impl Into<String>) -> Self {
        StorageError::DataConstraint(message.into())
    }

    /// Creates the error for a required field that is absent
    ///
    /// # Example
    ///
    /// ```rust
    /// use infra_storage::StorageError;
    ///
    /// let error = StorageError::missing_field("Name");
    /// assert_eq!(error.to_string(), "Person's Name field is missing!");
    /// ```
    pub fn missing_field(field: &str) -> Self {
        StorageError::DataConstraint(format!("Person's {} field is missing!", field))
    }

    /// Checks if this error reports a person that violates data constraints
    pub fn is_data_constraint(&self) -> bool {
        matches!(self, StorageError::DataConstraint(_))
    }

    /// Checks if this error reports duplicate persons
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StorageError::DuplicatePerson)
    }
}

impl From<CoreError> for StorageError {
    fn from(error: CoreError) -> Self {
        StorageError::DataConstraint(error.message().to_string())
    }
}
