//! Person domain errors
//!
//! This module defines the error types raised by the address book collection
//! and by field construction.

use thiserror::Error;

use core_kernel::CoreError;

/// Errors that can occur in the person domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersonError {
    /// Adding or editing would create two persons with the same identity
    #[error("Operation would result in duplicate persons")]
    DuplicatePerson,

    /// The person to edit or remove is not in the address book
    #[error("Person not found: {0}")]
    PersonNotFound(String),

    /// A field value violates its constraints
    #[error("Invalid person data: {0}")]
    InvalidData(#[from] CoreError),
}

impl PersonError {
    /// Checks if this error reports a duplicate person
    pub fn is_duplicate(&self) -> bool {
        matches!(self, PersonError::DuplicatePerson)
    }
}
