//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A value violates its constraints; carries the constraint message
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    /// Returns the bare message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            CoreError::Validation(msg) => msg,
        }
    }
}
