//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! address book test suite.
//!
//! # Modules
//!
//! - `fixtures`: The typical persons used across tests
//! - `builders`: Builder patterns for domain and stored persons
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators
//! - `logging`: One-time tracing setup for test binaries

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;
pub mod logging;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
pub use logging::*;
