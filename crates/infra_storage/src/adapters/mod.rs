//! JSON Adapters
//!
//! This module provides the wire-side counterparts of the domain types,
//! translating between the JSON document and the person domain.
//!
//! # Architecture
//!
//! Each adapter:
//! - Holds raw field values exactly as they appear in the document
//! - Copies a domain value field by field when saving
//! - Repairs and validates its fields when loading
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_storage::adapters::JsonSerializableAddressBook;
//!
//! let stored: JsonSerializableAddressBook = serde_json::from_str(&json)?;
//! let address_book = stored.to_model(LoadPolicy::strict())?;
//! ```

pub mod address_book;
pub mod person;

pub use address_book::JsonSerializableAddressBook;
pub use person::{JsonAdaptedPerson, JsonAdaptedTag};
