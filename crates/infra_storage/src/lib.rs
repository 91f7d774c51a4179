//! Infrastructure Storage Layer
//!
//! This crate converts the address book between its in-memory domain model
//! and the JSON document it is stored as.
//!
//! # Architecture
//!
//! - [`adapters`]: wire types mirroring the domain (`JsonSerializableAddressBook`,
//!   `JsonAdaptedPerson`) and the repair rules applied when loading
//! - [`policy`]: how a load treats invalid and duplicate persons
//! - [`codec`]: string-level parse and render helpers
//! - [`config`]: storage settings from the environment
//!
//! # Example
//!
//! ```rust
//! use domain_person::ReadOnlyAddressBook;
//! use infra_storage::{load_address_book, save_address_book, LoadPolicy};
//!
//! let json = r#"{ "persons": [ { "name": "Alice", "phone": null, "tags": [] } ] }"#;
//! let book = load_address_book(json, LoadPolicy::strict()).unwrap();
//!
//! // The missing phone was filled with a placeholder
//! assert_eq!(book.person_list()[0].phone().as_str(), "000");
//!
//! let saved = save_address_book(&book).unwrap();
//! assert!(saved.contains("\"persons\""));
//! ```

pub mod adapters;
pub mod codec;
pub mod config;
pub mod error;
pub mod policy;

pub use adapters::{JsonAdaptedPerson, JsonAdaptedTag, JsonSerializableAddressBook};
pub use codec::{load_address_book, parse_address_book, save_address_book, to_json_string};
pub use config::StorageConfig;
pub use error::{StorageError, MESSAGE_DUPLICATE_PERSON};
pub use policy::{LoadPolicy, OnDuplicate, OnInvalid};
