//! Person Domain
//!
//! This crate holds the contact model of the address book: the validated
//! field types, the `Person` entity, and the `AddressBook` collection.
//!
//! # Duplicates
//!
//! The address book treats two persons with the same name as the same person.
//! Checked operations (`add_person`, `set_person`, `set_persons`) refuse to
//! create duplicates; `add_person_unchecked` exists for lenient bulk loads and
//! may leave duplicates behind.
//!
//! # Examples
//!
//! ```rust
//! use domain_person::{AddressBook, Address, Email, Name, Person, Phone, Tag};
//!
//! let alice = Person::new(
//!     Name::new("Alice Pauline").unwrap(),
//!     Phone::new("94351253").unwrap(),
//!     Email::new("alice@example.com").unwrap(),
//!     Address::empty(),
//!     vec![Tag::new("friends").unwrap()],
//! );
//!
//! let mut book = AddressBook::new();
//! book.add_person(alice.clone()).unwrap();
//! assert!(book.add_person(alice).is_err());
//! ```

pub mod address_book;
pub mod contact;
pub mod error;
pub mod person;
pub mod validation;

pub use address_book::{AddressBook, ReadOnlyAddressBook};
pub use contact::{Address, Email, Name, Phone, Tag};
pub use error::PersonError;
pub use person::Person;
pub use validation::{PersonFields, PersonValidator, ValidationResult};
