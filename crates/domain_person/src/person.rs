//! Person entity
//!
//! A `Person` is a contact in the address book. All fields are validated
//! value types, so an instance is valid by construction.
//!
//! # Identity vs. equality
//!
//! Two notions of "same" exist:
//!
//! - **Structural equality** (`PartialEq`): every field matches.
//! - **Identity** ([`Person::is_same_person`]): the names match. The address book
//!   uses identity to decide whether a person is a duplicate, so editing a
//!   contact's phone number does not make it a different person.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::contact::{Address, Email, Name, Phone, Tag};

/// A contact in the address book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
}

impl Person {
    /// Creates a new person from validated fields
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Tags in sorted order
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns true if both persons have the same name
    ///
    /// This is the identity relation used for duplicate detection, weaker
    /// than structural equality.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }

    /// Returns true if any contact field is not provided
    pub fn has_missing_contact_info(&self) -> bool {
        self.phone.is_empty() || self.email.is_empty() || self.address.is_empty()
    }
}
