//! JSON-serializable address book
//!
//! `JsonSerializableAddressBook` is the on-disk shape of the address book:
//!
//! ```json
//! { "persons": [ { "name": "...", "phone": "...", ... } ] }
//! ```
//!
//! It is built either by deserializing a document or by snapshotting a domain
//! [`AddressBook`], and is consumed once in the other direction.
//!
//! # Loading
//!
//! [`JsonSerializableAddressBook::to_model`] converts every stored person in
//! order, applying the repair steps of [`JsonAdaptedPerson`] first. The
//! [`LoadPolicy`] decides what happens to invalid persons and to duplicates.
//!
//! Under [`OnDuplicate::Skip`](crate::policy::OnDuplicate::Skip) the result can
//! contain several persons with the same identity. This mirrors the lenient
//! import behaviour callers rely on; anyone needing uniqueness must re-check
//! the result.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use domain_person::{AddressBook, ReadOnlyAddressBook};

use crate::adapters::person::JsonAdaptedPerson;
use crate::error::StorageError;
use crate::policy::LoadPolicy;

/// Name of the document's root object
pub const ROOT_NAME: &str = "addressbook";

/// An address book that is serializable to JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSerializableAddressBook {
    persons: Vec<JsonAdaptedPerson>,
}

impl JsonSerializableAddressBook {
    /// Creates a stored address book holding `persons`
    pub fn new(persons: Vec<JsonAdaptedPerson>) -> Self {
        Self { persons }
    }

    /// Snapshots a domain address book
    ///
    /// Later changes to `source` do not affect the result.
    pub fn from_model(source: &impl ReadOnlyAddressBook) -> Self {
        Self {
            persons: source
                .person_list()
                .iter()
                .map(JsonAdaptedPerson::from)
                .collect(),
        }
    }

    pub fn persons(&self) -> &[JsonAdaptedPerson] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Converts into the domain address book
    ///
    /// Each stored person goes through, in order:
    ///
    /// 1. dropped if invalid and the policy drops invalid persons
    /// 2. empty contact fields filled with placeholders
    /// 3. malformed contact fields cleared
    /// 4. conversion to a domain person
    /// 5. duplicate check, unless the policy skips it
    ///
    /// The stored persons themselves are left untouched.
    ///
    /// # Errors
    ///
    /// - `StorageError::DataConstraint` if a person cannot be converted
    /// - `StorageError::DuplicatePerson` if duplicates are rejected and found
    ///
    /// No partial address book is returned on error.
    #[instrument(skip(self, policy), fields(persons = self.persons.len(), policy = %policy))]
    pub fn to_model(&self, policy: LoadPolicy) -> Result<AddressBook, StorageError> {
        let mut address_book = AddressBook::new();
        let mut dropped = 0usize;

        for (index, stored) in self.persons.iter().enumerate() {
            if policy.drops_invalid() && !stored.is_valid_person() {
                debug!(index, "Dropping invalid person");
                dropped += 1;
                continue;
            }

            let mut adapted = stored.clone();
            if adapted.has_empty_contact_info() {
                debug!(index, "Filling empty contact info");
                adapted.fill_empty_contact_info();
            }
            adapted.clear_invalid_contact_info();

            let person = adapted.to_model_type()?;

            if address_book.has_person(&person) {
                if policy.rejects_duplicates() {
                    return Err(StorageError::DuplicatePerson);
                }
                warn!(index, name = %person.name(), "Keeping duplicate person");
            }
            address_book.add_person_unchecked(person);
        }

        info!(loaded = address_book.len(), dropped, "Address book converted");
        Ok(address_book)
    }

    /// Converts using the single "skip duplicate" switch
    ///
    /// `true` drops invalid persons and keeps duplicates, `false` fails on
    /// either. See [`LoadPolicy::from_skip_duplicate`].
    pub fn to_model_type(&self, skip_duplicate: bool) -> Result<AddressBook, StorageError> {
        self.to_model(LoadPolicy::from_skip_duplicate(skip_duplicate))
    }

    /// Appends every person of `source` to `target`
    ///
    /// Persons are appended verbatim: nothing is deduplicated or validated.
    ///
    /// # Returns
    ///
    /// `target`, for chaining
    pub fn merge_address_book(target: &mut Self, source: Self) -> &mut Self {
        target.persons.extend(source.persons);
        target
    }
}

impl<R: ReadOnlyAddressBook> From<&R> for JsonSerializableAddressBook {
    fn from(source: &R) -> Self {
        Self::from_model(source)
    }
}
