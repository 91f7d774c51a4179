//! Pre-built Test Fixtures
//!
//! Provides ready-to-use persons and documents. These fixtures are designed
//! to be consistent and predictable for unit and integration tests.

use domain_person::{AddressBook, Person};

use crate::builders::PersonBuilder;

/// Fixture for the typical persons
pub struct PersonFixtures;

impl PersonFixtures {
    pub fn alice() -> Person {
        PersonBuilder::new()
            .with_name("Alice Pauline")
            .with_address("123, Jurong West Ave 6, #08-111")
            .with_email("alice@example.com")
            .with_phone("94351253")
            .with_tags(&["friends"])
            .build()
    }

    pub fn benson() -> Person {
        PersonBuilder::new()
            .with_name("Benson Meier")
            .with_address("311, Clementi Ave 2, #02-25")
            .with_email("johnd@example.com")
            .with_phone("98765432")
            .with_tags(&["owesMoney", "friends"])
            .build()
    }

    pub fn carl() -> Person {
        PersonBuilder::new()
            .with_name("Carl Kurz")
            .with_phone("95352563")
            .with_email("heinz@example.com")
            .with_address("wall street")
            .build()
    }

    pub fn daniel() -> Person {
        PersonBuilder::new()
            .with_name("Daniel Meier")
            .with_phone("87652533")
            .with_email("cornelia@example.com")
            .with_address("10th street")
            .with_tags(&["friends"])
            .build()
    }

    pub fn elle() -> Person {
        PersonBuilder::new()
            .with_name("Elle Meyer")
            .with_phone("9482224")
            .with_email("werner@example.com")
            .with_address("michegan ave")
            .build()
    }

    pub fn fiona() -> Person {
        PersonBuilder::new()
            .with_name("Fiona Kunz")
            .with_phone("9482427")
            .with_email("lydia@example.com")
            .with_address("little tokyo")
            .build()
    }

    pub fn george() -> Person {
        PersonBuilder::new()
            .with_name("George Best")
            .with_phone("9482442")
            .with_email("anna@example.com")
            .with_address("4th street")
            .build()
    }

    /// A person with every contact field left empty
    pub fn hoon() -> Person {
        PersonBuilder::new()
            .with_name("Hoon Meier")
            .with_phone("")
            .with_email("")
            .with_address("")
            .build()
    }

    /// The persons found in the typical document, in order
    pub fn typical_persons() -> Vec<Person> {
        vec![
            Self::alice(),
            Self::benson(),
            Self::carl(),
            Self::daniel(),
            Self::elle(),
            Self::fiona(),
            Self::george(),
        ]
    }

    /// An address book holding all typical persons
    pub fn typical_address_book() -> AddressBook {
        let mut address_book = AddressBook::new();
        for person in Self::typical_persons() {
            address_book
                .add_person(person)
                .expect("typical persons are unique");
        }
        address_book
    }
}

/// Fixture for raw JSON documents
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// Two valid, distinct persons
    pub fn typical() -> &'static str {
        r#"{
  "persons": [
    {
      "name": "Alice Pauline",
      "phone": "94351253",
      "email": "alice@example.com",
      "address": "123, Jurong West Ave 6, #08-111",
      "tags": ["friends"]
    },
    {
      "name": "Benson Meier",
      "phone": "98765432",
      "email": "johnd@example.com",
      "address": "311, Clementi Ave 2, #02-25",
      "tags": ["friends", "owesMoney"]
    }
  ]
}"#
    }

    /// The same person stored twice with different contact details
    pub fn duplicate_person() -> &'static str {
        r#"{
  "persons": [
    {
      "name": "Alice Pauline",
      "phone": "94351253",
      "email": "alice@example.com",
      "address": "123, Jurong West Ave 6, #08-111",
      "tags": ["friends"]
    },
    {
      "name": "Alice Pauline",
      "phone": "94351253",
      "email": "pauline@example.com",
      "address": "4th street"
    }
  ]
}"#
    }

    /// One valid person followed by one with an invalid name
    pub fn invalid_person() -> &'static str {
        r#"{
  "persons": [
    {
      "name": "Carl Kurz",
      "phone": "95352563",
      "email": "heinz@example.com",
      "address": "wall street"
    },
    {
      "name": "Hans Muster*",
      "phone": "9482424",
      "email": "hans@example.com",
      "address": "4th street"
    }
  ]
}"#
    }

    /// Persons whose contact fields need repair
    pub fn repairable_contacts() -> &'static str {
        r#"{
  "persons": [
    {
      "name": "Daniel Meier",
      "phone": null,
      "email": "cornelia at example.com",
      "address": "10th street",
      "tags": ["friends"]
    },
    {
      "name": "Elle Meyer",
      "phone": "94-82-224",
      "address": "   "
    }
  ]
}"#
    }

    /// A document without the `persons` array
    pub fn missing_persons() -> &'static str {
        r#"{ "people": [] }"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_person::ReadOnlyAddressBook;

    #[test]
    fn test_typical_address_book_holds_all_persons() {
        let book = PersonFixtures::typical_address_book();
        assert_eq!(book.person_list(), PersonFixtures::typical_persons().as_slice());
    }

    #[test]
    fn test_hoon_has_no_contact_info() {
        assert!(PersonFixtures::hoon().has_missing_contact_info());
    }
}
