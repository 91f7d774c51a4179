//! The address book collection
//!
//! `AddressBook` keeps persons in insertion order and, through its checked
//! operations, guarantees that no two entries share an identity
//! (see [`Person::is_same_person`]).

use serde::Serialize;

use crate::error::PersonError;
use crate::person::Person;

/// Read-only view of an address book
pub trait ReadOnlyAddressBook {
    /// Returns the persons in insertion order
    fn person_list(&self) -> &[Person];
}

/// The in-memory collection of persons
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    /// Creates an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an address book holding a copy of `source`'s persons
    pub fn with_persons(source: &impl ReadOnlyAddressBook) -> Self {
        Self {
            persons: source.person_list().to_vec(),
        }
    }

    /// Replaces the contents with a copy of `source`'s persons
    pub fn reset_data(&mut self, source: &impl ReadOnlyAddressBook) {
        self.persons = source.person_list().to_vec();
    }

    /// Replaces the contents with `persons`
    ///
    /// # Errors
    ///
    /// Returns `PersonError::DuplicatePerson` if `persons` contains two persons
    /// with the same identity; the address book is left unchanged.
    pub fn set_persons(&mut self, persons: Vec<Person>) -> Result<(), PersonError> {
        if !persons_are_unique(&persons) {
            return Err(PersonError::DuplicatePerson);
        }
        self.persons = persons;
        Ok(())
    }

    /// Returns true if a person with the same identity is present
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    /// Adds a person
    ///
    /// # Errors
    ///
    /// Returns `PersonError::DuplicatePerson` if a person with the same
    /// identity already exists.
    pub fn add_person(&mut self, person: Person) -> Result<(), PersonError> {
        if self.has_person(&person) {
            return Err(PersonError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    /// Adds a person without the uniqueness check
    ///
    /// The address book may hold duplicates afterwards. Only lenient bulk
    /// loads should call this.
    pub fn add_person_unchecked(&mut self, person: Person) {
        self.persons.push(person);
    }

    /// Replaces `target` with `edited`
    ///
    /// # Errors
    ///
    /// - `PersonError::PersonNotFound` if `target` is not present
    /// - `PersonError::DuplicatePerson` if `edited` has the identity of another entry
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), PersonError> {
        let index = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or_else(|| PersonError::PersonNotFound(target.name().to_string()))?;

        if !target.is_same_person(&edited) && self.has_person(&edited) {
            return Err(PersonError::DuplicatePerson);
        }

        self.persons[index] = edited;
        Ok(())
    }

    /// Removes `key`
    ///
    /// # Errors
    ///
    /// Returns `PersonError::PersonNotFound` if `key` is not present.
    pub fn remove_person(&mut self, key: &Person) -> Result<Person, PersonError> {
        let index = self
            .persons
            .iter()
            .position(|p| p == key)
            .ok_or_else(|| PersonError::PersonNotFound(key.name().to_string()))?;
        Ok(self.persons.remove(index))
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Iterates over the persons in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.persons.iter()
    }
}

impl ReadOnlyAddressBook for AddressBook {
    fn person_list(&self) -> &[Person] {
        &self.persons
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.persons.iter()
    }
}

fn persons_are_unique(persons: &[Person]) -> bool {
    persons
        .iter()
        .enumerate()
        .all(|(i, p)| persons[i + 1..].iter().all(|q| !p.is_same_person(q)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{Address, Email, Name, Phone, Tag};

    fn person(name: &str, phone: &str) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            Phone::new(phone).unwrap(),
            Email::new("someone@example.com").unwrap(),
            Address::new("Wall Street").unwrap(),
            vec![Tag::new("friends").unwrap()],
        )
    }

    #[test]
    fn test_new_address_book_is_empty() {
        let book = AddressBook::new();
        assert!(book.is_empty());
        assert_eq!(book.person_list(), &[] as &[Person]);
    }

    #[test]
    fn test_add_person_rejects_same_identity() {
        let mut book = AddressBook::new();
        book.add_person(person("Alice", "111")).unwrap();

        let err = book.add_person(person("Alice", "222")).unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_person_unchecked_keeps_duplicates() {
        let mut book = AddressBook::new();
        book.add_person_unchecked(person("Alice", "111"));
        book.add_person_unchecked(person("Alice", "111"));

        assert_eq!(book.len(), 2);
        assert!(book.has_person(&person("Alice", "999")));
    }

    #[test]
    fn test_set_persons_rejects_duplicates() {
        let mut book = AddressBook::new();
        book.add_person(person("Carl", "333")).unwrap();

        let result = book.set_persons(vec![person("Alice", "111"), person("Alice", "222")]);
        assert_eq!(result, Err(PersonError::DuplicatePerson));
        assert_eq!(book.person_list(), &[person("Carl", "333")]);
    }

    #[test]
    fn test_set_person_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_person(person("Alice", "111")).unwrap();
        book.add_person(person("Bob", "222")).unwrap();

        book.set_person(&person("Alice", "111"), person("Alice", "999")).unwrap();
        assert_eq!(book.person_list()[0], person("Alice", "999"));

        let err = book
            .set_person(&person("Alice", "999"), person("Bob", "000"))
            .unwrap_err();
        assert!(err.is_duplicate());
    }

    #[test]
    fn test_set_person_missing_target() {
        let mut book = AddressBook::new();
        let err = book
            .set_person(&person("Ghost", "111"), person("Ghost", "222"))
            .unwrap_err();
        assert!(matches!(err, PersonError::PersonNotFound(name) if name == "Ghost"));
    }

    #[test]
    fn test_remove_person() {
        let mut book = AddressBook::new();
        book.add_person(person("Alice", "111")).unwrap();

        let removed = book.remove_person(&person("Alice", "111")).unwrap();
        assert_eq!(removed.name().as_str(), "Alice");
        assert!(book.is_empty());
        assert!(book.remove_person(&person("Alice", "111")).is_err());
    }

    #[test]
    fn test_with_persons_copies() {
        let mut original = AddressBook::new();
        original.add_person(person("Alice", "111")).unwrap();

        let copy = AddressBook::with_persons(&original);
        original.add_person(person("Bob", "222")).unwrap();

        assert_eq!(copy.len(), 1);
        assert_eq!(original.len(), 2);
    }

    #[test]
    fn test_reset_data_replaces_contents() {
        let mut source = AddressBook::new();
        source.add_person(person("Bob", "222")).unwrap();

        let mut book = AddressBook::new();
        book.add_person(person("Alice", "111")).unwrap();
        book.reset_data(&source);

        assert_eq!(book, source);
    }
}
