//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use domain_person::{Person, ReadOnlyAddressBook};
use infra_storage::StorageError;

/// Asserts that two address books hold the same persons, ignoring order
///
/// # Panics
///
/// Panics if the sizes differ or a person of `actual` has no structurally
/// equal counterpart in `expected`
pub fn assert_same_persons(actual: &impl ReadOnlyAddressBook, expected: &impl ReadOnlyAddressBook) {
    let actual = actual.person_list();
    let expected = expected.person_list();

    assert_eq!(
        actual.len(),
        expected.len(),
        "Address book sizes differ: actual={}, expected={}",
        actual.len(),
        expected.len()
    );

    let mut remaining: Vec<&Person> = expected.iter().collect();
    for person in actual {
        let position = remaining.iter().position(|p| *p == person);
        match position {
            Some(index) => {
                remaining.swap_remove(index);
            }
            None => panic!("Unexpected person in address book: {:?}", person),
        }
    }
}

/// Asserts that no two persons share an identity
pub fn assert_no_duplicates(address_book: &impl ReadOnlyAddressBook) {
    let persons = address_book.person_list();
    for (i, person) in persons.iter().enumerate() {
        if let Some(other) = persons[i + 1..].iter().find(|p| p.is_same_person(person)) {
            panic!("Duplicate persons found: {:?} and {:?}", person, other);
        }
    }
}

/// Asserts that a result failed with a data constraint error carrying `message`
pub fn assert_data_constraint<T: std::fmt::Debug>(result: Result<T, StorageError>, message: &str) {
    match result {
        Err(StorageError::DataConstraint(actual)) => assert_eq!(
            actual, message,
            "Data constraint message mismatch"
        ),
        other => panic!("Expected data constraint error '{}', got {:?}", message, other),
    }
}

/// Asserts that a result failed with the duplicate person error
pub fn assert_duplicate_person<T: std::fmt::Debug>(result: Result<T, StorageError>) {
    match result {
        Err(StorageError::DuplicatePerson) => {}
        other => panic!("Expected duplicate person error, got {:?}", other),
    }
}
