//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use domain_person::{Address, AddressBook, Email, Name, Person, Phone, Tag};
use infra_storage::{JsonAdaptedPerson, JsonAdaptedTag};
use proptest::prelude::*;

/// Strategy for generating valid names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,20}"
}

/// Strategy for generating valid phone numbers
pub fn phone_strategy() -> impl Strategy<Value = String> {
    "[0-9]{3,12}"
}

/// Strategy for generating valid email addresses
pub fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9]{0,10}", "[a-z]{1,10}", prop_oneof![Just("com"), Just("org"), Just("sg")])
        .prop_map(|(local, domain, tld)| format!("{}@{}.{}", local, domain, tld))
}

/// Strategy for generating valid addresses
pub fn address_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9#][A-Za-z0-9 ,#-]{0,30}"
}

/// Strategy for generating valid tag names
pub fn tag_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{1,12}"
}

/// Strategy for generating malformed phone numbers
pub fn invalid_phone_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{1,2}", "[0-9]{2,6}[a-z -][0-9]{1,6}"]
}

/// Strategy for generating valid persons with every contact field provided
pub fn valid_person_strategy() -> impl Strategy<Value = Person> {
    (
        name_strategy(),
        phone_strategy(),
        email_strategy(),
        address_strategy(),
        prop::collection::vec(tag_strategy(), 0..4),
    )
        .prop_map(|(name, phone, email, address, tags)| {
            Person::new(
                Name::new(name).expect("strategy name is valid"),
                Phone::new(phone).expect("strategy phone is valid"),
                Email::new(email).expect("strategy email is valid"),
                Address::new(address).expect("strategy address is valid"),
                tags.into_iter()
                    .map(|t| Tag::new(t).expect("strategy tag is valid")),
            )
        })
}

/// Strategy for generating address books without duplicates
pub fn unique_address_book_strategy(max_persons: usize) -> impl Strategy<Value = AddressBook> {
    prop::collection::vec(valid_person_strategy(), 0..max_persons).prop_map(|persons| {
        let mut address_book = AddressBook::new();
        for person in persons {
            // Later persons sharing a name are simply skipped
            let _ = address_book.add_person(person);
        }
        address_book
    })
}

/// Strategy for generating stored persons with arbitrary contact fields
///
/// Name and tags are always valid, so every generated record survives a load.
pub fn repairable_stored_person_strategy() -> impl Strategy<Value = JsonAdaptedPerson> {
    let raw_contact = || proptest::option::of(".{0,16}");
    (
        name_strategy(),
        raw_contact(),
        raw_contact(),
        raw_contact(),
        prop::collection::vec(tag_strategy(), 0..3),
    )
        .prop_map(|(name, phone, email, address, tags)| {
            JsonAdaptedPerson::new(
                Some(name),
                phone,
                email,
                address,
                tags.into_iter().map(JsonAdaptedTag::new).collect(),
            )
        })
}
