//! JSON document codec
//!
//! String-level entry points for reading and writing the address book
//! document. Callers own the file handling.

use tracing::{debug, instrument};

use domain_person::{AddressBook, ReadOnlyAddressBook};

use crate::adapters::JsonSerializableAddressBook;
use crate::error::StorageError;
use crate::policy::LoadPolicy;

/// Parses a document into its stored form
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the text is not JSON or lacks the
/// `persons` array.
pub fn parse_address_book(json: &str) -> Result<JsonSerializableAddressBook, StorageError> {
    Ok(serde_json::from_str(json)?)
}

/// Renders the stored form as pretty-printed JSON
pub fn to_json_string(stored: &JsonSerializableAddressBook) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(stored)?)
}

/// Parses a document and converts it into the domain address book
#[instrument(skip(json), fields(bytes = json.len()))]
pub fn load_address_book(json: &str, policy: LoadPolicy) -> Result<AddressBook, StorageError> {
    let stored = parse_address_book(json)?;
    debug!(persons = stored.len(), "Parsed address book document");
    stored.to_model(policy)
}

/// Renders a domain address book as a JSON document
#[instrument(skip(address_book), fields(persons = address_book.person_list().len()))]
pub fn save_address_book(address_book: &impl ReadOnlyAddressBook) -> Result<String, StorageError> {
    to_json_string(&JsonSerializableAddressBook::from_model(address_book))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TYPICAL: &str = r#"{
        "persons": [
            { "name": "Alice Pauline", "phone": "94351253", "email": "alice@example.com",
              "address": "123, Jurong West Ave 6, #08-111", "tags": ["friends"] },
            { "name": "Benson Meier", "phone": "98765432", "email": "johnd@example.com",
              "address": "311, Clementi Ave 2, #02-25", "tags": ["owesMoney", "friends"] }
        ]
    }"#;

    #[test]
    fn test_load_typical_document() {
        let book = load_address_book(TYPICAL, LoadPolicy::strict()).unwrap();

        assert_eq!(book.len(), 2);
        assert_eq!(book.person_list()[1].name().as_str(), "Benson Meier");
    }

    #[test]
    fn test_save_then_load() {
        let book = load_address_book(TYPICAL, LoadPolicy::strict()).unwrap();

        let json = save_address_book(&book).unwrap();
        let reloaded = load_address_book(&json, LoadPolicy::strict()).unwrap();

        assert_eq!(reloaded, book);
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let error = load_address_book("{ \"persons\": [", LoadPolicy::strict()).unwrap_err();
        assert!(matches!(error, StorageError::Serialization(_)));
    }

    #[test]
    fn test_missing_persons_is_serialization_error() {
        let error = parse_address_book(r#"{ "people": [] }"#).unwrap_err();
        assert!(matches!(error, StorageError::Serialization(_)));
    }

    #[test]
    fn test_saved_document_shape() {
        let book = load_address_book(TYPICAL, LoadPolicy::strict()).unwrap();
        let json = save_address_book(&book).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let persons = value["persons"].as_array().unwrap();
        assert_eq!(persons.len(), 2);
        // Tags come back sorted
        assert_eq!(persons[1]["tags"], serde_json::json!(["friends", "owesMoney"]));
    }
}
