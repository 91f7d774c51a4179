//! JSON-friendly person
//!
//! `JsonAdaptedPerson` mirrors [`Person`] with every field kept as raw,
//! nullable text, so a document with missing or malformed values still
//! deserializes. The repair operations defined here decide how such a record
//! is brought back within the domain's rules before conversion.
//!
//! # Repair policy
//!
//! - An empty contact field (absent, `null`, or blank) is filled with a
//!   placeholder: see [`PLACEHOLDER_PHONE`], [`PLACEHOLDER_EMAIL`],
//!   [`PLACEHOLDER_ADDRESS`].
//! - A contact field holding a malformed value is cleared to `""`, which the
//!   domain reads as "not provided".
//! - Name and tags are never repaired.

use serde::{Deserialize, Serialize};

use domain_person::{
    Address, Email, Name, Person, PersonFields, PersonValidator, Phone, Tag, ValidationResult,
};

use crate::error::StorageError;

pub const PLACEHOLDER_PHONE: &str = "000";
pub const PLACEHOLDER_EMAIL: &str = "unknown@example.com";
pub const PLACEHOLDER_ADDRESS: &str = "Not provided";

/// JSON-friendly version of [`Tag`], stored as a bare string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonAdaptedTag {
    tag_name: String,
}

impl JsonAdaptedTag {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Converts into the domain tag
    pub fn to_model_type(&self) -> Result<Tag, StorageError> {
        Ok(Tag::new(self.tag_name.as_str())?)
    }
}

impl From<&Tag> for JsonAdaptedTag {
    fn from(tag: &Tag) -> Self {
        Self::new(tag.as_str())
    }
}

/// JSON-friendly version of [`Person`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonAdaptedPerson {
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    #[serde(default)]
    tags: Vec<JsonAdaptedTag>,
}

impl JsonAdaptedPerson {
    /// Creates a stored person from raw field values
    pub fn new(
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
        address: Option<String>,
        tags: Vec<JsonAdaptedTag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn tags(&self) -> &[JsonAdaptedTag] {
        &self.tags
    }

    /// Checks every field, reporting contact problems as warnings
    pub fn validate(&self) -> ValidationResult {
        let tags: Vec<&str> = self.tags.iter().map(JsonAdaptedTag::tag_name).collect();
        PersonValidator::validate_fields(&PersonFields {
            name: self.name(),
            phone: self.phone(),
            email: self.email(),
            address: self.address(),
            tags: &tags,
        })
    }

    /// Returns true if the required fields (name and tags) are valid
    ///
    /// Contact fields do not count: they can always be repaired.
    pub fn is_valid_person(&self) -> bool {
        self.validate().is_valid
    }

    /// Returns true if any contact field is absent or blank
    pub fn has_empty_contact_info(&self) -> bool {
        [&self.phone, &self.email, &self.address]
            .into_iter()
            .any(|field| is_blank(field))
    }

    /// Replaces each absent or blank contact field with its placeholder
    pub fn fill_empty_contact_info(&mut self) {
        fill_if_blank(&mut self.phone, PLACEHOLDER_PHONE);
        fill_if_blank(&mut self.email, PLACEHOLDER_EMAIL);
        fill_if_blank(&mut self.address, PLACEHOLDER_ADDRESS);
    }

    /// Empties each contact field that holds a malformed value
    pub fn clear_invalid_contact_info(&mut self) {
        clear_if_invalid(&mut self.phone, Phone::is_valid_phone);
        clear_if_invalid(&mut self.email, Email::is_valid_email);
        clear_if_invalid(&mut self.address, Address::is_valid_address);
    }

    /// Converts into the domain person
    ///
    /// # Errors
    ///
    /// Returns `StorageError::DataConstraint` if a field is absent or violates
    /// its domain rule.
    pub fn to_model_type(&self) -> Result<Person, StorageError> {
        let tags = self
            .tags
            .iter()
            .map(JsonAdaptedTag::to_model_type)
            .collect::<Result<Vec<_>, _>>()?;

        let name = Name::new(required(&self.name, "Name")?)?;
        let phone = Phone::new(required(&self.phone, "Phone")?)?;
        let email = Email::new(required(&self.email, "Email")?)?;
        let address = Address::new(required(&self.address, "Address")?)?;

        Ok(Person::new(name, phone, email, address, tags))
    }
}

impl From<&Person> for JsonAdaptedPerson {
    fn from(source: &Person) -> Self {
        Self {
            name: Some(source.name().to_string()),
            phone: Some(source.phone().to_string()),
            email: Some(source.email().to_string()),
            address: Some(source.address().to_string()),
            tags: source.tags().iter().map(JsonAdaptedTag::from).collect(),
        }
    }
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, |value| value.trim().is_empty())
}

fn fill_if_blank(field: &mut Option<String>, placeholder: &str) {
    if is_blank(field) {
        *field = Some(placeholder.to_string());
    }
}

fn clear_if_invalid(field: &mut Option<String>, is_valid: fn(&str) -> bool) {
    if let Some(value) = field {
        if !value.is_empty() && !is_valid(value) {
            value.clear();
        }
    }
}

fn required<'a>(field: &'a Option<String>, label: &str) -> Result<&'a str, StorageError> {
    field
        .as_deref()
        .ok_or_else(|| StorageError::missing_field(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn benson() -> JsonAdaptedPerson {
        JsonAdaptedPerson::new(
            Some("Benson Meier".to_string()),
            Some("98765432".to_string()),
            Some("johnd@example.com".to_string()),
            Some("311, Clementi Ave 2, #02-25".to_string()),
            vec![JsonAdaptedTag::new("owesMoney"), JsonAdaptedTag::new("friends")],
        )
    }

    #[test]
    fn test_valid_person_converts() {
        let person = benson().to_model_type().unwrap();

        assert_eq!(person.name().as_str(), "Benson Meier");
        assert_eq!(person.phone().as_str(), "98765432");
        assert_eq!(person.tags().len(), 2);
    }

    #[test]
    fn test_round_trip_from_person() {
        let person = benson().to_model_type().unwrap();
        let adapted = JsonAdaptedPerson::from(&person);

        assert_eq!(adapted.to_model_type().unwrap(), person);
    }

    #[test]
    fn test_missing_name_fails() {
        let mut adapted = benson();
        adapted.name = None;

        let error = adapted.to_model_type().unwrap_err();
        assert_eq!(error.to_string(), "Person's Name field is missing!");
    }

    #[test]
    fn test_invalid_name_fails() {
        let mut adapted = benson();
        adapted.name = Some("R@chel".to_string());

        let error = adapted.to_model_type().unwrap_err();
        assert_eq!(error.to_string(), Name::MESSAGE_CONSTRAINTS);
        assert!(!adapted.is_valid_person());
    }

    #[test]
    fn test_missing_contact_field_fails_without_repair() {
        let mut adapted = benson();
        adapted.phone = None;

        let error = adapted.to_model_type().unwrap_err();
        assert_eq!(error.to_string(), "Person's Phone field is missing!");
    }

    #[test]
    fn test_invalid_tag_fails() {
        let mut adapted = benson();
        adapted.tags.push(JsonAdaptedTag::new("#friend"));

        let error = adapted.to_model_type().unwrap_err();
        assert_eq!(error.to_string(), Tag::MESSAGE_CONSTRAINTS);
        assert!(!adapted.is_valid_person());
    }

    #[test]
    fn test_contact_problems_keep_person_valid() {
        let mut adapted = benson();
        adapted.phone = None;
        adapted.email = Some("not an email".to_string());

        assert!(adapted.is_valid_person());
        assert_eq!(adapted.validate().warnings.len(), 2);
    }

    #[test]
    fn test_has_empty_contact_info() {
        assert!(!benson().has_empty_contact_info());

        let mut adapted = benson();
        adapted.address = Some("   ".to_string());
        assert!(adapted.has_empty_contact_info());

        let mut adapted = benson();
        adapted.email = None;
        assert!(adapted.has_empty_contact_info());
    }

    #[test]
    fn test_fill_empty_contact_info() {
        let mut adapted = benson();
        adapted.phone = None;
        adapted.email = Some(String::new());
        adapted.address = Some(" ".to_string());

        adapted.fill_empty_contact_info();

        assert_eq!(adapted.phone(), Some(PLACEHOLDER_PHONE));
        assert_eq!(adapted.email(), Some(PLACEHOLDER_EMAIL));
        assert_eq!(adapted.address(), Some(PLACEHOLDER_ADDRESS));
        assert!(!adapted.has_empty_contact_info());
    }

    #[test]
    fn test_fill_leaves_present_fields_alone() {
        let mut adapted = benson();
        adapted.email = Some("bad email".to_string());
        adapted.phone = None;

        adapted.fill_empty_contact_info();

        assert_eq!(adapted.email(), Some("bad email"));
        assert_eq!(adapted.phone(), Some(PLACEHOLDER_PHONE));
    }

    #[test]
    fn test_placeholders_satisfy_domain_rules() {
        assert!(Phone::is_valid_phone(PLACEHOLDER_PHONE));
        assert!(Email::is_valid_email(PLACEHOLDER_EMAIL));
        assert!(Address::is_valid_address(PLACEHOLDER_ADDRESS));
    }

    #[test]
    fn test_clear_invalid_contact_info() {
        let mut adapted = benson();
        adapted.phone = Some("12".to_string());
        adapted.email = Some("bad email".to_string());

        adapted.clear_invalid_contact_info();

        assert_eq!(adapted.phone(), Some(""));
        assert_eq!(adapted.email(), Some(""));
        assert_eq!(adapted.address(), Some("311, Clementi Ave 2, #02-25"));

        let person = adapted.to_model_type().unwrap();
        assert!(person.phone().is_empty());
        assert!(person.email().is_empty());
    }

    #[test]
    fn test_clear_leaves_absent_fields_absent() {
        let mut adapted = benson();
        adapted.address = None;

        adapted.clear_invalid_contact_info();

        assert_eq!(adapted.address(), None);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(benson()).unwrap();

        assert_eq!(json["name"], "Benson Meier");
        assert_eq!(json["tags"], serde_json::json!(["owesMoney", "friends"]));
    }

    #[test]
    fn test_deserialize_tolerates_null_and_missing() {
        let adapted: JsonAdaptedPerson =
            serde_json::from_str(r#"{"name":"Carl Kurz","phone":null}"#).unwrap();

        assert_eq!(adapted.name(), Some("Carl Kurz"));
        assert_eq!(adapted.phone(), None);
        assert_eq!(adapted.email(), None);
        assert!(adapted.tags().is_empty());
    }
}
