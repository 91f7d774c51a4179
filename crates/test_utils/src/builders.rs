//! Test Data Builders
//!
//! Provides builder patterns for constructing test persons with sensible
//! defaults. These builders allow tests to specify only the relevant fields
//! while using defaults for everything else.

use domain_person::{Address, Email, Name, Person, Phone, Tag};
use infra_storage::{JsonAdaptedPerson, JsonAdaptedTag};

pub const DEFAULT_NAME: &str = "Amy Bee";
pub const DEFAULT_PHONE: &str = "85355255";
pub const DEFAULT_EMAIL: &str = "amy@gmail.com";
pub const DEFAULT_ADDRESS: &str = "123, Jurong West Ave 6, #08-111";

/// Builder for domain persons
///
/// Panics on invalid field values, which makes a broken fixture fail loudly
/// at the line that built it.
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    name: String,
    phone: String,
    email: String,
    address: String,
    tags: Vec<String>,
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            phone: DEFAULT_PHONE.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            address: DEFAULT_ADDRESS.to_string(),
            tags: Vec::new(),
        }
    }

    /// Starts from an existing person
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: person.name().to_string(),
            phone: person.phone().to_string(),
            email: person.email().to_string(),
            address: person.address().to_string(),
            tags: person.tags().iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Sets the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the phone
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Replaces the tags
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Builds the person
    pub fn build(self) -> Person {
        Person::new(
            Name::new(self.name).expect("builder name must be valid"),
            Phone::new(self.phone).expect("builder phone must be valid"),
            Email::new(self.email).expect("builder email must be valid"),
            Address::new(self.address).expect("builder address must be valid"),
            self.tags
                .into_iter()
                .map(|t| Tag::new(t).expect("builder tag must be valid")),
        )
    }
}

/// Builder for stored persons, which may hold any raw value
#[derive(Debug, Clone)]
pub struct JsonAdaptedPersonBuilder {
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    address: Option<String>,
    tags: Vec<String>,
}

impl Default for JsonAdaptedPersonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonAdaptedPersonBuilder {
    /// Creates a new builder with default, valid values
    pub fn new() -> Self {
        Self {
            name: Some(DEFAULT_NAME.to_string()),
            phone: Some(DEFAULT_PHONE.to_string()),
            email: Some(DEFAULT_EMAIL.to_string()),
            address: Some(DEFAULT_ADDRESS.to_string()),
            tags: Vec::new(),
        }
    }

    /// Starts from the stored form of an existing person
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: Some(person.name().to_string()),
            phone: Some(person.phone().to_string()),
            email: Some(person.email().to_string()),
            address: Some(person.address().to_string()),
            tags: person.tags().iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Sets the raw name, `None` for a missing field
    pub fn with_name(mut self, name: Option<&str>) -> Self {
        self.name = name.map(str::to_string);
        self
    }

    /// Sets the raw phone, `None` for a missing field
    pub fn with_phone(mut self, phone: Option<&str>) -> Self {
        self.phone = phone.map(str::to_string);
        self
    }

    /// Sets the raw email, `None` for a missing field
    pub fn with_email(mut self, email: Option<&str>) -> Self {
        self.email = email.map(str::to_string);
        self
    }

    /// Sets the raw address, `None` for a missing field
    pub fn with_address(mut self, address: Option<&str>) -> Self {
        self.address = address.map(str::to_string);
        self
    }

    /// Replaces the raw tags
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Builds the stored person
    pub fn build(self) -> JsonAdaptedPerson {
        JsonAdaptedPerson::new(
            self.name,
            self.phone,
            self.email,
            self.address,
            self.tags.into_iter().map(JsonAdaptedTag::new).collect(),
        )
    }
}
